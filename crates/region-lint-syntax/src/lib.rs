//! # region-lint-syntax
//!
//! A lossless C# syntax tree using [Rowan] + [Logos], following the
//! [rust-analyzer] architecture model.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## What the Tree Is For
//!
//! The tree exists so that region and preprocessor markers can be located
//! relative to declarations and statement blocks. It keeps **every byte** of
//! the source, including whitespace, comments and directives, which are
//! attached as trivia to the surrounding nodes. Declarations and statements
//! are given structure; expressions are flat token runs.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Events → Sink → Rowan Tree
//!               (Logos)          (Grammar)        (GreenNodeBuilder)
//! ```
//!
//! - [`lexer`] splits text into tokens and classifies `#...` lines and
//!   `// region` comments into marker kinds.
//! - [`parser`] runs the grammar over the significant tokens and records
//!   events.
//! - The sink builds the immutable Rowan tree and places trivia.
//!
//! ## Quick Start
//!
//! ```
//! use region_lint_syntax::{parse, SyntaxKind};
//!
//! let tree = parse("class C { void M() { } }");
//!
//! assert_eq!(tree.text().to_string(), "class C { void M() { } }");
//! assert_eq!(tree.kind(), SyntaxKind::ROOT);
//! let class = tree.children().next().unwrap();
//! assert_eq!(class.kind(), SyntaxKind::CLASS);
//! ```

pub mod lexer;
pub mod parser;
pub mod syntax_kind;

pub use parser::parse;
pub use syntax_kind::{CSharpLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
