//! # Parser Events
//!
//! Events are the intermediate representation between parsing and tree building.
//! Instead of building the tree directly, the parser emits a **flat sequence**
//! of events that describe the tree structure.
//!
//! ## Event Types
//!
//! ```text
//! Start(METHOD)      ← Begin a METHOD node
//!   Token(IDENT)     ← Add the next significant token
//!   Token(IDENT)
//!   Start(PARAM_LIST)
//!     Token(L_PAREN)
//!     Token(R_PAREN)
//!   Finish
//!   ...
//! Finish             ← End the METHOD node
//! ```
//!
//! Events never mention trivia. The [`Sink`](super::sink::Sink) weaves
//! whitespace, comments and directives back in around each `Token` event.

use crate::syntax_kind::SyntaxKind;

/// An event emitted by the parser during tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a new composite node.
    Start { kind: SyntaxKind },

    /// Add the next significant token to the current node.
    ///
    /// The `kind` is normally the lexer kind; grammar rules never remap it,
    /// but the field is kept so the sink needs no lookups of its own.
    Token { kind: SyntaxKind },

    /// Finish the current node.
    ///
    /// Must be paired with a preceding `Start`.
    Finish,

    /// A placeholder that will be replaced.
    ///
    /// When `parser.start()` is called, a `Placeholder` is pushed. Later,
    /// `marker.complete()` replaces it with a real `Start`, or
    /// `marker.abandon()` leaves it (the Sink ignores placeholders).
    Placeholder,
}

impl Event {
    /// Create a start event.
    pub fn start(kind: SyntaxKind) -> Self {
        Event::Start { kind }
    }

    /// Create a token event.
    pub fn token(kind: SyntaxKind) -> Self {
        Event::Token { kind }
    }
}
