//! Region placement analysis for C# sources.
//!
//! The core question: given a region or preprocessor marker, do it and all
//! the markers it pairs with sit inside one and the same element body? See
//! [`is_completely_contained_in_body`].
//!
//! ```
//! use region_lint_engine::{analyze_source, AnalyzerOptions};
//!
//! let source = "class C {\n void M() {\n#region Body\n Run();\n#endregion\n }\n}\n";
//! let findings = analyze_source(source, &AnalyzerOptions::default());
//! assert_eq!(findings[0].name.as_deref(), Some("Body"));
//! ```

pub mod analysis;
pub mod containment;
pub mod io;
pub mod line_index;
pub mod marker;
pub mod pairing;

// Re-export key types for easier usage
pub use analysis::*;
pub use containment::*;
pub use io::*;
pub use line_index::*;
pub use marker::*;
pub use pairing::*;
