//! impc-util - Core Utilities and Foundation Types
//!
//! Foundation types shared by the ImperialCode toolchain crates:
//!
//! - [`span`] - Source positions, spans and the per-file line table
//! - [`diagnostic`] - Diagnostic levels, codes, builder and collecting handler
//! - [`error`] - Error types raised by the utilities themselves
//!
//! Positions are produced by the lexer while scanning and are never
//! recomputed afterwards; the line table in [`SourceFile`] only exists so
//! that diagnostics can show the offending source line.
//!
//! # Example
//!
//! ```
//! use impc_util::{DiagnosticBuilder, DiagnosticCode, SourceFile, SourcePosition, Span};
//!
//! let file = SourceFile::new("main.imp", "let x = @;");
//! let at = SourcePosition::new(1, 9, 8);
//! let diag = DiagnosticBuilder::error("unexpected character `@`")
//!     .code(DiagnosticCode::E_LEXER_INVALID_CHAR)
//!     .span(Span::new(at, at.advanced_over("@")))
//!     .build();
//!
//! let rendered = diag.render(Some(&file));
//! assert!(rendered.contains("error[E1001]"));
//! assert!(rendered.contains("main.imp:1:9"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{SourceFile, SourcePosition, Span};
