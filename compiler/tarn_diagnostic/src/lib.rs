//! Diagnostics produced while lexing.
//!
//! A defect in the source never stops the scan. Each one becomes a
//! [`Diagnostic`] in the context's [`DiagnosticBag`], in the order it was
//! found:
//!
//! - **Severity**: error or warning.
//! - **Location**: a point, or a start/end pair, with zero-based line and
//!   column.
//! - **Message**: a [`LexMessage`] descriptor with its own [`ErrorCode`] and
//!   an optional help line.

mod bag;
mod diagnostic;
pub mod emitter;
mod message;

pub use bag::DiagnosticBag;
pub use diagnostic::{Diagnostic, Severity};
pub use message::{ErrorCode, LexMessage};
