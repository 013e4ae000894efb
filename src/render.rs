//! The rendering contract every document object satisfies.

use crate::error::Result;

/// A document component that can serialize itself to a PDF syntax fragment.
///
/// Implementors must emit a self-contained fragment reflecting their field
/// values at call time; output is never memoized, so two calls with
/// different intervening state yield different fragments. An implementor
/// may have observable side effects during rendering (for example,
/// [`MetaObject`](crate::metadata::MetaObject) restamps its timestamps);
/// such effects must be documented on the implementing type.
///
/// A render failure must propagate to the caller and abort assembly of the
/// enclosing document section. A skipped fragment would silently corrupt
/// the byte-counted layout of the final file.
pub trait PdfRender {
    /// Produce the PDF fragment for this object's current state.
    fn render_pdf(&mut self) -> Result<String>;
}
