//! Ordered collection of renderable document objects.
//!
//! [`Document`] owns the objects that will make up a PDF file and renders
//! them into the file body in insertion order. Assembling the surrounding
//! file structure (header, cross-reference table, trailer) is the job of a
//! later stage built on top of this.

use crate::error::Result;
use crate::render::PdfRender;

/// A document under construction: an ordered sequence of renderable
/// objects.
#[derive(Default)]
pub struct Document {
    objects: Vec<Box<dyn PdfRender>>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object. Objects render in insertion order.
    pub fn add_object(&mut self, object: Box<dyn PdfRender>) {
        self.objects.push(object);
    }

    /// Number of objects added so far.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Whether the document holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Render every object and concatenate the fragments in insertion
    /// order.
    ///
    /// The first render failure aborts assembly and surfaces to the
    /// caller; a fragment is never silently skipped, since the final file
    /// layout is byte-counted.
    pub fn render_objects(&mut self) -> Result<String> {
        let mut body = String::new();
        for (index, object) in self.objects.iter_mut().enumerate() {
            log::debug!("Rendering document object {}", index);
            let fragment = object.render_pdf()?;
            body.push_str(&fragment);
        }
        Ok(body)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("objects", &self.objects.len())
            .finish()
    }
}
