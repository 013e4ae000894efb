//! # PDF Smith
//!
//! Core building blocks for generating PDF files: a renderable object
//! model, a document metadata object, and exact typographic unit
//! conversion.
//!
//! ## Features
//!
//! - **Renderable objects**: every document component implements
//!   [`PdfRender`] and serializes itself to a PDF syntax fragment
//! - **Document metadata**: [`MetaObject`] carries title, author, subject,
//!   keywords, and creator/producer identification, stamping creation and
//!   modification dates at render time
//! - **Unit conversion**: [`Unit`] holds a length readable in points,
//!   pica, inches, and millimeters, backed by exact decimal arithmetic
//!
//! ## Quick Start
//!
//! ```
//! use pdf_smith::{Document, MetaObject, PdfRender};
//!
//! # fn main() -> pdf_smith::Result<()> {
//! let mut meta = MetaObject::new("My Document")?;
//! meta.set_author("Jane Doe");
//! meta.add_keyword("example");
//!
//! let mut doc = Document::new();
//! doc.add_object(Box::new(meta));
//! let body = doc.render_objects()?;
//! assert!(body.contains("\\Title (My Document)"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Core object model
pub mod document;
pub mod metadata;
pub mod render;

// Geometry substrate
pub mod units;

pub use document::Document;
pub use error::{Error, Result};
pub use metadata::MetaObject;
pub use render::PdfRender;
pub use units::{Unit, UnitKind};
