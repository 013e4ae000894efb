//! Document metadata object.
//!
//! [`MetaObject`] holds the descriptive fields of a document (title, author,
//! subject, keywords) together with creator/producer identification and the
//! creation/modification timestamps stamped at render time.

use chrono::{DateTime, Local};

use crate::error::{Error, Result};
use crate::render::PdfRender;

/// Library identifier stamped into the Producer field and used as the
/// default Creator.
pub const PRODUCER: &str = "GoMan PDF";

/// Document-level metadata rendered into the PDF information dictionary.
///
/// The title is required and never empty; the producer is fixed at
/// construction and has no setter. Timestamps are unset until the first
/// render.
///
/// # Examples
///
/// ```
/// use pdf_smith::metadata::MetaObject;
/// use pdf_smith::render::PdfRender;
///
/// let mut meta = MetaObject::new("Report")?;
/// meta.set_author("A. Writer");
/// meta.add_keyword("draft");
/// let fragment = meta.render_pdf()?;
/// assert!(fragment.contains("\\Title (Report)\n"));
/// assert!(fragment.contains("\\Keywords (draft)\n"));
/// # Ok::<(), pdf_smith::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MetaObject {
    title: String,
    author: String,
    subject: String,
    keywords: Vec<String>,
    creator: String,
    producer: String,
    creation_date: Option<DateTime<Local>>,
    mod_date: Option<DateTime<Local>>,
}

impl MetaObject {
    /// Create a metadata object with the given title.
    ///
    /// Fails with [`Error::EmptyTitle`] if the title is empty. Author and
    /// subject start empty, the keyword list starts empty, and creator and
    /// producer are initialized to [`PRODUCER`].
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let mut meta = Self {
            title: String::new(),
            author: String::new(),
            subject: String::new(),
            keywords: Vec::new(),
            creator: PRODUCER.to_string(),
            producer: PRODUCER.to_string(),
            creation_date: None,
            mod_date: None,
        };
        meta.set_title(title)?;
        Ok(meta)
    }

    /// Set the document title. Fails with [`Error::EmptyTitle`] on an
    /// empty string; the previous title is kept.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        self.title = title;
        Ok(())
    }

    /// The document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the document author. Empty is allowed and suppresses the
    /// `\Author` line when rendering.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    /// The document author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Set the document subject. Empty is allowed; the `\Subject` line is
    /// emitted either way.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    /// The document subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Append a keyword. Keywords keep insertion order and duplicates are
    /// not removed.
    pub fn add_keyword(&mut self, keyword: impl Into<String>) {
        self.keywords.push(keyword.into());
    }

    /// The document keywords in insertion order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Set the creator, the application that produced the document
    /// content. Fails with [`Error::EmptyCreator`] on an empty string; the
    /// previous creator is kept.
    pub fn set_creator(&mut self, creator: impl Into<String>) -> Result<()> {
        let creator = creator.into();
        if creator.is_empty() {
            return Err(Error::EmptyCreator);
        }
        self.creator = creator;
        Ok(())
    }

    /// The document creator.
    pub fn creator(&self) -> &str {
        &self.creator
    }

    /// The producing library. Fixed at construction; there is no setter.
    pub fn producer(&self) -> &str {
        &self.producer
    }

    /// Creation timestamp of the last render, if any.
    pub fn creation_date(&self) -> Option<DateTime<Local>> {
        self.creation_date
    }

    /// Modification timestamp of the last render, if any.
    pub fn modification_date(&self) -> Option<DateTime<Local>> {
        self.mod_date
    }
}

impl PdfRender for MetaObject {
    /// Render the metadata dictionary entries.
    ///
    /// Emits `\Title`, `\Author` (only if non-empty), `\Subject` (always,
    /// empty parentheses allowed), `\Keywords` (only if non-empty,
    /// space-joined in insertion order), `\Creator`, `\Producer`,
    /// `\CreationDate`, and `\ModDate`, in that order.
    ///
    /// Side effect: both timestamps are overwritten with the current time
    /// on every call, so the emitted dates always reflect the most recent
    /// render.
    fn render_pdf(&mut self) -> Result<String> {
        let mut output = format!("\\Title ({})\n", self.title);

        if !self.author.is_empty() {
            output.push_str(&format!("\\Author ({})\n", self.author));
        }

        output.push_str(&format!("\\Subject ({})\n", self.subject));

        if !self.keywords.is_empty() {
            output.push_str(&format!("\\Keywords ({})\n", self.keywords.join(" ")));
        }

        output.push_str(&format!("\\Creator ({})\n", self.creator));
        output.push_str(&format!("\\Producer ({})\n", self.producer));

        let now = Local::now();
        self.creation_date = Some(now);
        self.mod_date = Some(now);

        output.push_str(&format!("\\CreationDate ({})\n", format_pdf_date(&now)));
        output.push_str(&format!("\\ModDate ({})\n", format_pdf_date(&now)));

        Ok(output)
    }
}

/// Format a timestamp in PDF date notation:
/// `D:` + `YYYYMMDDhhmmss` + signed UTC offset `hh'mm'`.
pub fn format_pdf_date(date: &DateTime<Local>) -> String {
    let stamp = date.format("%Y%m%d%H%M%S");
    let offset = date.format("%z").to_string(); // e.g. "+0200"
    format!("D:{}{}'{}'", stamp, &offset[..3], &offset[3..])
}
