// Document text extraction — turns a resume or job description file into flat text.
//
// PDFs go through `pdf-extract`; anything else is read as UTF-8. Layout is
// not preserved beyond line breaks, which is all the review prompts and the
// keyword gap need.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// How a document file should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Pick the reader from the file extension. Unknown extensions are plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentKind::Pdf,
            _ => DocumentKind::PlainText,
        }
    }
}

/// Extract the text of a document on disk.
pub fn extract_text(path: &Path) -> Result<String> {
    let kind = DocumentKind::from_path(path);
    debug!(path = %path.display(), kind = ?kind, "Extracting document text");

    let text = match kind {
        DocumentKind::Pdf => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read PDF file: {}", path.display()))?;
            extract_pdf_text(&bytes)
                .with_context(|| format!("Failed to extract text from PDF: {}", path.display()))?
        }
        DocumentKind::PlainText => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file: {}", path.display()))?,
    };

    let cleaned = clean_text(&text);
    if cleaned.trim().is_empty() {
        // Scanned PDFs have no text layer; the caller decides whether that's fatal
        warn!(path = %path.display(), "Document produced no text");
    }
    Ok(cleaned)
}

/// Extract the text of an in-memory PDF.
///
/// A PDF without a text layer gives an empty string rather than an error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes).context("PDF text extraction failed")?;
    Ok(text)
}

/// Strip extraction artifacts: NUL and BOM characters, trailing whitespace per line.
pub fn clean_text(text: &str) -> String {
    text.replace(['\u{0}', '\u{FEFF}'], "")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Where the job description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSource {
    /// A text or PDF file
    File(PathBuf),
    /// Pasted directly on the command line
    Text(String),
    /// Piped in on standard input
    Stdin,
}

impl JobSource {
    /// Read the job description text.
    pub fn load(&self) -> Result<String> {
        match self {
            JobSource::File(path) => extract_text(path),
            JobSource::Text(text) => Ok(text.clone()),
            JobSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read job description from stdin")?;
                Ok(clean_text(&buf))
            }
        }
    }
}
