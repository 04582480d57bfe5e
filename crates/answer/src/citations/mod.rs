//! Citation extraction from retrieval replies.
//!
//! Extraction never fails: a reference that cannot be read contributes no
//! source, and the remaining references are still processed.

pub mod extract;
pub mod reference;
pub mod shape;

pub use extract::{extract_pdf_filenames, extract_titles, is_pdf};
pub use reference::{file_name_of, RetrievedReference, FILE_NAME_KEYS, TITLE_KEYS};
pub use shape::{references, CitationShape};
