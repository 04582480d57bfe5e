//! Source name extraction.

use super::reference::RetrievedReference;
use super::shape::references;
use crate::sources::SourceList;
use kbchat_llm::RagResponse;

/// Document titles cited by `response`.
///
/// Per reference, the metadata title wins; the file name of the location is
/// the fallback.
pub fn extract_titles(response: &RagResponse) -> SourceList {
    let titles: SourceList = references(response)
        .iter()
        .filter_map(|reference| reference.title().or_else(|| reference.location_name()))
        .collect();

    tracing::debug!("Extracted {} citation titles", titles.len());
    titles
}

/// PDF file names cited by `response`.
///
/// Per reference, the location wins since it names the stored file; the
/// metadata file name (or title) is the fallback. Only names ending in
/// `.pdf`, in any case, are kept.
pub fn extract_pdf_filenames(response: &RagResponse) -> SourceList {
    let filenames: SourceList = references(response)
        .iter()
        .filter_map(pdf_candidate)
        .filter(|name| is_pdf(name))
        .collect();

    tracing::debug!("Extracted {} cited PDF files", filenames.len());
    filenames
}

fn pdf_candidate<'a>(reference: &RetrievedReference<'a>) -> Option<&'a str> {
    reference
        .location_name()
        .or_else(|| reference.metadata_file_name())
}

/// Whether `name` ends with `.pdf`, ignoring case.
pub fn is_pdf(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf("a.pdf"));
        assert!(is_pdf("REPORT.PDF"));
        assert!(is_pdf("Mixed.PdF"));
        assert!(!is_pdf("a.pdf.txt"));
        assert!(!is_pdf("pdf"));
        assert!(!is_pdf(""));
    }

    #[test]
    fn test_titles_prefer_metadata() {
        let response = RagResponse::new(json!({"citations": {"retrievedReferences": [{
            "metadata": {"x-amz-bedrock-kb-document-title": "Cardiology Handbook"},
            "location": {"s3Location": {"uri": "s3://bucket/cardio.pdf"}}
        }]}}));

        assert_eq!(extract_titles(&response).as_slice(), ["Cardiology Handbook"]);
    }

    #[test]
    fn test_titles_fall_back_to_location() {
        let response = RagResponse::new(json!({"citations": {"retrievedReferences": [
            {"location": {"webLocation": {"url": "https://example.org/notes.html?lang=en"}}},
            {"metadata": {}, "location": {}}
        ]}}));

        assert_eq!(extract_titles(&response).as_slice(), ["notes.html"]);
    }

    #[test]
    fn test_titles_include_non_pdf_names() {
        let response = RagResponse::new(json!({"citations": [{"retrievedReferences": [
            {"metadata": {"x-amzn-bedrock-kb-doc-title": "Dosage table"}},
            {"metadata": {"x-amzn-bedrock-kb-doc-title": "Dosage table"}},
            {"metadata": {"x-amzn-bedrock-kb-doc-title": "Side effects.pdf"}}
        ]}]}));

        assert_eq!(
            extract_titles(&response).as_slice(),
            ["Dosage table", "Side effects.pdf"]
        );
    }

    #[test]
    fn test_filenames_prefer_location() {
        let response = RagResponse::new(json!({"citations": {"retrievedReferences": [{
            "metadata": {"x-amz-bedrock-kb-document-title": "Title.pdf"},
            "location": {"s3Location": {"uri": "s3://bucket/stored.pdf"}}
        }]}}));

        assert_eq!(extract_pdf_filenames(&response).as_slice(), ["stored.pdf"]);
        assert_eq!(extract_titles(&response).as_slice(), ["Title.pdf"]);
    }

    #[test]
    fn test_filenames_non_pdf_location_is_not_replaced_by_metadata() {
        // The location name is the candidate; metadata is only consulted when
        // there is no location name at all.
        let response = RagResponse::new(json!({"citations": {"retrievedReferences": [{
            "metadata": {"file_name": "paper.pdf"},
            "location": {"webLocation": {"url": "https://example.org/page.html"}}
        }]}}));

        assert!(extract_pdf_filenames(&response).is_empty());
    }

    #[test]
    fn test_filenames_metadata_fallback_order() {
        let response = RagResponse::new(json!({"citations": {"retrievedReferences": [
            {"metadata": {"filename": "second.pdf", "file_name": "first.pdf"}},
            {"metadata": {"filename": "third.pdf"}},
            {"metadata": {"x-amz-bedrock-kb-document-title": "fourth.PDF"}},
            {"location": {"s3Location": {"uri": "s3://bucket/dir/"}},
             "metadata": {"x-amzn-bedrock-kb-doc-title": "fifth.pdf"}}
        ]}}));

        assert_eq!(
            extract_pdf_filenames(&response).as_slice(),
            ["first.pdf", "third.pdf", "fourth.PDF", "fifth.pdf"]
        );
    }

    #[test]
    fn test_malformed_reference_does_not_abort_extraction() {
        let response = RagResponse::new(json!({"citations": {"retrievedReferences": [
            {"metadata": ["not", "a", "map"]},
            {"location": {"s3Location": {"uri": {"nested": true}}}},
            "just a string",
            {"location": {"s3Location": {"uri": "s3://bucket/ok.pdf"}}}
        ]}}));

        assert_eq!(extract_pdf_filenames(&response).as_slice(), ["ok.pdf"]);
        assert_eq!(extract_titles(&response).as_slice(), ["ok.pdf"]);
    }
}
