//! Field access on a single retrieved reference.
//!
//! Every lookup returns `None` for a missing field, a field of the wrong
//! type or an empty string.

use serde_json::{Map, Value};

/// Metadata keys that hold the document title.
pub const TITLE_KEYS: [&str; 2] = [
    "x-amz-bedrock-kb-document-title",
    "x-amzn-bedrock-kb-doc-title",
];

/// Metadata keys that hold the file name.
pub const FILE_NAME_KEYS: [&str; 2] = ["file_name", "filename"];

/// A reference the retrieval service used to ground its answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrievedReference<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> RetrievedReference<'a> {
    /// View `value` as a reference; only mappings qualify.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    /// Document title from metadata.
    pub fn title(&self) -> Option<&'a str> {
        self.metadata_str(&TITLE_KEYS)
    }

    /// File name from metadata, falling back to the title keys.
    pub fn metadata_file_name(&self) -> Option<&'a str> {
        self.metadata_str(&FILE_NAME_KEYS)
            .or_else(|| self.metadata_str(&TITLE_KEYS))
    }

    /// Storage URI, or the web URL when there is no storage URI.
    pub fn location_uri(&self) -> Option<&'a str> {
        let location = self.fields.get("location")?;
        let s3_uri = location
            .get("s3Location")
            .and_then(|s3| s3.get("uri"))
            .and_then(Value::as_str);
        let web_url = location
            .get("webLocation")
            .and_then(|web| web.get("url"))
            .and_then(Value::as_str);

        [s3_uri, web_url]
            .into_iter()
            .flatten()
            .find(|uri| !uri.is_empty())
    }

    /// File name derived from the location URI.
    pub fn location_name(&self) -> Option<&'a str> {
        self.location_uri()
            .map(file_name_of)
            .filter(|name| !name.is_empty())
    }

    fn metadata_str(&self, keys: &[&str]) -> Option<&'a str> {
        let metadata = self.fields.get("metadata")?.as_object()?;
        keys.iter()
            .filter_map(|key| metadata.get(*key).and_then(Value::as_str))
            .find(|value| !value.is_empty())
    }
}

/// Last path segment of `uri`, without its query string.
pub fn file_name_of(uri: &str) -> &str {
    let segment = uri.rsplit('/').next().unwrap_or(uri);
    segment.split('?').next().unwrap_or(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_name_of() {
        assert_eq!(file_name_of("s3://bucket/path/Report.PDF?x=1"), "Report.PDF");
        assert_eq!(file_name_of("https://example.com/docs/guide.pdf"), "guide.pdf");
        assert_eq!(file_name_of("guide.pdf"), "guide.pdf");
        assert_eq!(file_name_of("https://example.com/docs/"), "");
        assert_eq!(file_name_of("?only=query"), "");
    }

    #[test]
    fn test_non_mapping_is_not_a_reference() {
        assert!(RetrievedReference::from_value(&json!("s3://b/a.pdf")).is_none());
        assert!(RetrievedReference::from_value(&json!(null)).is_none());
        assert!(RetrievedReference::from_value(&json!([{}])).is_none());
    }

    #[test]
    fn test_title_key_order() {
        let value = json!({"metadata": {
            "x-amzn-bedrock-kb-doc-title": "Second",
            "x-amz-bedrock-kb-document-title": "First"
        }});
        let reference = RetrievedReference::from_value(&value).unwrap();
        assert_eq!(reference.title(), Some("First"));
    }

    #[test]
    fn test_empty_or_mistyped_title_falls_through() {
        let value = json!({"metadata": {
            "x-amz-bedrock-kb-document-title": "",
            "x-amzn-bedrock-kb-doc-title": "Fallback"
        }});
        let reference = RetrievedReference::from_value(&value).unwrap();
        assert_eq!(reference.title(), Some("Fallback"));

        let value = json!({"metadata": {"x-amz-bedrock-kb-document-title": ["list"]}});
        let reference = RetrievedReference::from_value(&value).unwrap();
        assert_eq!(reference.title(), None);
    }

    #[test]
    fn test_metadata_not_a_mapping() {
        let value = json!({"metadata": "title.pdf"});
        let reference = RetrievedReference::from_value(&value).unwrap();
        assert_eq!(reference.title(), None);
        assert_eq!(reference.metadata_file_name(), None);
    }

    #[test]
    fn test_metadata_file_name_prefers_file_keys() {
        let value = json!({"metadata": {
            "x-amz-bedrock-kb-document-title": "Title.pdf",
            "filename": "file.pdf"
        }});
        let reference = RetrievedReference::from_value(&value).unwrap();
        assert_eq!(reference.metadata_file_name(), Some("file.pdf"));
    }

    #[test]
    fn test_location_prefers_storage_uri() {
        let value = json!({"location": {
            "webLocation": {"url": "https://example.com/web.pdf"},
            "s3Location": {"uri": "s3://bucket/s3.pdf"}
        }});
        let reference = RetrievedReference::from_value(&value).unwrap();
        assert_eq!(reference.location_name(), Some("s3.pdf"));
    }

    #[test]
    fn test_location_falls_back_to_web_url() {
        let value = json!({"location": {
            "s3Location": {"uri": ""},
            "webLocation": {"url": "https://example.com/web.pdf?session=1"}
        }});
        let reference = RetrievedReference::from_value(&value).unwrap();
        assert_eq!(reference.location_name(), Some("web.pdf"));
    }

    #[test]
    fn test_location_mistyped_at_every_level() {
        for location in [
            json!("s3://bucket/a.pdf"),
            json!({"s3Location": "s3://bucket/a.pdf"}),
            json!({"s3Location": {"uri": 7}}),
            json!({"webLocation": [{"url": "https://x/a.pdf"}]}),
        ] {
            let value = json!({ "location": location.clone() });
            let reference = RetrievedReference::from_value(&value).unwrap();
            assert_eq!(reference.location_name(), None, "location: {}", location);
        }
    }

    #[test]
    fn test_location_with_trailing_slash_has_no_name() {
        let value = json!({"location": {"s3Location": {"uri": "s3://bucket/folder/"}}});
        let reference = RetrievedReference::from_value(&value).unwrap();
        assert_eq!(reference.location_uri(), Some("s3://bucket/folder/"));
        assert_eq!(reference.location_name(), None);
    }
}
