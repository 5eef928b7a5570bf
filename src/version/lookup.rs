//! Parsing of App Store lookup responses

use serde_json::{Map, Value};

use crate::version::error::CheckError;

const RESULTS_KEY: &str = "results";
const VERSION_KEY: &str = "version";
const STORE_URL_KEY: &str = "trackViewUrl";

/// First record of a lookup response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRecord {
    pub version: String,
    pub track_view_url: Option<String>,
}

/// Parses a lookup response body into its first record
///
/// The body is walked as untyped JSON rather than deserialized into a struct so
/// that every missing or mistyped key maps onto its own [`CheckError`].
pub fn parse_lookup(body: &str) -> Result<LookupRecord, CheckError> {
    let json: Value = serde_json::from_str(body).map_err(|_| CheckError::UnableToReadResponse)?;
    let Value::Object(root) = json else {
        return Err(CheckError::UnableToReadResponse);
    };

    let result = first_result(&root).ok_or(CheckError::MandatoryKeysNotFound)?;

    let version = result
        .get(VERSION_KEY)
        .and_then(Value::as_str)
        .ok_or(CheckError::AppStoreVersionNotFound)?;

    let track_view_url = result
        .get(STORE_URL_KEY)
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(LookupRecord {
        version: version.to_string(),
        track_view_url,
    })
}

fn first_result(root: &Map<String, Value>) -> Option<&Map<String, Value>> {
    root.get(RESULTS_KEY)?.as_array()?.first()?.as_object()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_lookup_extracts_version_and_store_url() {
        let body = r#"{
            "resultCount": 1,
            "results": [
                {
                    "trackName": "Example",
                    "version": "2.3.1",
                    "trackViewUrl": "https://apps.apple.com/us/app/example/id123"
                }
            ]
        }"#;

        let record = parse_lookup(body).unwrap();

        assert_eq!(
            record,
            LookupRecord {
                version: "2.3.1".to_string(),
                track_view_url: Some("https://apps.apple.com/us/app/example/id123".to_string()),
            }
        );
    }

    #[test]
    fn parse_lookup_only_reads_first_result() {
        let body = r#"{"results": [{"version": "1.0.0"}, {"version": "9.9.9"}]}"#;

        let record = parse_lookup(body).unwrap();

        assert_eq!(record.version, "1.0.0");
    }

    #[rstest]
    #[case(r#"{"results": [{"version": "1.0.0"}]}"#)]
    #[case(r#"{"results": [{"version": "1.0.0", "trackViewUrl": 42}]}"#)]
    fn parse_lookup_tolerates_missing_store_url(#[case] body: &str) {
        let record = parse_lookup(body).unwrap();

        assert_eq!(record.version, "1.0.0");
        assert_eq!(record.track_view_url, None);
    }

    #[rstest]
    #[case("", CheckError::UnableToReadResponse)]
    #[case("<html>Service Unavailable</html>", CheckError::UnableToReadResponse)]
    #[case(r#"[{"version": "1.0.0"}]"#, CheckError::UnableToReadResponse)]
    #[case(r#""results""#, CheckError::UnableToReadResponse)]
    #[case(r#"{"resultCount": 0}"#, CheckError::MandatoryKeysNotFound)]
    #[case(r#"{"resultCount": 0, "results": []}"#, CheckError::MandatoryKeysNotFound)]
    #[case(r#"{"results": {"version": "1.0.0"}}"#, CheckError::MandatoryKeysNotFound)]
    #[case(r#"{"results": ["1.0.0"]}"#, CheckError::MandatoryKeysNotFound)]
    #[case(r#"{"results": [{"trackViewUrl": "https://x"}]}"#, CheckError::AppStoreVersionNotFound)]
    #[case(r#"{"results": [{"version": 2}]}"#, CheckError::AppStoreVersionNotFound)]
    #[case(r#"{"results": [{"version": null}]}"#, CheckError::AppStoreVersionNotFound)]
    fn parse_lookup_reports_malformed_bodies(#[case] body: &str, #[case] expected: CheckError) {
        assert_eq!(parse_lookup(body), Err(expected));
    }
}
