//! Reading and printing of JSON documents.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::GeoJsonError;

/// Parses a JSON document.
pub fn parse_str(json: &str) -> Result<Value, GeoJsonError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a JSON document from the reader. The reader is not buffered by this function.
pub fn read_from(reader: impl Read) -> Result<Value, GeoJsonError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a JSON document from a file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Value, GeoJsonError> {
    let path = path.as_ref();
    log::debug!("Reading JSON document from {}", path.display());

    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

/// Prints the value with 2-space indentation.
pub fn to_pretty_string(value: &Value) -> String {
    format!("{value:#}")
}

/// Prints the value without any whitespace.
pub fn to_string(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn parse_keeps_member_order() {
        let value = parse_str(r#"{"type": "Point", "coordinates": [1, 2], "crs": null}"#)
            .expect("invalid json");
        let keys: Vec<_> = value
            .as_object()
            .expect("not an object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["type", "coordinates", "crs"]);
    }

    #[test]
    fn parse_errors() {
        assert_matches!(parse_str("{\"type\": "), Err(GeoJsonError::Json(_)));
        assert_matches!(parse_str(""), Err(GeoJsonError::Json(_)));
    }

    #[test]
    fn read_from_slice() {
        let value = read_from(&b"[1, 2.5]"[..]).expect("invalid json");
        assert_eq!(value, json!([1, 2.5]));
    }

    #[test]
    fn missing_file() {
        assert_matches!(
            read_file("/this/file/does/not/exist.json"),
            Err(GeoJsonError::Io(_))
        );
    }

    #[test]
    fn printing() {
        let value = json!({"type": "Point", "coordinates": [1.0, 2.0]});
        assert_eq!(to_string(&value), r#"{"type":"Point","coordinates":[1.0,2.0]}"#);
        assert_eq!(
            to_pretty_string(&value),
            "{\n  \"type\": \"Point\",\n  \"coordinates\": [\n    1.0,\n    2.0\n  ]\n}"
        );
    }
}
