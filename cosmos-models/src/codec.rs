//! Column codec for the remote relational store.
//!
//! Writes always use one representation per logical type:
//! - binary blob: base64 text
//! - list of blobs: array literal of quoted base64 strings (`{"aGk=","..."}`)
//! - list of strings: JSON array text
//!
//! Reads are lenient. Blobs may arrive as a hex-escaped binary literal
//! (`\x...`) or as base64; string lists may arrive as JSON or as a legacy
//! array literal. Anything that cannot be decoded yields an empty value.

use base64::Engine as _;

const BASE64: base64::engine::GeneralPurpose = base64::engine::general_purpose::STANDARD;

#[inline]
pub fn encode_blob(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode a blob column, falling back to an empty blob.
///
/// A hex-escaped value is unwrapped once more when its bytes are canonical
/// padded base64 text, the form this codec writes into a binary column. Raw
/// bytes that happen to form such text (`b"test"`) are therefore
/// read as base64; any other raw bytes are returned as they are.
pub fn decode_blob(raw: &str) -> Vec<u8> {
    let st = raw.trim();
    if st.is_empty() {
        return Vec::new();
    }

    if let Some(hex) = st.strip_prefix("\\x").or_else(|| st.strip_prefix("\\\\x")) {
        let Ok(bytes) = hex::decode(hex) else {
            return Vec::new();
        };
        return match std::str::from_utf8(&bytes)
            .ok()
            .filter(|s| looks_like_base64(s))
            .and_then(|s| BASE64.decode(s).ok())
        {
            Some(inner) => inner,
            None => bytes,
        };
    }

    BASE64.decode(st).unwrap_or_default()
}

/// Padded base64 text: alphabet characters, then at most two `=`, in
/// groups of four.
fn looks_like_base64(s: &str) -> bool {
    let body = s.trim_end_matches('=');
    !s.is_empty()
        && s.len() % 4 == 0
        && s.len() - body.len() <= 2
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}

pub fn encode_blob_list(blobs: &[Vec<u8>]) -> String {
    let items: Vec<String> = blobs.iter().map(|b| encode_blob(b)).collect();
    encode_array_literal(&items)
}

pub fn decode_blob_list(raw: &str) -> Vec<Vec<u8>> {
    let st = raw.trim();
    let items = if st.starts_with('[') {
        serde_json::from_str::<Vec<String>>(st).unwrap_or_default()
    } else {
        parse_array_literal(st)
    };
    items.iter().map(|item| decode_blob(item)).collect()
}

#[inline]
pub fn encode_string_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a string list column written either as JSON or as an array literal.
pub fn decode_string_list(raw: &str) -> Vec<String> {
    let st = raw.trim();
    if st.starts_with('[') {
        serde_json::from_str(st).unwrap_or_default()
    } else if st.starts_with('{') {
        parse_array_literal(st)
    } else {
        Vec::new()
    }
}

/// Render a brace-delimited array literal with every element quoted.
pub fn encode_array_literal(items: &[String]) -> String {
    let mut out = String::with_capacity(2 + items.iter().map(|s| s.len() + 3).sum::<usize>());
    out.push('{');
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        out.push('"');
        for c in item.chars() {
            if c == '"' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('"');
    }
    out.push('}');
    out
}

/// Parse a one-dimensional array literal such as `{a,"b,c","d\"e",NULL}`.
///
/// Unquoted `NULL` elements are dropped. Malformed input yields whatever
/// elements were complete before the error.
pub fn parse_array_literal(raw: &str) -> Vec<String> {
    let st = raw.trim();
    let Some(body) = st.strip_prefix('{').and_then(|s| s.strip_suffix('}')) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    let mut chars = body.chars().peekable();
    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        match chars.peek() {
            None => break,
            Some('"') => {
                chars.next();
                let mut item = String::new();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                item.push(escaped);
                            }
                        }
                        '"' => {
                            closed = true;
                            break;
                        }
                        other => item.push(other),
                    }
                }
                if !closed {
                    break;
                }
                items.push(item);
                // skip to the next separator
                for c in chars.by_ref() {
                    if c == ',' {
                        break;
                    }
                }
            }
            Some(_) => {
                let mut item = String::new();
                for c in chars.by_ref() {
                    if c == ',' {
                        break;
                    }
                    item.push(c);
                }
                let item = item.trim();
                if !item.eq_ignore_ascii_case("NULL") {
                    items.push(item.to_string());
                }
            }
        }
    }
    items
}

/// Serde adapter writing a blob as base64 text, used by the local payload and import files
pub mod serde_blob {
    use super::{decode_blob, encode_blob};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_blob(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| decode_blob(&s)).unwrap_or_default())
    }
}

/// Serde adapter writing a list of blobs as a list of base64 strings
pub mod serde_blob_list {
    use super::{decode_blob, encode_blob};
    use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(blobs: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(blobs.len()))?;
        for blob in blobs {
            seq.serialize_element(&encode_blob(blob))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<u8>>, D::Error> {
        let raw = Option::<Vec<String>>::deserialize(deserializer)?;
        Ok(raw
            .unwrap_or_default()
            .iter()
            .map(|s| decode_blob(s))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_list_round_trip() {
        let empty: Vec<Vec<u8>> = vec![];
        assert_eq!(encode_blob_list(&empty), "{}");
        assert_eq!(decode_blob_list("{}"), empty);

        let one = vec![b"saturn".to_vec()];
        assert_eq!(decode_blob_list(&encode_blob_list(&one)), one);

        let many = vec![vec![0u8, 255, 10], Vec::new(), b"rings,\"and\" moons".to_vec()];
        assert_eq!(decode_blob_list(&encode_blob_list(&many)), many);
    }

    #[test]
    fn test_string_list_keeps_delimiters() {
        let facts = vec![
            "Mars has two moons, Phobos and Deimos".to_string(),
            "Called the \"red planet\"".to_string(),
            "{braces} and \\backslash".to_string(),
            String::new(),
        ];
        assert_eq!(decode_string_list(&encode_string_list(&facts)), facts);
        assert_eq!(decode_string_list("[]"), Vec::<String>::new());
    }

    #[test]
    fn test_legacy_array_literal_is_read() {
        assert_eq!(
            decode_string_list(r#"{plain, "quoted, with comma","esc\"aped",NULL}"#),
            vec!["plain", "quoted, with comma", "esc\"aped"]
        );
        assert_eq!(parse_array_literal("{}"), Vec::<String>::new());
        assert_eq!(
            parse_array_literal(&encode_array_literal(&["a\\b".into(), "c\"d".into()])),
            vec!["a\\b", "c\"d"]
        );
    }

    #[test]
    fn test_decode_blob_formats() {
        assert_eq!(decode_blob(&encode_blob(b"nebula")), b"nebula");
        // raw bytes in hex-escaped form
        assert_eq!(decode_blob("\\x00ff10"), vec![0x00, 0xff, 0x10]);
        // base64 text that was stored in a bytea column
        let stored = format!("\\x{}", hex::encode(encode_blob(b"galaxy")));
        assert_eq!(decode_blob(&stored), b"galaxy");
    }

    #[test]
    fn test_raw_binary_literal_is_not_decoded_twice() {
        let raws: [&[u8]; 6] = [
            b"abc",
            b"hello world",
            b"ab=c",
            b"\x00",
            b"pad=====",
            b"\xff\x00\x10\x20",
        ];
        for raw in raws {
            let stored = format!("\\x{}", hex::encode(raw));
            assert_eq!(decode_blob(&stored), raw, "{raw:?}");
        }
        // four base64 characters are read as base64
        assert_eq!(
            decode_blob(&format!("\\x{}", hex::encode(b"test"))),
            BASE64.decode("test").unwrap()
        );
    }

    #[test]
    fn test_malformed_values_degrade_to_empty() {
        assert!(decode_blob("not base64 !!").is_empty());
        assert!(decode_blob("\\xzz").is_empty());
        assert!(decode_string_list("garbage").is_empty());
        assert!(decode_string_list("[1, 2").is_empty());
        assert!(decode_blob_list("").is_empty());
    }
}
