use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref DECIMAL:     Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    static ref HEXADECIMAL: Regex = Regex::new(r"^0[xX][0-9A-Fa-f]+$").unwrap();
    static ref IDENTIFIER:  Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// Name of the JSON kind of `value`, for diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_)  => "array",
        Value::Object(_) => "object",
    }
}

/// `true` for the spellings of a null pointer in Vulkan JSON documents.
pub fn is_null_pointer(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text == "NULL" || text == "VK_NULL_HANDLE",
        _ => false,
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer literal.
pub fn parse_integer_literal(text: &str) -> Option<i128> {
    let text = text.trim();
    if DECIMAL.is_match(text) {
        text.parse::<i128>().ok()
    } else if HEXADECIMAL.is_match(text) {
        i128::from_str_radix(&text[2..], 16).ok()
    } else {
        None
    }
}

/// `true` if `text` could name an enumerant or API constant.
pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER.is_match(text)
}

/// Decodes standard or URL-safe base64; padding is optional and whitespace
/// is skipped. Returns `None` on any other character, on data after the
/// padding, or when the input does not end on a whole group.
pub fn decode_base64(text: &str) -> Option<Vec<u8>> {
    let mut out     = Vec::with_capacity(text.len() / 4 * 3);
    let mut buffer  = 0u32;
    let mut bits    = 0u32;
    let mut padding = 0usize;
    let mut sextets = 0usize;

    for byte in text.bytes() {
        let sextet = match byte {
            b'A'..=b'Z' => byte - b'A',
            b'a'..=b'z' => byte - b'a' + 26,
            b'0'..=b'9' => byte - b'0' + 52,
            b'+' | b'-' => 62,
            b'/' | b'_' => 63,
            b'=' => {
                padding += 1;
                continue;
            }
            b' ' | b'\t' | b'\r' | b'\n' => continue,
            _ => return None,
        };
        if padding > 0 {
            return None;
        }
        sextets += 1;
        buffer = (buffer << 6) | u32::from(sextet);
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    // A final group of 2 or 3 sextets takes 2 or 1 `=`; 1 sextet is never valid.
    let expected_padding = match sextets % 4 {
        0 => 0,
        2 => 2,
        3 => 1,
        _ => return None,
    };
    if padding != 0 && padding != expected_padding {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literals() {
        assert_eq!(parse_integer_literal("0"), Some(0));
        assert_eq!(parse_integer_literal(" 42 "), Some(42));
        assert_eq!(parse_integer_literal("-1"), Some(-1));
        assert_eq!(parse_integer_literal("0xFFFFFFFF"), Some(0xFFFF_FFFF));
        assert_eq!(parse_integer_literal("0x"), None);
        assert_eq!(parse_integer_literal("VK_TRUE"), None);
        assert_eq!(parse_integer_literal("1.5"), None);
    }

    #[test]
    fn base64() {
        assert_eq!(decode_base64("").unwrap(), b"");
        assert_eq!(decode_base64("Zg==").unwrap(), b"f");
        assert_eq!(decode_base64("Zm8=").unwrap(), b"fo");
        assert_eq!(decode_base64("Zm9v").unwrap(), b"foo");
        assert_eq!(decode_base64("Zm9v\nYmFy").unwrap(), b"foobar");
        assert_eq!(decode_base64("AwIjBw==").unwrap(), [0x03, 0x02, 0x23, 0x07]);
        assert!(decode_base64("Zg==Zg").is_none());
        assert!(decode_base64("Z*g").is_none());
        assert_eq!(decode_base64("Zm8").unwrap(), b"fo");
        assert!(decode_base64("A").is_none());
        assert!(decode_base64("AAAAA").is_none());
        assert!(decode_base64("Zm9v=").is_none());
        assert!(decode_base64("Zg=").is_none());
        assert!(decode_base64("Zm8==").is_none());
        assert!(decode_base64("====").is_none());
    }

    #[test]
    fn null_pointer_spellings() {
        assert!(is_null_pointer(&Value::Null));
        assert!(is_null_pointer(&Value::String("NULL".to_owned())));
        assert!(!is_null_pointer(&Value::String("main".to_owned())));
        assert!(!is_null_pointer(&Value::from(0)));
    }
}
