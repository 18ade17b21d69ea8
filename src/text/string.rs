use memchr::memchr2;

const HEX: &[u8; 16] = b"0123456789abcdef";

#[inline]
fn needs_escape(byte: u8) -> bool {
    byte < 0x20 || byte == b'"' || byte == b'\\'
}

/// Appends `value` as a quoted JSON string.
pub(crate) fn write_quoted_into(out: &mut Vec<u8>, value: &str) {
    out.push(b'"');
    escape_string_into(out, value);
    out.push(b'"');
}

pub(crate) fn escape_string_into(out: &mut Vec<u8>, value: &str) {
    let bytes = value.as_bytes();
    if memchr2(b'"', b'\\', bytes).is_none() && !bytes.iter().any(|b| *b < 0x20) {
        out.extend_from_slice(bytes);
        return;
    }

    let mut start = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        if !needs_escape(byte) {
            continue;
        }
        out.extend_from_slice(&bytes[start..idx]);
        match byte {
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0c => out.extend_from_slice(b"\\f"),
            control => {
                out.extend_from_slice(b"\\u00");
                out.push(HEX[(control >> 4) as usize]);
                out.push(HEX[(control & 0x0f) as usize]);
            }
        }
        start = idx + 1;
    }
    out.extend_from_slice(&bytes[start..]);
}
