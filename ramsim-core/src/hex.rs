//! Hexadecimal rendering of table rows.

/// `0x` followed by at least four lowercase hex digits.
pub fn address(address: usize) -> String {
    format!("0x{address:04x}")
}

/// `0x00` for an empty cell, otherwise `0x` followed by unpadded lowercase hex.
/// Negative values keep their sign in front of the magnitude.
pub fn value(value: Option<i64>) -> String {
    match value {
        None => "0x00".into(),
        Some(value) if value < 0 => format!("0x-{:x}", value.unsigned_abs()),
        Some(value) => format!("0x{value:x}"),
    }
}
