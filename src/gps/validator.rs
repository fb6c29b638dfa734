// src/gps/validator.rs
//! Cheap syntactic gate run before full sentence decoding

/// Check that a raw line looks like an NMEA sentence: `$`, five uppercase
/// letters, then a comma. Non-ASCII characters are discarded first.
pub fn is_valid_sentence(line: &str) -> bool {
    let cleaned: String = line.trim().chars().filter(char::is_ascii).collect();
    let bytes = cleaned.as_bytes();

    bytes.len() >= 7
        && bytes[0] == b'$'
        && bytes[1..6].iter().all(u8::is_ascii_uppercase)
        && bytes[6] == b','
}
