use bitframe_frame::BitSeq;

/// Map an ASCII byte to a bit. Anything but `'0'` and `'1'` is not a bit.
pub fn bit_from_ascii(byte: u8) -> Option<bool> {
    match byte {
        b'0' => Some(false),
        b'1' => Some(true),
        _ => None,
    }
}

/// Map a bit to its ASCII byte.
pub fn bit_to_ascii(bit: bool) -> u8 {
    if bit {
        b'1'
    } else {
        b'0'
    }
}

/// Parse bit text, skipping every character that is not `'0'` or `'1'`.
pub fn parse_bits(text: &str) -> BitSeq {
    text.bytes().filter_map(bit_from_ascii).collect()
}

/// Render bits as `'0'`/`'1'` text.
pub fn format_bits(bits: &[bool]) -> String {
    bits.iter().map(|&bit| char::from(bit_to_ascii(bit))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_other_characters() {
        let bits = parse_bits("01 1\n0x1\t2 1");
        assert_eq!(bits.as_bits(), &[false, true, true, false, true, true]);
    }

    #[test]
    fn parse_empty_and_noise() {
        assert!(parse_bits("").is_empty());
        assert!(parse_bits("hello, world\n").is_empty());
    }

    #[test]
    fn format_matches_display() {
        let bits = parse_bits("0111111000101");
        assert_eq!(format_bits(&bits), "0111111000101");
        assert_eq!(format_bits(&bits), bits.to_string());
    }
}
