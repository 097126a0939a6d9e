//! Bit stuffing and destuffing.

use crate::bits::BitSeq;

/// Longest run of 1 bits allowed on the wire before a 0 is inserted.
pub const MAX_ONES_RUN: usize = 5;

/// Insert a 0 after every run of five consecutive 1 bits.
///
/// The output never contains six consecutive 1 bits, so it cannot be
/// mistaken for a flag.
pub fn stuff(bits: &[bool]) -> BitSeq {
    let mut out = BitSeq::with_capacity(bits.len() + bits.len() / MAX_ONES_RUN);
    let mut ones = 0usize;
    for &bit in bits {
        out.push(bit);
        if bit {
            ones += 1;
            if ones == MAX_ONES_RUN {
                out.push(false);
                ones = 0;
            }
        } else {
            ones = 0;
        }
    }
    out
}

/// Remove the 0 that follows every run of five consecutive 1 bits.
///
/// Permissive: if a run of five is followed by a 1, or by the end of input,
/// nothing is dropped and the run counter restarts.
pub fn destuff(bits: &[bool]) -> BitSeq {
    let mut out = BitSeq::with_capacity(bits.len());
    let mut ones = 0usize;
    let mut iter = bits.iter().copied().peekable();
    while let Some(bit) = iter.next() {
        out.push(bit);
        if !bit {
            ones = 0;
            continue;
        }
        ones += 1;
        if ones == MAX_ONES_RUN {
            if iter.peek() == Some(&false) {
                iter.next();
            }
            ones = 0;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(text: &str) -> Vec<bool> {
        text.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn stuff_inserts_after_five_ones() {
        assert_eq!(stuff(&bits("11111")).to_string(), "111110");
        assert_eq!(stuff(&bits("111111")).to_string(), "1111101");
        assert_eq!(stuff(&bits("0111110")).to_string(), "01111100");
    }

    #[test]
    fn stuff_counter_resets_after_insertion() {
        assert_eq!(stuff(&bits("1111111111")).to_string(), "111110111110");
    }

    #[test]
    fn stuff_leaves_short_runs_alone() {
        let input = bits("0111101111011110");
        assert_eq!(stuff(&input).as_bits(), input.as_slice());
    }

    #[test]
    fn stuff_empty() {
        assert!(stuff(&[]).is_empty());
    }

    #[test]
    fn destuff_drops_stuffed_zero() {
        assert_eq!(destuff(&bits("111110")).to_string(), "11111");
        assert_eq!(destuff(&bits("1111100")).to_string(), "111110");
    }

    #[test]
    fn destuff_passes_unstuffed_run_through() {
        // A sixth 1 is kept; the counter restarts after the fifth.
        assert_eq!(destuff(&bits("1111111")).to_string(), "1111111");
        assert_eq!(destuff(&bits("01111110")).to_string(), "01111110");
    }

    #[test]
    fn destuff_run_at_end_of_input() {
        assert_eq!(destuff(&bits("011111")).to_string(), "011111");
    }

    #[test]
    fn destuff_inverts_stuff() {
        for text in [
            "",
            "0",
            "1",
            "11111",
            "1111100000",
            "1011111011111101111111111",
            "0000011111000001111100",
        ] {
            let input = bits(text);
            assert_eq!(destuff(&stuff(&input)).as_bits(), input.as_slice(), "{text}");
        }
    }
}
