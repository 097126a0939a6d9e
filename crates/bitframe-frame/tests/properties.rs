//! Property-based tests for the framing codec.
//!
//! These tests use proptest to verify invariants hold for arbitrary streams:
//! - Encoding then decoding returns the original bits
//! - Stuffing never leaves a run of six 1 bits
//! - Destuffing inverts stuffing
//! - Single-bit errors inside a frame body are always caught
//! - Feeding the deframer in pieces matches one-shot decoding
//! - Arbitrary garbage never panics the decoder

use bitframe_frame::{
    crc16, decode, destuff, encode, matches_flag, stuff, BitSeq, Deframer, FrameEvent, StopReason,
    FLAG, FLAG_LEN,
};
use proptest::prelude::*;

// Strategy for generating non-empty bit streams up to a few frames long
fn stream_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 1..=400)
}

// Strategy for bit streams biased towards long runs of 1 bits
fn ones_heavy_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(prop::bool::weighted(0.85), 1..=300)
}

// Strategy for line noise around frames
fn garbage_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..=40)
}

fn longest_ones_run(bits: &[bool]) -> usize {
    bits.split(|&b| !b).map(<[bool]>::len).max().unwrap_or(0)
}

#[test]
fn prop_round_trip() {
    proptest!(|(data in stream_strategy(), chunk_size in 1usize..=120)| {
        let encoded = encode(&data, chunk_size).unwrap();
        prop_assert_eq!(encoded.frames, data.len().div_ceil(chunk_size));

        let decoded = decode(&encoded.bits);
        prop_assert_eq!(decoded.data.as_bits(), data.as_slice());
        prop_assert_eq!(decoded.frames_ok, encoded.frames);
        prop_assert_eq!(decoded.frames_failed, 0);
        prop_assert_eq!(decoded.stop, StopReason::EndOfStream);
    });
}

#[test]
fn prop_round_trip_ones_heavy() {
    proptest!(|(data in ones_heavy_strategy(), chunk_size in 1usize..=96)| {
        let encoded = encode(&data, chunk_size).unwrap();
        let decoded = decode(&encoded.bits);
        prop_assert_eq!(decoded.data.as_bits(), data.as_slice());
        prop_assert_eq!(decoded.frames_ok, encoded.frames);
    });
}

#[test]
fn prop_stuffing_law() {
    proptest!(|(data in ones_heavy_strategy())| {
        let stuffed = stuff(&data);
        prop_assert!(stuffed.len() >= data.len());
        prop_assert!(longest_ones_run(&stuffed) <= 5);
        let destuffed = destuff(&stuffed);
        prop_assert_eq!(destuffed.as_bits(), data.as_slice());
    });
}

#[test]
fn prop_six_ones_only_inside_flags() {
    proptest!(|(data in ones_heavy_strategy(), chunk_size in 1usize..=64)| {
        let encoded = encode(&data, chunk_size).unwrap();
        let bits = &encoded.bits;

        let mut pos = 0;
        let mut frames = 0;
        while pos < bits.len() {
            prop_assert!(matches_flag(bits, pos));
            let body_start = pos + FLAG_LEN;
            let mut end = body_start;
            while end < bits.len() && !matches_flag(bits, end) {
                end += 1;
            }
            prop_assert!(matches_flag(bits, end));
            prop_assert!(longest_ones_run(&bits[body_start..end]) <= 5);
            pos = end + FLAG_LEN;
            frames += 1;
        }
        prop_assert_eq!(frames, encoded.frames);
    });
}

#[test]
fn prop_crc_matches_for_equal_streams() {
    proptest!(|(data in stream_strategy())| {
        let seq = BitSeq::from(data.clone());
        prop_assert_eq!(crc16(&data), crc16(&seq));
    });
}

#[test]
fn prop_single_bit_error_is_detected() {
    proptest!(|(chunk in stream_strategy(), flip in any::<prop::sample::Index>())| {
        let mut body = BitSeq::from(chunk.clone());
        body.push_u16_msb(crc16(&chunk));
        let mut corrupted = body.into_vec();
        let at = flip.index(corrupted.len());
        corrupted[at] = !corrupted[at];

        let mut stream = BitSeq::from(FLAG.to_vec());
        stream.extend_from_bits(&stuff(&corrupted));
        stream.extend_from_bits(&FLAG);

        let decoded = decode(&stream);
        prop_assert_eq!(decoded.frames_ok, 0);
        prop_assert_eq!(decoded.frames_failed, 1);
        prop_assert!(decoded.data.is_empty());
    });
}

#[test]
fn prop_streaming_matches_one_shot() {
    proptest!(|(lead in garbage_strategy(), data in stream_strategy(), trail in garbage_strategy(), flip in any::<prop::sample::Index>(), piece in 1usize..=17)| {
        let mut stream = lead;
        stream.extend(encode(&data, 48).unwrap().bits);
        stream.extend(trail);
        let at = flip.index(stream.len());
        stream[at] = !stream[at];

        let one_shot = decode(&stream);

        let mut deframer = Deframer::new();
        let mut recovered = BitSeq::new();
        for part in stream.chunks(piece) {
            for event in deframer.feed(part) {
                if let FrameEvent::Verified { data: chunk, .. } = event {
                    recovered.extend_from_bits(&chunk);
                }
            }
        }
        let frames_ok = deframer.frames_ok();
        let frames_failed = deframer.frames_failed();
        let stop = deframer.finish();

        prop_assert_eq!(recovered, one_shot.data);
        prop_assert_eq!(frames_ok, one_shot.frames_ok);
        prop_assert_eq!(frames_failed, one_shot.frames_failed);
        prop_assert_eq!(stop, one_shot.stop);
    });
}

#[test]
fn prop_arbitrary_input_never_panics() {
    proptest!(|(garbage in prop::collection::vec(prop::bool::weighted(0.7), 0..=2000))| {
        let decoded = decode(&garbage);
        prop_assert!(decoded.data.len() <= garbage.len());
    });
}
