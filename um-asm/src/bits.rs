//! Bit-field packing and unpacking over 64-bit words.
//!
//! Fields are numbered big-endian: bit 0 is the least significant bit, and a
//! field's `lsb` is the position of its own least significant bit within the
//! word. Shifting by 64 is defined as zero, since that is undefined behavior
//! for native integer shifts and the original Universal Machine relies on it.

use thiserror::Error;

/// The value supplied to [`set_field`] does not fit in the requested width.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("value {value:#x} does not fit in a {width}-bit field")]
pub struct BitpackOverflow {
    /// The width of the field that was requested.
    pub width: u32,
    /// The value that was rejected.
    pub value: u64,
}

fn shl(word: u64, bits: u32) -> u64 {
    if bits >= 64 {
        0
    } else {
        word << bits
    }
}

fn shr(word: u64, bits: u32) -> u64 {
    if bits >= 64 {
        0
    } else {
        word >> bits
    }
}

fn fits_unsigned(value: u64, width: u32) -> bool {
    shr(value, width) == 0
}

/// Extracts the `width`-bit unsigned field whose least significant bit sits
/// at position `lsb` of `word`.
///
/// # Panics
///
/// Panics if `width > 64` or `lsb + width > 64`, which are programmer errors
/// (every call site in this crate uses fixed, in-range constants).
pub fn get_field(word: u64, width: u32, lsb: u32) -> u64 {
    assert!(width <= 64);
    let hi = lsb + width;
    assert!(hi <= 64);

    shr(shl(word, 64 - hi), 64 - width)
}

/// Returns `word` with the `width`-bit field at `lsb` replaced by `value`.
///
/// # Errors
///
/// Returns [`BitpackOverflow`] if `value` does not fit in `width` bits.
///
/// # Panics
///
/// Panics if `width > 64` or `lsb + width > 64`.
pub fn set_field(word: u64, width: u32, lsb: u32, value: u64) -> Result<u64, BitpackOverflow> {
    assert!(width <= 64);
    let hi = lsb + width;
    assert!(hi <= 64);

    if !fits_unsigned(value, width) {
        return Err(BitpackOverflow { width, value });
    }

    let high_part = shl(shr(word, hi), hi);
    let low_part = shr(shl(word, 64 - lsb), 64 - lsb);
    let new_part = value << lsb;

    Ok(high_part | low_part | new_part)
}

/// Reads one big-endian `u32` word from a byte source, four bytes at a time.
///
/// Returns `Ok(None)` if the stream ends cleanly before any byte of the next
/// word is read. A partial final word (1-3 trailing bytes) is zero-extended,
/// matching the loader's tolerance for malformed trailing bytes even though
/// well-formed program files never produce one.
pub fn read_word_be<R: std::io::Read>(mut source: R) -> std::io::Result<Option<u32>> {
    let mut buf = [0u8; 4];
    let mut read = 0;

    while read < 4 {
        match source.read(&mut buf[read..])? {
            0 => break,
            n => read += n,
        }
    }

    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(u32::from_be_bytes(buf)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_by_64_is_zero() {
        assert_eq!(shl(0xffff_ffff_ffff_ffff, 64), 0);
        assert_eq!(shr(0xffff_ffff_ffff_ffff, 64), 0);
    }

    #[test]
    fn get_field_extracts_opcode_nibble() {
        let word = 0x7000_0000u64;
        assert_eq!(get_field(word, 4, 28), 0x7);
    }

    #[test]
    fn set_field_rejects_oversized_value() {
        assert_eq!(
            set_field(0, 4, 0, 16),
            Err(BitpackOverflow { width: 4, value: 16 })
        );
    }

    #[test]
    fn set_field_then_get_field_round_trips() {
        let word = set_field(0, 25, 0, 0x1ab_cdef).unwrap();
        assert_eq!(get_field(word, 25, 0), 0x1ab_cdef);
    }

    #[quickcheck_macros::quickcheck]
    fn round_trip_any_width_up_to_32(lsb_seed: u8, width_seed: u8, value: u32) -> bool {
        let width = (width_seed % 32 + 1) as u32;
        let lsb = (lsb_seed as u32) % (64 - width);
        let value = (value as u64) & ((1u64 << width) - 1);

        let packed = set_field(0, width, lsb, value).unwrap();
        get_field(packed, width, lsb) == value
    }

    #[test]
    fn read_word_be_packs_most_significant_byte_first() {
        let bytes = [0x01u8, 0x02, 0x03, 0x04];
        let word = read_word_be(&bytes[..]).unwrap();
        assert_eq!(word, Some(0x0102_0304));
    }

    #[test]
    fn read_word_be_reports_clean_end_of_stream() {
        let bytes: [u8; 0] = [];
        assert_eq!(read_word_be(&bytes[..]).unwrap(), None);
    }

    #[test]
    fn read_word_be_zero_extends_partial_trailing_word() {
        let bytes = [0xaa, 0xbb];
        let word = read_word_be(&bytes[..]).unwrap();
        assert_eq!(word, Some(0xaabb_0000));
    }
}
