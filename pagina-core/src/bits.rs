//! Bit helpers for page bytes

/// Set the `count` most significant bits of a byte, clear the rest
///
/// On the panel bit 7 is the bottom pixel of a page, so this fills a page
/// column from the bottom up. Counts of 8 or more give `0xFF`.
pub const fn fill_bits_from_msb(count: u8) -> u8 {
    if count >= 8 {
        0xFF
    } else {
        !(0xFF >> count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_bits_from_msb() {
        assert_eq!(fill_bits_from_msb(0), 0x00);
        assert_eq!(fill_bits_from_msb(1), 0x80);
        assert_eq!(fill_bits_from_msb(4), 0xF0);
        assert_eq!(fill_bits_from_msb(7), 0xFE);
        assert_eq!(fill_bits_from_msb(8), 0xFF);
        assert_eq!(fill_bits_from_msb(200), 0xFF);
    }

    #[test]
    fn test_fill_bits_counts_set_bits() {
        for count in 0..=8u8 {
            assert_eq!(fill_bits_from_msb(count).count_ones(), u32::from(count));
        }
    }
}
