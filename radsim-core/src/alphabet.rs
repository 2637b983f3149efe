//! IUPAC nucleotide alphabet used for recognition-site matching.
//!
//! Every accepted symbol maps to a 4-bit mask of the bases it stands for
//! (`A = 0b0001`, `C = 0b0010`, `G = 0b0100`, `T = 0b1000`). A sequence symbol
//! matches a pattern symbol when its base set is contained in the pattern's set,
//! so an `N` in a genome never satisfies a concrete base of a recognition site.

/// Lookup table from ASCII byte to IUPAC base mask. Bytes outside the
/// alphabet map to `0`.
const IUPAC_MASK_ARRAY: [u8; 256] = {
    let mut arr = [0u8; 256];
    arr[b'A' as usize] = 0b0001;
    arr[b'C' as usize] = 0b0010;
    arr[b'G' as usize] = 0b0100;
    arr[b'T' as usize] = 0b1000;
    arr[b'U' as usize] = 0b1000; // U (RNA)
    arr[b'R' as usize] = 0b0101; // A or G
    arr[b'Y' as usize] = 0b1010; // C or T
    arr[b'S' as usize] = 0b0110; // G or C
    arr[b'W' as usize] = 0b1001; // A or T
    arr[b'K' as usize] = 0b1100; // G or T
    arr[b'M' as usize] = 0b0011; // A or C
    arr[b'B' as usize] = 0b1110; // C or G or T
    arr[b'D' as usize] = 0b1101; // A or G or T
    arr[b'H' as usize] = 0b1011; // A or C or T
    arr[b'V' as usize] = 0b0111; // A or C or G
    arr[b'N' as usize] = 0b1111; // any base
    // lowercase variants
    arr[b'a' as usize] = 0b0001;
    arr[b'c' as usize] = 0b0010;
    arr[b'g' as usize] = 0b0100;
    arr[b't' as usize] = 0b1000;
    arr[b'u' as usize] = 0b1000;
    arr[b'r' as usize] = 0b0101;
    arr[b'y' as usize] = 0b1010;
    arr[b's' as usize] = 0b0110;
    arr[b'w' as usize] = 0b1001;
    arr[b'k' as usize] = 0b1100;
    arr[b'm' as usize] = 0b0011;
    arr[b'b' as usize] = 0b1110;
    arr[b'd' as usize] = 0b1101;
    arr[b'h' as usize] = 0b1011;
    arr[b'v' as usize] = 0b0111;
    arr[b'n' as usize] = 0b1111;
    arr
};

/// Returns the IUPAC base mask for `byte`, or `0` if it is not a nucleotide symbol.
#[inline]
pub const fn iupac_mask(byte: u8) -> u8 {
    IUPAC_MASK_ARRAY[byte as usize]
}

#[inline]
pub const fn is_valid_base(byte: u8) -> bool {
    iupac_mask(byte) != 0
}

/// Checks whether a sequence symbol (given as its mask) is compatible with a
/// pattern symbol (given as its mask).
#[inline]
pub fn mask_matches(sequence_mask: u8, pattern_mask: u8) -> bool {
    sequence_mask != 0 && sequence_mask & !pattern_mask == 0
}

/// Find the first byte in `sequence` that is not part of the IUPAC alphabet.
///
/// Returns the position and the offending byte.
pub fn find_invalid_base(sequence: &[u8]) -> Option<(usize, u8)> {
    sequence
        .iter()
        .position(|&b| !is_valid_base(b))
        .map(|pos| (pos, sequence[pos]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(b'A', b'A', true)]
    #[case(b'a', b'A', true)]
    #[case(b'A', b'R', true)]
    #[case(b'G', b'R', true)]
    #[case(b'C', b'R', false)]
    #[case(b'N', b'A', false)]
    #[case(b'N', b'N', true)]
    #[case(b'R', b'N', true)]
    #[case(b'R', b'A', false)]
    #[case(b'W', b'W', true)]
    #[case(b'T', b'W', true)]
    #[case(b'U', b'T', true)]
    fn test_symbol_compatibility(#[case] seq: u8, #[case] pat: u8, #[case] expected: bool) {
        assert_eq!(mask_matches(iupac_mask(seq), iupac_mask(pat)), expected);
    }

    #[rstest]
    fn test_invalid_bytes_never_match() {
        assert_eq!(iupac_mask(b'X'), 0);
        assert_eq!(iupac_mask(b'-'), 0);
        assert!(!mask_matches(iupac_mask(b'*'), iupac_mask(b'N')));
    }

    #[rstest]
    fn test_find_invalid_base() {
        assert_eq!(find_invalid_base(b"ACGTNacgtn"), None);
        assert_eq!(find_invalid_base(b"ACGTXACGT"), Some((4, b'X')));
        assert_eq!(find_invalid_base(b""), None);
    }
}
