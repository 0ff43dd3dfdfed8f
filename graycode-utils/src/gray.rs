// Binary reflected Gray code generation
//
// Codes are fixed-width strings of '0'/'1', most significant bit first.
// The bit matrix and step statuses are derived once from the code list and
// never mutated afterwards.

use std::fmt;

use crate::errors::{GrayCodeError, GrayCodeResult};
use crate::step::StepStatus;

/// Largest accepted bit count (2^20 codes)
pub const MAX_BITS: u32 = 20;

/// Number of bits per code, validated to `0..=MAX_BITS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitWidth(pub(crate) u32);

impl BitWidth {
    pub fn new(bits: u32) -> GrayCodeResult<Self> {
        if bits > MAX_BITS {
            return Err(GrayCodeError::InvalidArgument(format!(
                "n_bits must be <= {}, got {}",
                MAX_BITS, bits
            )));
        }
        Ok(Self(bits))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for BitWidth {
    type Error = GrayCodeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(GrayCodeError::InvalidArgument(format!(
                "n_bits must be >= 0, got {}",
                value
            )));
        }
        let bits = u32::try_from(value).map_err(|_| {
            GrayCodeError::InvalidArgument(format!("n_bits must be <= {}, got {}", MAX_BITS, value))
        })?;
        Self::new(bits)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generate the n-bit binary reflected Gray code.
///
/// Returns `2^n` codes. The first is all zeros and every adjacent pair
/// (including last → first) differs in exactly one bit. A width of zero
/// yields `["0"]`.
pub fn gray_code(n: BitWidth) -> Vec<String> {
    reflect(n.get())
}

fn reflect(n: u32) -> Vec<String> {
    match n {
        0 => vec!["0".to_string()],
        1 => vec!["0".to_string(), "1".to_string()],
        _ => {
            let prev = reflect(n - 1);
            let mut result = Vec::with_capacity(prev.len() * 2);
            result.extend(prev.iter().map(|code| format!("0{}", code)));
            result.extend(prev.iter().rev().map(|code| format!("1{}", code)));
            result
        }
    }
}

/// Count of differing positions between two equal-length codes
pub fn hamming_distance(a: &str, b: &str) -> usize {
    assert_eq!(a.len(), b.len(), "codes must have equal length");
    a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count()
}

/// Index (from the left) of the first bit where `curr` differs from `prev`.
///
/// Returns None for the first step (no previous code) and for identical codes.
pub fn changed_bit_index(prev: Option<&str>, curr: &str) -> Option<usize> {
    let prev = prev?;
    assert_eq!(prev.len(), curr.len(), "codes must have equal length");
    prev.bytes().zip(curr.bytes()).position(|(p, c)| p != c)
}

/// Plot label for a bit column: column 0 holds the most significant bit
pub fn bit_label(width: usize, column: usize) -> String {
    format!("b{}", width - 1 - column)
}

/// Per-code bit rows, in sequence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<Vec<u8>>,
    width: usize,
}

impl BitMatrix {
    pub fn from_codes(codes: &[String]) -> Self {
        let width = codes.first().map(|c| c.len()).unwrap_or(0);
        let rows = codes
            .iter()
            .map(|code| code.bytes().map(|b| if b == b'1' { 1 } else { 0 }).collect())
            .collect();
        Self { rows, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.rows[row]
    }

    pub fn bit(&self, row: usize, column: usize) -> u8 {
        self.rows[row][column]
    }
}

/// A generated Gray code together with its derived bit matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayCodeSequence {
    n_bits: BitWidth,
    codes: Vec<String>,
    bits: BitMatrix,
}

impl GrayCodeSequence {
    pub fn generate(n_bits: BitWidth) -> Self {
        let codes = gray_code(n_bits);
        let bits = BitMatrix::from_codes(&codes);
        log::debug!(
            "Generated {}-bit Gray code with {} codes",
            n_bits,
            codes.len()
        );
        Self {
            n_bits,
            codes,
            bits,
        }
    }

    pub fn n_bits(&self) -> BitWidth {
        self.n_bits
    }

    /// Number of codes, `2^n_bits` (one for a zero width)
    pub fn code_count(&self) -> usize {
        self.codes.len()
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn bits(&self) -> &BitMatrix {
        &self.bits
    }

    /// Bit flipped on the way into step `index` (None for step 0)
    pub fn changed_bit(&self, index: usize) -> Option<usize> {
        let prev = index.checked_sub(1).map(|i| self.codes[i].as_str());
        changed_bit_index(prev, &self.codes[index])
    }

    pub fn step(&self, index: usize) -> StepStatus {
        StepStatus::new(index, self.codes[index].clone(), self.changed_bit(index))
    }

    pub fn steps(&self) -> impl Iterator<Item = StepStatus> + '_ {
        (0..self.code_count()).map(move |i| self.step(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(n: u32) -> BitWidth {
        BitWidth::new(n).unwrap()
    }

    #[test]
    fn test_two_bit_sequence() {
        assert_eq!(gray_code(width(2)), vec!["00", "01", "11", "10"]);
    }

    #[test]
    fn test_three_bit_sequence() {
        assert_eq!(
            gray_code(width(3)),
            vec!["000", "001", "011", "010", "110", "111", "101", "100"]
        );
    }

    #[test]
    fn test_zero_bits_keeps_single_zero_code() {
        assert_eq!(gray_code(width(0)), vec!["0"]);
    }

    #[test]
    fn test_length_is_power_of_two() {
        for n in 0..=10 {
            assert_eq!(gray_code(width(n)).len(), 1 << n, "n = {}", n);
        }
    }

    #[test]
    fn test_adjacent_codes_differ_by_one_bit() {
        for n in 1..=10 {
            let codes = gray_code(width(n));
            for pair in codes.windows(2) {
                assert_eq!(hamming_distance(&pair[0], &pair[1]), 1, "{:?}", pair);
            }
            // reflection also closes the cycle
            assert_eq!(hamming_distance(&codes[codes.len() - 1], &codes[0]), 1);
        }
    }

    #[test]
    fn test_first_code_is_all_zero() {
        for n in 1..=8 {
            assert_eq!(gray_code(width(n))[0], "0".repeat(n as usize));
        }
    }

    #[test]
    fn test_codes_are_distinct_and_fixed_width() {
        for n in 1..=10 {
            let codes = gray_code(width(n));
            let unique: std::collections::HashSet<&String> = codes.iter().collect();
            assert_eq!(unique.len(), codes.len());
            assert!(codes.iter().all(|c| c.len() == n as usize));
        }
    }

    #[test]
    fn test_matches_xor_shift_formula() {
        let n = 6;
        for (i, code) in gray_code(width(n)).iter().enumerate() {
            let expected = format!("{:0w$b}", i ^ (i >> 1), w = n as usize);
            assert_eq!(code, &expected);
        }
    }

    #[test]
    fn test_bit_width_rejects_negative() {
        let err = BitWidth::try_from(-1i64).unwrap_err();
        assert!(matches!(err, GrayCodeError::InvalidArgument(_)));
    }

    #[test]
    fn test_bit_width_rejects_oversized() {
        assert!(BitWidth::try_from(i64::from(MAX_BITS)).is_ok());
        assert!(BitWidth::try_from(i64::from(MAX_BITS) + 1).is_err());
        assert!(BitWidth::try_from(i64::MAX).is_err());
        assert!(BitWidth::new(MAX_BITS + 1).is_err());
    }

    #[test]
    fn test_changed_bit_index() {
        assert_eq!(changed_bit_index(Some("010"), "011"), Some(2));
        assert_eq!(changed_bit_index(Some("011"), "111"), Some(0));
        assert_eq!(changed_bit_index(Some("101"), "101"), None);
    }

    #[test]
    fn test_changed_bit_index_without_previous() {
        assert_eq!(changed_bit_index(None, "011"), None);
        assert_eq!(changed_bit_index(None, ""), None);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_changed_bit_index_length_mismatch() {
        changed_bit_index(Some("01"), "011");
    }

    #[test]
    fn test_bit_matrix() {
        let seq = GrayCodeSequence::generate(width(3));
        let bits = seq.bits();
        assert_eq!(bits.width(), 3);
        assert_eq!(bits.height(), 8);
        assert_eq!(bits.row(2), &[0, 1, 1]);
        assert_eq!(bits.bit(7, 0), 1);
        assert_eq!(bits.bit(7, 2), 0);
    }

    #[test]
    fn test_sequence_changed_bits() {
        let seq = GrayCodeSequence::generate(width(2));
        let flips: Vec<Option<usize>> = (0..seq.code_count())
            .map(|i| seq.changed_bit(i))
            .collect();
        assert_eq!(flips, vec![None, Some(1), Some(0), Some(1)]);
    }

    #[test]
    fn test_bit_label() {
        assert_eq!(bit_label(4, 0), "b3");
        assert_eq!(bit_label(4, 3), "b0");
    }
}
