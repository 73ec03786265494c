use std::{fmt, str::FromStr};

use itybity::{FromBitIterator, IntoBits};
use rand::Rng;

/// An error that can occur when converting a value into a [`Word`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ValidationError {
    #[error("Invalid operand length: expected {expected} bits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Invalid character {found:?} at index {index}: expected '0' or '1'")]
    InvalidCharacter { index: usize, found: char },
    #[error("Value {0} does not fit in {bits} bits", bits = Word::BITS)]
    OutOfRange(u32),
}

/// An 8-bit ALU operand.
///
/// Bits are stored most significant first: index 0 is the MSB and index 7 the LSB.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word([bool; Word::BITS]);

impl Word {
    /// Bit width of a word.
    pub const BITS: usize = 8;

    /// Creates a word from its bits, most significant first.
    pub fn from_bits(bits: [bool; Word::BITS]) -> Self {
        Self(bits)
    }

    /// Returns the bits of the word, most significant first.
    pub fn bits(&self) -> [bool; Word::BITS] {
        self.0
    }

    /// Returns the bit at the given index, where index 0 is the MSB.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Word::BITS`.
    pub fn bit(&self, index: usize) -> bool {
        self.0[index]
    }

    /// Returns the unsigned value of the word.
    pub fn to_u8(&self) -> u8 {
        u8::from_msb0_iter(self.0)
    }

    /// Generates a random word.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from(rng.gen::<u8>())
    }
}

impl From<u8> for Word {
    fn from(value: u8) -> Self {
        let mut bits = [false; Word::BITS];
        for (bit, value) in bits.iter_mut().zip(value.into_iter_msb0()) {
            *bit = value;
        }

        Self(bits)
    }
}

impl From<Word> for u8 {
    fn from(word: Word) -> Self {
        word.to_u8()
    }
}

impl TryFrom<u32> for Word {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Word::from)
            .map_err(|_| ValidationError::OutOfRange(value))
    }
}

impl FromStr for Word {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != Word::BITS {
            return Err(ValidationError::InvalidLength {
                expected: Word::BITS,
                actual,
            });
        }

        let mut bits = [false; Word::BITS];
        for (index, (bit, found)) in bits.iter_mut().zip(s.chars()).enumerate() {
            *bit = match found {
                '0' => false,
                '1' => true,
                _ => return Err(ValidationError::InvalidCharacter { index, found }),
            };
        }

        Ok(Self(bits))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(0, "00000000")]
    #[case(1, "00000001")]
    #[case(10, "00001010")]
    #[case(128, "10000000")]
    #[case(255, "11111111")]
    fn test_word_from_u8(#[case] value: u8, #[case] expected: &str) {
        let word = Word::from(value);

        assert_eq!(word.to_string(), expected);
        assert_eq!(expected.parse::<Word>().unwrap(), word);
        assert_eq!(word.to_u8(), value);
    }

    #[test]
    fn test_word_bit_order() {
        let word = Word::from(1);

        assert!(word.bit(7));
        assert!(!word.bit(0));
        assert_eq!(
            Word::from(0b1000_0001).bits(),
            [true, false, false, false, false, false, false, true]
        );
    }

    #[rstest]
    #[case("", ValidationError::InvalidLength { expected: 8, actual: 0 })]
    #[case("0000000", ValidationError::InvalidLength { expected: 8, actual: 7 })]
    #[case("000000000", ValidationError::InvalidLength { expected: 8, actual: 9 })]
    #[case("0000000x", ValidationError::InvalidCharacter { index: 7, found: 'x' })]
    #[case("2xxxxxxx", ValidationError::InvalidCharacter { index: 0, found: '2' })]
    fn test_word_parse_invalid(#[case] input: &str, #[case] expected: ValidationError) {
        assert_eq!(input.parse::<Word>().unwrap_err(), expected);
    }

    #[test]
    fn test_word_try_from_u32() {
        assert_eq!(Word::try_from(255u32).unwrap(), Word::from(255));
        assert_eq!(
            Word::try_from(256u32).unwrap_err(),
            ValidationError::OutOfRange(256)
        );
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::OutOfRange(300).to_string(),
            "Value 300 does not fit in 8 bits"
        );
    }
}
