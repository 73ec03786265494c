//! 8-bit ripple-carry arithmetic unit.

use crate::{
    components::adders::{AdderResult, FullAdder, HalfAdder},
    Component, Logic, ValidationError, Word,
};

/// Number of full adder stages following the least significant half adder.
const FULL_STAGES: usize = Word::BITS - 1;

/// An 8-bit ripple-carry adder.
///
/// The least significant bit is added by a [`HalfAdder`], every other bit by a
/// [`FullAdder`] whose carry-in is the carry-out of the next lower stage. Carry
/// therefore ripples from bit index 7 (LSB) towards bit index 0 (MSB).
///
/// The carry-out of the most significant stage is dropped by [`Logic::eval`], so
/// additions wrap modulo 256. Use [`Alu::add`] to observe it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Alu {
    half: HalfAdder,
    /// Stage `i` adds bit index `FULL_STAGES - 1 - i`.
    stages: [FullAdder; FULL_STAGES],
}

impl Alu {
    /// Adds two words, returning the sum and the carry-out of the most significant
    /// stage.
    pub fn add(&self, x: Word, y: Word) -> AdderResult<Word> {
        let (x, y) = (x.bits(), y.bits());
        let mut sum = [false; Word::BITS];

        let lsb = Word::BITS - 1;
        let AdderResult { sum: bit, mut carry } = self.half.eval((x[lsb], y[lsb]));
        sum[lsb] = bit;

        for (stage, idx) in self.stages.iter().zip((0..lsb).rev()) {
            let result = stage.eval((x[idx], y[idx], carry));
            sum[idx] = result.sum;
            carry = result.carry;
        }

        AdderResult::new(Word::from_bits(sum), carry)
    }
}

impl Logic for Alu {
    const NAME: &'static str = "Alu";

    type Input = (Word, Word);
    type Output = Word;

    fn eval(&self, (x, y): (Word, Word)) -> Word {
        self.add(x, y).sum
    }

    fn cell_count(&self) -> usize {
        self.half.cell_count()
            + self
                .stages
                .iter()
                .map(|stage| stage.cell_count())
                .sum::<usize>()
    }
}

impl Component<Alu> {
    /// Creates an ALU from two operands written as 8-character bit strings, most
    /// significant bit first.
    ///
    /// # Arguments
    ///
    /// * `x` - The first operand, e.g. `"00001010"`.
    /// * `y` - The second operand.
    #[tracing::instrument(level = "debug", err)]
    pub fn from_bits(x: &str, y: &str) -> Result<Self, ValidationError> {
        Ok(Self::new((x.parse()?, y.parse()?)))
    }

    /// Creates an ALU from two integers in the range `0..=255`.
    #[tracing::instrument(level = "debug", err)]
    pub fn from_decimal(x: u32, y: u32) -> Result<Self, ValidationError> {
        Ok(Self::new((Word::try_from(x)?, Word::try_from(y)?)))
    }

    /// Returns the carry-out of the most significant stage for the current inputs.
    ///
    /// [`Component::run`] discards this bit.
    pub fn carry_out(&self) -> bool {
        let (x, y) = self.input();
        self.logic().add(x, y).carry
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("00000000", "00000000", "00000000")]
    #[case("00001010", "00000101", "00001111")]
    #[case("11111111", "00000001", "00000000")]
    #[case("00000001", "00000001", "00000010")]
    #[case("01111111", "00000001", "10000000")]
    fn test_alu_bits(#[case] x: &str, #[case] y: &str, #[case] expected: &str) {
        let alu = Component::<Alu>::from_bits(x, y).unwrap();

        assert_eq!(alu.run().to_string(), expected);
    }

    #[test]
    fn test_alu_decimal() {
        let alu = Component::<Alu>::from_decimal(10, 20).unwrap();

        assert_eq!(alu.run().to_string(), "00011110");
        assert!(!alu.carry_out());
    }

    #[test]
    fn test_alu_carry_out() {
        let mut alu = Component::<Alu>::from_decimal(255, 1).unwrap();
        assert!(alu.carry_out());

        alu.set_input((Word::from(127), Word::from(1)));
        assert!(!alu.carry_out());

        assert_eq!(
            Alu::default().add(Word::from(200), Word::from(100)),
            AdderResult::new(Word::from(44), true)
        );
    }

    #[test]
    fn test_alu_rejects_invalid_operands() {
        assert_eq!(
            Component::<Alu>::from_bits("0101", "00000000").unwrap_err(),
            ValidationError::InvalidLength {
                expected: 8,
                actual: 4
            }
        );
        assert_eq!(
            Component::<Alu>::from_bits("00000000", "0000000a").unwrap_err(),
            ValidationError::InvalidCharacter {
                index: 7,
                found: 'a'
            }
        );
        assert_eq!(
            Component::<Alu>::from_decimal(1, 256).unwrap_err(),
            ValidationError::OutOfRange(256)
        );
    }

    #[test]
    fn test_alu_display() {
        let alu = Component::<Alu>::from_decimal(3, 4).unwrap();

        assert_eq!(alu.to_string(), "Alu(00000011, 00000100)");
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(Alu::default().cell_count(), 149);
    }
}
