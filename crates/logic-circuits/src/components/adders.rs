//! Half and full adders.

use crate::{
    components::gates::{AndGate, OrGate, XOrGate},
    Logic,
};

/// The output of an adder stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdderResult<T = bool> {
    /// Sum output.
    pub sum: T,
    /// Carry output.
    pub carry: bool,
}

impl<T> AdderResult<T> {
    /// Creates a new adder result.
    pub fn new(sum: T, carry: bool) -> Self {
        Self { sum, carry }
    }
}

impl<T> From<(T, bool)> for AdderResult<T> {
    fn from((sum, carry): (T, bool)) -> Self {
        Self { sum, carry }
    }
}

/// Adds two bits without a carry-in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HalfAdder {
    xor: XOrGate,
    and: AndGate,
}

impl Logic for HalfAdder {
    const NAME: &'static str = "HalfAdder";

    type Input = (bool, bool);
    type Output = AdderResult;

    #[inline]
    fn eval(&self, input: (bool, bool)) -> AdderResult {
        AdderResult {
            sum: self.xor.eval(input),
            carry: self.and.eval(input),
        }
    }

    fn cell_count(&self) -> usize {
        self.xor.cell_count() + self.and.cell_count()
    }
}

/// Adds two bits and a carry-in.
///
/// `sum = a ⊕ b ⊕ c` and `carry = majority(a, b, c)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FullAdder {
    half_1: HalfAdder,
    half_2: HalfAdder,
    or: OrGate,
}

impl Logic for FullAdder {
    const NAME: &'static str = "FullAdder";

    type Input = (bool, bool, bool);
    type Output = AdderResult;

    #[inline]
    fn eval(&self, (a, b, c): (bool, bool, bool)) -> AdderResult {
        let first = self.half_1.eval((a, b));
        let second = self.half_2.eval((first.sum, c));

        AdderResult {
            sum: second.sum,
            carry: self.or.eval((first.carry, second.carry)),
        }
    }

    fn cell_count(&self) -> usize {
        self.half_1.cell_count() + self.half_2.cell_count() + self.or.cell_count()
    }
}
