//! Logic gates built from bit cells.

use crate::{components::cell::BitCell, Logic};

/// Inverter gate.
///
/// Owns a single inverting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotGate {
    cell: BitCell,
}

impl Default for NotGate {
    fn default() -> Self {
        Self {
            cell: BitCell::invert(),
        }
    }
}

impl Logic for NotGate {
    const NAME: &'static str = "NotGate";

    type Input = bool;
    type Output = bool;

    #[inline]
    fn eval(&self, a: bool) -> bool {
        self.cell.eval(a)
    }

    fn cell_count(&self) -> usize {
        self.cell.cell_count()
    }
}

/// AND gate.
///
/// Outputs `true` iff both of its cells read `true`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AndGate {
    x: BitCell,
    y: BitCell,
}

impl Logic for AndGate {
    const NAME: &'static str = "AndGate";

    type Input = (bool, bool);
    type Output = bool;

    #[inline]
    fn eval(&self, (a, b): (bool, bool)) -> bool {
        self.x.eval(a) && self.y.eval(b)
    }

    fn cell_count(&self) -> usize {
        self.x.cell_count() + self.y.cell_count()
    }
}

/// OR gate.
///
/// Outputs `true` iff either of its cells reads `true`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrGate {
    x: BitCell,
    y: BitCell,
}

impl Logic for OrGate {
    const NAME: &'static str = "OrGate";

    type Input = (bool, bool);
    type Output = bool;

    #[inline]
    fn eval(&self, (a, b): (bool, bool)) -> bool {
        self.x.eval(a) || self.y.eval(b)
    }

    fn cell_count(&self) -> usize {
        self.x.cell_count() + self.y.cell_count()
    }
}

/// XOR gate.
///
/// Not a primitive: it is decomposed as `(¬(a ∧ b)) ∧ (a ∨ b)`.
///
/// ```text
///  a ──┬──[and_1]──[not]──┐
///      │                  ├──[and_2]── out
///  b ──┴──[or]────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XOrGate {
    and_1: AndGate,
    or: OrGate,
    not: NotGate,
    and_2: AndGate,
}

impl Logic for XOrGate {
    const NAME: &'static str = "XOrGate";

    type Input = (bool, bool);
    type Output = bool;

    #[inline]
    fn eval(&self, (a, b): (bool, bool)) -> bool {
        let nand = self.not.eval(self.and_1.eval((a, b)));
        let or = self.or.eval((a, b));

        self.and_2.eval((nand, or))
    }

    fn cell_count(&self) -> usize {
        self.and_1.cell_count()
            + self.or.cell_count()
            + self.not.cell_count()
            + self.and_2.cell_count()
    }
}
