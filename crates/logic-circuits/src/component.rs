use std::fmt::{self, Display};

use crate::Word;

/// The wiring of a hardware component.
///
/// `eval` is a pure function of the input: a component recurses into the children it
/// owns and threads their outputs into one another. Evaluation order between siblings
/// follows from those data dependencies alone.
pub trait Logic {
    /// Name of the component, used when displaying it.
    const NAME: &'static str;

    /// The signals accepted by the component.
    type Input: Copy;
    /// The signals produced by the component.
    type Output;

    /// Evaluates the component for the given input.
    fn eval(&self, input: Self::Input) -> Self::Output;

    /// Returns the number of bit cells in the component tree.
    fn cell_count(&self) -> usize;
}

/// Input signals that can be rendered as a comma separated list.
pub trait Signals: Copy {
    /// Writes the signals to the formatter.
    fn write_signals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Signals for bool {
    fn write_signals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Signals for (bool, bool) {
    fn write_signals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.0, self.1)
    }
}

impl Signals for (bool, bool, bool) {
    fn write_signals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

impl Signals for (Word, Word) {
    fn write_signals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.0, self.1)
    }
}

/// A hardware component with its current inputs applied.
///
/// Only the inputs of the outermost node are stored. Reading the output with
/// [`Component::run`] evaluates the owned tree against those inputs, so construction
/// and [`Component::set_input`] share a single path.
pub struct Component<L: Logic> {
    logic: L,
    input: L::Input,
}

impl<L> fmt::Debug for Component<L>
where
    L: Logic + fmt::Debug,
    L::Input: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("logic", &self.logic)
            .field("input", &self.input)
            .finish()
    }
}

impl<L> Clone for Component<L>
where
    L: Logic + Clone,
{
    fn clone(&self) -> Self {
        Self {
            logic: self.logic.clone(),
            input: self.input,
        }
    }
}

impl<L> Component<L>
where
    L: Logic + Default,
{
    /// Creates a new component with the given inputs.
    pub fn new(input: L::Input) -> Self {
        Self::with_logic(L::default(), input)
    }
}

impl<L: Logic> Component<L> {
    /// Creates a new component from existing wiring.
    pub fn with_logic(logic: L, input: L::Input) -> Self {
        Self { logic, input }
    }

    /// Returns the wiring of the component.
    pub fn logic(&self) -> &L {
        &self.logic
    }

    /// Returns the inputs currently applied to the component.
    pub fn input(&self) -> L::Input {
        self.input
    }

    /// Replaces the inputs of the component.
    ///
    /// Returns the component to allow chaining a call to [`Component::run`].
    pub fn set_input(&mut self, input: L::Input) -> &mut Self {
        self.input = input;
        self
    }

    /// Evaluates the component against its current inputs.
    pub fn run(&self) -> L::Output {
        tracing::trace!(component = L::NAME, "evaluating");
        self.logic.eval(self.input)
    }
}

impl<L> Default for Component<L>
where
    L: Logic + Default,
    L::Input: Default,
{
    fn default() -> Self {
        Self::new(L::Input::default())
    }
}

impl<L> Display for Component<L>
where
    L: Logic,
    L::Input: Signals,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", L::NAME)?;
        self.input.write_signals(f)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AndGate, FullAdder, HalfAdder, NotGate, OrGate};

    #[test]
    fn test_default_is_all_false() {
        let gate = Component::<AndGate>::default();

        assert_eq!(gate.input(), (false, false));
        assert!(!gate.run());
    }

    #[test]
    fn test_set_input_chains() {
        let mut gate = Component::<OrGate>::default();

        assert!(gate.set_input((false, true)).run());
        assert!(!gate.set_input((false, false)).run());
    }

    #[test]
    fn test_run_is_idempotent() {
        let adder = Component::<FullAdder>::new((true, false, true));

        let first = adder.run();
        let second = adder.run();

        assert_eq!(first, second);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Component::<AndGate>::new((true, false)).to_string(),
            "AndGate(true, false)"
        );
        assert_eq!(Component::<NotGate>::new(true).to_string(), "NotGate(true)");
        assert_eq!(
            Component::<FullAdder>::new((true, false, true)).to_string(),
            "FullAdder(true, false, true)"
        );
        assert_eq!(
            Component::<HalfAdder>::default().to_string(),
            "HalfAdder(false, false)"
        );
    }
}
