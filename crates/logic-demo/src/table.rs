//! Truth tables for the gates and adders.

use clap::ValueEnum;
use logic_circuits::{
    AdderResult, AndGate, Component, FullAdder, HalfAdder, Logic, NotGate, OrGate, XOrGate,
};

/// Input pairs, in the order the tables are printed.
pub const PAIRS: [(bool, bool); 4] = [(true, true), (true, false), (false, true), (false, false)];

/// A component whose truth table can be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GateKind {
    Not,
    And,
    Or,
    Xor,
    HalfAdder,
    FullAdder,
}

impl GateKind {
    /// Every printable component.
    pub const ALL: [GateKind; 6] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Xor,
        GateKind::Not,
        GateKind::HalfAdder,
        GateKind::FullAdder,
    ];

    /// Returns the name of the component.
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Not => NotGate::NAME,
            GateKind::And => AndGate::NAME,
            GateKind::Or => OrGate::NAME,
            GateKind::Xor => XOrGate::NAME,
            GateKind::HalfAdder => HalfAdder::NAME,
            GateKind::FullAdder => FullAdder::NAME,
        }
    }

    /// Computes the truth table of the component.
    pub fn table(&self) -> Vec<Row> {
        match self {
            GateKind::Not => {
                let mut gate = Component::<NotGate>::default();
                [true, false]
                    .into_iter()
                    .map(|a| Row::new(vec![a], gate.set_input(a).run().to_string()))
                    .collect()
            }
            GateKind::And => binary_table(Component::<AndGate>::default()),
            GateKind::Or => binary_table(Component::<OrGate>::default()),
            GateKind::Xor => binary_table(Component::<XOrGate>::default()),
            GateKind::HalfAdder => {
                let mut adder = Component::<HalfAdder>::default();
                PAIRS
                    .into_iter()
                    .map(|(a, b)| Row::new(vec![a, b], render_adder(adder.set_input((a, b)).run())))
                    .collect()
            }
            GateKind::FullAdder => {
                let mut adder = Component::<FullAdder>::default();
                [true, false]
                    .into_iter()
                    .flat_map(|a| PAIRS.into_iter().map(move |(b, c)| (a, b, c)))
                    .map(|(a, b, c)| {
                        Row::new(vec![a, b, c], render_adder(adder.set_input((a, b, c)).run()))
                    })
                    .collect()
            }
        }
    }
}

/// A single row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub inputs: Vec<bool>,
    pub output: String,
}

impl Row {
    fn new(inputs: Vec<bool>, output: String) -> Self {
        Self { inputs, output }
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for input in &self.inputs {
            write!(f, "{} ", input)?;
        }
        write!(f, "-> {}", self.output)
    }
}

fn binary_table<L>(mut gate: Component<L>) -> Vec<Row>
where
    L: Logic<Input = (bool, bool), Output = bool>,
{
    PAIRS
        .into_iter()
        .map(|(a, b)| Row::new(vec![a, b], gate.set_input((a, b)).run().to_string()))
        .collect()
}

fn render_adder(result: AdderResult) -> String {
    format!("sum={} carry={}", result.sum, result.carry)
}
