use logic_circuits::ValidationError;

use crate::config::DemoConfigBuilderError;

/// An error that can occur when running the demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("invalid ALU operand: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid configuration: {0}")]
    Config(#[from] DemoConfigBuilderError),
    #[error("expected operands in pairs, got {0} values")]
    UnpairedOperands(usize),
}
