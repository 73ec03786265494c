use derive_builder::Builder;
use tracing::Level;

use crate::table::GateKind;

/// An addition to perform on the ALU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addition {
    /// Operands given as integers.
    Decimal(u32, u32),
    /// Operands given as 8-character bit strings.
    Bits(String, String),
}

/// Demo configuration.
#[derive(Debug, Clone, Builder)]
pub struct DemoConfig {
    /// Components to print truth tables for.
    #[builder(default = "GateKind::ALL.to_vec()")]
    pub(crate) gates: Vec<GateKind>,
    /// Additions to run on the ALU.
    #[builder(default = "default_additions()")]
    pub(crate) additions: Vec<Addition>,
    /// Maximum log level.
    #[builder(default = "Level::INFO")]
    pub(crate) level: Level,
}

impl DemoConfig {
    /// Creates a new builder for the demo configuration.
    pub fn builder() -> DemoConfigBuilder {
        DemoConfigBuilder::default()
    }

    /// Returns the maximum log level.
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfigBuilder::default().build().unwrap()
    }
}

fn default_additions() -> Vec<Addition> {
    vec![
        Addition::Decimal(10, 20),
        Addition::Bits("00000000".to_string(), "00000000".to_string()),
        Addition::Bits("00001010".to_string(), "00000101".to_string()),
        Addition::Bits("11111111".to_string(), "00000001".to_string()),
    ]
}
