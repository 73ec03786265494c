//! Prints truth tables for the logic gates and adders, then runs additions on the
//! 8-bit ALU.

mod config;
mod error;
mod table;

use clap::Parser;
use logic_circuits::{Alu, Component};
use tracing::Level;

use crate::{
    config::{Addition, DemoConfig},
    error::DemoError,
    table::GateKind,
};

#[derive(Debug, Parser)]
#[clap(name = "logic-demo", about = "Exercise the logic gate and ALU models")]
struct Args {
    /// Component to print a truth table for. Defaults to all of them.
    #[clap(long = "gate", value_enum)]
    gates: Vec<GateKind>,
    /// Add two integers in 0..=255 on the ALU.
    #[clap(long, number_of_values = 2, value_names = &["X", "Y"])]
    add: Vec<u32>,
    /// Add two 8-bit strings, most significant bit first.
    #[clap(long = "add-bits", number_of_values = 2, value_names = &["X", "Y"])]
    add_bits: Vec<String>,
    /// Log every truth table row.
    #[clap(short, long)]
    verbose: bool,
}

impl TryFrom<Args> for DemoConfig {
    type Error = DemoError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mut builder = DemoConfig::builder();

        if !args.gates.is_empty() {
            builder.gates(args.gates);
        }

        let additions = pairs(args.add)?
            .map(|(x, y)| Addition::Decimal(x, y))
            .chain(pairs(args.add_bits)?.map(|(x, y)| Addition::Bits(x, y)))
            .collect::<Vec<_>>();
        if !additions.is_empty() {
            builder.additions(additions);
        }

        if args.verbose {
            builder.level(Level::DEBUG);
        }

        Ok(builder.build()?)
    }
}

fn pairs<T>(values: Vec<T>) -> Result<impl Iterator<Item = (T, T)>, DemoError> {
    if values.len() % 2 != 0 {
        return Err(DemoError::UnpairedOperands(values.len()));
    }

    let mut values = values.into_iter();
    Ok(std::iter::from_fn(move || Some((values.next()?, values.next()?))))
}

fn print_tables(config: &DemoConfig) {
    for kind in &config.gates {
        tracing::info!("Testing {}", kind.name());
        println!("{}", kind.name());

        for row in kind.table() {
            tracing::debug!("{}", row);
            println!("  {}", row);
        }

        println!();
    }
}

fn run_additions(config: &DemoConfig) -> Result<(), DemoError> {
    for addition in &config.additions {
        let alu = match addition {
            Addition::Decimal(x, y) => Component::<Alu>::from_decimal(*x, *y)?,
            Addition::Bits(x, y) => Component::<Alu>::from_bits(x, y)?,
        };

        let (x, y) = alu.input();
        let sum = alu.run();

        tracing::debug!(%alu, %sum, "added");
        if alu.carry_out() {
            println!("{} + {} = {} (carry-out)", x, y, sum);
        } else {
            println!("{} + {} = {}", x, y, sum);
        }
    }

    Ok(())
}

fn main() -> Result<(), DemoError> {
    let config = DemoConfig::try_from(Args::parse())?;

    tracing_subscriber::fmt()
        .with_max_level(config.level())
        .init();

    print_tables(&config);
    run_additions(&config)
}
