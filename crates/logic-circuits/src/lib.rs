//! This crate models digital logic hardware as a tree of composable components.
//!
//! Every component is built from exclusively owned children, leaves first:
//! [`BitCell`] → gates ([`NotGate`], [`AndGate`], [`OrGate`], [`XOrGate`]) →
//! adders ([`HalfAdder`], [`FullAdder`]) → the 8-bit ripple-carry [`Alu`].
//!
//! The wiring of a component is described by the [`Logic`] trait, which is a pure
//! function from inputs to outputs. A [`Component`] pairs that wiring with the
//! inputs currently applied to it and evaluates on demand.
//!
//! # Example
//!
//! ```
//! use logic_circuits::{Alu, Component, XOrGate};
//!
//! let mut xor = Component::<XOrGate>::default();
//! assert!(xor.set_input((true, false)).run());
//!
//! let alu = Component::<Alu>::from_decimal(10, 20).unwrap();
//! assert_eq!(alu.run().to_string(), "00011110");
//! ```

#![deny(missing_docs, unreachable_pub, unused_must_use)]

mod alu;
mod component;
pub mod components;
mod word;

pub use alu::Alu;
pub use component::{Component, Logic, Signals};
pub use components::{
    adders::{AdderResult, FullAdder, HalfAdder},
    cell::{BitCell, CellKind},
    gates::{AndGate, NotGate, OrGate, XOrGate},
};
pub use word::{ValidationError, Word};
