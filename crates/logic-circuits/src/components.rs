//! Hardware components, leaves first.
//!
//! Each component exclusively owns its children. Nothing is shared between sibling
//! trees, so evaluating one component never observes another.

pub mod adders;
pub mod cell;
pub mod gates;
