//! Chainviz Core Types and Definitions
//!
//! This crate provides the foundational types for chainviz course
//! diagrams. It includes:
//!
//! - **Colors**: The closed accent palette and CSS color handling
//!   ([`color`] module)
//! - **Model**: The visual element tree that diagram builders produce
//!   and exporters consume ([`model`] module)

pub mod color;
pub mod model;
