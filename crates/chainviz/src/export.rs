//! Exporters for diagram trees.
//!
//! - [`html`] walks a [`Diagram`](chainviz_core::model::Diagram) and
//!   emits an HTML fragment for the host site to embed.
//! - [`json`] serializes the tree for programmatic consumers.

pub mod html;
pub mod json;

pub use html::Html;
pub use json::to_json;
