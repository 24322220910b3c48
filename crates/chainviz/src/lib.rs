//! Chainviz - annotated blockchain architecture diagrams for the
//! course site.
//!
//! The crate exposes a catalog of diagram builder functions, one per
//! course topic (UTXO model, EVM execution, consensus variants,
//! rollups). Each function is pure and parameterless: it assembles a
//! typed visual tree from literal content, ready for the host site to
//! embed after HTML or JSON export.

pub mod catalog;
pub mod config;
pub mod export;

mod error;

pub use chainviz_core::{color, model};

pub use error::ChainvizError;

use log::{debug, info};

use chainviz_core::model::Diagram;

use config::AppConfig;
use export::Html;

/// Facade for exporting catalog diagrams.
///
/// Holds the application configuration and applies it to every export.
///
/// # Examples
///
/// ```rust
/// use chainviz::{Renderer, catalog, config::AppConfig};
///
/// let diagram = catalog::bitcoin::utxo_transaction();
///
/// // With custom config
/// let config = AppConfig::default();
/// let renderer = Renderer::new(config);
/// let html = renderer.render_html(&diagram).expect("Failed to render");
/// assert!(html.contains("UTXO Transaction Model"));
///
/// // Or use default config
/// let renderer = Renderer::default();
/// ```
#[derive(Default)]
pub struct Renderer {
    config: AppConfig,
}

impl Renderer {
    /// Creates a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Renders a diagram tree to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns `ChainvizError` if the configured style options are
    /// invalid (for example an unparseable background color).
    pub fn render_html(&self, diagram: &Diagram) -> Result<String, ChainvizError> {
        info!(title = diagram.title(); "Rendering diagram to HTML");

        let exporter = Html::new(self.config.style())?;
        let fragment = exporter.render(diagram);

        debug!(bytes = fragment.len(); "Diagram rendered");

        Ok(fragment)
    }

    /// Renders a diagram tree to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `ChainvizError` if serialization fails.
    pub fn render_json(&self, diagram: &Diagram) -> Result<String, ChainvizError> {
        info!(title = diagram.title(); "Rendering diagram to JSON");

        export::to_json(diagram)
    }
}
