//! CLI logic for the chainviz diagram exporter.
//!
//! This module contains the core CLI logic for rendering catalog
//! entries to HTML or JSON files.

mod args;
mod config;

pub use args::{Args, Format};

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use chainviz::{
    ChainvizError, Renderer,
    catalog::{self, CatalogEntry},
};

/// Run the chainviz CLI application
///
/// Resolves the requested catalog entries, renders them with the loaded
/// configuration, and writes the results to disk. `--list` prints the
/// catalog instead of rendering.
///
/// # Errors
///
/// Returns `ChainvizError` for:
/// - Unknown diagram slugs
/// - Configuration loading errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), ChainvizError> {
    if args.list {
        for entry in catalog::entries() {
            let title = (entry.build)().title().to_string();
            println!("{:<26} [{}] {}", entry.slug, entry.section, title);
        }
        return Ok(());
    }

    let app_config = config::load_config(args.config.as_ref())?;
    let renderer = Renderer::new(app_config);

    if args.all {
        let dir = PathBuf::from(args.output.as_deref().unwrap_or("diagrams"));
        fs::create_dir_all(&dir)?;

        for entry in catalog::entries() {
            let path = dir.join(format!("{}.{}", entry.slug, args.format.extension()));
            export_entry(&renderer, entry, args.format, &path)?;
        }

        info!(count = catalog::entries().len(), dir = dir.display().to_string(); "Catalog exported");
        return Ok(());
    }

    let slug = args.slug.as_deref().ok_or_else(|| {
        ChainvizError::Config("nothing to render; pass a slug, --all, or --list".to_string())
    })?;
    let entry =
        catalog::find(slug).ok_or_else(|| ChainvizError::UnknownDiagram(slug.to_string()))?;

    let path = args
        .output
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("{slug}.{}", args.format.extension())));
    export_entry(&renderer, entry, args.format, &path)
}

fn export_entry(
    renderer: &Renderer,
    entry: &CatalogEntry,
    format: Format,
    path: &Path,
) -> Result<(), ChainvizError> {
    let diagram = (entry.build)();

    let rendered = match format {
        Format::Html => renderer.render_html(&diagram)?,
        Format::Json => renderer.render_json(&diagram)?,
    };

    fs::write(path, rendered)?;

    info!(slug = entry.slug, output_file = path.display().to_string(); "Diagram exported");

    Ok(())
}
