//! Builds a static HTML reference page from the doc comments of a NetLogo
//! model file.
//!
//! The pipeline is strictly sequential: the raw lines are narrowed to the
//! source section ([`extract`]), scanned into a documentation model
//! ([`doc`]), and rendered against the embedded page skeleton ([`render`]).
//! The finished page and its stylesheet land in a `<stem>-docs/` directory
//! beside the input file.

pub mod cli;
pub mod doc;
mod error;
pub mod extract;
pub mod render;

pub use error::RenderError;

use anyhow::{anyhow, Context, Result};
use include_dir::{include_dir, Dir};
use nldoc_tracing::println_action_green;
use render::RenderedDocument;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Static assets shipped with every generated page.
static ASSETS: Dir = include_dir!("$CARGO_MANIFEST_DIR/static.files");

/// Extension of the container format carrying a non-source trailer.
const CONTAINER_EXTENSION: &str = "nlogo";
const PAGE_SKELETON: &str = "template.html";
const STYLESHEET: &str = "style.css";
const INDEX_FILENAME: &str = "index.html";
const DOC_DIR_SUFFIX: &str = "-docs";

/// Builds the documentation page for `input` and writes it, together with
/// the stylesheet, into the sibling `<stem>-docs/` directory. Returns the
/// output directory.
///
/// The page is built fully in memory before anything is written, so a
/// failed run leaves no partial output behind.
pub fn build_docs(input: &Path) -> Result<PathBuf> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read `{}`", input.display()))?;
    let all_lines: Vec<&str> = source.lines().collect();
    let lines = if is_container(input) {
        extract::source_lines(&all_lines)
    } else {
        &all_lines[..]
    };

    println_action_green("Scanning", &input.display().to_string());
    let module = doc::scan_lines(lines);
    debug!("{module}");

    let rendered = RenderedDocument::from_module(&module, asset_str(PAGE_SKELETON)?)?;

    let doc_path = doc_dir(input);
    fs::create_dir_all(&doc_path)
        .with_context(|| format!("failed to create `{}`", doc_path.display()))?;
    fs::write(doc_path.join(INDEX_FILENAME), rendered.file_contents.0.as_bytes())
        .with_context(|| format!("failed to write `{}`", doc_path.join(INDEX_FILENAME).display()))?;
    fs::write(doc_path.join(STYLESHEET), asset_str(STYLESHEET)?)
        .with_context(|| format!("failed to write `{}`", doc_path.join(STYLESHEET).display()))?;

    println_action_green("Finished", &doc_path.display().to_string());
    Ok(doc_path)
}

/// Output directory for `input`: `<stem>-docs`, beside the input file.
pub fn doc_dir(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".to_string());
    input.with_file_name(format!("{stem}{DOC_DIR_SUFFIX}"))
}

fn is_container(input: &Path) -> bool {
    input
        .extension()
        .is_some_and(|ext| ext == CONTAINER_EXTENSION)
}

fn asset_str(name: &str) -> Result<&'static str> {
    ASSETS
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| anyhow!("embedded asset `{name}` is missing or not UTF-8"))
}
