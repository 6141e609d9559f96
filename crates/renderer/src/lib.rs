//! Output formats for battery reports.
//!
//! Both renderers stream straight to the writer they are given; nothing is
//! buffered per record beyond what the writer itself does.

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use batt_config::{OutputFormat, RunConfig};
use batt_core::Renderer;
use std::io::Write;

/// Build the renderer selected by `config`, writing to `out`.
pub fn for_config<'a, W: Write + 'a>(config: &RunConfig, out: W) -> Box<dyn Renderer + 'a> {
    match config.format {
        OutputFormat::Text => Box::new(TextRenderer::new(out, config.digits)),
        OutputFormat::Json => Box::new(JsonRenderer::new(out, config.digits)),
    }
}
