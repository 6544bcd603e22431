use std::path::{Path, PathBuf};

use plategen_export::DxfSink;
use plategen_plate::{render_plate, PlateError};
use tracing::{debug, info};

use crate::error::CliError;
use crate::input;
use crate::settings::{self, Overrides};

pub fn run_render(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    settings_path: Option<PathBuf>,
    overrides: Overrides,
) -> Result<(), CliError> {
    let config = settings::load(settings_path.as_deref(), overrides)
        .map_err(|e| CliError::config(format!("{e:#}")))?;
    // Reject bad settings before touching the layout.
    let settings = config.validate().map_err(PlateError::from)?;

    let raw =
        input::read_source(input.as_deref()).map_err(|e| CliError::input(format!("{e:#}")))?;
    let document =
        input::parse_document(&raw).map_err(|e| CliError::input(format!("{e:#}")))?;
    debug!(bytes = raw.len(), "layout loaded");

    let mut sink = DxfSink::new();
    let summary = render_plate(&document, settings, &mut sink)?;
    match summary.bounds {
        Some(b) => info!(
            keys = summary.keys,
            primitives = summary.primitives,
            width = %b.width(),
            height = %b.height(),
            "plate ready"
        ),
        None => info!(keys = 0, "layout has no keys"),
    }

    match output.as_deref() {
        Some(path) if path != Path::new("-") => sink
            .write_file(path)
            .map_err(|e| CliError::processing(e.to_string())),
        _ => sink
            .write_to(std::io::stdout().lock())
            .map_err(|e| CliError::processing(e.to_string())),
    }
}
