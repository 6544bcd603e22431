//! Keyboard plate cutouts from a parsed layout.

pub mod config;
pub mod error;
pub mod footprint;
pub mod outline;
pub mod primitive;
pub mod render;
pub mod sink;

use plategen_layout::{parse_layout, BoundingBox};
use serde_json::Value;
use tracing::debug;

pub use config::{PlateConfig, RenderSettings};
pub use error::{ConfigError, PlateError};
pub use footprint::{AcousticMode, StabilizerStandard, SwitchFootprint};
pub use outline::{Outline, Placement};
pub use primitive::{Arc, Line, Primitive};
pub use render::PlateRenderer;
pub use sink::{Plate, Sink};

/// What a successful run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateSummary {
    pub keys: usize,
    pub primitives: usize,
    pub bounds: Option<BoundingBox>,
}

/// Validate `config`, read `document`, render, and only then hand the result to `sink`.
///
/// Nothing reaches the sink unless every stage succeeded.
pub fn generate_plate<S: Sink + ?Sized>(
    document: &Value,
    config: &PlateConfig,
    sink: &mut S,
) -> Result<PlateSummary, PlateError> {
    let settings = config.validate()?;
    render_plate(document, settings, sink)
}

/// Same as [`generate_plate`] for settings that were already validated.
pub fn render_plate<S: Sink + ?Sized>(
    document: &Value,
    settings: RenderSettings,
    sink: &mut S,
) -> Result<PlateSummary, PlateError> {
    debug!(
        footprint = %settings.footprint,
        stabilizer = %settings.stabilizer,
        acoustics = %settings.acoustics,
        "rendering plate"
    );

    let layout = parse_layout(document, settings.unit, settings.context.clone())?;

    let mut plate = Plate::default();
    let primitives = PlateRenderer::new(settings)
        .render(&layout, &mut plate)
        .map_err(PlateError::Render)?;

    plate.replay(sink);
    Ok(PlateSummary {
        keys: layout.keys.len(),
        primitives,
        bounds: plate.bounds,
    })
}
