use std::path::Path;

use anyhow::{Context, Result};
use plategen_plate::PlateConfig;
use rust_decimal::Decimal;

/// Per-field overrides from the command line. `None` keeps the settings-file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub cutout_type: Option<String>,
    pub cutout_radius: Option<Decimal>,
    pub stab_type: Option<String>,
    pub stab_radius: Option<Decimal>,
    pub acoustics: Option<String>,
    pub acoustics_radius: Option<Decimal>,
    pub unit_width: Option<Decimal>,
    pub unit_height: Option<Decimal>,
    pub precision: Option<u32>,
}

/// Defaults, then the YAML settings file (if any), then flags.
pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<PlateConfig> {
    let base = match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("Could not read settings {}", p.display()))?;
            if raw.trim().is_empty() {
                PlateConfig::default()
            } else {
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("Invalid settings file {}", p.display()))?
            }
        }
        None => PlateConfig::default(),
    };
    Ok(apply(base, overrides))
}

fn apply(base: PlateConfig, o: Overrides) -> PlateConfig {
    PlateConfig {
        cutout_type: o.cutout_type.unwrap_or(base.cutout_type),
        cutout_radius: o.cutout_radius.unwrap_or(base.cutout_radius),
        stab_type: o.stab_type.unwrap_or(base.stab_type),
        stab_radius: o.stab_radius.unwrap_or(base.stab_radius),
        acoustics: o.acoustics.unwrap_or(base.acoustics),
        acoustics_radius: o.acoustics_radius.unwrap_or(base.acoustics_radius),
        unit_width: o.unit_width.unwrap_or(base.unit_width),
        unit_height: o.unit_height.unwrap_or(base.unit_height),
        precision: o.precision.unwrap_or(base.precision),
    }
}
