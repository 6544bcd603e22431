use plategen_core::{DecimalContext, UnitSize};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::footprint::{AcousticMode, StabilizerStandard, SwitchFootprint};
use crate::outline::Outline;
use crate::ConfigError;

pub const MAX_UNIT_MM: Decimal = dec!(1000);
pub const MAX_ACOUSTIC_RADIUS: Decimal = dec!(1);

/// Plate settings as written by a user (settings file or flags). Names stay strings until
/// [`PlateConfig::validate`] resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct PlateConfig {
    pub cutout_type: String,
    pub cutout_radius: Decimal,
    pub stab_type: String,
    pub stab_radius: Decimal,
    pub acoustics: String,
    pub acoustics_radius: Decimal,
    pub unit_width: Decimal,
    pub unit_height: Decimal,
    pub precision: u32,
}

impl Default for PlateConfig {
    fn default() -> Self {
        Self {
            cutout_type: "mx".to_string(),
            cutout_radius: dec!(0.5),
            stab_type: "mx-simple".to_string(),
            stab_radius: dec!(0.5),
            acoustics: "none".to_string(),
            acoustics_radius: dec!(0.5),
            unit_width: dec!(19.05),
            unit_height: dec!(19.05),
            precision: plategen_core::trig::DEFAULT_WORKING_DIGITS,
        }
    }
}

/// Checked, resolved settings. The only way to build a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub footprint: SwitchFootprint,
    pub cutout_radius: Decimal,
    pub stabilizer: StabilizerStandard,
    pub stab_radius: Decimal,
    pub acoustics: AcousticMode,
    pub acoustics_radius: Decimal,
    pub unit: UnitSize,
    pub context: DecimalContext,
}

impl PlateConfig {
    pub fn validate(&self) -> Result<RenderSettings, ConfigError> {
        let footprint: SwitchFootprint = self.cutout_type.parse()?;
        let stabilizer: StabilizerStandard = self.stab_type.parse()?;
        let acoustics: AcousticMode = self.acoustics.parse()?;

        let (width, height) = footprint.size();
        check_radius(
            "cutout",
            self.cutout_radius,
            Outline::centered(width, height).max_fillet(),
        )?;
        check_radius("stabilizer", self.stab_radius, stabilizer.outline().max_fillet())?;
        check_radius(
            "acoustic cutout",
            self.acoustics_radius,
            AcousticMode::outline(footprint)
                .max_fillet()
                .min(MAX_ACOUSTIC_RADIUS),
        )?;

        check_unit("width", self.unit_width)?;
        check_unit("height", self.unit_height)?;

        let context = DecimalContext::new(self.precision)?;

        Ok(RenderSettings {
            footprint,
            cutout_radius: self.cutout_radius,
            stabilizer,
            stab_radius: self.stab_radius,
            acoustics,
            acoustics_radius: self.acoustics_radius,
            unit: UnitSize {
                width: self.unit_width,
                height: self.unit_height,
            },
            context,
        })
    }
}

fn check_radius(which: &'static str, radius: Decimal, max: Decimal) -> Result<(), ConfigError> {
    if radius < Decimal::ZERO || radius > max {
        return Err(ConfigError::RadiusOutOfRange { which, radius, max });
    }
    Ok(())
}

fn check_unit(axis: &'static str, value: Decimal) -> Result<(), ConfigError> {
    if value <= Decimal::ZERO || value > MAX_UNIT_MM {
        return Err(ConfigError::UnitOutOfRange {
            axis,
            value,
            max: MAX_UNIT_MM,
        });
    }
    Ok(())
}
