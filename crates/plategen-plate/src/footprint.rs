//! Static hardware tables: switch cutout sizes, stabilizer spacings and shapes, acoustic cuts.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::outline::Outline;
use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchFootprint {
    Mx,
    Alps,
    Omron,
}

impl SwitchFootprint {
    /// Cutout width and height in mm.
    #[must_use]
    pub fn size(self) -> (Decimal, Decimal) {
        match self {
            SwitchFootprint::Mx => (dec!(14), dec!(14)),
            SwitchFootprint::Alps => (dec!(15.5), dec!(12.8)),
            SwitchFootprint::Omron => (dec!(13.5), dec!(13.5)),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SwitchFootprint::Mx => "mx",
            SwitchFootprint::Alps => "alps",
            SwitchFootprint::Omron => "omron",
        }
    }
}

impl FromStr for SwitchFootprint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mx" => Ok(SwitchFootprint::Mx),
            "alps" => Ok(SwitchFootprint::Alps),
            "omron" => Ok(SwitchFootprint::Omron),
            _ => Err(ConfigError::UnknownFootprint(s.to_string())),
        }
    }
}

impl fmt::Display for SwitchFootprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    AtLeast(Decimal),
    Exactly(Decimal),
}

impl Bracket {
    fn contains(self, width: Decimal) -> bool {
        match self {
            Bracket::AtLeast(min) => width >= min,
            Bracket::Exactly(w) => width == w,
        }
    }
}

/// First matching bracket wins; widths matching none get no stabilizer.
const MX_SPACING: &[(Bracket, Decimal)] = &[
    (Bracket::AtLeast(dec!(8)), dec!(66.675)),
    (Bracket::AtLeast(dec!(7)), dec!(57.15)),
    (Bracket::Exactly(dec!(6.25)), dec!(50)),
    (Bracket::Exactly(dec!(6)), dec!(47.625)),
    (Bracket::AtLeast(dec!(3)), dec!(19.05)),
    (Bracket::AtLeast(dec!(2)), dec!(11.938)),
];

const ALPS_AEK_SPACING: &[(Bracket, Decimal)] = &[
    (Bracket::AtLeast(dec!(6.5)), dec!(45.3)),
    (Bracket::AtLeast(dec!(6.25)), dec!(41.86)),
    (Bracket::AtLeast(dec!(2)), dec!(14)),
    (Bracket::AtLeast(dec!(1.75)), dec!(12)),
];

const ALPS_AT101_SPACING: &[(Bracket, Decimal)] = &[
    (Bracket::AtLeast(dec!(6.5)), dec!(45.3)),
    (Bracket::AtLeast(dec!(6.25)), dec!(41.86)),
    (Bracket::AtLeast(dec!(2.75)), dec!(20.5)),
    (Bracket::AtLeast(dec!(2)), dec!(14)),
    (Bracket::AtLeast(dec!(1.75)), dec!(12)),
];

fn lookup(table: &[(Bracket, Decimal)], width: Decimal) -> Option<Decimal> {
    table
        .iter()
        .find(|(bracket, _)| bracket.contains(width))
        .map(|(_, offset)| *offset)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilizerStandard {
    MxSimple,
    LargeCuts,
    MxNotched,
    AlpsAek,
    AlpsAt101,
}

impl StabilizerStandard {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StabilizerStandard::MxSimple => "mx-simple",
            StabilizerStandard::LargeCuts => "large-cuts",
            StabilizerStandard::MxNotched => "mx-notched",
            StabilizerStandard::AlpsAek => "alps-aek",
            StabilizerStandard::AlpsAt101 => "alps-at101",
        }
    }

    /// Distance in mm from the switch center to each of the two stabilizer cutouts.
    #[must_use]
    pub fn spacing(self, apparent_width: Decimal) -> Option<Decimal> {
        let table = match self {
            StabilizerStandard::MxSimple
            | StabilizerStandard::LargeCuts
            | StabilizerStandard::MxNotched => MX_SPACING,
            StabilizerStandard::AlpsAek => ALPS_AEK_SPACING,
            StabilizerStandard::AlpsAt101 => ALPS_AT101_SPACING,
        };
        lookup(table, apparent_width)
    }

    /// Cutout shape around one stabilizer center, y up.
    #[must_use]
    pub fn outline(self) -> Outline {
        match self {
            StabilizerStandard::MxSimple => {
                Outline::rectangle(dec!(-3.375), dec!(3.375), dec!(-8), dec!(6))
            }
            StabilizerStandard::LargeCuts => {
                Outline::rectangle(dec!(-3.5), dec!(3.5), dec!(-9), dec!(6))
            }
            StabilizerStandard::MxNotched => Outline::notched(
                dec!(3.325),
                dec!(-5.97),
                dec!(6.77),
                dec!(1.5),
                dec!(-7.97),
            ),
            StabilizerStandard::AlpsAek | StabilizerStandard::AlpsAt101 => {
                Outline::rectangle(dec!(-1.335), dec!(1.335), dec!(-9.085), dec!(-3.875))
            }
        }
    }
}

impl FromStr for StabilizerStandard {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mx-simple" => Ok(StabilizerStandard::MxSimple),
            "large-cuts" => Ok(StabilizerStandard::LargeCuts),
            "mx-notched" => Ok(StabilizerStandard::MxNotched),
            "alps-aek" => Ok(StabilizerStandard::AlpsAek),
            "alps-at101" => Ok(StabilizerStandard::AlpsAt101),
            _ => Err(ConfigError::UnknownStabilizer(s.to_string())),
        }
    }
}

impl fmt::Display for StabilizerStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Slots cut beside mid-sized keys to decouple the plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcousticMode {
    #[default]
    None,
    Typical,
    Extreme,
}

pub const ACOUSTIC_SLOT_WIDTH: Decimal = dec!(2);

impl AcousticMode {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AcousticMode::None => "none",
            AcousticMode::Typical => "typical",
            AcousticMode::Extreme => "extreme",
        }
    }

    /// Distance in mm from the switch center to each acoustic slot.
    #[must_use]
    pub fn spacing(self, apparent_width: Decimal) -> Option<Decimal> {
        let mid = apparent_width >= dec!(1.5) && apparent_width < dec!(2);
        let wide = apparent_width >= dec!(2) && apparent_width <= dec!(2.75);
        match self {
            AcousticMode::None => None,
            AcousticMode::Typical | AcousticMode::Extreme if mid => Some(dec!(11.6)),
            AcousticMode::Extreme if wide => Some(dec!(18.25)),
            _ => None,
        }
    }

    /// Slot shape: as tall as the switch cutout.
    #[must_use]
    pub fn outline(footprint: SwitchFootprint) -> Outline {
        let (_, height) = footprint.size();
        let half_w = ACOUSTIC_SLOT_WIDTH / dec!(2);
        let half_h = height / dec!(2);
        Outline::rectangle(-half_w, half_w, -half_h, half_h)
    }
}

impl FromStr for AcousticMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(AcousticMode::None),
            "typical" => Ok(AcousticMode::Typical),
            "extreme" => Ok(AcousticMode::Extreme),
            _ => Err(ConfigError::UnknownAcoustics(s.to_string())),
        }
    }
}

impl fmt::Display for AcousticMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
