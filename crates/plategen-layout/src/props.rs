use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::LayoutError;

/// Largest magnitude accepted for any numeric property, in layout units or degrees.
///
/// Keeps every later product with a unit size (at most 1000 mm) well inside `Decimal` range.
pub const MAX_PROPERTY_MAGNITUDE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// The recognized subset of one property object. Unknown keys never make it in here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyProperties {
    pub w: Option<Decimal>,
    pub h: Option<Decimal>,
    pub w2: Option<Decimal>,
    pub h2: Option<Decimal>,
    pub x: Option<Decimal>,
    pub y: Option<Decimal>,
    pub rx: Option<Decimal>,
    pub ry: Option<Decimal>,
    pub r: Option<Decimal>,
    pub rs: Option<Decimal>,
    pub rc: Option<Decimal>,
    pub d: Option<bool>,
}

impl KeyProperties {
    /// Pick the recognized keys out of a property object. `row` is only used for error context.
    pub fn from_map(map: &Map<String, Value>, row: usize) -> Result<Self, LayoutError> {
        let number = |key: &'static str| -> Result<Option<Decimal>, LayoutError> {
            let Some(v) = map.get(key) else {
                return Ok(None);
            };
            let value = value_decimal(v).ok_or_else(|| LayoutError::NonNumeric {
                row,
                key,
                value: v.to_string(),
            })?;
            if value.abs() > MAX_PROPERTY_MAGNITUDE {
                return Err(LayoutError::OutOfRange {
                    row,
                    key,
                    value,
                    max: MAX_PROPERTY_MAGNITUDE,
                });
            }
            Ok(Some(value))
        };

        let d = match map.get("d") {
            None => None,
            Some(Value::Bool(b)) => Some(*b),
            Some(v) => {
                return Err(LayoutError::NonBoolean {
                    row,
                    key: "d",
                    value: v.to_string(),
                });
            }
        };

        Ok(Self {
            w: number("w")?,
            h: number("h")?,
            w2: number("w2")?,
            h2: number("h2")?,
            x: number("x")?,
            y: number("y")?,
            rx: number("rx")?,
            ry: number("ry")?,
            r: number("r")?,
            rs: number("_rs")?,
            rc: number("_rc")?,
            d,
        })
    }

    #[must_use]
    pub fn moves_anchor(&self) -> bool {
        self.rx.is_some() || self.ry.is_some()
    }
}

fn value_decimal(v: &Value) -> Option<Decimal> {
    match v {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Modifiers that apply to the next legend only.
///
/// Replaced wholesale on every property object and reset after each legend, whether that legend
/// became a key or was swallowed as a decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingModifiers {
    pub width: Decimal,
    pub height: Decimal,
    pub width2: Decimal,
    pub height2: Decimal,
    pub offset_x: Decimal,
    pub offset_y: Decimal,
    pub cutout_angle: Decimal,
    pub stab_angle: Decimal,
    pub decoration: bool,
}

impl Default for PendingModifiers {
    fn default() -> Self {
        Self {
            width: Decimal::ONE,
            height: Decimal::ONE,
            width2: Decimal::ONE,
            height2: Decimal::ONE,
            offset_x: Decimal::ZERO,
            offset_y: Decimal::ZERO,
            cutout_angle: Decimal::ZERO,
            stab_angle: Decimal::ZERO,
            decoration: false,
        }
    }
}

impl PendingModifiers {
    /// Layer `props` on top of the current modifiers. `_rs`/`_rc` are sign-inverted here.
    #[must_use]
    pub fn with(self, props: &KeyProperties) -> Self {
        Self {
            width: props.w.unwrap_or(self.width),
            height: props.h.unwrap_or(self.height),
            width2: props.w2.unwrap_or(self.width2),
            height2: props.h2.unwrap_or(self.height2),
            offset_x: props.x.unwrap_or(self.offset_x),
            offset_y: props.y.unwrap_or(self.offset_y),
            cutout_angle: props.rc.map_or(self.cutout_angle, |v| -v),
            stab_angle: props.rs.map_or(self.stab_angle, |v| -v),
            decoration: props.d.unwrap_or(self.decoration),
        }
    }
}

/// Rotation state that survives across legends and rows until explicitly replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StickyState {
    /// Degrees, already sign-inverted from the layout's `r`.
    pub angle: Decimal,
    pub anchor_x: Decimal,
    pub anchor_y: Decimal,
}

impl StickyState {
    #[must_use]
    pub fn with(self, props: &KeyProperties) -> Self {
        Self {
            angle: props.r.map_or(self.angle, |v| -v),
            anchor_x: props.rx.unwrap_or(self.anchor_x),
            anchor_y: props.ry.unwrap_or(self.anchor_y),
        }
    }
}
