use plategen_core::{CoordinateFrame, DecimalContext, UnitSize};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, trace};

use crate::{BoundingBox, Key, KeyProperties, KeySize, LayoutError, PendingModifiers, StickyState};

/// Keys taller than this (and taller than wide) get their cutout and stabilizer turned upright.
const VERTICAL_KEY_MIN_HEIGHT: Decimal = Decimal::from_parts(175, 0, 0, false, 2);
const QUARTER_TURN: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

/// One element of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Legend(&'a str),
    Properties(KeyProperties),
}

impl<'a> Token<'a> {
    /// Classify a row item. `null` items carry nothing and yield `None`.
    pub fn from_value(
        value: &'a Value,
        row: usize,
        index: usize,
    ) -> Result<Option<Self>, LayoutError> {
        match value {
            Value::String(s) => Ok(Some(Token::Legend(s))),
            Value::Object(map) => Ok(Some(Token::Properties(KeyProperties::from_map(map, row)?))),
            Value::Null => Ok(None),
            Value::Array(_) => Err(LayoutError::NestedRow { row, index }),
            other => Err(LayoutError::UnexpectedToken {
                row,
                index,
                found: kind(other),
            }),
        }
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Result of a complete parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub keys: Vec<Key>,
    /// `None` when the layout produced no keys.
    pub bounds: Option<BoundingBox>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowState {
    Outside,
    Inside,
}

/// Streaming reader over layout rows.
///
/// Rotation (`r`, `rx`, `ry`) is sticky; everything else applies to the next legend only.
/// Cursor positions are local to the current frame and measured from its anchor.
#[derive(Debug)]
pub struct LayoutReader {
    ctx: DecimalContext,
    unit: UnitSize,
    state: RowState,
    row: usize,
    sticky: StickyState,
    frame: CoordinateFrame,
    pending: PendingModifiers,
    cursor_x: Decimal,
    cursor_y: Decimal,
    keys: Vec<Key>,
    bounds: Option<BoundingBox>,
}

impl LayoutReader {
    #[must_use]
    pub fn new(unit: UnitSize, ctx: DecimalContext) -> Self {
        Self {
            ctx,
            unit,
            state: RowState::Outside,
            row: 0,
            sticky: StickyState::default(),
            frame: CoordinateFrame::origin(unit),
            pending: PendingModifiers::default(),
            cursor_x: Decimal::ZERO,
            cursor_y: Decimal::ZERO,
            keys: Vec::new(),
            bounds: None,
        }
    }

    /// Read a whole document: an array whose elements are rows (arrays) or metadata objects.
    pub fn read(mut self, document: &Value) -> Result<Layout, LayoutError> {
        let Value::Array(rows) = document else {
            return Err(LayoutError::RootNotArray);
        };

        for (row, value) in rows.iter().enumerate() {
            let items = match value {
                Value::Array(items) => items,
                Value::Object(_) => {
                    debug!(row, "skipping metadata row");
                    continue;
                }
                other => {
                    return Err(LayoutError::InvalidRow {
                        row,
                        found: kind(other),
                    });
                }
            };

            self.begin_row()?;
            self.row = row;
            for (index, item) in items.iter().enumerate() {
                if let Some(token) = Token::from_value(item, row, index)? {
                    self.token(token)?;
                }
            }
            self.end_row()?;
        }

        self.finish()
    }

    pub fn begin_row(&mut self) -> Result<(), LayoutError> {
        if self.state == RowState::Inside {
            return Err(LayoutError::RowNotClosed { row: self.row + 1 });
        }
        self.state = RowState::Inside;
        trace!(row = self.row, y = %self.cursor_y, "row begin");
        Ok(())
    }

    pub fn token(&mut self, token: Token<'_>) -> Result<(), LayoutError> {
        if self.state != RowState::Inside {
            return Err(LayoutError::TokenOutsideRow);
        }
        match token {
            Token::Properties(props) => self.apply_properties(&props),
            Token::Legend(label) => {
                self.place_key(label);
                Ok(())
            }
        }
    }

    pub fn end_row(&mut self) -> Result<(), LayoutError> {
        if self.state != RowState::Inside {
            return Err(LayoutError::RowNotOpen);
        }
        self.state = RowState::Outside;
        self.row += 1;
        self.cursor_x = Decimal::ZERO;
        self.cursor_y += Decimal::ONE;
        Ok(())
    }

    pub fn finish(self) -> Result<Layout, LayoutError> {
        if self.state == RowState::Inside {
            return Err(LayoutError::UnterminatedRow { row: self.row });
        }
        Ok(Layout {
            keys: self.keys,
            bounds: self.bounds,
        })
    }

    #[must_use]
    pub fn cursor(&self) -> (Decimal, Decimal) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn pending(&self) -> PendingModifiers {
        self.pending
    }

    #[must_use]
    pub fn sticky(&self) -> StickyState {
        self.sticky
    }

    #[must_use]
    pub fn frame(&self) -> &CoordinateFrame {
        &self.frame
    }

    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    fn apply_properties(&mut self, props: &KeyProperties) -> Result<(), LayoutError> {
        let sticky = self.sticky.with(props);
        if props.moves_anchor() {
            self.cursor_x = Decimal::ZERO;
            self.cursor_y = Decimal::ZERO;
        }
        if sticky != self.sticky {
            self.frame = CoordinateFrame::new(
                &mut self.ctx,
                sticky.angle,
                sticky.anchor_x,
                sticky.anchor_y,
                self.unit,
            )?;
            self.sticky = sticky;
            debug!(
                angle = %sticky.angle,
                rx = %sticky.anchor_x,
                ry = %sticky.anchor_y,
                "new frame"
            );
        }
        self.pending = self.pending.with(props);
        Ok(())
    }

    fn place_key(&mut self, label: &str) {
        let pending = std::mem::take(&mut self.pending);
        if pending.decoration {
            trace!(label, "decoration skipped");
            return;
        }

        self.cursor_x += pending.offset_x;
        self.cursor_y += pending.offset_y;

        let size = KeySize {
            width: pending.width,
            height: pending.height,
            width2: pending.width2,
            height2: pending.height2,
        };
        let mut cutout_angle = pending.cutout_angle;
        let mut stab_angle = pending.stab_angle;
        if size.height > size.width && size.height >= VERTICAL_KEY_MIN_HEIGHT {
            cutout_angle -= QUARTER_TURN;
            stab_angle -= QUARTER_TURN;
        }

        let key = Key::new(
            self.frame,
            self.cursor_x,
            self.cursor_y,
            size,
            cutout_angle,
            stab_angle,
            label,
        );
        debug!(
            label = %key.name(),
            x = %key.top_left().x,
            y = %key.top_left().y,
            "new key"
        );

        for corner in key.corners() {
            self.bounds = Some(match self.bounds {
                Some(b) => b.include(*corner),
                None => BoundingBox::from_point(*corner),
            });
        }

        self.cursor_x += size.width;
        self.keys.push(key);
    }
}

/// Parse a full document with a fresh reader.
pub fn parse_layout(
    document: &Value,
    unit: UnitSize,
    ctx: DecimalContext,
) -> Result<Layout, LayoutError> {
    LayoutReader::new(unit, ctx).read(document)
}
