use std::io::Write;
use std::path::{Path, PathBuf};

use plategen_core::Point2;
use plategen_layout::BoundingBox;
use plategen_plate::{Arc, Line, Sink};
use rust_decimal::Decimal;
use tracing::debug;

pub const CUTOUT_LAYER: &str = "0";
pub const BOUNDS_LAYER: &str = "BOUNDS";

#[derive(Debug, thiserror::Error)]
pub enum DxfError {
    #[error("DXF I/O error for {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("DXF write error: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entity {
    Line {
        layer: &'static str,
        start: Point2,
        end: Point2,
    },
    Arc {
        layer: &'static str,
        center: Point2,
        radius: Decimal,
        start_angle: Decimal,
        end_angle: Decimal,
    },
}

/// Collects plate geometry and writes it as an ASCII DXF in millimetres.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DxfSink {
    entities: Vec<Entity>,
}

impl DxfSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[must_use]
    pub fn to_dxf_string(&self) -> String {
        let mut out = String::new();
        push_pair(&mut out, 0, "SECTION");
        push_pair(&mut out, 2, "HEADER");
        push_pair(&mut out, 9, "$INSUNITS");
        push_pair(&mut out, 70, "4"); // millimeters
        push_pair(&mut out, 0, "ENDSEC");
        push_pair(&mut out, 0, "SECTION");
        push_pair(&mut out, 2, "TABLES");
        push_pair(&mut out, 0, "TABLE");
        push_pair(&mut out, 2, "LTYPE");
        push_pair(&mut out, 0, "LTYPE");
        push_pair(&mut out, 72, "65");
        push_pair(&mut out, 70, "64");
        push_pair(&mut out, 2, "CONTINUOUS");
        push_pair(&mut out, 3, "______");
        push_pair(&mut out, 73, "0");
        push_pair(&mut out, 40, "0");
        push_pair(&mut out, 0, "ENDTAB");
        push_pair(&mut out, 0, "TABLE");
        push_pair(&mut out, 2, "LAYER");
        for layer in [CUTOUT_LAYER, BOUNDS_LAYER] {
            push_pair(&mut out, 0, "LAYER");
            push_pair(&mut out, 2, layer);
            push_pair(&mut out, 70, "0");
            push_pair(&mut out, 62, "7");
            push_pair(&mut out, 6, "CONTINUOUS");
        }
        push_pair(&mut out, 0, "ENDTAB");
        push_pair(&mut out, 0, "ENDSEC");
        push_pair(&mut out, 0, "SECTION");
        push_pair(&mut out, 2, "ENTITIES");

        for e in &self.entities {
            match e {
                Entity::Line { layer, start, end } => {
                    push_pair(&mut out, 0, "LINE");
                    push_pair(&mut out, 8, layer);
                    push_pair_decimal(&mut out, 10, start.x);
                    push_pair_decimal(&mut out, 20, start.y);
                    push_pair_decimal(&mut out, 11, end.x);
                    push_pair_decimal(&mut out, 21, end.y);
                }
                Entity::Arc {
                    layer,
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => {
                    push_pair(&mut out, 0, "ARC");
                    push_pair(&mut out, 8, layer);
                    push_pair_decimal(&mut out, 10, center.x);
                    push_pair_decimal(&mut out, 20, center.y);
                    push_pair_decimal(&mut out, 40, *radius);
                    push_pair_decimal(&mut out, 50, *start_angle);
                    push_pair_decimal(&mut out, 51, *end_angle);
                }
            }
        }

        push_pair(&mut out, 0, "ENDSEC");
        push_pair(&mut out, 0, "EOF");
        out
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), DxfError> {
        writer.write_all(self.to_dxf_string().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), DxfError> {
        let path = path.as_ref();
        debug!(path = %path.display(), entities = self.len(), "writing DXF");
        std::fs::write(path, self.to_dxf_string()).map_err(|e| DxfError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl Sink for DxfSink {
    fn line(&mut self, line: Line) {
        self.entities.push(Entity::Line {
            layer: CUTOUT_LAYER,
            start: line.start,
            end: line.end,
        });
    }

    fn arc(&mut self, arc: Arc) {
        self.entities.push(Entity::Arc {
            layer: CUTOUT_LAYER,
            center: arc.center,
            radius: arc.radius,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
        });
    }

    fn bounds(&mut self, b: BoundingBox) {
        let corners = [
            Point2::new(b.min_x, b.max_y),
            Point2::new(b.max_x, b.max_y),
            Point2::new(b.max_x, b.min_y),
            Point2::new(b.min_x, b.min_y),
        ];
        for i in 0..corners.len() {
            self.entities.push(Entity::Line {
                layer: BOUNDS_LAYER,
                start: corners[i],
                end: corners[(i + 1) % corners.len()],
            });
        }
    }
}

fn push_pair(out: &mut String, code: i32, value: impl AsRef<str>) {
    out.push_str(&code.to_string());
    out.push('\n');
    out.push_str(value.as_ref());
    out.push('\n');
}

fn push_pair_decimal(out: &mut String, code: i32, value: Decimal) {
    push_pair(out, code, value.normalize().to_string());
}
