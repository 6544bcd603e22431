//! Drawing writers for rendered plates.

pub mod dxf;

pub use dxf::{DxfError, DxfSink, BOUNDS_LAYER, CUTOUT_LAYER};
