//! Keyboard-layout-editor rows to positioned key descriptors.

pub mod error;
pub mod key;
pub mod props;
pub mod reader;

pub use error::LayoutError;
pub use key::{BoundingBox, Key, KeySize};
pub use props::{KeyProperties, PendingModifiers, StickyState};
pub use reader::{Layout, LayoutReader, Token, parse_layout};
