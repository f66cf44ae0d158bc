//! QuoteForge Layout Store
//!
//! Single source of truth for block positions, sizes and styles within an
//! editing session, with opt-in durable persistence behind a small
//! key-value port.

mod block;
mod error;
mod storage;
mod store;

pub use block::{AutoMarker, BlockId, BlockLayout, Extent, ALL_BLOCKS, FALLBACK_HEIGHT, FALLBACK_WIDTH};
pub use error::{LayoutError, LayoutResult};
pub use storage::{FileStorage, MemoryStorage, StoragePort};
pub use store::{LayoutSettings, LayoutStore, SizePatch, LAYOUT_KEY, MIN_HEIGHT, MIN_WIDTH, STYLES_KEY};
