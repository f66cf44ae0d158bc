//! The layout store
//!
//! Holds every block's frame and style override for one editing session.
//! All mutations are synchronous and in-memory; durable persistence only
//! happens on an explicit [`LayoutStore::save`].

use std::collections::BTreeMap;

use log::{info, warn};
use rustc_hash::FxHashMap;

use quoteforge_geometry::{constrain, snap, Bounds, Point};
use quoteforge_style::{BlockStyle, RawStyleOverride, StyleOverride};

use crate::block::{BlockId, BlockLayout};
use crate::error::LayoutResult;
use crate::storage::StoragePort;

/// Storage key for the position snapshot
pub const LAYOUT_KEY: &str = "quotation-layout";
/// Storage key for the style override snapshot
pub const STYLES_KEY: &str = "quotation-styles";

/// Minimum block width enforced on any size mutation
pub const MIN_WIDTH: f32 = 100.0;
/// Minimum block height enforced on any size mutation
pub const MIN_HEIGHT: f32 = 50.0;

const GRID_MIN: u32 = 10;
const GRID_MAX: u32 = 50;

/// Grid snapping settings for the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSettings {
    pub snap_to_grid: bool,
    pub grid_size: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            snap_to_grid: true,
            grid_size: 20,
        }
    }
}

/// Partial size update, per dimension
#[derive(Debug, Clone, Copy, Default)]
pub struct SizePatch {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl SizePatch {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn width(width: f32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    pub fn height(height: f32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }
}

/// Session-scoped layout document state
pub struct LayoutStore<S: StoragePort> {
    positions: FxHashMap<BlockId, BlockLayout>,
    styles: FxHashMap<BlockId, StyleOverride>,
    settings: LayoutSettings,
    bounds: Bounds,
    storage: S,
}

impl<S: StoragePort> LayoutStore<S> {
    /// Create a store with the hard-coded default layout
    pub fn new(storage: S) -> Self {
        Self {
            positions: default_positions(),
            styles: FxHashMap::default(),
            settings: LayoutSettings::default(),
            bounds: Bounds::default(),
            storage,
        }
    }

    /// Create a store and restore any persisted snapshot from `storage`
    pub fn restored(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Current frame of a block
    pub fn layout(&self, id: BlockId) -> BlockLayout {
        // The block set is fixed; every id has an entry
        self.positions
            .get(&id)
            .copied()
            .unwrap_or_else(|| BlockLayout::default_for(id))
    }

    /// Effective style of a block: defaults merged with any override
    pub fn style(&self, id: BlockId) -> BlockStyle {
        match self.styles.get(&id) {
            Some(patch) => BlockStyle::default().with_override(patch),
            None => BlockStyle::default(),
        }
    }

    /// Sparse style override of a block (empty when untouched)
    pub fn style_override(&self, id: BlockId) -> StyleOverride {
        self.styles.get(&id).copied().unwrap_or_default()
    }

    /// Move a block to a candidate position
    ///
    /// The candidate runs through the geometry constraint (grid snap,
    /// container clamp, edge snap) before being stored; width and height
    /// keep their previous values. In-memory only.
    pub fn update_position(&mut self, id: BlockId, candidate: Point) {
        let mut layout = self.layout(id);
        let constrained = constrain(
            candidate,
            layout.effective_size(),
            self.bounds,
            self.settings.grid_size as f32,
            self.settings.snap_to_grid,
        );
        layout.x = constrained.x;
        layout.y = constrained.y;
        self.positions.insert(id, layout);
    }

    /// Resize a block
    ///
    /// Supplied dimensions are grid-snapped when snapping is enabled,
    /// floored at the 100x50 minimum, and capped so the frame stays
    /// inside the container bounds.
    pub fn update_size(&mut self, id: BlockId, patch: SizePatch) {
        let mut layout = self.layout(id);
        let grid = self.settings.grid_size as f32;
        let snapping = self.settings.snap_to_grid;

        if let Some(width) = patch.width {
            let max = (self.bounds.width - layout.x).max(MIN_WIDTH);
            layout.width = snap(width, grid, snapping).clamp(MIN_WIDTH, max).into();
        }
        if let Some(height) = patch.height {
            let max = (self.bounds.height - layout.y).max(MIN_HEIGHT);
            layout.height = snap(height, grid, snapping).clamp(MIN_HEIGHT, max).into();
        }
        self.positions.insert(id, layout);
    }

    /// Merge a style patch onto a block's override
    ///
    /// Unset attributes keep their current (or default) value; the
    /// effective style is never partially undefined.
    pub fn update_style(&mut self, id: BlockId, patch: &StyleOverride) {
        self.styles.entry(id).or_default().merge(patch);
    }

    /// Persist both snapshots to durable storage, overwriting any previous
    pub fn save(&mut self) -> LayoutResult<()> {
        let positions: BTreeMap<&str, BlockLayout> = self
            .positions
            .iter()
            .map(|(id, layout)| (id.as_str(), *layout))
            .collect();
        let styles: BTreeMap<&str, RawStyleOverride> = self
            .styles
            .iter()
            .filter(|(_, patch)| !patch.is_empty())
            .map(|(id, patch)| (id.as_str(), patch.to_raw()))
            .collect();

        self.storage.set(LAYOUT_KEY, &serde_json::to_string(&positions)?)?;
        self.storage.set(STYLES_KEY, &serde_json::to_string(&styles)?)?;
        info!("Saved layout snapshot ({} blocks, {} style overrides)", positions.len(), styles.len());
        Ok(())
    }

    /// Restore persisted snapshots, if present
    ///
    /// Each key is handled independently: an absent key leaves the
    /// corresponding in-memory state untouched, and an unparseable value
    /// is treated as absent. Style tokens outside the palette are dropped.
    pub fn load(&mut self) {
        if let Some(text) = self.storage.get(LAYOUT_KEY) {
            match serde_json::from_str::<BTreeMap<String, BlockLayout>>(&text) {
                Ok(saved) => {
                    let mut positions = default_positions();
                    for (key, layout) in saved {
                        match BlockId::parse(&key) {
                            Some(id) => {
                                positions.insert(id, layout);
                            }
                            None => warn!("Ignoring unknown block id in snapshot: {}", key),
                        }
                    }
                    self.positions = positions;
                }
                Err(e) => warn!("Malformed {} snapshot, keeping current layout: {}", LAYOUT_KEY, e),
            }
        }

        if let Some(text) = self.storage.get(STYLES_KEY) {
            match serde_json::from_str::<BTreeMap<String, RawStyleOverride>>(&text) {
                Ok(saved) => {
                    let mut styles = FxHashMap::default();
                    for (key, raw) in &saved {
                        match BlockId::parse(key) {
                            Some(id) => {
                                let patch = StyleOverride::from_raw(raw);
                                if !patch.is_empty() {
                                    styles.insert(id, patch);
                                }
                            }
                            None => warn!("Ignoring unknown block id in snapshot: {}", key),
                        }
                    }
                    self.styles = styles;
                }
                Err(e) => warn!("Malformed {} snapshot, keeping current styles: {}", STYLES_KEY, e),
            }
        }
    }

    /// Restore the default layout and clear all persisted state
    pub fn reset(&mut self) -> LayoutResult<()> {
        self.positions = default_positions();
        self.styles.clear();
        self.storage.remove(LAYOUT_KEY)?;
        self.storage.remove(STYLES_KEY)?;
        info!("Layout reset to defaults");
        Ok(())
    }

    /// Grid snapping settings
    pub fn settings(&self) -> LayoutSettings {
        self.settings
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.settings.snap_to_grid = enabled;
    }

    /// Set the grid size, clamped to the 10-50 range
    pub fn set_grid_size(&mut self, size: u32) {
        self.settings.grid_size = size.clamp(GRID_MIN, GRID_MAX);
    }

    /// Container bounds the blocks are constrained to
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Access the storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// The hard-coded default layout, one entry per template block
fn default_positions() -> FxHashMap<BlockId, BlockLayout> {
    BlockId::all()
        .iter()
        .map(|id| (*id, BlockLayout::default_for(*id)))
        .collect()
}
