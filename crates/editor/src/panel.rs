//! Customization panel
//!
//! Side-panel state for editing the selected block's style and the
//! document-wide grid settings. Every style edit is a whole enumerated
//! value written through the layout store; free-form values cannot be
//! expressed. The panel is inert while no block is selected.

use log::debug;

use quoteforge_layout::{BlockId, LayoutResult, LayoutStore, StoragePort};
use quoteforge_style::{
    BackgroundColor, BorderColor, BorderWidth, FontSize, FontWeight, StyleOverride, TextColor,
};

/// Panel tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelTab {
    #[default]
    Style,
    Layout,
}

/// Customization panel state
#[derive(Debug, Default)]
pub struct CustomizationPanel {
    selected: Option<BlockId>,
    open: bool,
    tab: PanelTab,
}

impl CustomizationPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The block the panel is editing, if any
    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    /// Select a block (or clear the selection with `None`)
    pub fn select(&mut self, id: Option<BlockId>) {
        self.selected = id;
    }

    /// The panel is hidden entirely while nothing is selected
    pub fn is_visible(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn tab(&self) -> PanelTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: PanelTab) {
        self.tab = tab;
    }

    /// Apply a style patch to the selected block
    ///
    /// No-op when nothing is selected.
    fn apply<S: StoragePort>(&self, store: &mut LayoutStore<S>, patch: StyleOverride) {
        if let Some(id) = self.selected {
            debug!("Panel style edit on {}", id);
            store.update_style(id, &patch);
        }
    }

    pub fn set_font_size<S: StoragePort>(&self, store: &mut LayoutStore<S>, value: FontSize) {
        self.apply(store, StyleOverride { font_size: Some(value), ..Default::default() });
    }

    pub fn set_font_weight<S: StoragePort>(&self, store: &mut LayoutStore<S>, value: FontWeight) {
        self.apply(store, StyleOverride { font_weight: Some(value), ..Default::default() });
    }

    pub fn set_text_color<S: StoragePort>(&self, store: &mut LayoutStore<S>, value: TextColor) {
        self.apply(store, StyleOverride { text_color: Some(value), ..Default::default() });
    }

    pub fn set_background<S: StoragePort>(
        &self,
        store: &mut LayoutStore<S>,
        value: BackgroundColor,
    ) {
        self.apply(store, StyleOverride { background_color: Some(value), ..Default::default() });
    }

    pub fn set_border_color<S: StoragePort>(&self, store: &mut LayoutStore<S>, value: BorderColor) {
        self.apply(store, StyleOverride { border_color: Some(value), ..Default::default() });
    }

    pub fn set_border_width<S: StoragePort>(&self, store: &mut LayoutStore<S>, value: BorderWidth) {
        self.apply(store, StyleOverride { border_width: Some(value), ..Default::default() });
    }

    /// Toggle grid snapping for the whole document
    pub fn toggle_snap<S: StoragePort>(&self, store: &mut LayoutStore<S>) {
        let enabled = !store.settings().snap_to_grid;
        store.set_snap_to_grid(enabled);
    }

    /// Set the grid size; the store clamps it to the 10-50 range
    pub fn set_grid_size<S: StoragePort>(&self, store: &mut LayoutStore<S>, size: u32) {
        store.set_grid_size(size);
    }

    /// Persist the current layout and styles
    pub fn save_layout<S: StoragePort>(&self, store: &mut LayoutStore<S>) -> LayoutResult<()> {
        store.save()
    }

    /// Restore defaults and clear persisted state
    pub fn reset_layout<S: StoragePort>(&self, store: &mut LayoutStore<S>) -> LayoutResult<()> {
        store.reset()
    }
}
