//! QuoteForge Layout Editor
//!
//! Pointer-driven editing of the quotation document layout: per-block
//! drag/resize gestures, block selection and the customization panel,
//! all writing through an explicitly owned layout store.

mod block;
mod event;
mod panel;

pub use block::{BlockController, GestureState, ResizeDirection};
pub use event::{PointerButton, PointerEvent};
pub use panel::{CustomizationPanel, PanelTab};

use quoteforge_geometry::Point;
use quoteforge_layout::{BlockId, LayoutStore, StoragePort};

/// One editing session over a quotation document
///
/// Owns the layout store and one controller per template block, and routes
/// pointer events. While a block's gesture is in progress it is the sole
/// recipient of pointer moves; capture is taken on gesture start and
/// released on pointer-up, so no block sees stray events while idle.
pub struct EditorSession<S: StoragePort> {
    store: LayoutStore<S>,
    blocks: Vec<BlockController>,
    panel: CustomizationPanel,
    active: Option<usize>,
}

impl<S: StoragePort> EditorSession<S> {
    /// Create a session over a layout store
    pub fn new(store: LayoutStore<S>) -> Self {
        Self {
            store,
            blocks: BlockId::all().iter().map(|id| BlockController::new(*id)).collect(),
            panel: CustomizationPanel::new(),
            active: None,
        }
    }

    /// Feed one pointer event into the session
    pub fn dispatch(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y, button } => {
                if button == PointerButton::Left {
                    self.pointer_down(Point::new(x, y));
                }
            }
            PointerEvent::Move { x, y } => {
                if let Some(index) = self.active {
                    self.blocks[index].pointer_move(Point::new(x, y), &mut self.store);
                }
            }
            PointerEvent::Up => {
                if let Some(index) = self.active.take() {
                    self.blocks[index].pointer_up();
                }
            }
        }
    }

    fn pointer_down(&mut self, p: Point) {
        // A handle hit starts a gesture and takes capture
        for (index, block) in self.blocks.iter_mut().enumerate() {
            if block.pointer_down(p, &self.store) {
                self.active = Some(index);
                self.panel.select(Some(block.id()));
                return;
            }
        }

        // Otherwise a click inside a block selects it; later blocks in
        // template order sit on top when frames overlap
        let hit = self
            .blocks
            .iter()
            .rev()
            .find(|block| {
                !block.is_disabled() && self.store.layout(block.id()).frame().contains(p.x, p.y)
            })
            .map(|block| block.id());
        self.panel.select(hit);
    }

    /// Switch between editing and print/preview rendering
    ///
    /// Preview disables every block: handles disappear and gestures are
    /// ignored until editing is turned back on.
    pub fn set_preview(&mut self, preview: bool) {
        for block in &mut self.blocks {
            block.set_disabled(preview);
        }
        if preview {
            self.active = None;
            self.panel.select(None);
        }
    }

    /// The block currently owning pointer capture, if any
    pub fn capturing_block(&self) -> Option<BlockId> {
        self.active.map(|index| self.blocks[index].id())
    }

    /// Controller for one block
    pub fn block(&self, id: BlockId) -> Option<&BlockController> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    pub fn store(&self) -> &LayoutStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LayoutStore<S> {
        &mut self.store
    }

    pub fn panel(&self) -> &CustomizationPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut CustomizationPanel {
        &mut self.panel
    }

    /// Apply a panel style edit to the selected block
    ///
    /// Convenience wrapper pairing the panel with the owned store.
    pub fn with_panel<R>(
        &mut self,
        f: impl FnOnce(&CustomizationPanel, &mut LayoutStore<S>) -> R,
    ) -> R {
        f(&self.panel, &mut self.store)
    }
}
