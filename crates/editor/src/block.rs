//! Interactive block gestures
//!
//! One controller per document block translates pointer gestures into
//! layout store calls. The controller is a small state machine: `Idle`
//! until a pointer-down lands on one of its handles, then `Dragging` or
//! `Resizing` until the pointer is released.

use log::debug;

use quoteforge_geometry::{near_edge, Point, Rect, Size};
use quoteforge_layout::{BlockId, LayoutStore, SizePatch, StoragePort, MIN_HEIGHT, MIN_WIDTH};

/// Height of the drag-handle tab above the block
const DRAG_HANDLE_HEIGHT: f32 = 24.0;
/// Width of the drag-handle tab
const DRAG_HANDLE_WIDTH: f32 = 80.0;
/// Side length of the corner resize handle
const CORNER_HANDLE: f32 = 16.0;
/// Short side of the edge resize handles
const EDGE_HANDLE: f32 = 8.0;

/// Direction tag of a resize handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    SouthEast,
    North,
    South,
    East,
    West,
}

/// Gesture state of one block
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    /// Pointer is dragging the block; offset is pointer minus block origin
    Dragging { grab_offset: Point },
    /// Pointer is resizing the block from its recorded starting geometry
    Resizing {
        direction: ResizeDirection,
        start_pointer: Point,
        start_size: Size,
    },
}

/// Draggable/resizable wrapper around one document block
#[derive(Debug)]
pub struct BlockController {
    id: BlockId,
    state: GestureState,
    near_edge: bool,
    disabled: bool,
}

impl BlockController {
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            state: GestureState::Idle,
            near_edge: false,
            disabled: false,
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// True while a drag or resize gesture is in progress
    ///
    /// The session routes pointer moves exclusively to a capturing block,
    /// the equivalent of registering process-wide move/up listeners on
    /// gesture start and removing them on gesture end.
    pub fn is_capturing(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    /// Transient "snapping to edge" indicator, set while dragging
    pub fn near_edge(&self) -> bool {
        self.near_edge
    }

    /// Disable all gesture handling (print/preview rendering)
    ///
    /// A disabled block is a static positioned element; its handles are
    /// not rendered and pointer events pass through it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.state = GestureState::Idle;
            self.near_edge = false;
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The drag-handle tab region for a block frame
    pub fn drag_handle(frame: Rect) -> Rect {
        Rect::new(
            frame.x,
            frame.y - DRAG_HANDLE_HEIGHT,
            DRAG_HANDLE_WIDTH.min(frame.width),
            DRAG_HANDLE_HEIGHT,
        )
    }

    /// The five resize-handle regions for a block frame
    pub fn resize_handles(frame: Rect) -> [(ResizeDirection, Rect); 5] {
        let right = frame.x + frame.width;
        let bottom = frame.y + frame.height;
        let mid_x = frame.x + frame.width / 2.0;
        let mid_y = frame.y + frame.height / 2.0;
        [
            (
                ResizeDirection::SouthEast,
                Rect::new(
                    right - CORNER_HANDLE / 2.0,
                    bottom - CORNER_HANDLE / 2.0,
                    CORNER_HANDLE,
                    CORNER_HANDLE,
                ),
            ),
            (
                ResizeDirection::North,
                Rect::new(
                    mid_x - CORNER_HANDLE / 2.0,
                    frame.y - EDGE_HANDLE / 2.0,
                    CORNER_HANDLE,
                    EDGE_HANDLE,
                ),
            ),
            (
                ResizeDirection::South,
                Rect::new(
                    mid_x - CORNER_HANDLE / 2.0,
                    bottom - EDGE_HANDLE / 2.0,
                    CORNER_HANDLE,
                    EDGE_HANDLE,
                ),
            ),
            (
                ResizeDirection::East,
                Rect::new(
                    right - EDGE_HANDLE / 2.0,
                    mid_y - CORNER_HANDLE / 2.0,
                    EDGE_HANDLE,
                    CORNER_HANDLE,
                ),
            ),
            (
                ResizeDirection::West,
                Rect::new(
                    frame.x - EDGE_HANDLE / 2.0,
                    mid_y - CORNER_HANDLE / 2.0,
                    EDGE_HANDLE,
                    CORNER_HANDLE,
                ),
            ),
        ]
    }

    /// Handle a pointer-down at `p`
    ///
    /// Returns true when the gesture starts on one of this block's
    /// handles and the block takes pointer capture.
    pub fn pointer_down<S: StoragePort>(&mut self, p: Point, store: &LayoutStore<S>) -> bool {
        if self.disabled || self.is_capturing() {
            return false;
        }

        let frame = store.layout(self.id).frame();

        // Resize handles win over the drag handle
        for (direction, rect) in Self::resize_handles(frame) {
            if rect.contains(p.x, p.y) {
                self.state = GestureState::Resizing {
                    direction,
                    start_pointer: p,
                    start_size: frame.size(),
                };
                debug!("{}: resizing {:?}", self.id, direction);
                return true;
            }
        }

        if Self::drag_handle(frame).contains(p.x, p.y) {
            self.state = GestureState::Dragging {
                grab_offset: Point::new(p.x - frame.x, p.y - frame.y),
            };
            debug!("{}: dragging", self.id);
            return true;
        }

        false
    }

    /// Handle a pointer-move at `p` while capturing
    ///
    /// Idempotent: a burst of move events with the same position produces
    /// the same store state. No-op while idle or disabled.
    pub fn pointer_move<S: StoragePort>(&mut self, p: Point, store: &mut LayoutStore<S>) {
        if self.disabled {
            return;
        }
        match self.state {
            GestureState::Idle => {}
            GestureState::Dragging { grab_offset } => {
                let candidate = Point::new(p.x - grab_offset.x, p.y - grab_offset.y);
                store.update_position(self.id, candidate);

                let layout = store.layout(self.id);
                self.near_edge = near_edge(
                    Point::new(layout.x, layout.y),
                    layout.effective_size(),
                    store.bounds(),
                );
            }
            GestureState::Resizing {
                direction,
                start_pointer,
                start_size,
            } => {
                let dx = p.x - start_pointer.x;
                let dy = p.y - start_pointer.y;

                let patch = match direction {
                    ResizeDirection::SouthEast => SizePatch::new(
                        (start_size.width + dx).max(MIN_WIDTH),
                        (start_size.height + dy).max(MIN_HEIGHT),
                    ),
                    ResizeDirection::East => {
                        SizePatch::width((start_size.width + dx).max(MIN_WIDTH))
                    }
                    ResizeDirection::West => {
                        SizePatch::width((start_size.width - dx).max(MIN_WIDTH))
                    }
                    ResizeDirection::South => {
                        SizePatch::height((start_size.height + dy).max(MIN_HEIGHT))
                    }
                    ResizeDirection::North => {
                        SizePatch::height((start_size.height - dy).max(MIN_HEIGHT))
                    }
                };
                store.update_size(self.id, patch);
            }
        }
    }

    /// Handle a pointer-up, ending any gesture
    pub fn pointer_up(&mut self) {
        self.state = GestureState::Idle;
        self.near_edge = false;
    }
}
