use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Pointer position in normalized device coordinates: `x` right and `y` up,
/// both in `[-1, 1]` across the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub normalized_x: f32,
    pub normalized_y: f32,
}

impl PointerState {
    /// Map client (CSS pixel) coordinates to NDC. Degenerate viewports map
    /// to the centre.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            normalized_x: (client_x / width * 2.0 - 1.0).clamp(-1.0, 1.0),
            normalized_y: (1.0 - client_y / height * 2.0).clamp(-1.0, 1.0),
        }
    }

    pub fn ndc(&self) -> Vec2 {
        Vec2::new(self.normalized_x, self.normalized_y)
    }
}

/// Latest-value-wins pointer cell. Event handlers write, the frame reads once;
/// no queueing. Empty until the first pointer event and again once the
/// pointer leaves the window.
#[derive(Clone, Default)]
pub struct PointerCell(Rc<Cell<Option<PointerState>>>);

impl PointerCell {
    pub fn set(&self, state: PointerState) {
        self.0.set(Some(state));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    pub fn get(&self) -> Option<PointerState> {
        self.0.get()
    }
}

/// Accumulates drag motion between frames; the frame drains it.
#[derive(Clone, Default)]
pub struct DragCell {
    delta: Rc<Cell<Vec2>>,
    active: Rc<Cell<bool>>,
}

impl DragCell {
    pub fn begin(&self) {
        self.active.set(true);
    }

    pub fn end(&self) {
        self.active.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Add motion in CSS pixels; ignored unless a drag is in progress.
    pub fn push(&self, dx: f32, dy: f32) {
        if self.active.get() {
            self.delta.set(self.delta.get() + Vec2::new(dx, dy));
        }
    }

    pub fn take(&self) -> Vec2 {
        self.delta.replace(Vec2::ZERO)
    }
}
