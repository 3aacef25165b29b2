mod ui;

/// Paints the vector scene onto a square canvas allocated from the
/// available panel width. The component holds no state of its own; the
/// scene is a pure function of the current input state and the canvas
/// size, recomputed on every frame.
pub struct Viewport {}

impl Viewport {
    pub fn new() -> Self {
        Self {}
    }
}
