//! Gesture messages published by the drag carousel surface

/// Pointer-gesture events, reduced to a single horizontal coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragMessage {
    /// Pointer pressed on the surface; carries the window-space x.
    GestureStarted(f32),
    /// Pointer moved during a live gesture; carries the window-space x.
    GestureMoved(f32),
    /// Pointer released; carries the surface width for thresholding.
    GestureEnded(f32),
}
