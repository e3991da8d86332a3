//! Messages emitted by the arrow carousel controls

/// Navigation actions from the arrow carousel's buttons and dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowMessage {
    /// Advance one slide (wraps).
    Next,
    /// Retreat one slide (wraps).
    Previous,
    /// Jump directly to a dot's slide.
    Select(usize),
}
