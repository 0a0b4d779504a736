//! Screen placement of a card.

/// Origin row and column at which a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    /// Origin row.
    pub begin_y: i32,
    /// Origin column.
    pub begin_x: i32,
}

impl Frame {
    /// Frame of a card that has not been placed yet.
    pub const NONE: Self = Self::new(0, 0);

    /// Creates a frame at the given origin.
    #[must_use]
    pub const fn new(begin_y: i32, begin_x: i32) -> Self {
        Self { begin_y, begin_x }
    }

    /// Moves the frame to a new origin.
    pub const fn set(&mut self, begin_y: i32, begin_x: i32) {
        self.begin_y = begin_y;
        self.begin_x = begin_x;
    }
}
