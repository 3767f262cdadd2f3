//! The table the robot moves on.

use crate::error::BoardError;
use glam::IVec2;
use serde::Serialize;

/// A rectangular table.
///
/// The valid region is half-open: `[origin.x, origin.x + width) × [origin.y, origin.y + height)`.
/// A `Board` can only be obtained through [`Board::new`] or [`Board::with_origin`],
/// so every instance has positive dimensions and an extent that fits in `i32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    width: i32,
    height: i32,
    origin: IVec2,
}

impl Board {
    pub const DEFAULT_WIDTH: i32 = 5;
    pub const DEFAULT_HEIGHT: i32 = 5;

    /// Creates a table anchored at `(0, 0)`.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        Self::with_origin(width, height, IVec2::ZERO)
    }

    /// Creates a table whose lower-left cell is `origin`.
    pub fn with_origin(width: i32, height: i32, origin: IVec2) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        if origin.x.checked_add(width).is_none() || origin.y.checked_add(height).is_none() {
            return Err(BoardError::OutOfRange {
                origin_x: origin.x,
                origin_y: origin.y,
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            origin,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    /// Returns `true` if `position` lies on the table.
    pub fn is_valid(&self, position: IVec2) -> bool {
        position.x >= self.origin.x
            && position.x < self.origin.x + self.width
            && position.y >= self.origin.y
            && position.y < self.origin.y + self.height
    }
}

impl Default for Board {
    /// The standard 5x5 table at the origin.
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            origin: IVec2::ZERO,
        }
    }
}
