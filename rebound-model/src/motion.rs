use crate::geometry::Axis;

/// Direction of travel along one axis.
///
/// `Forward` means the position is decreasing (content advancing toward
/// later pages/items), `Backward` means it is increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Backward = -1,
    #[default]
    None = 0,
    Forward = 1,
}

impl Direction {
    /// Classify a position delta. A positive delta moves the content back
    /// toward its resting edge.
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            Direction::Backward
        } else if delta < 0.0 {
            Direction::Forward
        } else {
            Direction::None
        }
    }

    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Page/item index step implied by this direction.
    pub fn index_step(self) -> isize {
        self as isize
    }

    pub fn is_none(self) -> bool {
        matches!(self, Direction::None)
    }
}

/// One of the four edges of the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Edge crossed when the position rises above an axis' `max`.
    pub fn leading(axis: Axis) -> Edge {
        match axis {
            Axis::X => Edge::Left,
            Axis::Y => Edge::Top,
        }
    }

    /// Edge crossed when the position falls below an axis' `min`.
    pub fn trailing(axis: Axis) -> Edge {
        match axis {
            Axis::X => Edge::Right,
            Axis::Y => Edge::Bottom,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Y,
            Edge::Left | Edge::Right => Axis::X,
        }
    }
}
