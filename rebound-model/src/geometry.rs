use std::fmt;
use std::ops::{Add, Sub};

/// One of the two scroll axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A content translation in pixels.
///
/// Positions follow the translate convention: the resting position of an
/// axis is its upper bound (usually `0.0`) and scrolling forward moves the
/// value toward the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    pub fn with(mut self, axis: Axis, value: f32) -> Self {
        self.set(axis, value);
        self
    }

    /// Component-wise rounding to whole pixels.
    pub fn round(self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Width and height of a viewport or element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along an axis: width for `X`, height for `Y`.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Element geometry in content coordinates (origin at the content's top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Scrollable range of one axis, `min <= max`.
///
/// `max` is the resting edge (top or left), `min` the far edge reached after
/// scrolling through all content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisBounds {
    pub min: f32,
    pub max: f32,
}

impl AxisBounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Bounds for content of `content` extent shown through a viewport of
    /// `viewport` extent, resting at zero.
    pub fn from_extents(viewport: f32, content: f32) -> Self {
        Self {
            min: (viewport - content).min(0.0),
            max: 0.0,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Whether there is any room to scroll.
    pub fn is_scrollable(&self) -> bool {
        self.min < self.max
    }

    pub fn contains(&self, position: f32) -> bool {
        position >= self.min && position <= self.max
    }

    pub fn clamp(&self, position: f32) -> f32 {
        position.clamp(self.min, self.max)
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Signed distance outside the bounds: positive past `max`, negative
    /// past `min`, zero inside.
    pub fn overflow(&self, position: f32) -> f32 {
        if position > self.max {
            position - self.max
        } else if position < self.min {
            position - self.min
        } else {
            0.0
        }
    }
}
