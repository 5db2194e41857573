/// Current page of a paging layout, as reported to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageInfo {
    /// Position the page rests at on the x axis.
    pub x: f32,
    /// Position the page rests at on the y axis.
    pub y: f32,
    pub page_x: usize,
    pub page_y: usize,
}

/// A resolved discrete target along one axis: the page or item index and
/// the position it rests at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapTarget {
    pub index: usize,
    pub position: f32,
}

impl SnapTarget {
    pub const fn new(index: usize, position: f32) -> Self {
        Self { index, position }
    }
}
