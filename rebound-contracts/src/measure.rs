use rebound_model::{Axis, AxisBounds, Rect, Size};

/// Reports layout geometry to the engine.
///
/// Called on construction and on every `refresh`. Implementations should be
/// cheap to query; the engine caches what it reads until the next refresh.
pub trait Measurer {
    /// Handle used by `scroll_to_element` to name a piece of content.
    type Element;

    /// Scrollable range of `axis`. Must satisfy `min <= max`.
    fn bounds(&self, axis: Axis) -> AxisBounds;

    /// Size of the visible viewport (the wrapper around the content).
    fn viewport(&self) -> Size;

    /// Extent of one picker item along the y axis, when the content is a
    /// list of uniformly sized items.
    fn item_extent(&self) -> Option<f32> {
        None
    }

    /// Number of picker items.
    fn item_count(&self) -> usize {
        0
    }

    /// Geometry of `element` in content coordinates, or `None` when the
    /// element is not part of the content.
    fn locate(&self, element: &Self::Element) -> Option<Rect> {
        let _ = element;
        None
    }
}

impl<M: Measurer + ?Sized> Measurer for &M {
    type Element = M::Element;

    fn bounds(&self, axis: Axis) -> AxisBounds {
        (**self).bounds(axis)
    }

    fn viewport(&self) -> Size {
        (**self).viewport()
    }

    fn item_extent(&self) -> Option<f32> {
        (**self).item_extent()
    }

    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn locate(&self, element: &Self::Element) -> Option<Rect> {
        (**self).locate(element)
    }
}
