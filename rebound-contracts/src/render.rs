use rebound_model::Point;

/// Moves the content surface.
///
/// `apply` is invoked for every position change: each accepted drag sample,
/// each animation frame and each immediate jump.
pub trait Renderer {
    fn apply(&mut self, position: Point);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn apply(&mut self, position: Point) {
        (**self).apply(position)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn apply(&mut self, position: Point) {
        (**self).apply(position)
    }
}

/// Renderer for headless hosts that only read the engine's position.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn apply(&mut self, _position: Point) {}
}
