//! Model→rendered projection for a panned, zoomed and rotated view.

/// View camera: pan (`x`, `y` in model units), zoom `ratio` and rotation
/// `angle` in radians.
///
/// A `ratio` above 1.0 zooms out. Rendered positions are relative to the
/// container's top-left corner, with the camera centre at the container
/// centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub ratio: f32,
    pub angle: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            ratio: 1.0,
            angle: 0.0,
        }
    }
}

impl Camera {
    pub fn new(x: f32, y: f32, ratio: f32, angle: f32) -> Self {
        Self { x, y, ratio, angle }
    }

    /// Project a model position into container pixels.
    pub fn graph_position(&self, model: (f32, f32), container_size: (f32, f32)) -> (f32, f32) {
        let ratio = if self.ratio > 0.0 { self.ratio } else { 1.0 };
        let (sin, cos) = self.angle.sin_cos();
        let dx = model.0 - self.x;
        let dy = model.1 - self.y;

        (
            (dx * cos + dy * sin) / ratio + container_size.0 / 2.0,
            (dy * cos - dx * sin) / ratio + container_size.1 / 2.0,
        )
    }
}
