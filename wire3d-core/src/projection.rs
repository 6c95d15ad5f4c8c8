/// Camera and projection utilities
use nalgebra::Point2;

use crate::geometry::Point3D;

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

impl ProjectionMode {
    pub fn from_perspective(perspective: bool) -> Self {
        if perspective {
            ProjectionMode::Perspective
        } else {
            ProjectionMode::Orthographic
        }
    }
}

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

/// Maps rotated object-space points to screen space.
///
/// The object X axis is the depth axis; object Y runs right and object Z
/// runs up on screen.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub viewport: Viewport,
    pub eye_distance: f64,
}

impl Camera {
    pub fn new(viewport: Viewport, eye_distance: f64) -> Self {
        Self {
            viewport,
            eye_distance,
        }
    }

    /// Perspective divisor for a point at depth `x`.
    ///
    /// Not finite when `x == eye_distance`.
    pub fn perspective_factor(&self, x: f64) -> f64 {
        1.0 / (1.0 - x / self.eye_distance)
    }

    /// Project a 3D point to 2D screen space
    pub fn project_to_screen(&self, point: &Point3D, mode: ProjectionMode) -> Point2<f64> {
        let center = self.viewport.center();
        let factor = match mode {
            ProjectionMode::Perspective => self.perspective_factor(point.x),
            ProjectionMode::Orthographic => 1.0,
        };

        Point2::new(center.x + point.y * factor, center.y - point.z * factor)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Viewport::new(800, 600), 300.0)
    }
}
