/// Wireframe geometry: colored line segments in object space
use nalgebra::Point3;

/// Object-space point
pub type Point3D = Point3<f64>;

/// RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Color as 8-bit channels
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

/// A line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3D,
    pub end: Point3D,
    pub color: Color,
}

impl Segment {
    pub fn new(start: Point3D, end: Point3D, color: Color) -> Self {
        Self { start, end, color }
    }
}

/// An ordered, immutable set of segments
#[derive(Debug, Clone, Default)]
pub struct Wireframe {
    segments: Vec<Segment>,
}

impl Wireframe {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The 12 edges of an axis-aligned cube centered at the origin.
    ///
    /// `size` is the half edge length. Edges are ordered: the z = +size face
    /// loop, the z = -size face loop, then the four vertical edges.
    pub fn cube(size: f64) -> Self {
        let s = size;
        let corners = [
            (-s, -s),
            (s, -s),
            (s, s),
            (-s, s),
        ];

        let mut segments = Vec::with_capacity(12);
        for z in [s, -s] {
            for i in 0..corners.len() {
                let (x0, y0) = corners[i];
                let (x1, y1) = corners[(i + 1) % corners.len()];
                segments.push(Segment::new(
                    Point3D::new(x0, y0, z),
                    Point3D::new(x1, y1, z),
                    Color::WHITE,
                ));
            }
        }

        for (x, y) in [(s, s), (-s, s), (s, -s), (-s, -s)] {
            segments.push(Segment::new(
                Point3D::new(x, y, -s),
                Point3D::new(x, y, s),
                Color::WHITE,
            ));
        }

        Self::new(segments)
    }

    /// X, Y and Z axes, each drawn from its tip back to the origin
    pub fn axes(length: f64) -> Self {
        let origin = Point3D::origin();
        Self::new(vec![
            Segment::new(Point3D::new(length, 0.0, 0.0), origin, Color::YELLOW),
            Segment::new(Point3D::new(0.0, length, 0.0), origin, Color::YELLOW),
            Segment::new(Point3D::new(0.0, 0.0, length), origin, Color::YELLOW),
        ])
    }

    /// The viewer scene: cube edges first, then the axes
    pub fn scene(cube_size: f64, axis_length: f64) -> Self {
        let mut segments = Self::cube(cube_size).segments;
        segments.extend(Self::axes(axis_length).segments);
        Self::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_edges() {
        let cube = Wireframe::cube(100.0);
        assert_eq!(cube.len(), 12);
        for edge in cube.segments() {
            // Every edge spans exactly one axis with length 2 * size
            assert!(((edge.end - edge.start).norm() - 200.0).abs() < 1e-9);
            for p in [edge.start, edge.end] {
                assert!(p.coords.iter().all(|c| c.abs() == 100.0));
            }
        }
        assert_eq!(cube.segments()[0].start, Point3D::new(-100.0, -100.0, 100.0));
        assert_eq!(cube.segments()[0].end, Point3D::new(100.0, -100.0, 100.0));
    }

    #[test]
    fn test_scene_order() {
        let scene = Wireframe::scene(100.0, 150.0);
        assert_eq!(scene.len(), 15);
        assert!(scene.segments()[..12].iter().all(|s| s.color == Color::WHITE));
        assert!(scene.segments()[12..].iter().all(|s| s.color == Color::YELLOW));
        assert_eq!(scene.segments()[12].start, Point3D::new(150.0, 0.0, 0.0));
        assert_eq!(scene.segments()[14].end, Point3D::origin());
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(Color::YELLOW.to_rgb8(), (255, 255, 0));
        assert_eq!(Color::new(0.5, 2.0, -1.0).to_rgb8(), (128, 255, 0));
    }
}
