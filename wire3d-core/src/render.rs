/// Per-frame wireframe rendering into a backend line sink
use log::trace;
use nalgebra::Point2;

use crate::geometry::{Color, Wireframe};
use crate::projection::Camera;
use crate::transform::Transform;
use crate::trig::TrigTable;
use crate::view::ViewState;

/// A 2D line in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCommand {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
    pub color: Color,
}

/// Receives the lines of one frame, in draw order
pub trait LineSink {
    fn draw_line(&mut self, line: &LineCommand);
}

impl LineSink for Vec<LineCommand> {
    fn draw_line(&mut self, line: &LineCommand) {
        self.push(*line);
    }
}

/// Transforms the scene for the current view and emits its lines
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    scene: Wireframe,
    camera: Camera,
    trig: &'static TrigTable,
}

impl FrameRenderer {
    pub fn new(scene: Wireframe, camera: Camera) -> Self {
        Self {
            scene,
            camera,
            trig: TrigTable::shared(),
        }
    }

    pub fn scene(&self) -> &Wireframe {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn render_frame(&self, view: &ViewState, sink: &mut dyn LineSink) {
        let rotation = Transform::rotation_matrix(&view.rotation, self.trig);
        let zoom = Transform::zoom_about(self.camera.viewport.center(), view.scale);
        let mode = view.projection_mode();

        trace!(
            "frame: rotation {:?}, scale {}, {:?}",
            view.rotation,
            view.scale,
            mode
        );

        for segment in self.scene.segments() {
            let start = rotation * segment.start;
            let end = rotation * segment.end;

            let start = zoom.transform_point(&self.camera.project_to_screen(&start, mode));
            let end = zoom.transform_point(&self.camera.project_to_screen(&end, mode));

            sink.draw_line(&LineCommand {
                start,
                end,
                color: segment.color,
            });
        }
    }
}
