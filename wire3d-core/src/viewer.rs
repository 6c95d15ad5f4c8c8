/// Single-scene viewer: one interaction controller plus one frame renderer
use log::info;

use crate::config::ViewerConfig;
use crate::error::ConfigResult;
use crate::geometry::Wireframe;
use crate::projection::Viewport;
use crate::render::{FrameRenderer, LineSink};
use crate::view::{InputEvent, InteractionController, Signal, ViewState};

pub struct Viewer {
    controller: InteractionController,
    renderer: FrameRenderer,
}

impl Viewer {
    pub fn new(config: &ViewerConfig) -> ConfigResult<Self> {
        let controller = InteractionController::new(config)?;

        let scene = Wireframe::scene(config.cube_size, config.axis_length);
        info!(
            "viewer {}x{} with {} segments, {} projection",
            config.width,
            config.height,
            scene.len(),
            if config.perspective { "perspective" } else { "orthographic" }
        );

        Ok(Self {
            controller,
            renderer: FrameRenderer::new(scene, config.camera()),
        })
    }

    pub fn handle(&mut self, event: InputEvent) -> Signal {
        self.controller.handle(event)
    }

    pub fn render(&self, sink: &mut dyn LineSink) {
        self.renderer.render_frame(self.controller.state(), sink);
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn viewport(&self) -> Viewport {
        self.renderer.camera().viewport
    }
}
