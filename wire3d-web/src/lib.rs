/// wire3d Web - canvas-based wireframe viewer for browsers
///
/// The page forwards pointer, wheel and key events from a canvas element and
/// calls `render` once per animation frame.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wire3d_core::{
    ButtonAction, InputEvent, Key, LineCommand, LineSink, PointerButton, Signal, Viewer,
    ViewerConfig,
};

/// Strokes lines onto a 2D canvas context
struct CanvasSink<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl LineSink for CanvasSink<'_> {
    fn draw_line(&mut self, line: &LineCommand) {
        let (r, g, b) = line.color.to_rgb8();
        self.context
            .set_stroke_style(&JsValue::from_str(&format!("rgb({r}, {g}, {b})")));
        self.context.begin_path();
        self.context.move_to(line.start.x, line.start.y);
        self.context.line_to(line.end.x, line.end.y);
        self.context.stroke();
    }
}

#[wasm_bindgen]
pub struct WebViewer {
    viewer: Viewer,
    context: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl WebViewer {
    /// Attach to the canvas with the given element id; its size is the viewport
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebViewer, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id '{canvas_id}'")))?
            .dyn_into::<HtmlCanvasElement>()?;
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let config = ViewerConfig {
            width: canvas.width(),
            height: canvas.height(),
            ..ViewerConfig::default()
        };
        let viewer = Viewer::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(WebViewer { viewer, context })
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.viewer.handle(InputEvent::PointerButton {
            button: PointerButton::Primary,
            action: ButtonAction::Press,
            x,
            y,
        });
    }

    pub fn pointer_up(&mut self) {
        let (x, y) = self.viewer.state().last_pointer;
        self.viewer.handle(InputEvent::PointerButton {
            button: PointerButton::Primary,
            action: ButtonAction::Release,
            x,
            y,
        });
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.viewer.handle(InputEvent::PointerMove { x, y });
    }

    /// Browser wheel deltas grow downward; scrolling up zooms in
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y == 0.0 {
            return;
        }
        self.viewer.handle(InputEvent::Wheel {
            dx: 0.0,
            dy: -delta_y.signum(),
        });
    }

    /// Forward a `KeyboardEvent.key`; returns false once close was requested
    pub fn key(&mut self, name: &str) -> bool {
        let key = match name {
            "Escape" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        };
        self.viewer.handle(InputEvent::Key(key)) == Signal::Continue
    }

    /// Clear the canvas and draw the current frame
    pub fn render(&self) {
        let viewport = self.viewer.viewport();
        self.context.set_fill_style(&JsValue::from_str("black"));
        self.context
            .fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);

        let mut sink = CanvasSink {
            context: &self.context,
        };
        self.viewer.render(&mut sink);
    }
}
