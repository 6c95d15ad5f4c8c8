/// wire3d Core Library - wireframe geometry, projection and view interaction
///
/// This library provides the backend-agnostic core of the viewer: the
/// degree-quantized rotation engine, the perspective/orthographic projection,
/// the view state machine driven by pointer, wheel and key events, and the
/// per-frame renderer that emits 2D lines to a backend sink.

pub mod config;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod render;
pub mod transform;
pub mod trig;
pub mod view;
pub mod viewer;

// Re-export commonly used types
pub use config::{ViewerConfig, ZWrapPolicy};
pub use error::{ConfigError, ConfigResult};
pub use geometry::{Color, Point3D, Segment, Wireframe};
pub use projection::{Camera, ProjectionMode, Viewport};
pub use render::{FrameRenderer, LineCommand, LineSink};
pub use transform::{EulerAngles, Transform};
pub use trig::TrigTable;
pub use view::{ButtonAction, InputEvent, InteractionController, Key, PointerButton, Signal, ViewState};
pub use viewer::Viewer;
