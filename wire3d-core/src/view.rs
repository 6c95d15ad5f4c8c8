/// View state and the pointer/wheel/key interaction controller
use log::debug;

use crate::config::{ViewerConfig, ZWrapPolicy};
use crate::error::ConfigResult;
use crate::projection::ProjectionMode;
use crate::transform::EulerAngles;

/// Mutable view parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Rotation angles in degrees
    pub rotation: EulerAngles,
    pub scale: f64,
    pub dragging: bool,
    /// Last pointer position; only meaningful while dragging
    pub last_pointer: (f64, f64),
    pub perspective: bool,
}

impl ViewState {
    pub fn new(scale: f64, perspective: bool) -> Self {
        Self {
            rotation: EulerAngles::zero(),
            scale,
            dragging: false,
            last_pointer: (0.0, 0.0),
            perspective,
        }
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        ProjectionMode::from_perspective(self.perspective)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(1.0, true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Press,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
    Other,
}

/// Raw input delivered by the windowing backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerButton {
        button: PointerButton,
        action: ButtonAction,
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    Wheel {
        dx: f64,
        dy: f64,
    },
    Key(Key),
}

/// What the backend should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Close,
}

/// Wrap an angle into [0, 360)
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Owns the view state and applies input events to it
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: ViewState,
    sensitivity: f64,
    zoom_step: f64,
    min_scale: f64,
    max_scale: f64,
    z_wrap: ZWrapPolicy,
}

impl InteractionController {
    pub fn new(config: &ViewerConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Caller guarantees `config` passed `validate`, so the scale bounds are ordered
    fn from_validated(config: &ViewerConfig) -> Self {
        Self {
            state: ViewState::new(config.initial_scale, config.perspective),
            sensitivity: config.sensitivity,
            zoom_step: config.zoom_step,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            z_wrap: config.z_wrap,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn handle(&mut self, event: InputEvent) -> Signal {
        match event {
            InputEvent::PointerButton { button, action, x, y } => {
                self.on_pointer_button(button, action, x, y);
                Signal::Continue
            }
            InputEvent::PointerMove { x, y } => {
                self.on_pointer_move(x, y);
                Signal::Continue
            }
            InputEvent::Wheel { dy, .. } => {
                self.on_wheel(dy);
                Signal::Continue
            }
            InputEvent::Key(key) => self.on_key(key),
        }
    }

    pub fn on_pointer_button(&mut self, button: PointerButton, action: ButtonAction, x: f64, y: f64) {
        if button != PointerButton::Primary {
            return;
        }

        match action {
            ButtonAction::Press => {
                self.state.dragging = true;
                self.state.last_pointer = (x, y);
                debug!("drag started at ({x}, {y})");
            }
            ButtonAction::Release => {
                if self.state.dragging {
                    debug!("drag ended, rotation {:?}", self.state.rotation);
                }
                self.state.dragging = false;
            }
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !self.state.dragging {
            return;
        }

        let (last_x, last_y) = self.state.last_pointer;
        let dx = x - last_x;
        let dy = y - last_y;

        let rotation = &mut self.state.rotation;
        rotation.z -= dx * self.sensitivity;
        rotation.y -= dy * self.sensitivity;
        self.state.last_pointer = (x, y);

        rotation.x = wrap_degrees(rotation.x);
        rotation.y = wrap_degrees(rotation.y);
        rotation.z = match self.z_wrap {
            ZWrapPolicy::Full => wrap_degrees(rotation.z),
            ZWrapPolicy::NegativeOnly if rotation.z < 0.0 => wrap_degrees(rotation.z),
            ZWrapPolicy::NegativeOnly => rotation.z,
        };
    }

    pub fn on_wheel(&mut self, dy: f64) {
        let scale = self.state.scale + dy * self.zoom_step;
        self.state.scale = scale.clamp(self.min_scale, self.max_scale);
        debug!("zoom scale {:.2}", self.state.scale);
    }

    pub fn on_key(&mut self, key: Key) -> Signal {
        match key {
            Key::Escape => {
                debug!("close requested");
                Signal::Close
            }
            Key::Char('p') | Key::Char('P') => {
                self.state.perspective = !self.state.perspective;
                debug!("projection mode {:?}", self.state.projection_mode());
                Signal::Continue
            }
            _ => Signal::Continue,
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::from_validated(&ViewerConfig::default())
    }
}
