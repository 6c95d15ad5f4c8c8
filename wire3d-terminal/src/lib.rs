/// Terminal frontend: crossterm events in, ASCII wireframe out
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use log::{debug, info};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{ButtonAction, InputEvent, Key, PointerButton, Signal, Viewer};

pub mod renderer;
pub mod session;

pub use renderer::AsciiRenderer;
pub use session::TerminalSession;

/// Main application struct for terminal wireframe viewing
pub struct TerminalApp {
    viewer: Viewer,
    renderer: AsciiRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(viewer: Viewer) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let viewport = viewer.viewport();

        Ok(Self {
            viewer,
            renderer: AsciiRenderer::new(width as usize, height as usize, viewport),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        let mut session = TerminalSession::enter(stdout())?;

        let result = self.main_loop();

        // Cleanup
        let restored = session.restore();
        result.and(restored)
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Apply every pending event before the frame reads the view
            while self.running && event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }
            if !self.running {
                break;
            }

            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        info!("terminal viewer closed");
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let input = match event::read()? {
            Event::Key(key) => self.translate_key(key),
            Event::Mouse(mouse) => self.translate_mouse(mouse),
            Event::Resize(width, height) => {
                debug!("terminal resized to {width}x{height}");
                self.renderer.resize(width as usize, height as usize);
                None
            }
            _ => None,
        };

        if let Some(input) = input {
            if self.viewer.handle(input) == Signal::Close {
                self.running = false;
            }
        }
        Ok(())
    }

    fn translate_key(&mut self, event: KeyEvent) -> Option<InputEvent> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        let key = match event.code {
            KeyCode::Esc => Key::Escape,
            KeyCode::Char('q') => {
                self.running = false;
                return None;
            }
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        };
        Some(InputEvent::Key(key))
    }

    fn translate_mouse(&self, event: MouseEvent) -> Option<InputEvent> {
        let (x, y) = self.renderer.to_viewport(event.column, event.row);
        let button = |button: MouseButton| match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
        };

        let input = match event.kind {
            MouseEventKind::Down(b) => InputEvent::PointerButton {
                button: button(b),
                action: ButtonAction::Press,
                x,
                y,
            },
            MouseEventKind::Up(b) => InputEvent::PointerButton {
                button: button(b),
                action: ButtonAction::Release,
                x,
                y,
            },
            MouseEventKind::Drag(_) | MouseEventKind::Moved => InputEvent::PointerMove { x, y },
            MouseEventKind::ScrollUp => InputEvent::Wheel { dx: 0.0, dy: 1.0 },
            MouseEventKind::ScrollDown => InputEvent::Wheel { dx: 0.0, dy: -1.0 },
            _ => return None,
        };
        Some(input)
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        self.viewer.render(&mut self.renderer);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let state = self.viewer.state();
        let (width, _) = self.renderer.size();
        let mut status = format!(
            "wire3d | FPS: {:.1} | rot ({:.0}, {:.0}, {:.0}) zoom {:.1} {:?} | Drag=Rotate Wheel=Zoom P=Projection Esc=Quit",
            self.fps,
            state.rotation.x,
            state.rotation.y,
            state.rotation.z,
            state.scale,
            state.projection_mode(),
        );
        status.truncate(width);
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
