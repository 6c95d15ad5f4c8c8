use approx::assert_abs_diff_eq;
use wire3d_core::{
    ButtonAction, InputEvent, Key, LineCommand, PointerButton, Signal, Viewer, ViewerConfig,
};

fn press(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerButton {
        button: PointerButton::Primary,
        action: ButtonAction::Press,
        x,
        y,
    }
}

fn release(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerButton {
        button: PointerButton::Primary,
        action: ButtonAction::Release,
        x,
        y,
    }
}

fn frame(viewer: &Viewer) -> Vec<LineCommand> {
    let mut lines: Vec<LineCommand> = Vec::new();
    viewer.render(&mut lines);
    lines
}

#[test]
fn drag_then_render_places_vertex_at_golden_position() {
    let mut viewer = Viewer::new(&ViewerConfig::default()).unwrap();

    viewer.handle(press(100.0, 100.0));
    viewer.handle(InputEvent::PointerMove { x: 136.0, y: 100.0 });
    viewer.handle(release(136.0, 100.0));
    assert_abs_diff_eq!(viewer.state().rotation.z, 342.0, epsilon = 1e-12);

    let lines = frame(&viewer);
    assert_eq!(lines.len(), 15);

    // Edge 2 of the z = +size face loop starts at (100, 100, 100)
    let vertex = lines[2].start;
    assert_abs_diff_eq!(vertex.x, 560.317383058461, epsilon = 1e-9);
    assert_abs_diff_eq!(vertex.y, 172.77140444512239, epsilon = 1e-9);
    assert_eq!(lines[1].end, vertex);

    // Moving after release changes nothing
    viewer.handle(InputEvent::PointerMove { x: 500.0, y: 10.0 });
    assert_eq!(frame(&viewer), lines);
}

#[test]
fn zoom_moves_golden_vertex_away_from_center() {
    let mut viewer = Viewer::new(&ViewerConfig::default()).unwrap();
    viewer.handle(press(100.0, 100.0));
    viewer.handle(InputEvent::PointerMove { x: 136.0, y: 100.0 });
    viewer.handle(release(136.0, 100.0));
    for _ in 0..10 {
        viewer.handle(InputEvent::Wheel { dx: 0.0, dy: 1.0 });
    }
    assert_abs_diff_eq!(viewer.state().scale, 2.0, epsilon = 1e-12);

    let vertex = frame(&viewer)[2].start;
    assert_abs_diff_eq!(vertex.x, 720.634766116922, epsilon = 1e-9);
    assert_abs_diff_eq!(vertex.y, 45.54280889024477, epsilon = 1e-9);
}

#[test]
fn orthographic_config_projects_without_divisor() {
    let config = ViewerConfig::from_json_str(r#"{ "perspective": false }"#).unwrap();
    let viewer = Viewer::new(&config).unwrap();

    let lines = frame(&viewer);
    // Unrotated first edge: (-100, -100, 100) -> (100, -100, 100)
    assert_eq!(lines[0].start.x, 300.0);
    assert_eq!(lines[0].start.y, 200.0);
    assert_eq!(lines[0].end.x, 300.0);
    assert_eq!(lines[0].end.y, 200.0);
}

#[test]
fn escape_closes_and_other_keys_continue() {
    let mut viewer = Viewer::new(&ViewerConfig::default()).unwrap();
    assert_eq!(viewer.handle(InputEvent::Key(Key::Char('a'))), Signal::Continue);
    assert_eq!(viewer.handle(InputEvent::Key(Key::Escape)), Signal::Close);
}

#[test]
fn invalid_config_is_rejected() {
    let config = ViewerConfig {
        width: 0,
        ..ViewerConfig::default()
    };
    assert!(Viewer::new(&config).is_err());
}
