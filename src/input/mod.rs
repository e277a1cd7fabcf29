use macroquad::prelude::*;

use crate::application::{Editor, StrokeKind};
use crate::ui::{BRUSH_RADII, ButtonAction, Button, ZOOM_STEP, grid_area_width};

/// Random fill density used by the R key and the Random button
pub const RANDOM_DENSITY: f64 = 0.3;

fn held_stroke() -> Option<StrokeKind> {
    if is_mouse_button_down(MouseButton::Left) {
        Some(StrokeKind::Paint)
    } else if is_mouse_button_down(MouseButton::Right) {
        Some(StrokeKind::Erase)
    } else {
        None
    }
}

fn pressed_stroke() -> Option<StrokeKind> {
    if is_mouse_button_pressed(MouseButton::Left) {
        Some(StrokeKind::Paint)
    } else if is_mouse_button_pressed(MouseButton::Right) {
        Some(StrokeKind::Erase)
    } else {
        None
    }
}

/// Feed pointer state to the editor. `blocked` is set while the pointer is
/// over UI that owns the click (an open dropdown).
pub fn handle_pointer(editor: &Editor, mouse_pos: (f32, f32), blocked: bool) {
    if blocked || mouse_pos.0 >= grid_area_width() {
        editor.pointer_leave();
        return;
    }
    if is_mouse_button_released(MouseButton::Left) || is_mouse_button_released(MouseButton::Right) {
        editor.pointer_up();
    }
    match pressed_stroke() {
        Some(kind) => {
            editor.pointer_down(mouse_pos, kind);
        }
        None => {
            editor.pointer_move(mouse_pos, held_stroke());
        }
    }
}

/// Mouse wheel and +/- keys request a new cell size; the editor applies
/// it after the debounce period.
pub fn handle_zoom(editor: &Editor, now: f64) {
    let wheel = mouse_wheel().1;
    let direction = if wheel > 0.0 || is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
        1.0
    } else if wheel < 0.0 || is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
        -1.0
    } else {
        0.0
    };
    if direction != 0.0 {
        editor.zoom_by(direction * ZOOM_STEP, now);
    }
    editor.poll_zoom(now);
}

/// Keyboard shortcuts
pub fn process_keyboard_input(editor: &Editor) {
    if is_key_pressed(KeyCode::Space) {
        if editor.is_running() {
            editor.stop();
        } else {
            editor.start();
        }
    }
    if is_key_pressed(KeyCode::N) {
        editor.step_once();
    }
    if is_key_pressed(KeyCode::C) {
        editor.clear();
    }
    if is_key_pressed(KeyCode::R) {
        editor.randomize(RANDOM_DENSITY);
    }
    if is_key_pressed(KeyCode::T) {
        editor.toggle_theme();
    }

    let config = editor.config();
    if is_key_pressed(KeyCode::Up) {
        editor.set_interval_step(config.interval_step + 1);
    }
    if is_key_pressed(KeyCode::Down) {
        editor.set_interval_step(config.interval_step.saturating_sub(1));
    }
    if is_key_pressed(KeyCode::RightBracket) {
        let next = BRUSH_RADII.iter().copied().find(|&r| r > config.brush_radius);
        if let Some(radius) = next {
            editor.set_brush_radius(radius);
        }
    }
    if is_key_pressed(KeyCode::LeftBracket) {
        let prev = BRUSH_RADII.iter().copied().rev().find(|&r| r < config.brush_radius);
        if let Some(radius) = prev {
            editor.set_brush_radius(radius);
        }
    }
}

/// Dispatch panel button clicks. Returns true if a button took the click.
pub fn process_button_clicks(editor: &Editor, buttons: &[(ButtonAction, Button)], mouse_pos: (f32, f32)) -> bool {
    let Some((action, _)) = buttons.iter().find(|(_, button)| button.is_clicked(mouse_pos)) else {
        return false;
    };
    match action {
        ButtonAction::Start => editor.start(),
        ButtonAction::Stop => editor.stop(),
        ButtonAction::Step => {
            editor.step_once();
        }
        ButtonAction::Clear => editor.clear(),
        ButtonAction::Random => editor.randomize(RANDOM_DENSITY),
        ButtonAction::Theme => {
            editor.toggle_theme();
        }
    }
    true
}
