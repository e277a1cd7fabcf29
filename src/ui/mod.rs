mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_height, screen_width};

use crate::application::SIMULATION_INTERVALS_MS;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 34.0;

/// Zoom step applied per mouse-wheel notch or +/- key, in pixels per cell
pub const ZOOM_STEP: f32 = 2.0;

/// Brush radii offered by the brush dropdown
pub const BRUSH_RADII: &[u32] = &[0, 1, 2, 3, 5];

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Speed labels in `SIMULATION_INTERVALS_MS` order
pub fn speed_labels() -> Vec<String> {
    SIMULATION_INTERVALS_MS
        .iter()
        .map(|ms| format!("{} ms/gen", ms))
        .collect()
}

pub fn brush_labels() -> Vec<String> {
    BRUSH_RADII
        .iter()
        .map(|&r| {
            let side = 2 * r + 1;
            format!("{}x{}", side, side)
        })
        .collect()
}

/// Control panel button actions, in layout order
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonAction {
    Start,
    Stop,
    Step,
    Clear,
    Random,
    Theme,
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<(ButtonAction, Button)> {
    let px = panel_x();
    let half = (PANEL_WIDTH - 6.0) / 2.0;
    let row = |i: usize| 380.0 + i as f32 * (BUTTON_HEIGHT + 8.0);
    vec![
        (ButtonAction::Start, Button::new(px, row(0), half, BUTTON_HEIGHT, "Start")),
        (ButtonAction::Stop, Button::new(px + half + 6.0, row(0), half, BUTTON_HEIGHT, "Stop")),
        (ButtonAction::Step, Button::new(px, row(1), half, BUTTON_HEIGHT, "Step")),
        (ButtonAction::Clear, Button::new(px + half + 6.0, row(1), half, BUTTON_HEIGHT, "Clear")),
        (ButtonAction::Random, Button::new(px, row(2), half, BUTTON_HEIGHT, "Random")),
        (ButtonAction::Theme, Button::new(px + half + 6.0, row(2), half, BUTTON_HEIGHT, "Theme")),
    ]
}
