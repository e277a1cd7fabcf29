use macroquad::prelude::*;

use crate::application::{Editor, GridView, Theme};
use crate::domain::{Cell, Pattern, cell_to_pixel_origin};
use crate::ui::{Button, ButtonAction, Dropdown, PANEL_WIDTH, panel_x};

/// Colors for one theme
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: Color,
    pub dead_cell: Color,
    pub live_cell: Color,
    pub grid_line: Color,
    pub center_outline: Color,
    pub panel: Color,
    pub control: Color,
    pub control_hover: Color,
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::from_rgba(18, 18, 18, 255),
                dead_cell: Color::from_rgba(30, 30, 30, 255),
                live_cell: Color::from_rgba(0, 255, 150, 255),
                grid_line: Color::from_rgba(55, 55, 55, 255),
                center_outline: RED,
                panel: Color::from_rgba(40, 40, 40, 255),
                control: Color::from_rgba(70, 130, 180, 255),
                control_hover: Color::from_rgba(100, 149, 237, 255),
                accent: Color::from_rgba(0, 170, 100, 255),
                text: WHITE,
                muted_text: GRAY,
            },
            Theme::Light => Self {
                background: Color::from_rgba(235, 235, 235, 255),
                dead_cell: WHITE,
                live_cell: Color::from_rgba(20, 20, 20, 255),
                grid_line: Color::from_rgba(200, 200, 200, 255),
                center_outline: RED,
                panel: Color::from_rgba(215, 215, 215, 255),
                control: Color::from_rgba(160, 190, 220, 255),
                control_hover: Color::from_rgba(130, 170, 215, 255),
                accent: Color::from_rgba(90, 190, 130, 255),
                text: BLACK,
                muted_text: DARKGRAY,
            },
        }
    }
}

/// Draw grid lines, live cells and the center-cell outline
pub fn draw_grid(view: &GridView<'_>, palette: &Palette) {
    let Some(dims) = view.dims else {
        return;
    };
    let size = view.cell_size;
    let (ox, oy) = view.canvas_origin();
    let (canvas_w, canvas_h) = dims.canvas_size(size);

    draw_rectangle(ox, oy, canvas_w, canvas_h, palette.dead_cell);

    // Lines are noise once cells get tiny
    if size >= 4.0 {
        for x in 0..=dims.width() {
            let px = ox + x as f32 * size;
            draw_line(px, oy, px, oy + canvas_h, 0.5, palette.grid_line);
        }
        for y in 0..=dims.height() {
            let py = oy + y as f32 * size;
            draw_line(ox, py, ox + canvas_w, py, 0.5, palette.grid_line);
        }
    }

    for cell in view.live.iter() {
        let (px, py) = cell_to_pixel_origin(cell, size);
        draw_rectangle(ox + px, oy + py, size, size, palette.live_cell);
    }

    let (cx, cy) = cell_to_pixel_origin(dims.center(), size);
    draw_rectangle_lines(ox + cx, oy + cy, size, size, 1.0, palette.center_outline);
}

/// Ghost of a prefab anchored (top-left) at the hovered cell
pub fn draw_prefab_preview(pattern: &Pattern, view: &GridView<'_>, anchor: Cell, palette: &Palette) {
    let Some(dims) = view.dims else {
        return;
    };
    let size = view.cell_size;
    let (ox, oy) = view.canvas_origin();
    let ghost = Color::new(palette.live_cell.r, palette.live_cell.g, palette.live_cell.b, 0.45);

    for &offset in pattern.offsets() {
        let cell = anchor + offset;
        if dims.contains(cell) {
            let (px, py) = cell_to_pixel_origin(cell, size);
            draw_rectangle(ox + px, oy + py, size, size, ghost);
        }
    }

    let (bx, by) = cell_to_pixel_origin(anchor, size);
    draw_rectangle_lines(
        ox + bx,
        oy + by,
        pattern.width() as f32 * size,
        pattern.height() as f32 * size,
        2.0,
        Color::from_rgba(255, 200, 0, 180),
    );
}

/// Draw the control panel with buttons, dropdowns, and status
pub fn draw_controls(
    editor: &Editor,
    palette: &Palette,
    buttons: &[(ButtonAction, Button)],
    dropdowns: &[&Dropdown],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px - 10.0, 0.0, PANEL_WIDTH + 10.0, screen_height(), palette.panel);

    let running = editor.is_running();
    for (action, button) in buttons {
        let active = matches!(action, ButtonAction::Start) && running;
        button.draw(mouse_pos, palette, active);
    }

    let dims = editor.dimensions();
    let grid_info = dims.map_or_else(|| "Grid: -".to_string(), |d| format!("Grid: {}x{}", d.width(), d.height()));
    let lines = [
        ("Controls:", 14.0, palette.text),
        ("LMB: Paint / stamp", 12.0, palette.muted_text),
        ("RMB: Erase", 12.0, palette.muted_text),
        ("Space: Start/Stop  N: Step", 12.0, palette.muted_text),
        ("Wheel / +-: Zoom", 12.0, palette.muted_text),
        ("[ ]: Brush  Up/Down: Speed", 12.0, palette.muted_text),
    ];
    let mut y = 520.0;
    for (text, size, color) in lines {
        draw_text(text, px, y, size, color);
        y += size + 3.0;
    }

    let status = [
        grid_info,
        format!("Cell size: {:.0}px", editor.cell_size()),
        format!("Generation: {}", editor.generation()),
        format!("Population: {}", editor.population()),
        format!("Status: {}", if running { "Running" } else { "Stopped" }),
    ];
    y += 12.0;
    for text in &status {
        draw_text(text, px, y, 14.0, palette.text);
        y += 17.0;
    }

    // Open dropdown last so its menu sits on top
    dropdowns.iter().filter(|d| !d.is_open()).for_each(|d| d.draw(mouse_pos, palette));
    if let Some(open) = dropdowns.iter().find(|d| d.is_open()) {
        open.draw(mouse_pos, palette);
    }
}
