use macroquad::prelude::*;

use crate::rendering::Palette;

const FONT_SIZE: f32 = 16.0;

/// Dropdown selector used for draw mode, prefab, speed and brush size
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 26.0,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Whether `point` is over the header or, when open, the item list
    pub fn contains(&self, point: (f32, f32)) -> bool {
        self.row_contains(point, 0) || (self.is_open && (1..=self.items.len()).any(|i| self.row_contains(point, i)))
    }

    /// Row 0 is the header, row i + 1 is item i
    fn row_contains(&self, point: (f32, f32), row: usize) -> bool {
        let top = self.y + row as f32 * self.height;
        point.0 >= self.x && point.0 <= self.x + self.width && point.1 >= top && point.1 <= top + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32), palette: &Palette) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, palette.muted_text);

        let header = if self.row_contains(mouse_pos, 0) { palette.control_hover } else { palette.control };
        draw_rectangle(self.x, self.y, self.width, self.height, header);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 1.5, palette.text);

        let current = self.items.get(self.selected).map_or("(none)", String::as_str);
        draw_text(&fit_text(current, self.width - 30.0), self.x + 5.0, self.y + 18.0, FONT_SIZE, palette.text);
        draw_text("v", self.x + self.width - 16.0, self.y + 18.0, FONT_SIZE, palette.text);

        if !self.is_open {
            return;
        }
        let menu_height = self.items.len() as f32 * self.height;
        draw_rectangle(self.x, self.y + self.height, self.width, menu_height, palette.panel);
        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.y + (i + 1) as f32 * self.height;
            let color = if self.row_contains(mouse_pos, i + 1) {
                palette.control_hover
            } else if i == self.selected {
                palette.control
            } else {
                palette.panel
            };
            draw_rectangle(self.x, item_y, self.width, self.height, color);
            draw_text(&fit_text(item, self.width - 10.0), self.x + 5.0, item_y + 18.0, FONT_SIZE, palette.text);
        }
        draw_rectangle_lines(self.x, self.y + self.height, self.width, menu_height, 1.5, palette.text);
    }

    /// Handle clicks; returns true if the selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) || self.items.is_empty() {
            return false;
        }
        if self.row_contains(mouse_pos, 0) {
            self.is_open = !self.is_open;
            return false;
        }
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        match (1..=self.items.len()).find(|&row| self.row_contains(mouse_pos, row)) {
            Some(row) if row - 1 != self.selected => {
                self.selected = row - 1;
                true
            }
            _ => false,
        }
    }
}

/// Truncate with an ellipsis until the text fits `max_width`
fn fit_text(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_string();
    }
    let mut truncated = text.to_string();
    while !truncated.is_empty() && width(&format!("{}...", truncated)) > max_width {
        truncated.pop();
    }
    format!("{}...", truncated)
}
