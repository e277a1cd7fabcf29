use macroquad::prelude::*;

use crate::rendering::Palette;

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
        }
    }

    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.x + self.width
            && point.1 >= self.y
            && point.1 <= self.y + self.height
    }

    /// Draw with hover effect; `active` marks a latched state (e.g. running)
    pub fn draw(&self, mouse_pos: (f32, f32), palette: &Palette, active: bool) {
        let color = if active {
            palette.accent
        } else if self.contains(mouse_pos) {
            palette.control_hover
        } else {
            palette.control
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 1.5, palette.text);

        let text_size = measure_text(&self.text, None, 18, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            palette.text,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let b = Button::new(10.0, 20.0, 100.0, 30.0, "Start");
        assert!(b.contains((10.0, 20.0)));
        assert!(b.contains((110.0, 50.0)));
        assert!(!b.contains((9.9, 25.0)));
        assert!(!b.contains((50.0, 50.1)));
    }
}
