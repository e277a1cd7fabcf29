use std::time::Duration;

/// Simulation speeds offered by the speed control, slowest first
pub const SIMULATION_INTERVALS_MS: [u64; 6] = [1000, 500, 250, 100, 50, 20];

/// Which shape painting applies
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DrawMode {
    #[default]
    Brush,
    Prefab,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Editor settings. Immutable: every change produces a new value through
/// one of the `with_*` methods, which clamp to valid ranges.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EditorConfig {
    pub cell_size: f32,
    pub min_cell_size: f32,
    pub max_cell_size: f32,
    pub brush_radius: u32,
    pub max_brush_radius: u32,
    pub interval_step: usize,
    pub draw_mode: DrawMode,
    pub theme: Theme,
    /// Quiet period before a zoom change is applied
    pub zoom_debounce: Duration,
    /// Populations above this are stepped with rayon
    pub parallel_threshold: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            min_cell_size: 4.0,
            max_cell_size: 60.0,
            brush_radius: 0,
            max_brush_radius: 10,
            interval_step: 3,
            draw_mode: DrawMode::Brush,
            theme: Theme::Dark,
            zoom_debounce: Duration::from_millis(150),
            parallel_threshold: 20_000,
        }
    }
}

impl EditorConfig {
    /// Clamp a requested cell size into the zoom range. Non-finite values
    /// fall back to the current size.
    pub fn clamp_cell_size(&self, value: f32) -> f32 {
        if value.is_finite() {
            value.clamp(self.min_cell_size, self.max_cell_size)
        } else {
            self.cell_size
        }
    }

    pub fn with_cell_size(self, value: f32) -> Self {
        Self { cell_size: self.clamp_cell_size(value), ..self }
    }

    pub fn with_brush_radius(self, radius: u32) -> Self {
        Self { brush_radius: radius.min(self.max_brush_radius), ..self }
    }

    pub fn with_interval_step(self, index: usize) -> Self {
        Self { interval_step: index.min(SIMULATION_INTERVALS_MS.len() - 1), ..self }
    }

    pub fn with_draw_mode(self, draw_mode: DrawMode) -> Self {
        Self { draw_mode, ..self }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    /// Time between generations for the selected speed step
    pub fn interval(&self) -> Duration {
        Duration::from_millis(SIMULATION_INTERVALS_MS[self.interval_step.min(SIMULATION_INTERVALS_MS.len() - 1)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_step_clamped() {
        let config = EditorConfig::default().with_interval_step(0);
        assert_eq!(config.interval(), Duration::from_millis(1000));
        let config = config.with_interval_step(99);
        assert_eq!(config.interval_step, SIMULATION_INTERVALS_MS.len() - 1);
        assert_eq!(config.interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_cell_size_clamped() {
        let config = EditorConfig::default();
        assert_eq!(config.with_cell_size(1.0).cell_size, 4.0);
        assert_eq!(config.with_cell_size(500.0).cell_size, 60.0);
        assert_eq!(config.with_cell_size(12.5).cell_size, 12.5);
        assert_eq!(config.with_cell_size(f32::NAN).cell_size, config.cell_size);
    }

    #[test]
    fn test_brush_radius_clamped() {
        let config = EditorConfig::default().with_brush_radius(50);
        assert_eq!(config.brush_radius, 10);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
