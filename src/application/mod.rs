mod clock;
mod debounce;
mod editor;
pub mod config;
pub mod viewport;

pub use clock::SimulationClock;
pub use config::{DrawMode, EditorConfig, SIMULATION_INTERVALS_MS, Theme};
pub use debounce::Debouncer;
pub use editor::{Editor, GridView, StrokeKind, TickOutcome};
