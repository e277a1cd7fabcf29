// Domain layer - grid simulation and coordinate engine
pub mod domain;

// Application layer - editor state, viewport, scheduling
pub mod application;

// Infrastructure layer - pattern library, UI, rendering, input
pub mod library;
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, GridDimensions, LiveCellStore, Pattern, PlacementShape, presets};
pub use application::{DrawMode, Editor, EditorConfig, StrokeKind, Theme, TickOutcome};
