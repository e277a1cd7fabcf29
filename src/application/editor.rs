use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use macroquad::logging::{debug, info};
use rand::Rng;

use super::{
    clock::SimulationClock,
    config::{DrawMode, EditorConfig, Theme},
    debounce::Debouncer,
    viewport,
};
use crate::domain::{
    Cell, GridDimensions, LiveCellStore, Pattern, PlacementShape, apply_placement, paint_stroke,
    pixel_to_cell, step, step_parallel,
};

/// Which pointer action a stroke performs
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StrokeKind {
    Paint,
    Erase,
}

impl StrokeKind {
    const fn adds(self) -> bool {
        matches!(self, StrokeKind::Paint)
    }
}

/// Result of one scheduler tick
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Not running, or the interval has not elapsed
    Idle,
    Stepped,
    /// The step emptied the grid and the simulation stopped
    Extinct,
}

/// Read-only view of the grid handed to renderers
pub struct GridView<'a> {
    pub dims: Option<GridDimensions>,
    pub cell_size: f32,
    pub viewport: (f32, f32),
    pub live: &'a LiveCellStore,
}

impl GridView<'_> {
    /// Top-left of the drawn grid inside the viewport
    pub fn canvas_origin(&self) -> (f32, f32) {
        self.dims
            .map_or((0.0, 0.0), |dims| dims.canvas_origin(self.viewport, self.cell_size))
    }
}

struct GridState {
    dims: Option<GridDimensions>,
    viewport: (f32, f32),
    cell_size: f32,
    live: LiveCellStore,
    last_cell: Option<Cell>,
    dims_changed: bool,
}

struct EditorState {
    grid: GridState,
    config: EditorConfig,
    prefab: Option<Arc<Pattern>>,
    clock: SimulationClock,
    zoom: Debouncer<f32>,
    running: bool,
    generation: u64,
}

/// Editor orchestrates painting, stamping, resizing and stepping.
///
/// All state sits behind one mutex so a paint, a resize and a generation
/// step never interleave, whichever caller (frame loop, timer, resize
/// callback) triggers them. Every public method takes the lock exactly once.
pub struct Editor {
    state: Mutex<EditorState>,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            state: Mutex::new(EditorState {
                grid: GridState {
                    dims: None,
                    viewport: (0.0, 0.0),
                    cell_size: config.cell_size,
                    live: LiveCellStore::new(),
                    last_cell: None,
                    dims_changed: false,
                },
                clock: SimulationClock::new(config.interval()),
                zoom: Debouncer::new(config.zoom_debounce),
                config,
                prefab: None,
                running: false,
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, EditorState> {
        // Every mutation builds its result before assigning, so the state
        // behind a poisoned lock is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Geometry

    /// The visible area changed. Returns false if the new size is unusable.
    pub fn resize_viewport(&self, width: f32, height: f32) -> bool {
        let mut state = self.lock();
        let cell_size = state.grid.cell_size;
        Self::relayout(&mut state.grid, (width, height), cell_size)
    }

    /// Apply a cell size immediately (zoom without debouncing)
    pub fn set_cell_size(&self, value: f32) -> bool {
        let mut state = self.lock();
        Self::apply_cell_size(&mut state, value)
    }

    /// Queue a zoom change; only the latest request is applied, once
    /// `poll_zoom` sees the quiet period has passed.
    pub fn request_cell_size(&self, value: f32, now: f64) {
        if is_valid_cell_size(value) {
            self.lock().zoom.push(value, now);
        }
    }

    /// Nudge the cell size by `delta`, building on any zoom still pending
    /// so a burst of wheel notches accumulates.
    pub fn zoom_by(&self, delta: f32, now: f64) {
        let mut state = self.lock();
        let base = state.zoom.peek().copied().unwrap_or(state.grid.cell_size);
        let target = state.config.clamp_cell_size(base + delta);
        state.zoom.push(target, now);
    }

    /// Apply a pending zoom whose quiet period has elapsed
    pub fn poll_zoom(&self, now: f64) -> bool {
        let mut state = self.lock();
        match state.zoom.poll(now) {
            Some(value) => Self::apply_cell_size(&mut state, value),
            None => false,
        }
    }

    fn apply_cell_size(state: &mut EditorState, value: f32) -> bool {
        // Rejected before clamping so a bogus size never becomes the minimum
        if !is_valid_cell_size(value) {
            return false;
        }
        let config = state.config.with_cell_size(value);
        if state.grid.cell_size == config.cell_size {
            return false;
        }
        let viewport = state.grid.viewport;
        if state.grid.dims.is_some() && !Self::relayout(&mut state.grid, viewport, config.cell_size) {
            return false;
        }
        // Before the first layout there is nothing to remap yet
        state.grid.cell_size = config.cell_size;
        state.config = config;
        true
    }

    /// Lay the grid out for a viewport and cell size. On invalid geometry
    /// nothing changes and false is returned.
    fn relayout(grid: &mut GridState, viewport: (f32, f32), cell_size: f32) -> bool {
        match viewport::resize(&mut grid.live, grid.dims, viewport, cell_size) {
            Some(dims) => {
                grid.viewport = viewport;
                grid.cell_size = cell_size;
                if grid.dims != Some(dims) {
                    info!("grid {}x{} at cell size {:.1}", dims.width(), dims.height(), cell_size);
                    grid.dims = Some(dims);
                    grid.dims_changed = true;
                }
                // A stroke in progress refers to the old layout
                grid.last_cell = None;
                true
            }
            None => false,
        }
    }

    // Settings

    pub fn set_brush_radius(&self, radius: u32) {
        let mut state = self.lock();
        state.config = state.config.with_brush_radius(radius);
    }

    pub fn set_interval_step(&self, index: usize) {
        let mut state = self.lock();
        state.config = state.config.with_interval_step(index);
        let interval = state.config.interval();
        state.clock.set_interval(interval);
    }

    pub fn set_draw_mode(&self, mode: DrawMode) {
        let mut state = self.lock();
        state.config = state.config.with_draw_mode(mode);
    }

    /// Choose the prefab to stamp and switch to prefab drawing
    pub fn select_prefab(&self, pattern: Arc<Pattern>) {
        let mut state = self.lock();
        debug!("selected prefab {}", pattern.name());
        state.prefab = Some(pattern);
        state.config = state.config.with_draw_mode(DrawMode::Prefab);
    }

    pub fn toggle_theme(&self) -> Theme {
        let mut state = self.lock();
        state.config = state.config.with_theme(state.config.theme.toggled());
        state.config.theme
    }

    // Painting

    /// Pointer pressed at a viewport-local pixel
    pub fn pointer_down(&self, pixel: (f32, f32), kind: StrokeKind) -> bool {
        let mut state = self.lock();
        state.grid.last_cell = None;
        Self::stroke_to(&mut state, pixel, kind)
    }

    /// Pointer moved. `kind` is `None` when no button is held.
    pub fn pointer_move(&self, pixel: (f32, f32), kind: Option<StrokeKind>) -> bool {
        let mut state = self.lock();
        match kind {
            Some(kind) => Self::stroke_to(&mut state, pixel, kind),
            None => {
                state.grid.last_cell = None;
                false
            }
        }
    }

    /// Pointer released: the next sample starts a new stroke
    pub fn pointer_up(&self) {
        self.lock().grid.last_cell = None;
    }

    pub fn pointer_leave(&self) {
        self.pointer_up();
    }

    fn stroke_to(state: &mut EditorState, pixel: (f32, f32), kind: StrokeKind) -> bool {
        let Some(dims) = state.grid.dims else {
            return false;
        };
        let origin = dims.canvas_origin(state.grid.viewport, state.grid.cell_size);
        let local = (pixel.0 - origin.0, pixel.1 - origin.1);
        let Some(cell) = pixel_to_cell(local, state.grid.cell_size, &dims) else {
            state.grid.last_cell = None;
            return false;
        };
        if state.grid.last_cell == Some(cell) {
            return false;
        }
        let shape = Self::current_shape(state);
        let start = state.grid.last_cell;
        state.grid.last_cell = Some(cell);
        paint_stroke(&mut state.grid.live, &shape, start, cell, &dims, kind.adds())
    }

    fn current_shape(state: &EditorState) -> PlacementShape {
        match (state.config.draw_mode, &state.prefab) {
            (DrawMode::Prefab, Some(pattern)) => PlacementShape::Prefab(Arc::clone(pattern)),
            _ => PlacementShape::brush(state.config.brush_radius),
        }
    }

    /// Apply the current shape once at a cell (no stroke interpolation)
    pub fn place_at(&self, anchor: Cell, kind: StrokeKind) -> bool {
        let mut state = self.lock();
        let Some(dims) = state.grid.dims else {
            return false;
        };
        let shape = Self::current_shape(&state);
        apply_placement(&mut state.grid.live, &shape, anchor, &dims, kind.adds())
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.grid.live.clear();
        state.grid.last_cell = None;
        state.generation = 0;
    }

    /// Fill the grid randomly, each cell alive with probability `density`
    pub fn randomize(&self, density: f64) {
        let mut state = self.lock();
        let Some(dims) = state.grid.dims else {
            return;
        };
        let density = if density.is_finite() { density.clamp(0.0, 1.0) } else { 0.0 };
        let mut rng = rand::rng();
        let live: LiveCellStore = dims.cells().filter(|_| rng.random_bool(density)).collect();
        state.grid.live.replace(live);
        state.generation = 0;
    }

    // Simulation

    pub fn start(&self) {
        let mut state = self.lock();
        if !state.running {
            state.running = true;
            state.clock.reset();
        }
    }

    pub fn stop(&self) {
        self.lock().running = false;
    }

    /// Externally driven periodic trigger; `delta_time` in seconds
    pub fn tick(&self, delta_time: f32) -> TickOutcome {
        let mut state = self.lock();
        if !state.running || !state.clock.advance(delta_time) {
            return TickOutcome::Idle;
        }
        Self::advance_generation(&mut state)
    }

    /// Run exactly one generation, running or not
    pub fn step_once(&self) -> TickOutcome {
        let mut state = self.lock();
        Self::advance_generation(&mut state)
    }

    fn advance_generation(state: &mut EditorState) -> TickOutcome {
        let Some(dims) = state.grid.dims else {
            return TickOutcome::Idle;
        };
        let next = if state.grid.live.count() > state.config.parallel_threshold {
            step_parallel(&state.grid.live, &dims)
        } else {
            step(&state.grid.live, &dims)
        };
        state.grid.live.replace(next);
        state.generation += 1;

        if state.grid.live.is_empty() {
            if state.running {
                info!("extinct after {} generations, stopping", state.generation);
            }
            state.running = false;
            return TickOutcome::Extinct;
        }
        TickOutcome::Stepped
    }

    // Queries

    pub fn is_running(&self) -> bool {
        self.lock().running
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    pub fn population(&self) -> usize {
        self.lock().grid.live.count()
    }

    pub fn dimensions(&self) -> Option<GridDimensions> {
        self.lock().grid.dims
    }

    pub fn cell_size(&self) -> f32 {
        self.lock().grid.cell_size
    }

    pub fn config(&self) -> EditorConfig {
        self.lock().config
    }

    pub fn selected_prefab(&self) -> Option<Arc<Pattern>> {
        self.lock().prefab.clone()
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.lock().grid.live.contains(cell)
    }

    /// Cell under a viewport-local pixel, if any
    pub fn cell_at(&self, pixel: (f32, f32)) -> Option<Cell> {
        let state = self.lock();
        let dims = state.grid.dims?;
        let origin = dims.canvas_origin(state.grid.viewport, state.grid.cell_size);
        pixel_to_cell((pixel.0 - origin.0, pixel.1 - origin.1), state.grid.cell_size, &dims)
    }

    /// Has anything visible changed since the last call? Clears the flags.
    pub fn take_changed(&self) -> bool {
        let mut state = self.lock();
        let dims_changed = std::mem::take(&mut state.grid.dims_changed);
        state.grid.live.take_changed() | dims_changed
    }

    /// Copy of the live cells
    pub fn snapshot(&self) -> LiveCellStore {
        self.lock().grid.live.clone()
    }

    /// Run `f` against the grid while holding the lock
    pub fn with_grid<R>(&self, f: impl FnOnce(&GridView<'_>) -> R) -> R {
        let state = self.lock();
        f(&GridView {
            dims: state.grid.dims,
            cell_size: state.grid.cell_size,
            viewport: state.grid.viewport,
            live: &state.grid.live,
        })
    }
}

fn is_valid_cell_size(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
