use std::io::Write;
use std::sync::Arc;

use life_editor::{Cell, DrawMode, Editor, EditorConfig, StrokeKind, TickOutcome, library, presets};

/// Viewport with a margin: 215x105 at 10px is a 21x9 grid centered with a
/// (2.5, 7.5) pixel offset.
fn editor() -> Editor {
    let editor = Editor::new(EditorConfig::default().with_cell_size(10.0));
    assert!(editor.resize_viewport(215.0, 105.0));
    editor
}

#[test]
fn test_canvas_offset_is_honoured() {
    let editor = editor();
    let dims = editor.dimensions().unwrap();
    assert_eq!((dims.width(), dims.height()), (21, 9));

    // Inside the left margin: no cell
    assert_eq!(editor.cell_at((1.0, 20.0)), None);
    assert_eq!(editor.cell_at((2.5, 7.5)), Some(Cell::new(0, 0)));
    assert_eq!(editor.cell_at((25.0, 20.0)), Some(Cell::new(2, 1)));
}

#[test]
fn test_glider_stays_inside_the_walls() {
    let editor = editor();
    editor.select_prefab(Arc::new(presets::glider()));
    assert!(editor.place_at(Cell::new(0, 0), StrokeKind::Paint));
    editor.set_interval_step(5);
    editor.start();

    let dims = editor.dimensions().unwrap();
    let mut stepped = 0;
    for _ in 0..200 {
        match editor.tick(1.0) {
            TickOutcome::Extinct => break,
            TickOutcome::Stepped => stepped += 1,
            TickOutcome::Idle => {}
        }
        // Edges are walls: nothing is ever born outside the grid
        assert!(editor.snapshot().iter().all(|c| dims.contains(c)));
    }
    assert!(stepped > 0);
    assert_eq!(editor.is_running(), editor.population() > 0);
}

#[test]
fn test_resize_then_paint_uses_new_layout() {
    let editor = editor();
    editor.set_draw_mode(DrawMode::Brush);
    let center = editor.dimensions().unwrap().center();
    editor.place_at(center, StrokeKind::Paint);

    assert!(editor.resize_viewport(415.0, 315.0));
    let dims = editor.dimensions().unwrap();
    assert_eq!(dims.center(), Cell::new(20, 15));
    assert!(editor.is_alive(dims.center()));
    assert_eq!(editor.population(), 1);
}

#[test]
fn test_library_patterns_stamp() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"prefabs":[{{"name":"Block","group":"Still","grid":[[1,1],[1,1]]}}]}}"#).unwrap();
    let patterns = library::load_library(file.path());
    assert_eq!(patterns.len(), 1);

    let editor = editor();
    editor.select_prefab(Arc::new(patterns[0].clone()));
    editor.place_at(Cell::new(3, 3), StrokeKind::Paint);
    assert_eq!(editor.population(), 4);

    // A block is a still life: stepping changes nothing
    assert_eq!(editor.step_once(), TickOutcome::Stepped);
    assert_eq!(editor.population(), 4);
    assert!(editor.is_alive(Cell::new(4, 4)));
}
