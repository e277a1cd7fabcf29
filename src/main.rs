use std::sync::Arc;

use macroquad::prelude::*;
use life_editor::{
    DrawMode, Editor, EditorConfig, Pattern,
    input, library,
    rendering::{self, Palette},
    ui::{self, BRUSH_RADII, Dropdown},
};

/// Pattern library looked up next to the working directory
const LIBRARY_PATH: &str = "prefabs.json";

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life Editor".to_owned(),
        window_width: 1100,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = EditorConfig::default();
    let editor = Editor::new(config);

    let patterns: Vec<Arc<Pattern>> = library::catalog_or_presets(LIBRARY_PATH)
        .into_iter()
        .map(Arc::new)
        .collect();

    let px = ui::panel_x();
    let mut mode_dropdown = Dropdown::new(px, 20.0, ui::PANEL_WIDTH, "Draw mode", vec!["Brush".into(), "Prefab".into()]);
    let prefab_items = patterns.iter().map(|p| format!("{} ({})", p.name(), p.group())).collect();
    let mut prefab_dropdown = Dropdown::new(px, 75.0, ui::PANEL_WIDTH, "Prefab", prefab_items);
    let mut brush_dropdown = Dropdown::new(px, 130.0, ui::PANEL_WIDTH, "Brush", ui::brush_labels());
    let mut speed_dropdown = Dropdown::new(px, 185.0, ui::PANEL_WIDTH, "Speed", ui::speed_labels());
    speed_dropdown.set_selected(config.interval_step);

    let mut viewport = (0.0, 0.0);

    loop {
        let mouse_pos = mouse_position();
        let now = get_time();

        let area = (ui::grid_area_width(), ui::grid_area_height());
        if area != viewport {
            editor.resize_viewport(area.0, area.1);
            viewport = area;
        }

        let px = ui::panel_x();
        mode_dropdown.set_position(px, 20.0);
        prefab_dropdown.set_position(px, 75.0);
        brush_dropdown.set_position(px, 130.0);
        speed_dropdown.set_position(px, 185.0);
        let buttons = ui::create_buttons();

        // Only one dropdown open at a time. The open one sees the click
        // first so its menu shadows the headers underneath.
        let mut dropdowns = [&mut mode_dropdown, &mut prefab_dropdown, &mut brush_dropdown, &mut speed_dropdown];
        let mut changed = [false; 4];
        let open = dropdowns.iter().position(|d| d.is_open());
        let order = open.into_iter().chain((0..dropdowns.len()).filter(|&i| Some(i) != open));
        for i in order {
            let hit = dropdowns[i].contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left);
            changed[i] = dropdowns[i].update(mouse_pos);
            if dropdowns[i].is_open() {
                for (j, other) in dropdowns.iter_mut().enumerate() {
                    if j != i {
                        other.close();
                    }
                }
            }
            if hit {
                break;
            }
        }
        let over_dropdown = dropdowns.iter().any(|d| d.contains(mouse_pos));

        if changed[0] {
            let mode = if mode_dropdown.selected() == 1 { DrawMode::Prefab } else { DrawMode::Brush };
            editor.set_draw_mode(mode);
        }
        let wants_prefab = changed[0] && mode_dropdown.selected() == 1 && editor.selected_prefab().is_none();
        if changed[1] || wants_prefab {
            if let Some(pattern) = patterns.get(prefab_dropdown.selected()) {
                editor.select_prefab(Arc::clone(pattern));
            }
        }
        if changed[2] {
            editor.set_brush_radius(BRUSH_RADII[brush_dropdown.selected()]);
        }
        if changed[3] {
            editor.set_interval_step(speed_dropdown.selected());
        }

        let clicked = input::process_button_clicks(&editor, &buttons, mouse_pos);
        input::handle_zoom(&editor, now);
        input::handle_pointer(&editor, mouse_pos, over_dropdown || clicked);
        input::process_keyboard_input(&editor);

        // Keep the dropdowns in sync with keyboard shortcuts
        let config = editor.config();
        speed_dropdown.set_selected(config.interval_step);
        if let Some(index) = BRUSH_RADII.iter().position(|&r| r == config.brush_radius) {
            brush_dropdown.set_selected(index);
        }
        mode_dropdown.set_selected(if config.draw_mode == DrawMode::Prefab { 1 } else { 0 });

        editor.tick(get_frame_time());

        let palette = Palette::for_theme(config.theme);
        clear_background(palette.background);
        let hovered = editor.cell_at(mouse_pos).filter(|_| mouse_pos.0 < ui::grid_area_width());
        let prefab = editor.selected_prefab().filter(|_| config.draw_mode == DrawMode::Prefab);
        editor.with_grid(|view| {
            rendering::draw_grid(view, &palette);
            if let (Some(pattern), Some(anchor)) = (&prefab, hovered) {
                rendering::draw_prefab_preview(pattern, view, anchor, &palette);
            }
        });
        rendering::draw_controls(
            &editor,
            &palette,
            &buttons,
            &[&mode_dropdown, &prefab_dropdown, &brush_dropdown, &speed_dropdown],
            mouse_pos,
        );

        next_frame().await;
    }
}
