use macroquad::prelude::*;

use crate::application::{GameSession, Viewport};
use crate::domain::GameEngine;
use crate::ui::{panel_x, Button, StartMenu, PANEL_WIDTH};

const ALIVE: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const LABEL: Color = Color::new(0.7, 0.7, 0.7, 1.0);

/// Draw every cell of the engine's grid
pub fn draw_grid(engine: &GameEngine, viewport: &Viewport) {
    let (size_x, _) = engine.dimensions();
    let size = viewport.cell_size;
    let draw_lines = size >= 4.0;

    for cell in engine.cells() {
        let (sx, sy) = viewport.cell_to_screen(cell.pos_x(size_x), cell.pos_y(size_x));
        let color = if cell.is_alive() { ALIVE } else { DEAD };
        draw_rectangle(sx, sy, size, size, color);
        if draw_lines {
            draw_rectangle_lines(sx, sy, size, size, 1.0, GRID_LINE);
        }
    }
}

/// Draw the side panel of the game screen
pub fn draw_game_panel(session: &GameSession, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let engine = &session.engine;
    let (w, h) = engine.dimensions();
    let status = match (engine.is_running(), engine.is_stable()) {
        (true, _) => "Running",
        (false, true) => "Stable",
        (false, false) => "Paused",
    };

    let mut lines = vec![
        format!("Grid: {w}x{h}"),
        format!("Rule: {}", engine.rule_name()),
        format!("Generation: {}", engine.generation()),
        format!("Alive: {}", engine.alive_cells_count()),
        format!("Speed: {:.0} gen/s", session.updates_per_second),
        format!("Status: {status}"),
        format!("God mode: {}", if engine.is_god_mode() { "on" } else { "off" }),
        format!("Pattern: {}", session.selected_pattern().name),
        format!("  {}", session.selected_pattern().description),
    ];
    if let Some(step) = session.last_step {
        lines.push(format!("Last: +{} -{}", step.births, step.deaths));
    }

    let top = 20.0 + buttons.len() as f32 * 50.0 + 20.0;
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, px + 8.0, top + i as f32 * 20.0, 18.0, LABEL);
    }

    let help = [
        "Space: play/pause",
        "N: step  G: god mode",
        "Click: toggle cell",
        "Right click: stamp  P: pattern",
        "Esc: back",
    ];
    let bottom = screen_height() - help.len() as f32 * 15.0;
    for (i, line) in help.iter().enumerate() {
        draw_text(line, px + 8.0, bottom + i as f32 * 15.0, 14.0, GRAY);
    }
}

/// Draw the start screen
pub fn draw_start_screen(menu: &StartMenu, buttons: &[Button], mouse_pos: (f32, f32)) {
    let title = "Conway's Game of Life";
    let size = measure_text(title, None, 48, 1.0);
    draw_text(title, (screen_width() - size.width) / 2.0, 80.0, 48.0, ALIVE);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let hint = format!("size #{}  density #{}  (Enter to start)", menu.size + 1, menu.density + 1);
    let size = measure_text(&hint, None, 18, 1.0);
    draw_text(&hint, (screen_width() - size.width) / 2.0, screen_height() - 30.0, 18.0, LABEL);
}
