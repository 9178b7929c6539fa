use log::warn;
use macroquad::prelude::*;

use crate::application::{GameSession, Router, Screen, Viewport};
use crate::domain::EditOutcome;
use crate::ui::{Button, StartMenu, DENSITIES, GRID_SIZES};

/// Everything the game screen can be asked to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameAction {
    ToggleRunning,
    Step,
    ToggleGodMode,
    Clear,
    Randomize,
    NextPattern,
    Back,
    SpeedUp,
    SlowDown,
}

impl GameAction {
    /// Actions bound to the panel buttons, in button order
    pub const BUTTONS: [GameAction; 7] = [
        GameAction::ToggleRunning,
        GameAction::Step,
        GameAction::ToggleGodMode,
        GameAction::Clear,
        GameAction::Randomize,
        GameAction::NextPattern,
        GameAction::Back,
    ];
}

/// Collect actions from panel clicks and keyboard shortcuts this frame
pub fn game_actions(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<GameAction> {
    let keys = [
        (KeyCode::Space, GameAction::ToggleRunning),
        (KeyCode::N, GameAction::Step),
        (KeyCode::G, GameAction::ToggleGodMode),
        (KeyCode::C, GameAction::Clear),
        (KeyCode::R, GameAction::Randomize),
        (KeyCode::P, GameAction::NextPattern),
        (KeyCode::Escape, GameAction::Back),
        (KeyCode::Up, GameAction::SpeedUp),
        (KeyCode::Down, GameAction::SlowDown),
    ];

    buttons
        .iter()
        .zip(GameAction::BUTTONS)
        .filter(|(btn, _)| btn.is_clicked(mouse_pos))
        .map(|(_, action)| action)
        .chain(keys.iter().filter(|(key, _)| is_key_pressed(*key)).map(|(_, action)| *action))
        .collect()
}

/// Apply one action to the router and its running game
pub fn apply_game_action(router: &mut Router, action: GameAction) {
    if action == GameAction::Back {
        router.navigate(Screen::Start);
        return;
    }
    let Some(session) = router.session_mut() else {
        return;
    };
    match action {
        GameAction::ToggleRunning => session.toggle_running(),
        GameAction::Step => {
            session.step_once();
        }
        GameAction::ToggleGodMode => {
            let god_mode = !session.engine.is_god_mode();
            session.engine.set_god_mode(god_mode);
        }
        GameAction::Clear => session.clear(),
        GameAction::Randomize => {
            if let Err(e) = session.randomize() {
                warn!("Randomize failed: {e}");
            }
        }
        GameAction::NextPattern => session.next_pattern(),
        GameAction::SpeedUp => session.adjust_speed(1.0),
        GameAction::SlowDown => session.adjust_speed(-1.0),
        GameAction::Back => {}
    }
}

/// Which edit a grid click performs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridEdit {
    Toggle,
    Stamp,
}

/// Left click toggles the cell under the cursor, right click stamps the selected pattern there
pub fn handle_grid_click(session: &mut GameSession, viewport: &Viewport, mouse_pos: (f32, f32)) -> Option<EditOutcome> {
    let edit = if is_mouse_button_pressed(MouseButton::Left) {
        GridEdit::Toggle
    } else if is_mouse_button_pressed(MouseButton::Right) {
        GridEdit::Stamp
    } else {
        return None;
    };
    let (size_x, size_y) = session.engine.dimensions();
    let (x, y) = viewport.screen_to_cell(mouse_pos.0, mouse_pos.1, size_x, size_y)?;
    apply_grid_edit(session, edit, x, y)
}

/// Apply a grid edit at cell (x, y); errors are logged and dropped
pub fn apply_grid_edit(session: &mut GameSession, edit: GridEdit, x: usize, y: usize) -> Option<EditOutcome> {
    let result = match edit {
        GridEdit::Toggle => session.click_cell(x, y),
        GridEdit::Stamp => session.stamp_pattern(x, y),
    };
    match result {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            warn!("Click on ({x}, {y}) rejected: {e}");
            None
        }
    }
}

/// Update the start menu from clicks; true when Start was pressed
pub fn process_start_clicks(menu: &mut StartMenu, buttons: &[Button], mouse_pos: (f32, f32)) -> bool {
    let Some(clicked) = buttons.iter().position(|btn| btn.is_clicked(mouse_pos)) else {
        return is_key_pressed(KeyCode::Enter);
    };
    let sizes = GRID_SIZES.len();
    let densities = DENSITIES.len();
    match clicked {
        i if i < sizes => menu.size = i,
        i if i < sizes + densities => menu.density = i - sizes,
        _ => return true,
    }
    false
}
