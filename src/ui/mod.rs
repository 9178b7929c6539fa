mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::GameSession;
use crate::config::{GameConfig, GridConfig};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_GAP: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Grid size choices on the start screen
pub const GRID_SIZES: &[(usize, usize, &str)] = &[
    (20, 15, "Small 20x15"),
    (40, 30, "Medium 40x30"),
    (80, 60, "Large 80x60"),
];

/// Initial density choices on the start screen
pub const DENSITIES: &[(f64, &str)] = &[
    (0.0, "Empty"),
    (0.15, "Sparse 15%"),
    (0.3, "Normal 30%"),
    (0.5, "Dense 50%"),
];

/// Selections made on the start screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartMenu {
    pub size: usize,
    pub density: usize,
}

impl Default for StartMenu {
    fn default() -> Self {
        Self { size: 1, density: 2 }
    }
}

impl StartMenu {
    /// Overlay the chosen size and density on a base configuration
    pub fn to_config(self, base: &GameConfig) -> GameConfig {
        let mut config = base.clone();
        if let Some(&(size_x, size_y, _)) = GRID_SIZES.get(self.size) {
            config.grid = GridConfig { size_x, size_y };
        }
        if let Some(&(density, _)) = DENSITIES.get(self.density) {
            config.seed.density = density;
        }
        config
    }
}

/// Start screen buttons: sizes, then densities, then Start (always last)
pub fn start_buttons(menu: &StartMenu) -> Vec<Button> {
    let width = 220.0;
    let x = (screen_width() - width) / 2.0;
    let step = BUTTON_HEIGHT + BUTTON_GAP;
    let mut y = 140.0;
    let mut buttons = Vec::new();

    for (i, (_, _, label)) in GRID_SIZES.iter().enumerate() {
        buttons.push(Button::new(x, y, width, BUTTON_HEIGHT, *label).with_active(menu.size == i));
        y += step;
    }
    y += step / 2.0;
    for (i, (_, label)) in DENSITIES.iter().enumerate() {
        buttons.push(Button::new(x, y, width, BUTTON_HEIGHT, *label).with_active(menu.density == i));
        y += step;
    }
    y += step / 2.0;
    buttons.push(Button::new(x, y, width, BUTTON_HEIGHT, "Start"));
    buttons
}

/// Game screen panel buttons, in `GameAction` button order
pub fn game_buttons(session: &GameSession) -> Vec<Button> {
    let px = panel_x();
    let labels = [
        (if session.engine.is_running() { "Pause" } else { "Play" }, session.engine.is_running()),
        ("Step", false),
        ("God Mode", session.engine.is_god_mode()),
        ("Clear", false),
        ("Random", false),
        ("Pattern", false),
        ("Back", false),
    ];
    labels
        .iter()
        .enumerate()
        .map(|(i, (text, active))| {
            let y = 20.0 + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, *text).with_active(*active)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_matches_default_config() {
        let config = StartMenu::default().to_config(&GameConfig::default());
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_menu_overrides_size_and_density() {
        let menu = StartMenu { size: 2, density: 0 };
        let config = menu.to_config(&GameConfig::default());
        assert_eq!(config.grid, GridConfig { size_x: 80, size_y: 60 });
        assert_eq!(config.seed.density, 0.0);
        assert!(config.validate().is_ok());
    }
}
