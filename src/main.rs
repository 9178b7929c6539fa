use log::{error, info, warn};
use macroquad::prelude::*;

use life_engine::{
    GameConfig, Router, Screen, Viewport,
    input::{self, GameAction},
    rendering,
    ui::{self, StartMenu},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Optional YAML config path as the first argument
fn load_config() -> GameConfig {
    let Some(path) = std::env::args().nth(1) else {
        return GameConfig::default();
    };
    match GameConfig::from_file(&path) {
        Ok(config) => {
            info!("Loaded config from {path}");
            config
        }
        Err(e) => {
            error!("Could not load {path}: {e}; using defaults");
            GameConfig::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let base_config = load_config();
    let mut router = Router::new();
    let mut menu = StartMenu::default();

    loop {
        let mouse_pos = mouse_position();
        clear_background(BLACK);

        match router.screen() {
            Screen::Start => {
                let buttons = ui::start_buttons(&menu);
                if input::process_start_clicks(&mut menu, &buttons, mouse_pos) {
                    if let Err(e) = router.start_game(&menu.to_config(&base_config)) {
                        warn!("Could not start game: {e}");
                    }
                }
                rendering::draw_start_screen(&menu, &buttons, mouse_pos);
            }
            Screen::Game => {
                let actions = match router.session() {
                    Some(session) => input::game_actions(&ui::game_buttons(session), mouse_pos),
                    None => vec![GameAction::Back],
                };
                for action in actions {
                    input::apply_game_action(&mut router, action);
                }

                if let Some(session) = router.session_mut() {
                    let (size_x, size_y) = session.engine.dimensions();
                    let viewport = Viewport::fit(ui::grid_area_width(), ui::grid_area_height(), size_x, size_y);
                    input::handle_grid_click(session, &viewport, mouse_pos);
                    session.tick(get_frame_time());

                    rendering::draw_grid(&session.engine, &viewport);
                    rendering::draw_game_panel(session, &ui::game_buttons(session), mouse_pos);
                }
            }
        }

        next_frame().await;
    }
}
