use log::info;

use super::GameSession;
use crate::config::GameConfig;
use crate::error::Result;

/// The two screens of the app
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Game,
}

/// Router tracks the current screen and owns the running game.
/// The session only lives while the game screen is shown.
#[derive(Default)]
pub struct Router {
    screen: Screen,
    session: Option<GameSession>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.session.as_mut()
    }

    /// Build a fresh game from `config` and show it.
    /// On error the router stays where it was.
    pub fn start_game(&mut self, config: &GameConfig) -> Result<()> {
        let session = GameSession::from_config(config)?;
        self.session = Some(session);
        self.screen = Screen::Game;
        info!("Navigated to game screen ({}x{})", config.grid.size_x, config.grid.size_y);
        Ok(())
    }

    /// Switch screens. Leaving the game tears the engine down;
    /// entering it without a session is refused.
    pub fn navigate(&mut self, screen: Screen) -> bool {
        match screen {
            Screen::Start => {
                if self.session.take().is_some() {
                    info!("Game torn down");
                }
                self.screen = Screen::Start;
                true
            }
            Screen::Game if self.session.is_some() => {
                self.screen = Screen::Game;
                true
            }
            Screen::Game => false,
        }
    }
}
