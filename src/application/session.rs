use log::debug;

use crate::config::{GameConfig, MAX_UPDATES_PER_SECOND, MIN_UPDATES_PER_SECOND};
use crate::domain::{presets, EditOutcome, GameEngine, Pattern, StepReport};
use crate::error::Result;

/// GameSession drives an engine in real time.
/// The engine only knows how to take one step; the session decides when.
pub struct GameSession {
    pub engine: GameEngine,
    pub updates_per_second: f32,
    update_timer: f32,
    pub last_step: Option<StepReport>,
    /// Density used by `randomize`
    pub density: f64,
    patterns: Vec<Pattern>,
    pattern_index: usize,
}

impl GameSession {
    pub fn new(engine: GameEngine, updates_per_second: f32) -> Self {
        Self {
            engine,
            updates_per_second: updates_per_second.clamp(MIN_UPDATES_PER_SECOND, MAX_UPDATES_PER_SECOND),
            update_timer: 0.0,
            last_step: None,
            density: 0.3,
            patterns: presets::all_patterns(),
            pattern_index: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let mut session = Self::new(config.build_engine()?, config.updates_per_second);
        session.density = config.seed.density;
        Ok(session)
    }

    /// Adjust simulation speed
    pub fn adjust_speed(&mut self, delta: f32) {
        self.updates_per_second = (self.updates_per_second + delta).clamp(MIN_UPDATES_PER_SECOND, MAX_UPDATES_PER_SECOND);
    }

    pub fn toggle_running(&mut self) {
        self.engine.toggle_running();
        self.update_timer = 0.0;
    }

    /// Single manual step, only while paused
    pub fn step_once(&mut self) -> Option<StepReport> {
        if self.engine.is_running() {
            return None;
        }
        let report = self.engine.step_generation();
        self.last_step = Some(report);
        Some(report)
    }

    pub fn click_cell(&mut self, x: usize, y: usize) -> Result<EditOutcome> {
        self.engine.toggle_cell_at(x, y)
    }

    /// Pattern stamped by `stamp_pattern`
    pub fn selected_pattern(&self) -> &Pattern {
        &self.patterns[self.pattern_index]
    }

    /// Cycle to the next preset
    pub fn next_pattern(&mut self) {
        self.pattern_index = (self.pattern_index + 1) % self.patterns.len();
        debug!("Selected pattern {}", self.selected_pattern().name);
    }

    /// Stamp the selected pattern centred on cell (x, y), shifted right or down
    /// where it would start past the top or left edge
    pub fn stamp_pattern(&mut self, x: usize, y: usize) -> Result<EditOutcome> {
        let pattern = &self.patterns[self.pattern_index];
        let origin_x = x.saturating_sub(pattern.width / 2);
        let origin_y = y.saturating_sub(pattern.height / 2);
        self.engine.place_pattern(pattern, origin_x, origin_y)
    }

    pub fn clear(&mut self) {
        self.engine.clear();
        self.last_step = None;
    }

    pub fn randomize(&mut self) -> Result<()> {
        self.engine.randomize(self.density, None)?;
        self.last_step = None;
        Ok(())
    }

    /// Advance the timer by `delta_time` seconds and step once when the
    /// update interval has elapsed. Returns the report of that step.
    pub fn tick(&mut self, delta_time: f32) -> Option<StepReport> {
        if !self.engine.is_running() {
            return None;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;
        if self.update_timer < update_interval {
            return None;
        }
        self.update_timer = 0.0;

        let report = self.engine.step_generation();
        self.last_step = Some(report);
        if self.engine.is_stable() {
            debug!("Board stable at generation {}", self.engine.generation());
            self.engine.stop();
        }
        Some(report)
    }
}
