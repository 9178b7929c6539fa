//! The simulation engine: owns the grid, the alive-cell counter and the
//! running / god-mode flags, and advances generations.
//!
//! All mutation goes through `&mut self`, so a manual edit can never
//! interleave with a generation step.

use log::{debug, info, trace};

use super::rules::default_rule;
use super::{Cell, Grid, LivenessDelta, Pattern, Rule, Seed};
use crate::error::{LifeError, Result};

/// Why a manual edit left the grid untouched
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IgnoreReason {
    GodModeOff,
    /// Edits are refused while the simulation auto-steps
    Running,
}

/// Result of a manual edit request
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditOutcome {
    /// A single cell flipped; `alive` is its new state
    Toggled { index: usize, alive: bool },
    /// A pattern was stamped; `revived` counts cells that were dead before
    Placed { revived: usize },
    Ignored(IgnoreReason),
}

impl EditOutcome {
    pub const fn is_applied(&self) -> bool {
        !matches!(self, EditOutcome::Ignored(_))
    }
}

/// Summary of one generation step
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StepReport {
    pub births: usize,
    pub deaths: usize,
    pub alive: usize,
}

impl StepReport {
    /// Nothing changed, so every further step is identical
    pub const fn is_still(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// Owns the grid and keeps `alive_cells_count` equal to the number of alive cells.
/// The counter is only moved by the engine's own mutations:
///
/// ```compile_fail
/// use life_engine::{Cell, GameEngine, Seed};
///
/// let mut engine = GameEngine::new(3, 3, &Seed::Empty).unwrap();
/// engine.change_alive_cells_number(Cell::new(0, false).revive());
/// ```
pub struct GameEngine {
    grid: Grid,
    rule: Box<dyn Rule>,
    alive_cells_count: usize,
    god_mode: bool,
    running: bool,
    generation: u64,
    stable: bool,
    // Next-generation liveness, reused between steps
    scratch: Vec<bool>,
}

impl GameEngine {
    /// Build an engine over a fresh `size_x` by `size_y` grid.
    /// Starts idle with god mode off and the standard B3/S23 rule.
    pub fn new(size_x: usize, size_y: usize, seed: &Seed) -> Result<Self> {
        let grid = build_grid(size_x, size_y, seed)?;
        let alive_cells_count = grid.count_alive();
        info!("Engine built: {size_x}x{size_y}, {alive_cells_count} alive, seed={seed:?}");
        Ok(Self {
            grid,
            rule: default_rule(),
            alive_cells_count,
            god_mode: false,
            running: false,
            generation: 0,
            stable: false,
            scratch: Vec::new(),
        })
    }

    /// Replace the rule (builder pattern)
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.set_rule(rule);
        self
    }

    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        info!("Rule set to {}", rule.name());
        self.rule = rule;
        self.stable = false;
    }

    pub fn rule_name(&self) -> &str {
        self.rule.name()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.grid.cell(index)
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        self.grid.cell_at(x, y)
    }

    /// Indices of all alive cells in ascending order
    pub fn alive_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.grid.cells().iter().filter(|c| c.is_alive()).map(Cell::index)
    }

    pub const fn alive_cells_count(&self) -> usize {
        self.alive_cells_count
    }

    /// Full recount, independent of the tracked counter
    pub fn count_alive(&self) -> usize {
        self.grid.count_alive()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// True once a step has produced no change and nothing was edited since
    pub const fn is_stable(&self) -> bool {
        self.stable
    }

    pub const fn is_god_mode(&self) -> bool {
        self.god_mode
    }

    pub fn set_god_mode(&mut self, god_mode: bool) {
        if self.god_mode != god_mode {
            debug!("God mode {}", if god_mode { "on" } else { "off" });
        }
        self.god_mode = god_mode;
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            info!("Simulation started at generation {}", self.generation);
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            info!("Simulation stopped at generation {}", self.generation);
        }
        self.running = false;
    }

    pub fn toggle_running(&mut self) {
        if self.running { self.stop() } else { self.start() }
    }

    /// Advance one generation.
    /// Every decision reads the pre-step liveness; changes are applied afterwards.
    pub fn step_generation(&mut self) -> StepReport {
        let cells = self.grid.cells();
        let rule = self.rule.as_ref();
        self.scratch.clear();
        self.scratch.extend(
            cells
                .iter()
                .map(|cell| rule.next_state(cell.is_alive(), cell.alive_neighbours(cells))),
        );

        let mut report = StepReport::default();
        for (cell, &next) in self.grid.cells_mut().iter_mut().zip(&self.scratch) {
            let delta = if next { cell.revive() } else { cell.kill() };
            match delta.value() {
                1 => report.births += 1,
                -1 => report.deaths += 1,
                _ => {}
            }
        }

        self.alive_cells_count = self.alive_cells_count + report.births - report.deaths;
        debug_assert_eq!(self.alive_cells_count, self.grid.count_alive());
        report.alive = self.alive_cells_count;
        self.generation += 1;
        self.stable = report.is_still();

        trace!(
            "Generation {}: +{} -{} alive={}",
            self.generation, report.births, report.deaths, report.alive
        );
        report
    }

    /// Apply the counter change produced by flipping one of this grid's cells
    pub(crate) fn change_alive_cells_number(&mut self, delta: LivenessDelta) {
        let updated = self.alive_cells_count.checked_add_signed(isize::from(delta.value()));
        debug_assert!(updated.is_some(), "alive counter underflow");
        self.alive_cells_count = updated.unwrap_or(0);
        if !delta.is_unchanged() {
            self.stable = false;
        }
    }

    /// Manual edit of one cell, as triggered by a click on it.
    /// Flips the cell only in god mode while the simulation is idle.
    pub fn toggle_cell(&mut self, index: usize) -> Result<EditOutcome> {
        let len = self.grid.len();
        if index >= len {
            return Err(LifeError::CellOutOfRange { index, len });
        }
        if let Some(reason) = self.edit_blocker() {
            debug!("Edit of cell {index} ignored: {reason:?}");
            return Ok(EditOutcome::Ignored(reason));
        }

        let cell = &mut self.grid.cells_mut()[index];
        let delta = cell.toggle();
        let alive = cell.is_alive();
        self.change_alive_cells_number(delta);
        Ok(EditOutcome::Toggled { index, alive })
    }

    /// Manual edit by (column, row)
    pub fn toggle_cell_at(&mut self, x: usize, y: usize) -> Result<EditOutcome> {
        let index = self.grid.index_of(x, y).ok_or_else(|| {
            LifeError::InvalidArgument(format!("position ({x}, {y}) outside the grid"))
        })?;
        self.toggle_cell(index)
    }

    /// Stamp a pattern with its top-left corner at (x, y), clipped at the edges.
    /// Gated exactly like `toggle_cell`.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) -> Result<EditOutcome> {
        let (size_x, size_y) = self.grid.dimensions();
        if x >= size_x || y >= size_y {
            return Err(LifeError::InvalidArgument(format!(
                "pattern origin ({x}, {y}) outside {size_x}x{size_y} grid"
            )));
        }
        if let Some(reason) = self.edit_blocker() {
            debug!("Placing {} ignored: {reason:?}", pattern.name);
            return Ok(EditOutcome::Ignored(reason));
        }

        let mut revived = 0;
        for index in pattern.indices(size_x, size_y, x, y) {
            let delta = self.grid.cells_mut()[index].revive();
            if !delta.is_unchanged() {
                revived += 1;
            }
            self.change_alive_cells_number(delta);
        }
        debug!("Placed {} at ({x}, {y}): {revived} revived", pattern.name);
        Ok(EditOutcome::Placed { revived })
    }

    fn edit_blocker(&self) -> Option<IgnoreReason> {
        if !self.god_mode {
            Some(IgnoreReason::GodModeOff)
        } else if self.running {
            Some(IgnoreReason::Running)
        } else {
            None
        }
    }

    /// Rebuild the grid from scratch. On error the current grid is kept.
    pub fn reset(&mut self, size_x: usize, size_y: usize, seed: &Seed) -> Result<()> {
        let grid = build_grid(size_x, size_y, seed)?;
        self.alive_cells_count = grid.count_alive();
        self.grid = grid;
        self.after_rebuild();
        info!("Engine reset: {size_x}x{size_y}, {} alive", self.alive_cells_count);
        Ok(())
    }

    /// Change grid dimensions, keeping the liveness of the overlapping region
    pub fn resize(&mut self, size_x: usize, size_y: usize) -> Result<()> {
        self.grid.resize(size_x, size_y)?;
        self.alive_cells_count = self.grid.count_alive();
        self.after_rebuild();
        info!("Grid resized to {size_x}x{size_y}, {} alive", self.alive_cells_count);
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.grid.cells_mut().iter_mut().for_each(|cell| {
            cell.kill();
        });
        self.alive_cells_count = 0;
        self.after_rebuild();
        info!("Grid cleared");
    }

    /// Refill the current grid randomly
    pub fn randomize(&mut self, density: f64, rng_seed: Option<u64>) -> Result<()> {
        let (size_x, size_y) = self.grid.dimensions();
        self.reset(size_x, size_y, &Seed::Random { density, rng_seed })
    }

    fn after_rebuild(&mut self) {
        self.running = false;
        self.generation = 0;
        self.stable = false;
        self.scratch = Vec::new();
    }
}

fn build_grid(size_x: usize, size_y: usize, seed: &Seed) -> Result<Grid> {
    let alive = seed.liveness(size_x, size_y)?;
    Grid::build(size_x, size_y, |i| alive[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::LifeLikeRule;
    use crate::domain::presets;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn engine_with(size_x: usize, size_y: usize, alive: &[usize]) -> GameEngine {
        GameEngine::new(size_x, size_y, &Seed::Cells(alive.to_vec())).unwrap()
    }

    fn alive(engine: &GameEngine) -> Vec<usize> {
        engine.alive_cells().collect()
    }

    fn assert_counter(engine: &GameEngine) {
        assert_eq!(engine.alive_cells_count(), engine.count_alive());
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = engine_with(4, 4, &[1, 2]);
        assert!(!engine.is_running());
        assert!(!engine.is_god_mode());
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.alive_cells_count(), 2);
        assert_eq!(engine.rule_name(), "B3/S23");
    }

    #[test]
    fn test_invalid_sizes_fail() {
        for (x, y) in [(0, 5), (5, 0), (0, 0)] {
            let result = GameEngine::new(x, y, &Seed::Empty);
            assert!(matches!(result, Err(LifeError::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn test_block_is_stable() {
        // 2x2 block at (4,4)..(5,5) on a 10x10 grid
        let block = [44, 45, 54, 55];
        let mut engine = engine_with(10, 10, &block);
        let report = engine.step_generation();
        assert_eq!(alive(&engine), block);
        assert!(report.is_still());
        assert!(engine.is_stable());
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = [43, 44, 45];
        let vertical = [34, 44, 54];
        let mut engine = engine_with(10, 10, &horizontal);

        let report = engine.step_generation();
        assert_eq!(alive(&engine), vertical);
        assert_eq!((report.births, report.deaths, report.alive), (2, 2, 3));

        engine.step_generation();
        assert_eq!(alive(&engine), horizontal);
        assert!(!engine.is_stable());
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut engine = engine_with(5, 5, &[12]);
        engine.step_generation();
        assert_eq!(engine.alive_cells_count(), 0);
        assert_counter(&engine);
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        // centre 12 with four orthogonal neighbours
        let mut engine = engine_with(5, 5, &[7, 11, 12, 13, 17]);
        assert_eq!(engine.cell(12).unwrap().alive_neighbours(engine.cells()), 4);
        engine.step_generation();
        assert!(!engine.cell(12).unwrap().is_alive());
        assert_counter(&engine);
    }

    #[test]
    fn test_corner_block_survives_without_wrap() {
        // Block in the top-left corner; a wrapping grid would disturb it via the far edges
        let mut engine = engine_with(4, 4, &[0, 1, 4, 5, 15]);
        engine.step_generation();
        assert_eq!(alive(&engine), [0, 1, 4, 5]);
    }

    #[test]
    fn test_glider_travels() {
        let mut engine = GameEngine::new(10, 10, &Seed::Pattern { pattern: presets::glider(), x: 1, y: 1 }).unwrap();
        let before: Vec<_> = alive(&engine);
        for _ in 0..4 {
            engine.step_generation();
        }
        // one cell down and right after a full period
        let shifted: Vec<_> = before.iter().map(|i| i + 11).collect();
        assert_eq!(alive(&engine), shifted);
    }

    #[test]
    fn test_god_mode_gating() {
        let mut engine = engine_with(3, 3, &[4]);

        let outcome = engine.toggle_cell(0).unwrap();
        assert_eq!(outcome, EditOutcome::Ignored(IgnoreReason::GodModeOff));
        assert!(!engine.cell(0).unwrap().is_alive());
        assert_eq!(engine.alive_cells_count(), 1);

        engine.set_god_mode(true);
        assert_eq!(engine.toggle_cell(0).unwrap(), EditOutcome::Toggled { index: 0, alive: true });
        assert_eq!(engine.alive_cells_count(), 2);
        assert_eq!(engine.toggle_cell(4).unwrap(), EditOutcome::Toggled { index: 4, alive: false });
        assert_eq!(engine.alive_cells_count(), 1);
        assert_eq!(alive(&engine), [0]);
    }

    #[test]
    fn test_edits_refused_while_running() {
        let mut engine = engine_with(3, 3, &[]);
        engine.set_god_mode(true);
        engine.start();
        let outcome = engine.toggle_cell(4).unwrap();
        assert_eq!(outcome, EditOutcome::Ignored(IgnoreReason::Running));
        assert!(!outcome.is_applied());
        assert_eq!(engine.alive_cells_count(), 0);

        engine.stop();
        assert!(engine.toggle_cell(4).unwrap().is_applied());
        assert_eq!(engine.alive_cells_count(), 1);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut engine = engine_with(3, 3, &[]);
        engine.set_god_mode(true);
        assert!(matches!(
            engine.toggle_cell(9),
            Err(LifeError::CellOutOfRange { index: 9, len: 9 })
        ));
        assert!(matches!(engine.toggle_cell_at(3, 0), Err(LifeError::InvalidArgument(_))));
        assert_eq!(engine.toggle_cell_at(2, 1).unwrap(), EditOutcome::Toggled { index: 5, alive: true });
    }

    #[test]
    fn test_edit_breaks_stability() {
        let mut engine = engine_with(6, 6, &[]);
        engine.step_generation();
        assert!(engine.is_stable());
        engine.set_god_mode(true);
        engine.toggle_cell(0).unwrap();
        assert!(!engine.is_stable());
    }

    #[test]
    fn test_counter_moves_only_with_grid_flips() {
        let mut engine = engine_with(3, 3, &[0, 1, 3, 4]);
        engine.set_god_mode(true);

        // stamping over cells that are already alive flips nothing
        let outcome = engine.place_pattern(&presets::block(), 0, 0).unwrap();
        assert_eq!(outcome, EditOutcome::Placed { revived: 0 });
        assert_eq!(engine.alive_cells_count(), 4);

        // a cell outside the grid changing state leaves the engine alone
        let mut stray = Cell::new(8, false);
        stray.revive();
        assert_eq!(engine.alive_cells_count(), 4);
        assert_counter(&engine);

        engine.toggle_cell(8).unwrap();
        engine.toggle_cell(0).unwrap();
        assert_eq!(engine.alive_cells_count(), 4);
        assert_counter(&engine);
    }

    #[test]
    fn test_place_pattern_counts_only_new_cells() {
        let mut engine = engine_with(6, 6, &[7]);
        assert_eq!(
            engine.place_pattern(&presets::block(), 1, 1).unwrap(),
            EditOutcome::Ignored(IgnoreReason::GodModeOff)
        );

        engine.set_god_mode(true);
        let outcome = engine.place_pattern(&presets::block(), 1, 1).unwrap();
        assert_eq!(outcome, EditOutcome::Placed { revived: 3 });
        assert_eq!(engine.alive_cells_count(), 4);

        // clipped at the bottom-right corner
        let outcome = engine.place_pattern(&presets::block(), 5, 5).unwrap();
        assert_eq!(outcome, EditOutcome::Placed { revived: 1 });
        assert_counter(&engine);

        assert!(engine.place_pattern(&presets::block(), 6, 0).is_err());
    }

    #[test]
    fn test_counter_consistent_over_random_sequences() {
        let mut rng = StdRng::seed_from_u64(7);
        for round in 0..20 {
            let mut engine = GameEngine::new(12, 9, &Seed::Random { density: 0.35, rng_seed: Some(round) }).unwrap();
            engine.set_god_mode(true);
            for _ in 0..60 {
                match rng.random_range(0..4) {
                    0 => {
                        engine.step_generation();
                    }
                    1 => engine.toggle_running(),
                    _ => {
                        let index = rng.random_range(0..engine.cells().len());
                        engine.toggle_cell(index).unwrap();
                    }
                }
                assert_counter(&engine);
            }
        }
    }

    #[test]
    fn test_reset_and_resize() {
        let mut engine = engine_with(4, 4, &[0, 5]);
        engine.start();
        engine.step_generation();

        engine.reset(3, 2, &Seed::Cells(vec![1, 2, 3])).unwrap();
        assert_eq!(engine.dimensions(), (3, 2));
        assert_eq!(engine.alive_cells_count(), 3);
        assert_eq!(engine.generation(), 0);
        assert!(!engine.is_running());

        engine.resize(2, 3).unwrap();
        assert_eq!(alive(&engine), [1, 2]);
        assert_counter(&engine);
        for (i, cell) in engine.cells().iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }

    #[test]
    fn test_failed_reset_keeps_state() {
        let mut engine = engine_with(4, 4, &[0, 5]);
        assert!(engine.reset(0, 4, &Seed::Empty).is_err());
        assert!(engine.reset(4, 4, &Seed::Random { density: 2.0, rng_seed: None }).is_err());
        assert!(engine.resize(4, 0).is_err());
        assert_eq!(engine.dimensions(), (4, 4));
        assert_eq!(alive(&engine), [0, 5]);
    }

    #[test]
    fn test_clear_and_randomize() {
        let mut engine = engine_with(8, 8, &[1, 2, 3]);
        engine.clear();
        assert_eq!(engine.alive_cells_count(), 0);
        assert_counter(&engine);

        engine.randomize(1.0, Some(3)).unwrap();
        assert_eq!(engine.alive_cells_count(), 64);
        assert!(engine.randomize(-1.0, None).is_err());
        assert_eq!(engine.alive_cells_count(), 64);
    }

    #[test]
    fn test_custom_rule() {
        // Seeds (B2/S): two adjacent cells spawn the cells touching both
        let mut engine = engine_with(5, 5, &[11, 12]).with_rule(Box::new(LifeLikeRule::parse("B2/S").unwrap()));
        assert_eq!(engine.rule_name(), "B2/S");
        engine.step_generation();
        assert_eq!(alive(&engine), [6, 7, 16, 17]);
        assert_counter(&engine);
    }
}
