use crate::error::{LifeError, Result};

/// Trait for cellular automaton rules.
/// Decides the next liveness of a cell from its current state
/// and the number of alive neighbours (0..=8).
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &str;

    fn next_state(&self, alive: bool, alive_neighbours: u8) -> bool;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &str {
        "B3/S23"
    }

    fn next_state(&self, alive: bool, alive_neighbours: u8) -> bool {
        matches!((alive, alive_neighbours), (true, 2 | 3) | (false, 3))
    }
}

/// Any outer-totalistic rule written in B/S notation, e.g. `B36/S23` (HighLife)
#[derive(Clone, Debug)]
pub struct LifeLikeRule {
    name: String,
    birth: [bool; 9],
    survival: [bool; 9],
}

impl LifeLikeRule {
    /// Parse `B<digits>/S<digits>`; either part may be empty
    pub fn parse(notation: &str) -> Result<Self> {
        let invalid = || LifeError::InvalidConfiguration(format!("invalid rule {notation:?}"));
        let (b, s) = notation.trim().split_once('/').ok_or_else(invalid)?;
        let b = b.strip_prefix(['B', 'b']).ok_or_else(invalid)?;
        let s = s.strip_prefix(['S', 's']).ok_or_else(invalid)?;

        let digits = |part: &str| -> Result<[bool; 9]> {
            let mut table = [false; 9];
            for ch in part.chars() {
                match ch.to_digit(10) {
                    Some(n) if n <= 8 => table[n as usize] = true,
                    _ => return Err(invalid()),
                }
            }
            Ok(table)
        };

        let birth = digits(b)?;
        let survival = digits(s)?;
        Ok(Self {
            name: format_notation(&birth, &survival),
            birth,
            survival,
        })
    }
}

fn format_notation(birth: &[bool; 9], survival: &[bool; 9]) -> String {
    let digits = |table: &[bool; 9]| -> String {
        (0..9u8).filter(|&n| table[n as usize]).map(|n| char::from(b'0' + n)).collect()
    };
    format!("B{}/S{}", digits(birth), digits(survival))
}

impl Rule for LifeLikeRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_state(&self, alive: bool, alive_neighbours: u8) -> bool {
        let table = if alive { &self.survival } else { &self.birth };
        table.get(alive_neighbours as usize).copied().unwrap_or(false)
    }
}

/// Resolve a rule from B/S notation; B3/S23 maps to `ConwayRule`
pub fn parse_rule(notation: &str) -> Result<Box<dyn Rule>> {
    let rule = LifeLikeRule::parse(notation)?;
    if rule.name() == ConwayRule.name() {
        Ok(Box::new(ConwayRule))
    } else {
        Ok(Box::new(rule))
    }
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}
