//! Fixed game constants and the validated per-game configuration.

use crate::common::FieldError;

/// Smallest accepted number of rows or columns.
pub const MIN_DIMENSION: usize = 4;
/// Largest accepted number of rows or columns.
pub const MAX_DIMENSION: usize = 20;
/// Chance for each generated cell to be a hole.
pub const DEFAULT_HOLE_PROBABILITY: f64 = 0.2;

pub const GRASS_GLYPH: char = '░';
pub const HOLE_GLYPH: char = 'O';
pub const CARROT_GLYPH: char = '^';
pub const PLAYER_GLYPH: char = '*';

pub const WIN_MESSAGE: &str = "You've found the carrot. You've won the game!";
pub const LOST_MESSAGE: &str = "You've dropped into the hole. You've lost the game.";
pub const OUT_MESSAGE: &str = "You've moved out of the filed. You've lost the game.";
pub const QUIT_MESSAGE: &str = "Thank you. You quit the game";

pub const WELCOME_MESSAGE: &str = "Welcome to Find The Carrot Game!";
pub const WELCOME_RULE: &str = "**************************************************";
pub const MOVE_MENU: &str = "(u)p, (d)own, (l)eft, (r)ight, (q)uit";
pub const MOVE_PROMPT: &str = "Which way: ";
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move.";

/// Returns `true` when `value` is an acceptable row or column count.
pub fn dimension_in_range(value: usize) -> bool {
    (MIN_DIMENSION..=MAX_DIMENSION).contains(&value)
}

/// Settings for a single game. Dimensions left as `None` are asked for
/// interactively during setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub hole_probability: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: None,
            cols: None,
            hole_probability: DEFAULT_HOLE_PROBABILITY,
        }
    }
}

impl GameConfig {
    /// Check preset dimensions and the hole probability.
    pub fn validate(&self) -> Result<(), FieldError> {
        for value in [self.rows, self.cols].into_iter().flatten() {
            if !dimension_in_range(value) {
                return Err(FieldError::InvalidDimension(value));
            }
        }
        if !(0.0..=1.0).contains(&self.hole_probability) {
            return Err(FieldError::InvalidProbability);
        }
        Ok(())
    }
}
