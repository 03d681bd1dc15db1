//! Common types for the carrot field: tiles, positions, moves, game states and errors.

use crate::config::{
    CARROT_GLYPH, GRASS_GLYPH, HOLE_GLYPH, LOST_MESSAGE, MAX_DIMENSION, MIN_DIMENSION,
    OUT_MESSAGE, PLAYER_GLYPH, QUIT_MESSAGE, WIN_MESSAGE,
};

/// Content of a single field cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Grass,
    Hole,
    Carrot,
    Player,
}

impl Tile {
    pub fn glyph(self) -> char {
        match self {
            Tile::Grass => GRASS_GLYPH,
            Tile::Hole => HOLE_GLYPH,
            Tile::Carrot => CARROT_GLYPH,
            Tile::Player => PLAYER_GLYPH,
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            GRASS_GLYPH => Some(Tile::Grass),
            HOLE_GLYPH => Some(Tile::Hole),
            CARROT_GLYPH => Some(Tile::Carrot),
            PLAYER_GLYPH => Some(Tile::Player),
            _ => None,
        }
    }
}

/// A (row, col) cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One step on the grid. Exactly one axis changes per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Line printed before the move is applied.
    pub fn acknowledgement(self) -> &'static str {
        match self {
            Direction::Up => "You move UP.",
            Direction::Down => "You move DOWN.",
            Direction::Left => "You move LEFT.",
            Direction::Right => "You move RIGHT.",
        }
    }

    /// Single-letter command for this direction.
    pub fn key(self) -> &'static str {
        match self {
            Direction::Up => "u",
            Direction::Down => "d",
            Direction::Left => "l",
            Direction::Right => "r",
        }
    }
}

/// A player command for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Go(Direction),
    Quit,
}

impl Move {
    /// Interpret a line of player input. Surrounding whitespace and letter case
    /// are ignored; anything other than `u`, `d`, `l`, `r` or `q` is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "u" => Some(Move::Go(Direction::Up)),
            "d" => Some(Move::Go(Direction::Down)),
            "l" => Some(Move::Go(Direction::Left)),
            "r" => Some(Move::Go(Direction::Right)),
            "q" => Some(Move::Quit),
            _ => None,
        }
    }
}

/// Lifecycle of a game. `Won`, `Lost` and `Quit` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Setup,
    Playing,
    Won,
    Lost,
    Quit,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost | GameState::Quit)
    }
}

/// What a single applied move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player walked onto grass and now stands at the given position.
    Moved(Position),
    Won,
    FellInHole,
    OutOfBounds,
    Quit,
}

impl MoveOutcome {
    /// State the engine is in after this outcome.
    pub fn state(self) -> GameState {
        match self {
            MoveOutcome::Moved(_) => GameState::Playing,
            MoveOutcome::Won => GameState::Won,
            MoveOutcome::FellInHole | MoveOutcome::OutOfBounds => GameState::Lost,
            MoveOutcome::Quit => GameState::Quit,
        }
    }

    /// Final message for terminal outcomes.
    pub fn message(self) -> Option<&'static str> {
        match self {
            MoveOutcome::Moved(_) => None,
            MoveOutcome::Won => Some(WIN_MESSAGE),
            MoveOutcome::FellInHole => Some(LOST_MESSAGE),
            MoveOutcome::OutOfBounds => Some(OUT_MESSAGE),
            MoveOutcome::Quit => Some(QUIT_MESSAGE),
        }
    }
}

/// Errors returned by Field operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Row or column count outside the accepted range.
    InvalidDimension(usize),
    /// Hole probability is not within [0, 1].
    InvalidProbability,
    /// Position lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Carrot position uses row or column 0.
    InvalidCarrotPosition { row: usize, col: usize },
    /// Rows of a textual layout differ in length.
    RaggedRows,
    /// Character that is not a tile glyph.
    UnknownGlyph(char),
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::InvalidDimension(n) => write!(
                f,
                "Dimension {} is outside {} - {}",
                n, MIN_DIMENSION, MAX_DIMENSION
            ),
            FieldError::InvalidProbability => {
                write!(f, "Hole probability must be between 0 and 1")
            }
            FieldError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the field", row, col)
            }
            FieldError::InvalidCarrotPosition { row, col } => write!(
                f,
                "Carrot cannot be planted at ({}, {}): row and column must be at least 1",
                row, col
            ),
            FieldError::RaggedRows => write!(f, "All field rows must have the same length"),
            FieldError::UnknownGlyph(c) => write!(f, "Unknown tile glyph '{}'", c),
        }
    }
}

/// Errors returned by GameEngine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying field error.
    Field(FieldError),
    /// `start` was called on an engine that already left Setup.
    AlreadyStarted,
    /// A move was applied while the game is not being played.
    NotPlaying(GameState),
}

impl From<FieldError> for GameError {
    fn from(err: FieldError) -> Self {
        GameError::Field(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Field(e) => write!(f, "Field error: {}", e),
            GameError::AlreadyStarted => write!(f, "Game has already been started"),
            GameError::NotPlaying(state) => write!(f, "Game is not in play (state {:?})", state),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
