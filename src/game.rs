use rand::Rng;

use crate::{
    common::{Direction, GameError, GameState, Move, MoveOutcome, Position, Tile},
    field::Field,
};

/// Core game logic owning the field, the player position and the game state.
pub struct GameEngine {
    field: Field,
    player: Position,
    carrot: Option<Position>,
    state: GameState,
    turns: usize,
}

impl GameEngine {
    /// Create an engine in `Setup` around an already generated field.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            player: Position::ORIGIN,
            carrot: None,
            state: GameState::Setup,
            turns: 0,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn player(&self) -> Position {
        self.player
    }

    /// Carrot position, known once the game has started.
    pub fn carrot(&self) -> Option<Position> {
        self.carrot
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of moves applied so far, quit included.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Put the player on (0, 0), plant the carrot at random and enter `Playing`.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.place_player()?;
        let carrot = self.field.plant_carrot(rng);
        self.begin(carrot);
        Ok(())
    }

    /// Like [`GameEngine::start`] but with the carrot planted at `carrot`.
    pub fn start_with_carrot(&mut self, carrot: Position) -> Result<(), GameError> {
        self.place_player()?;
        self.field.place_carrot(carrot)?;
        self.begin(carrot);
        Ok(())
    }

    fn place_player(&mut self) -> Result<(), GameError> {
        if self.state != GameState::Setup {
            return Err(GameError::AlreadyStarted);
        }
        // a layout may carry a stray player marker; only the origin keeps one
        while let Some(pos) = self.field.find(Tile::Player) {
            self.field.set(pos, Tile::Grass)?;
        }
        self.field.set(Position::ORIGIN, Tile::Player)?;
        self.player = Position::ORIGIN;
        Ok(())
    }

    fn begin(&mut self, carrot: Position) {
        self.carrot = Some(carrot);
        self.state = GameState::Playing;
        log::debug!(
            "game started on {}x{} field, carrot at ({}, {})",
            self.field.rows(),
            self.field.cols(),
            carrot.row,
            carrot.col
        );
    }

    /// Apply one player move.
    ///
    /// The candidate cell is bounds-checked before anything is read from the
    /// grid, then its tile decides the outcome. Only a move onto grass changes
    /// the grid; terminal outcomes leave it as it was.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::NotPlaying(self.state));
        }
        self.turns += 1;
        let outcome = match mv {
            Move::Quit => MoveOutcome::Quit,
            Move::Go(dir) => self.step(dir)?,
        };
        self.state = outcome.state();
        log::trace!("turn {}: {:?} -> {:?}", self.turns, mv, outcome);
        if self.state.is_terminal() {
            log::info!("game over after {} turns: {:?}", self.turns, self.state);
        }
        Ok(outcome)
    }

    fn step(&mut self, dir: Direction) -> Result<MoveOutcome, GameError> {
        let Some(next) = self.field.neighbor(self.player, dir) else {
            return Ok(MoveOutcome::OutOfBounds);
        };
        let outcome = match self.field.get(next)? {
            Tile::Carrot => MoveOutcome::Won,
            Tile::Hole => MoveOutcome::FellInHole,
            Tile::Grass | Tile::Player => {
                self.field.set(self.player, Tile::Grass)?;
                self.field.set(next, Tile::Player)?;
                self.player = next;
                MoveOutcome::Moved(next)
            }
        };
        Ok(outcome)
    }
}
