//! Setup and turn loop: drives a [`GameEngine`] through an input source and
//! an output sink.

use alloc::format;

use rand::Rng;

use crate::{
    common::{GameState, Move},
    config::{
        dimension_in_range, GameConfig, INVALID_MOVE_MESSAGE, MOVE_MENU, MOVE_PROMPT,
        WELCOME_MESSAGE, WELCOME_RULE,
    },
    field::Field,
    game::GameEngine,
    io::{InputSource, OutputSink},
};

/// Which field dimension is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Cols,
}

impl Axis {
    pub fn name(self) -> &'static str {
        match self {
            Axis::Rows => "rows",
            Axis::Cols => "cols",
        }
    }
}

/// Parse a dimension answer. Accepts integers from 4 to 20 inclusive.
pub fn parse_dimension(input: &str) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| dimension_in_range(n))
}

/// Ask for a dimension until a valid one is given.
pub fn select_dimension<I, O>(input: &mut I, output: &mut O, axis: Axis) -> anyhow::Result<usize>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
{
    let prompt = format!(
        "Please enter the number of {} between 4 - 20 for the field: ",
        axis.name()
    );
    loop {
        let line = input.read_line(&prompt)?;
        match parse_dimension(&line) {
            Some(n) => return Ok(n),
            None => {
                log::debug!("rejected {} selection {:?}", axis.name(), line);
                output.write_line(&format!(
                    "Invalid {} selection, please try again.",
                    axis.name()
                ))?;
            }
        }
    }
}

/// A game in progress together with the collaborators it talks to.
pub struct Session<I, O> {
    engine: GameEngine,
    input: I,
    output: O,
}

impl<I: InputSource, O: OutputSink> Session<I, O> {
    /// Wrap an engine. It has to be started before [`Session::run`].
    pub fn new(engine: GameEngine, input: I, output: O) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Full setup: choose missing dimensions, generate the field, print the
    /// welcome banner and start the game.
    pub fn configure<R: Rng>(
        config: &GameConfig,
        rng: &mut R,
        mut input: I,
        mut output: O,
    ) -> anyhow::Result<Self> {
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        let rows = match config.rows {
            Some(rows) => rows,
            None => select_dimension(&mut input, &mut output, Axis::Rows)?,
        };
        let cols = match config.cols {
            Some(cols) => cols,
            None => select_dimension(&mut input, &mut output, Axis::Cols)?,
        };
        let field = Field::generate(rows, cols, config.hole_probability, rng)
            .map_err(|e| anyhow::anyhow!(e))?;

        output.write_line(WELCOME_MESSAGE)?;
        output.write_line(WELCOME_RULE)?;

        let mut engine = GameEngine::new(field);
        engine.start(rng).map_err(|e| anyhow::anyhow!(e))?;
        Ok(Self::new(engine, input, output))
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_parts(self) -> (GameEngine, I, O) {
        (self.engine, self.input, self.output)
    }

    /// Play one turn: show the field and menu, read a move and apply it.
    /// Unrecognized input is reported and leaves the game untouched.
    pub fn turn(&mut self) -> anyhow::Result<GameState> {
        for line in self.engine.field().render() {
            self.output.write_line(&line)?;
        }
        self.output.write_line(MOVE_MENU)?;
        let line = self.input.read_line(MOVE_PROMPT)?;

        let Some(mv) = Move::parse(&line) else {
            self.output.write_line(INVALID_MOVE_MESSAGE)?;
            return Ok(self.engine.state());
        };
        if let Move::Go(dir) = mv {
            self.output.write_line(dir.acknowledgement())?;
        }
        let outcome = self
            .engine
            .apply_move(mv)
            .map_err(|e| anyhow::anyhow!(e))?;
        if let Some(message) = outcome.message() {
            self.output.write_line(message)?;
        }
        Ok(self.engine.state())
    }

    /// Play turns until the game reaches a terminal state.
    pub fn run(&mut self) -> anyhow::Result<GameState> {
        if self.engine.state() == GameState::Setup {
            anyhow::bail!("game has not been started");
        }
        while !self.engine.state().is_terminal() {
            self.turn()?;
        }
        Ok(self.engine.state())
    }
}
