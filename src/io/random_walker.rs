use alloc::string::{String, ToString};

use rand::Rng;

use super::InputSource;
use crate::common::Direction;

/// Input source that answers every move prompt with a random direction and
/// quits once `max_turns` answers have been given.
pub struct RandomWalker<R: Rng> {
    rng: R,
    max_turns: usize,
    answered: usize,
}

impl<R: Rng> RandomWalker<R> {
    pub fn new(rng: R, max_turns: usize) -> Self {
        Self {
            rng,
            max_turns,
            answered: 0,
        }
    }

    pub fn answered(&self) -> usize {
        self.answered
    }
}

impl<R: Rng> InputSource for RandomWalker<R> {
    fn read_line(&mut self, _prompt: &str) -> anyhow::Result<String> {
        self.answered += 1;
        if self.answered > self.max_turns {
            return Ok("q".to_string());
        }
        let dir = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
        Ok(dir.key().to_string())
    }
}
