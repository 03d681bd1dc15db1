#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod field;
mod game;
pub mod io;
#[cfg(feature = "std")]
mod logging;
mod session;

pub use common::*;
pub use config::*;
pub use field::Field;
pub use game::GameEngine;
pub use io::{InputSource, OutputSink, RandomWalker, RecordingOutput, ScriptedInput};
#[cfg(feature = "std")]
pub use io::Console;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use session::{parse_dimension, select_dimension, Axis, Session};
