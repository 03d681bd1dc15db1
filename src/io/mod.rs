//! Line-based collaborators the game talks to: where input comes from and
//! where output goes.

use alloc::string::String;

/// Blocking source of player input, one line per call.
pub trait InputSource {
    /// Show `prompt` and return the next line, without its line terminator.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String>;
}

/// Destination for game output, one line per call.
pub trait OutputSink {
    fn write_line(&mut self, text: &str) -> anyhow::Result<()>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        (**self).read_line(prompt)
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn write_line(&mut self, text: &str) -> anyhow::Result<()> {
        (**self).write_line(text)
    }
}

#[cfg(feature = "std")]
pub mod console;
pub mod random_walker;
pub mod scripted;

#[cfg(feature = "std")]
pub use console::Console;
pub use random_walker::RandomWalker;
pub use scripted::{RecordingOutput, ScriptedInput};
