use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::{InputSource, OutputSink};

/// Input source replaying a fixed list of lines. Every prompt it is asked
/// with is recorded; running out of lines is an error.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("scripted input exhausted at prompt {:?}", prompt))
    }
}

/// Output sink keeping every written line.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    lines: Vec<String>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether some written line equals `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l == text)
    }

    /// How many written lines equal `text`.
    pub fn count(&self, text: &str) -> usize {
        self.lines.iter().filter(|l| *l == text).count()
    }
}

impl OutputSink for RecordingOutput {
    fn write_line(&mut self, text: &str) -> anyhow::Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }
}
