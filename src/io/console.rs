#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use super::{InputSource, OutputSink};

/// Terminal collaborator backed by stdin and stdout.
pub struct Console {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl Console {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for Console {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        {
            let mut out = self.stdout.lock();
            out.write_all(prompt.as_bytes())?;
            out.flush()?;
        }
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("input closed");
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

impl OutputSink for Console {
    fn write_line(&mut self, text: &str) -> anyhow::Result<()> {
        let mut out = self.stdout.lock();
        writeln!(out, "{}", text)?;
        Ok(())
    }
}
