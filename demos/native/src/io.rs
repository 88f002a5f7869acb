//! Line console for native demos

use std::io::{self, Write};

/// Blocking line output, the only console facility the demos need.
pub trait Console {
    /// Print one line, terminated by a newline.
    fn print_line(&mut self, line: &str) -> io::Result<()>;
}

// =============================================================================
// Console Implementation
// =============================================================================

/// Console writing to stdout, flushed after every line.
pub struct StdoutConsole {
    stdout: io::Stdout,
}

impl StdoutConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdoutConsole {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        let mut handle = self.stdout.lock();
        writeln!(handle, "{}", line)?;
        handle.flush()
    }
}
