//! Line-oriented console protocol
//!
//! Every interaction follows the same shape: print the message on its own
//! line, print the `>>> ` marker, read exactly one line as the answer. The
//! marker always means "your turn", whether the question came from a menu or
//! a field prompt.

use std::io::{self, BufRead, Write};

use crate::error::{CirculateError, CirculateResult};

/// Marker printed before every read
const PROMPT_MARKER: &str = ">>> ";

/// A line-oriented console over any reader/writer pair
///
/// Production code wraps process stdin/stdout; tests drive the same code
/// with in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one message line
    pub fn say(&mut self, message: &str) -> CirculateResult<()> {
        writeln!(self.output, "{}", message)
            .map_err(|e| CirculateError::Io(format!("Failed to write to console: {}", e)))
    }

    /// Print a message line, then the marker, then read the answer line
    pub fn prompt(&mut self, message: &str) -> CirculateResult<String> {
        self.say(message)?;
        self.read()
    }

    /// Print the marker and read one line
    ///
    /// Only the trailing line break is stripped; the rest of the line is
    /// the answer, spaces included.
    pub fn read(&mut self) -> CirculateResult<String> {
        write!(self.output, "{}", PROMPT_MARKER)
            .map_err(|e| CirculateError::Io(format!("Failed to write to console: {}", e)))?;
        self.output
            .flush()
            .map_err(|e| CirculateError::Io(format!("Failed to flush console: {}", e)))?;

        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .map_err(|e| CirculateError::Io(format!("Failed to read from console: {}", e)))?;

        if bytes == 0 {
            return Err(CirculateError::Io("console input closed".to_string()));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Consume the console and return the reader and writer
    ///
    /// Lets tests inspect everything that was written.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Console over process stdin/stdout
pub fn stdio() -> Console<io::BufReader<io::Stdin>, io::Stdout> {
    Console::new(io::BufReader::new(io::stdin()), io::stdout())
}
