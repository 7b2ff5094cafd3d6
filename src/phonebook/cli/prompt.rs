use std::io::{self, BufRead, Write};

/// What came back from a prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Answer<T> {
    Given(T),
    /// The input was unusable and a message has already been shown.
    Rejected,
    /// End of input: the session is over.
    Closed,
}

/// Line-oriented console: prompts on `out`, answers from `input`.
///
/// Generic so tests can drive a menu with a byte slice.
pub struct Console<R, W> {
    input: R,
    out: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `interactive` enables screen clearing; leave it off for pipes and tests.
    pub fn new(input: R, out: W, interactive: bool) -> Self {
        Self {
            input,
            out,
            interactive,
        }
    }

    /// Prints `label` and reads one trimmed line; `None` at end of input.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Waits for Enter. Returns `false` at end of input.
    pub fn pause(&mut self) -> io::Result<bool> {
        Ok(self.ask("Press Enter to continue...")?.is_some())
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.interactive {
            console::Term::stdout().clear_screen()?;
        }
        Ok(())
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}
