//! The line-oriented surface the prompt loop talks to.
//!
//! [`Console`] is the seam between the prompt loop and the outside world.
//! [`TerminalConsole`] drives any reader/writer pair (stdin/stdout in the
//! CLI), and [`ScriptedConsole`] replays canned replies for tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// One reply from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A line of text, without its line terminator
    Text(String),
    /// The user dismissed the prompt without answering
    Canceled,
    /// No more input will ever arrive
    Closed,
}

impl From<Option<String>> for Reply {
    fn from(reply: Option<String>) -> Self {
        match reply {
            Some(text) => Reply::Text(text),
            None => Reply::Canceled,
        }
    }
}

/// Something that can ask the user for a line and show them a warning.
pub trait Console {
    /// Show `message` and block until the user replies.
    fn ask(&mut self, message: &str) -> io::Result<Reply>;

    /// Show a warning line.
    fn warn(&mut self, message: &str) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn ask(&mut self, message: &str) -> io::Result<Reply> {
        (**self).ask(message)
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        (**self).warn(message)
    }
}

/// Console over a buffered reader and a writer.
///
/// The prompt is written followed by a single space, with no newline, so the
/// reply is typed on the same line.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalConsole { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn ask(&mut self, message: &str) -> io::Result<Reply> {
        write!(self.output, "{} ", message)?;
        self.output.flush()?;

        // Raw bytes, so a line that is not UTF-8 becomes a bad reply instead of an I/O error
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(Reply::Closed);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Reply::Text(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }
}

/// Console that replays a fixed list of replies and records what it was shown.
///
/// Once the replies run out every further `ask` returns [`Reply::Closed`].
///
/// ```rust
/// use bookweight_core::prompt::{Console, Reply, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["abc"]).then_cancel();
/// assert_eq!(console.ask("Width?").unwrap(), Reply::Text("abc".to_string()));
/// assert_eq!(console.ask("Width?").unwrap(), Reply::Canceled);
/// assert_eq!(console.ask("Width?").unwrap(), Reply::Closed);
/// assert_eq!(console.prompts.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<Option<String>>,
    /// Every message passed to `ask`, in order
    pub prompts: Vec<String>,
    /// Every message passed to `warn`, in order
    pub warnings: Vec<String>,
}

impl ScriptedConsole {
    /// Script the given text replies.
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            replies: replies.into_iter().map(|r| Some(r.into())).collect(),
            ..ScriptedConsole::default()
        }
    }

    /// Append a text reply.
    pub fn then(mut self, reply: impl Into<String>) -> Self {
        self.replies.push_back(Some(reply.into()));
        self
    }

    /// Append a canceled prompt.
    pub fn then_cancel(mut self) -> Self {
        self.replies.push_back(None);
        self
    }

    /// Replies not yet consumed
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, message: &str) -> io::Result<Reply> {
        self.prompts.push(message.to_string());
        Ok(self.replies.pop_front().map_or(Reply::Closed, Reply::from))
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        self.warnings.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_terminal_reads_lines() {
        let input = Cursor::new("150\r\n\nabc");
        let mut console = TerminalConsole::new(input, Vec::new());

        assert_eq!(console.ask("Width?").unwrap(), Reply::Text("150".to_string()));
        assert_eq!(console.ask("Width?").unwrap(), Reply::Text(String::new()));
        assert_eq!(console.ask("Width?").unwrap(), Reply::Text("abc".to_string()));
        assert_eq!(console.ask("Width?").unwrap(), Reply::Closed);
    }

    #[test]
    fn test_terminal_tolerates_invalid_utf8() {
        let input = Cursor::new(b"\xff\xfe\n42\n".to_vec());
        let mut console = TerminalConsole::new(input, Vec::new());

        assert_eq!(console.ask("Width?").unwrap(), Reply::Text("\u{fffd}\u{fffd}".to_string()));
        assert_eq!(console.ask("Width?").unwrap(), Reply::Text("42".to_string()));
    }

    #[test]
    fn test_terminal_output_layout() {
        let mut console = TerminalConsole::new(Cursor::new("1\n"), Vec::new());
        console.ask("How wide?").unwrap();
        console.warn("Enter a number").unwrap();

        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "How wide? Enter a number\n");
    }

    #[test]
    fn test_scripted_records_everything() {
        let mut console = ScriptedConsole::new(["1"]).then("2");
        console.ask("a").unwrap();
        console.warn("w").unwrap();
        console.ask("b").unwrap();

        assert_eq!(console.prompts, vec!["a", "b"]);
        assert_eq!(console.warnings, vec!["w"]);
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Reply::from(None), Reply::Canceled);
        assert_eq!(Reply::from(Some("x".to_string())), Reply::Text("x".to_string()));
    }
}
