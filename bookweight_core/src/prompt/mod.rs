//! # Validated Number Prompt
//!
//! Asks the user for a line of text until it parses to an integer inside the
//! requested bounds, then returns that integer.
//!
//! Every bad reply is handled in place: the user sees a warning and is asked
//! again. Nothing about a bad reply reaches the caller unless a limited
//! [`RetryPolicy`] runs out.
//!
//! | Reply | Warning |
//! |-------|---------|
//! | empty or canceled | `Enter a number` |
//! | no leading integer | `Number please` |
//! | below `min` | `Number greater than {min} please` |
//! | above `max` | `Number less than {max} please` |
//!
//! ## Example
//!
//! ```rust
//! use bookweight_core::prompt::{Bounds, ScriptedConsole, ValidatedNumberPrompt};
//!
//! let mut console = ScriptedConsole::new(["", "abc", "2000", "999"]);
//! let width = ValidatedNumberPrompt::new(&mut console)
//!     .request("How wide is your book in mm?", Bounds::new(1, 1000))
//!     .unwrap();
//!
//! assert_eq!(width, 999);
//! assert_eq!(
//!     console.warnings,
//!     vec!["Enter a number", "Number please", "Number less than 1000 please"]
//! );
//! ```

pub mod bounds;
pub mod console;
pub mod parse;

pub use bounds::Bounds;
pub use console::{Console, Reply, ScriptedConsole, TerminalConsole};
pub use parse::{parse_int_prefix, parse_reply};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{PromptError, PromptRejection};

/// How many bad replies a prompt tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RetryPolicy {
    /// Keep asking until a valid value arrives
    #[default]
    Unbounded,
    /// Give up after this many attempts (a limit of zero still asks once)
    Limited(u32),
}

impl RetryPolicy {
    /// Whether another attempt is allowed after `attempts` have been made.
    pub fn allows_another(self, attempts: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Limited(max) => attempts < max,
        }
    }
}

/// A message plus the bounds its answer must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// Text shown to the user
    pub message: String,

    /// Accepted range, inclusive
    #[serde(default)]
    pub bounds: Bounds,
}

impl PromptRequest {
    pub fn new(message: impl Into<String>) -> Self {
        PromptRequest {
            message: message.into(),
            bounds: Bounds::UNBOUNDED,
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }
}

/// The retry-until-valid input loop.
#[derive(Debug)]
pub struct ValidatedNumberPrompt<C> {
    console: C,
    retry: RetryPolicy,
}

impl<C: Console> ValidatedNumberPrompt<C> {
    /// Prompt over `console` with an unbounded retry policy.
    pub fn new(console: C) -> Self {
        ValidatedNumberPrompt {
            console,
            retry: RetryPolicy::Unbounded,
        }
    }

    /// Cap the number of attempts per request.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Give back the console.
    pub fn into_inner(self) -> C {
        self.console
    }

    /// Ask `message` until the reply is an integer inside `bounds`.
    ///
    /// # Errors
    ///
    /// - [`PromptError::InvalidBounds`] when `min > max`, before anything is asked
    /// - [`PromptError::InputClosed`] when the console has no more input
    /// - [`PromptError::RetriesExhausted`] when a limited policy runs out
    /// - [`PromptError::Io`] when the console fails to read or write
    pub fn request(&mut self, message: &str, bounds: Bounds) -> Result<i64, PromptError> {
        if !bounds.is_consistent() {
            warn!(prompt = message, %bounds, "bounds can never be satisfied");
            return Err(PromptError::InvalidBounds { bounds });
        }

        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            debug!(attempt = attempts, prompt = message, %bounds, "requesting number");

            let reply = self.console.ask(message)?;
            let outcome = match reply {
                Reply::Closed => {
                    warn!(attempt = attempts, prompt = message, "input closed");
                    return Err(PromptError::InputClosed);
                }
                Reply::Canceled => Err(PromptRejection::EmptyInput),
                Reply::Text(text) => parse_reply(&text).and_then(|value| bounds.check(value)),
            };

            match outcome {
                Ok(value) => {
                    info!(value, attempts, prompt = message, "accepted number");
                    return Ok(value);
                }
                Err(rejection) => {
                    warn!(code = rejection.error_code(), %rejection, "rejected reply");
                    self.console.warn(&rejection.warning())?;
                    if !self.retry.allows_another(attempts) {
                        return Err(PromptError::RetriesExhausted {
                            attempts,
                            last: rejection,
                        });
                    }
                }
            }
        }
    }

    /// [`request`](Self::request) driven by a [`PromptRequest`].
    pub fn request_with(&mut self, request: &PromptRequest) -> Result<i64, PromptError> {
        self.request(&request.message, request.bounds)
    }
}
