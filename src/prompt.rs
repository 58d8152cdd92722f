//! Yes/no questions asked on the controlling terminal
//!
//! `xe` is often launched with stdin piped from an installer script, so the
//! question is read from the terminal device rather than stdin. Without a
//! terminal the answer must come from an explicit override (`--yes`).

use std::io::IsTerminal;

use inquire::{Confirm, InquireError};
use log::debug;

use crate::error::XeError;

/// Source of answers to yes/no questions.
pub trait Prompt {
    /// Ask `question`; `Ok(false)` means declined.
    ///
    /// # Errors
    ///
    /// Returns `XeError::Prompt` if the terminal cannot be read.
    fn confirm(&mut self, question: &str) -> Result<bool, XeError>;

    /// Hint appended to a decline error, if there is a better way to answer.
    fn decline_hint(&self) -> Option<&'static str> {
        None
    }
}

/// Asks on the terminal, defaulting to "no".
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool, XeError> {
        match Confirm::new(question).with_default(false).prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
            Err(e) => Err(XeError::Prompt(e.to_string())),
        }
    }
}

/// Answers every question the same way without asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonInteractive {
    Accept,
    Decline,
}

impl Prompt for NonInteractive {
    fn confirm(&mut self, question: &str) -> Result<bool, XeError> {
        let answer = *self == NonInteractive::Accept;
        debug!("Answering '{question}' with {answer} (non-interactive)");
        Ok(answer)
    }

    fn decline_hint(&self) -> Option<&'static str> {
        match self {
            NonInteractive::Accept => None,
            NonInteractive::Decline => Some("no terminal available, pass --yes to install"),
        }
    }
}

/// Whether a controlling terminal can be read, even when stdin is piped.
#[must_use]
pub fn terminal_available() -> bool {
    if std::io::stdin().is_terminal() {
        return true;
    }
    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .is_ok()
    }
    #[cfg(not(unix))]
    {
        false
    }
}

/// Choose the prompt for this invocation.
#[must_use]
pub fn detect(assume_yes: bool) -> Box<dyn Prompt> {
    if assume_yes {
        Box::new(NonInteractive::Accept)
    } else if terminal_available() {
        Box::new(TerminalPrompt)
    } else {
        debug!("No terminal available, prompts will be declined");
        Box::new(NonInteractive::Decline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_answers() {
        assert!(NonInteractive::Accept.confirm("Install?").unwrap());
        assert!(!NonInteractive::Decline.confirm("Install?").unwrap());
        assert!(NonInteractive::Decline.decline_hint().is_some());
        assert!(NonInteractive::Accept.decline_hint().is_none());
    }

    #[test]
    fn test_assume_yes_accepts() {
        let mut prompt = detect(true);
        assert!(prompt.confirm("Install?").unwrap());
    }
}
