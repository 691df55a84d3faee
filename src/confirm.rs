//! Yes/no confirmation prompts.
//!
//! Jobs run on several threads at once and more than one of them may need to
//! ask before overwriting. [`TerminalPrompter`] holds a lock for the whole
//! prompt so questions are asked one at a time instead of interleaving on
//! the terminal.
//!
//! Callers describe *what* they are asking with a [`Question`]; the wording
//! lives in [`crate::output::format_prompt`].

use crate::output;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// A yes/no decision the batch needs from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// The output file (prefix included) already exists.
    Overwrite(String),
    /// The output directory already holds files.
    ContinueIntoNonEmpty(PathBuf),
}

/// Something that can answer a yes/no question.
pub trait Prompter: Sync {
    fn confirm(&self, question: &Question) -> bool;
}

/// Interactive prompter on the controlling terminal.
///
/// Every question defaults to "no". When there is no terminal to ask on, the
/// default is taken. With `assume_yes` every question is answered "yes"
/// without prompting.
pub struct TerminalPrompter {
    assume_yes: bool,
    lock: Mutex<()>,
}

impl TerminalPrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            lock: Mutex::new(()),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &Question) -> bool {
        if self.assume_yes {
            return true;
        }

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        match Confirm::new()
            .with_prompt(output::format_prompt(question))
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!("cannot prompt ({e}), answering no");
                false
            }
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Prompter that answers from a script and records every question.
    ///
    /// Once the script runs out it keeps giving `fallback`.
    pub struct ScriptedPrompter {
        answers: Mutex<VecDeque<bool>>,
        fallback: bool,
        pub asked: Mutex<Vec<Question>>,
    }

    impl ScriptedPrompter {
        pub fn always(answer: bool) -> Self {
            Self::with_answers(&[], answer)
        }

        pub fn with_answers(answers: &[bool], fallback: bool) -> Self {
            Self {
                answers: Mutex::new(answers.iter().copied().collect()),
                fallback,
                asked: Mutex::new(Vec::new()),
            }
        }

        pub fn questions(&self) -> Vec<Question> {
            self.asked.lock().unwrap().clone()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&self, question: &Question) -> bool {
            self.asked.lock().unwrap().push(question.clone());
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(self.fallback)
        }
    }

    fn overwrite(name: &str) -> Question {
        Question::Overwrite(name.to_string())
    }

    #[test]
    fn assume_yes_never_prompts() {
        let prompter = TerminalPrompter::new(true);
        assert!(prompter.confirm(&overwrite("a.jpg")));
    }

    #[test]
    fn scripted_answers_in_order_then_fallback() {
        let prompter = ScriptedPrompter::with_answers(&[true, false], true);

        assert!(prompter.confirm(&overwrite("one")));
        assert!(!prompter.confirm(&overwrite("two")));
        assert!(prompter.confirm(&overwrite("three")));
        assert_eq!(
            prompter.questions(),
            vec![overwrite("one"), overwrite("two"), overwrite("three")]
        );
    }
}
