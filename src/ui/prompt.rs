//! Console prompt primitives: a line reader generic over any BufRead (so the
//! loops are testable without a live terminal), the yes/no vocabulary, and
//! the shared continue checkpoint.
//!
//! Nothing here ever exits the process. A negative answer to a checkpoint
//! surfaces as `Flow::Quit` and the session driver decides what to do with
//! it.

use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// Affirmative and negative vocabularies for every yes/no dialog, matched
/// case-insensitively on the trimmed line.
pub const YES_TOKENS: [&str; 2] = ["yes", "y"];
pub const NO_TOKENS: [&str; 2] = ["no", "n"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Pure validation: raw input → parsed answer, or None for a re-prompt.
pub fn parse_answer(input: &str) -> Option<Answer> {
    let token = input.trim().to_lowercase();
    if YES_TOKENS.contains(&token.as_str()) {
        Some(Answer::Yes)
    } else if NO_TOKENS.contains(&token.as_str()) {
        Some(Answer::No)
    } else {
        None
    }
}

/// Control signal propagated up to the session driver. `Quit` means the user
/// declined to continue; the driver performs the actual termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Prompter<R: BufRead> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Print the question and read one trimmed line. None on end of input.
    pub fn ask_line(&mut self, question: &str) -> AppResult<Option<String>> {
        println!("{}", question);
        io::stdout().flush()?;

        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompt until `parse` accepts the input. None on end of input, which
    /// callers treat as a quit request so a closed pipe can never loop.
    pub fn ask<T>(
        &mut self,
        question: &str,
        invalid_msg: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<Option<T>> {
        loop {
            let Some(line) = self.ask_line(question)? else {
                return Ok(None);
            };

            match parse(&line) {
                Some(value) => return Ok(Some(value)),
                None => {
                    println!();
                    println!("{}", invalid_msg);
                    println!();
                }
            }
        }
    }

    /// Yes/no dialog with the shared vocabulary. End of input counts as a
    /// negative answer.
    pub fn ask_yes_no(&mut self, question: &str) -> AppResult<Answer> {
        let answer = self.ask(
            question,
            "That was not a valid entry. Please enter yes or no.",
            parse_answer,
        )?;
        Ok(answer.unwrap_or(Answer::No))
    }

    /// The shared "continue to the next section?" checkpoint.
    pub fn checkpoint(&mut self) -> AppResult<Flow> {
        match self.ask_yes_no("Would you like to continue? Yes or No:")? {
            Answer::Yes => {
                println!();
                println!("Okay, we will move on to the next section!");
                Ok(Flow::Continue)
            }
            Answer::No => Ok(Flow::Quit),
        }
    }
}
