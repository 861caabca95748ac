//! Yes/no confirmation prompts
//!
//! Answers are a full line of text: `y`/`yes` or `n`/`no` in any case.
//! Anything else reprompts until a recognized answer arrives. On a terminal
//! the prompt goes through dialoguer; otherwise lines are read from any
//! `BufRead` source.

use dialoguer::{
    Input,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::trace;

/// Shown after an unrecognized answer
pub const REPROMPT: &str = "Please type yes or no and then press enter:";

/// Confirmation prompt failures
#[derive(Debug, Error)]
pub enum ConfirmError {
    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("Failed to read answer: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("Prompt failed: {source}")]
    Prompt {
        #[from]
        source: dialoguer::Error,
    },
}

/// Interpret an answer; `None` means it was not recognized
pub fn parse_answer(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask on `writer` and read answers line by line from `reader`
pub fn confirm_lines<R: BufRead, W: Write>(
    prompt: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<bool, ConfirmError> {
    writeln!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(ConfirmError::InputClosed);
        }

        if let Some(answer) = parse_answer(&line) {
            return Ok(answer);
        }

        trace!("Unrecognized answer: {:?}", line.trim());
        writeln!(writer, "{REPROMPT}")?;
        writer.flush()?;
    }
}

/// Ask on the terminal with dialoguer, reprompting through its validator
pub fn confirm_interactive(prompt: &str, color: bool) -> Result<bool, ConfirmError> {
    let colorful = ColorfulTheme::default();
    let theme: &dyn Theme = if color { &colorful } else { &SimpleTheme };

    let answer: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &'static str> {
            parse_answer(input).map(|_| ()).ok_or(REPROMPT)
        })
        .interact_text()?;

    Ok(parse_answer(&answer) == Some(true))
}

#[cfg(test)]
mod tests {
    include!("interactive.test.rs");
}
