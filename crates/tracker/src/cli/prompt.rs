//! Interactive input. Prompts go to stderr so stdout stays clean for piping.
//!
//! When stdin is not a terminal, answers are read line by line from it; end of input aborts.

use console::{style, Term};
use std::io::{BufRead, IsTerminal};
use trackerapp::error::{Result, TrackerError};

fn read_answer(term: &Term) -> Result<String> {
    if std::io::stdin().is_terminal() {
        return term.read_line().map_err(|_| TrackerError::Aborted);
    }
    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(TrackerError::Io)?;
    if read == 0 {
        return Err(TrackerError::Aborted);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn ask(term: &Term, question: &str) -> Result<String> {
    term.write_str(question).map_err(TrackerError::Io)?;
    term.flush().map_err(TrackerError::Io)?;
    read_answer(term)
}

/// Ask until a non-blank title comes back.
pub fn title(current: Option<&str>) -> Result<String> {
    let term = Term::stderr();
    loop {
        let question = match current {
            Some(current) => format!("{} [{}]: ", style("Title").bold(), current),
            None => format!("{}: ", style("Title").bold()),
        };
        let answer = ask(&term, &question)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        if let Some(current) = current {
            return Ok(current.to_string());
        }
        term.write_line(&style("Title cannot be empty.").yellow().to_string())
            .map_err(TrackerError::Io)?;
    }
}

/// Ask for tags. An empty answer keeps `current`, a single `-` clears them.
pub fn tags(current: &[String]) -> Result<Option<String>> {
    let term = Term::stderr();
    let shown = if current.is_empty() {
        "none".to_string()
    } else {
        current.join(", ")
    };
    let answer = ask(&term, &format!("{} [{}] (- clears): ", style("Tags").bold(), shown))?;
    match answer.trim() {
        "" => Ok(None),
        "-" => Ok(Some(String::new())),
        other => Ok(Some(other.to_string())),
    }
}

/// Yes/no question defaulting to no.
pub fn confirm(question: &str) -> Result<bool> {
    let term = Term::stderr();
    let answer = ask(&term, &format!("{} [y/N] ", question))?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
