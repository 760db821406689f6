//! Line-oriented terminal front end for a quiz session.

use crate::config::SummaryFormat;
use core::fmt::{self, Display};
use engine::{
    can_advance,
    summary::{QuestionSummary, Summary},
    toggle_choice, Emphasis, Outcome, Progress, Session,
};
use model::{Question, QuizSet, Selection};
use std::{
    io::{BufRead, Write},
    str::FromStr,
};

/// A single line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Flip the choice at this zero-based index.
    Toggle(usize),
    /// Move on to the next question.
    Submit,
    /// Abandon the quiz.
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum InputError {
    /// Choices are numbered from one.
    ZeroChoice,
    Unrecognized,
}

impl Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ZeroChoice => "Choices are numbered from 1.",
            Self::Unrecognized => "Type a choice number, press Enter to submit, or `q` to quit.",
        })
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Submit);
        }

        if line.eq_ignore_ascii_case("q") {
            return Ok(Self::Quit);
        }

        let number: usize = line.parse().map_err(|_| InputError::Unrecognized)?;
        number.checked_sub(1).map(Self::Toggle).ok_or(InputError::ZeroChoice)
    }
}

/// Runs the whole quiz, reading commands from `input`. Returns `None` if the user quits.
pub fn play<'q, R, W>(quiz: &'q QuizSet, input: R, output: &mut W) -> anyhow::Result<Option<Outcome<'q>>>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Choose the correct answers below. You cannot go back, so choose wisely.")?;

    let mut lines = input.lines();
    let mut session = Session::new(quiz);
    loop {
        let question = session.current();
        write_question(output, session.index(), quiz.len(), question)?;

        let mut selection = Selection::new();
        loop {
            let Some(line) = lines.next() else {
                anyhow::bail!("input ended at question {} of {}", session.index() + 1, quiz.len());
            };

            match line?.parse::<Command>() {
                Ok(Command::Quit) => return Ok(None),
                Ok(Command::Submit) if can_advance(&selection) => break,
                Ok(Command::Submit) => writeln!(output, "Pick at least one choice first.")?,
                Ok(Command::Toggle(index)) => match toggle_choice(question, &selection, index) {
                    Ok(next) => {
                        selection = next;
                        write_selection(output, &selection)?;
                    }
                    Err(err) => {
                        log::warn!("ignoring toggle: {err}");
                        writeln!(output, "There is no choice {}.", index + 1)?;
                    }
                },
                Err(err) => {
                    log::warn!("ignoring unrecognized input: {err}");
                    writeln!(output, "{err}")?;
                }
            }
        }

        session = match session.submit(selection)? {
            Progress::InProgress(next) => next,
            Progress::Completed(outcome) => return Ok(Some(outcome)),
        };
    }
}

fn write_question<W: Write>(output: &mut W, index: usize, total: usize, question: &Question) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Question {} of {}: {}", index + 1, total, question.prompt())?;
    for (number, label) in (1..).zip(question.choices()) {
        writeln!(output, "  {number}. {label}")?;
    }
    if question.kind().is_single_select() {
        writeln!(output, "Pick one choice, then press Enter.")
    } else {
        writeln!(output, "Pick every choice that applies, then press Enter.")
    }
}

fn write_selection<W: Write>(output: &mut W, selection: &Selection) -> std::io::Result<()> {
    write!(output, "Selected:")?;
    for index in selection.iter() {
        write!(output, " {}", index + 1)?;
    }
    writeln!(output)
}

pub fn write_summary<W: Write>(output: &mut W, summary: &Summary, format: SummaryFormat) -> anyhow::Result<()> {
    match format {
        SummaryFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, summary)?;
            writeln!(output)?;
        }
        SummaryFormat::Text => {
            writeln!(output)?;
            writeln!(output, "Total Score: {} / {}", summary.score, summary.total)?;
            for question in &summary.questions {
                write_question_summary(output, question)?;
            }
        }
    }
    Ok(())
}

fn write_question_summary<W: Write>(output: &mut W, question: &QuestionSummary) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", question.prompt)?;
    for choice in &question.choices {
        let (marker, note) = match choice.emphasis {
            Emphasis::Hit => ("[*]", ""),
            Emphasis::Miss => ("[x]", ""),
            Emphasis::Overlooked => ("[ ]", "  <- correct answer"),
            Emphasis::Plain => ("[ ]", ""),
        };
        writeln!(output, "  {marker} {}{note}", choice.label)?;
    }
    writeln!(output, "{}", if question.correct { "Correct" } else { "Incorrect" })
}
