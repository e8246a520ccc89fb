//! Source SVG selection by the numbered-file convention.
//!
//! Files named `<NN>_<name>.svg` (two or more digits) are candidates; the highest
//! number wins. When several files share the highest number, a [`ChoiceProvider`]
//! decides which one to use.

use crate::error::GenerateError;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use dialoguer::Input;
use dialoguer::console::Term;
use regex::Regex;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};

/// Supplies a choice among tied candidates.
///
/// Implementations return the zero-based index of the chosen candidate, or
/// `None` if the operator cancelled.
#[cfg_attr(test, mockall::automock)]
pub trait ChoiceProvider {
    fn choose(&mut self, number: u64, candidates: &[String]) -> Result<Option<usize>>;
}

/// Always answers with a pre-selected index, for non-interactive runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedChoice(pub usize);

impl ChoiceProvider for FixedChoice {
    fn choose(&mut self, _number: u64, _candidates: &[String]) -> Result<Option<usize>> {
        Ok(Some(self.0))
    }
}

/// How a typed answer to the selection prompt is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Zero-based index of the chosen candidate.
    Selected(usize),
    /// A number, but not between 1 and the candidate count. Asked again.
    OutOfRange,
    /// Not a number at all. Ends the selection.
    Cancel,
}

/// Interprets a one-based answer for `count` candidates.
pub fn parse_answer(input: &str, count: usize) -> Answer {
    match input.trim().parse::<i64>() {
        Ok(choice) if choice >= 1 && (choice as u64) <= count as u64 => {
            Answer::Selected(choice as usize - 1)
        }
        Ok(_) => Answer::OutOfRange,
        Err(_) => Answer::Cancel,
    }
}

fn out_of_range_message(count: usize) -> String {
    format!("Please enter a number between 1 and {}", count)
}

fn write_candidates<W: Write>(output: &mut W, number: u64, candidates: &[String]) -> io::Result<()> {
    writeln!(output, "\nMultiple SVG files found with number {:02}:", number)?;
    for (i, name) in candidates.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, name)?;
    }
    writeln!(output)
}

/// Interactive prompt on the terminal, backed by `dialoguer`.
///
/// Out-of-range numbers are rejected in place; any other non-numeric answer or
/// Ctrl+C cancels.
pub struct TerminalChoiceProvider {
    term: Term,
}

impl TerminalChoiceProvider {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Whether stdin and stdout are both attached to a terminal.
    pub fn is_available() -> bool {
        Term::stdout().is_term() && io::stdin().is_terminal()
    }
}

impl Default for TerminalChoiceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceProvider for TerminalChoiceProvider {
    fn choose(&mut self, number: u64, candidates: &[String]) -> Result<Option<usize>> {
        write_candidates(&mut self.term, number, candidates)?;

        let count = candidates.len();
        let answer = Input::<String>::new()
            .with_prompt("Select file (enter number)")
            .allow_empty(true)
            .validate_with(move |input: &String| -> Result<(), String> {
                match parse_answer(input, count) {
                    Answer::OutOfRange => Err(out_of_range_message(count)),
                    Answer::Selected(_) | Answer::Cancel => Ok(()),
                }
            })
            .interact_text_on(&self.term);

        match answer {
            Ok(text) => match parse_answer(&text, count) {
                Answer::Selected(index) => Ok(Some(index)),
                Answer::OutOfRange | Answer::Cancel => Ok(None),
            },
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                tracing::debug!("Selection interrupted");
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to read selection"),
        }
    }
}

/// Reads answers line by line, for input piped from another process.
///
/// Follows the same rules as [`TerminalChoiceProvider`]; end of input also cancels.
pub struct LineChoiceProvider<R, W> {
    input: R,
    output: W,
}

impl LineChoiceProvider<io::StdinLock<'static>, io::Stdout> {
    /// Provider reading from stdin and writing to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineChoiceProvider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ChoiceProvider for LineChoiceProvider<R, W> {
    fn choose(&mut self, number: u64, candidates: &[String]) -> Result<Option<usize>> {
        write_candidates(&mut self.output, number, candidates)?;

        loop {
            write!(self.output, "Select file (enter number): ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read selection")?;
            if read == 0 {
                tracing::debug!("Selection input closed");
                return Ok(None);
            }

            match parse_answer(&line, candidates.len()) {
                Answer::Selected(index) => return Ok(Some(index)),
                Answer::OutOfRange => {
                    writeln!(self.output, "{}", out_of_range_message(candidates.len()))?;
                }
                Answer::Cancel => return Ok(None),
            }
        }
    }
}

/// A file matching the numbered naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedSource {
    pub number: u64,
    pub path: Utf8PathBuf,
}

/// Finds and picks the source SVG for a run.
pub struct SourceSelector {
    numbered_pattern: Regex,
}

impl SourceSelector {
    pub fn new() -> Self {
        Self {
            numbered_pattern: Regex::new(r"^(\d{2,})_.*\.svg$").expect("Invalid numbered SVG regex"),
        }
    }

    /// Parses the numeric prefix of `file_name`, or `None` if it does not follow the convention.
    pub fn numbered_prefix(&self, file_name: &str) -> Option<u64> {
        self.numbered_pattern
            .captures(file_name)
            .and_then(|caps| caps[1].parse().ok())
    }

    /// Lists the numbered SVG files directly inside `directory`, ordered by file name.
    pub fn scan(&self, directory: &Utf8Path) -> Result<Vec<NumberedSource>> {
        let mut sources = Vec::new();

        for entry in directory
            .read_dir_utf8()
            .with_context(|| format!("Failed to read directory: {}", directory))?
        {
            let entry = entry.with_context(|| format!("Failed to read entry in {}", directory))?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(number) = self.numbered_prefix(entry.file_name()) {
                sources.push(NumberedSource {
                    number,
                    path: entry.into_path(),
                });
            }
        }

        sources.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(sources)
    }

    /// Returns the sources sharing the highest number, in scan order.
    ///
    /// # Errors
    ///
    /// [`GenerateError::NoNumberedSources`] if nothing in `directory` follows the convention
    pub fn latest_candidates(&self, directory: &Utf8Path) -> Result<(u64, Vec<Utf8PathBuf>)> {
        let sources = self.scan(directory)?;

        let Some(max_number) = sources.iter().map(|s| s.number).max() else {
            return Err(GenerateError::NoNumberedSources(directory.to_path_buf()).into());
        };

        let candidates = sources
            .into_iter()
            .filter(|s| s.number == max_number)
            .map(|s| s.path)
            .collect();

        Ok((max_number, candidates))
    }

    /// Picks the source SVG in `directory`.
    ///
    /// An explicit file name is resolved relative to `directory` and must exist.
    /// Otherwise the highest-numbered file is used, asking `chooser` on ties.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::SourceNotFound`] for a missing explicit file
    /// - [`GenerateError::NoNumberedSources`] if no file follows the convention
    /// - [`GenerateError::Cancelled`] if the chooser was cancelled
    /// - [`GenerateError::InvalidChoice`] if the chooser answered out of range
    pub fn select(
        &self,
        directory: &Utf8Path,
        explicit: Option<&str>,
        chooser: &mut dyn ChoiceProvider,
    ) -> Result<Utf8PathBuf> {
        if let Some(file_name) = explicit {
            let path = directory.join(file_name);
            if !path.exists() {
                return Err(GenerateError::SourceNotFound(path).into());
            }
            tracing::info!("Using explicitly selected source {}", path);
            return Ok(path);
        }

        let (number, mut candidates) = self.latest_candidates(directory)?;
        if candidates.len() == 1 {
            return Ok(candidates.remove(0));
        }

        tracing::info!(
            "{} source files share number {:02}, asking for a choice",
            candidates.len(),
            number
        );

        let names: Vec<String> = candidates
            .iter()
            .map(|path| path.file_name().unwrap_or(path.as_str()).to_string())
            .collect();

        match chooser.choose(number, &names)? {
            Some(index) if index < candidates.len() => Ok(candidates.swap_remove(index)),
            Some(index) => Err(GenerateError::InvalidChoice {
                index,
                count: candidates.len(),
            }
            .into()),
            None => Err(GenerateError::Cancelled.into()),
        }
    }
}

impl Default for SourceSelector {
    fn default() -> Self {
        Self::new()
    }
}
