//! Sorter sample.
//!
//! Reads numbers or strings from the command line (or stdin) and prints them
//! in order, using [`SortedList`] as the only sorting mechanism.

use std::fmt::Display;
use std::io::BufRead;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sorted_linked_list::sorted::SortedList;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "sorter")]
#[command(about = "Sort values with a permanently sorted linked list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print the largest value first
    #[arg(long, global = true)]
    pub reverse: bool,

    /// Print each distinct value once
    #[arg(long, global = true)]
    pub dedup: bool,
}

/// Which element family to sort.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sort signed 64-bit integers
    Numbers {
        /// Values to sort; read from stdin when omitted
        values: Vec<String>,
    },
    /// Sort strings by byte order
    Texts {
        /// Values to sort; read from stdin when omitted
        values: Vec<String>,
    },
}

/// Sorts the requested values and renders them on a single line.
///
/// `input` is only read when no values were given on the command line.
///
/// # Errors
///
/// Returns an error if reading `input` fails or a number does not parse.
pub fn run(cli: Cli, input: impl BufRead) -> anyhow::Result<String> {
    let options = RenderOptions {
        reverse: cli.reverse,
        dedup: cli.dedup,
    };
    match cli.command {
        Command::Numbers { values } => {
            let values = values_or_input(values, input)?;
            let numbers = values
                .iter()
                .map(|value| {
                    value
                        .parse::<i64>()
                        .with_context(|| format!("not a number: {value:?}"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            tracing::debug!(count = numbers.len(), "sorting numbers");
            Ok(render(SortedList::of_numbers(numbers), options))
        }
        Command::Texts { values } => {
            let values = values_or_input(values, input)?;
            tracing::debug!(count = values.len(), "sorting texts");
            Ok(render(SortedList::of_texts(values), options))
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RenderOptions {
    reverse: bool,
    dedup: bool,
}

fn values_or_input(values: Vec<String>, input: impl BufRead) -> anyhow::Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }
    tracing::info!("no values given, reading stdin");
    let mut collected = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        collected.extend(line.split_whitespace().map(str::to_owned));
    }
    Ok(collected)
}

fn render<T: Ord + Clone + Display>(mut list: SortedList<T>, options: RenderOptions) -> String {
    if options.dedup {
        let before = list.len();
        let mut previous: Option<T> = None;
        list.retain(|element| {
            let keep = previous.as_ref() != Some(element);
            previous = Some(element.clone());
            keep
        });
        tracing::debug!(removed = before - list.len(), "dropped duplicates");
    }

    let rendered: Vec<String> = if options.reverse {
        list.iter().rev().map(ToString::to_string).collect()
    } else {
        list.iter().map(ToString::to_string).collect()
    };
    rendered.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run_with(arguments: &[&str], stdin: &str) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("sorter").chain(arguments.iter().copied()))?;
        run(cli, stdin.as_bytes())
    }

    #[rstest]
    #[case(&["numbers", "3", "2", "1"], "1 2 3")]
    #[case(&["numbers", "--", "-5", "10", "0"], "-5 0 10")]
    #[case(&["texts", "C", "B", "A"], "A B C")]
    #[case(&["--reverse", "numbers", "1", "3", "2"], "3 2 1")]
    #[case(&["texts", "--dedup", "b", "a", "b", "a"], "a b")]
    fn test_sorts_arguments(#[case] arguments: &[&str], #[case] expected: &str) {
        assert_eq!(run_with(arguments, "").unwrap(), expected);
    }

    #[rstest]
    fn test_reads_stdin_when_no_values() {
        let output = run_with(&["numbers"], "4 2\n3\n\n1").unwrap();
        assert_eq!(output, "1 2 3 4");
    }

    #[rstest]
    fn test_empty_input_renders_nothing() {
        assert_eq!(run_with(&["texts"], "").unwrap(), "");
    }

    #[rstest]
    fn test_invalid_number_is_reported() {
        let error = run_with(&["numbers", "1", "two"], "").unwrap_err();
        assert!(error.to_string().contains("not a number: \"two\""));
    }

    #[rstest]
    fn test_dedup_and_reverse_combine() {
        let output = run_with(&["numbers", "--dedup", "--reverse", "2", "2", "1"], "").unwrap();
        assert_eq!(output, "2 1");
    }
}
