use crate::error::{InvalidSeed, MissingArgument};
use exo_compute::Topic;
use exo_error::Error;
use std::ops::Range;

/// A command typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the available topics.
    Topics,

    /// Generate a new exercise on the given topic.
    Generate(Topic),

    /// Solve the current exercise.
    Solve,

    /// Reseed the random generator.
    Seed(u64),

    /// Print the list of commands.
    Help,

    /// Leave the REPL.
    Quit,
}

/// Splits the line into words, pairing each word with its span.
///
/// Spans count characters, not bytes, since that is what report labels expect.
fn words(line: &str) -> Vec<(&str, Range<usize>)> {
    let mut words = Vec::new();
    let mut start = None;
    let mut char_start = 0;
    let mut char_count = 0;

    for (byte, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some(begin) = start.take() {
                words.push((&line[begin..byte], char_start..char_count));
            }
        } else if start.is_none() {
            start = Some(byte);
            char_start = char_count;
        }
        char_count += 1;
    }

    if let Some(begin) = start {
        words.push((&line[begin..], char_start..char_count));
    }

    words
}

/// Joins the words following the command into a single argument, along with the span covering
/// all of them.
fn rest<'a>(words: &[(&'a str, Range<usize>)]) -> Option<(String, Range<usize>)> {
    let (_, first) = words.first()?;
    let (_, last) = words.last()?;
    let text = words.iter().map(|(word, _)| *word).collect::<Vec<_>>().join(" ");
    Some((text, first.start..last.end))
}

fn parse_topic(name: &str, span: Range<usize>) -> Result<Topic, Error> {
    name.parse().map_err(|err| Error::new(vec![span], err))
}

impl Command {
    /// Parses a non-empty line of input.
    ///
    /// A line that does not start with a known command is read as the name of a topic, so that
    /// typing `quadratic` alone generates a quadratic equation.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let words = words(line);
        let Some((head, head_span)) = words.first().cloned() else {
            return Ok(Self::Help);
        };
        let args = &words[1..];

        match head.to_lowercase().as_str() {
            "topics" | "list" => Ok(Self::Topics),
            "solve" | "answer" => Ok(Self::Solve),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "gen" | "generate" | "new" => match rest(args) {
                Some((name, span)) => parse_topic(&name, span).map(Self::Generate),
                None => Err(Error::new(vec![head_span], MissingArgument {
                    command: "gen",
                    expected: "topic",
                })),
            },
            "seed" => match rest(args) {
                Some((seed, span)) => seed
                    .parse()
                    .map(Self::Seed)
                    .map_err(|_| Error::new(vec![span], InvalidSeed)),
                None => Err(Error::new(vec![head_span], MissingArgument {
                    command: "seed",
                    expected: "number",
                })),
            },
            _ => {
                let (name, span) = rest(&words).unwrap_or_else(|| (head.to_string(), head_span));
                parse_topic(&name, span).map(Self::Generate)
            },
        }
    }
}

/// The text printed by the `help` command.
pub const HELP: &str = "\
commands:
  gen <topic>   generate an exercise (or just type the topic name)
  solve         show the steps and the answer of the current exercise
  topics        list the available topics
  seed <n>      reseed the random generator
  help          show this message
  quit          leave";
