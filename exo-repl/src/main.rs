mod command;
mod error;

use clap::{Parser, ValueEnum};
use command::{Command, HELP};
use error::{report_to_stderr, ConfigError, NoExercise};
use exo_compute::{config::GeneratorConfig, generate, Exercise, Topic};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::{fs, io::{self, BufRead, IsTerminal}, ops::ControlFlow, path::{Path, PathBuf}, process::ExitCode};

/// Generate algebra exercises and walk through their solutions.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed of the random generator. Without it, every run draws different exercises.
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file overriding the generator settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one exercise on this topic with its solution, then exit.
    #[arg(short, long)]
    topic: Option<String>,

    /// Verbosity of the log written to stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Reads the generator settings from a TOML file. Settings missing from the file keep their
/// default value.
fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|err| ConfigError::Io { path: path.to_path_buf(), err })?;
    toml::from_str(&text)
        .map_err(|err| ConfigError::Toml { path: path.to_path_buf(), err })
}

/// State shared by the commands of a session.
struct Session {
    config: GeneratorConfig,
    rng: StdRng,
    current: Option<Exercise>,
}

impl Session {
    fn new(config: GeneratorConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng, current: None }
    }

    /// Generates a new exercise and prints its statement.
    fn generate(&mut self, topic: Topic) -> Result<(), exo_error::Error> {
        let exercise = generate(topic, &self.config, &mut self.rng)?;
        debug!("generated {:?}", exercise);
        println!("{}", exercise.statement());
        self.current = Some(exercise);
        Ok(())
    }

    /// Prints the steps and the answer of the current exercise.
    fn solve(&self) -> Result<(), exo_error::Error> {
        let Some(exercise) = &self.current else {
            return Err(exo_error::Error::new(Vec::new(), NoExercise));
        };

        let solution = exercise.solve()?;
        for (i, step) in solution.steps.iter().enumerate() {
            println!("{:>3}. {}", i + 1, step);
        }
        println!("answer: {}", solution.answer);
        Ok(())
    }

    /// Runs a single line of input.
    fn execute(&mut self, line: &str) -> ControlFlow<()> {
        let result = Command::parse(line).and_then(|command| {
            match command {
                Command::Topics => {
                    for topic in Topic::ALL {
                        println!("{:<22}{}", topic.name(), topic.description());
                    }
                },
                Command::Generate(topic) => self.generate(topic)?,
                Command::Solve => self.solve()?,
                Command::Seed(seed) => {
                    info!("reseeding with {}", seed);
                    self.rng = StdRng::seed_from_u64(seed);
                },
                Command::Help => println!("{}", HELP),
                Command::Quit => return Ok(ControlFlow::Break(())),
            }
            Ok(ControlFlow::Continue(()))
        });

        match result {
            Ok(flow) => flow,
            Err(err) => {
                report_to_stderr(&err, line);
                ControlFlow::Continue(())
            },
        }
    }
}

fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<ControlFlow<()>, ReadlineError> {
    let input = rl.readline("> ")?;
    if input.trim().is_empty() {
        return Ok(ControlFlow::Continue(()));
    }

    rl.add_history_entry(&input)?;

    Ok(session.execute(&input))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = CombinedLogger::init(vec![TermLogger::new(
        cli.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]) {
        eprintln!("could not initialize the logger: {}", err);
    }

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => {
                info!("loaded settings from {}", path.display());
                config
            },
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        },
        None => GeneratorConfig::default(),
    };
    let mut session = Session::new(config, cli.seed);

    if let Some(name) = cli.topic {
        // one-shot mode
        let line = format!("gen {}", name);
        let succeeded = Command::parse(&line)
            .and_then(|command| match command {
                Command::Generate(topic) => session.generate(topic),
                _ => Ok(()),
            })
            .and_then(|()| session.solve());
        return match succeeded {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                report_to_stderr(&err, &line);
                ExitCode::FAILURE
            },
        };
    }

    if !io::stdin().is_terminal() {
        // commands piped through stdin
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("{}", err);
                    return ExitCode::FAILURE;
                },
            };
            if line.trim().is_empty() {
                continue;
            }
            if session.execute(&line).is_break() {
                break;
            }
        }
        return ExitCode::SUCCESS;
    }

    // run the repl / interactive mode
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    println!("type `help` for the list of commands");
    loop {
        match process_line(&mut rl, &mut session) {
            Ok(ControlFlow::Continue(())) => (),
            Ok(ControlFlow::Break(())) => break,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => {
                eprintln!("{}", err);
                break;
            },
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use exo_compute::random::CoefRange;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: GeneratorConfig = toml::from_str(
            "[quadratic]\nleading = { min = 2, max = 3 }\n\n[power]\nexp = { min = 2, max = 3, allow_negative = true }\n",
        ).unwrap();
        let default = GeneratorConfig::default();

        assert_eq!(config.quadratic.leading, CoefRange::new(2, 3));
        assert_eq!(config.power.exp, CoefRange::new(2, 3).signed());
        assert_eq!(config.quadratic.coefficient, default.quadratic.coefficient);
        assert_eq!(config.linear, default.linear);
        assert_eq!(config.radical, default.radical);
    }

    #[test]
    fn empty_config_is_default() {
        let config: GeneratorConfig = toml::from_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn quit_stops_the_session() {
        let mut session = Session::new(GeneratorConfig::default(), Some(7));
        assert_eq!(session.execute("gen fraction"), ControlFlow::Continue(()));
        assert!(session.current.is_some());
        assert_eq!(session.execute("solve"), ControlFlow::Continue(()));
        assert_eq!(session.execute("quit"), ControlFlow::Break(()));
    }
}
