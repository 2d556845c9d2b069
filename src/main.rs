//! Interactive line-oriented front end.
//!
//! This binary is the thin shell around the library: it loads configuration,
//! initializes logging, reads commands from stdin, translates them to
//! [`Event`]s, delegates to [`handle_event`] and executes the returned
//! [`Action`]s.
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse `key=value` arguments, read the config file, init tracing
//! 2. **Loop**: Read a line, map it to events, apply them, redraw when needed
//! 3. **Exit**: On `quit` or end of input
//!
//! # Commands
//!
//! - `<number>`: Set the input value and convert
//! - `value <text>`: Set the input value
//! - `from <unit>` / `to <unit>`: Select units (names, abbreviations or fuzzy text)
//! - `category <name>`: Switch category
//! - `swap`, `convert`, `history`, `clear`
//! - `open from|to`, `close from|to`: Expand or collapse a unit list
//! - `units`: List the units of the current category
//! - `json`: Print the history as JSON
//! - `help`, `quit`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use unit_converter::conversion::{self, catalog};
use unit_converter::infrastructure::paths;
use unit_converter::{handle_event, Action, Category, Config, DropdownSide, Event, SessionState};

const HELP: &str = "\
commands:
  <number>              set the value and convert
  value <text>          set the value
  from <unit>           select the source unit
  to <unit>             select the target unit
  category <name>       length | weight | volume | temperature | time
  swap                  exchange units (moves the result into the value)
  convert               convert the current value
  history               show or hide the history
  clear                 clear the history
  open from|to          expand a unit list
  close from|to         collapse a unit list
  units                 list units of the current category
  json                  print the history as JSON
  help                  show this help
  quit                  exit";

/// Outcome of parsing one input line.
#[derive(Debug)]
enum Command {
    /// Events to apply to the session, in order.
    Events(Vec<Event>),
    /// Print the unit list of the current category.
    Units,
    /// Print the history as JSON.
    Json,
    /// Print the command reference.
    Help,
    /// Blank line.
    Nothing,
}

/// Front end state wrapping the library session.
struct Repl {
    session: SessionState,
}

impl Repl {
    /// Loads configuration and creates the session.
    fn load(args: &BTreeMap<String, String>) -> unit_converter::Result<Self> {
        let config_path = args.get("config").map_or_else(paths::config_file, |p| {
            paths::expand_tilde(p).into()
        });
        let config = Config::load(&config_path)?.with_overrides(args);
        unit_converter::observability::init_tracing(&config);

        let _span = tracing::debug_span!("repl_load").entered();
        tracing::info!(config_path = %config_path.display(), "unit converter started");

        Ok(Self {
            session: unit_converter::initialize(&config),
        })
    }

    /// Handles one line. Returns `false` when the session should end.
    fn update(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let command = match parse_command(line, &self.session) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "! {message}")?;
                return Ok(true);
            }
        };

        match command {
            Command::Nothing => {}
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Units => {
                for unit in self.session.current_units() {
                    writeln!(out, "  {unit} ({})", catalog::abbreviation(unit))?;
                }
            }
            Command::Json => match serde_json::to_string_pretty(self.session.history()) {
                Ok(json) => writeln!(out, "{json}")?,
                Err(e) => writeln!(out, "! {e}")?,
            },
            Command::Events(events) => return self.apply(&events, out),
        }
        Ok(true)
    }

    fn apply(&mut self, events: &[Event], out: &mut impl Write) -> io::Result<bool> {
        let mut render = false;
        for event in events {
            let (changed, actions) = match handle_event(&mut self.session, event) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, "event failed");
                    writeln!(out, "! {e}")?;
                    return Ok(true);
                }
            };
            render |= changed;

            for action in actions {
                match action {
                    Action::Notify { message } => writeln!(out, "! {message}")?,
                    Action::Quit => return Ok(false),
                }
            }
        }

        if render {
            write!(out, "{}", unit_converter::ui::render(&self.session))?;
        }
        Ok(true)
    }
}

fn parse_command(line: &str, session: &SessionState) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Nothing);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let resolve = |query: &str| {
        catalog::resolve_unit(session.selected_category(), query).ok_or_else(|| {
            format!(
                "unknown {} unit: {query}",
                session.selected_category().name().to_lowercase()
            )
        })
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "value" => Command::Events(vec![Event::SetInputValue(rest.to_string())]),
        "from" => Command::Events(vec![Event::SelectInputUnit(resolve(rest)?.to_string())]),
        "to" => Command::Events(vec![Event::SelectOutputUnit(resolve(rest)?.to_string())]),
        "category" | "cat" => {
            let category = rest.parse::<Category>().map_err(|e| e.to_string())?;
            Command::Events(vec![Event::SelectCategory(category)])
        }
        "swap" => Command::Events(vec![Event::SwapUnits]),
        "convert" | "=" => Command::Events(vec![Event::Convert]),
        "history" => Command::Events(vec![Event::ToggleHistory]),
        "clear" => Command::Events(vec![Event::ClearHistory]),
        "open" | "close" => {
            let side = rest.parse::<DropdownSide>()?;
            Command::Events(vec![Event::SetDropdownOpen {
                side,
                open: verb.eq_ignore_ascii_case("open"),
            }])
        }
        "units" => Command::Units,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Events(vec![Event::Quit]),
        _ if conversion::parse_value(line).is_some() => Command::Events(vec![
            Event::SetInputValue(line.to_string()),
            Event::Convert,
        ]),
        _ => return Err(format!("unknown command: {verb} (try `help`)")),
    };

    Ok(command)
}

/// Collects `key=value` arguments; anything else is ignored.
fn parse_args(args: impl Iterator<Item = String>) -> BTreeMap<String, String> {
    args.filter_map(|arg| {
        arg.split_once('=')
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
    })
    .collect()
}

fn main() -> ExitCode {
    let args = parse_args(std::env::args().skip(1));

    let mut repl = match Repl::load(&args) {
        Ok(repl) => repl,
        Err(e) => {
            eprintln!("unit-converter: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    if write!(stdout, "{}", unit_converter::ui::render(&repl.session)).is_err() {
        return ExitCode::FAILURE;
    }

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        match repl.update(&line, &mut stdout) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                tracing::error!(error = %e, "failed to write output");
                return ExitCode::FAILURE;
            }
        }
    }

    tracing::info!(
        conversions = repl.session.history().len(),
        "unit converter stopped"
    );
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repl() -> Repl {
        Repl {
            session: SessionState::new(),
        }
    }

    fn feed(repl: &mut Repl, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            repl.update(line, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn number_line_converts_with_resolved_units() {
        let mut repl = repl();
        let out = feed(&mut repl, &["from km", "to mi", "10"]);
        assert!(out.contains("= 6.2137 Mile"));
        assert_eq!(repl.session.history_lines(), vec!["10 Kilometer = 6.2137 Mile"]);
    }

    #[test]
    fn invalid_value_prints_notice() {
        let mut repl = repl();
        let out = feed(&mut repl, &["value ten", "convert"]);
        assert!(out.contains("! Please enter a valid number and select units"));
        assert!(repl.session.history().is_empty());
    }

    #[test]
    fn unknown_unit_and_command_are_reported() {
        let mut repl = repl();
        let out = feed(&mut repl, &["from parsec", "frobnicate"]);
        assert!(out.contains("! unknown length unit: parsec"));
        assert!(out.contains("! unknown command: frobnicate"));
    }

    #[test]
    fn quit_ends_the_loop() {
        let mut repl = repl();
        let mut out = Vec::new();
        assert!(repl.update("history", &mut out).unwrap());
        assert!(!repl.update("quit", &mut out).unwrap());
    }

    #[test]
    fn json_lists_history() {
        let mut repl = repl();
        let out = feed(&mut repl, &["category time", "from hour", "to min", "2", "json"]);
        assert!(out.contains("\"input_value\": \"2\""));
        assert!(out.contains("\"result\": \"120.0000\""));
    }

    #[test]
    fn args_are_key_value_pairs() {
        let args = parse_args(
            ["category=time", "--verbose", "trace_level = debug"]
                .into_iter()
                .map(String::from),
        );
        assert_eq!(args.get("category").map(String::as_str), Some("time"));
        assert_eq!(args.get("trace_level").map(String::as_str), Some("debug"));
        assert_eq!(args.len(), 2);
    }
}
