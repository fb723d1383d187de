//! The state machine behind the interactive front end.
//!
//! The whole state of a session is an [`AppState`] value. Every user action is a [`Command`],
//! and [`step`] turns the current state and a command into the next state:
//!
//! ```
//! use grid_search_lab::app::{step, AppState, Command};
//! use grid_search_lab::config::LabConfig;
//! # let mut config = LabConfig::with_data_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
//! # config.record_results = false;
//!
//! let state = AppState::default();
//! let state = step(state, "l base_case.txt".parse().unwrap(), &config);
//! assert!(state.map().is_some());
//!
//! let state = step(state, Command::RunAll, &config);
//! assert_eq!(state.last_runs().len(), 3);
//! ```

use crate::{
    config::LabConfig,
    experiment::{run_all_strategies, run_strategy, RunReport},
    grid::Grid,
    results::{ResultLog, RunRecord},
    search::Strategy,
};

use std::str::FromStr;

/// The key bindings of the command loop, as shown by [`Command::Help`]
pub const HELP: &str = "[l <file>] load | [1] Dijkstra | [2] A* | [3] Greedy | [a] all \
                        | [s] show | [m] maps | [q] quit";

/// A user action
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// load the map with the given name, see [`LabConfig::map_path`]
    Load(String),
    /// run one Strategy on the loaded map
    Run(Strategy),
    /// run every Strategy on the loaded map
    RunAll,
    /// draw the loaded map and the last Path
    Show,
    /// list the maps in the data directory
    ListMaps,
    /// show the key bindings
    Help,
    /// end the session
    Quit,
}

/// The error returned when a line of input is not a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    /// the line was empty
    #[error("no command given")]
    Empty,
    /// `l` without a file name
    #[error("'{0}' needs a map file name")]
    MissingArgument(String),
    /// the command is not known
    #[error("unknown command '{0}' (type 'h' for help)")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;
    fn from_str(s: &str) -> Result<Command, ParseCommandError> {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let rest = words.collect::<Vec<_>>().join(" ");

        match first.to_ascii_lowercase().as_str() {
            "l" | "load" => {
                if rest.is_empty() {
                    Err(ParseCommandError::MissingArgument(first.to_string()))
                } else {
                    Ok(Command::Load(rest))
                }
            }
            "1" => Ok(Command::Run(Strategy::Dijkstra)),
            "2" => Ok(Command::Run(Strategy::AStar)),
            "3" => Ok(Command::Run(Strategy::Greedy)),
            "r" | "run" => rest
                .parse()
                .map(Command::Run)
                .map_err(|_| ParseCommandError::Unknown(s.trim().to_string())),
            "a" | "all" => Ok(Command::RunAll),
            "s" | "show" => Ok(Command::Show),
            "m" | "maps" => Ok(Command::ListMaps),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ParseCommandError::Unknown(s.trim().to_string())),
        }
    }
}

/// A map that was loaded successfully
#[derive(Clone, Debug)]
pub struct LoadedMap {
    name: String,
    grid: Grid,
}

impl LoadedMap {
    /// The name the map was loaded by
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The loaded Grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

/// Everything a session knows
#[derive(Clone, Debug)]
pub struct AppState {
    map: Option<LoadedMap>,
    last_runs: Vec<RunReport>,
    message: String,
    quit: bool,
}

impl Default for AppState {
    fn default() -> AppState {
        AppState {
            map: None,
            last_runs: vec![],
            message: "Load a map with 'l <file>' ('m' lists the available maps)".to_string(),
            quit: false,
        }
    }
}

impl AppState {
    /// The loaded map, if any
    pub fn map(&self) -> Option<&LoadedMap> {
        self.map.as_ref()
    }

    /// The reports of the last run command. Empty after a new map was loaded.
    pub fn last_runs(&self) -> &[RunReport] {
        &self.last_runs
    }

    /// The status message produced by the last command
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `true` once [`Command::Quit`] was received
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Draws the loaded map with the first Path found by the last run command.
    pub fn render(&self) -> Option<String> {
        let map = self.map.as_ref()?;
        let path = self
            .last_runs
            .iter()
            .find_map(|report| report.result().path())
            .map_or(&[][..], |path| path.points());
        Some(map.grid.render_path(path))
    }
}

/// Applies `command` to `state` and returns the next state.
pub fn step(mut state: AppState, command: Command, config: &LabConfig) -> AppState {
    match command {
        Command::Load(name) => {
            let path = config.map_path(&name);
            state.last_runs.clear();
            match Grid::load(&path) {
                Ok(grid) => {
                    let (rows, cols) = grid.dimensions();
                    state.message = format!(
                        "Map '{}' loaded ({}x{}). Choose a strategy (1, 2, 3).",
                        name, rows, cols
                    );
                    state.map = Some(LoadedMap { name, grid });
                }
                Err(err) => {
                    log::warn!("{}", err);
                    state.message = format!("Could not load map: {}", err);
                    state.map = None;
                }
            }
        }
        Command::Run(strategy) => {
            state = run(state, config, |grid| vec![run_strategy(grid, strategy)]);
        }
        Command::RunAll => {
            state = run(state, config, run_all_strategies);
        }
        Command::Show => {
            state.message = state
                .render()
                .unwrap_or_else(|| "No map loaded.".to_string());
        }
        Command::ListMaps => {
            state.message = match config.list_maps() {
                Ok(maps) if maps.is_empty() => {
                    format!("No maps found in '{}'", config.data_dir.display())
                }
                Ok(maps) => format!(
                    "Maps in '{}': {}",
                    config.data_dir.display(),
                    maps.join(", ")
                ),
                Err(err) => format!(
                    "Could not list '{}': {}",
                    config.data_dir.display(),
                    err
                ),
            };
        }
        Command::Help => {
            state.message = HELP.to_string();
        }
        Command::Quit => {
            state.quit = true;
            state.message = "Bye.".to_string();
        }
    }
    state
}

fn run(
    mut state: AppState,
    config: &LabConfig,
    runner: impl FnOnce(&Grid) -> Vec<RunReport>,
) -> AppState {
    let Some(map) = state.map.as_ref() else {
        state.message = "Load a valid map (with S and E) first using 'l <file>'.".to_string();
        return state;
    };

    let reports = runner(&map.grid);
    let mut lines: Vec<String> = reports.iter().map(RunReport::to_string).collect();

    if config.record_results {
        let log = ResultLog::new(&config.results_path);
        for report in &reports {
            if let Err(err) = log.append(&RunRecord::from_report(&map.name, report)) {
                log::warn!("{}", err);
                lines.push(format!("Result not recorded: {}", err));
                break;
            }
        }
    }

    state.message = lines.join("\n");
    state.last_runs = reports;
    state
}
