use clap::Parser;
use env_logger::Env;
use grid_search_lab::{
    app::{self, AppState, Command},
    config::LabConfig,
    search::Strategy,
};

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Compare Dijkstra, A* and Greedy Best-First search on ASCII grid maps.
///
/// Maps are text files with one row per line: `X` is an obstacle, `S` the start, `E` the goal
/// and anything else free space.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The map to run. A bare file name is looked up in the data directory.
    map: Option<String>,

    /// The strategy to run: dijkstra, a_star, greedy or all.
    #[arg(short, long, default_value = "all")]
    strategy: String,

    /// Print the map with the found path.
    #[arg(long, default_value_t = false)]
    show: bool,

    /// List the maps in the data directory and exit.
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Start the command loop instead of a single run.
    #[arg(short, long, default_value_t = false)]
    interactive: bool,

    /// The directory that contains the map files.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// The CSV file that results are appended to.
    #[arg(long)]
    results: Option<PathBuf>,

    /// Do not append results to the CSV file.
    #[arg(long, default_value_t = false)]
    no_record: bool,
}

impl Cli {
    fn config(&self) -> LabConfig {
        let mut config = LabConfig::default();
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(results) = &self.results {
            config.results_path = results.clone();
        }
        config.record_results = !self.no_record;
        config
    }

    fn run_command(&self) -> Result<Command, Box<dyn Error>> {
        if self.strategy.eq_ignore_ascii_case("all") {
            Ok(Command::RunAll)
        } else {
            Ok(Command::Run(self.strategy.parse::<Strategy>()?))
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        Env::default()
            .filter_or("GRID_LAB_LOG", "info")
            .write_style_or("GRID_LAB_LOG_STYLE", "auto"),
    )
    .init();

    let cli = Cli::parse();
    let config = cli.config();

    if cli.list {
        let state = app::step(AppState::default(), Command::ListMaps, &config);
        println!("{}", state.message());
        return Ok(());
    }
    if cli.interactive {
        return interactive(&config, cli.map.as_deref());
    }

    let Some(map) = cli.map.clone() else {
        return Err("no map given (try --list or --interactive)".into());
    };
    let run = cli.run_command()?;

    let state = app::step(AppState::default(), Command::Load(map), &config);
    if state.map().is_none() {
        return Err(state.message().into());
    }
    let state = app::step(state, run, &config);
    println!("{}", state.message());
    if cli.show {
        let state = app::step(state, Command::Show, &config);
        print!("{}", state.message());
    }
    Ok(())
}

fn interactive(config: &LabConfig, map: Option<&str>) -> Result<(), Box<dyn Error>> {
    let mut state = AppState::default();
    if let Some(map) = map {
        state = app::step(state, Command::Load(map.to_string()), config);
    }
    println!("{}", state.message());
    println!("{}", app::HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !state.should_quit() {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                state = app::step(state, command, config);
                println!("{}", state.message().trim_end());
            }
            Err(err) => println!("{}", err),
        }
    }
    Ok(())
}
