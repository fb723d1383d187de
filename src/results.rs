//! The result log: one CSV record per run.
//!
//! ```text
//! Map,Strategy,Elapsed_s,Nodes_Explored,Path_Cost
//! base_case.txt,a_star,0.000012,6,4
//! ```

use crate::{experiment::RunReport, search::Strategy};

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// The header that is written when the log file is created
pub const HEADER: [&str; 5] = [
    "Map",
    "Strategy",
    "Elapsed_s",
    "Nodes_Explored",
    "Path_Cost",
];

/// One row of the result log
#[derive(Clone, Debug, PartialEq)]
pub struct RunRecord {
    /// the name of the map file
    pub map_name: String,
    /// the Strategy that was run
    pub strategy: Strategy,
    /// wall clock time of the search, in seconds
    pub elapsed_secs: f64,
    /// see [`SearchResult::nodes_explored`](crate::search::SearchResult::nodes_explored)
    pub nodes_explored: usize,
    /// see [`SearchResult::path_cost`](crate::search::SearchResult::path_cost)
    pub path_cost: isize,
}

impl RunRecord {
    /// Creates the record of `report`, which was run on the map `map_name`
    pub fn from_report(map_name: &str, report: &RunReport) -> RunRecord {
        RunRecord {
            map_name: map_name.to_string(),
            strategy: report.strategy(),
            elapsed_secs: report.elapsed().as_secs_f64(),
            nodes_explored: report.result().nodes_explored(),
            path_cost: report.result().path_cost(),
        }
    }

    fn fields(&self) -> [String; 5] {
        [
            self.map_name.clone(),
            self.strategy.name().to_string(),
            format!("{:.6}", self.elapsed_secs),
            self.nodes_explored.to_string(),
            self.path_cost.to_string(),
        ]
    }
}

/// Reasons why a record could not be appended
#[derive(Debug, thiserror::Error)]
pub enum ResultLogError {
    /// the file or its directory could not be created or opened
    #[error("could not open result log '{}': {source}", .path.display())]
    Io {
        /// the log file
        path: PathBuf,
        /// the underlying error
        source: std::io::Error,
    },
    /// writing the record failed
    #[error("could not write to result log: {0}")]
    Csv(#[from] csv::Error),
}

/// An append-only CSV file of [`RunRecord`]s
#[derive(Clone, Debug)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    /// A log at `path`. Nothing is touched until the first [`append`](ResultLog::append).
    pub fn new(path: impl Into<PathBuf>) -> ResultLog {
        ResultLog { path: path.into() }
    }

    /// The file this log writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `record`, creating the file (with [`HEADER`]) and its directory if necessary.
    pub fn append(&self, record: &RunRecord) -> Result<(), ResultLogError> {
        let io_err = |source| ResultLogError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(io_err)?;

        let mut writer = csv::Writer::from_writer(file);
        if is_new {
            writer.write_record(HEADER)?;
        }
        writer.write_record(record.fields())?;
        writer.flush().map_err(io_err)?;

        log::debug!(
            "appended {} on '{}' to '{}'",
            record.strategy,
            record.map_name,
            self.path.display()
        );
        Ok(())
    }
}
