//! Options for where maps are found and where results are written.

use std::path::{Path, PathBuf};

/// Options for configuring a lab session
///
/// Default options:
/// ```
/// # use grid_search_lab::config::LabConfig;
/// # use std::path::PathBuf;
/// assert_eq!(
///     LabConfig {
///         data_dir: PathBuf::from("data"),
///         results_path: PathBuf::from("results/experiments.csv"),
///         record_results: true,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabConfig {
    /// The directory that contains the map files (defaults to `data`)
    pub data_dir: PathBuf,
    /// The CSV file every run is appended to (defaults to `results/experiments.csv`)
    pub results_path: PathBuf,
    /// `true` (default): append a record to `results_path` after every run.
    ///
    /// `false`: runs are only reported, never written.
    pub record_results: bool,
}

impl LabConfig {
    /// Shorthand for a default config with a different data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> LabConfig {
        LabConfig {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Resolves the name of a map.
    ///
    /// A bare file name is looked up in the data directory, anything that contains a path
    /// separator is used as it is.
    /// ```
    /// # use grid_search_lab::config::LabConfig;
    /// # use std::path::PathBuf;
    /// let config = LabConfig::with_data_dir("maps");
    ///
    /// assert_eq!(config.map_path("base.txt"), PathBuf::from("maps").join("base.txt"));
    /// assert_eq!(config.map_path("other/base.txt"), PathBuf::from("other/base.txt"));
    /// ```
    pub fn map_path(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.components().count() > 1 || path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    /// The names of all `.txt` files in the data directory, sorted
    pub fn list_maps(&self) -> std::io::Result<Vec<String>> {
        let mut maps = vec![];
        for entry in std::fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "txt") {
                if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                    maps.push(name.to_string());
                }
            }
        }
        maps.sort();
        Ok(maps)
    }
}

impl Default for LabConfig {
    fn default() -> LabConfig {
        LabConfig {
            data_dir: PathBuf::from("data"),
            results_path: PathBuf::from("results/experiments.csv"),
            record_results: true,
        }
    }
}
