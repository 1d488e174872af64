//! Session configuration with environment overrides.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid};
use crate::playback::DEFAULT_STEP_DELAY;

/// Environment variable overriding the grid row count.
pub const ROWS_ENV: &str = "PATHVIZ_ROWS";
/// Environment variable overriding the grid column count.
pub const COLS_ENV: &str = "PATHVIZ_COLS";
/// Environment variable overriding the start cell (`row,col`).
pub const START_ENV: &str = "PATHVIZ_START";
/// Environment variable overriding the finish cell (`row,col`).
pub const FINISH_ENV: &str = "PATHVIZ_FINISH";
/// Environment variable overriding the playback step delay in milliseconds.
pub const STEP_DELAY_ENV: &str = "PATHVIZ_STEP_DELAY_MS";

/// Grid shape, endpoints and replay speed for a visualisation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Cell,
    pub finish: Cell,
    pub step_delay: Duration,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 40,
            start: Cell::new(10, 5),
            finish: Cell::new(10, 35),
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}

impl VisualizerConfig {
    /// Defaults overridden by any `PATHVIZ_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by values returned from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(rows) = parse_var::<usize, _>(&lookup, ROWS_ENV)? {
            config.rows = rows;
        }
        if let Some(cols) = parse_var::<usize, _>(&lookup, COLS_ENV)? {
            config.cols = cols;
        }
        if let Some(start) = parse_var::<Cell, _>(&lookup, START_ENV)? {
            config.start = start;
        }
        if let Some(finish) = parse_var::<Cell, _>(&lookup, FINISH_ENV)? {
            config.finish = finish;
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, STEP_DELAY_ENV)? {
            config.step_delay = Duration::from_millis(ms);
        }
        Ok(config)
    }

    /// Build the open grid described by this configuration.
    pub fn build_grid(&self) -> Result<Grid> {
        Grid::new(self.rows, self.cols, self.start, self.finish)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    debug!("using {}={} from environment", key, raw);
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| Error::InvalidConfig {
            key: key.to_string(),
            value: raw,
        })
}
