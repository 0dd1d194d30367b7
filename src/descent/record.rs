//! Reader for lander descent logs.
//!
//! A descent log is a plain text file with one record per line and seven
//! whitespace-separated numeric columns:
//!
//! ```text
//! time  height  descent_rate  throttle  proportional  integral  derivative
//! ```
//!
//! This is a separate dataset from the fall simulation: nothing in
//! `simulation` reads or writes it.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::{Result, SimError};

const COLUMNS: usize = 7;

/// Gain used by the descent autopilot when the log was recorded
pub const DEFAULT_KH: f64 = 21e-3;

/// Descent speed the autopilot aims for at height `h`: 0.5 + kh * h
pub fn target_descent_rate(kh: f64, h: f64) -> f64 {
    0.5 + kh * h
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentRecord {
    pub time: f64,
    pub height: f64,
    pub descent_rate: f64, // radial velocity, negative while descending
    pub throttle: f64,
    pub proportional: f64,
    pub integral: f64,
    pub derivative: f64,
}

#[derive(Debug, Clone, Default)]
pub struct DescentLog {
    pub records: Vec<DescentRecord>,
}

impl DescentLog {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut records = Vec::new();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let values = line
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<f64>().map_err(|e| SimError::Parse {
                        line: line_no,
                        msg: format!("`{tok}`: {e}"),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            let &[time, height, descent_rate, throttle, proportional, integral, derivative] = values.as_slice() else {
                return Err(SimError::Parse {
                    line: line_no,
                    msg: format!("expected {COLUMNS} columns, found {}", values.len()),
                });
            };

            records.push(DescentRecord {
                time,
                height,
                descent_rate,
                throttle,
                proportional,
                integral,
                derivative,
            });
        }

        debug!("descent log: {} records", records.len());
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Target descent speed for every record
    pub fn target_rates(&self, kh: f64) -> Vec<f64> {
        self.records.iter().map(|r| target_descent_rate(kh, r.height)).collect()
    }

    /// `None` for an empty log
    pub fn summary(&self, kh: f64) -> Option<DescentSummary> {
        let first = self.records.first()?;
        let last = self.records.last()?;

        // Descent speed is -descent_rate
        let max_tracking_error = self
            .records
            .iter()
            .map(|r| (-r.descent_rate - target_descent_rate(kh, r.height)).abs())
            .fold(0.0, f64::max);

        Some(DescentSummary {
            records: self.records.len(),
            duration: last.time - first.time,
            final_height: last.height,
            final_descent_rate: last.descent_rate,
            max_tracking_error,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescentSummary {
    pub records: usize,
    pub duration: f64,
    pub final_height: f64,
    pub final_descent_rate: f64,
    pub max_tracking_error: f64,
}

impl fmt::Display for DescentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records over {:.2} s, final height = {:.3} m, final descent rate = {:.3} m/s, max tracking error = {:.3} m/s",
            self.records, self.duration, self.final_height, self.final_descent_rate, self.max_tracking_error
        )
    }
}
