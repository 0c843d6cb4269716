//! Recorded pointer traces
//!
//! A trace is JSON lines, one tracker sample per line:
//!
//! ```text
//! {"t": 0, "x": 640.0, "y": 60.0}     pointer at (640, 60)
//! {"t": 33}                           no pointer this tick
//! {"t": 66, "lost": true}             tracker lost every pointer
//! ```
//!
//! Blank lines are skipped.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use tracing::warn;

use dwell_core::{Point, Timestamp};

/// One line of a trace file
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct TraceSample {
    /// Milliseconds since the start of the recording
    pub t: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub lost: bool,
}

/// What the tracker reported
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    Pointer(Point),
    Absent,
    Lost,
}

impl TraceSample {
    pub fn timestamp(&self) -> Timestamp {
        Timestamp::from_millis(self.t)
    }

    pub fn sample(&self) -> Sample {
        if self.lost {
            return Sample::Lost;
        }
        match (self.x, self.y) {
            (Some(x), Some(y)) => Sample::Pointer(Point::new(x, y)),
            _ => Sample::Absent,
        }
    }
}

/// Read every sample from a JSON-lines trace.
pub fn read_trace(reader: impl BufRead) -> Result<Vec<TraceSample>> {
    let mut samples: Vec<TraceSample> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", number))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let sample: TraceSample = serde_json::from_str(line)
            .with_context(|| format!("Invalid sample on line {}", number))?;
        if sample.x.is_some() != sample.y.is_some() {
            anyhow::bail!("Sample on line {} has only one coordinate", number);
        }
        if let Some(previous) = samples.last() {
            if sample.t < previous.t {
                warn!(
                    "line {}: time goes backwards ({} ms after {} ms)",
                    number, sample.t, previous.t
                );
            }
        }
        samples.push(sample);
    }

    Ok(samples)
}
