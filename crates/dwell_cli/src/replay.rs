//! Feeding a recorded trace through a panel

use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, warn};

use dwell_core::{BoxError, Dispatcher, RouteOutcome, WidgetInfo};

use crate::trace::{Sample, TraceSample};

/// What happened during a replay
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplaySummary {
    pub samples: usize,
    /// Committed presses, in order
    pub presses: Vec<WidgetInfo>,
    /// Times a pointer appeared after being absent
    pub tracking_started: usize,
    /// Times the tracker lost every pointer
    pub refocus_requests: usize,
}

/// Route every sample through `dispatcher`.
pub fn replay(dispatcher: &mut Dispatcher, samples: &[TraceSample]) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary {
        samples: samples.len(),
        ..Default::default()
    };
    let mut tracking = false;

    for sample in samples {
        let now = sample.timestamp();
        let outcome = match sample.sample() {
            Sample::Pointer(point) => {
                if !tracking {
                    info!("Tracking...");
                    summary.tracking_started += 1;
                    tracking = true;
                }
                dispatcher.route(Some(point), now)?
            }
            Sample::Absent => {
                tracking = false;
                dispatcher.route(None, now)?
            }
            Sample::Lost => {
                tracking = false;
                dispatcher.reset_all(now)?;
                warn!("Refocus please.");
                summary.refocus_requests += 1;
                RouteOutcome::default()
            }
        };

        if let Some(index) = outcome.hit {
            debug!("t={} ms over widget {}", now.as_millis(), index);
        }
        if let Some(info) = outcome.committed {
            info!("GUI update: {}", info);
            summary.presses.push(info);
        }
    }

    Ok(summary)
}

/// Announce sink writing each press to `out` as one JSON line.
pub fn json_lines<W>(mut out: W) -> impl FnMut(&WidgetInfo) -> std::result::Result<(), BoxError>
where
    W: Write + 'static,
{
    move |info: &WidgetInfo| {
        serde_json::to_writer(&mut out, info)?;
        writeln!(out)?;
        Ok(())
    }
}
