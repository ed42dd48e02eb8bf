//! History series and timestamp materialization.
//!
//! A history series arrives as `{start, last, interval, data}`. Timestamps are
//! implicit: the k-th sample sits at `start + k * interval`.

use crate::shared::Interval;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaterializeError {
    #[error("Timestamp out of range at step {step} ({interval} from {start})")]
    OutOfRange {
        step: usize,
        start: DateTime<FixedOffset>,
        interval: Interval,
    },
}

/// Options for [`materialize_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Move the anchor back one interval before emitting, for fixed
    /// sub-hourly intervals only. Off by default.
    pub inclusive: bool,
}

/// Expand `data` into `(timestamp, value)` pairs starting at `start`.
///
/// Output length always equals `data.len()`.
pub fn materialize<V: Clone>(
    start: DateTime<FixedOffset>,
    interval: &Interval,
    data: &[V],
) -> Result<Vec<(DateTime<FixedOffset>, V)>, MaterializeError> {
    materialize_with(start, interval, data, MaterializeOptions::default())
}

pub fn materialize_with<V: Clone>(
    start: DateTime<FixedOffset>,
    interval: &Interval,
    data: &[V],
    options: MaterializeOptions,
) -> Result<Vec<(DateTime<FixedOffset>, V)>, MaterializeError> {
    let out_of_range = |step| MaterializeError::OutOfRange {
        step,
        start,
        interval: *interval,
    };

    let anchor = if options.inclusive && interval.is_sub_hourly() {
        interval.rewind(start).ok_or_else(|| out_of_range(0))?
    } else {
        start
    };

    data.iter()
        .enumerate()
        .map(|(step, value)| {
            let ts = u32::try_from(step)
                .ok()
                .and_then(|k| interval.advance(anchor, k))
                .ok_or_else(|| out_of_range(step))?;
            Ok((ts, value.clone()))
        })
        .collect()
}

/// Raw history bundle for one series. `None` samples are gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySeries {
    pub start: DateTime<FixedOffset>,
    /// As reported by the server; not checked against `start` and `data`.
    pub last: DateTime<FixedOffset>,
    pub interval: Interval,
    pub data: Vec<Option<f64>>,
}

impl HistorySeries {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Timestamped samples.
    pub fn values(
        &self,
    ) -> Result<Vec<(DateTime<FixedOffset>, Option<f64>)>, MaterializeError> {
        materialize(self.start, &self.interval, &self.data)
    }

    pub fn values_with(
        &self,
        options: MaterializeOptions,
    ) -> Result<Vec<(DateTime<FixedOffset>, Option<f64>)>, MaterializeError> {
        materialize_with(self.start, &self.interval, &self.data, options)
    }

    /// Timestamp of sample `index`, whether or not it exists in `data`.
    pub fn timestamp_at(&self, index: usize) -> Option<DateTime<FixedOffset>> {
        self.interval.advance(self.start, u32::try_from(index).ok()?)
    }

    /// Timestamp of the final sample, derived from `start` and `interval`.
    pub fn projected_last(&self) -> Option<DateTime<FixedOffset>> {
        self.timestamp_at(self.data.len().checked_sub(1)?)
    }

    /// Whether the reported `last` matches the derived one.
    pub fn is_consistent(&self) -> bool {
        self.projected_last() == Some(self.last)
    }

    /// Samples with gaps removed.
    pub fn present_values(&self) -> Result<Vec<(DateTime<FixedOffset>, f64)>, MaterializeError> {
        Ok(self
            .values()?
            .into_iter()
            .filter_map(|(ts, v)| v.map(|v| (ts, v)))
            .collect())
    }
}
