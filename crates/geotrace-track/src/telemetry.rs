//! Per-second GPS track between two known points.
//!
//! # Design
//! - One sample per whole second of video, from second 0 through the
//!   truncated duration, so a drive of `d` seconds yields `trunc(d) + 1` rows.
//! - Sample `i` sits at fraction `i / max(1, d)` of the way from start to end;
//!   durations under one second therefore stay at the start point.
//! - Negative or non-finite durations produce no samples.

use std::fmt::{self, Display, Formatter};

use tracing::warn;

use crate::error::TrackResult;
use crate::gps::GpsPoint;

/// First line of the rendered telemetry table.
pub const TELEMETRY_HEADER: &str = "Timestamp (sec), Latitude, Longitude\n";

/// One interpolated position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackSample {
    /// Whole seconds from the start of the video.
    pub second: u32,
    /// Estimated position at that second.
    pub position: GpsPoint,
}

impl Display for TrackSample {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {:.6}, {:.6}",
            self.second, self.position.lat, self.position.lon
        )
    }
}

/// Straight-line track covering a video of known length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearTrack {
    start: GpsPoint,
    end: GpsPoint,
    duration_secs: f64,
}

impl LinearTrack {
    /// Track from `start` to `end` over `duration_secs`.
    #[must_use]
    pub const fn new(start: GpsPoint, end: GpsPoint, duration_secs: f64) -> Self {
        Self {
            start,
            end,
            duration_secs,
        }
    }

    /// Number of samples the track yields.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_count(&self) -> u32 {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return 0;
        }
        // Clamped below u32::MAX and non-negative, so the cast is exact.
        let whole = self.duration_secs.trunc().min(f64::from(u32::MAX - 1)) as u32;
        whole + 1
    }

    /// Samples in time order.
    pub fn samples(&self) -> impl Iterator<Item = TrackSample> + '_ {
        let divisor = self.duration_secs.max(1.0);
        (0..self.sample_count()).map(move |second| TrackSample {
            second,
            position: self.start.lerp(self.end, f64::from(second) / divisor),
        })
    }

    /// Header plus one `second, lat, lon` line per sample, six decimals.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::from(TELEMETRY_HEADER);
        out.extend(self.samples().map(|sample| format!("{sample}\n")));
        out
    }
}

/// Telemetry table handed to the video analyzer.
///
/// Returns an empty string when either endpoint is missing or does not parse
/// as `lat,lon`; the analysis then runs without position data.
#[must_use]
pub fn telemetry_log(duration_secs: f64, start: &str, end: &str) -> String {
    if start.is_empty() || end.is_empty() {
        return String::new();
    }
    match parse_endpoints(start, end) {
        Ok((start, end)) => LinearTrack::new(start, end, duration_secs).to_csv(),
        Err(err) => {
            warn!(error = %err, "GPS coordinates must use the form 'lat,lon'");
            String::new()
        }
    }
}

fn parse_endpoints(start: &str, end: &str) -> TrackResult<(GpsPoint, GpsPoint)> {
    Ok((start.parse()?, end.parse()?))
}
