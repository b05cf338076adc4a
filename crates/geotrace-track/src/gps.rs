use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{TrackError, TrackResult};

/// Degrees added to both axes of the start point when only the start of a
/// drive is known.
pub const SIMULATED_END_OFFSET_DEG: f64 = 0.005;

/// A latitude/longitude pair in decimal degrees. Ranges are not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GpsPoint {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
}

impl GpsPoint {
    /// Point at `lat`, `lon`.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Point shifted by `delta` degrees on both axes.
    #[must_use]
    pub const fn offset(self, delta: f64) -> Self {
        Self::new(self.lat + delta, self.lon + delta)
    }

    /// Stand-in end of a drive that only reported its start.
    #[must_use]
    pub const fn simulated_end(self) -> Self {
        self.offset(SIMULATED_END_OFFSET_DEG)
    }

    /// Point at fraction `t` of the way from `self` to `end`.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub const fn lerp(self, end: Self, t: f64) -> Self {
        Self::new(
            self.lat + (end.lat - self.lat) * t,
            self.lon + (end.lon - self.lon) * t,
        )
    }
}

// Same `lat,lon` shape `FromStr` accepts.
impl Display for GpsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl FromStr for GpsPoint {
    type Err = TrackError;

    fn from_str(value: &str) -> TrackResult<Self> {
        let mut parts = value.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TrackError::Malformed {
                value: value.to_string(),
            });
        };
        Ok(Self::new(parse_component(lat)?, parse_component(lon)?))
    }
}

fn parse_component(raw: &str) -> TrackResult<f64> {
    let component = raw.trim();
    component
        .parse()
        .map_err(|source| TrackError::InvalidNumber {
            component: component.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lat_lon_with_surrounding_spaces() -> TrackResult<()> {
        let point: GpsPoint = " 37.7749 , -122.4194 ".parse()?;
        assert_eq!(point, GpsPoint::new(37.7749, -122.4194));
        Ok(())
    }

    #[test]
    fn wrong_component_count_is_malformed() {
        for input in ["37.7749", "1,2,3", ""] {
            assert_eq!(
                input.parse::<GpsPoint>(),
                Err(TrackError::Malformed {
                    value: input.to_string()
                })
            );
        }
    }

    #[test]
    fn non_numeric_component_is_reported() {
        let err = "37.7749,west".parse::<GpsPoint>().unwrap_err();
        assert!(matches!(
            err,
            TrackError::InvalidNumber { ref component, .. } if component == "west"
        ));
        assert_eq!(err.to_string(), "invalid GPS coordinate component");
    }

    #[test]
    fn simulated_end_shifts_both_axes() {
        let end = GpsPoint::new(10.0, 20.0).simulated_end();
        assert!((end.lat - 10.005).abs() < 1e-12);
        assert!((end.lon - 20.005).abs() < 1e-12);
    }

    #[test]
    fn display_round_trips_through_parse() -> TrackResult<()> {
        let point = GpsPoint::new(37.5, -122.25);
        assert_eq!(point.to_string(), "37.5,-122.25");
        assert_eq!(point.to_string().parse::<GpsPoint>()?, point);
        Ok(())
    }
}
