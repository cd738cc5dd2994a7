use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const E10: f64 = 7.071_067_811_865_475; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Upper bound on requested axis ticks; larger requests are clamped.
pub const MAX_TICK_COUNT: usize = 100;

/// Continuous linear mapping from a data domain onto an output range.
///
/// The domain is fixed once data is fitted; the range follows the current
/// canvas size and is the only part mutated by relayout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Creates a scale over `[domain_start, domain_end]` with unit range.
    ///
    /// A degenerate domain (start == end) is accepted; every value then maps to
    /// the middle of the range.
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    pub fn with_range(mut self, range_start: f64, range_end: f64) -> ChartResult<Self> {
        self.set_range(range_start, range_end)?;
        Ok(self)
    }

    pub fn set_range(&mut self, range_start: f64, range_end: f64) -> ChartResult<()> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(())
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Ok(self.domain_start);
        }
        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Nice tick values inside the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        ticks(self.domain_start, self.domain_end, count)
    }

    /// Spacing between the values returned by [`LinearScale::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        let (start, stop) = ordered(self.domain_start, self.domain_end);
        tick_step(start, stop, count)
    }
}

/// One labelled axis tick, positioned in range space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// Minimum and maximum of `values`.
pub fn extent(values: impl IntoIterator<Item = f64>) -> ChartResult<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;

    for value in values {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "extent values must be finite".to_owned(),
            ));
        }
        min = min.min(value);
        max = max.max(value);
        seen = true;
    }

    if !seen {
        return Err(ChartError::InvalidData(
            "extent cannot be computed from empty data".to_owned(),
        ));
    }
    Ok((min, max))
}

/// Signed tick increment: positive for steps >= 1, negative reciprocal for
/// fractional steps so multiples stay exact.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.clamp(1, MAX_TICK_COUNT) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let increment = tick_increment(start, stop, count);
    if increment < 0.0 {
        -1.0 / increment
    } else {
        increment
    }
}

#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (start, stop) = ordered(start, stop);
    let increment = tick_increment(start, stop, count);
    if increment == 0.0 || !increment.is_finite() {
        return Vec::new();
    }

    let mut values = Vec::new();
    if increment > 0.0 {
        let first = (start / increment).ceil();
        let last = (stop / increment).floor();
        let mut index = first;
        while index <= last {
            values.push(index * increment);
            index += 1.0;
        }
    } else {
        let inverse = -increment;
        let first = (start * inverse).ceil();
        let last = (stop * inverse).floor();
        let mut index = first;
        while index <= last {
            values.push(index / inverse);
            index += 1.0;
        }
    }

    if reverse {
        values.reverse();
    }
    values
}

/// Formats a tick value with thousands separators and as many decimals as the
/// tick step needs (`150000` becomes `150,000`, `0.25` stays `0.25`).
#[must_use]
pub fn format_tick_value(value: f64, step: f64) -> String {
    let precision = if step.is_finite() && step > 0.0 {
        (-step.abs().log10().floor()).max(0.0) as usize
    } else {
        0
    };

    let formatted = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let grouped = integer
        .parse::<u64>()
        .map_or_else(|_| integer.to_owned(), |whole| whole.to_formatted_string(&Locale::en));

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('−');
    }
    out.push_str(&grouped);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
