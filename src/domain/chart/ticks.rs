//! Tick generation for linear and time axes.
//!
//! Linear ticks use 1, 2 or 5 times a power of ten so that roughly `count`
//! ticks cover the domain. Time ticks pick the calendar interval whose
//! length is closest to `span / count` and emit every aligned boundary.

use strum::{EnumIter, IntoEnumIterator};

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// `(i1, i2, inc)`; a negative `inc` means ticks are `i / -inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
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

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let raw = 10f64.powf(-power) / factor;
        i1 = (start * raw).round();
        i2 = (stop * raw).round();
        if i1 / raw < start {
            i1 += 1.0;
        }
        if i2 / raw > stop {
            i2 -= 1.0;
        }
        inc = -raw;
    } else {
        let raw = 10f64.powf(power) * factor;
        i1 = (start / raw).round();
        i2 = (stop / raw).round();
        if i1 * raw < start {
            i1 += 1.0;
        }
        if i2 * raw > stop {
            i2 -= 1.0;
        }
        inc = raw;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nicely rounded values inside `[start, stop]`.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let count = count as f64;
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0) as usize;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Distance between adjacent linear ticks, always positive for `start < stop`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

const SECOND: i64 = 1000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Candidate spacings for time axes, shortest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum TickInterval {
    OneSecond,
    FiveSeconds,
    FifteenSeconds,
    ThirtySeconds,
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    ThreeHours,
    SixHours,
    TwelveHours,
    OneDay,
}

impl TickInterval {
    pub fn duration_ms(&self) -> i64 {
        match self {
            Self::OneSecond => SECOND,
            Self::FiveSeconds => 5 * SECOND,
            Self::FifteenSeconds => 15 * SECOND,
            Self::ThirtySeconds => 30 * SECOND,
            Self::OneMinute => MINUTE,
            Self::FiveMinutes => 5 * MINUTE,
            Self::FifteenMinutes => 15 * MINUTE,
            Self::ThirtyMinutes => 30 * MINUTE,
            Self::OneHour => HOUR,
            Self::ThreeHours => 3 * HOUR,
            Self::SixHours => 6 * HOUR,
            Self::TwelveHours => 12 * HOUR,
            Self::OneDay => DAY,
        }
    }
}

/// Spacing of time ticks for a domain, in milliseconds.
pub fn time_tick_step(start: i64, stop: i64, count: usize) -> i64 {
    let target = (stop - start).abs() as f64 / count.max(1) as f64;
    let intervals: Vec<TickInterval> = TickInterval::iter().collect();
    let i = intervals.partition_point(|iv| (iv.duration_ms() as f64) <= target);

    if i == 0 {
        return (tick_step(start as f64, stop as f64, count).abs().max(1.0)) as i64;
    }
    if i == intervals.len() {
        let days = tick_step(start as f64 / DAY as f64, stop as f64 / DAY as f64, count)
            .abs()
            .max(1.0);
        return days as i64 * DAY;
    }

    let below = intervals[i - 1].duration_ms() as f64;
    let above = intervals[i].duration_ms() as f64;
    if target / below < above / target { below as i64 } else { above as i64 }
}

/// Aligned boundaries within `[start, stop]` (epoch milliseconds).
pub fn time_ticks(start: i64, stop: i64, count: usize) -> Vec<i64> {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    if lo == hi {
        return vec![lo];
    }
    let step = time_tick_step(lo, hi, count);
    let first = lo.div_euclid(step) * step + if lo.rem_euclid(step) == 0 { 0 } else { step };
    let mut ticks = Vec::new();
    let mut t = first;
    while t <= hi {
        ticks.push(t);
        t += step;
    }
    ticks
}
