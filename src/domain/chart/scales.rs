use super::ticks::{linear_ticks, time_ticks};
use super::value_objects::{CATEGORY10, ChartDimensions, Color};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::race_data::{PlottablePoint, RaceDuration};

/// Continuous linear map from a domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A zero-width domain maps everything to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Linear scale over epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub domain: (RaceDuration, RaceDuration),
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (RaceDuration, RaceDuration), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    fn as_linear(&self) -> LinearScale {
        LinearScale::new((self.domain.0.as_f64(), self.domain.1.as_f64()), self.range)
    }

    pub fn apply(&self, value: RaceDuration) -> f64 {
        self.as_linear().apply(value.as_f64())
    }

    pub fn ticks(&self, count: usize) -> Vec<RaceDuration> {
        time_ticks(self.domain.0.millis(), self.domain.1.millis(), count)
            .into_iter()
            .map(RaceDuration::from_millis)
            .collect()
    }

    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }
}

/// Categorical colour scale; keys take palette slots in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale<K> {
    domain: Vec<K>,
    palette: Vec<Color>,
}

impl<K: PartialEq + Copy> OrdinalScale<K> {
    pub fn new(palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() { CATEGORY10.to_vec() } else { palette };
        Self { domain: Vec::new(), palette }
    }

    pub fn from_keys(keys: impl IntoIterator<Item = K>, palette: Vec<Color>) -> Self {
        let mut scale = Self::new(palette);
        for key in keys {
            scale.register(key);
        }
        scale
    }

    /// Color for `key`, assigning the next palette slot to unseen keys.
    pub fn register(&mut self, key: K) -> Color {
        let index = match self.domain.iter().position(|k| *k == key) {
            Some(i) => i,
            None => {
                self.domain.push(key);
                self.domain.len() - 1
            }
        };
        self.palette[index % self.palette.len()]
    }

    pub fn get(&self, key: K) -> Option<Color> {
        self.domain
            .iter()
            .position(|k| *k == key)
            .map(|i| self.palette[i % self.palette.len()])
    }

    /// Like [`register`](Self::register) without growing the domain: an unseen
    /// key gets the slot it would be assigned next.
    pub fn lookup(&self, key: K) -> Color {
        let index = self.domain.iter().position(|k| *k == key).unwrap_or(self.domain.len());
        self.palette[index % self.palette.len()]
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }
}

/// `[min, max]` of `values`, `None` when empty.
pub fn extent<T: PartialOrd + Copy>(values: impl IntoIterator<Item = T>) -> Option<(T, T)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((if v < lo { v } else { lo }, if v > hi { v } else { hi })),
    })
}

/// x: `[min(year) - 1, max(year) + 1]` onto `[0, inner_width]`;
/// y: extent of durations onto `[0, inner_height]`.
pub fn compute_scales(
    points: &[PlottablePoint],
    dims: &ChartDimensions,
) -> AppResult<(LinearScale, TimeScale)> {
    let (min_year, max_year) =
        extent(points.iter().map(|p| p.year.value())).ok_or(AppError::EmptyDataset)?;
    let duration_extent = extent(points.iter().map(|p| p.duration)).ok_or(AppError::EmptyDataset)?;

    let x = LinearScale::new(
        (f64::from(min_year - 1), f64::from(max_year + 1)),
        (0.0, dims.inner_width()),
    );
    let y = TimeScale::new(duration_extent, (0.0, dims.inner_height()));
    Ok((x, y))
}
