use super::scales::{LinearScale, TimeScale};
use super::value_objects::translate;

pub const TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;
/// Half-pixel offset keeping one-pixel strokes crisp.
const CRISP: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Position along the axis in plot coordinates.
    pub offset: f64,
    pub label: String,
}

/// Everything needed to draw one axis group.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisModel {
    pub id: &'static str,
    pub orientation: AxisOrientation,
    pub transform: String,
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
}

impl AxisModel {
    /// Bottom axis with integer year labels, placed at the foot of the plot.
    pub fn years(x: &LinearScale, inner_height: f64, tick_count: usize) -> Self {
        let ticks = x
            .ticks(tick_count)
            .into_iter()
            .map(|year| AxisTick { offset: x.apply(year), label: format!("{}", year.round() as i64) })
            .collect();
        Self {
            id: "x-axis",
            orientation: AxisOrientation::Bottom,
            transform: translate(0.0, inner_height),
            range: x.range,
            ticks,
        }
    }

    /// Left axis with `MM:SS` labels.
    pub fn durations(y: &TimeScale, tick_count: usize) -> Self {
        let ticks = y
            .ticks(tick_count)
            .into_iter()
            .map(|d| AxisTick { offset: y.apply(d), label: d.format_minutes_seconds() })
            .collect();
        Self {
            id: "y-axis",
            orientation: AxisOrientation::Left,
            transform: translate(0.0, 0.0),
            range: y.range,
            ticks,
        }
    }

    /// Path of the axis line with its outer ticks.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = (self.range.0 + CRISP, self.range.1 + CRISP);
        match self.orientation {
            AxisOrientation::Bottom => format!("M{r0},{TICK_SIZE}V{CRISP}H{r1}V{TICK_SIZE}"),
            AxisOrientation::Left => format!("M{},{r0}H{CRISP}V{r1}H{}", -TICK_SIZE, -TICK_SIZE),
        }
    }

    pub fn tick_transform(&self, tick: &AxisTick) -> String {
        match self.orientation {
            AxisOrientation::Bottom => translate(tick.offset + CRISP, 0.0),
            AxisOrientation::Left => translate(0.0, tick.offset + CRISP),
        }
    }

    /// `(x2, y2)` of the tick line.
    pub fn tick_line_end(&self) -> (f64, f64) {
        match self.orientation {
            AxisOrientation::Bottom => (0.0, TICK_SIZE),
            AxisOrientation::Left => (-TICK_SIZE, 0.0),
        }
    }

    /// `(x, y, dy, text-anchor)` of the tick label.
    pub fn tick_label_layout(&self) -> (f64, f64, &'static str, &'static str) {
        let spacing = TICK_SIZE + TICK_PADDING;
        match self.orientation {
            AxisOrientation::Bottom => (0.0, spacing, "0.71em", "middle"),
            AxisOrientation::Left => (-spacing, 0.0, "0.32em", "end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::race_data::RaceDuration;

    #[test]
    fn year_axis_labels_are_integers() {
        let x = LinearScale::new((1993.0, 2002.0), (0.0, 920.0));
        let axis = AxisModel::years(&x, 420.0, 10);
        assert_eq!(axis.transform, "translate(0, 420)");
        assert_eq!(axis.ticks.first().map(|t| t.label.as_str()), Some("1993"));
        assert!(axis.ticks.iter().all(|t| !t.label.contains('.')));
    }

    #[test]
    fn duration_axis_labels_use_minutes_and_seconds() {
        let y = TimeScale::new(
            (RaceDuration::from_minutes_seconds(36, 45), RaceDuration::from_minutes_seconds(39, 45)),
            (0.0, 420.0),
        );
        let axis = AxisModel::durations(&y, 10);
        assert_eq!(axis.id, "y-axis");
        assert_eq!(axis.ticks[0].label, "36:45");
        assert_eq!(axis.ticks[0].offset, 0.0);
        assert_eq!(axis.ticks.last().map(|t| t.label.as_str()), Some("39:45"));
    }

    #[test]
    fn bottom_domain_path_spans_range() {
        let x = LinearScale::new((0.0, 1.0), (0.0, 920.0));
        let axis = AxisModel::years(&x, 420.0, 2);
        assert_eq!(axis.domain_path(), "M0.5,6V0.5H920.5V6");
    }
}
