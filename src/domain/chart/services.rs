use super::axis::AxisModel;
use super::entities::{AxisLabel, ChartScene, DotModel, LegendEntry};
use super::scales::{OrdinalScale, compute_scales};
use super::transition::{DotGeometry, EntranceTransition};
use crate::config::ChartConfig;
use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::race_data::{DopingFlag, PlottablePoint};

/// Domain service laying out the scatter plot
pub struct ChartLayoutService<'a> {
    config: &'a ChartConfig,
}

impl<'a> ChartLayoutService<'a> {
    pub fn new(config: &'a ChartConfig) -> Self {
        Self { config }
    }

    pub fn color_scale(&self, points: &[PlottablePoint]) -> AppResult<OrdinalScale<DopingFlag>> {
        Ok(OrdinalScale::from_keys(
            points.iter().map(|p| p.doping_flag),
            self.config.palette_colors()?,
        ))
    }

    /// Scales, axes, dots and legend for `points`.
    pub fn layout(&self, points: &[PlottablePoint]) -> AppResult<ChartScene> {
        let cfg = self.config;
        let dims = cfg.dimensions();
        let (x, y) = compute_scales(points, &dims)?;
        let color = self.color_scale(points)?;

        get_logger().debug(
            LogComponent::Domain("ChartLayout"),
            &format!(
                "x domain [{}, {}], y domain [{}, {}]",
                x.domain.0,
                x.domain.1,
                y.domain.0.format_minutes_seconds(),
                y.domain.1.format_minutes_seconds()
            ),
        );

        let start = DotGeometry::new(cfg.start_x, cfg.start_y, cfg.start_radius);
        let dots = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let target = DotGeometry::new(
                    x.apply(f64::from(point.year.value())),
                    y.apply(point.duration),
                    cfg.dot_radius,
                );
                DotModel {
                    index,
                    point: point.clone(),
                    fill: color.lookup(point.doping_flag),
                    transition: EntranceTransition::staggered(
                        index,
                        cfg.stagger_ms,
                        cfg.transition_ms,
                        start,
                        target,
                    ),
                }
            })
            .collect();

        let inner_w = dims.inner_width();
        let legend = color
            .domain()
            .iter()
            .enumerate()
            .map(|(i, flag)| LegendEntry {
                flag: *flag,
                color: color.lookup(*flag),
                offset_y: dims.inner_height() / 2.0 - i as f64 * cfg.legend_spacing,
                swatch_x: inner_w - cfg.legend_swatch,
                swatch_size: cfg.legend_swatch,
                label_x: inner_w - cfg.legend_swatch - 6.0,
                label_y: cfg.legend_swatch / 2.0,
            })
            .collect();

        Ok(ChartScene {
            dimensions: dims,
            x_axis: AxisModel::years(&x, dims.inner_height(), cfg.x_tick_count),
            y_axis: AxisModel::durations(&y, cfg.y_tick_count),
            dots,
            y_label: AxisLabel {
                text: cfg.y_label.clone(),
                x: -160.0,
                y: -44.0,
                rotate: -90.0,
                font_size: 18.0,
            },
            legend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::value_objects::CATEGORY10;
    use crate::domain::race_data::{RaceRecord, normalize};

    fn scene(records: &[RaceRecord]) -> ChartScene {
        let config = ChartConfig::default();
        let points = normalize(records).unwrap();
        ChartLayoutService::new(&config).layout(&points).unwrap()
    }

    #[test]
    fn legend_follows_encounter_order() {
        let s = scene(&[
            RaceRecord::new("A", "FRA", 1994, "36:40", ""),
            RaceRecord::new("B", "ITA", 2001, "35:12", "Admitted"),
        ]);
        assert_eq!(s.legend.len(), 2);
        assert_eq!(s.legend[0].flag, DopingFlag::Clean);
        assert_eq!(s.legend[0].color, CATEGORY10[0]);
        assert_eq!(s.legend[0].offset_y, 210.0);
        assert_eq!(s.legend[1].offset_y, 190.0);
        assert_eq!(s.legend[1].swatch_x, 902.0);
        assert_eq!(s.legend[1].label_x, 896.0);
    }

    #[test]
    fn dots_land_on_final_positions() {
        let s = scene(&[
            RaceRecord::new("A", "FRA", 1994, "36:40", ""),
            RaceRecord::new("B", "ITA", 2001, "35:12", "Admitted"),
        ]);
        let first = s.dots[0].final_geometry();
        // 1994 in [1993, 2002] over 920px
        assert!((first.cx - 920.0 / 9.0).abs() < 1e-9);
        assert_eq!(first.cy, 420.0);
        assert_eq!(s.dots[1].final_geometry().cy, 0.0);
        assert_eq!(s.dots[1].transition.delay_ms, 50.0);
        assert_ne!(s.dots[0].fill, s.dots[1].fill);
        assert_eq!(s.settle_ms(), 250.0);
    }

    #[test]
    fn single_flag_dataset_has_single_legend_entry() {
        let s = scene(&[RaceRecord::new("A", "FRA", 1994, "36:40", "")]);
        assert_eq!(s.legend.len(), 1);
        assert_eq!(s.dots[0].final_geometry().cy, 210.0);
    }
}
