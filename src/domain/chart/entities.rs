use super::axis::AxisModel;
use super::transition::{DotGeometry, EntranceTransition};
use super::value_objects::{ChartDimensions, Color, translate};
use crate::domain::race_data::{DopingFlag, PlottablePoint};

/// One plotted circle.
#[derive(Debug, Clone, PartialEq)]
pub struct DotModel {
    pub index: usize,
    pub point: PlottablePoint,
    pub fill: Color,
    pub transition: EntranceTransition,
}

impl DotModel {
    pub fn final_geometry(&self) -> DotGeometry {
        self.transition.to
    }

    /// Raw year, exposed as `data-xvalue`.
    pub fn data_xvalue(&self) -> String {
        self.point.year.to_string()
    }

    /// ISO timestamp of the duration, exposed as `data-yvalue`.
    pub fn data_yvalue(&self) -> String {
        self.point.duration.to_iso_string()
    }
}

/// Rotated title next to the y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
    pub font_size: f64,
}

impl AxisLabel {
    pub fn transform(&self) -> String {
        format!("rotate({})", self.rotate)
    }
}

/// Swatch and caption for one colour-scale category.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub flag: DopingFlag,
    pub color: Color,
    pub offset_y: f64,
    pub swatch_x: f64,
    pub swatch_size: f64,
    pub label_x: f64,
    pub label_y: f64,
}

impl LegendEntry {
    pub fn transform(&self) -> String {
        translate(0.0, self.offset_y)
    }

    pub fn label(&self) -> String {
        self.flag.legend_label()
    }
}

/// Backend-neutral description of the whole chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub dimensions: ChartDimensions,
    pub x_axis: AxisModel,
    pub y_axis: AxisModel,
    pub dots: Vec<DotModel>,
    pub y_label: AxisLabel,
    pub legend: Vec<LegendEntry>,
}

impl ChartScene {
    pub fn points(&self) -> Vec<PlottablePoint> {
        self.dots.iter().map(|d| d.point.clone()).collect()
    }

    /// Time after which every entrance transition has settled.
    pub fn settle_ms(&self) -> f64 {
        self.dots.iter().map(|d| d.transition.end_ms()).fold(0.0, f64::max)
    }
}
