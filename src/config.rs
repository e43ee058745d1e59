use crate::domain::chart::value_objects::{CATEGORY10, ChartDimensions, Color, Margin};
use crate::domain::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/FreeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

/// Tunables of the scatter plot. Every field has a default, so a host may
/// pass any subset (camelCase keys) from JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub dataset_url: String,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub dot_radius: f64,
    pub start_radius: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub stagger_ms: f64,
    pub transition_ms: f64,
    pub tooltip_offset_y: f64,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub legend_spacing: f64,
    pub legend_swatch: f64,
    pub y_label: String,
    pub palette: Vec<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            width: 1000.0,
            height: 500.0,
            margin: Margin::default(),
            dot_radius: 8.0,
            start_radius: 1.0,
            start_x: 0.0,
            start_y: 420.0,
            stagger_ms: 50.0,
            transition_ms: 200.0,
            tooltip_offset_y: -110.0,
            x_tick_count: 10,
            y_tick_count: 10,
            legend_spacing: 20.0,
            legend_swatch: 18.0,
            y_label: "Time in Minutes".to_string(),
            palette: CATEGORY10.iter().map(Color::to_css).collect(),
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        let dims = self.dimensions();
        if dims.inner_width() <= 0.0 || dims.inner_height() <= 0.0 {
            return Err(AppError::Config(format!(
                "plot area {}x{} leaves no room inside the margins",
                self.width, self.height
            )));
        }
        self.palette_colors().map(|_| ())
    }

    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::new(self.width, self.height, self.margin)
    }

    pub fn palette_colors(&self) -> AppResult<Vec<Color>> {
        self.palette
            .iter()
            .map(|css| Color::parse(css).ok_or_else(|| AppError::Config(format!("bad colour {css:?}"))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ChartConfig::from_json(r#"{"dotRadius": 5, "margin": {"left": 80}}"#).unwrap();
        assert_eq!(config.dot_radius, 5.0);
        assert_eq!(config.margin.left, 80.0);
        assert_eq!(config.margin.top, 20.0);
        assert_eq!(config.dataset_url, DEFAULT_DATASET_URL);
    }

    #[test]
    fn rejects_margins_wider_than_canvas() {
        let err = ChartConfig::from_json(r#"{"width": 50}"#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn rejects_unparseable_palette() {
        let err = ChartConfig::from_json(r#"{"palette": ["red"]}"#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
