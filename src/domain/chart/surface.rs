use super::axis::AxisModel;
use super::entities::{AxisLabel, ChartScene, DotModel, LegendEntry};
use super::tooltip::ChartInteraction;
use super::value_objects::ChartDimensions;
use crate::domain::errors::AppResult;
use std::rc::Rc;

/// Drawing backend for a [`ChartScene`].
///
/// Calls arrive in a fixed order: `prepare`, `render_axes`, `render_points`,
/// `attach_tooltip`, `render_label`, `render_legend`.
pub trait ChartSurface {
    fn prepare(&mut self, dimensions: &ChartDimensions) -> AppResult<()>;
    fn render_axes(&mut self, x_axis: &AxisModel, y_axis: &AxisModel) -> AppResult<()>;
    fn render_points(&mut self, dots: &[DotModel]) -> AppResult<()>;
    fn attach_tooltip(&mut self, interaction: Rc<ChartInteraction>) -> AppResult<()>;
    fn render_label(&mut self, label: &AxisLabel) -> AppResult<()>;
    fn render_legend(&mut self, legend: &[LegendEntry]) -> AppResult<()>;

    /// Issue every draw call for `scene`.
    fn draw(&mut self, scene: &ChartScene, interaction: Rc<ChartInteraction>) -> AppResult<()> {
        self.prepare(&scene.dimensions)?;
        self.render_axes(&scene.x_axis, &scene.y_axis)?;
        self.render_points(&scene.dots)?;
        self.attach_tooltip(interaction)?;
        self.render_label(&scene.y_label)?;
        self.render_legend(&scene.legend)
    }
}
