use crate::domain::chart::{
    AxisLabel, AxisModel, ChartDimensions, ChartInteraction, ChartSurface, DotModel, LegendEntry,
    escape_html,
};
use crate::domain::errors::{AppError, AppResult};
use std::fmt::Write;
use std::rc::Rc;

/// Serializes the chart as standalone SVG markup, dots at their settled
/// positions. No interactivity.
#[derive(Debug, Default)]
pub struct SvgMarkupSurface {
    out: String,
    open: bool,
    listeners: usize,
}

impl SvgMarkupSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the document and return it.
    pub fn finish(mut self) -> AppResult<String> {
        if !self.open {
            return Err(AppError::Rendering("nothing was drawn".to_string()));
        }
        self.out.push_str("</g></svg>");
        Ok(self.out)
    }

    /// Dots that would receive hover handlers in an interactive backend.
    pub fn interactive_dots(&self) -> usize {
        self.listeners
    }

    fn ensure_open(&self) -> AppResult<()> {
        if self.open {
            Ok(())
        } else {
            Err(AppError::Rendering("surface not prepared".to_string()))
        }
    }

    fn write(&mut self, args: std::fmt::Arguments<'_>) -> AppResult<()> {
        self.out.write_fmt(args).map_err(|e| AppError::Rendering(e.to_string()))
    }

    fn write_axis(&mut self, axis: &AxisModel) -> AppResult<()> {
        let (_, _, _, anchor) = axis.tick_label_layout();
        self.write(format_args!(
            r#"<g class="axis" id="{}" transform="{}" fill="none" font-size="10" font-family="sans-serif" text-anchor="{}">"#,
            axis.id, axis.transform, anchor
        ))?;
        self.write(format_args!(
            r#"<path class="domain" stroke="currentColor" d="{}"/>"#,
            axis.domain_path()
        ))?;
        let (x2, y2) = axis.tick_line_end();
        let (tx, ty, dy, _) = axis.tick_label_layout();
        for tick in &axis.ticks {
            self.write(format_args!(
                r#"<g class="tick" opacity="1" transform="{}"><line stroke="currentColor" x2="{}" y2="{}"/><text fill="currentColor" x="{}" y="{}" dy="{}">{}</text></g>"#,
                axis.tick_transform(tick),
                x2,
                y2,
                tx,
                ty,
                dy,
                escape_html(&tick.label)
            ))?;
        }
        self.out.push_str("</g>");
        Ok(())
    }
}

impl ChartSurface for SvgMarkupSurface {
    fn prepare(&mut self, dimensions: &ChartDimensions) -> AppResult<()> {
        self.out.clear();
        self.write(format_args!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="chart" width="{}" height="{}"><g class="display" transform="{}">"#,
            dimensions.width,
            dimensions.height,
            dimensions.plot_transform()
        ))?;
        self.open = true;
        Ok(())
    }

    fn render_axes(&mut self, x_axis: &AxisModel, y_axis: &AxisModel) -> AppResult<()> {
        self.ensure_open()?;
        self.write_axis(x_axis)?;
        self.write_axis(y_axis)
    }

    fn render_points(&mut self, dots: &[DotModel]) -> AppResult<()> {
        self.ensure_open()?;
        for dot in dots {
            let g = dot.final_geometry();
            self.write(format_args!(
                r#"<circle class="dot" cx="{}" cy="{}" r="{}" data-xvalue="{}" data-yvalue="{}" style="fill: {};"/>"#,
                g.cx,
                g.cy,
                g.r,
                dot.data_xvalue(),
                dot.data_yvalue(),
                dot.fill.to_css()
            ))?;
        }
        Ok(())
    }

    fn attach_tooltip(&mut self, interaction: Rc<ChartInteraction>) -> AppResult<()> {
        self.listeners = interaction.point_count();
        Ok(())
    }

    fn render_label(&mut self, label: &AxisLabel) -> AppResult<()> {
        self.ensure_open()?;
        self.write(format_args!(
            r#"<text transform="{}" x="{}" y="{}" style="font-size: {}px;">{}</text>"#,
            label.transform(),
            label.x,
            label.y,
            label.font_size,
            escape_html(&label.text)
        ))
    }

    fn render_legend(&mut self, legend: &[LegendEntry]) -> AppResult<()> {
        self.ensure_open()?;
        for entry in legend {
            self.write(format_args!(
                r#"<g class="legend" id="legend" transform="{}"><rect x="{}" width="{}" height="{}" style="fill: {};"/><text x="{}" y="{}" dy=".35em" style="text-anchor: end;">{}</text></g>"#,
                entry.transform(),
                entry.swatch_x,
                entry.swatch_size,
                entry.swatch_size,
                entry.color.to_css(),
                entry.label_x,
                entry.label_y,
                escape_html(&entry.label())
            ))?;
        }
        Ok(())
    }
}
