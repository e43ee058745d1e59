use super::value_objects::PointerPosition;
use crate::domain::race_data::PlottablePoint;
use std::cell::RefCell;
use std::rc::Rc;

/// Text shown for one rider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub year: i32,
    pub headline: String,
    pub detail: String,
    pub doping: Option<String>,
}

impl TooltipContent {
    pub fn from_point(point: &PlottablePoint) -> Self {
        Self {
            year: point.year.value(),
            headline: format!("{}: {}", point.record.name, point.record.nationality),
            detail: format!(
                "Year: {}, Time: {}",
                point.year.value(),
                point.duration.format_minutes_seconds()
            ),
            doping: point.doping_description().map(str::to_string),
        }
    }

    /// Markup for the tooltip element; rider text is escaped.
    pub fn to_html(&self) -> String {
        let mut html = format!("{}<br/>{}", escape_html(&self.headline), escape_html(&self.detail));
        if let Some(doping) = &self.doping {
            html.push_str("<br/><br/>");
            html.push_str(&escape_html(doping));
        }
        html
    }

    /// Same content with line breaks instead of markup.
    pub fn to_text(&self) -> String {
        match &self.doping {
            Some(doping) => format!("{}\n{}\n\n{}", self.headline, self.detail, doping),
            None => format!("{}\n{}", self.headline, self.detail),
        }
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// The one shared tooltip. Showing replaces whatever was shown before.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub content: Option<TooltipContent>,
    pub visible: bool,
    pub left: f64,
    pub top: f64,
}

impl TooltipState {
    /// Centre horizontally on the pointer and lift by `offset_y`.
    pub fn show(&mut self, content: TooltipContent, at: PointerPosition, width: f64, offset_y: f64) {
        self.left = at.x - width / 2.0;
        self.top = at.y + offset_y;
        self.content = Some(content);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn opacity(&self) -> f64 {
        if self.visible { 1.0 } else { 0.0 }
    }

    pub fn data_year(&self) -> Option<i32> {
        self.content.as_ref().map(|c| c.year)
    }
}

/// Seam between hover handlers and whatever displays the tooltip.
pub trait TooltipPresenter {
    fn show(&self, content: TooltipContent, at: PointerPosition);
    fn hide(&self);
}

/// In-memory presenter with a fixed element width.
#[derive(Debug, Default)]
pub struct TooltipModel {
    pub state: RefCell<TooltipState>,
    pub width: f64,
    pub offset_y: f64,
}

impl TooltipModel {
    pub fn new(width: f64, offset_y: f64) -> Self {
        Self { state: RefCell::new(TooltipState::default()), width, offset_y }
    }

    pub fn snapshot(&self) -> TooltipState {
        self.state.borrow().clone()
    }
}

impl TooltipPresenter for TooltipModel {
    fn show(&self, content: TooltipContent, at: PointerPosition) {
        self.state.borrow_mut().show(content, at, self.width, self.offset_y);
    }

    fn hide(&self) {
        self.state.borrow_mut().hide();
    }
}

/// Routes pointer events on plotted dots to the shared tooltip.
pub struct ChartInteraction {
    points: Vec<PlottablePoint>,
    tooltip: Rc<dyn TooltipPresenter>,
}

impl ChartInteraction {
    pub fn new(points: Vec<PlottablePoint>, tooltip: Rc<dyn TooltipPresenter>) -> Self {
        Self { points, tooltip }
    }

    /// Mouse-over or touch-start on dot `index`. Unknown indices hide the tooltip.
    pub fn hover(&self, index: usize, at: PointerPosition) {
        match self.points.get(index) {
            Some(point) => self.tooltip.show(TooltipContent::from_point(point), at),
            None => self.tooltip.hide(),
        }
    }

    /// Mouse-out or touch-end.
    pub fn leave(&self) {
        self.tooltip.hide();
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::race_data::{RaceRecord, normalize};

    fn points() -> Vec<PlottablePoint> {
        normalize(&[
            RaceRecord::new("Marco Pantani", "ITA", 1995, "36:50", "Alleged drug use"),
            RaceRecord::new("Lance <Armstrong>", "USA", 2004, "37:36", ""),
        ])
        .unwrap()
    }

    #[test]
    fn html_appends_allegation_and_escapes() {
        let pts = points();
        let first = TooltipContent::from_point(&pts[0]).to_html();
        assert_eq!(first, "Marco Pantani: ITA<br/>Year: 1995, Time: 36:50<br/><br/>Alleged drug use");
        let second = TooltipContent::from_point(&pts[1]).to_html();
        assert_eq!(second, "Lance &lt;Armstrong&gt;: USA<br/>Year: 2004, Time: 37:36");
    }

    #[test]
    fn position_centers_on_pointer() {
        let mut state = TooltipState::default();
        let content = TooltipContent::from_point(&points()[0]);
        state.show(content, PointerPosition::new(400.0, 300.0), 120.0, -110.0);
        assert_eq!((state.left, state.top), (340.0, 190.0));
        assert_eq!(state.opacity(), 1.0);
        state.hide();
        assert_eq!(state.opacity(), 0.0);
        assert_eq!(state.data_year(), Some(1995));
    }

    #[test]
    fn out_of_range_hover_hides() {
        let model = Rc::new(TooltipModel::new(100.0, -110.0));
        let interaction = ChartInteraction::new(points(), model.clone());
        interaction.hover(0, PointerPosition::new(10.0, 10.0));
        interaction.hover(9, PointerPosition::new(10.0, 10.0));
        assert!(!model.snapshot().visible);
    }
}
