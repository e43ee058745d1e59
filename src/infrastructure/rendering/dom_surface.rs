use crate::domain::chart::{
    AxisLabel, AxisModel, ChartDimensions, ChartInteraction, ChartSurface, DotGeometry, DotModel,
    EntranceTransition, LegendEntry, PointerPosition,
};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use gloo::events::EventListener;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent, TouchEvent};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FRAME_MS: u32 = 16;

fn dom_err(context: &str) -> impl Fn(wasm_bindgen::JsValue) -> AppError + '_ {
    move |e| AppError::Rendering(format!("{context}: {e:?}"))
}

/// Pointer coordinates of a mouse or touch event.
fn pointer_of(event: &Event) -> PointerPosition {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return PointerPosition::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
    }
    if let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|t| t.changed_touches().get(0)) {
        return PointerPosition::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
    }
    PointerPosition::default()
}

/// Draws the scene as live SVG inside a container element.
///
/// Listeners are removed when the surface is dropped, so keep it alive for
/// as long as the chart should stay interactive.
pub struct DomSvgSurface {
    document: Document,
    container: Element,
    plot: Option<Element>,
    dots: Vec<Element>,
    listeners: Vec<EventListener>,
}

impl DomSvgSurface {
    /// Surface over the first element matching `selector`.
    pub fn mount(selector: &str) -> AppResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::Rendering("Document not available".to_string()))?;
        let container = document
            .query_selector(selector)
            .map_err(dom_err("bad container selector"))?
            .ok_or_else(|| AppError::Rendering(format!("no element matches {selector:?}")))?;
        Ok(Self::with_document(document, container))
    }

    pub fn from_element(container: Element) -> AppResult<Self> {
        let document = container
            .owner_document()
            .ok_or_else(|| AppError::Rendering("container is detached".to_string()))?;
        Ok(Self::with_document(document, container))
    }

    fn with_document(document: Document, container: Element) -> Self {
        Self { document, container, plot: None, dots: Vec::new(), listeners: Vec::new() }
    }

    fn create(&self, name: &str, attrs: &[(&str, String)]) -> AppResult<Element> {
        let el = self
            .document
            .create_element_ns(Some(SVG_NS), name)
            .map_err(dom_err("create_element_ns"))?;
        for (key, value) in attrs {
            el.set_attribute(key, value).map_err(dom_err("set_attribute"))?;
        }
        Ok(el)
    }

    fn plot(&self) -> AppResult<&Element> {
        self.plot.as_ref().ok_or_else(|| AppError::Rendering("surface not prepared".to_string()))
    }

    fn append(parent: &Element, child: &Element) -> AppResult<()> {
        parent.append_child(child).map(|_| ()).map_err(dom_err("append_child"))
    }

    fn render_axis(&self, axis: &AxisModel) -> AppResult<()> {
        let (tx, ty, dy, anchor) = axis.tick_label_layout();
        let group = self.create(
            "g",
            &[
                ("class", "axis".into()),
                ("id", axis.id.into()),
                ("transform", axis.transform.clone()),
                ("fill", "none".into()),
                ("font-size", "10".into()),
                ("font-family", "sans-serif".into()),
                ("text-anchor", anchor.into()),
            ],
        )?;
        let path = self.create(
            "path",
            &[("class", "domain".into()), ("stroke", "currentColor".into()), ("d", axis.domain_path())],
        )?;
        Self::append(&group, &path)?;

        let (x2, y2) = axis.tick_line_end();
        for tick in &axis.ticks {
            let g = self.create(
                "g",
                &[
                    ("class", "tick".into()),
                    ("opacity", "1".into()),
                    ("transform", axis.tick_transform(tick)),
                ],
            )?;
            let line = self.create(
                "line",
                &[("stroke", "currentColor".into()), ("x2", x2.to_string()), ("y2", y2.to_string())],
            )?;
            let text = self.create(
                "text",
                &[
                    ("fill", "currentColor".into()),
                    ("x", tx.to_string()),
                    ("y", ty.to_string()),
                    ("dy", dy.into()),
                ],
            )?;
            text.set_text_content(Some(&tick.label));
            Self::append(&g, &line)?;
            Self::append(&g, &text)?;
            Self::append(&group, &g)?;
        }
        Self::append(self.plot()?, &group)
    }

    fn set_geometry(el: &Element, g: DotGeometry) {
        let _ = el.set_attribute("cx", &g.cx.to_string());
        let _ = el.set_attribute("cy", &g.cy.to_string());
        let _ = el.set_attribute("r", &g.r.to_string());
    }

    /// Drive every entrance transition from one timer loop.
    fn animate(targets: Vec<(Element, EntranceTransition)>) {
        wasm_bindgen_futures::spawn_local(async move {
            let started = js_sys::Date::now();
            loop {
                let elapsed = js_sys::Date::now() - started;
                let mut settled = true;
                for (el, transition) in &targets {
                    Self::set_geometry(el, transition.state_at(elapsed));
                    settled &= transition.is_finished(elapsed);
                }
                if settled {
                    break;
                }
                TimeoutFuture::new(FRAME_MS).await;
            }
        });
    }
}

impl ChartSurface for DomSvgSurface {
    fn prepare(&mut self, dimensions: &ChartDimensions) -> AppResult<()> {
        let svg = self.create(
            "svg",
            &[
                ("id", "chart".into()),
                ("width", dimensions.width.to_string()),
                ("height", dimensions.height.to_string()),
            ],
        )?;
        let plot = self.create(
            "g",
            &[("class", "display".into()), ("transform", dimensions.plot_transform())],
        )?;
        Self::append(&svg, &plot)?;
        Self::append(&self.container, &svg)?;
        self.plot = Some(plot);
        Ok(())
    }

    fn render_axes(&mut self, x_axis: &AxisModel, y_axis: &AxisModel) -> AppResult<()> {
        self.render_axis(x_axis)?;
        self.render_axis(y_axis)
    }

    fn render_points(&mut self, dots: &[DotModel]) -> AppResult<()> {
        let mut targets = Vec::with_capacity(dots.len());
        for dot in dots {
            let start = dot.transition.from;
            let circle = self.create(
                "circle",
                &[
                    ("class", "dot".into()),
                    ("cx", start.cx.to_string()),
                    ("cy", start.cy.to_string()),
                    ("r", start.r.to_string()),
                    ("data-xvalue", dot.data_xvalue()),
                    ("data-yvalue", dot.data_yvalue()),
                    ("style", format!("fill: {};", dot.fill.to_css())),
                ],
            )?;
            Self::append(self.plot()?, &circle)?;
            targets.push((circle.clone(), dot.transition));
            self.dots.push(circle);
        }

        crate::log_debug!(
            LogComponent::Infrastructure("DomSvgSurface"),
            "animating {} dots",
            targets.len()
        );
        Self::animate(targets);
        Ok(())
    }

    fn attach_tooltip(&mut self, interaction: Rc<ChartInteraction>) -> AppResult<()> {
        for (index, dot) in self.dots.iter().enumerate() {
            for event in ["mouseover", "touchstart"] {
                let interaction = Rc::clone(&interaction);
                self.listeners.push(EventListener::new(dot, event, move |e| {
                    interaction.hover(index, pointer_of(e));
                }));
            }
            for event in ["mouseout", "touchend"] {
                let interaction = Rc::clone(&interaction);
                self.listeners.push(EventListener::new(dot, event, move |_| interaction.leave()));
            }
        }
        Ok(())
    }

    fn render_label(&mut self, label: &AxisLabel) -> AppResult<()> {
        let text = self.create(
            "text",
            &[
                ("transform", label.transform()),
                ("x", label.x.to_string()),
                ("y", label.y.to_string()),
                ("style", format!("font-size: {}px;", label.font_size)),
            ],
        )?;
        text.set_text_content(Some(&label.text));
        Self::append(self.plot()?, &text)
    }

    fn render_legend(&mut self, legend: &[LegendEntry]) -> AppResult<()> {
        for entry in legend {
            let group = self.create(
                "g",
                &[("class", "legend".into()), ("id", "legend".into()), ("transform", entry.transform())],
            )?;
            let rect = self.create(
                "rect",
                &[
                    ("x", entry.swatch_x.to_string()),
                    ("width", entry.swatch_size.to_string()),
                    ("height", entry.swatch_size.to_string()),
                    ("style", format!("fill: {};", entry.color.to_css())),
                ],
            )?;
            let text = self.create(
                "text",
                &[
                    ("x", entry.label_x.to_string()),
                    ("y", entry.label_y.to_string()),
                    ("dy", ".35em".into()),
                    ("style", "text-anchor: end;".into()),
                ],
            )?;
            text.set_text_content(Some(&entry.label()));
            Self::append(&group, &rect)?;
            Self::append(&group, &text)?;
            Self::append(self.plot()?, &group)?;
        }
        Ok(())
    }
}
