use leptos::html::Div;
use leptos::*;
use std::rc::Rc;

use crate::{
    application::ChartRenderer,
    config::ChartConfig,
    domain::{
        chart::{PointerPosition, TooltipContent, TooltipPresenter, TooltipState},
        logging::{LogComponent, get_logger},
    },
    infrastructure::{RaceDataClient, rendering::DomSvgSurface},
};

/// Tooltip presenter backed by a Leptos signal; the view renders the state.
#[derive(Clone, Copy)]
pub struct SignalTooltip {
    state: RwSignal<TooltipState>,
    node: NodeRef<Div>,
    offset_y: f64,
}

impl SignalTooltip {
    pub fn new(state: RwSignal<TooltipState>, node: NodeRef<Div>, offset_y: f64) -> Self {
        Self { state, node, offset_y }
    }
}

impl TooltipPresenter for SignalTooltip {
    fn show(&self, content: TooltipContent, at: PointerPosition) {
        // width is taken with the new content already in the element
        let width = self
            .node
            .get_untracked()
            .map(|div| {
                div.set_inner_html(&content.to_html());
                f64::from(div.offset_width())
            })
            .unwrap_or_default();
        let offset_y = self.offset_y;
        self.state.update(|s| s.show(content, at, width, offset_y));
    }

    fn hide(&self) {
        self.state.update(TooltipState::hide);
    }
}

/// Scatter plot page: title, chart container and the shared tooltip
#[component]
pub fn App() -> impl IntoView {
    let config = ChartConfig::default();
    let tooltip_state = create_rw_signal(TooltipState::default());
    let tooltip_ref = create_node_ref::<Div>();
    let presenter = SignalTooltip::new(tooltip_state, tooltip_ref, config.tooltip_offset_y);

    view! {
        <style>
            {r#"
            .scatter-app {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                text-align: center;
            }

            .container {
                display: inline-block;
                margin-top: 10px;
                box-shadow: 0 0 10px rgba(0, 0, 0, 0.3);
            }

            .dot {
                stroke: #000;
            }

            .tooltip {
                position: absolute;
                padding: 10px;
                font-size: 12px;
                text-align: left;
                background: rgba(0, 0, 128, 0.8);
                color: white;
                border-radius: 5px;
                pointer-events: none;
            }

            .status {
                font-size: 12px;
                color: #666;
            }
            "#}
        </style>
        <main class="scatter-app">
            <h1 id="title">"Doping in Professional Bicycle Racing"</h1>
            <h3>"35 Fastest times up Alpe d'Huez"</h3>
            <ChartContainer config=config presenter=presenter/>
        </main>
        <ChartTooltip state=tooltip_state target=tooltip_ref/>
    }
}

#[component]
fn ChartContainer(config: ChartConfig, presenter: SignalTooltip) -> impl IntoView {
    let container_ref = create_node_ref::<Div>();
    let (status, set_status) = create_signal("Loading dataset...".to_string());
    // listeners live as long as the surface
    let surface = store_value::<Option<DomSvgSurface>>(None);
    let started = store_value(false);

    create_effect(move |_| {
        let Some(container) = container_ref.get() else {
            return;
        };
        if started.get_value() {
            return;
        }
        started.set_value(true);

        let element: &web_sys::Element = &container;
        let element = element.clone();
        let config = config.clone();
        spawn_local(async move {
            let mut dom = match DomSvgSurface::from_element(element) {
                Ok(dom) => dom,
                Err(e) => {
                    get_logger().error(LogComponent::Presentation("ChartContainer"), &e.to_string());
                    set_status.set(format!("❌ {e}"));
                    return;
                }
            };
            let renderer = ChartRenderer::new(RaceDataClient::new(), config, Rc::new(presenter));
            match renderer.run(&mut dom).await {
                Some(rendered) => {
                    set_status.set(format!("{} riders", rendered.scene.dots.len()));
                    surface.set_value(Some(dom));
                }
                None => set_status.set("❌ Chart could not be rendered".to_string()),
            }
        });
    });

    view! {
        <div class="container" node_ref=container_ref></div>
        <div class="status">{move || status.get()}</div>
    }
}

#[component]
fn ChartTooltip(state: RwSignal<TooltipState>, target: NodeRef<Div>) -> impl IntoView {
    view! {
        <div
            id="tooltip"
            class="tooltip"
            node_ref=target
            data-year=move || state.with(|s| s.data_year().map(|y| y.to_string()))
            style:opacity=move || state.with(|s| s.opacity().to_string())
            style:left=move || state.with(|s| format!("{}px", s.left))
            style:top=move || state.with(|s| format!("{}px", s.top))
            inner_html=move || {
                state.with(|s| s.content.as_ref().map(TooltipContent::to_html).unwrap_or_default())
            }
        ></div>
    }
}
