use gloo::utils::format::JsValueSerdeExt;
use js_sys::Promise;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::ChartRenderer;
use crate::config::ChartConfig;
use crate::domain::{
    chart::TooltipModel,
    errors::AppError,
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::{
    RaceDataClient, SvgMarkupSurface, parse_dataset,
    rendering::{DomSvgSurface, DomTooltip},
};

/// WASM bridge for hosts that drive the chart from JavaScript
#[wasm_bindgen]
pub struct ScatterChartApi {
    container_selector: String,
    config: ChartConfig,
    mounted: Rc<RefCell<Option<DomSvgSurface>>>,
}

#[wasm_bindgen]
impl ScatterChartApi {
    #[wasm_bindgen(constructor)]
    pub fn new(container_selector: String) -> Self {
        Self {
            container_selector,
            config: ChartConfig::default(),
            mounted: Rc::new(RefCell::new(None)),
        }
    }

    /// Override defaults with a partial camelCase config object.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(mut self, config: JsValue) -> Result<ScatterChartApi, JsValue> {
        let config: ChartConfig =
            config.into_serde().map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Fetch and draw into the container. Resolves with the number of dots.
    pub fn render(&self, url: Option<String>) -> Promise {
        let selector = self.container_selector.clone();
        let config = self.config.clone();
        let mounted = Rc::clone(&self.mounted);

        future_to_promise(async move {
            let mut surface = DomSvgSurface::mount(&selector)?;
            let tooltip = Rc::new(DomTooltip::attach_to_window(config.tooltip_offset_y)?);
            let renderer = ChartRenderer::new(RaceDataClient::new(), config, tooltip);

            match renderer.render(url.as_deref(), &mut surface).await {
                Ok(rendered) => {
                    mounted.replace(Some(surface));
                    Ok(JsValue::from(rendered.scene.dots.len() as u32))
                }
                Err(e) => {
                    crate::log_error!(
                        LogComponent::Presentation("ScatterChartApi"),
                        "❌ render failed: {e}"
                    );
                    Err(e.into())
                }
            }
        })
    }

    /// Static SVG for an in-memory dataset, dots at their final positions.
    #[wasm_bindgen(js_name = renderMarkup)]
    pub fn render_markup(&self, dataset_json: &str) -> Result<String, JsValue> {
        let records = parse_dataset(dataset_json)?;
        let tooltip = Rc::new(TooltipModel::new(0.0, self.config.tooltip_offset_y));
        let renderer = ChartRenderer::new(RaceDataClient::new(), self.config.clone(), tooltip);
        let mut surface = SvgMarkupSurface::new();
        renderer.draw_records(&records, &mut surface)?;
        Ok(surface.finish()?)
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.borrow().is_some()
    }
}

/// Mount the Leptos page onto `<body>`.
#[wasm_bindgen(js_name = mountScatterApp)]
pub fn mount_scatter_app() {
    get_logger().info(LogComponent::Presentation("mount"), "🚀 Mounting scatter plot app");
    leptos::mount_to_body(crate::app::App);
}
