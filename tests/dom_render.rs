#![cfg(all(feature = "render", target_arch = "wasm32"))]

use doping_scatter_wasm::application::ChartRenderer;
use doping_scatter_wasm::config::ChartConfig;
use doping_scatter_wasm::domain::chart::{PointerPosition, TooltipPresenter};
use doping_scatter_wasm::infrastructure::{
    StaticRaceData, parse_dataset,
    rendering::{DomSvgSurface, DomTooltip},
};
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const DATASET: &str = r#"[
    {"Time": "36:40", "Name": "A", "Year": 1994, "Nationality": "ITA", "Doping": ""},
    {"Time": "35:12", "Name": "B", "Year": 2001, "Nationality": "USA", "Doping": "Admitted"}
]"#;

fn container() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_class_name("container");
    document.body().unwrap().append_child(&div).unwrap();
    div
}

#[wasm_bindgen_test]
fn draws_svg_into_container() {
    let host = container();
    let mut surface = DomSvgSurface::from_element(host.clone()).unwrap();
    let tooltip = Rc::new(DomTooltip::attach_to_window(-110.0).unwrap());
    let renderer = ChartRenderer::new(StaticRaceData::new(DATASET), ChartConfig::default(), tooltip);
    renderer.draw_records(&parse_dataset(DATASET).unwrap(), &mut surface).unwrap();

    assert!(host.query_selector("svg#chart g.display").unwrap().is_some());
    assert_eq!(host.query_selector_all("circle.dot").unwrap().length(), 2);
    assert_eq!(host.query_selector_all("g.legend").unwrap().length(), 2);

    let dot = host.query_selector("circle.dot").unwrap().unwrap();
    assert_eq!(dot.get_attribute("data-xvalue").as_deref(), Some("1994"));
    assert_eq!(dot.get_attribute("r").as_deref(), Some("1"));
}

#[wasm_bindgen_test]
fn tooltip_element_follows_presenter_calls() {
    let document = web_sys::window().unwrap().document().unwrap();
    let tooltip = DomTooltip::attach(&document, -110.0).unwrap();
    let points = doping_scatter_wasm::domain::race_data::normalize(&parse_dataset(DATASET).unwrap()).unwrap();
    let content = doping_scatter_wasm::domain::chart::TooltipContent::from_point(&points[1]);

    tooltip.show(content, PointerPosition::new(300.0, 300.0));
    let element = document.get_element_by_id("tooltip").unwrap();
    assert_eq!(element.get_attribute("data-year").as_deref(), Some("2001"));
    assert!(element.inner_html().contains("Admitted"));

    tooltip.hide();
    let style = element.get_attribute("style").unwrap_or_default();
    assert!(style.contains("opacity: 0"), "{style}");
}
