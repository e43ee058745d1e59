use crate::domain::chart::{PointerPosition, TooltipContent, TooltipPresenter, TooltipState};
use crate::domain::errors::{AppError, AppResult};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// `div#tooltip.tooltip` positioned absolutely over the page.
pub struct DomTooltip {
    element: HtmlElement,
    state: RefCell<TooltipState>,
    offset_y: f64,
}

impl DomTooltip {
    /// Reuse an existing `#tooltip` or append a fresh one to `<body>`.
    pub fn attach(document: &Document, offset_y: f64) -> AppResult<Self> {
        let element = match document.get_element_by_id("tooltip") {
            Some(existing) => existing,
            None => {
                let body = document
                    .body()
                    .ok_or_else(|| AppError::Rendering("document has no body".to_string()))?;
                let div = document
                    .create_element("div")
                    .map_err(|e| AppError::Rendering(format!("create tooltip: {e:?}")))?;
                div.set_id("tooltip");
                div.set_class_name("tooltip");
                body.append_child(&div)
                    .map_err(|e| AppError::Rendering(format!("append tooltip: {e:?}")))?;
                div
            }
        };
        let element = element
            .dyn_into::<HtmlElement>()
            .map_err(|_| AppError::Rendering("#tooltip is not an HTML element".to_string()))?;

        let tooltip = Self { element, state: RefCell::new(TooltipState::default()), offset_y };
        tooltip.apply(&TooltipState::default());
        Ok(tooltip)
    }

    pub fn attach_to_window(offset_y: f64) -> AppResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::Rendering("Document not available".to_string()))?;
        Self::attach(&document, offset_y)
    }

    fn apply(&self, state: &TooltipState) {
        let style = self.element.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("opacity", &state.opacity().to_string());
        let _ = style.set_property("left", &format!("{}px", state.left));
        let _ = style.set_property("top", &format!("{}px", state.top));
        match state.data_year() {
            Some(year) => {
                let _ = self.element.set_attribute("data-year", &year.to_string());
            }
            None => {
                let _ = self.element.remove_attribute("data-year");
            }
        }
    }
}

impl TooltipPresenter for DomTooltip {
    fn show(&self, content: TooltipContent, at: PointerPosition) {
        self.element.set_inner_html(&content.to_html());
        // measured with the new content in place
        let width = f64::from(self.element.offset_width());
        let mut state = self.state.borrow_mut();
        state.show(content, at, width, self.offset_y);
        self.apply(&state);
    }

    fn hide(&self) {
        let mut state = self.state.borrow_mut();
        state.hide();
        let _ = self.element.style().set_property("opacity", "0");
    }
}
