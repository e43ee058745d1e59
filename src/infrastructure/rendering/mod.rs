pub mod dom_surface;
pub mod dom_tooltip;
pub mod svg_markup;

pub use dom_surface::DomSvgSurface;
pub use dom_tooltip::DomTooltip;
pub use svg_markup::SvgMarkupSurface;
