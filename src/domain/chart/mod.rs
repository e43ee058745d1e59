//! Chart aggregate: scales, axes, scene layout, transitions and the tooltip.

pub mod axis;
pub mod entities;
pub mod scales;
pub mod services;
pub mod surface;
pub mod ticks;
pub mod tooltip;
pub mod transition;
pub mod value_objects;

pub use axis::*;
pub use entities::*;
pub use scales::*;
pub use services::*;
pub use surface::*;
pub use tooltip::*;
pub use transition::*;
pub use value_objects::*;
