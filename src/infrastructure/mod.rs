pub mod http;
pub mod rendering;
pub mod services;

pub use http::{RaceDataClient, StaticRaceData, parse_dataset};
pub use rendering::{DomSvgSurface, DomTooltip, SvgMarkupSurface};
pub use services::{BrowserTimeProvider, ConsoleLogger};
