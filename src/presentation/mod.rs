pub mod wasm_api;

pub use wasm_api::{ScatterChartApi, mount_scatter_app};
