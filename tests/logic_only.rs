#![cfg(feature = "logic-only")]

use doping_scatter_wasm::domain::chart::ticks::{linear_ticks, time_tick_step, time_ticks};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn linear_ticks_basic() {
    assert_eq!(linear_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(linear_ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    assert_eq!(linear_ticks(3.0, 3.0, 10), vec![3.0]);
}

#[wasm_bindgen_test(unsupported = test)]
fn time_ticks_pick_nearest_interval() {
    // 88 s over ten ticks sits between 5 s and 15 s, closer to 15 s
    assert_eq!(time_tick_step(2_112_000, 2_200_000, 10), 15_000);
    // ten minutes over ten ticks is exactly one minute
    assert_eq!(time_tick_step(0, 600_000, 10), 60_000);
    assert_eq!(time_ticks(0, 600_000, 10).len(), 11);
}
