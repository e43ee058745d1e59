use doping_scatter_wasm::domain::errors::AppError;
use doping_scatter_wasm::domain::race_data::{DopingFlag, RaceRecord, normalize, parse_race_time};
use quickcheck_macros::quickcheck;
use wasm_bindgen_test::*;

#[quickcheck]
fn well_formed_times_keep_their_digits(minutes: u8, seconds: u8) -> bool {
    let (m, s) = (u32::from(minutes % 60), u32::from(seconds % 60));
    let parsed = parse_race_time(&format!("{m}:{s}"));
    parsed.map(|d| d.format_minutes_seconds()) == Some(format!("{m:02}:{s:02}"))
}

#[quickcheck]
fn durations_are_ordered_like_seconds(a: (u8, u8), b: (u8, u8)) -> bool {
    let da = parse_race_time(&format!("{}:{}", a.0, a.1 % 60));
    let db = parse_race_time(&format!("{}:{}", b.0, b.1 % 60));
    let sa = u32::from(a.0) * 60 + u32::from(a.1 % 60);
    let sb = u32::from(b.0) * 60 + u32::from(b.1 % 60);
    match (da, db) {
        (Some(da), Some(db)) => (da < db) == (sa < sb),
        _ => false,
    }
}

#[quickcheck]
fn normalize_preserves_order_and_flags(docs: Vec<bool>) -> bool {
    let records: Vec<RaceRecord> = docs
        .iter()
        .enumerate()
        .map(|(i, doped)| {
            RaceRecord::new(
                &format!("Rider {i}"),
                "FRA",
                1990 + i as i32,
                "37:00",
                if *doped { "Positive test" } else { "" },
            )
        })
        .collect();
    let Ok(points) = normalize(&records) else {
        return false;
    };
    points.len() == records.len()
        && points.iter().zip(&docs).enumerate().all(|(i, (p, doped))| {
            p.record.name == format!("Rider {i}") && p.doping_flag == DopingFlag::from(*doped)
        })
}

#[wasm_bindgen_test(unsupported = test)]
fn iso_value_is_epoch_based() {
    let d = parse_race_time("36:40").unwrap();
    assert_eq!(d.to_iso_string(), "1970-01-01T00:36:40.000Z");
}

#[wasm_bindgen_test(unsupported = test)]
fn overflowing_minutes_carry_into_hours() {
    let d = parse_race_time("75:00").unwrap();
    assert_eq!(d.to_iso_string(), "1970-01-01T01:15:00.000Z");
    assert_eq!(d.format_minutes_seconds(), "15:00");
}

#[wasm_bindgen_test(unsupported = test)]
fn first_malformed_record_is_reported() {
    let records = vec![
        RaceRecord::new("A", "ESP", 1996, "38:00", ""),
        RaceRecord::new("B", "ESP", 1997, "", ""),
        RaceRecord::new("C", "ESP", 1998, "nope", ""),
    ];
    assert_eq!(
        normalize(&records),
        Err(AppError::MalformedTime { index: 1, raw: String::new() })
    );
}

#[wasm_bindgen_test(unsupported = test)]
fn empty_doping_string_means_clean() {
    let points = normalize(&[
        RaceRecord::new("A", "ESP", 1996, "38:00", ""),
        RaceRecord::new("B", "ESP", 1997, "38:10", "Suspended"),
    ])
    .unwrap();
    assert!(!points[0].is_alleged());
    assert_eq!(points[1].doping_description(), Some("Suspended"));
}
