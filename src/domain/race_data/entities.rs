pub use super::value_objects::{DopingFlag, RaceDuration, Year};
use serde::{Deserialize, Serialize};

/// One ascent as published in the cyclist dataset.
///
/// `Year`, `Time`, `Name`, `Nationality` and `Doping` are required; a payload
/// missing any of them is rejected at the parse boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceRecord {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Place", default)]
    pub place: Option<u32>,
    #[serde(rename = "Seconds", default)]
    pub seconds: Option<u32>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(rename = "Doping")]
    pub doping: String,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
}

impl RaceRecord {
    pub fn new(name: &str, nationality: &str, year: i32, time: &str, doping: &str) -> Self {
        Self {
            time: time.to_string(),
            place: None,
            seconds: None,
            name: name.to_string(),
            year,
            nationality: nationality.to_string(),
            doping: doping.to_string(),
            url: None,
        }
    }
}

/// Domain entity - a record placed on the chart's axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlottablePoint {
    pub year: Year,
    pub duration: RaceDuration,
    #[serde(skip)]
    pub doping_flag: DopingFlag,
    pub record: RaceRecord,
}

impl PlottablePoint {
    pub fn is_alleged(&self) -> bool {
        self.doping_flag.is_alleged()
    }

    /// Free-text allegation, `None` when the rider is clean.
    pub fn doping_description(&self) -> Option<&str> {
        self.is_alleged().then_some(self.record.doping.as_str())
    }
}
