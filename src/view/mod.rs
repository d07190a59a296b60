use chrono::{DateTime, NaiveDateTime};
use minijinja::{context, Environment};
use serde::Serialize;

use crate::quake::scale::{classify_scale, tsunami_label, ScaleClass};
use crate::quake::types::QuakeRecord;

const INDEX_TEMPLATE_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

pub const REFRESH_INTERVAL_SECS: u64 = 300;

const UPSTREAM_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
const DISPLAY_TIME_FORMAT: &str = "%Y/%m/%d %H:%M";
const UNKNOWN_TIME: &str = "不明";

#[derive(Debug, Clone, Serialize)]
struct QuakeCard {
    magnitude: String,
    scale: ScaleClass,
    time: String,
    place: String,
    depth: String,
    tsunami_notice: Option<String>,
}

impl QuakeCard {
    fn from_record(record: &QuakeRecord) -> Self {
        let tsunami_notice = record
            .tsunami
            .has_concern()
            .then(|| tsunami_label(&record.tsunami).to_string());

        Self {
            magnitude: format!("{:.1}", record.magnitude),
            scale: classify_scale(record.scale),
            time: record
                .time
                .as_deref()
                .map(format_time)
                .unwrap_or_else(|| UNKNOWN_TIME.to_string()),
            place: record.place.clone(),
            depth: format!("{}km", record.depth),
            tsunami_notice,
        }
    }
}

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render_index(&self, records: &[QuakeRecord]) -> Result<String, minijinja::Error> {
        let cards: Vec<QuakeCard> = records.iter().map(QuakeCard::from_record).collect();
        self.env.get_template(INDEX_TEMPLATE_NAME)?.render(context! {
            cards => cards,
            refresh_secs => REFRESH_INTERVAL_SECS,
        })
    }
}

fn format_time(raw: &str) -> String {
    // upstream sometimes appends milliseconds
    let trimmed = raw.split('.').next().unwrap_or(raw);
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, UPSTREAM_TIME_FORMAT) {
        return parsed.format(DISPLAY_TIME_FORMAT).to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_TIME_FORMAT).to_string();
    }
    raw.to_string()
}
