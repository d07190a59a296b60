use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const EARTHQUAKE_REPORT_CODE: i64 = 551;

pub const UNKNOWN_PLACE: &str = "不明";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub id: Option<Value>,
    pub earthquake: Option<RawEarthquake>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEarthquake {
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<String>,
    pub hypocenter: Option<RawHypocenter>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_scale: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub domestic_tsunami: Option<Tsunami>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHypocenter {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub magnitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub depth: Option<f64>,
}

// A leaf of the wrong type counts as missing so its default applies.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tsunami {
    None,
    #[default]
    Unknown,
    Checking,
    NonEffective,
    Watch,
    Warning,
    Other(String),
}

impl Tsunami {
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "None",
            Self::Unknown => "Unknown",
            Self::Checking => "Checking",
            Self::NonEffective => "NonEffective",
            Self::Watch => "Watch",
            Self::Warning => "Warning",
            Self::Other(value) => value,
        }
    }

    pub fn has_concern(&self) -> bool {
        !matches!(self, Self::None | Self::Unknown)
    }
}

impl From<String> for Tsunami {
    fn from(value: String) -> Self {
        match value.as_str() {
            "None" => Self::None,
            "Unknown" => Self::Unknown,
            "Checking" => Self::Checking,
            "NonEffective" => Self::NonEffective,
            "Watch" => Self::Watch,
            "Warning" => Self::Warning,
            _ => Self::Other(value),
        }
    }
}

impl From<Tsunami> for String {
    fn from(value: Tsunami) -> Self {
        match value {
            Tsunami::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

// Serialized with the legacy wire names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuakeRecord {
    pub id: Option<Value>,
    pub time: Option<String>,
    #[serde(rename = "hypocenter")]
    pub place: String,
    pub magnitude: f64,
    pub depth: f64,
    #[serde(rename = "maxScale")]
    pub scale: i64,
    #[serde(rename = "domesticTsunami")]
    pub tsunami: Tsunami,
}

impl From<RawEvent> for QuakeRecord {
    fn from(event: RawEvent) -> Self {
        let earthquake = event.earthquake.unwrap_or_default();
        let hypocenter = earthquake.hypocenter.unwrap_or_default();

        Self {
            id: event.id,
            time: earthquake.time,
            place: hypocenter
                .name
                .unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
            magnitude: hypocenter.magnitude.unwrap_or(0.0),
            depth: hypocenter.depth.unwrap_or(0.0),
            scale: earthquake.max_scale.unwrap_or(0),
            tsunami: earthquake.domestic_tsunami.unwrap_or_default(),
        }
    }
}
