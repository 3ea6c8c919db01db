use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One blood-pressure/heart-rate entry, serialized with the remote table's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Time", with = "hhmm")]
    pub time: NaiveTime,
    #[serde(rename = "P_upper")]
    pub systolic: i32,
    #[serde(rename = "P_lower")]
    pub diastolic: i32,
    #[serde(rename = "Heart_beat_rate")]
    pub heart_rate: i32,
    #[serde(rename = "Notes")]
    pub notes: String,
}

/// Body of `POST /add`.
#[derive(Debug, Deserialize)]
pub struct ReadingForm {
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub p_upper: i32,
    pub p_lower: i32,
    pub heart_beat_rate: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

impl From<ReadingForm> for Reading {
    fn from(form: ReadingForm) -> Self {
        Self {
            date: form.date,
            time: form.time,
            systolic: form.p_upper,
            diastolic: form.p_lower,
            heart_rate: form.heart_beat_rate,
            notes: form.comment.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddedResponse {
    pub added: String,
}

impl AddedResponse {
    pub fn ok() -> Self {
        Self {
            added: "ok".to_string(),
        }
    }
}

/// A row as the remote store returns it. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecordFields {
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Time")]
    pub time: Option<String>,
    #[serde(rename = "P_upper")]
    pub systolic: Option<f64>,
    #[serde(rename = "P_lower")]
    pub diastolic: Option<f64>,
    #[serde(rename = "Heart_beat_rate")]
    pub heart_rate: Option<f64>,
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    #[serde(default)]
    pub fields: RecordFields,
}

/// `HH:MM` on the wire. Seconds are accepted on input and dropped.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
            .map_err(|_| serde::de::Error::custom(format!("invalid time `{raw}`, expected HH:MM")))
    }
}
