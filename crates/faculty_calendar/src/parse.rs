//! Ingestion of booking records into validated [`Event`]s.
//!
//! Records come from the booking store as loosely typed JSON. Anything whose
//! dates cannot be read, or whose end is not after its start, is rejected
//! here with a typed error so the layout engine never sees it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{Category, Event};
use crate::timezone::TimeZoneChoice;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A timestamp as stored by the booking backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    /// Unix seconds.
    Unix(i64),
    /// RFC 3339 with an offset, or a naive local `YYYY-MM-DDTHH:MM[:SS]`.
    Text(String),
}

/// A booking record before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub start: RawTime,
    pub end: RawTime,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

/// Outcome of a batch ingestion.
#[derive(Debug, Default)]
pub struct Ingested {
    pub events: Vec<Event>,
    pub rejected: Vec<Error>,
}

/// Reads a raw timestamp as local wall-clock time in `tz`.
///
/// Strings with an explicit offset are converted; naive strings are taken to
/// already be in local time.
pub fn parse_time(raw: &RawTime, tz: &TimeZoneChoice) -> Option<NaiveDateTime> {
    match raw {
        RawTime::Unix(secs) => tz.localize_timestamp(*secs),
        RawTime::Text(text) => {
            let text = text.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                return Some(tz.localize(&dt.with_timezone(&Utc)));
            }

            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .or_else(|| {
                    NaiveDate::parse_from_str(text, "%Y-%m-%d")
                        .ok()
                        .map(|d| d.and_time(NaiveTime::MIN))
                })
        }
    }
}

fn raw_time_text(raw: &RawTime) -> String {
    match raw {
        RawTime::Unix(secs) => secs.to_string(),
        RawTime::Text(text) => text.clone(),
    }
}

impl RawEvent {
    /// Validates this record. A missing category means a meeting.
    pub fn into_event(self, tz: &TimeZoneChoice) -> Result<Event> {
        let start = parse_time(&self.start, tz).ok_or_else(|| Error::InvalidTimestamp {
            id: self.id.clone(),
            value: raw_time_text(&self.start),
        })?;
        let end = parse_time(&self.end, tz).ok_or_else(|| Error::InvalidTimestamp {
            id: self.id.clone(),
            value: raw_time_text(&self.end),
        })?;

        let category = match self.category.as_deref() {
            Some(c) => c.parse::<Category>()?,
            None => Category::Meeting,
        };

        let event = Event::new(self.id, self.title, start, end, category)?
            .with_attendees(self.attendees);
        Ok(match self.location.filter(|l| !l.trim().is_empty()) {
            Some(location) => event.with_location(location),
            None => event,
        })
    }
}

/// Validates a batch, keeping good records and collecting the rest.
pub fn ingest<I>(raws: I, tz: &TimeZoneChoice) -> Ingested
where
    I: IntoIterator<Item = RawEvent>,
{
    let mut ingested = Ingested::default();
    for raw in raws {
        ingested.push(raw.into_event(tz));
    }
    ingested.finish()
}

/// [`ingest`] over a JSON array of records.
///
/// Only a document that is not a JSON array fails as a whole. Each element
/// is decoded on its own, so a record with a null, fractional or missing
/// field is rejected as [`Error::MalformedRecord`] without losing the rest.
pub fn ingest_json(json: &str, tz: &TimeZoneChoice) -> Result<Ingested> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;

    let mut ingested = Ingested::default();
    for (index, value) in values.into_iter().enumerate() {
        let id = value
            .get("id")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);

        let record = serde_json::from_value::<RawEvent>(value)
            .map_err(|source| Error::MalformedRecord { index, id, source })
            .and_then(|raw| raw.into_event(tz));
        ingested.push(record);
    }
    Ok(ingested.finish())
}

impl Ingested {
    fn push(&mut self, record: Result<Event>) {
        match record {
            Ok(event) => self.events.push(event),
            Err(err) => {
                warn!("rejecting booking record: {err}");
                self.rejected.push(err);
            }
        }
    }

    fn finish(self) -> Self {
        debug!(
            "ingested {} events, rejected {}",
            self.events.len(),
            self.rejected.len()
        );
        self
    }
}
