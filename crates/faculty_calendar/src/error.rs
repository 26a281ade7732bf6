use chrono::NaiveDateTime;

/// Errors raised at the ingestion and configuration boundary.
///
/// The layout engine itself never fails: everything that reaches it has
/// already been validated by one of the constructors that return this type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid timestamp {value:?} for event {id:?}")]
    InvalidTimestamp { id: String, value: String },

    #[error("event {id:?} ends at {end} which is not after its start {start}")]
    InvalidRange {
        id: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown view mode: {0}")]
    UnknownViewMode(String),

    #[error("invalid working hours {start}..{end}")]
    InvalidWorkingHours { start: u32, end: u32 },

    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("malformed record #{index} ({}): {source}", .id.as_deref().unwrap_or("no id"))]
    MalformedRecord {
        index: usize,
        id: Option<String>,
        #[source]
        source: serde_json::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The id of the record this error refers to, if any.
    pub fn event_id(&self) -> Option<&str> {
        match self {
            Error::InvalidTimestamp { id, .. } | Error::InvalidRange { id, .. } => Some(id.as_str()),
            Error::MalformedRecord { id, .. } => id.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
