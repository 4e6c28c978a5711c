use chrono::{SecondsFormat, Utc};

/// Current time as stored in createAt/updateAt, e.g. `2024-05-01T09:30:00.123Z`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
