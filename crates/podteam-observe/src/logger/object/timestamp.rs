use std::fmt;

use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use crate::logger::object::LoggerTimeZone;

/// RFC3339 event timestamp at a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct LoggerTimestamp {
    offset: UtcOffset,
}

impl LoggerTimestamp {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Timestamp for `tz`, resolving the local offset now.
    pub fn for_zone(tz: LoggerTimeZone) -> Self {
        Self::new(tz.offset())
    }

    fn render(&self, at: OffsetDateTime) -> String {
        at.to_offset(self.offset)
            .format(&Rfc3339)
            .unwrap_or_else(|_| "<invalid-time>".to_string())
    }
}

impl FormatTime for LoggerTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{} ", self.render(OffsetDateTime::now_utc()))
    }
}
