// ── Diagnostic sink ──
//
// Fail-soft operations report every swallowed failure here exactly once,
// after the domain lock has been released.

use std::fmt;

use crate::config::Locale;
use crate::error::CoreError;
use crate::phrases::Phrases;

/// Public facade operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    ChannelProperties,
    ControlChannelProperties,
    UserId,
    RoleName,
}

impl Operation {
    /// Localized description of a failure of this operation.
    pub fn message(self, locale: Locale) -> &'static str {
        let phrases = Phrases::for_locale(locale);
        match self {
            Self::ChannelProperties => phrases.channel_properties_error,
            Self::ControlChannelProperties => phrases.control_channel_properties_error,
            Self::UserId => phrases.user_id_error,
            Self::RoleName => phrases.role_name_error,
        }
    }
}

/// One swallowed lookup failure.
pub struct LookupFailure<'a> {
    pub operation: Operation,
    /// The key the caller asked for (channel number, username, role id).
    pub key: &'a dyn fmt::Display,
    pub error: &'a CoreError,
    pub locale: Locale,
}

impl LookupFailure<'_> {
    pub fn message(&self) -> &'static str {
        self.operation.message(self.locale)
    }
}

impl fmt::Display for LookupFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.message(), self.key, self.error)
    }
}

/// Best-effort destination for lookup failures. Must not panic.
pub trait ErrorSink: Send + Sync {
    fn report(&self, failure: &LookupFailure<'_>);
}

/// Default sink: one `tracing` error event per failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, failure: &LookupFailure<'_>) {
        tracing::error!(
            operation = %failure.operation,
            key = %failure.key,
            error = %failure.error,
            "{}",
            failure.message()
        );
    }
}

/// Turns a typed lookup result into a fail-soft value, reporting errors.
#[derive(Clone, Copy)]
pub(crate) struct FailSoft<'a> {
    pub(crate) sink: &'a dyn ErrorSink,
    pub(crate) locale: Locale,
}

impl FailSoft<'_> {
    pub(crate) fn recover<T>(
        self,
        operation: Operation,
        key: &dyn fmt::Display,
        result: Result<T, CoreError>,
        default: impl FnOnce() -> T,
    ) -> T {
        result.unwrap_or_else(|error| {
            self.sink.report(&LookupFailure {
                operation,
                key,
                error: &error,
                locale: self.locale,
            });
            default()
        })
    }
}

/// Sink that keeps every report, for assertions.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSink {
    reports: std::sync::Mutex<Vec<(Operation, String)>>,
}

#[cfg(test)]
impl RecordingSink {
    pub(crate) fn reports(&self) -> Vec<(Operation, String)> {
        self.reports.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl ErrorSink for RecordingSink {
    fn report(&self, failure: &LookupFailure<'_>) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push((failure.operation, failure.key.to_string()));
        }
    }
}
