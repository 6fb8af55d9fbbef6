//! Test capture mode for deterministic logging assertions
//!
//! Installs a process-wide subscriber layer that records every event in
//! memory. Tests in one binary share the capture, so assertions should
//! filter on an op name or field value unique to the test.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;
use uicfg_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_EVENT, FIELD_OP};

/// One recorded event; every field value is kept in its rendered form
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    /// `start`, `end` or `end_error` for events from the `log_op_*` macros
    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }
}

#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl FieldVisitor {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0,
        };
        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Read handle over the shared event buffer
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events for `op` whose `field` equals `value`
    pub fn events_where(&self, op: &str, field: &str, value: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op) && e.field(field) == Some(value))
            .collect()
    }

    /// First `event` (start/end/end_error) of one operation instance
    pub fn find_event(
        &self,
        op: &str,
        field: &str,
        value: &str,
        event: &str,
    ) -> Option<CapturedEvent> {
        self.events_where(op, field, value)
            .into_iter()
            .find(|e| e.event() == Some(event))
    }

    /// Count `(start, end, end_error)` events for one operation instance
    ///
    /// The instance is picked out by a field unique to the caller, e.g. a
    /// component id or row id.
    pub fn boundary_counts(&self, op: &str, field: &str, value: &str) -> (usize, usize, usize) {
        let events = self.events_where(op, field, value);
        let count = |name: &str| events.iter().filter(|e| e.event() == Some(name)).count();
        (
            count(EVENT_START),
            count(EVENT_END),
            count(EVENT_END_ERROR),
        )
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture subscriber on first call and return its handle
///
/// # Example
///
/// ```
/// use uicfg_core::logging_facility::test_capture::init_test_capture;
/// use uicfg_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_operation", row_id = 7);
/// assert_eq!(capture.boundary_counts("doc_operation", "row_id", "7"), (1, 0, 0));
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let events = Arc::new(Mutex::new(Vec::new()));
            let layer = CaptureLayer {
                events: events.clone(),
            };
            tracing_subscriber::registry().with(layer).init();
            TestCapture { events }
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_event_accessors() {
        let fields = [("op", "update_ui_config"), ("event", "end"), ("row_id", "3")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let event = CapturedEvent {
            level: Level::INFO,
            fields,
        };

        assert_eq!(event.op(), Some("update_ui_config"));
        assert_eq!(event.event(), Some("end"));
        assert_eq!(event.field("row_id"), Some("3"));
        assert_eq!(event.field("missing"), None);
    }
}
