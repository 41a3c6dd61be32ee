//! In-memory log capture for deterministic test assertions
//!
//! Installs a layer that records every event's fields into a shared buffer.
//! Because the global subscriber can only be set once per process, the
//! capture handle is a process-wide singleton shared by all tests; filter on
//! a unique `op` name per test to avoid cross-talk.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};

use opskit_core_types::schema;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One captured log event
#[derive(Clone, Debug)]
pub struct CapturedLog {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl CapturedLog {
    /// The canonical `op` field, if present
    pub fn op(&self) -> Option<&str> {
        self.fields.get(schema::FIELD_OP).map(String::as_str)
    }

    /// The canonical `event` field, if present
    pub fn event(&self) -> Option<&str> {
        self.fields.get(schema::FIELD_EVENT).map(String::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Default)]
struct FieldCollector(BTreeMap<String, String>);

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

struct CaptureLayer {
    logs: Arc<Mutex<Vec<CapturedLog>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        let captured = CapturedLog {
            level: *event.metadata().level(),
            fields: collector.0,
        };
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(captured);
        }
    }
}

/// Handle for inspecting captured logs in tests
#[derive(Clone)]
pub struct LogCapture {
    logs: Arc<Mutex<Vec<CapturedLog>>>,
}

impl LogCapture {
    /// Snapshot of all captured logs so far
    pub fn logs(&self) -> Vec<CapturedLog> {
        self.logs.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Logs whose canonical `op` field matches
    pub fn logs_for_op(&self, op: &str) -> Vec<CapturedLog> {
        self.logs()
            .into_iter()
            .filter(|l| l.op() == Some(op))
            .collect()
    }

    /// Whether any log matches the given op and event names
    pub fn contains(&self, op: &str, event: &str) -> bool {
        self.logs()
            .iter()
            .any(|l| l.op() == Some(op) && l.event() == Some(event))
    }

    /// Assert that a log with the given op and event names was captured
    ///
    /// # Panics
    ///
    /// Panics when no matching log exists.
    pub fn assert_logged(&self, op: &str, event: &str) {
        assert!(
            self.contains(op, event),
            "no captured log with op={op} event={event} among {} logs",
            self.logs().len()
        );
    }

    /// Drop everything captured so far
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

static GLOBAL_CAPTURE: OnceLock<LogCapture> = OnceLock::new();

/// Install the capture layer and return the shared capture handle
///
/// The first call installs the global subscriber; later calls return the
/// same handle.
pub fn init_test_capture() -> LogCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let logs = Arc::new(Mutex::new(Vec::new()));
            let layer = CaptureLayer { logs: logs.clone() };
            tracing_subscriber::registry().with(layer).init();
            LogCapture { logs }
        })
        .clone()
}
