#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Mutex};

use roadmap_mocks::types::{RoadmapItem, RoadmapItemStatus};
use tracing::field::{Field, Visit};
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

pub fn item(id: &str, title: &str, status: RoadmapItemStatus) -> RoadmapItem {
    RoadmapItem::builder(id, title)
        .owner("X")
        .span("PI1", "PI2")
        .status(status)
        .build()
}

pub fn data_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    file.write_all(contents.as_bytes())
        .expect("temp file should be writable");
    file
}

#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
}

/// Collects every event emitted while the returned guard is alive on the
/// current thread.
pub fn capture_logs() -> (Arc<Mutex<Vec<CapturedEvent>>>, tracing::subscriber::DefaultGuard) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        events: events.clone(),
    });
    let guard = tracing::subscriber::set_default(subscriber);
    (events, guard)
}

pub fn events_at(events: &Arc<Mutex<Vec<CapturedEvent>>>, level: Level) -> Vec<CapturedEvent> {
    events
        .lock()
        .unwrap()
        .iter()
        .filter(|event| event.level == level)
        .cloned()
        .collect()
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
        });
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}
