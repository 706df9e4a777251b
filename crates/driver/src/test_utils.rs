//! A `tracing-subscriber` layer that records emitted events, for asserting on pipeline logs.

use alloc::{format, string::String, sync::Arc, vec::Vec};
use spin::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, Layer};

/// Recorded events as `(level, rendered event)` pairs.
#[derive(Debug, Default, Clone)]
pub(crate) struct TraceStorage(Arc<Mutex<Vec<(Level, String)>>>);

impl TraceStorage {
    /// Returns the recorded events at `level`, oldest first.
    pub(crate) fn get_by_level(&self, level: Level) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

/// Pushes every event it sees into a [TraceStorage].
#[derive(Debug, Default)]
pub(crate) struct CollectingLayer {
    storage: TraceStorage,
}

impl CollectingLayer {
    pub(crate) const fn new(storage: TraceStorage) -> Self {
        Self { storage }
    }
}

impl<S: Subscriber> Layer<S> for CollectingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        self.storage.0.lock().push((level, format!("{event:?}")));
    }
}
