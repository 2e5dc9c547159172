//! 变更通知：选择、生成状态与余额变化的事件接收端。
//!
//! Change-notification sinks.
//!
//! Workflow components raise [`StudioEvent`]s through an [`EventSink`]. The
//! display surface owns rendering; it only ever learns about state through
//! these events and the components' read accessors.
//!
//! | Sink | Description |
//! |------|-------------|
//! | [`NoopEventSink`] | Default, drops everything |
//! | [`InMemoryEventSink`] | Records events, for tests and debugging |
//! | [`BroadcastEventSink`] | Fans out to any number of async subscribers |
//! | [`CompositeEventSink`] | Forwards to several sinks |

use crate::types::StudioEvent;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Destination for change notifications.
///
/// `emit` is called while the emitting component still holds the lock on the
/// state it just changed, so events from one component arrive in the order
/// its state changed. It must not block, and must not call back into the
/// emitting component.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: StudioEvent);
}

/// No-op sink (default).
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: StudioEvent) {}
}

pub fn noop_sink() -> Arc<dyn EventSink> {
    Arc::new(NoopEventSink)
}

/// In-memory sink for testing.
#[derive(Default)]
pub struct InMemoryEventSink {
    events: RwLock<Vec<StudioEvent>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn events(&self) -> Vec<StudioEvent> {
        self.events
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
    pub fn clear(&self) {
        self.events
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
    pub fn len(&self) -> usize {
        self.events.read().unwrap_or_else(|e| e.into_inner()).len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for InMemoryEventSink {
    fn emit(&self, event: StudioEvent) {
        self.events
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

/// Broadcast sink: each subscriber gets every event emitted after it subscribed.
///
/// Slow subscribers lag and lose the oldest events rather than blocking emitters.
pub struct BroadcastEventSink {
    tx: broadcast::Sender<StudioEvent>,
}

impl BroadcastEventSink {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StudioEvent> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastEventSink {
    fn default() -> Self {
        Self::new(64)
    }
}

impl EventSink for BroadcastEventSink {
    fn emit(&self, event: StudioEvent) {
        // No subscribers is fine.
        let _ = self.tx.send(event);
    }
}

/// Composite sink for multiple destinations.
#[derive(Default)]
pub struct CompositeEventSink {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl CompositeEventSink {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl EventSink for CompositeEventSink {
    fn emit(&self, event: StudioEvent) {
        for s in &self.sinks {
            s.emit(event.clone());
        }
    }
}

/// Records like [`InMemoryEventSink`], but the first `emit` signals `entered`
/// and then sleeps, holding the emitter inside its notification.
#[cfg(test)]
pub(crate) struct StallingEventSink {
    inner: InMemoryEventSink,
    entered: std::sync::Mutex<Option<std::sync::mpsc::Sender<()>>>,
    stall: std::time::Duration,
}

#[cfg(test)]
impl StallingEventSink {
    pub(crate) fn new(
        stall: std::time::Duration,
    ) -> (Arc<Self>, std::sync::mpsc::Receiver<()>) {
        let (tx, rx) = std::sync::mpsc::channel();
        let sink = Arc::new(Self {
            inner: InMemoryEventSink::new(),
            entered: std::sync::Mutex::new(Some(tx)),
            stall,
        });
        (sink, rx)
    }

    pub(crate) fn events(&self) -> Vec<StudioEvent> {
        self.inner.events()
    }
}

#[cfg(test)]
impl EventSink for StallingEventSink {
    fn emit(&self, event: StudioEvent) {
        let first = self
            .entered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(tx) = first {
            let _ = tx.send(());
            std::thread::sleep(self.stall);
        }
        self.inner.emit(event);
    }
}
