//! View events and observers

use crate::rank::RankMode;
use crate::types::CommentId;
use std::sync::mpsc::Sender;

/// Something a presentation layer may want to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The list was re-ranked with a new mode
    SortChanged(RankMode),
    /// The search query changed
    SearchChanged(String),
    /// A comment was selected, or the selection was cleared
    SelectionChanged(Option<CommentId>),
}

/// Receives view events
pub trait EventSink: Send {
    /// Deliver one event
    fn emit(&mut self, event: ViewEvent);
}

impl<F> EventSink for F
where
    F: FnMut(ViewEvent) + Send,
{
    fn emit(&mut self, event: ViewEvent) {
        self(event)
    }
}

impl EventSink for Sender<ViewEvent> {
    fn emit(&mut self, event: ViewEvent) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.send(event);
    }
}

/// Fan-out list of sinks
#[derive(Default)]
pub struct Observers {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Observers {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a sink
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Number of attached sinks
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Check if no sink is attached
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Deliver an event to every sink
    pub fn emit(&mut self, event: ViewEvent) {
        for sink in &mut self.sinks {
            sink.emit(event.clone());
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_channel_sink() {
        let (tx, rx) = mpsc::channel();
        let mut observers = Observers::new();
        observers.subscribe(tx);

        observers.emit(ViewEvent::SortChanged(RankMode::Stars));
        assert_eq!(rx.try_recv().unwrap(), ViewEvent::SortChanged(RankMode::Stars));
    }

    #[test]
    fn test_closure_sink_and_fan_out() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (tx, rx) = mpsc::channel();

        let mut observers = Observers::new();
        let log = Arc::clone(&seen);
        observers.subscribe(move |e: ViewEvent| log.lock().unwrap().push(e));
        observers.subscribe(tx);
        assert_eq!(observers.len(), 2);

        observers.emit(ViewEvent::SelectionChanged(None));
        assert_eq!(*seen.lock().unwrap(), vec![ViewEvent::SelectionChanged(None)]);
        assert_eq!(rx.try_recv().unwrap(), ViewEvent::SelectionChanged(None));
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut observers = Observers::new();
        observers.subscribe(tx);
        observers.emit(ViewEvent::SearchChanged("x".to_string()));
    }
}
