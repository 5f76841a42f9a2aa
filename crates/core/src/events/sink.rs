//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::DomainEvent;

/// Receiver for goal domain events.
///
/// Services call `emit()` only after the mutation has been stored. `emit()`
/// must not block and cannot fail: delivery is best-effort and never changes
/// the result of the operation that produced the event.
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);

    /// Emit several events in order.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Sink that drops every event.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Sink that keeps every event in memory, for tests and diagnostics.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<DomainEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.guard().clone()
    }

    /// Collected events that concern `goal_id`, in emission order.
    pub fn events_for(&self, goal_id: &str) -> Vec<DomainEvent> {
        self.guard()
            .iter()
            .filter(|event| event.goal_id() == goal_id)
            .cloned()
            .collect()
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.guard().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn created(goal_id: &str) -> DomainEvent {
        DomainEvent::goal_created(
            goal_id.to_string(),
            "0xabc".to_string(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpDomainEventSink;
        sink.emit(created("g1"));
        sink.emit_batch(vec![
            created("g2"),
            DomainEvent::goal_achieved("g2".to_string(), dec!(8)),
        ]);
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockDomainEventSink::new();
        assert!(sink.is_empty());

        sink.emit(created("g1"));
        assert_eq!(sink.len(), 1);

        sink.emit_batch(vec![
            created("g2"),
            DomainEvent::goal_achieved("g2".to_string(), dec!(8)),
        ]);
        assert_eq!(sink.len(), 3);

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[2].goal_id(), "g2");

        assert_eq!(sink.events_for("g2").len(), 2);
        assert_eq!(sink.events_for("g1"), vec![created("g1")]);
        assert!(sink.events_for("g3").is_empty());
    }
}
