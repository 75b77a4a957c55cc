use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random event ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload carried by a [`DomainEvent`].
///
/// The payload decides the routing key: the dispatcher looks up handlers by
/// the name returned from [`EventPayload::event_name`].
pub trait EventPayload: Send + Sync {
    /// Returns the event name used as the routing key.
    fn event_name(&self) -> &'static str;
}

/// An immutable record of a state transition.
///
/// Created at the moment of the transition and dropped once every handler
/// has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent<P> {
    event_id: EventId,
    occurred_at: DateTime<Utc>,
    payload: P,
}

impl<P: EventPayload> DomainEvent<P> {
    /// Wraps a payload, stamping it with a fresh ID and the current time.
    pub fn new(payload: P) -> Self {
        Self::at(payload, Utc::now())
    }

    /// Wraps a payload with an explicit occurrence time.
    pub fn at(payload: P, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: EventId::new(),
            occurred_at,
            payload,
        }
    }

    /// Returns the routing name of this event.
    pub fn name(&self) -> &'static str {
        self.payload.event_name()
    }
}

impl<P> DomainEvent<P> {
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Greeted {
        who: String,
    }

    impl EventPayload for Greeted {
        fn event_name(&self) -> &'static str {
            "Greeted"
        }
    }

    #[test]
    fn event_id_new_creates_unique_ids() {
        assert_ne!(EventId::new(), EventId::new());
    }

    #[test]
    fn event_name_comes_from_payload() {
        let event = DomainEvent::new(Greeted {
            who: "c1".to_string(),
        });
        assert_eq!(event.name(), "Greeted");
        assert_eq!(event.payload().who, "c1");
    }

    #[test]
    fn event_at_keeps_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let event = DomainEvent::at(
            Greeted {
                who: "c2".to_string(),
            },
            at,
        );
        assert_eq!(event.occurred_at(), at);
    }

    #[test]
    fn events_get_distinct_ids() {
        let a = DomainEvent::new(Greeted { who: "a".into() });
        let b = DomainEvent::new(Greeted { who: "a".into() });
        assert_ne!(a.event_id(), b.event_id());
    }

    #[test]
    fn event_serializes_with_payload() {
        let event = DomainEvent::new(Greeted {
            who: "c3".to_string(),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["payload"]["who"], "c3");
        assert!(json.get("occurred_at").is_some());
    }
}
