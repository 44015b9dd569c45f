//! Broadcast registry tests: ordering, idempotence, snapshotting, and
//! failure isolation.

use herald::listeners::FnListener;
use herald::testing::{FailingListener, PanickingListener, RecordingListener};
use herald::{BoxError, BroadcastRegistry, Event, Listener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

mod common;
use common::{DeliveryLog, NamedListener, Note};

fn note_event(name: &str, content: &str) -> Event<Note> {
    Event::new(
        name,
        Note {
            content: content.to_string(),
        },
    )
}

#[test]
fn notifications_reach_subscribers_in_order() {
    let deliveries: DeliveryLog = Arc::new(Mutex::new(Vec::new()));
    let registry = BroadcastRegistry::<Note>::new();
    let dat: Arc<dyn Listener<Note>> = Arc::new(NamedListener::new("Dat", deliveries.clone()));
    let cuong: Arc<dyn Listener<Note>> = Arc::new(NamedListener::new("Cuong", deliveries.clone()));
    registry.subscribe(dat.clone());
    registry.subscribe(cuong.clone());

    let report = registry.broadcast(&note_event("new_noti", "Hello"));
    assert!(report.is_clean());
    assert_eq!(report.delivered, 2);
    {
        let log = deliveries.lock().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(
            log[0],
            ("Dat".into(), "new_noti".into(), "Hello".into()),
            "First subscriber receives first"
        );
        assert_eq!(log[1], ("Cuong".into(), "new_noti".into(), "Hello".into()));
    }

    assert!(registry.unsubscribe(&dat));
    deliveries.lock().unwrap().clear();

    let report = registry.broadcast(&note_event("new_noti", "Hello"));
    assert_eq!(report.delivered, 1);
    let log = deliveries.lock().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].0, "Cuong");
}

#[test]
fn three_listeners_observe_subscription_order() {
    let deliveries: DeliveryLog = Arc::new(Mutex::new(Vec::new()));
    let registry = BroadcastRegistry::<Note>::new();
    for name in ["L1", "L2", "L3"] {
        registry.subscribe(Arc::new(NamedListener::new(name, deliveries.clone())));
    }

    registry.broadcast(&note_event("e", "x"));

    let order: Vec<String> = deliveries.lock().unwrap().iter().map(|d| d.0.clone()).collect();
    assert_eq!(order, ["L1", "L2", "L3"]);
}

#[test]
fn subscribe_is_idempotent_by_identity() {
    let registry = BroadcastRegistry::<Note>::new();
    let listener = Arc::new(RecordingListener::<Note>::named("solo"));
    assert!(registry.subscribe(listener.clone()));
    assert!(!registry.subscribe(listener.clone()), "Second subscribe is a no-op");
    assert_eq!(registry.len(), 1);

    registry.broadcast(&note_event("e", "x"));
    assert_eq!(listener.count(), 1, "Exactly one delivery per broadcast");
}

#[test]
fn identity_is_the_shared_allocation() {
    // Two separately allocated listeners are distinct subscribers even if
    // they look alike.
    let registry = BroadcastRegistry::<Note>::new();
    let a = Arc::new(RecordingListener::<Note>::named("twin"));
    let b = Arc::new(RecordingListener::<Note>::named("twin"));
    registry.subscribe(a.clone());
    registry.subscribe(b.clone());
    assert_eq!(registry.len(), 2);

    registry.broadcast(&note_event("e", "x"));
    assert_eq!(a.count(), 1);
    assert_eq!(b.count(), 1);
}

#[test]
fn unsubscribing_an_unknown_listener_is_a_noop() {
    let registry = BroadcastRegistry::<Note>::new();
    let stranger: Arc<dyn Listener<Note>> = Arc::new(RecordingListener::<Note>::named("stranger"));
    assert!(!registry.unsubscribe(&stranger));
}

#[test]
fn broadcast_with_no_subscribers_is_clean() {
    let registry = BroadcastRegistry::<Note>::new();
    assert!(registry.is_empty());

    let report = registry.broadcast(&note_event("e", "x"));
    assert!(report.is_clean());
    assert_eq!(report.attempted(), 0);
}

#[test]
fn failing_listener_does_not_deny_the_rest() {
    let registry = BroadcastRegistry::<Note>::new();
    let first = Arc::new(RecordingListener::<Note>::named("first"));
    let last = Arc::new(RecordingListener::<Note>::named("last"));
    registry.subscribe(first.clone());
    registry.subscribe(Arc::new(FailingListener::new("flaky", "update exploded")));
    registry.subscribe(last.clone());

    let report = registry.broadcast(&note_event("e", "x"));

    assert_eq!(first.count(), 1);
    assert_eq!(last.count(), 1, "Listeners after the failure still receive the event");
    assert_eq!(report.delivered, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(report.failures[0].listener, "flaky");
    assert_eq!(report.failures[0].error.to_string(), "update exploded");
    assert_eq!(report.attempted(), 3);
}

#[test]
fn panicking_listener_is_contained() {
    let registry = BroadcastRegistry::<Note>::new();
    let survivor = Arc::new(RecordingListener::<Note>::named("survivor"));
    registry.subscribe(Arc::new(PanickingListener::named("bomb")));
    registry.subscribe(survivor.clone());

    let report = registry.broadcast(&note_event("e", "x"));

    assert_eq!(survivor.count(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].listener, "bomb");
    assert!(report.failures[0].error.to_string().contains("panicked"));
}

/// Unsubscribes a fellow listener while a broadcast is in flight.
struct DropTarget {
    registry: Arc<BroadcastRegistry<Note>>,
    target: Arc<dyn Listener<Note>>,
}

impl Listener<Note> for DropTarget {
    fn update(&self, _event: &Event<Note>) -> Result<(), BoxError> {
        self.registry.unsubscribe(&self.target);
        Ok(())
    }

    fn name(&self) -> &str {
        "drop-target"
    }
}

#[test]
fn unsubscribe_during_broadcast_spares_the_current_cycle() {
    let deliveries: DeliveryLog = Arc::new(Mutex::new(Vec::new()));
    let registry = Arc::new(BroadcastRegistry::<Note>::new());
    let victim: Arc<dyn Listener<Note>> = Arc::new(NamedListener::new("victim", deliveries.clone()));
    registry.subscribe(Arc::new(DropTarget {
        registry: registry.clone(),
        target: victim.clone(),
    }));
    registry.subscribe(victim.clone());

    let report = registry.broadcast(&note_event("e", "x"));
    assert_eq!(report.delivered, 2, "Snapshot still includes the removed listener");
    assert_eq!(deliveries.lock().unwrap().len(), 1);
    assert_eq!(registry.len(), 1);

    let report = registry.broadcast(&note_event("e", "x"));
    assert_eq!(report.delivered, 1);
    assert_eq!(deliveries.lock().unwrap().len(), 1, "Removed listener gets no further events");
}

/// Subscribes a new listener while a broadcast is in flight.
struct Recruiter {
    registry: Arc<BroadcastRegistry<Note>>,
    recruit: Arc<dyn Listener<Note>>,
}

impl Listener<Note> for Recruiter {
    fn update(&self, _event: &Event<Note>) -> Result<(), BoxError> {
        self.registry.subscribe(self.recruit.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recruiter"
    }
}

#[test]
fn subscribe_during_broadcast_waits_for_the_next_cycle() {
    let deliveries: DeliveryLog = Arc::new(Mutex::new(Vec::new()));
    let registry = Arc::new(BroadcastRegistry::<Note>::new());
    let recruit: Arc<dyn Listener<Note>> = Arc::new(NamedListener::new("recruit", deliveries.clone()));
    registry.subscribe(Arc::new(Recruiter {
        registry: registry.clone(),
        recruit: recruit.clone(),
    }));

    let report = registry.broadcast(&note_event("e", "x"));
    assert_eq!(report.delivered, 1, "The recruit is not in this call's snapshot");
    assert!(deliveries.lock().unwrap().is_empty());
    assert_eq!(registry.len(), 2);

    let report = registry.broadcast(&note_event("e", "x"));
    assert_eq!(report.delivered, 2);
    assert_eq!(deliveries.lock().unwrap().len(), 1);
    assert_eq!(registry.len(), 2, "Re-recruiting the same listener is idempotent");
}

#[test]
fn closure_listeners_subscribe_directly() {
    let registry = BroadcastRegistry::<Note>::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let counted = hits.clone();
    registry.subscribe(Arc::new(FnListener::new(
        "closure",
        move |event: &Event<Note>| -> Result<(), BoxError> {
            assert_eq!(event.payload().content, "Hello");
            counted.fetch_add(1, Ordering::SeqCst);
            Ok(())
        },
    )));

    let report = registry.broadcast(&note_event("new_noti", "Hello"));
    assert!(report.is_clean());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
