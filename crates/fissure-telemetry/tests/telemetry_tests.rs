//! Integration tests for fissure-telemetry.

use fissure_telemetry::bus::EventBus;
use fissure_telemetry::events::{EventKind, SimulationEvent};
use fissure_telemetry::sinks::{EventSink, SharedVecSink, TracingSink, VecSink};

fn begin(step: u64) -> SimulationEvent {
    SimulationEvent::new(step, EventKind::StepBegin { active_markers: 8 })
}

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    let sink = SharedVecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.emit(begin(0));
    bus.emit(SimulationEvent::new(
        0,
        EventKind::StepEnd {
            wall_time: 0.001,
            finished_count: 0,
        },
    ));
    assert!(sink.is_empty(), "nothing dispatched before flush");

    bus.flush();
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind.label(), "step_begin");
    assert_eq!(events[1].kind.label(), "step_end");
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = SharedVecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emit(begin(0));
    bus.flush();
    assert!(sink.is_empty());
}

#[test]
fn multiple_sinks() {
    let mut bus = EventBus::new();
    let a = SharedVecSink::new();
    let b = SharedVecSink::new();
    bus.add_sink(Box::new(a.clone()));
    bus.add_sink(Box::new(b.clone()));
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));
    assert_eq!(bus.sink_count(), 3);
    assert_eq!(
        bus.sink_names(),
        vec!["shared_vec_sink", "shared_vec_sink", "tracing_sink"]
    );

    bus.emit(begin(3));
    bus.finalize();
    assert_eq!(a.events(), b.events());
    assert_eq!(a.len(), 1);
}

#[test]
fn sender_from_other_thread() {
    let mut bus = EventBus::new();
    let sink = SharedVecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    let tx = bus.sender();
    std::thread::spawn(move || {
        tx.send(begin(7)).unwrap();
    })
    .join()
    .unwrap();

    bus.flush();
    assert_eq!(sink.events()[0].step, 7);
}

#[test]
fn vec_sink_collects() {
    let mut sink = VecSink::new();
    sink.handle(&begin(1));
    sink.handle(&begin(2));
    assert_eq!(sink.events.len(), 2);
    assert_eq!(sink.name(), "vec_sink");
}

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::MarkerFinished {
            marker: 12,
            point: [2.5, 0.1, -0.3],
            triangle: 40,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn custom_event_payload() {
    let event = SimulationEvent::custom(2, "probe", &vec![1, 2, 3]).unwrap();
    match &event.kind {
        EventKind::Custom { label, payload } => {
            assert_eq!(label, "probe");
            assert_eq!(payload, "[1,2,3]");
        }
        other => panic!("unexpected kind {other:?}"),
    }
    assert_eq!(event.kind.label(), "probe");
}
