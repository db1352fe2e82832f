//! Integration tests for the steady-state scan → signal → report flow.
//!
//! These run on the host and verify the full chain from a polled tag down to
//! the indicator call history and the literal HTTP body, with no real
//! hardware.

use crate::mock_hw::{MockHardware, MockHttp, MockNet, RecordingSink, Signal};

use tagpoint::app::events::AppEvent;
use tagpoint::app::reporter::ReportOutcome;
use tagpoint::app::service::{AppService, QUIESCENT_MS};
use tagpoint::config::ReporterConfig;
use tagpoint::drivers::patterns::Light;

const ENDPOINT: &str = "http://host:5000/api/rfid_scan";

fn ready_app() -> (AppService, MockHardware, MockNet, MockHttp, RecordingSink) {
    let config = ReporterConfig::new("ClassroomNet", "password1", ENDPOINT).unwrap();
    let mut app = AppService::new(&config);
    let mut hw = MockHardware::new();
    let mut net = MockNet::up();
    let mut sink = RecordingSink::new();

    app.start(&mut sink);
    app.join_network(&mut net, &mut hw, &mut sink);
    hw.clear_history();
    sink.events.clear();

    (app, hw, net, MockHttp::new(), sink)
}

fn blink(light: Light, repetitions: u8, on_ms: u32) -> Signal {
    Signal::Blink {
        light,
        repetitions,
        on_ms,
    }
}

// ── Accepted scan ─────────────────────────────────────────────

#[test]
fn accepted_scan_runs_exact_pattern_sequence_then_quiesces() {
    let (mut app, mut hw, mut net, mut http, mut sink) = ready_app();
    hw.present_tag(&[0x12, 0x34]);
    http.respond_with(200, r#"{"status":"UID received and event queued"}"#);

    let outcome = app.tick(&mut hw, &mut net, &mut http, &mut sink);

    assert_eq!(outcome, Some(ReportOutcome::Success));
    assert_eq!(
        hw.signal_history(),
        vec![
            blink(Light::Red, 1, 150),   // tag detected
            blink(Light::Green, 2, 100), // transmitting
            blink(Light::Green, 3, 200), // accepted
            Signal::Pause(QUIESCENT_MS),
        ]
    );
}

#[test]
fn accepted_scan_sends_literal_json_body() {
    let (mut app, mut hw, mut net, mut http, mut sink) = ready_app();
    hw.present_tag(&[0x12, 0x34]);
    http.respond_with(200, "");

    let _ = app.tick(&mut hw, &mut net, &mut http, &mut sink);

    assert_eq!(http.requests.len(), 1);
    assert_eq!(http.requests[0].0, ENDPOINT);
    assert_eq!(http.requests[0].1, r#"{"uid":"1234"}"#);
}

#[test]
fn scan_emits_tag_scanned_then_report_resolved() {
    let (mut app, mut hw, mut net, mut http, mut sink) = ready_app();
    hw.present_tag(&[0x04, 0xA1, 0xB2]);
    http.respond_with(200, "");

    let _ = app.tick(&mut hw, &mut net, &mut http, &mut sink);

    assert_eq!(sink.events.len(), 2);
    assert!(matches!(
        &sink.events[0],
        AppEvent::TagScanned { uid } if uid.as_str() == "04a1b2"
    ));
    assert!(matches!(
        &sink.events[1],
        AppEvent::ReportResolved { uid, outcome: ReportOutcome::Success } if uid.as_str() == "04a1b2"
    ));
}

// ── Failure branches ──────────────────────────────────────────

#[test]
fn rejected_scan_blinks_red_three_times() {
    let (mut app, mut hw, mut net, mut http, mut sink) = ready_app();
    hw.present_tag(&[0xAA]);
    http.respond_with(503, r#"{"error":"service unavailable"}"#);

    let outcome = app.tick(&mut hw, &mut net, &mut http, &mut sink);

    assert!(matches!(
        outcome,
        Some(ReportOutcome::ServerRejected { status: 503, .. })
    ));
    assert_eq!(
        hw.signal_history(),
        vec![
            blink(Light::Red, 1, 150),
            blink(Light::Green, 2, 100),
            blink(Light::Red, 3, 200), // rejected
            Signal::Pause(QUIESCENT_MS),
        ]
    );
}

#[test]
fn transport_failure_blinks_red_five_times() {
    let (mut app, mut hw, mut net, mut http, mut sink) = ready_app();
    hw.present_tag(&[0xAA]);
    http.fail_with("connection reset");

    let outcome = app.tick(&mut hw, &mut net, &mut http, &mut sink);

    assert!(matches!(
        outcome,
        Some(ReportOutcome::TransportFailed { .. })
    ));
    assert_eq!(
        hw.signal_history(),
        vec![
            blink(Light::Red, 1, 150),
            blink(Light::Green, 2, 100),
            blink(Light::Red, 5, 100), // transport failure
            Signal::Pause(QUIESCENT_MS),
        ]
    );
}

#[test]
fn link_down_at_scan_skips_request_and_blinks_unavailable() {
    let (mut app, mut hw, mut net, mut http, mut sink) = ready_app();
    hw.present_tag(&[0xAA, 0xBB]);
    net.connected = false;

    let outcome = app.tick(&mut hw, &mut net, &mut http, &mut sink);

    assert_eq!(outcome, Some(ReportOutcome::NetworkUnavailable));
    assert!(http.requests.is_empty(), "no request may be attempted");
    assert_eq!(
        hw.signal_history(),
        vec![
            blink(Light::Red, 1, 150),
            blink(Light::Red, 2, 400), // network unavailable — no transmit blink
            Signal::Pause(QUIESCENT_MS),
        ]
    );
}

// ── Idle polling ──────────────────────────────────────────────

#[test]
fn empty_field_tick_does_nothing() {
    let (mut app, mut hw, mut net, mut http, mut sink) = ready_app();

    let outcome = app.tick(&mut hw, &mut net, &mut http, &mut sink);

    assert_eq!(outcome, None);
    assert!(hw.calls.is_empty(), "idle poll must not signal or delay");
    assert!(http.requests.is_empty());
    assert!(sink.events.is_empty());
}

// ── Idempotence ───────────────────────────────────────────────

#[test]
fn identical_rescans_produce_identical_sequences() {
    let (mut app, mut hw, mut net, mut http, mut sink) = ready_app();

    hw.present_tag(&[0x12, 0x34]);
    http.respond_with(200, "");
    let first = app.tick(&mut hw, &mut net, &mut http, &mut sink);
    let first_signals = hw.signal_history();

    hw.clear_history();
    hw.present_tag(&[0x12, 0x34]);
    http.respond_with(200, "");
    let second = app.tick(&mut hw, &mut net, &mut http, &mut sink);

    assert_eq!(first, second);
    assert_eq!(first_signals, hw.signal_history());
    assert_eq!(http.requests[0], http.requests[1]);
}

#[test]
fn failure_then_success_carries_no_state_over() {
    let (mut app, mut hw, mut net, mut http, mut sink) = ready_app();

    hw.present_tag(&[0x55]);
    http.fail_with("timeout");
    let _ = app.tick(&mut hw, &mut net, &mut http, &mut sink);

    hw.clear_history();
    hw.present_tag(&[0x55]);
    http.respond_with(200, "");
    let outcome = app.tick(&mut hw, &mut net, &mut http, &mut sink);

    assert_eq!(outcome, Some(ReportOutcome::Success));
    assert_eq!(
        hw.signal_history(),
        vec![
            blink(Light::Red, 1, 150),
            blink(Light::Green, 2, 100),
            blink(Light::Green, 3, 200),
            Signal::Pause(QUIESCENT_MS),
        ]
    );
}
