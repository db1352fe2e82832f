//! Integration tests for the boot → network-join → Ready flow.

use crate::mock_hw::{MockHardware, MockNet, RecordingSink, Signal};

use tagpoint::app::events::AppEvent;
use tagpoint::app::service::AppService;
use tagpoint::config::ReporterConfig;
use tagpoint::drivers::patterns::Light;
use tagpoint::state::DeviceState;

fn make_app() -> AppService {
    let config =
        ReporterConfig::new("ClassroomNet", "password1", "http://host:5000/api/rfid_scan")
            .unwrap();
    AppService::new(&config)
}

#[test]
fn instant_join_holds_green_without_blinking() {
    let mut app = make_app();
    let mut hw = MockHardware::new();
    let mut net = MockNet::up();
    let mut sink = RecordingSink::new();

    app.start(&mut sink);
    app.join_network(&mut net, &mut hw, &mut sink);

    assert_eq!(app.state(), DeviceState::Ready);
    assert_eq!(net.connect_calls, 0, "already-up link needs no join attempt");
    assert_eq!(hw.signal_history(), vec![Signal::SolidOn(Light::Green)]);
}

#[test]
fn join_blinks_alternate_red_green_until_connected() {
    let mut app = make_app();
    let mut hw = MockHardware::new();
    let mut net = MockNet::joining_after(3);
    let mut sink = RecordingSink::new();

    app.start(&mut sink);
    app.join_network(&mut net, &mut hw, &mut sink);

    assert_eq!(net.connect_calls, 4);
    assert_eq!(
        hw.signal_history(),
        vec![
            Signal::Blink {
                light: Light::Red,
                repetitions: 1,
                on_ms: 300
            },
            Signal::Blink {
                light: Light::Green,
                repetitions: 1,
                on_ms: 300
            },
            Signal::Blink {
                light: Light::Red,
                repetitions: 1,
                on_ms: 300
            },
            Signal::SolidOn(Light::Green),
        ]
    );
}

#[test]
fn join_emits_started_then_network_joined() {
    let mut app = make_app();
    let mut hw = MockHardware::new();
    let mut net = MockNet::joining_after(1);
    let mut sink = RecordingSink::new();

    app.start(&mut sink);
    app.join_network(&mut net, &mut hw, &mut sink);

    assert_eq!(
        sink.events,
        vec![
            AppEvent::Started(DeviceState::Booting),
            AppEvent::NetworkJoined,
        ]
    );
}

#[test]
fn ready_is_entered_once_and_never_exited() {
    let mut app = make_app();
    let mut hw = MockHardware::new();
    let mut net = MockNet::up();
    let mut sink = RecordingSink::new();

    app.start(&mut sink);
    app.join_network(&mut net, &mut hw, &mut sink);
    assert_eq!(app.state(), DeviceState::Ready);

    // Even a lost link never takes the device back to a connecting state.
    net.connected = false;
    assert_eq!(app.state(), DeviceState::Ready);

    // A (buggy) second join call must not move the FSM either.
    app.join_network(&mut net, &mut hw, &mut sink);
    assert_eq!(app.state(), DeviceState::Ready);
}
