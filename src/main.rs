//! Tagpoint Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single sequential control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  TagReader      IndicatorLeds   SystemDelay   LogEventSink   │
//! │  (TagReaderPort)(IndicatorPort) (DelayPort)   (EventSink)    │
//! │  WifiAdapter    HttpClientAdapter                            │
//! │  (Connectivity) (HttpPort)                                   │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ───────────────────     │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │            AppService (pure logic)                 │      │
//! │  │  DeviceFsm · Reporter · pattern vocabulary         │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use log::info;

use esp_idf_hal::gpio::PinDriver;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, EspWifi};

use tagpoint::adapters::device_id;
use tagpoint::adapters::hardware::HardwareAdapter;
use tagpoint::adapters::http::HttpClientAdapter;
use tagpoint::adapters::log_sink::LogEventSink;
use tagpoint::adapters::reader::TagReader;
use tagpoint::adapters::wifi::WifiAdapter;
use tagpoint::app::service::AppService;
use tagpoint::config::ReporterConfig;
use tagpoint::drivers::indicator::IndicatorLeds;

// Build-time configuration — the only three options this device recognises.
const WIFI_SSID: &str = env!(
    "TAGPOINT_WIFI_SSID",
    "Set TAGPOINT_WIFI_SSID in your environment before building/flashing."
);
const WIFI_PASSWORD: &str = env!(
    "TAGPOINT_WIFI_PASSWORD",
    "Set TAGPOINT_WIFI_PASSWORD in your environment before building/flashing."
);
const ENDPOINT_URL: &str = env!(
    "TAGPOINT_ENDPOINT_URL",
    "Set TAGPOINT_ENDPOINT_URL (e.g. http://host:5000/api/rfid_scan) before building/flashing."
);

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Tagpoint v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let mac = device_id::read_mac();
    info!("Device ID: {}", device_id::device_id(&mac));

    // ── 2. Configuration ──────────────────────────────────────
    let config = ReporterConfig::new(WIFI_SSID, WIFI_PASSWORD, ENDPOINT_URL)
        .context("invalid build-time configuration")?;
    info!("Endpoint: {}", config.endpoint_url);

    // ── 3. Reader + indicator hardware (before any network) ───
    let peripherals = esp_idf_hal::peripherals::Peripherals::take()
        .context("peripherals already taken")?;

    let mut reader = TagReader::new();
    reader.init().context("tag reader init failed")?;

    // gpio4 / gpio5 per pins::LED_RED_GPIO / pins::LED_GREEN_GPIO.
    let red = PinDriver::output(peripherals.pins.gpio4)?;
    let green = PinDriver::output(peripherals.pins.gpio5)?;
    let mut hw = HardwareAdapter::new(reader, IndicatorLeds::new(red, green));

    // ── 4. Network + HTTP adapters ────────────────────────────
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;
    let esp_wifi = EspWifi::new(peripherals.modem, sysloop.clone(), Some(nvs))?;
    let blocking = BlockingWifi::wrap(esp_wifi, sysloop)?;

    let mut wifi = WifiAdapter::new(blocking);
    wifi.set_credentials(&config.wifi_ssid, &config.wifi_password)
        .map_err(|e| anyhow::anyhow!("credentials rejected: {e}"))?;
    let mut http = HttpClientAdapter::new();

    // ── 5. Control loop ───────────────────────────────────────
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(&config);

    app.start(&mut sink);
    app.join_network(&mut wifi, &mut hw, &mut sink);

    info!("System ready. Polling for tags.");
    loop {
        let _ = app.tick(&mut hw, &mut wifi, &mut http, &mut sink);
    }
}
