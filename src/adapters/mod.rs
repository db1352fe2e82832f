//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements       | Connects to                  |
//! |-------------|------------------|------------------------------|
//! | `reader`    | TagReaderPort    | MFRC522 RFID front-end (SPI) |
//! | `wifi`      | ConnectivityPort | ESP-IDF WiFi STA             |
//! | `http`      | HttpPort         | ESP-IDF HTTP client          |
//! | `delay`     | DelayPort        | FreeRTOS tick / host clock   |
//! | `log_sink`  | EventSink        | Serial log output            |
//! | `hardware`  | TagReaderPort + IndicatorPort + DelayPort (composite) | |
//! | `device_id` | —                | Factory MAC (eFuse)          |

pub mod delay;
pub mod device_id;
pub mod hardware;
pub mod http;
pub mod log_sink;
pub mod reader;
pub mod wifi;
