//! GPIO / peripheral pin assignments for the Tagpoint main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Indicator LEDs (discrete, active-high through 330R)
// ---------------------------------------------------------------------------

pub const LED_RED_GPIO: i32 = 4;
pub const LED_GREEN_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// MFRC522 RFID front-end (SPI2)
// ---------------------------------------------------------------------------

pub const RC522_SCLK_GPIO: i32 = 12;
pub const RC522_MOSI_GPIO: i32 = 11;
pub const RC522_MISO_GPIO: i32 = 13;
/// Chip select (the module's SDA/SS pin).
pub const RC522_CS_GPIO: i32 = 10;
/// Hard reset, active low.
pub const RC522_RST_GPIO: i32 = 9;

/// SPI clock for the MFRC522 (datasheet maximum is 10 MHz; 4 MHz leaves
/// margin on long jumper harnesses).
pub const RC522_SPI_HZ: u32 = 4_000_000;

// ---------------------------------------------------------------------------
// UART debug
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
