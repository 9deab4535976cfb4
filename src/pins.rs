//! GPIO / peripheral pin assignments for the RoomWatch node board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Motion input (HC-SR501 PIR)
// ---------------------------------------------------------------------------

/// Digital input: PIR output. HIGH = motion sensed (raw, unfiltered).
pub const PIR_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Temperature — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Analog temperature front-end — voltage output sampled via ADC1.
/// ADC1 channel 8 (GPIO 9 on ESP32-S3).
pub const TEMP_ADC_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Motion indicator LED
// ---------------------------------------------------------------------------

/// Digital output: lit while the motion state machine is Active.
pub const LED_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// I²C bus (MLX90614 IR thermometer variant)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 14;
pub const I2C_SCL_GPIO: i32 = 15;

/// MLX90614 SMBus slave address (factory default).
pub const MLX90614_ADDR: u8 = 0x5A;

// ---------------------------------------------------------------------------
// UART telemetry link
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;

/// Telemetry link baud rate — matches the host-side pollers.
pub const UART_BAUD: u32 = 115_200;
