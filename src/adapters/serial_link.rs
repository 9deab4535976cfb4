//! UART adapter for the telemetry byte link.
//!
//! Implements [`ByteLink`] over the UART driver installed by hw_init.
//! The domain consumes single command bytes and writes one short reply;
//! everything else (baud rate, FIFO sizing, line discipline on the host)
//! lives outside this crate.

use crate::app::ports::ByteLink;
use crate::drivers::hw_init;
use crate::error::LinkError;

pub struct SerialLink;

impl SerialLink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SerialLink {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteLink for SerialLink {
    fn available(&self) -> usize {
        hw_init::uart_available()
    }

    fn read_byte(&mut self) -> Option<u8> {
        hw_init::uart_read_byte()
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), LinkError> {
        if hw_init::uart_write(data) == data.len() {
            Ok(())
        } else {
            Err(LinkError::WriteFailed)
        }
    }
}
