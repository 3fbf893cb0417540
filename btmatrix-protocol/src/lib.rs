//! btmatrix Serial Command Protocol
//!
//! This crate defines the byte protocol spoken between a host (phone app,
//! desktop tool) and the LED controller over a Bluetooth serial bridge.
//!
//! # Protocol Overview
//!
//! There is no framing delimiter. The first byte of a frame is the command
//! tag, and the tag determines how many payload bytes follow:
//!
//! ```text
//! Request:   ┌─────┬──────────────────────────────┐
//!            │ CMD │ PAYLOAD                      │
//!            │ 1B  │ 0 / 3 / 4·k bytes            │
//!            └─────┴──────────────────────────────┘
//! Response:  ┌─────┬────────┬─────────────────────┐
//!            │ CMD │ STATUS │ PAYLOAD             │
//!            │ 1B  │ 1B     │ N·4 B (GET_LEDS)    │
//!            └─────┴────────┴─────────────────────┘
//! ```
//!
//! The device treats everything buffered at poll time as one frame. See
//! [`decoder::RequestDecoder`] for the device side and [`request::Request`] /
//! [`response::ParsedResponse`] for the host side.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod command;
pub mod decoder;
pub mod request;
pub mod response;

pub use command::{Command, Status, CMD_GET_LEDS, CMD_NONE, CMD_SET_LEDS, CMD_SET_LEDS_ALL};
pub use decoder::{Action, FrameSummary, RequestDecoder};
pub use request::Request;
pub use response::{LedEntry, ParsedResponse, Response};

/// Largest strip the protocol can address (indices are one byte)
pub const MAX_LEDS: usize = 256;

/// Bytes per LED entry on the wire: index, r, g, b
pub const LED_ENTRY_SIZE: usize = 4;

/// Largest possible response (CMD + STATUS + full snapshot)
pub const MAX_RESPONSE_SIZE: usize = 2 + MAX_LEDS * LED_ENTRY_SIZE;

/// Largest meaningful request (CMD + one group per LED)
pub const MAX_REQUEST_SIZE: usize = 1 + MAX_LEDS * LED_ENTRY_SIZE;

/// Errors from encoding or parsing protocol messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodecError {
    /// Output buffer too small for the encoded message
    BufferTooSmall,
    /// Message ended before its fixed part was complete
    Truncated,
    /// Status byte is not one of the defined codes
    UnknownStatus,
    /// More LED entries than the protocol can carry
    PayloadTooLarge,
}
