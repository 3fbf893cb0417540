//! Response encoding (device) and parsing (host)
//!
//! Response format:
//! - CMD (1 byte): echoed command tag, or `0x00` if none was recognized
//! - STATUS (1 byte): see [`Status`]
//! - PAYLOAD: only for a successful GET_LEDS, `[index, r, g, b]` for every
//!   LED in ascending index order

use heapless::Vec;

use crate::command::{Command, Status, CMD_GET_LEDS, CMD_NONE};
use crate::decoder::FrameSummary;
use crate::{CodecError, LED_ENTRY_SIZE, MAX_LEDS, MAX_RESPONSE_SIZE};

/// One LED as carried in GET_LEDS responses and SET_LEDS requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedEntry {
    pub index: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LedEntry {
    pub const fn new(index: u8, r: u8, g: u8, b: u8) -> Self {
        Self { index, r, g, b }
    }

    /// Wire representation
    pub fn to_bytes(self) -> [u8; LED_ENTRY_SIZE] {
        [self.index, self.r, self.g, self.b]
    }

    /// Parse from wire representation
    pub fn from_bytes(bytes: [u8; LED_ENTRY_SIZE]) -> Self {
        let [index, r, g, b] = bytes;
        Self { index, r, g, b }
    }
}

/// Response header sent after each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Response {
    /// Command byte to echo
    pub command: u8,
    /// Frame status
    pub status: Status,
}

impl Response {
    /// Create a response for a (possibly unrecognized) command
    pub fn new(command: Option<Command>, status: Status) -> Self {
        Self {
            command: command.map_or(CMD_NONE, Command::to_byte),
            status,
        }
    }

    /// Returns true if this response carries the LED snapshot
    pub fn has_snapshot(&self) -> bool {
        self.status == Status::Ok && self.command == CMD_GET_LEDS
    }

    /// Encoded size for a strip of `led_count` LEDs
    pub fn encoded_len(&self, led_count: usize) -> usize {
        if self.has_snapshot() {
            2 + led_count * LED_ENTRY_SIZE
        } else {
            2
        }
    }

    /// Encode this response into a byte buffer
    ///
    /// `colors` yields the current `[r, g, b]` of every LED in index order;
    /// it is only consumed when the response carries a snapshot.
    ///
    /// Returns the number of bytes written
    pub fn encode<I>(&self, colors: I, buffer: &mut [u8]) -> Result<usize, CodecError>
    where
        I: IntoIterator<Item = [u8; 3]>,
    {
        if buffer.len() < 2 {
            return Err(CodecError::BufferTooSmall);
        }
        buffer[0] = self.command;
        buffer[1] = self.status.to_byte();

        if !self.has_snapshot() {
            return Ok(2);
        }

        let mut len = 2;
        for (index, [r, g, b]) in colors.into_iter().enumerate() {
            if index >= MAX_LEDS {
                return Err(CodecError::PayloadTooLarge);
            }
            let slot = buffer
                .get_mut(len..len + LED_ENTRY_SIZE)
                .ok_or(CodecError::BufferTooSmall)?;
            slot.copy_from_slice(&LedEntry::new(index as u8, r, g, b).to_bytes());
            len += LED_ENTRY_SIZE;
        }

        Ok(len)
    }

    /// Encode this response into a heapless Vec
    pub fn encode_to_vec<I>(&self, colors: I) -> Result<Vec<u8, MAX_RESPONSE_SIZE>, CodecError>
    where
        I: IntoIterator<Item = [u8; 3]>,
    {
        let mut buffer = [0u8; MAX_RESPONSE_SIZE];
        let len = self.encode(colors, &mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| CodecError::BufferTooSmall)?;
        Ok(vec)
    }
}

impl From<FrameSummary> for Response {
    fn from(summary: FrameSummary) -> Self {
        Response::new(summary.command, summary.status)
    }
}

/// A response as seen by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Header
    pub response: Response,
    /// LED snapshot (empty unless GET_LEDS succeeded)
    pub leds: Vec<LedEntry, MAX_LEDS>,
}

impl ParsedResponse {
    /// Parse a complete response received from the device
    pub fn parse(bytes: &[u8]) -> Result<Self, CodecError> {
        let [command, status, payload @ ..] = bytes else {
            return Err(CodecError::Truncated);
        };
        let status = Status::from_byte(*status).ok_or(CodecError::UnknownStatus)?;
        let response = Response {
            command: *command,
            status,
        };

        let mut leds = Vec::new();
        if response.has_snapshot() {
            let entries = payload.chunks_exact(LED_ENTRY_SIZE);
            if !entries.remainder().is_empty() {
                return Err(CodecError::Truncated);
            }
            for chunk in entries {
                let entry = LedEntry::from_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                leds.push(entry).map_err(|_| CodecError::PayloadTooLarge)?;
            }
        }

        Ok(Self { response, leds })
    }

    /// Color of the LED at `index` in the snapshot
    pub fn led(&self, index: u8) -> Option<LedEntry> {
        self.leds.iter().copied().find(|entry| entry.index == index)
    }
}
