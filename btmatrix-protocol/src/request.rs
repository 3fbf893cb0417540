//! Request encoding on the host side
//!
//! The device never builds requests; this exists so host tools and tests
//! produce byte streams from the same definitions the decoder uses.

use heapless::Vec;

use crate::command::Command;
use crate::response::LedEntry;
use crate::{CodecError, LED_ENTRY_SIZE, MAX_LEDS, MAX_REQUEST_SIZE};

/// Requests sent from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request<'a> {
    /// Read back every LED
    GetLeds,
    /// Set the listed LEDs
    SetLeds(&'a [LedEntry]),
    /// Set every LED to one color
    SetLedsAll { r: u8, g: u8, b: u8 },
}

impl Request<'_> {
    /// Command tag of this request
    pub fn command(&self) -> Command {
        match self {
            Request::GetLeds => Command::GetLeds,
            Request::SetLeds(_) => Command::SetLeds,
            Request::SetLedsAll { .. } => Command::SetLedsAll,
        }
    }

    /// Encode this request into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, CodecError> {
        let (tag, rest) = buffer
            .split_first_mut()
            .ok_or(CodecError::BufferTooSmall)?;
        *tag = self.command().to_byte();

        match self {
            Request::GetLeds => Ok(1),
            Request::SetLeds(entries) => {
                if entries.len() > MAX_LEDS {
                    return Err(CodecError::PayloadTooLarge);
                }
                let len = entries.len() * LED_ENTRY_SIZE;
                let payload = rest.get_mut(..len).ok_or(CodecError::BufferTooSmall)?;
                for (slot, entry) in payload.chunks_exact_mut(LED_ENTRY_SIZE).zip(entries.iter()) {
                    slot.copy_from_slice(&entry.to_bytes());
                }
                Ok(1 + len)
            }
            Request::SetLedsAll { r, g, b } => {
                let payload = rest.get_mut(..3).ok_or(CodecError::BufferTooSmall)?;
                payload.copy_from_slice(&[*r, *g, *b]);
                Ok(4)
            }
        }
    }

    /// Encode this request into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_REQUEST_SIZE>, CodecError> {
        let mut buffer = [0u8; MAX_REQUEST_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| CodecError::BufferTooSmall)?;
        Ok(vec)
    }
}
