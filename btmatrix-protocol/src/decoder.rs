//! Incremental request decoding on the device side
//!
//! Bytes are fed one at a time as they are drained from the serial port.
//! The decoder does not own the LEDs; it tells the caller what to apply via
//! [`Action`] and keeps the frame status for the response.
//!
//! A decoder lives for exactly one drain of the serial buffer. When the port
//! runs dry the caller calls [`RequestDecoder::finish`] and answers with the
//! resulting [`FrameSummary`].

use crate::command::{Command, Status};
use crate::LED_ENTRY_SIZE;

/// Effect of a single decoded byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Byte consumed, nothing to apply yet
    Pending,
    /// Set one LED and flush the strip
    SetLed { index: u8, r: u8, g: u8, b: u8 },
    /// Set every LED and flush the strip
    FillAll { r: u8, g: u8, b: u8 },
    /// Byte was surplus to the frame and dropped
    Discarded(u8),
}

impl Action {
    /// Returns true if applying this action changes LED colors
    pub fn is_write(&self) -> bool {
        matches!(self, Action::SetLed { .. } | Action::FillAll { .. })
    }
}

/// Result of a fully drained frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameSummary {
    /// Recognized command, if the frame had one
    pub command: Option<Command>,
    /// Final frame status
    pub status: Status,
    /// Total bytes consumed, including discarded ones
    pub bytes_read: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// No command tag consumed yet
    Awaiting,
    /// Tag recognized, consuming payload
    Decoding {
        command: Command,
        /// Payload bytes consumed so far
        count: usize,
        /// Current (partial) payload group
        group: [u8; LED_ENTRY_SIZE],
    },
    /// First byte was not a command; everything else is drained
    Rejected,
}

/// State machine for decoding one request frame
#[derive(Debug, Clone)]
pub struct RequestDecoder {
    led_count: usize,
    state: DecodeState,
    status: Status,
    bytes_read: usize,
}

impl RequestDecoder {
    /// Create a decoder for a strip of `led_count` LEDs
    pub fn new(led_count: usize) -> Self {
        Self {
            led_count,
            state: DecodeState::Awaiting,
            status: Status::default(),
            bytes_read: 0,
        }
    }

    /// Current frame status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Recognized command, if any
    pub fn command(&self) -> Option<Command> {
        match self.state {
            DecodeState::Decoding { command, .. } => Some(command),
            _ => None,
        }
    }

    /// Bytes consumed so far
    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }

    /// Feed a single byte to the decoder
    pub fn feed(&mut self, byte: u8) -> Action {
        self.bytes_read += 1;

        match self.state {
            DecodeState::Awaiting => {
                match Command::from_byte(byte) {
                    Some(command) => {
                        if command == Command::GetLeds {
                            // Empty payload: the tag alone completes the request
                            self.status = Status::Ok;
                        }
                        self.state = DecodeState::Decoding {
                            command,
                            count: 0,
                            group: [0; LED_ENTRY_SIZE],
                        };
                    }
                    None => {
                        self.status = Status::InvalidCommand;
                        self.state = DecodeState::Rejected;
                    }
                }
                Action::Pending
            }
            DecodeState::Rejected => {
                self.status = Status::InvalidState;
                Action::Discarded(byte)
            }
            DecodeState::Decoding {
                command,
                ref mut count,
                ref mut group,
            } => {
                if *count >= command.max_payload(self.led_count) || !self.status.accepts_payload()
                {
                    *count += 1;
                    return Action::Discarded(byte);
                }

                group[*count % LED_ENTRY_SIZE] = byte;
                *count += 1;

                match command {
                    Command::GetLeds => Action::Discarded(byte),
                    Command::SetLeds => {
                        if *count % LED_ENTRY_SIZE != 0 {
                            return Action::Pending;
                        }
                        let [index, r, g, b] = *group;
                        if usize::from(index) >= self.led_count {
                            self.status = Status::LedOutOfRange;
                            return Action::Pending;
                        }
                        self.status = Status::Ok;
                        Action::SetLed { index, r, g, b }
                    }
                    Command::SetLedsAll => {
                        if *count < 3 {
                            return Action::Pending;
                        }
                        self.status = Status::Ok;
                        Action::FillAll {
                            r: group[0],
                            g: group[1],
                            b: group[2],
                        }
                    }
                }
            }
        }
    }

    /// Feed multiple bytes, applying each action through `apply`
    pub fn feed_bytes<F: FnMut(Action)>(&mut self, bytes: &[u8], mut apply: F) {
        for &byte in bytes {
            apply(self.feed(byte));
        }
    }

    /// Close the frame
    pub fn finish(self) -> FrameSummary {
        FrameSummary {
            command: self.command(),
            status: self.status,
            bytes_read: self.bytes_read,
        }
    }
}
