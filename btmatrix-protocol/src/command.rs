//! Command tags and status codes
//!
//! Both are single bytes on the wire. Note that `INVALID_STATE` is `0xFE`,
//! not the next ordinal after `LED_OUT_OF_RANGE`.

// Command tags: Host → Device
pub const CMD_GET_LEDS: u8 = 0x01;
pub const CMD_SET_LEDS: u8 = 0x02;
pub const CMD_SET_LEDS_ALL: u8 = 0x03;

/// Command byte echoed when no valid command was recognized
pub const CMD_NONE: u8 = 0x00;

// Status codes: Device → Host
const STATUS_OK: u8 = 0x00;
const STATUS_INVALID_DATA_LENGTH: u8 = 0x01;
const STATUS_LED_OUT_OF_RANGE: u8 = 0x02;
const STATUS_INVALID_STATE: u8 = 0xFE;
const STATUS_INVALID_COMMAND: u8 = 0xFF;

/// Commands understood by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Read back the color of every LED
    GetLeds,
    /// Set individual LEDs: repeated `[index, r, g, b]` groups
    SetLeds,
    /// Set every LED to one color: `[r, g, b]`
    SetLedsAll,
}

impl Command {
    /// Parse a command from its tag byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_GET_LEDS => Some(Command::GetLeds),
            CMD_SET_LEDS => Some(Command::SetLeds),
            CMD_SET_LEDS_ALL => Some(Command::SetLedsAll),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Command::GetLeds => CMD_GET_LEDS,
            Command::SetLeds => CMD_SET_LEDS,
            Command::SetLedsAll => CMD_SET_LEDS_ALL,
        }
    }

    /// Maximum payload length for a strip of `led_count` LEDs
    ///
    /// Bytes past this limit are consumed and discarded by the device.
    pub fn max_payload(self, led_count: usize) -> usize {
        match self {
            Command::GetLeds => 0,
            Command::SetLeds => led_count * crate::LED_ENTRY_SIZE,
            Command::SetLedsAll => 3,
        }
    }
}

/// Outcome of a frame, sent as the second response byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Command executed
    Ok,
    /// Frame ended before the command reached a complete state
    #[default]
    InvalidDataLength,
    /// SET_LEDS named an index past the end of the strip
    LedOutOfRange,
    /// Payload byte arrived with no recognized command tag
    InvalidState,
    /// First byte was not a known command tag
    InvalidCommand,
}

impl Status {
    /// Parse a status from its wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            STATUS_OK => Some(Status::Ok),
            STATUS_INVALID_DATA_LENGTH => Some(Status::InvalidDataLength),
            STATUS_LED_OUT_OF_RANGE => Some(Status::LedOutOfRange),
            STATUS_INVALID_STATE => Some(Status::InvalidState),
            STATUS_INVALID_COMMAND => Some(Status::InvalidCommand),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Status::Ok => STATUS_OK,
            Status::InvalidDataLength => STATUS_INVALID_DATA_LENGTH,
            Status::LedOutOfRange => STATUS_LED_OUT_OF_RANGE,
            Status::InvalidState => STATUS_INVALID_STATE,
            Status::InvalidCommand => STATUS_INVALID_COMMAND,
        }
    }

    /// Human-readable name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Status::Ok => "success",
            Status::InvalidDataLength => "invalid data length",
            Status::LedOutOfRange => "led out of range",
            Status::InvalidState => "invalid state",
            Status::InvalidCommand => "invalid command",
        }
    }

    /// Returns true while a frame may still make progress
    ///
    /// Once an error other than the default `InvalidDataLength` is recorded,
    /// the rest of the frame is drained without effect.
    pub fn accepts_payload(&self) -> bool {
        matches!(self, Status::Ok | Status::InvalidDataLength)
    }
}
