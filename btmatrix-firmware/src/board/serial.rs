//! Bluetooth module serial link

use embassy_rp::uart::{BufferedUartRx, BufferedUartTx, Error};
use embassy_time::{Duration, Instant};
use embedded_io::{Read, ReadReady, Write};

use btmatrix_hal::SerialPort;

use crate::config::INTER_BYTE_GAP_US;

/// Buffered UART halves wrapped as a byte-at-a-time port
///
/// The controller treats "no byte available" as the end of a frame, but it
/// drains faster than bytes arrive at 38400 baud. Once a frame has started
/// we therefore wait up to [`INTER_BYTE_GAP_US`] for the next byte before
/// reporting the buffer empty.
pub struct BluetoothSerial {
    rx: BufferedUartRx,
    tx: BufferedUartTx,
    in_frame: bool,
}

impl BluetoothSerial {
    pub fn new(rx: BufferedUartRx, tx: BufferedUartTx) -> Self {
        Self {
            rx,
            tx,
            in_frame: false,
        }
    }

    fn ready(&mut self) -> bool {
        self.rx.read_ready().unwrap_or(false)
    }
}

impl SerialPort for BluetoothSerial {
    type Error = Error;

    fn bytes_available(&mut self) -> usize {
        if self.ready() {
            return 1;
        }
        if self.in_frame {
            let deadline = Instant::now() + Duration::from_micros(INTER_BYTE_GAP_US);
            while Instant::now() < deadline {
                if self.ready() {
                    return 1;
                }
            }
        }
        self.in_frame = false;
        0
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut byte = [0u8; 1];
        match self.rx.read(&mut byte) {
            Ok(_) => {
                self.in_frame = true;
                Ok(byte[0])
            }
            Err(e) => {
                self.in_frame = false;
                Err(e)
            }
        }
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.write_all(data)?;
        self.tx.flush()
    }
}
