//! Serial transport abstractions
//!
//! The host talks to the device over a wireless serial bridge. The core
//! polls it once per tick: it asks how much is buffered, drains byte by byte
//! and answers with a single write.

/// Byte-oriented serial port
pub trait SerialPort {
    /// Error type for read and write operations
    type Error;

    /// Number of received bytes buffered and ready to read
    ///
    /// Implementations that cannot count may return 1 while data is pending.
    fn bytes_available(&mut self) -> usize;

    /// Read a single buffered byte
    ///
    /// Only called after [`SerialPort::bytes_available`] reported data.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Write the whole buffer
    ///
    /// Blocks until all data has been queued or an error occurs. The core
    /// calls this once per response so a response is never interleaved.
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}
