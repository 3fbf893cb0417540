//! Mock hardware for unit tests

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use btmatrix_hal::{
    ButtonPin, Clock, LowPower, PixelDriver, RandomSource, Rgb, SerialPort, WakeHandler,
};

/// Strip that records staged and flushed colors
pub struct MockDisplay<const N: usize> {
    pub staged: [Rgb; N],
    pub shown: [Rgb; N],
    pub show_count: usize,
}

impl<const N: usize> MockDisplay<N> {
    pub fn new() -> Self {
        Self {
            staged: [(0, 0, 0); N],
            shown: [(0, 0, 0); N],
            show_count: 0,
        }
    }
}

impl<const N: usize> PixelDriver for MockDisplay<N> {
    fn len(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.staged.get_mut(index) {
            *slot = color;
        }
    }

    fn show(&mut self) {
        self.shown = self.staged;
        self.show_count += 1;
    }
}

/// Interrupt line shared by [`MockButton`] and [`MockPower`]
type WakeLine = Rc<Cell<Option<WakeHandler>>>;

pub struct MockButton {
    pub pressed: bool,
    pub attach_count: usize,
    line: WakeLine,
}

impl MockButton {
    pub fn attached(&self) -> bool {
        self.line.get().is_some()
    }
}

impl ButtonPin for MockButton {
    fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn attach_wake(&mut self, handler: WakeHandler) {
        self.attach_count += 1;
        self.line.set(Some(handler));
    }

    fn detach_wake(&mut self) {
        self.line.set(None);
    }
}

/// Low-power mode that "sleeps" until the attached handler fires
pub struct MockPower {
    pub sleeps: usize,
    line: WakeLine,
}

impl LowPower for MockPower {
    fn sleep_until_interrupt(&mut self) {
        self.sleeps += 1;
        if let Some(handler) = self.line.get() {
            handler();
        }
    }
}

/// Button and power mock wired to the same interrupt line
pub fn button_and_power() -> (MockButton, MockPower) {
    let line: WakeLine = Rc::new(Cell::new(None));
    (
        MockButton {
            pressed: false,
            attach_count: 0,
            line: line.clone(),
        },
        MockPower { sleeps: 0, line },
    )
}

pub struct MockClock {
    pub now: u32,
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSerialError;

/// Serial port with scripted input and recorded writes
#[derive(Default)]
pub struct MockSerial {
    pub rx: VecDeque<Result<u8, MockSerialError>>,
    pub writes: Vec<Vec<u8>>,
    pub fail_writes: bool,
}

impl MockSerial {
    pub fn push(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied().map(Ok));
    }

    pub fn push_error(&mut self) {
        self.rx.push_back(Err(MockSerialError));
    }
}

impl SerialPort for MockSerial {
    type Error = MockSerialError;

    fn bytes_available(&mut self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.rx.pop_front().unwrap_or(Err(MockSerialError))
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockSerialError);
        }
        self.writes.push(data.to_vec());
        Ok(())
    }
}

/// Deterministic xorshift generator
pub struct MockRng {
    state: u32,
}

impl MockRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }
}

impl RandomSource for MockRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
