//! Scheduler tick and mode dispatch

use btmatrix_hal::{ButtonPin, Clock, LowPower, PixelDriver, RandomSource, SerialPort, WakeHandler};
use btmatrix_protocol::{Action, RequestDecoder, Response, MAX_LEDS, MAX_RESPONSE_SIZE};

use super::Peripherals;
use crate::config::ControllerConfig;
use crate::input::ButtonDebouncer;
use crate::pixels::{Animator, Color, PixelBuffer};
use crate::state::{Mode, ModeCell, ModeEvent};

/// Controller for a strip of `N` LEDs
pub struct ModeController<'a, const N: usize, D, B, S, C, P, R> {
    /// Current mode, shared with the wake handler
    mode: &'a ModeCell,
    /// Attached to the button while asleep
    wake: WakeHandler,
    pixels: PixelBuffer<N>,
    animator: Animator,
    debouncer: ButtonDebouncer,
    hw: Peripherals<D, B, S, C, P, R>,
}

impl<'a, const N: usize, D, B, S, C, P, R> ModeController<'a, N, D, B, S, C, P, R>
where
    D: PixelDriver,
    B: ButtonPin,
    S: SerialPort,
    C: Clock,
    P: LowPower,
    R: RandomSource,
{
    /// LED indices are one byte on the wire
    const STRIP_FITS_PROTOCOL: () = assert!(N > 0 && N <= MAX_LEDS);

    /// Create a controller with default timing
    ///
    /// `wake` must only switch `mode` to [`Mode::Autonomous`]; it runs in
    /// interrupt context.
    pub fn new(mode: &'a ModeCell, wake: WakeHandler, hw: Peripherals<D, B, S, C, P, R>) -> Self {
        Self::with_config(mode, wake, hw, ControllerConfig::default())
    }

    /// Create a controller with explicit timing
    pub fn with_config(
        mode: &'a ModeCell,
        wake: WakeHandler,
        hw: Peripherals<D, B, S, C, P, R>,
        config: ControllerConfig,
    ) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::STRIP_FITS_PROTOCOL;

        Self {
            mode,
            wake,
            pixels: PixelBuffer::new(),
            animator: Animator::new(config.animation_interval_ms),
            debouncer: ButtonDebouncer::new(config.debounce_window_ms),
            hw,
        }
    }

    /// Turn the strip off before the first tick
    pub fn begin(&mut self) {
        self.pixels.clear();
        self.pixels.write_to(&mut self.hw.display);
        info!("boot finished, {} LEDs, mode {}", N, self.mode.get());
    }

    /// Get current mode
    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    /// Get the color state of every LED
    pub fn pixels(&self) -> &PixelBuffer<N> {
        &self.pixels
    }

    pub fn peripherals(&self) -> &Peripherals<D, B, S, C, P, R> {
        &self.hw
    }

    pub fn peripherals_mut(&mut self) -> &mut Peripherals<D, B, S, C, P, R> {
        &mut self.hw
    }

    /// Run one scheduler iteration
    ///
    /// Returns the mode at the end of the tick.
    pub fn tick(&mut self) -> Mode {
        let now = self.hw.clock.now_ms();
        self.poll_button(now);

        match self.mode.get() {
            Mode::Idle => self.sleep(),
            mode if mode.animates() => {
                self.animator
                    .tick(now, &mut self.pixels, &mut self.hw.rng, &mut self.hw.display);
            }
            _ => {}
        }

        self.poll_serial();
        self.mode.get()
    }

    fn poll_button(&mut self, now: u32) {
        let state = self.debouncer.classify(self.hw.button.is_pressed(), now);
        if let Some(event) = ModeEvent::from_button(state) {
            let mode = self.mode.apply(event);
            info!("button {}, mode {}", state, mode);
        }
    }

    /// Blank the strip and halt until the button wakes us
    fn sleep(&mut self) {
        self.pixels.clear();
        self.pixels.write_to(&mut self.hw.display);
        self.hw.button.attach_wake(self.wake);

        info!("sleeping");
        self.hw.power.sleep_until_interrupt();

        self.hw.button.detach_wake();
        self.mode.apply(ModeEvent::WokeUp);
        info!("waking up");
    }

    /// Drain everything buffered as one frame and answer it
    fn poll_serial(&mut self) {
        if self.hw.serial.bytes_available() == 0 {
            return;
        }

        let mut decoder = RequestDecoder::new(N);
        while self.hw.serial.bytes_available() > 0 {
            let byte = match self.hw.serial.read_byte() {
                Ok(byte) => byte,
                Err(_) => {
                    warn!("serial read failed after {} bytes, frame dropped", decoder.bytes_read());
                    return;
                }
            };
            trace!("received {=u8:#x}", byte);
            let action = decoder.feed(byte);
            self.apply(action);
        }

        let summary = decoder.finish();
        debug!("read {} bytes", summary.bytes_read);
        self.respond(Response::from(summary));
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Pending => {}
            Action::SetLed { index, r, g, b } => {
                let index = usize::from(index);
                let color = Color::new(r, g, b);
                self.pixels.set(index, color);
                self.hw.display.set_pixel(index, color.into());
                self.hw.display.show();
                self.mode.apply(ModeEvent::ProtocolWrite);
            }
            Action::FillAll { r, g, b } => {
                let color = Color::new(r, g, b);
                self.pixels.fill(color);
                self.hw.display.fill(color.into());
                self.hw.display.show();
                self.mode.apply(ModeEvent::ProtocolWrite);
            }
            Action::Discarded(byte) => debug!("consuming extra data: {=u8:#x}", byte),
        }
    }

    fn respond(&mut self, response: Response) {
        let mut buffer = [0u8; MAX_RESPONSE_SIZE];
        let colors = self.pixels.colors().map(Color::to_array);
        let len = match response.encode(colors, &mut buffer) {
            Ok(len) => len,
            Err(err) => {
                warn!("response encoding failed: {}", err);
                return;
            }
        };

        match self.hw.serial.write_all(&buffer[..len]) {
            Ok(()) => info!("response: {}", response.status.name()),
            Err(_) => warn!("response write failed: {}", response.status.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use btmatrix_protocol::{LedEntry, ParsedResponse, Request, Status};
    use proptest::prelude::*;
    use std::vec::Vec;

    const LEDS: usize = 64;

    type TestController<'a> = ModeController<
        'a,
        LEDS,
        MockDisplay<LEDS>,
        MockButton,
        MockSerial,
        MockClock,
        MockPower,
        MockRng,
    >;

    /// A fresh static mode cell and a wake handler bound to it
    macro_rules! mode_cell {
        ($mode:expr) => {{
            static MODE: ModeCell = ModeCell::new(Mode::Autonomous);
            fn wake() {
                MODE.wake();
            }
            MODE.set($mode);
            (&MODE, wake as WakeHandler)
        }};
    }

    fn controller(mode: &ModeCell, wake: WakeHandler) -> TestController<'_> {
        let (button, power) = button_and_power();
        let mut controller = ModeController::new(
            mode,
            wake,
            Peripherals {
                display: MockDisplay::new(),
                button,
                serial: MockSerial::default(),
                clock: MockClock { now: 0 },
                power,
                rng: MockRng::new(42),
            },
        );
        controller.begin();
        controller
    }

    fn send(controller: &mut TestController<'_>, bytes: &[u8]) -> Option<Vec<u8>> {
        let hw = controller.peripherals_mut();
        hw.serial.push(bytes);
        hw.clock.now += 10;
        let before = hw.serial.writes.len();
        controller.tick();
        let writes = &controller.peripherals().serial.writes;
        assert!(writes.len() <= before + 1, "one response per frame");
        writes.get(before).cloned()
    }

    /// Advance one debounce window with the given raw level
    fn button_window(controller: &mut TestController<'_>, pressed: bool) -> Mode {
        let hw = controller.peripherals_mut();
        hw.button.pressed = pressed;
        hw.clock.now += 200;
        controller.tick()
    }

    #[test]
    fn test_power_on_animates() {
        let (mode, wake) = mode_cell!(Mode::Autonomous);
        let mut controller = controller(mode, wake);
        let shown_at_boot = controller.peripherals().display.show_count;

        assert_eq!(controller.tick(), Mode::Autonomous);
        assert_eq!(controller.peripherals().display.show_count, shown_at_boot + 1);
        assert!(controller.pixels().colors().any(|c| c != Color::BLACK));
    }

    #[test]
    fn test_get_leds_snapshot() {
        let (mode, wake) = mode_cell!(Mode::Autonomous);
        let mut controller = controller(mode, wake);

        let response = send(&mut controller, &[0x01]).unwrap();
        assert_eq!(response.len(), 258);
        assert_eq!(&response[..2], &[0x01, 0x00]);
        for (i, entry) in response[2..].chunks_exact(4).enumerate() {
            let color = controller.pixels().get(i).unwrap();
            assert_eq!(entry, &[i as u8, color.r, color.g, color.b]);
        }
        // Reading does not take control
        assert_eq!(controller.mode(), Mode::Autonomous);
    }

    #[test]
    fn test_set_leds_all() {
        let (mode, wake) = mode_cell!(Mode::Autonomous);
        let mut controller = controller(mode, wake);

        let response = send(&mut controller, &[0x03, 10, 20, 30]).unwrap();
        assert_eq!(response, [0x03, 0x00]);
        assert_eq!(controller.mode(), Mode::ProtocolControlled);
        assert!(controller.pixels().colors().all(|c| c == Color::new(10, 20, 30)));
        assert!(controller
            .peripherals()
            .display
            .shown
            .iter()
            .all(|c| *c == (10, 20, 30)));
    }

    #[test]
    fn test_set_leds_out_of_range_keeps_earlier_group() {
        let (mode, wake) = mode_cell!(Mode::Autonomous);
        let mut controller = controller(mode, wake);

        let response = send(&mut controller, &[0x02, 5, 255, 0, 0, 99, 0, 0, 0]).unwrap();
        assert_eq!(response, [0x02, 0x02]);
        assert_eq!(controller.mode(), Mode::ProtocolControlled);

        let snapshot = ParsedResponse::parse(&send(&mut controller, &[0x01]).unwrap()).unwrap();
        assert_eq!(snapshot.led(5), Some(LedEntry::new(5, 255, 0, 0)));
    }

    #[test]
    fn test_out_of_range_only_does_not_mutate() {
        let (mode, wake) = mode_cell!(Mode::ProtocolControlled);
        let mut controller = controller(mode, wake);

        let response = send(&mut controller, &[0x02, 64, 1, 2, 3]).unwrap();
        assert_eq!(response, [0x02, 0x02]);
        assert!(controller.pixels().colors().all(|c| c == Color::BLACK));
    }

    #[test]
    fn test_frame_split_across_ticks() {
        let (mode, wake) = mode_cell!(Mode::ProtocolControlled);
        let mut controller = controller(mode, wake);

        assert_eq!(send(&mut controller, &[0x03, 1]), Some(vec![0x03, 0x01]));
        assert_eq!(send(&mut controller, &[2, 3]), Some(vec![0x02, 0x01]));

        assert_eq!(
            controller.peripherals().serial.writes,
            [vec![0x03, 0x01], vec![0x02, 0x01]]
        );
        assert!(controller.pixels().colors().all(|c| c == Color::BLACK));
        assert_eq!(controller.mode(), Mode::ProtocolControlled);
    }

    #[test]
    fn test_invalid_command() {
        let (mode, wake) = mode_cell!(Mode::ProtocolControlled);
        let mut controller = controller(mode, wake);

        let response = send(&mut controller, &[0x42]).unwrap();
        assert_eq!(response, [0x00, 0xFF]);
        assert!(controller.pixels().colors().all(|c| c == Color::BLACK));
    }

    #[test]
    fn test_payload_without_command() {
        let (mode, wake) = mode_cell!(Mode::ProtocolControlled);
        let mut controller = controller(mode, wake);

        let response = send(&mut controller, &[0x42, 0x03, 1, 2, 3]).unwrap();
        assert_eq!(response, [0x00, 0xFE]);
        assert!(controller.pixels().colors().all(|c| c == Color::BLACK));
    }

    #[test]
    fn test_truncated_set_all_is_invalid_length() {
        let (mode, wake) = mode_cell!(Mode::Autonomous);
        let mut controller = controller(mode, wake);

        let response = send(&mut controller, &[0x03, 10, 20]).unwrap();
        assert_eq!(response, [0x03, 0x01]);
        assert_eq!(controller.mode(), Mode::Autonomous);
    }

    #[test]
    fn test_protocol_control_is_sticky() {
        let (mode, wake) = mode_cell!(Mode::Autonomous);
        let mut controller = controller(mode, wake);
        send(&mut controller, &[0x03, 1, 2, 3]);
        let shown = controller.peripherals().display.show_count;

        for _ in 0..100 {
            controller.peripherals_mut().clock.now += 50;
            assert_eq!(controller.tick(), Mode::ProtocolControlled);
        }
        assert_eq!(controller.peripherals().display.show_count, shown);
        assert!(controller.pixels().colors().all(|c| c == Color::new(1, 2, 3)));
    }

    #[test]
    fn test_short_press_resumes_animation() {
        let (mode, wake) = mode_cell!(Mode::ProtocolControlled);
        let mut controller = controller(mode, wake);
        controller.tick();

        assert_eq!(button_window(&mut controller, true), Mode::ProtocolControlled);
        assert_eq!(button_window(&mut controller, false), Mode::Autonomous);
        assert!(controller.pixels().colors().any(|c| c != Color::BLACK));
    }

    #[test]
    fn test_hold_sleeps_until_wake() {
        let (mode, wake) = mode_cell!(Mode::Autonomous);
        let mut controller = controller(mode, wake);
        controller.tick();

        button_window(&mut controller, true);
        // Hold detected: blank, sleep, wake through the attached handler
        assert_eq!(button_window(&mut controller, true), Mode::Autonomous);

        let hw = controller.peripherals();
        assert_eq!(hw.power.sleeps, 1);
        assert_eq!(hw.button.attach_count, 1);
        assert!(!hw.button.attached());
        assert!(hw.display.shown.iter().all(|c| *c == (0, 0, 0)));
        assert!(controller.pixels().colors().all(|c| c == Color::BLACK));

        // Releasing after the hold is not a second event
        assert_eq!(button_window(&mut controller, false), Mode::Autonomous);
        assert_eq!(controller.peripherals().power.sleeps, 1);
    }

    #[test]
    fn test_hold_overrides_protocol_control() {
        let (mode, wake) = mode_cell!(Mode::Autonomous);
        let mut controller = controller(mode, wake);
        send(&mut controller, &[0x03, 9, 9, 9]);
        assert_eq!(controller.mode(), Mode::ProtocolControlled);

        button_window(&mut controller, true);
        button_window(&mut controller, true);
        assert_eq!(controller.peripherals().power.sleeps, 1);
        assert!(controller.pixels().colors().all(|c| c == Color::BLACK));
    }

    #[test]
    fn test_read_failure_drops_frame() {
        let (mode, wake) = mode_cell!(Mode::ProtocolControlled);
        let mut controller = controller(mode, wake);

        let hw = controller.peripherals_mut();
        hw.serial.push(&[0x03, 1, 2]);
        hw.serial.push_error();
        controller.tick();
        assert!(controller.peripherals().serial.writes.is_empty());
        assert!(controller.pixels().colors().all(|c| c == Color::BLACK));

        // Listening resumes on the next tick
        assert_eq!(send(&mut controller, &[0x01]).map(|r| r.len()), Some(258));
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let (mode, wake) = mode_cell!(Mode::Autonomous);
        let mut controller = controller(mode, wake);
        controller.peripherals_mut().serial.fail_writes = true;

        assert_eq!(send(&mut controller, &[0x03, 4, 5, 6]), None);
        assert_eq!(controller.mode(), Mode::ProtocolControlled);
        assert_eq!(controller.pixels().get(0), Some(Color::new(4, 5, 6)));
    }

    #[test]
    fn test_no_response_without_data() {
        let (mode, wake) = mode_cell!(Mode::Autonomous);
        let mut controller = controller(mode, wake);
        for _ in 0..10 {
            controller.tick();
        }
        assert!(controller.peripherals().serial.writes.is_empty());
    }

    #[test]
    fn test_with_config_interval() {
        let (mode, wake) = mode_cell!(Mode::Autonomous);
        let (button, power) = button_and_power();
        let mut controller: TestController<'_> = ModeController::with_config(
            mode,
            wake,
            Peripherals {
                display: MockDisplay::new(),
                button,
                serial: MockSerial::default(),
                clock: MockClock { now: 0 },
                power,
                rng: MockRng::new(1),
            },
            ControllerConfig::default().with_animation_interval(500),
        );

        controller.tick();
        controller.peripherals_mut().clock.now = 499;
        controller.tick();
        assert_eq!(controller.peripherals().display.show_count, 1);
        controller.peripherals_mut().clock.now = 500;
        controller.tick();
        assert_eq!(controller.peripherals().display.show_count, 2);
    }

    fn led_entries() -> impl Strategy<Value = Vec<LedEntry>> {
        proptest::collection::vec(
            (0..LEDS as u8, any::<[u8; 3]>())
                .prop_map(|(index, [r, g, b])| LedEntry::new(index, r, g, b)),
            1..=LEDS,
        )
    }

    proptest! {
        #[test]
        fn prop_set_then_get_roundtrip(frames in proptest::collection::vec(led_entries(), 1..4)) {
            let (mode, wake) = mode_cell!(Mode::ProtocolControlled);
            let mut controller = controller(mode, wake);
            let mut expected = [LedEntry::default(); LEDS];
            for (i, entry) in expected.iter_mut().enumerate() {
                entry.index = i as u8;
            }

            for entries in &frames {
                let request = Request::SetLeds(entries).encode_to_vec().unwrap();
                let response = send(&mut controller, &request).unwrap();
                prop_assert_eq!(response, vec![0x02, 0x00]);
                for entry in entries {
                    expected[usize::from(entry.index)] = *entry;
                }
            }

            let snapshot = ParsedResponse::parse(&send(&mut controller, &[0x01]).unwrap()).unwrap();
            prop_assert_eq!(snapshot.response.status, Status::Ok);
            prop_assert_eq!(snapshot.leds.as_slice(), &expected[..]);
        }
    }
}
