mod tests {
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::num::NonZeroU32;
    use std::rc::Rc;

    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::{ErrorType, OutputPin};
    use lightpaint::transmitter::{
        BITS_PER_PIXEL, BitBangLine, DirectTransmitter, OneWireLine, OneWireTimings, Pulse,
        Transmitter, encode_word, frame_bits, frame_pulses,
    };
    use lightpaint::Frame;

    const TIMINGS: OneWireTimings = OneWireTimings::WS2812;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        High,
        Low,
        DelayNs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockPin(Log);

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::Low);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::High);
            Ok(())
        }
    }

    struct MockDelay(Log);

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().push(Event::DelayNs(ns));
        }
    }

    /// Line that records pulses and latches
    #[derive(Default)]
    struct RecordingLine {
        pulses: Vec<Pulse>,
        latches: usize,
    }

    impl OneWireLine for RecordingLine {
        type Error = Infallible;

        fn send_pulse(&mut self, pulse: Pulse, _: &OneWireTimings) -> Result<(), Self::Error> {
            self.pulses.push(pulse);
            Ok(())
        }

        fn latch(&mut self, _: &OneWireTimings) -> Result<(), Self::Error> {
            self.latches += 1;
            Ok(())
        }
    }

    #[test]
    fn test_ws2812_bit_period() {
        assert_eq!(TIMINGS.cycles_per_bit(), 10);
        assert_eq!(TIMINGS.cycles_to_ns(1), 125);
        assert_eq!(TIMINGS.bit_ns(), 1250);
    }

    #[test]
    fn test_pulse_shapes() {
        let one = TIMINGS.pulse(true);
        let zero = TIMINGS.pulse(false);
        assert_eq!(one, Pulse { high_cycles: 7, low_cycles: 3 });
        assert_eq!(zero, Pulse { high_cycles: 2, low_cycles: 8 });
        assert_eq!(one.high_ns(&TIMINGS), 875);
        assert_eq!(zero.high_ns(&TIMINGS), 250);
        assert_eq!(zero.low_ns(&TIMINGS), 1000);
    }

    #[test]
    fn test_long_phases_do_not_overflow() {
        let timings = OneWireTimings {
            rise_cycles: 200,
            data_cycles: 200,
            tail_cycles: 200,
            ..TIMINGS
        };
        assert_eq!(timings.cycles_per_bit(), 600);
        assert_eq!(timings.pulse(true), Pulse { high_cycles: 400, low_cycles: 200 });
        assert_eq!(timings.pulse(false), Pulse { high_cycles: 200, low_cycles: 400 });
        assert_eq!(timings.pulse(true).levels().count(), 600);
    }

    #[test]
    fn test_slow_clock_saturates_nanoseconds() {
        let timings = OneWireTimings {
            clock_hz: NonZeroU32::MIN,
            ..TIMINGS
        };
        assert_eq!(timings.cycles_to_ns(1), 1_000_000_000);
        assert_eq!(timings.cycles_to_ns(5), u32::MAX);
        assert_eq!(timings.bit_ns(), u32::MAX);
    }

    #[test]
    fn test_pulse_levels() {
        let levels: Vec<bool> = TIMINGS.pulse(false).levels().collect();
        assert_eq!(
            levels,
            [true, true, false, false, false, false, false, false, false, false]
        );
        assert_eq!(TIMINGS.pulse(true).levels().filter(|&level| level).count(), 7);
    }

    #[test]
    fn test_encode_word_msb_first() {
        let bits: Vec<bool> = encode_word(0x0080_0001).collect();
        assert_eq!(bits.len(), BITS_PER_PIXEL as usize);
        assert!(bits[0]);
        assert!(bits[23]);
        assert_eq!(bits.iter().filter(|&&bit| bit).count(), 2);
    }

    #[test]
    fn test_encode_word_discards_top_byte() {
        let with_top: Vec<bool> = encode_word(0xFF00_00AA).collect();
        let without_top: Vec<bool> = encode_word(0x0000_00AA).collect();
        assert_eq!(with_top, without_top);
        assert_eq!(encode_word(0).len(), 24);
    }

    #[test]
    fn test_frame_bits_in_order() {
        let words = [0x00FF_FFFF, 0];
        let bits: Vec<bool> = frame_bits(&words).collect();
        assert_eq!(bits.len(), 48);
        assert!(bits[..24].iter().all(|&bit| bit));
        assert!(bits[24..].iter().all(|&bit| !bit));
    }

    #[test]
    fn test_frame_pulse_cycles() {
        let words = [0x0000_DC00; 3];
        let cycles: u32 = frame_pulses(&words, &TIMINGS)
            .map(|pulse| u32::from(pulse.high_cycles) + u32::from(pulse.low_cycles))
            .sum();
        assert_eq!(cycles, 3 * 24 * 10);
    }

    #[test]
    fn test_bit_bang_line_waveform() {
        let log: Log = Rc::default();
        let mut line = BitBangLine::new(MockPin(log.clone()), MockDelay(log.clone())).unwrap();
        assert_eq!(log.borrow().as_slice(), [Event::Low]);
        log.borrow_mut().clear();

        line.send_pulse(TIMINGS.pulse(true), &TIMINGS).unwrap();
        line.send_pulse(TIMINGS.pulse(false), &TIMINGS).unwrap();
        assert_eq!(
            log.borrow().as_slice(),
            [
                Event::High,
                Event::DelayNs(875),
                Event::Low,
                Event::DelayNs(375),
                Event::High,
                Event::DelayNs(250),
                Event::Low,
                Event::DelayNs(1000),
            ]
        );
    }

    #[test]
    fn test_bit_bang_latch_holds_line_low() {
        let log: Log = Rc::default();
        let mut line = BitBangLine::new(MockPin(log.clone()), MockDelay(log.clone())).unwrap();
        log.borrow_mut().clear();

        line.latch(&TIMINGS).unwrap();
        let events = log.borrow();
        assert_eq!(events.first(), Some(&Event::Low));
        let waited: u32 = events
            .iter()
            .map(|event| match event {
                Event::DelayNs(ns) => *ns,
                _ => 0,
            })
            .sum();
        assert_eq!(waited, 80_000);
    }

    #[test]
    fn test_direct_transmitter_sends_full_frame() {
        let mut transmitter = DirectTransmitter::new(RecordingLine::default(), TIMINGS);
        let frame: Frame<120> = Frame::from_words([0x0000_00FF; 120]);
        transmitter.transmit(frame);

        let line = transmitter.release();
        assert_eq!(line.pulses.len(), 120 * 24);
        assert_eq!(line.latches, 1);
        // 16 zero bits then 8 one bits per pixel
        assert_eq!(line.pulses[15], TIMINGS.pulse(false));
        assert_eq!(line.pulses[16], TIMINGS.pulse(true));
    }
}
