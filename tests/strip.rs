mod tests {
    use lightpaint::color::{BLUE, GREEN, RED};
    use lightpaint::{DEFAULT_BRIGHTNESS, Error, LED_COUNT, Rgb, Strip};

    #[test]
    fn test_new_strip_is_black_at_default_brightness() {
        let strip: Strip = Strip::new();
        assert_eq!(strip.len(), LED_COUNT);
        for pixel in &strip {
            assert_eq!(pixel.color, Rgb::default());
            assert_eq!(pixel.brightness, DEFAULT_BRIGHTNESS);
        }
    }

    #[test]
    fn test_set_color_round_trip() {
        let mut strip: Strip = Strip::new();
        for index in 0..LED_COUNT {
            let color = Rgb {
                r: (index * 2) as u8,
                g: (255 - index) as u8,
                b: (index % 7) as u8,
            };
            strip.set_color(index, color).unwrap();
            assert_eq!(strip.color(index).unwrap(), color);
        }
    }

    #[test]
    fn test_set_color_all() {
        let mut strip: Strip<8> = Strip::new();
        strip.set_color(3, RED).unwrap();
        strip.set_color_all(GREEN);
        assert!(strip.iter().all(|pixel| pixel.color == GREEN));
    }

    #[test]
    fn test_set_brightness_stores_value_unchanged() {
        let mut strip: Strip<8> = Strip::new();
        strip.set_brightness(2, 1.5).unwrap();
        strip.set_brightness(3, -0.25).unwrap();
        assert_eq!(strip.brightness(2).unwrap(), 1.5);
        assert_eq!(strip.brightness(3).unwrap(), -0.25);
        assert_eq!(strip.brightness(4).unwrap(), DEFAULT_BRIGHTNESS);

        strip.set_brightness_all(0.1);
        assert!(strip.iter().all(|pixel| pixel.brightness == 0.1));
    }

    #[test]
    fn test_index_past_end_fails() {
        let mut strip: Strip = Strip::new();
        let expected = Error::IndexOutOfRange {
            index: LED_COUNT,
            len: LED_COUNT,
        };
        assert_eq!(strip.set_color(LED_COUNT, BLUE), Err(expected));
        assert_eq!(strip.set_brightness(LED_COUNT, 0.5), Err(expected));
        assert_eq!(strip.color(LED_COUNT), Err(expected));
    }

    #[test]
    fn test_wrapped_negative_index_fails() {
        let mut strip: Strip = Strip::new();
        let minus_one = 0usize.wrapping_sub(1);
        assert!(matches!(
            strip.set_color(minus_one, BLUE),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            strip.set_brightness(minus_one, 0.5),
            Err(Error::IndexOutOfRange { .. })
        ));
        // Nothing was written
        assert!(strip.iter().all(|pixel| pixel.color == Rgb::default()));
    }

    #[test]
    fn test_error_display() {
        let err = Error::IndexOutOfRange { index: 120, len: 120 };
        assert_eq!(
            err.to_string(),
            "pixel index 120 out of range for a strip of 120 pixels"
        );
    }
}
