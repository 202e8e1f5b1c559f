mod tests {
    use myrtio_status_led::color::{
        BLUE, DEFAULT_BRIGHTNESS, DEFAULT_COLOR, GREEN, ORANGE, Rgb, WHITE, apply_brightness,
        rgb_from_u32, rgb_to_u32,
    };

    #[test]
    fn test_apply_brightness() {
        assert_eq!(apply_brightness(GREEN, 8), Rgb { r: 0, g: 8, b: 0 });
        assert_eq!(apply_brightness(BLUE, 32), Rgb { r: 0, g: 0, b: 32 });
        assert_eq!(apply_brightness(ORANGE, 8), Rgb { r: 8, g: 1, b: 0 });
        assert_eq!(apply_brightness(WHITE, 255), WHITE);
        assert_eq!(apply_brightness(WHITE, 0), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_apply_brightness_per_channel() {
        for brightness in 0..=255u8 {
            for value in 0..=255u8 {
                let color = Rgb {
                    r: value,
                    g: 255 - value,
                    b: value / 2,
                };
                let scale = |c: u8| (u32::from(c) * u32::from(brightness) / 255) as u8;
                assert_eq!(
                    apply_brightness(color, brightness),
                    Rgb {
                        r: scale(color.r),
                        g: scale(color.g),
                        b: scale(color.b),
                    }
                );
            }
        }
    }

    #[test]
    fn test_default_color() {
        assert_eq!(DEFAULT_COLOR, BLUE);
        assert_eq!(DEFAULT_BRIGHTNESS, 32);
        assert_eq!(
            apply_brightness(DEFAULT_COLOR, DEFAULT_BRIGHTNESS),
            Rgb { r: 0, g: 0, b: 32 }
        );
    }

    #[test]
    fn test_rgb_u32() {
        assert_eq!(rgb_to_u32(ORANGE), 0x00FF_2000);
        assert_eq!(rgb_to_u32(WHITE), 0x00FF_FFFF);
        assert_eq!(rgb_from_u32(0x00FF_2000), ORANGE);
        assert_eq!(
            rgb_from_u32(0x1234_5678),
            Rgb {
                r: 0x34,
                g: 0x56,
                b: 0x78
            }
        );
    }
}
