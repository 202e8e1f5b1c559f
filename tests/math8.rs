mod tests {
    use myrtio_status_led::math8::scale_linear;

    #[test]
    fn test_scale_linear() {
        assert_eq!(scale_linear(255, 255), 255);
        assert_eq!(scale_linear(255, 0), 0);
        assert_eq!(scale_linear(0, 128), 0);
        assert_eq!(scale_linear(128, 128), 64);
        assert_eq!(scale_linear(255, 32), 32);
        assert_eq!(scale_linear(32, 8), 1);
        assert_eq!(scale_linear(254, 1), 0);
    }

    #[test]
    fn test_scale_linear_truncates_over_full_range() {
        for value in 0..=255u8 {
            for scale in 0..=255u8 {
                let expected = (u32::from(value) * u32::from(scale) / 255) as u8;
                assert_eq!(scale_linear(value, scale), expected);
                assert!(scale_linear(value, scale) <= value);
            }
        }
    }
}
