mod tests {
    use lightpaint::color::{BLACK, BLUE, RED, Rgb, WHITE, WORD_MASK, pack_grb, unpack_grb};

    #[test]
    fn test_pack_grb_order() {
        assert_eq!(pack_grb(Rgb { r: 0x11, g: 0x22, b: 0x33 }), 0x0022_1133);
        assert_eq!(pack_grb(RED), 0x0000_DC00);
        assert_eq!(pack_grb(BLUE), 0x0000_00FF);
        assert_eq!(pack_grb(BLACK), 0);
    }

    #[test]
    fn test_pack_grb_keeps_top_byte_clear() {
        let word = pack_grb(Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(word, WORD_MASK);
        assert_eq!(word & !WORD_MASK, 0);
    }

    #[test]
    fn test_unpack_grb() {
        assert_eq!(unpack_grb(0x0078_7878), WHITE);
        assert_eq!(unpack_grb(0x0000_DC00), RED);
        // The top byte never reaches the wire
        assert_eq!(unpack_grb(0xAB00_DC00), RED);
    }
}
