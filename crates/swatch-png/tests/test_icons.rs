use swatch_core::color::Rgb;
use swatch_png::icons::{encode_icon_set, icon_color, ICON_SIZES};

#[test]
fn test_icons_decode() {
    let color = icon_color("#E50914");
    let icons = encode_icon_set(color).unwrap();

    assert_eq!(icons.len(), ICON_SIZES.len());

    for icon in icons {
        let decoder = png::Decoder::new(icon.data.as_slice());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!((info.width, info.height), (icon.size, icon.size));
        assert!(buf[..info.buffer_size()]
            .chunks_exact(3)
            .all(|px| px == [229, 9, 20]));
    }
}

#[test]
fn test_black_background_gets_gray_icons() {
    let icons = encode_icon_set(icon_color("#000000")).unwrap();
    let expected = encode_icon_set(Rgb::DARK_GRAY).unwrap();

    assert_eq!(icons, expected);
}
