/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Icons embedded in a wallet pass
//!
//! A pass needs an icon at three scales. Without artwork these are
//! plain squares in the pass background color.
use log::debug;
use swatch_core::color::{parse_color_or, Rgb};

use crate::encoder::create_solid_image;
use crate::error::PngEncodeErrors;

/// File name and edge length of every icon in a pass
pub const ICON_SIZES: [(&str, u32); 3] = [
    ("icon.png", 29),
    ("icon@2x.png", 58),
    ("icon@3x.png", 87)
];

/// Black backgrounds get a dark gray icon
const BLACK_BACKGROUND: &str = "#000000";
const BLACK_REPLACEMENT: &str = "#333333";

/// Pick the icon fill for a pass background color string
///
/// The literal `#000000` is replaced by `#333333`, anything
/// that doesn't parse falls back to [`Rgb::DARK_GRAY`].
///
/// ```
/// use swatch_core::color::Rgb;
/// use swatch_png::icons::icon_color;
///
/// assert_eq!(icon_color("#000000"), Rgb::DARK_GRAY);
/// assert_eq!(icon_color("#E50914"), Rgb::new(229, 9, 20));
/// assert_eq!(icon_color("garbage"), Rgb::DARK_GRAY);
/// ```
pub fn icon_color(background: &str) -> Rgb {
    let background = if background == BLACK_BACKGROUND {
        BLACK_REPLACEMENT
    } else {
        background
    };
    parse_color_or(background, Rgb::DARK_GRAY)
}

/// One encoded icon
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconAsset {
    pub name: &'static str,
    pub size: u32,
    pub data: Vec<u8>
}

/// Encode every icon in [`ICON_SIZES`] filled with `color`
pub fn encode_icon_set(color: Rgb) -> Result<Vec<IconAsset>, PngEncodeErrors> {
    ICON_SIZES
        .iter()
        .map(|&(name, size)| -> Result<IconAsset, PngEncodeErrors> {
            let data = create_solid_image(size, size, color)?;

            debug!("{name}: {size}x{size}, {} bytes", data.len());

            Ok(IconAsset { name, size, data })
        })
        .collect()
}

#[test]
fn test_icon_set() {
    let icons = encode_icon_set(icon_color("#000000")).unwrap();

    let names: Vec<&str> = icons.iter().map(|x| x.name).collect();
    assert_eq!(names, ["icon.png", "icon@2x.png", "icon@3x.png"]);

    for icon in &icons {
        let info = crate::chunks::read_png_info(&icon.data).unwrap();
        assert_eq!((info.width, info.height), (icon.size, icon.size));
    }
}

#[test]
fn test_only_exact_black_is_replaced() {
    // other spellings of black are taken at face value
    assert_eq!(icon_color("000000"), Rgb::BLACK);
    assert_eq!(icon_color("#000001"), Rgb::new(0, 0, 1));
    assert_eq!(icon_color(""), Rgb::DARK_GRAY);
}
