// src/core/color.rs

use crate::models::Rgb;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("Unknown color '{0}'. Use a named color or '#rrggbb'.")]
    Unknown(String),
}

/// Parses a color name (e.g., "lightskyblue") or a `#rrggbb` hex string into an `Rgb`.
pub fn parse_color(value: &str) -> Result<Rgb, ColorError> {
    let trimmed = value.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::Unknown(value.to_string()));
    }

    match trimmed.to_lowercase().as_str() {
        "black" => Ok(Rgb(0, 0, 0)),
        "white" => Ok(Rgb(255, 255, 255)),
        "gray" | "grey" => Ok(Rgb(128, 128, 128)),
        "red" => Ok(Rgb(255, 0, 0)),
        "green" => Ok(Rgb(0, 128, 0)),
        "blue" => Ok(Rgb(0, 0, 255)),
        "yellow" => Ok(Rgb(255, 255, 0)),
        "orange" => Ok(Rgb(255, 165, 0)),
        "magenta" => Ok(Rgb(255, 0, 255)),
        "cyan" => Ok(Rgb(0, 255, 255)),
        "lightskyblue" => Ok(Rgb(135, 206, 250)),
        "steelblue" => Ok(Rgb(70, 130, 180)),
        "darkorchid" => Ok(Rgb(153, 50, 204)),
        "mediumpurple" => Ok(Rgb(147, 112, 219)),
        "seagreen" => Ok(Rgb(46, 139, 87)),
        "tomato" => Ok(Rgb(255, 99, 71)),
        _ => Err(ColorError::Unknown(value.to_string())),
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
