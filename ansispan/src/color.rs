//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Color name ⇄ SGR code tables.
//!
//! The eight base colors occupy codes `30-37` (foreground) and `40-47`
//! (background); their bright variants occupy `90-97` and `100-107`. The base
//! color of any of these codes is selected by `code % 10`.

use crate::consts::{SGR_BACKGROUND_DEFAULT, SGR_BACKGROUND_OFFSET, SGR_FOREGROUND_DEFAULT};
use crate::result::{CodecError, CodecResult};
use std::str::FromStr;

/// Names of the eight base colors, in SGR order.
pub const COLOR_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Names of the eight bright colors, in SGR order.
///
/// Each is `"bright"` followed by the capitalized base name.
pub const BRIGHT_COLOR_NAMES: [&str; 8] = [
    "brightBlack",
    "brightRed",
    "brightGreen",
    "brightYellow",
    "brightBlue",
    "brightMagenta",
    "brightCyan",
    "brightWhite",
];

const FOREGROUND_BASE: u8 = 30;
const FOREGROUND_BRIGHT: u8 = 90;

/// One of the sixteen named terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Color {
    /// Black - Color #0 (FG `30`, BG `40`).
    Black,
    /// Red - Color #1 (FG `31`, BG `41`).
    Red,
    /// Green - Color #2 (FG `32`, BG `42`).
    Green,
    /// Yellow - Color #3 (FG `33`, BG `43`).
    Yellow,
    /// Blue - Color #4 (FG `34`, BG `44`).
    Blue,
    /// Magenta - Color #5 (FG `35`, BG `45`).
    Magenta,
    /// Cyan - Color #6 (FG `36`, BG `46`).
    Cyan,
    /// White - Color #7 (FG `37`, BG `47`).
    White,

    /// Bright Black - Color #0 (FG `90`, BG `100`).
    BrightBlack,
    /// Bright Red - Color #1 (FG `91`, BG `101`).
    BrightRed,
    /// Bright Green - Color #2 (FG `92`, BG `102`).
    BrightGreen,
    /// Bright Yellow - Color #3 (FG `93`, BG `103`).
    BrightYellow,
    /// Bright Blue - Color #4 (FG `94`, BG `104`).
    BrightBlue,
    /// Bright Magenta - Color #5 (FG `95`, BG `105`).
    BrightMagenta,
    /// Bright Cyan - Color #6 (FG `96`, BG `106`).
    BrightCyan,
    /// Bright White - Color #7 (FG `97`, BG `107`).
    BrightWhite,
}

impl Color {
    /// All sixteen colors, base colors first.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Builds a color from its position (`0-7`) in the base table.
    pub fn from_index(index: u8, bright: bool) -> Option<Color> {
        if index > 7 {
            return None;
        }
        let offset = if bright { 8 } else { 0 };
        Some(Color::ALL[(index + offset) as usize])
    }

    /// Position of the base color (`0-7`), ignoring brightness.
    pub fn index(&self) -> u8 {
        (*self as u8) % 8
    }

    /// Returns `true` for the `Bright*` variants.
    pub fn is_bright(&self) -> bool {
        (*self as u8) >= 8
    }

    /// Looks up the color addressed by a foreground or background SGR code.
    ///
    /// | Code      | Result       |
    /// |-----------|--------------|
    /// | `30-37`   | base color   |
    /// | `40-47`   | base color   |
    /// | `90-97`   | bright color |
    /// | `100-107` | bright color |
    ///
    /// Any other code yields `None`.
    pub fn from_code(code: u8) -> Option<Color> {
        match code {
            30..=37 | 40..=47 => Color::from_index(code % 10, false),
            90..=97 | 100..=107 => Color::from_index(code % 10, true),
            _ => None,
        }
    }

    /// The SGR code selecting this color as foreground.
    pub fn foreground_code(&self) -> u8 {
        let base = if self.is_bright() {
            FOREGROUND_BRIGHT
        } else {
            FOREGROUND_BASE
        };
        base + self.index()
    }

    /// The SGR code selecting this color as background.
    pub fn background_code(&self) -> u8 {
        self.foreground_code() + SGR_BACKGROUND_OFFSET
    }

    /// The textual name, e.g. `"red"` or `"brightRed"`.
    pub fn name(&self) -> &'static str {
        let index = self.index() as usize;
        if self.is_bright() {
            BRIGHT_COLOR_NAMES[index]
        } else {
            COLOR_NAMES[index]
        }
    }

    /// Looks up a color by its textual name.
    pub fn from_name(name: &str) -> CodecResult<Color> {
        Color::ALL
            .iter()
            .copied()
            .find(|color| color.name() == name)
            .ok_or_else(|| CodecError::InvalidColorName {
                name: name.to_string(),
            })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_name(s)
    }
}

/// The payload of a `Color` or `BgColor` span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorValue {
    /// One of the sixteen named colors.
    Named(Color),
    /// A palette index from a `38;5;n` or `48;5;n` sequence.
    ///
    /// Produced by the parser only; the emitter rejects it.
    Indexed(u32),
    /// The terminal's default color for the channel (`39` / `49`).
    Default,
}

impl ColorValue {
    /// The SGR code selecting this value on the foreground channel.
    ///
    /// Only the eight base names are emittable; bright names fail with
    /// [`CodecError::InvalidColorName`] and indexed values with
    /// [`CodecError::UnsupportedColorValue`].
    pub fn foreground_code(&self) -> CodecResult<u8> {
        match self {
            ColorValue::Named(color) => emittable(*color).map(|color| color.foreground_code()),
            ColorValue::Indexed(value) => {
                Err(CodecError::UnsupportedColorValue { value: *value })
            }
            ColorValue::Default => Ok(SGR_FOREGROUND_DEFAULT),
        }
    }

    /// The SGR code selecting this value on the background channel.
    pub fn background_code(&self) -> CodecResult<u8> {
        match self {
            ColorValue::Named(color) => emittable(*color).map(|color| color.background_code()),
            ColorValue::Indexed(value) => {
                Err(CodecError::UnsupportedColorValue { value: *value })
            }
            ColorValue::Default => Ok(SGR_BACKGROUND_DEFAULT),
        }
    }
}

fn emittable(color: Color) -> CodecResult<Color> {
    if color.is_bright() {
        return Err(CodecError::InvalidColorName {
            name: color.name().to_string(),
        });
    }
    Ok(color)
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        ColorValue::Named(color)
    }
}
