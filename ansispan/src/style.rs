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

use crate::color::ColorValue;
use crate::span::Span;

/// A boolean text attribute that SGR codes switch on and off.
///
/// | Attribute   | On  | Off  |
/// |-------------|-----|------|
/// | `Bold`      | `1` | `22` |
/// | `Dim`       | `2` | `22` |
/// | `Italic`    | `3` | `23` |
/// | `Underline` | `4` | `24` |
/// | `Blink`     | `5` | `25` |
/// | `Inverse`   | `7` | `27` |
/// | `Strike`    | `9` | `29` |
///
/// `Bold` and `Dim` share the off code `22`, which clears both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Increased intensity
    Bold,
    /// Decreased intensity
    Dim,
    /// Italic or oblique
    Italic,
    /// Single underline
    Underline,
    /// Slow or rapid blink
    Blink,
    /// Swapped foreground and background
    Inverse,
    /// Strikethrough
    Strike,
}

impl Attribute {
    /// Every attribute, in on-code order.
    pub const ALL: [Attribute; 7] = [
        Attribute::Bold,
        Attribute::Dim,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Blink,
        Attribute::Inverse,
        Attribute::Strike,
    ];

    /// The SGR code that switches this attribute on.
    pub fn on_code(&self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Dim => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::Blink => 5,
            Attribute::Inverse => 7,
            Attribute::Strike => 9,
        }
    }

    /// The SGR code that switches this attribute off.
    pub fn off_code(&self) -> u8 {
        match self {
            Attribute::Bold | Attribute::Dim => 22,
            Attribute::Italic => 23,
            Attribute::Underline => 24,
            Attribute::Blink => 25,
            Attribute::Inverse => 27,
            Attribute::Strike => 29,
        }
    }

    /// The code for the given on/off state.
    pub fn code(&self, enabled: bool) -> u8 {
        if enabled {
            self.on_code()
        } else {
            self.off_code()
        }
    }

    /// Maps an SGR code to the attribute it switches on.
    ///
    /// Rapid blink (`6`) is treated as blink.
    pub fn from_on_code(code: u8) -> Option<Attribute> {
        match code {
            1 => Some(Attribute::Bold),
            2 => Some(Attribute::Dim),
            3 => Some(Attribute::Italic),
            4 => Some(Attribute::Underline),
            5 | 6 => Some(Attribute::Blink),
            7 => Some(Attribute::Inverse),
            9 => Some(Attribute::Strike),
            _ => None,
        }
    }

    /// The attributes an SGR code switches off, in table order.
    ///
    /// Empty for codes that are not off codes; `22` yields both `Bold` and `Dim`.
    pub fn cleared_by(code: u8) -> impl Iterator<Item = Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(move |attribute| attribute.off_code() == code)
    }
}

/// A cumulative style snapshot.
///
/// Spans are deltas; folding them in order gives the style a terminal would be
/// in at any point of the stream. `None` colors are the terminal defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    /// Foreground color, `None` for the default
    pub foreground: Option<ColorValue>,
    /// Background color, `None` for the default
    pub background: Option<ColorValue>,
    /// Bold
    pub bold: bool,
    /// Dim
    pub dim: bool,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
    /// Blink
    pub blink: bool,
    /// Inverse
    pub inverse: bool,
    /// Strike
    pub strike: bool,
}

impl StyleState {
    /// Returns the flag for an attribute.
    pub fn get(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Bold => self.bold,
            Attribute::Dim => self.dim,
            Attribute::Italic => self.italic,
            Attribute::Underline => self.underline,
            Attribute::Blink => self.blink,
            Attribute::Inverse => self.inverse,
            Attribute::Strike => self.strike,
        }
    }

    /// Sets the flag for an attribute.
    pub fn set(&mut self, attribute: Attribute, enabled: bool) {
        let flag = match attribute {
            Attribute::Bold => &mut self.bold,
            Attribute::Dim => &mut self.dim,
            Attribute::Italic => &mut self.italic,
            Attribute::Underline => &mut self.underline,
            Attribute::Blink => &mut self.blink,
            Attribute::Inverse => &mut self.inverse,
            Attribute::Strike => &mut self.strike,
        };
        *flag = enabled;
    }

    /// Applies one span delta. `Value` spans leave the state unchanged.
    pub fn apply(&mut self, span: &Span) {
        match span {
            Span::Value(_) => {}
            Span::Reset => *self = StyleState::default(),
            Span::Color(value) => self.foreground = channel(*value),
            Span::BgColor(value) => self.background = channel(*value),
            Span::Bold(enabled) => self.bold = *enabled,
            Span::Dim(enabled) => self.dim = *enabled,
            Span::Italic(enabled) => self.italic = *enabled,
            Span::Underline(enabled) => self.underline = *enabled,
            Span::Blink(enabled) => self.blink = *enabled,
            Span::Inverse(enabled) => self.inverse = *enabled,
            Span::Strike(enabled) => self.strike = *enabled,
        }
    }

    /// Folds a whole span sequence, starting from the default style.
    pub fn fold<'a, I>(spans: I) -> StyleState
    where
        I: IntoIterator<Item = &'a Span>,
    {
        let mut state = StyleState::default();
        for span in spans {
            state.apply(span);
        }
        state
    }

    /// Pairs every piece of text with the style it is displayed in.
    ///
    /// Empty text is skipped and adjacent text sharing a style is merged, so two
    /// sequences that render identically yield identical runs.
    pub fn runs<'a, I>(spans: I) -> Vec<(StyleState, String)>
    where
        I: IntoIterator<Item = &'a Span>,
    {
        let mut state = StyleState::default();
        let mut runs: Vec<(StyleState, String)> = Vec::new();
        for span in spans {
            match span {
                Span::Value(text) if text.is_empty() => {}
                Span::Value(text) => {
                    if let Some((style, run)) = runs.last_mut() {
                        if *style == state {
                            run.push_str(text);
                            continue;
                        }
                    }
                    runs.push((state, text.clone()));
                }
                _ => state.apply(span),
            }
        }
        runs
    }
}

fn channel(value: ColorValue) -> Option<ColorValue> {
    match value {
        ColorValue::Default => None,
        other => Some(other),
    }
}
