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
use crate::style::Attribute;

/// One event of a decoded styled-text stream.
///
/// A span sequence is a replay log: literal text interleaved with style-state
/// changes, in the order a terminal applies them. Style spans are deltas, never
/// snapshots, and adjacent spans of the same kind are valid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Span {
    /// Literal text content
    Value(String),
    /// Full style reset (`ESC[0m` or `ESC[m`)
    Reset,
    /// Foreground color change
    Color(ColorValue),
    /// Background color change
    BgColor(ColorValue),
    /// Bold on/off
    Bold(bool),
    /// Dim on/off
    Dim(bool),
    /// Italic on/off
    Italic(bool),
    /// Underline on/off
    Underline(bool),
    /// Blink on/off
    Blink(bool),
    /// Inverse on/off
    Inverse(bool),
    /// Strike on/off
    Strike(bool),
}

impl Span {
    /// Creates a literal text span.
    pub fn value(text: impl Into<String>) -> Span {
        Span::Value(text.into())
    }

    /// Creates the span toggling `attribute`.
    pub fn attribute(attribute: Attribute, enabled: bool) -> Span {
        match attribute {
            Attribute::Bold => Span::Bold(enabled),
            Attribute::Dim => Span::Dim(enabled),
            Attribute::Italic => Span::Italic(enabled),
            Attribute::Underline => Span::Underline(enabled),
            Attribute::Blink => Span::Blink(enabled),
            Attribute::Inverse => Span::Inverse(enabled),
            Attribute::Strike => Span::Strike(enabled),
        }
    }

    /// Returns the attribute and its state if this is an attribute span.
    pub fn as_attribute(&self) -> Option<(Attribute, bool)> {
        match self {
            Span::Bold(enabled) => Some((Attribute::Bold, *enabled)),
            Span::Dim(enabled) => Some((Attribute::Dim, *enabled)),
            Span::Italic(enabled) => Some((Attribute::Italic, *enabled)),
            Span::Underline(enabled) => Some((Attribute::Underline, *enabled)),
            Span::Blink(enabled) => Some((Attribute::Blink, *enabled)),
            Span::Inverse(enabled) => Some((Attribute::Inverse, *enabled)),
            Span::Strike(enabled) => Some((Attribute::Strike, *enabled)),
            Span::Value(_) | Span::Reset | Span::Color(_) | Span::BgColor(_) => None,
        }
    }

    /// Returns the literal text of a `Value` span.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Span::Value(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns `true` for every span that changes style rather than carrying text.
    pub fn is_style(&self) -> bool {
        !matches!(self, Span::Value(_))
    }
}

/// Concatenates the text of every `Value` span, discarding style changes.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().filter_map(Span::as_text).collect()
}
