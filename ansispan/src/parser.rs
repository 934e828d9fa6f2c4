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

use crate::color::{Color, ColorValue};
use crate::config::ParserConfig;
use crate::consts::{
    CSI_BRACKET, ESCAPE, PARAMETER_SEPARATOR, SGR_BACKGROUND_DEFAULT, SGR_BACKGROUND_EXTENDED,
    SGR_EXTENDED_INDEXED, SGR_FINAL, SGR_FOREGROUND_DEFAULT, SGR_FOREGROUND_EXTENDED, SGR_RESET,
};
use crate::span::Span;
use crate::style::Attribute;
use tracing::{instrument, trace};

/// Escape detection states of the character scanner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EscapeState {
    /// Normal text processing state.
    ///
    /// Characters accumulate into the pending literal. `ESC` flushes the
    /// literal and transitions to `Bracket`.
    #[default]
    Text,

    /// After `ESC`, waiting for `[`.
    ///
    /// Anything other than `[` abandons the sequence; both the `ESC` and the
    /// offending character are dropped.
    Bracket,

    /// Inside a CSI sequence.
    ///
    /// Digits accumulate into the current parameter, `;` applies it, `m`
    /// applies it and ends the sequence. Everything else is ignored.
    Code,
}

/// What the scanner must do for a character, as decided by [`EscapeState::next`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// Append to the pending literal.
    Literal(char),
    /// `ESC` seen: flush the pending literal.
    EnterEscape,
    /// `ESC [` seen: start a fresh parameter list.
    EnterCode,
    /// Decimal digit of the current parameter.
    Digit(u32),
    /// `;`: apply the current parameter and start another.
    Separator,
    /// `m`: apply the current parameter and end the sequence.
    Final,
    /// The escape lead-in was not followed by `[`; the character is dropped.
    Abandon(char),
    /// Unrecognized character inside a CSI sequence.
    Ignore(char),
}

impl EscapeState {
    /// Transition function of the escape layer.
    pub fn next(self, ch: char) -> (EscapeState, Scan) {
        match self {
            EscapeState::Text if ch == ESCAPE => (EscapeState::Bracket, Scan::EnterEscape),
            EscapeState::Text => (EscapeState::Text, Scan::Literal(ch)),
            EscapeState::Bracket if ch == CSI_BRACKET => (EscapeState::Code, Scan::EnterCode),
            EscapeState::Bracket => (EscapeState::Text, Scan::Abandon(ch)),
            EscapeState::Code => match ch {
                '0'..='9' => (EscapeState::Code, Scan::Digit(ch as u32 - '0' as u32)),
                PARAMETER_SEPARATOR => (EscapeState::Code, Scan::Separator),
                SGR_FINAL => (EscapeState::Text, Scan::Final),
                _ => (EscapeState::Code, Scan::Ignore(ch)),
            },
        }
    }
}

/// SGR parameter states, tracking the `38;5;n` / `48;5;n` sub-sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SgrState {
    /// Plain SGR dispatch.
    #[default]
    Sgr,
    /// After `38`, expecting the color selector.
    ForegroundPrefix,
    /// After `38;5`, expecting the palette index.
    Foreground,
    /// After `48`, expecting the color selector.
    BackgroundPrefix,
    /// After `48;5`, expecting the palette index.
    Background,
}

impl SgrState {
    /// Applies one SGR parameter, pushing the resulting spans.
    ///
    /// `None` is an empty parameter, which always resets. Unknown codes and
    /// unsupported extended color selectors (e.g. truecolor `2`) emit nothing.
    pub fn apply(self, code: Option<u32>, spans: &mut Vec<Span>) -> SgrState {
        let Some(code) = code else {
            spans.push(Span::Reset);
            return SgrState::Sgr;
        };

        match self {
            SgrState::Sgr => dispatch(code, spans),
            SgrState::ForegroundPrefix if code == SGR_EXTENDED_INDEXED => SgrState::Foreground,
            SgrState::BackgroundPrefix if code == SGR_EXTENDED_INDEXED => SgrState::Background,
            SgrState::ForegroundPrefix | SgrState::BackgroundPrefix => {
                trace!(selector = code, "dropping unsupported extended color");
                SgrState::Sgr
            }
            SgrState::Foreground => {
                spans.push(Span::Color(ColorValue::Indexed(code)));
                SgrState::Sgr
            }
            SgrState::Background => {
                spans.push(Span::BgColor(ColorValue::Indexed(code)));
                SgrState::Sgr
            }
        }
    }
}

fn dispatch(code: u32, spans: &mut Vec<Span>) -> SgrState {
    let Ok(code) = u8::try_from(code) else {
        trace!(code, "ignoring unsupported SGR code");
        return SgrState::Sgr;
    };

    match code {
        SGR_RESET => spans.push(Span::Reset),
        SGR_FOREGROUND_EXTENDED => return SgrState::ForegroundPrefix,
        SGR_BACKGROUND_EXTENDED => return SgrState::BackgroundPrefix,
        SGR_FOREGROUND_DEFAULT => spans.push(Span::Color(ColorValue::Default)),
        SGR_BACKGROUND_DEFAULT => spans.push(Span::BgColor(ColorValue::Default)),
        30..=37 | 90..=97 => {
            if let Some(color) = Color::from_code(code) {
                spans.push(Span::Color(color.into()));
            }
        }
        40..=47 | 100..=107 => {
            if let Some(color) = Color::from_code(code) {
                spans.push(Span::BgColor(color.into()));
            }
        }
        _ => {
            if let Some(attribute) = Attribute::from_on_code(code) {
                spans.push(Span::attribute(attribute, true));
            } else {
                let before = spans.len();
                spans.extend(Attribute::cleared_by(code).map(|a| Span::attribute(a, false)));
                if spans.len() == before {
                    trace!(code, "ignoring unsupported SGR code");
                }
            }
        }
    }
    SgrState::Sgr
}

/// Word spacing for split mode: Unicode `White_Space` without NEL (U+0085) but
/// with the byte order mark (U+FEFF), minus carriage return and line feed.
fn is_word_space(ch: char) -> bool {
    match ch {
        '\r' | '\n' | '\u{85}' => false,
        '\u{feff}' => true,
        _ => ch.is_whitespace(),
    }
}

/// A call-local parser turning escape-coded text into [`Span`]s.
///
/// Input may be fed in pieces; the spans are the same as for the whole text
/// fed at once. No state is shared between parser instances.
#[derive(Clone, Debug, Default)]
pub struct SpanParser {
    config: ParserConfig,
    escape: EscapeState,
    sgr: SgrState,
    /// Current numeric parameter, `None` while no digit has been seen.
    code: Option<u32>,
    /// Pending literal text.
    literal: String,
    /// Whether the pending literal ends in a run of word spacing.
    whitespace: bool,
    spans: Vec<Span>,
}

impl SpanParser {
    /// Creates a parser in its initial state.
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Discards all pending input and produced spans.
    pub fn clear(&mut self) {
        *self = SpanParser::new(self.config);
    }

    /// Feeds one character.
    pub fn push(&mut self, ch: char) {
        let (escape, scan) = self.escape.next(ch);
        self.escape = escape;

        match scan {
            Scan::Literal(ch) => self.push_literal(ch),
            Scan::EnterEscape => self.flush_literal(),
            Scan::EnterCode => {
                self.code = None;
                self.sgr = SgrState::Sgr;
            }
            Scan::Digit(digit) => {
                let code = self.code.unwrap_or(0);
                self.code = Some(code.saturating_mul(10).saturating_add(digit));
            }
            Scan::Separator | Scan::Final => self.apply_code(),
            Scan::Abandon(ch) => {
                trace!(character = ?ch, "abandoning escape not followed by '['");
            }
            Scan::Ignore(_) => {}
        }
    }

    /// Feeds every character of `text`.
    pub fn push_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.push(ch);
        }
    }

    /// Flushes pending state and returns the spans.
    ///
    /// An unterminated sequence still applies a parameter that has digits, so
    /// `"\x1b[1"` yields `Bold(true)`.
    pub fn finish(mut self) -> Vec<Span> {
        if self.code.is_some() {
            self.apply_code();
        }
        self.flush_literal();
        self.spans
    }

    fn apply_code(&mut self) {
        self.sgr = self.sgr.apply(self.code.take(), &mut self.spans);
    }

    fn push_literal(&mut self, ch: char) {
        if self.config.split_on_word {
            if is_word_space(ch) {
                self.whitespace = true;
            } else if self.whitespace {
                self.whitespace = false;
                self.flush_literal();
            }
        }
        self.literal.push(ch);
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.spans.push(Span::Value(std::mem::take(&mut self.literal)));
        }
    }
}

/// Parses escape-coded text into a span sequence.
///
/// Never fails: malformed, unsupported and non-SGR sequences are dropped.
#[instrument(skip_all, fields(len = text.len(), split_on_word = split_on_word))]
pub fn parse(text: &str, split_on_word: bool) -> Vec<Span> {
    let mut parser = SpanParser::new(ParserConfig::from(split_on_word));
    parser.push_str(text);
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn p(text: &str, split_on_word: bool) -> Vec<Span> {
        parse(&text.replace("ESC", "\x1b"), split_on_word)
    }

    fn value(text: &str) -> Span {
        Span::value(text)
    }

    fn color(color: Color) -> Span {
        Span::Color(ColorValue::Named(color))
    }

    fn bg_color(color: Color) -> Span {
        Span::BgColor(ColorValue::Named(color))
    }

    #[test]
    fn test_escape_transitions() {
        assert_eq!(
            EscapeState::Text.next('a'),
            (EscapeState::Text, Scan::Literal('a'))
        );
        assert_eq!(
            EscapeState::Text.next('\x1b'),
            (EscapeState::Bracket, Scan::EnterEscape)
        );
        assert_eq!(
            EscapeState::Bracket.next('['),
            (EscapeState::Code, Scan::EnterCode)
        );
        assert_eq!(
            EscapeState::Bracket.next(']'),
            (EscapeState::Text, Scan::Abandon(']'))
        );
        assert_eq!(
            EscapeState::Code.next('7'),
            (EscapeState::Code, Scan::Digit(7))
        );
        assert_eq!(
            EscapeState::Code.next(';'),
            (EscapeState::Code, Scan::Separator)
        );
        assert_eq!(EscapeState::Code.next('m'), (EscapeState::Text, Scan::Final));
        assert_eq!(
            EscapeState::Code.next('H'),
            (EscapeState::Code, Scan::Ignore('H'))
        );
        assert_eq!(
            EscapeState::Code.next('٣'),
            (EscapeState::Code, Scan::Ignore('٣'))
        );
    }

    #[test]
    fn test_sgr_apply_empty_resets() {
        let mut spans = Vec::new();
        let state = SgrState::ForegroundPrefix.apply(None, &mut spans);
        assert_eq!(state, SgrState::Sgr);
        assert_eq!(spans, vec![Span::Reset]);
    }

    #[test]
    fn test_sgr_apply_indexed_path() {
        let mut spans = Vec::new();
        let state = SgrState::Sgr.apply(Some(38), &mut spans);
        assert_eq!(state, SgrState::ForegroundPrefix);
        let state = state.apply(Some(5), &mut spans);
        assert_eq!(state, SgrState::Foreground);
        let state = state.apply(Some(208), &mut spans);
        assert_eq!(state, SgrState::Sgr);
        assert_eq!(spans, vec![Span::Color(ColorValue::Indexed(208))]);

        let mut spans = Vec::new();
        let state = SgrState::Sgr
            .apply(Some(48), &mut spans)
            .apply(Some(5), &mut spans)
            .apply(Some(17), &mut spans);
        assert_eq!(state, SgrState::Sgr);
        assert_eq!(spans, vec![Span::BgColor(ColorValue::Indexed(17))]);
    }

    #[test]
    fn test_sgr_apply_truecolor_selector_dropped() {
        let mut spans = Vec::new();
        let state = SgrState::BackgroundPrefix.apply(Some(2), &mut spans);
        assert_eq!(state, SgrState::Sgr);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_simple_text() {
        assert_eq!(p("plain text", false), vec![value("plain text")]);
        assert_eq!(p("hello world", false), vec![value("hello world")]);
        assert_eq!(p("", false), vec![]);
        assert_eq!(p("", true), vec![]);
    }

    #[test]
    fn test_split_on_word() {
        assert_eq!(
            p("hello world", true),
            vec![value("hello "), value("world")]
        );
        assert_eq!(
            p("hello \t world", true),
            vec![value("hello \t "), value("world")]
        );
    }

    #[test]
    fn test_split_leading_whitespace() {
        assert_eq!(p("  hello", true), vec![value("  "), value("hello")]);
    }

    #[test]
    fn test_split_ignores_line_breaks() {
        assert_eq!(
            p("one\r\ntwo three", true),
            vec![value("one\r\ntwo "), value("three")]
        );
        assert_eq!(p("a \nb", true), vec![value("a "), value("\nb")]);
    }

    #[test]
    fn test_split_word_space_class() {
        assert_eq!(
            p("a\u{feff}b", true),
            vec![value("a\u{feff}"), value("b")]
        );
        assert_eq!(p("a\u{85}b", true), vec![value("a\u{85}b")]);
        assert_eq!(
            p("a\u{a0}\u{3000}b", true),
            vec![value("a\u{a0}\u{3000}"), value("b")]
        );
        assert!(is_word_space('\u{b}'));
        assert!(is_word_space('\u{c}'));
        assert!(!is_word_space('\r'));
        assert!(!is_word_space('\n'));
    }

    #[test]
    fn test_split_multibyte() {
        assert_eq!(
            p("héllo wörld 日本", true),
            vec![value("héllo "), value("wörld "), value("日本")]
        );
    }

    #[test]
    fn test_color() {
        assert_eq!(p("ESC[31mred", false), vec![color(Color::Red), value("red")]);
        assert_eq!(
            p("ESC[31mhello world", true),
            vec![color(Color::Red), value("hello "), value("world")]
        );
    }

    #[test]
    fn test_reset_color() {
        assert_eq!(
            p("ESC[31mhello ESC[0mworld", true),
            vec![color(Color::Red), value("hello "), Span::Reset, value("world")]
        );
    }

    #[test]
    fn test_reset_with_empty_escape() {
        assert_eq!(
            p("ESC[31mhello ESC[mworld", true),
            vec![color(Color::Red), value("hello "), Span::Reset, value("world")]
        );
        assert_eq!(p("ESC[m", false), vec![Span::Reset]);
    }

    #[test]
    fn test_color_and_background() {
        assert_eq!(
            p("ESC[31;41mhello world", false),
            vec![color(Color::Red), bg_color(Color::Red), value("hello world")]
        );
        assert_eq!(
            p("ESC[31mESC[41mESC[1mhello world", false),
            vec![
                color(Color::Red),
                bg_color(Color::Red),
                Span::Bold(true),
                value("hello world")
            ]
        );
    }

    #[test]
    fn test_reset_after_colors() {
        assert_eq!(
            p("ESC[31;41;1mhelloESC[0mworld", false),
            vec![
                color(Color::Red),
                bg_color(Color::Red),
                Span::Bold(true),
                value("hello"),
                Span::Reset,
                value("world"),
            ]
        );
    }

    #[test]
    fn test_attribute_codes() {
        let cases: Vec<(&str, Vec<Span>)> = vec![
            ("1", vec![Span::Bold(true)]),
            ("2", vec![Span::Dim(true)]),
            ("22", vec![Span::Bold(false), Span::Dim(false)]),
            ("3", vec![Span::Italic(true)]),
            ("23", vec![Span::Italic(false)]),
            ("4", vec![Span::Underline(true)]),
            ("24", vec![Span::Underline(false)]),
            ("5", vec![Span::Blink(true)]),
            ("6", vec![Span::Blink(true)]),
            ("25", vec![Span::Blink(false)]),
            ("7", vec![Span::Inverse(true)]),
            ("27", vec![Span::Inverse(false)]),
            ("9", vec![Span::Strike(true)]),
            ("29", vec![Span::Strike(false)]),
        ];
        for (code, spans) in cases {
            assert_eq!(p(&format!("ESC[{code}"), false), spans, "code {code}");
            assert_eq!(p(&format!("ESC[{code}m"), false), spans, "code {code}m");
        }
    }

    #[test]
    fn test_color_codes() {
        for code in 30..=37u8 {
            let expected = Color::from_index(code - 30, false).unwrap();
            assert_eq!(p(&format!("ESC[{code}m"), false), vec![color(expected)]);
        }
        for code in 90..=97u8 {
            let expected = Color::from_index(code - 90, true).unwrap();
            assert_eq!(p(&format!("ESC[{code}m"), false), vec![color(expected)]);
        }
        for code in 40..=47u8 {
            let expected = Color::from_index(code - 40, false).unwrap();
            assert_eq!(p(&format!("ESC[{code}m"), false), vec![bg_color(expected)]);
        }
        for code in 100..=107u8 {
            let expected = Color::from_index(code - 100, true).unwrap();
            assert_eq!(p(&format!("ESC[{code}m"), false), vec![bg_color(expected)]);
        }
    }

    #[test]
    fn test_default_colors() {
        assert_eq!(
            p("ESC[39;49m", false),
            vec![
                Span::Color(ColorValue::Default),
                Span::BgColor(ColorValue::Default)
            ]
        );
    }

    #[test]
    fn test_indexed_colors() {
        assert_eq!(
            p("ESC[38;5;196mhot", false),
            vec![Span::Color(ColorValue::Indexed(196)), value("hot")]
        );
        assert_eq!(
            p("ESC[48;5;21;1mx", false),
            vec![
                Span::BgColor(ColorValue::Indexed(21)),
                Span::Bold(true),
                value("x")
            ]
        );
    }

    #[test]
    fn test_truecolor_dropped() {
        // The selector is dropped; the r;g;b components dispatch as plain codes.
        assert_eq!(p("ESC[38;2;255;128;64mx", false), vec![value("x")]);
        assert_eq!(
            p("ESC[48;2;1;3;4mx", false),
            vec![
                Span::Bold(true),
                Span::Italic(true),
                Span::Underline(true),
                value("x")
            ]
        );
    }

    #[test]
    fn test_extended_prefix_does_not_leak_across_sequences() {
        assert_eq!(
            p("ESC[38mESC[5mx", false),
            vec![Span::Blink(true), value("x")]
        );
    }

    #[test]
    fn test_unknown_codes_ignored() {
        assert_eq!(p("ESC[99m", false), vec![]);
        assert_eq!(p("ESC[8;21;28;50mx", false), vec![value("x")]);
        assert_eq!(p("ESC[99999999999999999999m", false), vec![]);
    }

    #[test]
    fn test_empty_parameter_resets() {
        assert_eq!(
            p("ESC[1;;31m", false),
            vec![Span::Bold(true), Span::Reset, color(Color::Red)]
        );
    }

    #[test]
    fn test_abandoned_escape_drops_both_characters() {
        assert_eq!(p("aESC]bc", false), vec![value("a"), value("bc")]);
        assert_eq!(p("ESCxyz", false), vec![value("yz")]);
    }

    #[test]
    fn test_non_sgr_sequences_are_tolerated() {
        // Letters other than `m` are ignored inside a sequence, so a cursor
        // movement swallows text until the next `m`.
        assert_eq!(
            p("ESC[2Jhimom", false),
            vec![Span::Dim(true), value("om")]
        );
    }

    #[test]
    fn test_unterminated_sequence() {
        assert_eq!(p("abcESC[", false), vec![value("abc")]);
        assert_eq!(p("abcESC", false), vec![value("abc")]);
        assert_eq!(p("ESC[31", false), vec![color(Color::Red)]);
    }

    #[test]
    fn test_escape_flushes_literal_in_word_mode() {
        assert_eq!(
            p("hel ESC[1mlo world", true),
            vec![
                value("hel "),
                Span::Bold(true),
                value("lo "),
                value("world")
            ]
        );
    }

    #[test]
    fn test_streaming_input() {
        let mut parser = SpanParser::new(ParserConfig::words());
        for chunk in ["he", "llo \x1b", "[3", "1;4", "1mwor", "ld"] {
            parser.push_str(chunk);
        }
        assert_eq!(
            parser.finish(),
            vec![
                value("hello "),
                color(Color::Red),
                bg_color(Color::Red),
                value("world")
            ]
        );
    }

    #[test]
    fn test_parser_clear() {
        let mut parser = SpanParser::new(ParserConfig::words());
        parser.push_str("abc\x1b[3");
        parser.clear();
        parser.push_str("1m");
        assert_eq!(parser.config(), &ParserConfig::words());
        assert_eq!(parser.finish(), vec![value("1m")]);
    }

    #[test]
    #[traced_test]
    fn test_dropped_input_is_traced() {
        assert_eq!(p("ESC[99mESC]ESC[38;2m", false), vec![]);
        assert!(logs_contain("ignoring unsupported SGR code"));
        assert!(logs_contain("abandoning escape"));
        assert!(logs_contain("dropping unsupported extended color"));
    }
}
