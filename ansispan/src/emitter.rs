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

use crate::consts::{CSI_BRACKET, ESCAPE, PARAMETER_SEPARATOR, SGR_FINAL, SGR_RESET};
use crate::result::CodecResult;
use crate::span::Span;
use crate::style::Attribute;
use tracing::{debug, instrument, trace};

/// A call-local serializer folding [`Span`]s into escape-coded text chunks.
///
/// Style spans accumulate SGR codes; each `Value` span produces one chunk,
/// prefixed with a single combined sequence when codes are pending. The
/// accumulator starts out holding `0`, so the first chunk always establishes a
/// fully known style regardless of the terminal's prior state.
#[derive(Clone, Debug)]
pub struct SpanEmitter {
    codes: Vec<u8>,
}

impl SpanEmitter {
    /// Creates an emitter with a pending reset.
    pub fn new() -> Self {
        Self {
            codes: vec![SGR_RESET],
        }
    }

    /// Returns the codes waiting for the next `Value` span.
    pub fn pending(&self) -> &[u8] {
        &self.codes
    }

    /// Processes one span, returning a chunk when the span carries text.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnsupportedColorValue`] for an indexed color and
    /// [`CodecError::InvalidColorName`] for a bright one. The pending codes are
    /// left untouched.
    pub fn push(&mut self, span: &Span) -> CodecResult<Option<String>> {
        let code = match span {
            Span::Value(text) => return Ok(Some(self.flush(text))),
            Span::Reset => SGR_RESET,
            Span::Color(value) => value.foreground_code()?,
            Span::BgColor(value) => value.background_code()?,
            Span::Bold(enabled) => Attribute::Bold.code(*enabled),
            Span::Dim(enabled) => Attribute::Dim.code(*enabled),
            Span::Italic(enabled) => Attribute::Italic.code(*enabled),
            Span::Underline(enabled) => Attribute::Underline.code(*enabled),
            Span::Blink(enabled) => Attribute::Blink.code(*enabled),
            Span::Inverse(enabled) => Attribute::Inverse.code(*enabled),
            Span::Strike(enabled) => Attribute::Strike.code(*enabled),
        };
        self.codes.push(code);
        Ok(None)
    }

    /// Ends the stream, discarding codes that no text follows.
    pub fn finish(self) {
        if !self.codes.is_empty() {
            trace!(codes = ?self.codes, "discarding trailing codes");
        }
    }

    fn flush(&mut self, text: &str) -> String {
        if self.codes.is_empty() {
            return text.to_string();
        }

        let mut chunk = String::with_capacity(text.len() + 3 + self.codes.len() * 4);
        chunk.push(ESCAPE);
        chunk.push(CSI_BRACKET);
        for (index, code) in self.codes.drain(..).enumerate() {
            if index > 0 {
                chunk.push(PARAMETER_SEPARATOR);
            }
            chunk.push_str(&code.to_string());
        }
        chunk.push(SGR_FINAL);
        chunk.push_str(text);
        chunk
    }
}

impl Default for SpanEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes a span sequence into escape-coded text chunks, one per `Value` span.
///
/// Style spans after the last `Value` are dropped. Concatenating the chunks
/// gives text that renders the same as the spans describe.
///
/// # Errors
///
/// Fails without partial output when any span carries an indexed or bright color.
#[instrument(skip_all, fields(spans = spans.len()))]
pub fn emit(spans: &[Span]) -> CodecResult<Vec<String>> {
    let mut emitter = SpanEmitter::new();
    let mut chunks = Vec::new();
    for span in spans {
        match emitter.push(span) {
            Ok(Some(chunk)) => chunks.push(chunk),
            Ok(None) => {}
            Err(error) => {
                debug!(%error, span = ?span, "refusing to emit span");
                return Err(error);
            }
        }
    }
    emitter.finish();
    Ok(chunks)
}

/// Serializes a span sequence into one escape-coded string.
pub fn emit_string(spans: &[Span]) -> CodecResult<String> {
    emit(spans).map(|chunks| chunks.concat())
}
