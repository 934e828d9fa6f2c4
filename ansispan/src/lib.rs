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

//! # ANSI Span Codec
//!
//! Converts between escape-coded terminal text and an ordered stream of typed
//! [`Span`]s, so colored output can be measured, wrapped, diffed or re-rendered
//! without re-parsing raw escape bytes at every layer.
//!
//! - [`parse`] / [`SpanParser`]: text → spans. Never fails; anything outside the
//!   supported SGR subset is dropped.
//! - [`emit`] / [`SpanEmitter`]: spans → text chunks, one per `Value` span, each
//!   prefixed by a single combined SGR sequence when the style changed.
//!
//! ```rust
//! use ansispan::{Color, Span, emit, parse};
//!
//! let spans = parse("\x1b[31;41mhello world", false);
//! assert_eq!(spans[0], Span::Color(Color::Red.into()));
//!
//! let chunks = emit(&spans).unwrap();
//! assert_eq!(chunks, vec!["\x1b[0;31;41mhello world"]);
//! ```

mod color;
mod config;
mod consts;
mod emitter;
mod parser;
mod result;
mod span;
mod style;

pub use self::color::{BRIGHT_COLOR_NAMES, COLOR_NAMES, Color, ColorValue};
pub use self::config::ParserConfig;
pub use self::consts::ESCAPE;
pub use self::emitter::{SpanEmitter, emit, emit_string};
pub use self::parser::{EscapeState, Scan, SgrState, SpanParser, parse};
pub use self::result::{CodecError, CodecResult};
pub use self::span::{Span, plain_text};
pub use self::style::{Attribute, StyleState};
