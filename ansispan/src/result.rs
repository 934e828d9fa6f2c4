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

//! Error types for the ansispan crate.
//!
//! Parsing never fails, so every error here originates on the emitting side or
//! where text is converted into a typed [`Color`](crate::Color).

/// Result type alias for operations that may fail with a [`CodecError`].
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur when serializing spans back into escape-coded text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A palette index or truecolor value was asked to be emitted.
    ///
    /// The parser accepts `38;5;n` and `48;5;n`, but there is no encoding path
    /// for numeric colors, so this is a caller error rather than tolerated input.
    #[error("Unsupported color value {value}: numeric colors cannot be emitted")]
    UnsupportedColorValue {
        /// The numeric color value carried by the span
        value: u32,
    },

    /// A color name outside the fixed 16 name table.
    #[error("Invalid color name '{name}'")]
    InvalidColorName {
        /// The rejected name
        name: String,
    },
}

impl CodecError {
    /// Check if the error was caused by a numeric color value
    pub fn is_unsupported_color(&self) -> bool {
        matches!(self, CodecError::UnsupportedColorValue { .. })
    }
}
