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

///
/// Parser Configuration
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ParserConfig {
    /// Break literal text into word runs.
    ///
    /// A run of whitespace stays attached to the end of the preceding word and
    /// a new `Value` span starts at the next non-whitespace character. Carriage
    /// return and line feed never count as whitespace here.
    pub split_on_word: bool,
}

impl ParserConfig {
    /// Emit one `Value` span per word run
    pub fn words() -> ParserConfig {
        ParserConfig {
            split_on_word: true,
        }
    }
    /// Emit literal text between escape sequences as a single `Value` span
    pub fn whole() -> ParserConfig {
        ParserConfig {
            split_on_word: false,
        }
    }
}

impl From<bool> for ParserConfig {
    fn from(split_on_word: bool) -> Self {
        ParserConfig { split_on_word }
    }
}
