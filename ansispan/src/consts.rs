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

/// The escape character (`ESC`, 0x1B) that opens every control sequence.
pub const ESCAPE: char = '\u{1b}';

/// The character following [`ESCAPE`] that makes a Control Sequence Introducer.
pub const CSI_BRACKET: char = '[';

/// Separates numeric parameters inside a CSI sequence.
pub const PARAMETER_SEPARATOR: char = ';';

/// Final byte of a Select Graphic Rendition sequence.
pub const SGR_FINAL: char = 'm';

/// SGR `0`: reset every attribute and both colors.
pub const SGR_RESET: u8 = 0;

/// SGR `38`: extended foreground color prefix.
pub const SGR_FOREGROUND_EXTENDED: u8 = 38;

/// SGR `39`: default foreground color.
pub const SGR_FOREGROUND_DEFAULT: u8 = 39;

/// SGR `48`: extended background color prefix.
pub const SGR_BACKGROUND_EXTENDED: u8 = 48;

/// SGR `49`: default background color.
pub const SGR_BACKGROUND_DEFAULT: u8 = 49;

/// Selector following `38`/`48` for a 256-color palette index (`38;5;n`).
pub const SGR_EXTENDED_INDEXED: u32 = 5;

/// Offset between a foreground color code and its background counterpart.
pub const SGR_BACKGROUND_OFFSET: u8 = 10;
