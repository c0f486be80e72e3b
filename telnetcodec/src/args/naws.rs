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

//! Negotiate About Window Size
//!

use crate::TelnetOption;
use crate::result::{CodecError, CodecResult, SubnegotiationErrorKind};
use byteorder::{BigEndian, WriteBytesExt};
use bytes::BufMut;

/// Terminal dimensions reported through the NAWS option.
///
/// The wire format is exactly four bytes, two big-endian 16-bit values:
/// width first, height second.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowSize {
    /// Width of the terminal window in character cells.
    pub width: u16,
    /// Height of the terminal window in character cells.
    pub height: u16,
}

impl WindowSize {
    /// Creates a `WindowSize` with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        WindowSize { width, height }
    }

    /// Encodes the window size into `dst` in the 4-byte wire format.
    pub fn encode<T: BufMut>(&self, dst: &mut T) -> CodecResult<usize> {
        let mut writer = dst.writer();
        writer.write_u16::<BigEndian>(self.width)?;
        writer.write_u16::<BigEndian>(self.height)?;
        Ok(4)
    }

    /// Decodes a NAWS payload.
    ///
    /// Some clients send truncated or padded payloads; anything that is not
    /// exactly four bytes is rejected so the caller can drop it with a
    /// warning instead of inventing a window size.
    pub fn decode(buffer: &[u8]) -> CodecResult<WindowSize> {
        if buffer.len() != 4 {
            return Err(CodecError::subnegotiation(
                TelnetOption::NAWS,
                SubnegotiationErrorKind::WrongLength {
                    expected: 4,
                    actual: buffer.len(),
                },
            ));
        }
        Ok(WindowSize {
            width: u16::from_be_bytes([buffer[0], buffer[1]]),
            height: u16::from_be_bytes([buffer[2], buffer[3]]),
        })
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        WindowSize {
            width: 80,
            height: 24,
        }
    }
}

impl std::fmt::Display for WindowSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
