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

use crate::TelnetOption;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors produced while encoding or decoding telnet frames.
///
/// Decoding malformed input from a peer is deliberately not fatal: the frame
/// decoder reports it through its observer and keeps going. These errors
/// surface only from the subnegotiation parsers and the encoder plumbing.
#[derive(Debug, Error)]
pub enum CodecError {
    /// An I/O error from the underlying stream.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A subnegotiation payload that cannot be interpreted.
    #[error("bad {option} subnegotiation: {kind}")]
    Subnegotiation {
        /// The option being subnegotiated.
        option: TelnetOption,
        /// What exactly was wrong with the payload.
        kind: SubnegotiationErrorKind,
    },
}

/// Specific ways a subnegotiation payload can be malformed.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SubnegotiationErrorKind {
    /// The payload is empty where at least a command byte is required.
    #[error("empty payload")]
    Empty,

    /// The payload has the wrong length for a fixed-size option.
    #[error("wrong payload length (expected {expected}, got {actual})")]
    WrongLength {
        /// Required payload length in bytes.
        expected: usize,
        /// Length actually received.
        actual: usize,
    },

    /// The leading command byte is not valid for this option.
    #[error("invalid command byte 0x{command:02X}")]
    InvalidCommand {
        /// The offending byte.
        command: u8,
    },

    /// A variable list that does not open with a variable marker.
    #[error("expected a variable marker, got 0x{byte:02X}")]
    MissingVariable {
        /// The offending byte.
        byte: u8,
    },

    /// The payload ends in the middle of an escape sequence.
    #[error("payload ends on an escape byte")]
    TrailingEscape,
}

impl CodecError {
    /// Shorthand used by the subnegotiation parsers.
    pub(crate) fn subnegotiation(option: TelnetOption, kind: SubnegotiationErrorKind) -> Self {
        CodecError::Subnegotiation { option, kind }
    }
}
