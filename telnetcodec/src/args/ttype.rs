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

//! Terminal Type
//!

use crate::result::{CodecError, CodecResult, SubnegotiationErrorKind};
use crate::{TelnetOption, consts};

/// First byte of a TERMINAL-TYPE subnegotiation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TermTypeCommand {
    /// The payload carries the sender's terminal name.
    Is,
    /// The sender asks the receiver to announce its terminal name.
    Send,
}

impl TermTypeCommand {
    /// Returns the wire byte for this sub-command.
    pub fn to_u8(&self) -> u8 {
        match self {
            TermTypeCommand::Is => consts::option::ttype::IS,
            TermTypeCommand::Send => consts::option::ttype::SEND,
        }
    }
}

/// Decodes a TERMINAL-TYPE payload into its sub-command and terminal name.
///
/// The name may be empty (a `SEND` request carries none). Clients announce
/// names in ASCII; anything else is taken lossily so a single odd byte cannot
/// poison the whole handshake.
pub fn decode(buffer: &[u8]) -> CodecResult<(TermTypeCommand, String)> {
    let Some(&first) = buffer.first() else {
        return Err(CodecError::subnegotiation(
            TelnetOption::TTYPE,
            SubnegotiationErrorKind::Empty,
        ));
    };
    let command = match first {
        consts::option::ttype::IS => TermTypeCommand::Is,
        consts::option::ttype::SEND => TermTypeCommand::Send,
        command => {
            return Err(CodecError::subnegotiation(
                TelnetOption::TTYPE,
                SubnegotiationErrorKind::InvalidCommand { command },
            ));
        }
    };
    let name = String::from_utf8_lossy(&buffer[1..]).into_owned();
    Ok((command, name))
}
