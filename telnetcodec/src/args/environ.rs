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

//! Environment Option (ENVIRON and NEW-ENVIRON)
//!
//! Both options share the same payload shape: a command byte followed by a
//! variable list where VAR/VALUE/USERVAR sentinels delimit runs and ESC
//! escapes a literal sentinel byte inside a run.
//!

use crate::result::{CodecError, CodecResult, SubnegotiationErrorKind};
use crate::{TelnetOption, consts};

/// First byte of an ENVIRON / NEW-ENVIRON subnegotiation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnvironCommand {
    /// The payload announces variable values.
    Is,
    /// The payload requests variable values.
    Send,
    /// The payload announces values that changed since the last IS.
    Info,
}

impl EnvironCommand {
    /// Returns the wire byte for this sub-command.
    pub fn to_u8(&self) -> u8 {
        match self {
            EnvironCommand::Is => consts::option::environ::IS,
            EnvironCommand::Send => consts::option::environ::SEND,
            EnvironCommand::Info => consts::option::environ::INFO,
        }
    }
}

/// Which namespace a variable belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnvironKind {
    /// A well-known variable (`VAR`).
    Var,
    /// A user-defined variable (`USERVAR`).
    UserVar,
}

/// One decoded variable from an ENVIRON payload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnvironEntry {
    /// Namespace of the variable.
    pub kind: EnvironKind,
    /// Variable name, unescaped.
    pub name: String,
    /// Variable value, unescaped; `None` when the peer sent the name alone
    /// (a request, or a variable it wants deleted).
    pub value: Option<String>,
}

/// Decodes an ENVIRON / NEW-ENVIRON payload into its command byte and
/// variable list.
///
/// A payload holding only the command byte is a valid request for all
/// variables and decodes to an empty list. Otherwise the variable list must
/// open with VAR or USERVAR and must not end in the middle of an ESC escape.
pub fn decode(buffer: &[u8]) -> CodecResult<(EnvironCommand, Vec<EnvironEntry>)> {
    let Some(&first) = buffer.first() else {
        return Err(CodecError::subnegotiation(
            TelnetOption::NewEnviron,
            SubnegotiationErrorKind::Empty,
        ));
    };
    let command = match first {
        consts::option::environ::IS => EnvironCommand::Is,
        consts::option::environ::SEND => EnvironCommand::Send,
        consts::option::environ::INFO => EnvironCommand::Info,
        command => {
            return Err(CodecError::subnegotiation(
                TelnetOption::NewEnviron,
                SubnegotiationErrorKind::InvalidCommand { command },
            ));
        }
    };

    if buffer.len() == 1 {
        return Ok((command, Vec::new()));
    }

    let second = buffer[1];
    if second != consts::option::environ::VAR && second != consts::option::environ::USERVAR {
        return Err(CodecError::subnegotiation(
            TelnetOption::NewEnviron,
            SubnegotiationErrorKind::MissingVariable { byte: second },
        ));
    }
    if buffer[buffer.len() - 1] == consts::option::environ::ESC {
        return Err(CodecError::subnegotiation(
            TelnetOption::NewEnviron,
            SubnegotiationErrorKind::TrailingEscape,
        ));
    }

    let mut entries = Vec::new();
    let mut current: Option<(EnvironKind, Vec<u8>, Option<Vec<u8>>)> = None;
    let mut escaped = false;
    for &byte in &buffer[1..] {
        if escaped {
            push_byte(&mut current, byte);
            escaped = false;
            continue;
        }
        match byte {
            consts::option::environ::ESC => escaped = true,
            consts::option::environ::VAR => {
                commit(&mut entries, current.take());
                current = Some((EnvironKind::Var, Vec::new(), None));
            }
            consts::option::environ::USERVAR => {
                commit(&mut entries, current.take());
                current = Some((EnvironKind::UserVar, Vec::new(), None));
            }
            consts::option::environ::VALUE => {
                if let Some((_, _, value)) = current.as_mut() {
                    value.get_or_insert_with(Vec::new);
                }
            }
            byte => push_byte(&mut current, byte),
        }
    }
    commit(&mut entries, current.take());
    Ok((command, entries))
}

fn push_byte(current: &mut Option<(EnvironKind, Vec<u8>, Option<Vec<u8>>)>, byte: u8) {
    if let Some((_, name, value)) = current.as_mut() {
        match value.as_mut() {
            Some(value) => value.push(byte),
            None => name.push(byte),
        }
    }
}

fn commit(
    entries: &mut Vec<EnvironEntry>,
    current: Option<(EnvironKind, Vec<u8>, Option<Vec<u8>>)>,
) {
    if let Some((kind, name, value)) = current {
        entries.push(EnvironEntry {
            kind,
            name: String::from_utf8_lossy(&name).into_owned(),
            value: value.map(|value| String::from_utf8_lossy(&value).into_owned()),
        });
    }
}
