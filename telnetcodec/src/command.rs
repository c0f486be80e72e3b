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
use crate::args::mssp::StatusTable;
use crate::consts;
use bytes::Bytes;
use std::fmt;

///
/// The four option negotiation verbs.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Negotiation {
    /// Offer to enable an option on our side.
    Will,
    /// Refuse or disable an option on our side.
    Wont,
    /// Ask the peer to enable an option.
    Do,
    /// Ask the peer to disable an option.
    Dont,
}

impl Negotiation {
    /// Returns the wire byte for this verb.
    pub fn to_u8(&self) -> u8 {
        match self {
            Negotiation::Will => consts::WILL,
            Negotiation::Wont => consts::WONT,
            Negotiation::Do => consts::DO,
            Negotiation::Dont => consts::DONT,
        }
    }
}

impl fmt::Display for Negotiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Negotiation::Will => write!(f, "WILL"),
            Negotiation::Wont => write!(f, "WONT"),
            Negotiation::Do => write!(f, "DO"),
            Negotiation::Dont => write!(f, "DONT"),
        }
    }
}

///
/// `TelnetCommand` is an outbound protocol intent. The encoder turns each
/// variant into its spec-compliant byte sequence; see the `Encoder`
/// implementation on [`crate::TelnetCodec`].
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TelnetCommand {
    /// Bytes enqueued unchanged. No escaping; the caller guarantees the
    /// content is already valid on the wire.
    Raw(Bytes),
    /// Application payload; every 0xFF byte is doubled on the wire.
    Data(Bytes),
    /// Text with newline translation (`\r` to `\r\0`, `\n` to `\r\n`)
    /// applied before escaping.
    Text(String),
    /// A negotiation command, `IAC <verb> <option>`.
    Negotiate(Negotiation, TelnetOption),
    /// A complete subnegotiation, `IAC SB <option> <escaped payload> IAC SE`.
    Subnegotiate(TelnetOption, Bytes),
    /// A TERMINAL-TYPE SEND request asking the peer for its terminal name.
    TerminalTypeRequest,
    /// A TERMINAL-TYPE IS announcement carrying our terminal name.
    TerminalTypeIs(String),
    /// The MSSP variable table as a subnegotiation.
    ServerStatus(StatusTable),
    /// A NEW-ENVIRON subnegotiation with a prebuilt payload.
    NewEnviron(Bytes),
    /// The COMPRESS2 begin marker. After encoding this, the encoder marks
    /// the outbound stream as compressed; the actual byte transform is the
    /// job of an external stream filter.
    BeginCompression,
}
