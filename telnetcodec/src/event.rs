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
use crate::args::environ::{EnvironCommand, EnvironEntry};
use crate::args::mssp::StatusTable;
use crate::args::naws::WindowSize;
use crate::args::ttype::TermTypeCommand;
use bytes::Bytes;

///
/// `TelnetEvent` is one decoded protocol occurrence from the inbound stream.
/// The enum is closed on purpose: every consumer matches exhaustively, so a
/// new protocol feature cannot be silently ignored anywhere.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TelnetEvent {
    /// Application payload. The escape decoding already happened: a `Data`
    /// event never carries a raw command sequence, and an `IAC IAC` pair on
    /// the wire appears here as a single 0xFF byte.
    Data(Bytes),
    /// Peer announced it wants to enable an option on its side.
    Will(TelnetOption),
    /// Peer refused or disabled an option on its side.
    Wont(TelnetOption),
    /// Peer asked us to enable an option.
    Do(TelnetOption),
    /// Peer asked us to disable an option.
    Dont(TelnetOption),
    /// Peer reported its window size.
    Naws(WindowSize),
    /// Peer sent a TERMINAL-TYPE subnegotiation.
    TerminalType(TermTypeCommand, String),
    /// Peer sent an MSSP variable table.
    ServerStatus(StatusTable),
    /// Peer sent an ENVIRON / NEW-ENVIRON variable list.
    Environ(EnvironCommand, Vec<EnvironEntry>),
    /// Peer sent a ZMP command with its NUL-separated arguments.
    Zmp(Vec<String>),
    /// Subnegotiation for an option without a dedicated interpreter.
    Subnegotiation(TelnetOption, Bytes),
    /// Any other command byte following IAC.
    Command(u8),
    /// A COMPRESS2 begin marker arrived. Every byte after this point in the
    /// inbound stream is compressed and must pass through an external
    /// decompression filter before reaching the decoder again.
    CompressionStart,
}
