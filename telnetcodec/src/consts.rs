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

//! Telnet wire-level byte values.
//!
//! Command bytes from [RFC 854](https://tools.ietf.org/html/rfc854), option
//! codes from the IANA telnet-options registry, and the sub-codes used inside
//! subnegotiation payloads.

/// Interpret As Command. Introduces every telnet command; doubled to carry a
/// literal 0xFF in the data stream.
pub const IAC: u8 = 255;
/// Option negotiation: sender offers to enable an option on its side.
pub const WILL: u8 = 251;
/// Option negotiation: sender refuses or disables an option on its side.
pub const WONT: u8 = 252;
/// Option negotiation: sender asks the peer to enable an option.
pub const DO: u8 = 253;
/// Option negotiation: sender asks the peer to disable an option.
pub const DONT: u8 = 254;
/// Subnegotiation begin.
pub const SB: u8 = 250;
/// Subnegotiation end.
pub const SE: u8 = 240;
/// No operation.
pub const NOP: u8 = 241;
/// Carriage return.
pub const CR: u8 = b'\r';
/// Line feed.
pub const LF: u8 = b'\n';
/// NUL byte, follows a bare CR on the wire.
pub const NUL: u8 = 0;

/// Telnet option codes.
pub mod option {
    /// Binary Transmission [RFC856](https://tools.ietf.org/html/rfc856)
    pub const BINARY: u8 = 0;
    /// Echo [RFC857](https://tools.ietf.org/html/rfc857)
    pub const ECHO: u8 = 1;
    /// Suppress Go Ahead [RFC858](https://tools.ietf.org/html/rfc858)
    pub const SGA: u8 = 3;
    /// Status [RFC859](https://tools.ietf.org/html/rfc859)
    pub const STATUS: u8 = 5;
    /// Terminal Type [RFC1091](https://tools.ietf.org/html/rfc1091)
    pub const TTYPE: u8 = 24;
    /// Negotiate About Window Size [RFC1073](https://tools.ietf.org/html/rfc1073)
    pub const NAWS: u8 = 31;
    /// Environment Option [RFC1408](https://tools.ietf.org/html/rfc1408)
    pub const ENVIRON: u8 = 36;
    /// New Environment Option [RFC1572](https://tools.ietf.org/html/rfc1572)
    pub const NEW_ENVIRON: u8 = 39;
    /// Mud Server Data Protocol [MSDP](https://tintin.sourceforge.io/protocols/msdp/)
    pub const MSDP: u8 = 69;
    /// Mud Server Status Protocol [MSSP](https://tintin.sourceforge.io/protocols/mssp/)
    pub const MSSP: u8 = 70;
    /// Mud Client Compression Protocol version 1 (obsolete)
    pub const COMPRESS: u8 = 85;
    /// Mud Client Compression Protocol version 2 [MCCPv2](https://tintin.sourceforge.io/protocols/mccp/)
    pub const COMPRESS2: u8 = 86;
    /// Mud Sound Protocol
    pub const MSP: u8 = 90;
    /// Mud eXtension Protocol
    pub const MXP: u8 = 91;
    /// Zenith Mud Protocol [ZMP](http://discworld.starturtle.net/external/protocols/zmp.html)
    pub const ZMP: u8 = 93;
    /// Extended Options List [RFC861](https://tools.ietf.org/html/rfc861)
    pub const EXOPL: u8 = 255;

    /// TERMINAL-TYPE subnegotiation sub-codes.
    pub mod ttype {
        /// Payload announces the sender's terminal name.
        pub const IS: u8 = 0;
        /// Payload requests the receiver's terminal name.
        pub const SEND: u8 = 1;
    }

    /// MSSP subnegotiation sentinel bytes.
    pub mod mssp {
        /// Introduces a variable name run.
        pub const VAR: u8 = 1;
        /// Introduces a variable value run.
        pub const VAL: u8 = 2;
    }

    /// ENVIRON / NEW-ENVIRON subnegotiation sub-codes.
    pub mod environ {
        /// Payload announces variable values.
        pub const IS: u8 = 0;
        /// Payload requests variable values.
        pub const SEND: u8 = 1;
        /// Payload announces changed variable values.
        pub const INFO: u8 = 2;

        /// Introduces a well-known variable name.
        pub const VAR: u8 = 0;
        /// Introduces a variable value.
        pub const VALUE: u8 = 1;
        /// Escapes the next byte inside a name or value.
        pub const ESC: u8 = 2;
        /// Introduces a user-defined variable name.
        pub const USERVAR: u8 = 3;
    }
}
