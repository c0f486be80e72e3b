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

use crate::consts;
use std::fmt;

///
/// The telnet options this engine knows by name. Every other option code is
/// carried through as [`TelnetOption::Unknown`] so negotiation and
/// subnegotiation for it still round-trip unharmed.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TelnetOption {
    /// [`consts::option::BINARY`] Binary Transmission [RFC856](https://tools.ietf.org/html/rfc856)
    TransmitBinary,
    /// [`consts::option::ECHO`] Echo [RFC857](https://tools.ietf.org/html/rfc857)
    Echo,
    /// [`consts::option::SGA`] Suppress Go Ahead [RFC858](https://tools.ietf.org/html/rfc858)
    SuppressGoAhead,
    /// [`consts::option::STATUS`] Status [RFC859](https://tools.ietf.org/html/rfc859)
    Status,
    /// [`consts::option::TTYPE`] Terminal Type [RFC1091](https://tools.ietf.org/html/rfc1091)
    TTYPE,
    /// [`consts::option::NAWS`] Negotiate About Window Size [RFC1073](https://tools.ietf.org/html/rfc1073)
    NAWS,
    /// [`consts::option::ENVIRON`] Environment Option [RFC1408](https://tools.ietf.org/html/rfc1408)
    Environ,
    /// [`consts::option::NEW_ENVIRON`] New Environment Option [RFC1572](https://tools.ietf.org/html/rfc1572)
    NewEnviron,
    /// [`consts::option::MSDP`] Mud Server Data Protocol
    MSDP,
    /// [`consts::option::MSSP`] Mud Server Status Protocol
    MSSP,
    /// [`consts::option::COMPRESS`] MCCP version 1, obsolete but still
    /// announced by some clients
    Compress1,
    /// [`consts::option::COMPRESS2`] MCCP version 2
    Compress2,
    /// [`consts::option::MSP`] Mud Sound Protocol
    MSP,
    /// [`consts::option::MXP`] Mud eXtension Protocol
    MXP,
    /// [`consts::option::ZMP`] Zenith Mud Protocol
    ZMP,
    /// Any option code without a dedicated handler
    Unknown(u8),
}

impl TelnetOption {
    /// Returns the wire byte for this option.
    pub fn to_u8(&self) -> u8 {
        match self {
            TelnetOption::TransmitBinary => consts::option::BINARY,
            TelnetOption::Echo => consts::option::ECHO,
            TelnetOption::SuppressGoAhead => consts::option::SGA,
            TelnetOption::Status => consts::option::STATUS,
            TelnetOption::TTYPE => consts::option::TTYPE,
            TelnetOption::NAWS => consts::option::NAWS,
            TelnetOption::Environ => consts::option::ENVIRON,
            TelnetOption::NewEnviron => consts::option::NEW_ENVIRON,
            TelnetOption::MSDP => consts::option::MSDP,
            TelnetOption::MSSP => consts::option::MSSP,
            TelnetOption::Compress1 => consts::option::COMPRESS,
            TelnetOption::Compress2 => consts::option::COMPRESS2,
            TelnetOption::MSP => consts::option::MSP,
            TelnetOption::MXP => consts::option::MXP,
            TelnetOption::ZMP => consts::option::ZMP,
            TelnetOption::Unknown(byte) => *byte,
        }
    }

    /// Maps a wire byte to its option, falling back to
    /// [`TelnetOption::Unknown`] for codes without a dedicated handler.
    pub fn from_u8(byte: u8) -> Self {
        match byte {
            consts::option::BINARY => TelnetOption::TransmitBinary,
            consts::option::ECHO => TelnetOption::Echo,
            consts::option::SGA => TelnetOption::SuppressGoAhead,
            consts::option::STATUS => TelnetOption::Status,
            consts::option::TTYPE => TelnetOption::TTYPE,
            consts::option::NAWS => TelnetOption::NAWS,
            consts::option::ENVIRON => TelnetOption::Environ,
            consts::option::NEW_ENVIRON => TelnetOption::NewEnviron,
            consts::option::MSDP => TelnetOption::MSDP,
            consts::option::MSSP => TelnetOption::MSSP,
            consts::option::COMPRESS => TelnetOption::Compress1,
            consts::option::COMPRESS2 => TelnetOption::Compress2,
            consts::option::MSP => TelnetOption::MSP,
            consts::option::MXP => TelnetOption::MXP,
            consts::option::ZMP => TelnetOption::ZMP,
            byte => TelnetOption::Unknown(byte),
        }
    }
}

impl fmt::Display for TelnetOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelnetOption::TransmitBinary => write!(f, "TransmitBinary"),
            TelnetOption::Echo => write!(f, "Echo"),
            TelnetOption::SuppressGoAhead => write!(f, "SuppressGoAhead"),
            TelnetOption::Status => write!(f, "Status"),
            TelnetOption::TTYPE => write!(f, "TTYPE"),
            TelnetOption::NAWS => write!(f, "NAWS"),
            TelnetOption::Environ => write!(f, "Environ"),
            TelnetOption::NewEnviron => write!(f, "NewEnviron"),
            TelnetOption::MSDP => write!(f, "MSDP"),
            TelnetOption::MSSP => write!(f, "MSSP"),
            TelnetOption::Compress1 => write!(f, "Compress1"),
            TelnetOption::Compress2 => write!(f, "Compress2"),
            TelnetOption::MSP => write!(f, "MSP"),
            TelnetOption::MXP => write!(f, "MXP"),
            TelnetOption::ZMP => write!(f, "ZMP"),
            TelnetOption::Unknown(option) => write!(f, "Unknown({option})"),
        }
    }
}

impl From<u8> for TelnetOption {
    fn from(byte: u8) -> Self {
        Self::from_u8(byte)
    }
}

impl From<TelnetOption> for u8 {
    fn from(option: TelnetOption) -> Self {
        option.to_u8()
    }
}
