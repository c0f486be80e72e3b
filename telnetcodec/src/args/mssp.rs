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

//! Mud Server Status Protocol
//!
//! MSSP exposes server metadata (name, player count, uptime and so on) to
//! clients and MUD crawlers as a flat `VAR name VAL value ...` sequence
//! inside a single subnegotiation.
//!

use crate::result::{CodecError, CodecResult, SubnegotiationErrorKind};
use crate::{TelnetOption, consts};
use bytes::BufMut;

/// An insertion-ordered name/value table for MSSP.
///
/// Crawlers display variables in the order the server sent them, so the
/// table preserves insertion order; inserting an existing name replaces its
/// value in place.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StatusTable(Vec<(String, String)>);

impl StatusTable {
    /// Creates an empty table.
    pub fn new() -> StatusTable {
        StatusTable(Vec::new())
    }

    /// Inserts or replaces a variable.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(existing, _)| *existing == name) {
            entry.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    /// Looks up a variable by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of variables in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table holds no variables.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Encodes the table as the MSSP `VAR name VAL value` sequence.
    ///
    /// Sentinel bytes (NUL, IAC, VAR, VAL) are stripped from names and
    /// values; they cannot be represented inside an MSSP payload.
    pub fn encode<T: BufMut>(&self, dst: &mut T) -> CodecResult<usize> {
        let mut written = 0;
        for (name, value) in &self.0 {
            dst.put_u8(consts::option::mssp::VAR);
            written += 1 + put_filtered(dst, name);
            dst.put_u8(consts::option::mssp::VAL);
            written += 1 + put_filtered(dst, value);
        }
        Ok(written)
    }

    /// Decodes an MSSP payload.
    ///
    /// The payload must open with a VAR marker; an empty buffer or a stray
    /// leading byte means the peer is not speaking MSSP.
    pub fn decode(buffer: &[u8]) -> CodecResult<StatusTable> {
        let Some(&first) = buffer.first() else {
            return Err(CodecError::subnegotiation(
                TelnetOption::MSSP,
                SubnegotiationErrorKind::Empty,
            ));
        };
        if first != consts::option::mssp::VAR {
            return Err(CodecError::subnegotiation(
                TelnetOption::MSSP,
                SubnegotiationErrorKind::MissingVariable { byte: first },
            ));
        }

        let mut table = StatusTable::new();
        let mut name: Vec<u8> = Vec::new();
        let mut value: Vec<u8> = Vec::new();
        let mut in_value = false;
        let mut has_pair = false;

        for &byte in buffer {
            match byte {
                consts::option::mssp::VAR => {
                    if has_pair {
                        table.insert(lossy(&name), lossy(&value));
                    }
                    name.clear();
                    value.clear();
                    in_value = false;
                    has_pair = true;
                }
                consts::option::mssp::VAL => {
                    in_value = true;
                }
                byte if in_value => value.push(byte),
                byte => name.push(byte),
            }
        }
        if has_pair {
            table.insert(lossy(&name), lossy(&value));
        }
        Ok(table)
    }
}

impl FromIterator<(String, String)> for StatusTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = StatusTable::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn put_filtered<T: BufMut>(dst: &mut T, text: &str) -> usize {
    let mut written = 0;
    for &byte in text.as_bytes() {
        if byte == consts::NUL
            || byte == consts::IAC
            || byte == consts::option::mssp::VAR
            || byte == consts::option::mssp::VAL
        {
            continue;
        }
        dst.put_u8(byte);
        written += 1;
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn encode_single_pair() {
        let mut table = StatusTable::new();
        table.insert("NAME", "Test");
        let mut buffer = BytesMut::new();
        table.encode(&mut buffer).unwrap();
        assert_eq!(&buffer[..], b"\x01NAME\x02Test");
    }

    #[test]
    fn decode_round_trips_encode() {
        let mut table = StatusTable::new();
        table.insert("NAME", "Test");
        table.insert("PLAYERS", "12");
        let mut buffer = BytesMut::new();
        table.encode(&mut buffer).unwrap();
        assert_eq!(StatusTable::decode(&buffer).unwrap(), table);
    }

    #[test]
    fn decode_preserves_insertion_order() {
        let decoded = StatusTable::decode(b"\x01B\x021\x01A\x022").unwrap();
        let pairs: Vec<_> = decoded.iter().collect();
        assert_eq!(pairs, vec![("B", "1"), ("A", "2")]);
    }

    #[test]
    fn decode_rejects_empty_payload() {
        assert!(matches!(
            StatusTable::decode(&[]),
            Err(CodecError::Subnegotiation {
                option: TelnetOption::MSSP,
                kind: SubnegotiationErrorKind::Empty,
            })
        ));
    }

    #[test]
    fn decode_rejects_missing_leading_var() {
        assert!(matches!(
            StatusTable::decode(b"NAME\x02Test"),
            Err(CodecError::Subnegotiation {
                option: TelnetOption::MSSP,
                kind: SubnegotiationErrorKind::MissingVariable { byte: b'N' },
            })
        ));
    }

    #[test]
    fn insert_replaces_existing_name_in_place() {
        let mut table = StatusTable::new();
        table.insert("UPTIME", "1");
        table.insert("NAME", "Test");
        table.insert("UPTIME", "2");
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, vec![("UPTIME", "2"), ("NAME", "Test")]);
    }

    #[test]
    fn encode_strips_sentinel_bytes() {
        let mut table = StatusTable::new();
        table.insert("NA\u{1}ME", "Te\u{2}st");
        let mut buffer = BytesMut::new();
        table.encode(&mut buffer).unwrap();
        assert_eq!(&buffer[..], b"\x01NAME\x02Test");
    }
}
