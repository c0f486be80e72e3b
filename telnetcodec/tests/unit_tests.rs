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

//! Unit tests for the public telnetcodec surface

use bytes::{Bytes, BytesMut};
use mudwire_telnetcodec::{
    Negotiation, TelnetCodec, TelnetCommand, TelnetEvent, TelnetOption, consts, environ, mssp,
    naws, ttype, zmp,
};
use tokio_util::codec::Encoder;

// ============================================================================
// Helper Functions
// ============================================================================

fn encode_command(command: TelnetCommand) -> BytesMut {
    let mut codec = TelnetCodec::new();
    let mut buffer = BytesMut::new();
    codec.encode(command, &mut buffer).unwrap();
    buffer
}

// ============================================================================
// TelnetOption Tests
// ============================================================================

#[test]
fn telnet_option_from_u8() {
    assert_eq!(TelnetOption::from(0), TelnetOption::TransmitBinary);
    assert_eq!(TelnetOption::from(1), TelnetOption::Echo);
    assert_eq!(TelnetOption::from(24), TelnetOption::TTYPE);
    assert_eq!(TelnetOption::from(31), TelnetOption::NAWS);
    assert_eq!(TelnetOption::from(93), TelnetOption::ZMP);
    assert_eq!(TelnetOption::from(123), TelnetOption::Unknown(123));
}

#[test]
fn telnet_option_to_u8() {
    assert_eq!(u8::from(TelnetOption::TransmitBinary), 0);
    assert_eq!(u8::from(TelnetOption::MSSP), 70);
    assert_eq!(u8::from(TelnetOption::Compress2), 86);
    assert_eq!(u8::from(TelnetOption::Unknown(123)), 123);
}

#[test]
fn telnet_option_display() {
    assert_eq!(format!("{}", TelnetOption::Echo), "Echo");
    assert_eq!(format!("{}", TelnetOption::MSSP), "MSSP");
    assert_eq!(format!("{}", TelnetOption::Unknown(99)), "Unknown(99)");
}

// ============================================================================
// Encoding Tests
// ============================================================================

#[test]
fn encode_negotiation_verbs() {
    for (verb, byte) in [
        (Negotiation::Will, consts::WILL),
        (Negotiation::Wont, consts::WONT),
        (Negotiation::Do, consts::DO),
        (Negotiation::Dont, consts::DONT),
    ] {
        let wire = encode_command(TelnetCommand::Negotiate(verb, TelnetOption::Echo));
        assert_eq!(&wire[..], &[consts::IAC, byte, consts::option::ECHO]);
    }
}

#[test]
fn encode_empty_subnegotiation() {
    let wire = encode_command(TelnetCommand::Subnegotiate(
        TelnetOption::TransmitBinary,
        Bytes::new(),
    ));
    assert_eq!(
        &wire[..],
        &[
            consts::IAC,
            consts::SB,
            consts::option::BINARY,
            consts::IAC,
            consts::SE,
        ]
    );
}

#[test]
fn encode_terminal_type_is_announcement() {
    let wire = encode_command(TelnetCommand::TerminalTypeIs("dumb".to_string()));
    let mut expected = vec![
        consts::IAC,
        consts::SB,
        consts::option::TTYPE,
        consts::option::ttype::IS,
    ];
    expected.extend_from_slice(b"dumb");
    expected.extend_from_slice(&[consts::IAC, consts::SE]);
    assert_eq!(&wire[..], &expected[..]);
}

#[test]
fn encode_new_environ_request() {
    let wire = encode_command(TelnetCommand::NewEnviron(Bytes::from_static(&[
        consts::option::environ::SEND,
    ])));
    assert_eq!(
        &wire[..],
        &[
            consts::IAC,
            consts::SB,
            consts::option::NEW_ENVIRON,
            consts::option::environ::SEND,
            consts::IAC,
            consts::SE,
        ]
    );
}

// ============================================================================
// Interpreter Tests (public module surface)
// ============================================================================

#[test]
fn naws_decode_public_surface() {
    let size = naws::WindowSize::decode(&[0x00, 0x50, 0x00, 0x18]).unwrap();
    assert_eq!(size.width, 80);
    assert_eq!(size.height, 24);
    assert_eq!(format!("{size}"), "80x24");
}

#[test]
fn ttype_decode_public_surface() {
    let (command, name) = ttype::decode(b"\x00vt100").unwrap();
    assert_eq!(command, ttype::TermTypeCommand::Is);
    assert_eq!(name, "vt100");
}

#[test]
fn mssp_table_public_surface() {
    let mut table = mssp::StatusTable::new();
    table.insert("PLAYERS", "3");
    assert_eq!(table.get("PLAYERS"), Some("3"));
    assert_eq!(table.get("UPTIME"), None);
    assert_eq!(table.len(), 1);
    assert!(!table.is_empty());
}

#[test]
fn environ_decode_public_surface() {
    let (command, entries) = environ::decode(&[consts::option::environ::SEND]).unwrap();
    assert_eq!(command, environ::EnvironCommand::Send);
    assert!(entries.is_empty());
}

#[test]
fn zmp_decode_public_surface() {
    assert_eq!(
        zmp::decode(b"zmp.check\x00zmp.\x00"),
        vec!["zmp.check", "zmp."]
    );
}

// ============================================================================
// Decode/Encode interplay
// ============================================================================

#[test]
fn decoded_events_compare_by_value() {
    let mut codec = TelnetCodec::new();
    let events = codec.feed(&[consts::IAC, consts::DO, consts::option::ECHO]);
    assert_eq!(events, vec![TelnetEvent::Do(TelnetOption::Echo)]);
}

#[test]
fn feed_accumulates_across_partial_frames() {
    let mut codec = TelnetCodec::new();
    assert!(codec.feed(&[consts::IAC, consts::SB]).is_empty());
    assert!(codec.feed(&[consts::option::NAWS, 0x00, 0x50]).is_empty());
    let events = codec.feed(&[0x00, 0x18, consts::IAC, consts::SE]);
    assert_eq!(
        events,
        vec![TelnetEvent::Naws(naws::WindowSize::new(80, 24))]
    );
}
