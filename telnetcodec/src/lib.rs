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

//! # Mudwire Telnet Protocol Codec
//!
//! The wire-level half of the Mudwire MUD server: a stateful codec that
//! decodes a raw, possibly hostile, telnet byte stream into typed
//! [`TelnetEvent`]s and encodes [`TelnetCommand`] intents back into
//! spec-compliant byte sequences. It is built for `tokio_util::codec` but
//! performs no I/O of its own and can be driven byte-by-byte from anywhere.
//!
//! ## Overview
//!
//! The telnet protocol (RFC 854) multiplexes application data and an
//! in-band command channel over one TCP stream. This codec handles:
//!
//! - **Data transmission**: payload runs with `IAC IAC` escape resolution,
//!   coalesced so an escaped 0xFF never splits a data run
//! - **Option negotiation**: WILL/WONT/DO/DONT commands surfaced as events
//! - **Subnegotiation**: typed interpreters for the MUD-relevant options
//!   (NAWS, TERMINAL-TYPE, MSSP, ENVIRON/NEW-ENVIRON, ZMP) plus a raw
//!   fallback for everything else
//! - **Compression announcement**: the MCCPv2 (COMPRESS2) begin marker in
//!   both directions; the byte transform itself belongs to an external
//!   stream filter
//!
//! ## Usage Example
//!
//! ```rust
//! use mudwire_telnetcodec::{TelnetCodec, TelnetCommand, TelnetEvent};
//! use bytes::BytesMut;
//! use tokio_util::codec::Encoder;
//!
//! let mut codec = TelnetCodec::new();
//!
//! // Decode a chunk read off the socket.
//! for event in codec.feed(b"look\r\n") {
//!     match event {
//!         TelnetEvent::Data(bytes) => println!("input: {bytes:?}"),
//!         other => println!("protocol: {other:?}"),
//!     }
//! }
//!
//! // Encode a reply.
//! let mut outbound = BytesMut::new();
//! codec
//!     .encode(TelnetCommand::Text("You see nothing special.\n".into()), &mut outbound)
//!     .unwrap();
//! ```
//!
//! ## Error Handling
//!
//! Malformed input from the peer is never fatal: the decoder reports it
//! through its [`ProtocolObserver`] and keeps the connection alive. The
//! observer is injected at construction so tests can capture warnings
//! without touching global subscriber state.
//!
//! ## Thread Safety
//!
//! `TelnetCodec` is stateful and belongs to a single task; each connection
//! gets its own instance (typically one for the read side and one for the
//! write side).

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod args;
mod codec;
mod command;
pub mod consts;
mod event;
mod observer;
mod options;
mod result;

pub use self::args::{environ, mssp, naws, ttype, zmp};
pub use self::codec::TelnetCodec;
pub use self::command::{Negotiation, TelnetCommand};
pub use self::event::TelnetEvent;
pub use self::observer::{ProtocolObserver, TracingObserver};
pub use self::options::TelnetOption;
pub use self::result::{CodecError, CodecResult, SubnegotiationErrorKind};

#[cfg(test)]
mod tests {
    use super::{TelnetCodec, TelnetCommand, TelnetEvent, TelnetOption, consts};
    use bytes::{Bytes, BytesMut};
    use tokio_util::codec::{Decoder, Encoder};

    #[tokio::test]
    async fn telnet_decode() {
        let mut codec = TelnetCodec::new();
        let mut input_buffer = BytesMut::from("Terminated line\r\n");
        let mut actual_output = Vec::new();
        while let Some(event) = codec.decode(&mut input_buffer).unwrap() {
            actual_output.push(event);
        }
        assert_eq!(
            actual_output,
            vec![TelnetEvent::Data(Bytes::from_static(b"Terminated line\r\n"))],
        );
    }

    #[test]
    fn telnet_encode() {
        let mut codec = TelnetCodec::new();
        let mut actual_output = BytesMut::with_capacity(32);
        codec
            .encode(
                TelnetCommand::Data(Bytes::from_static(b"Raw Ascii Data\r\n")),
                &mut actual_output,
            )
            .unwrap();
        assert_eq!(&actual_output[..], b"Raw Ascii Data\r\n");
    }

    #[test]
    fn decode_login_exchange() {
        let mut codec = TelnetCodec::new();
        let mut wire = Vec::new();
        wire.extend_from_slice(b"Login:\r\n");
        wire.extend_from_slice(&[consts::IAC, consts::DO, consts::option::ECHO]);
        wire.extend_from_slice(b"Password:\r\n");
        let events = codec.feed(&wire);
        assert_eq!(
            events,
            vec![
                TelnetEvent::Data(Bytes::from_static(b"Login:\r\n")),
                TelnetEvent::Do(TelnetOption::Echo),
                TelnetEvent::Data(Bytes::from_static(b"Password:\r\n")),
            ]
        );
    }
}
