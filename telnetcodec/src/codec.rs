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

use crate::args::{environ, mssp, naws, ttype, zmp};
use crate::command::TelnetCommand;
use crate::consts;
use crate::event::TelnetEvent;
use crate::observer::{ProtocolObserver, TracingObserver};
use crate::options::TelnetOption;
use crate::result::{CodecError, CodecResult};
use bytes::{Buf, BufMut, BytesMut};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio_util::codec::{Decoder, Encoder};

/// Stateful codec for the telnet protocol.
///
/// The decoding half is a byte-at-a-time state machine that turns the raw
/// inbound stream into [`TelnetEvent`]s: application data with IAC escapes
/// resolved, negotiation commands, and interpreted subnegotiations. The
/// encoding half turns [`TelnetCommand`] intents into spec-compliant byte
/// sequences.
///
/// One instance belongs to exactly one connection and one task; the struct
/// is deliberately not shareable. Decoding performs no I/O and never blocks,
/// so it can sit behind `tokio_util::codec::FramedRead` or be driven
/// directly through [`TelnetCodec::feed`].
pub struct TelnetCodec {
    decoder_state: DecoderState,
    decoder_buffer: BytesMut,
    pending: VecDeque<TelnetEvent>,
    observer: Arc<dyn ProtocolObserver>,
    compress_active: bool,
}

impl TelnetCodec {
    /// Creates a codec that reports protocol anomalies through `tracing`.
    pub fn new() -> TelnetCodec {
        TelnetCodec::default()
    }

    /// Creates a codec with an explicit anomaly observer, so callers (and
    /// tests) can capture warnings instead of relying on the global
    /// subscriber.
    pub fn with_observer(observer: Arc<dyn ProtocolObserver>) -> TelnetCodec {
        TelnetCodec {
            observer,
            ..TelnetCodec::default()
        }
    }

    /// Whether [`TelnetCommand::BeginCompression`] has been encoded on this
    /// codec. Once true, everything written after the marker must pass
    /// through an external compression filter before hitting the socket;
    /// the codec itself never transforms bytes.
    pub fn is_compressing(&self) -> bool {
        self.compress_active
    }

    /// Feeds a chunk of inbound bytes through the decoder and collects every
    /// event it produces, flushing any trailing data run at the end of the
    /// chunk.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<TelnetEvent> {
        let mut src = BytesMut::from(bytes);
        let mut events = Vec::new();
        while let Ok(Some(event)) = self.decode(&mut src) {
            events.push(event);
        }
        events
    }

    /// Writes the opening `IAC SB <option>` of a subnegotiation.
    pub fn begin_subnegotiation(&self, dst: &mut BytesMut, option: TelnetOption) {
        dst.reserve(3);
        dst.put_u8(consts::IAC);
        dst.put_u8(consts::SB);
        dst.put_u8(option.to_u8());
    }

    /// Writes the closing `IAC SE` of a subnegotiation.
    pub fn end_subnegotiation(&self, dst: &mut BytesMut) {
        dst.reserve(2);
        dst.put_u8(consts::IAC);
        dst.put_u8(consts::SE);
    }

    /// Runs one byte through the state machine, queueing any events it
    /// completes. Returns without consuming further input; the caller owns
    /// the read loop.
    fn process_byte(&mut self, byte: u8) {
        let mut byte = byte;
        loop {
            match (self.decoder_state, byte) {
                (DecoderState::Data, consts::IAC) => {
                    self.decoder_state = DecoderState::Command;
                }
                (DecoderState::Data, _) => {
                    self.decoder_buffer.put_u8(byte);
                }
                // IAC IAC is the escape for a literal 0xFF: it joins the
                // surrounding data run instead of splitting it.
                (DecoderState::Command, consts::IAC) => {
                    self.decoder_buffer.put_u8(consts::IAC);
                    self.decoder_state = DecoderState::Data;
                }
                (DecoderState::Command, consts::SB) => {
                    self.flush_data();
                    self.decoder_state = DecoderState::Subnegotiate;
                }
                (DecoderState::Command, consts::WILL) => {
                    self.flush_data();
                    self.decoder_state = DecoderState::NegotiateWill;
                }
                (DecoderState::Command, consts::WONT) => {
                    self.flush_data();
                    self.decoder_state = DecoderState::NegotiateWont;
                }
                (DecoderState::Command, consts::DO) => {
                    self.flush_data();
                    self.decoder_state = DecoderState::NegotiateDo;
                }
                (DecoderState::Command, consts::DONT) => {
                    self.flush_data();
                    self.decoder_state = DecoderState::NegotiateDont;
                }
                (DecoderState::Command, _) => {
                    self.flush_data();
                    self.pending.push_back(TelnetEvent::Command(byte));
                    self.decoder_state = DecoderState::Data;
                }
                (DecoderState::NegotiateWill, _) => {
                    self.pending
                        .push_back(TelnetEvent::Will(TelnetOption::from_u8(byte)));
                    self.decoder_state = DecoderState::Data;
                }
                (DecoderState::NegotiateWont, _) => {
                    self.pending
                        .push_back(TelnetEvent::Wont(TelnetOption::from_u8(byte)));
                    self.decoder_state = DecoderState::Data;
                }
                (DecoderState::NegotiateDo, _) => {
                    self.pending
                        .push_back(TelnetEvent::Do(TelnetOption::from_u8(byte)));
                    self.decoder_state = DecoderState::Data;
                }
                (DecoderState::NegotiateDont, _) => {
                    self.pending
                        .push_back(TelnetEvent::Dont(TelnetOption::from_u8(byte)));
                    self.decoder_state = DecoderState::Data;
                }
                (DecoderState::Subnegotiate, _) => {
                    self.decoder_state = DecoderState::SubnegotiateData(byte);
                }
                (DecoderState::SubnegotiateData(option), consts::IAC) => {
                    self.decoder_state = DecoderState::SubnegotiateIac(option);
                }
                // MCCPv1 used the invalid framing IAC SB 85 WILL SE to start
                // compression. Discard it; only MCCPv2 is supported.
                (DecoderState::SubnegotiateData(consts::option::COMPRESS), consts::WILL) => {
                    self.decoder_buffer.clear();
                    self.decoder_state = DecoderState::Data;
                }
                (DecoderState::SubnegotiateData(_), _) => {
                    self.decoder_buffer.put_u8(byte);
                }
                (DecoderState::SubnegotiateIac(option), consts::SE) => {
                    self.decoder_state = DecoderState::Data;
                    let buffer = self.decoder_buffer.split();
                    self.subnegotiate(option, buffer);
                }
                (DecoderState::SubnegotiateIac(option), consts::IAC) => {
                    self.decoder_buffer.put_u8(consts::IAC);
                    self.decoder_state = DecoderState::SubnegotiateData(option);
                }
                (DecoderState::SubnegotiateIac(option), _) => {
                    // Protocol error. Dispatch what we have, then reinterpret
                    // the offending byte as a fresh command byte.
                    self.observer.protocol_warning(&format!(
                        "unexpected byte 0x{byte:02X} after IAC inside a subnegotiation"
                    ));
                    let buffer = self.decoder_buffer.split();
                    self.subnegotiate(option, buffer);
                    self.decoder_state = DecoderState::Command;
                    continue;
                }
            }
            break;
        }
    }

    /// Queues the accumulated data run as a `Data` event, if there is one.
    fn flush_data(&mut self) {
        if !self.decoder_buffer.is_empty() {
            let data = self.decoder_buffer.split().freeze();
            self.pending.push_back(TelnetEvent::Data(data));
        }
    }

    /// Dispatches a completed subnegotiation buffer to the interpreter for
    /// its option. COMPRESS2 short-circuits interpretation entirely: any
    /// subnegotiation for it, whatever the payload, is the begin marker.
    fn subnegotiate(&mut self, option: u8, buffer: BytesMut) {
        let option = TelnetOption::from_u8(option);
        if option == TelnetOption::Compress2 {
            self.pending.push_back(TelnetEvent::CompressionStart);
            return;
        }
        let interpreted: CodecResult<TelnetEvent> = match option {
            TelnetOption::NAWS => naws::WindowSize::decode(&buffer).map(TelnetEvent::Naws),
            TelnetOption::TTYPE => ttype::decode(&buffer)
                .map(|(command, name)| TelnetEvent::TerminalType(command, name)),
            TelnetOption::MSSP => mssp::StatusTable::decode(&buffer).map(TelnetEvent::ServerStatus),
            TelnetOption::Environ | TelnetOption::NewEnviron => environ::decode(&buffer)
                .map(|(command, entries)| TelnetEvent::Environ(command, entries)),
            TelnetOption::ZMP => Ok(TelnetEvent::Zmp(zmp::decode(&buffer))),
            option => Ok(TelnetEvent::Subnegotiation(option, buffer.freeze())),
        };
        match interpreted {
            Ok(event) => self.pending.push_back(event),
            Err(error) => self
                .observer
                .protocol_warning(&format!("dropping subnegotiation: {error}")),
        }
    }
}

impl Default for TelnetCodec {
    fn default() -> Self {
        TelnetCodec {
            decoder_state: DecoderState::Data,
            decoder_buffer: BytesMut::new(),
            pending: VecDeque::new(),
            observer: Arc::new(TracingObserver),
            compress_active: false,
        }
    }
}

impl std::fmt::Debug for TelnetCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelnetCodec")
            .field("decoder_state", &self.decoder_state)
            .field("buffered", &self.decoder_buffer.len())
            .field("pending", &self.pending.len())
            .field("compress_active", &self.compress_active)
            .finish()
    }
}

impl Decoder for TelnetCodec {
    type Item = TelnetEvent;
    type Error = CodecError;

    /// Pulls bytes off `src` until one event is complete.
    ///
    /// Consecutive application bytes coalesce into a single `Data` event;
    /// the run ends when a command interrupts it or the source is exhausted,
    /// so a chunk like `ABC IAC IAC DEF` comes back as one event carrying
    /// `ABC\xFFDEF`. A partially received command or subnegotiation stays in
    /// the decoder's state across calls and resumes with the next chunk.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<TelnetEvent>, Self::Error> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }
            if !src.has_remaining() {
                // End of input is the one flush point without an IAC
                // boundary: hand out whatever data run is still buffered.
                if matches!(self.decoder_state, DecoderState::Data)
                    && !self.decoder_buffer.is_empty()
                {
                    let data = self.decoder_buffer.split().freeze();
                    return Ok(Some(TelnetEvent::Data(data)));
                }
                return Ok(None);
            }
            let byte = src.get_u8();
            self.process_byte(byte);
        }
    }
}

impl Encoder<TelnetCommand> for TelnetCodec {
    type Error = CodecError;

    /// Encodes an outbound intent into its wire byte sequence.
    ///
    /// The encoder holds no state beyond the compression flag flipped by
    /// [`TelnetCommand::BeginCompression`]; the compression transform itself
    /// is applied by an external stream filter downstream of this codec.
    fn encode(&mut self, item: TelnetCommand, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            TelnetCommand::Raw(bytes) => {
                dst.extend_from_slice(&bytes);
            }
            TelnetCommand::Data(bytes) => {
                put_escaped(dst, &bytes);
            }
            TelnetCommand::Text(text) => {
                put_escaped(dst, &translate_newlines(&text));
            }
            TelnetCommand::Negotiate(verb, option) => {
                dst.reserve(3);
                dst.put_u8(consts::IAC);
                dst.put_u8(verb.to_u8());
                dst.put_u8(option.to_u8());
            }
            TelnetCommand::Subnegotiate(option, payload) => {
                self.begin_subnegotiation(dst, option);
                put_escaped(dst, &payload);
                self.end_subnegotiation(dst);
            }
            TelnetCommand::TerminalTypeRequest => {
                self.begin_subnegotiation(dst, TelnetOption::TTYPE);
                dst.put_u8(consts::option::ttype::SEND);
                self.end_subnegotiation(dst);
            }
            TelnetCommand::TerminalTypeIs(name) => {
                self.begin_subnegotiation(dst, TelnetOption::TTYPE);
                dst.put_u8(consts::option::ttype::IS);
                put_escaped(dst, name.as_bytes());
                self.end_subnegotiation(dst);
            }
            TelnetCommand::ServerStatus(table) => {
                let mut payload = BytesMut::new();
                table.encode(&mut payload)?;
                self.begin_subnegotiation(dst, TelnetOption::MSSP);
                put_escaped(dst, &payload);
                self.end_subnegotiation(dst);
            }
            TelnetCommand::NewEnviron(payload) => {
                self.begin_subnegotiation(dst, TelnetOption::NewEnviron);
                put_escaped(dst, &payload);
                self.end_subnegotiation(dst);
            }
            TelnetCommand::BeginCompression => {
                self.begin_subnegotiation(dst, TelnetOption::Compress2);
                self.end_subnegotiation(dst);
                self.compress_active = true;
            }
        }
        Ok(())
    }
}

/// Appends `bytes` to `dst`, doubling every IAC so the payload survives the
/// command framing.
fn put_escaped(dst: &mut BytesMut, bytes: &[u8]) {
    dst.reserve(bytes.len());
    for &byte in bytes {
        if byte == consts::IAC {
            dst.put_u8(consts::IAC);
        }
        dst.put_u8(byte);
    }
}

/// Applies the telnet newline rules to outbound text: a bare CR becomes
/// `CR NUL`, a bare LF becomes `CR LF`.
fn translate_newlines(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 8);
    for &byte in text.as_bytes() {
        match byte {
            consts::CR => {
                out.push(consts::CR);
                out.push(consts::NUL);
            }
            consts::LF => {
                out.push(consts::CR);
                out.push(consts::LF);
            }
            byte => out.push(byte),
        }
    }
    out
}

///
/// Internal decoder state. Exactly one state is active at a time and only
/// the decoder itself transitions it. The data accumulator may be non-empty
/// only in `Data`, `Command` (escape still undecided), `SubnegotiateData`
/// and `SubnegotiateIac`.
///
#[derive(Clone, Copy, Debug)]
enum DecoderState {
    /// Accumulating application data.
    Data,
    /// Received IAC; next byte is a command.
    Command,
    /// Received WILL; next byte is the option.
    NegotiateWill,
    /// Received WONT; next byte is the option.
    NegotiateWont,
    /// Received DO; next byte is the option.
    NegotiateDo,
    /// Received DONT; next byte is the option.
    NegotiateDont,
    /// Received IAC SB; next byte is the option being subnegotiated.
    Subnegotiate,
    /// Accumulating subnegotiation payload for the given option code.
    SubnegotiateData(u8),
    /// Received IAC inside a subnegotiation for the given option code.
    SubnegotiateIac(u8),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::naws::WindowSize;
    use crate::args::ttype::TermTypeCommand;
    use crate::command::Negotiation;
    use bytes::Bytes;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CaptureObserver {
        messages: Mutex<Vec<String>>,
    }

    impl CaptureObserver {
        fn count(&self) -> usize {
            self.messages.lock().unwrap().len()
        }
    }

    impl ProtocolObserver for CaptureObserver {
        fn protocol_warning(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn capture_codec() -> (TelnetCodec, Arc<CaptureObserver>) {
        let observer = Arc::new(CaptureObserver::default());
        let codec = TelnetCodec::with_observer(observer.clone());
        (codec, observer)
    }

    fn encode_command(command: TelnetCommand) -> BytesMut {
        let mut codec = TelnetCodec::new();
        let mut dst = BytesMut::new();
        codec.encode(command, &mut dst).expect("encode ok");
        dst
    }

    // ------------------------------------------------------------------
    // Decoding: data and escapes
    // ------------------------------------------------------------------

    #[test]
    fn decode_plain_data_as_single_event() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(b"Hello, world\r\n");
        assert_eq!(
            events,
            vec![TelnetEvent::Data(Bytes::from_static(b"Hello, world\r\n"))]
        );
    }

    #[test]
    fn decode_escaped_iac_joins_surrounding_run() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&[0x41, 0x42, 0x43, 0xFF, 0xFF, 0x44, 0x45, 0x46]);
        assert_eq!(
            events,
            vec![TelnetEvent::Data(Bytes::from_static(b"ABC\xFFDEF"))]
        );
    }

    #[test]
    fn decode_lone_escaped_iac() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&[consts::IAC, consts::IAC]);
        assert_eq!(events, vec![TelnetEvent::Data(Bytes::from_static(b"\xFF"))]);
    }

    #[test]
    fn decode_empty_chunk_produces_nothing() {
        let mut codec = TelnetCodec::new();
        assert!(codec.feed(&[]).is_empty());
    }

    #[test]
    fn decode_data_split_across_chunks() {
        let mut codec = TelnetCodec::new();
        let first = codec.feed(b"AB");
        let second = codec.feed(b"CD");
        assert_eq!(first, vec![TelnetEvent::Data(Bytes::from_static(b"AB"))]);
        assert_eq!(second, vec![TelnetEvent::Data(Bytes::from_static(b"CD"))]);
    }

    #[test]
    fn decode_command_interrupting_data_preserves_order() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&[
            b'A',
            b'B',
            consts::IAC,
            consts::WILL,
            consts::option::ECHO,
            b'C',
            b'D',
        ]);
        assert_eq!(
            events,
            vec![
                TelnetEvent::Data(Bytes::from_static(b"AB")),
                TelnetEvent::Will(TelnetOption::Echo),
                TelnetEvent::Data(Bytes::from_static(b"CD")),
            ]
        );
    }

    // ------------------------------------------------------------------
    // Decoding: commands and negotiation
    // ------------------------------------------------------------------

    #[test]
    fn decode_will_naws() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&[consts::IAC, consts::WILL, consts::option::NAWS]);
        assert_eq!(events, vec![TelnetEvent::Will(TelnetOption::NAWS)]);
    }

    #[test]
    fn decode_all_negotiation_verbs() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&[
            consts::IAC,
            consts::WILL,
            consts::option::ECHO,
            consts::IAC,
            consts::WONT,
            consts::option::ECHO,
            consts::IAC,
            consts::DO,
            consts::option::MSSP,
            consts::IAC,
            consts::DONT,
            consts::option::MSSP,
        ]);
        assert_eq!(
            events,
            vec![
                TelnetEvent::Will(TelnetOption::Echo),
                TelnetEvent::Wont(TelnetOption::Echo),
                TelnetEvent::Do(TelnetOption::MSSP),
                TelnetEvent::Dont(TelnetOption::MSSP),
            ]
        );
    }

    #[test]
    fn decode_other_command_byte() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&[consts::IAC, consts::NOP]);
        assert_eq!(events, vec![TelnetEvent::Command(consts::NOP)]);
    }

    #[test]
    fn decode_negotiation_split_across_chunks() {
        let mut codec = TelnetCodec::new();
        assert!(codec.feed(&[consts::IAC]).is_empty());
        assert!(codec.feed(&[consts::DO]).is_empty());
        let events = codec.feed(&[consts::option::TTYPE]);
        assert_eq!(events, vec![TelnetEvent::Do(TelnetOption::TTYPE)]);
    }

    // ------------------------------------------------------------------
    // Decoding: subnegotiation
    // ------------------------------------------------------------------

    fn subnegotiation_bytes(option: u8, payload: &[u8]) -> Vec<u8> {
        let mut bytes = vec![consts::IAC, consts::SB, option];
        bytes.extend_from_slice(payload);
        bytes.extend_from_slice(&[consts::IAC, consts::SE]);
        bytes
    }

    #[test]
    fn decode_naws_subnegotiation() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&subnegotiation_bytes(
            consts::option::NAWS,
            &[0x00, 0x50, 0x00, 0x18],
        ));
        assert_eq!(events, vec![TelnetEvent::Naws(WindowSize::new(80, 24))]);
    }

    #[test]
    fn decode_malformed_naws_warns_and_drops() {
        let (mut codec, observer) = capture_codec();
        let events = codec.feed(&subnegotiation_bytes(consts::option::NAWS, &[0x00, 0x50]));
        assert!(events.is_empty());
        assert_eq!(observer.count(), 1);
    }

    #[test]
    fn decode_escaped_iac_inside_subnegotiation() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&subnegotiation_bytes(
            consts::option::MSDP,
            &[0x01, consts::IAC, consts::IAC, 0x03],
        ));
        assert_eq!(
            events,
            vec![TelnetEvent::Subnegotiation(
                TelnetOption::MSDP,
                Bytes::from_static(&[0x01, 0xFF, 0x03]),
            )]
        );
    }

    #[test]
    fn decode_ttype_subnegotiation() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&subnegotiation_bytes(consts::option::TTYPE, b"\x00xterm"));
        assert_eq!(
            events,
            vec![TelnetEvent::TerminalType(
                TermTypeCommand::Is,
                "xterm".to_string()
            )]
        );
    }

    #[test]
    fn decode_mssp_subnegotiation() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&subnegotiation_bytes(
            consts::option::MSSP,
            b"\x01NAME\x02Test",
        ));
        let mut expected = mssp::StatusTable::new();
        expected.insert("NAME", "Test");
        assert_eq!(events, vec![TelnetEvent::ServerStatus(expected)]);
    }

    #[test]
    fn decode_zmp_subnegotiation() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&subnegotiation_bytes(consts::option::ZMP, b"zmp.ping\x00"));
        assert_eq!(events, vec![TelnetEvent::Zmp(vec!["zmp.ping".to_string()])]);
    }

    #[test]
    fn decode_unknown_subnegotiation_falls_through_raw() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&subnegotiation_bytes(201, &[1, 2, 3]));
        assert_eq!(
            events,
            vec![TelnetEvent::Subnegotiation(
                TelnetOption::Unknown(201),
                Bytes::from_static(&[1, 2, 3]),
            )]
        );
    }

    #[test]
    fn decode_compress2_marker_emits_compression_start() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&subnegotiation_bytes(consts::option::COMPRESS2, &[]));
        assert_eq!(events, vec![TelnetEvent::CompressionStart]);
    }

    #[test]
    fn decode_compress2_marker_ignores_payload() {
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&subnegotiation_bytes(consts::option::COMPRESS2, &[9, 9]));
        assert_eq!(events, vec![TelnetEvent::CompressionStart]);
    }

    #[test]
    fn decode_discards_legacy_compress_will_framing() {
        // MCCPv1: IAC SB 85 WILL SE. The WILL aborts the subnegotiation.
        let mut codec = TelnetCodec::new();
        let events = codec.feed(&[
            consts::IAC,
            consts::SB,
            consts::option::COMPRESS,
            consts::WILL,
            consts::SE,
            b'A',
        ]);
        // The stray SE lands in the data stream; only 'A' and it remain.
        assert_eq!(
            events,
            vec![TelnetEvent::Data(Bytes::from(vec![consts::SE, b'A']))]
        );
    }

    #[test]
    fn decode_recovers_from_command_inside_subnegotiation() {
        let (mut codec, observer) = capture_codec();
        // IAC WILL inside an MSDP subnegotiation: the buffer is dispatched
        // as-is, then the WILL is honored as a fresh command.
        let events = codec.feed(&[
            consts::IAC,
            consts::SB,
            consts::option::MSDP,
            0x01,
            consts::IAC,
            consts::WILL,
            consts::option::ECHO,
        ]);
        assert_eq!(
            events,
            vec![
                TelnetEvent::Subnegotiation(TelnetOption::MSDP, Bytes::from_static(&[0x01])),
                TelnetEvent::Will(TelnetOption::Echo),
            ]
        );
        assert_eq!(observer.count(), 1);
    }

    // ------------------------------------------------------------------
    // Encoding
    // ------------------------------------------------------------------

    #[test]
    fn encode_data_escapes_iac() {
        let dst = encode_command(TelnetCommand::Data(Bytes::from_static(b"a\xFFb")));
        assert_eq!(&dst[..], &[b'a', 0xFF, 0xFF, b'b']);
    }

    #[test]
    fn encode_raw_leaves_bytes_alone() {
        let dst = encode_command(TelnetCommand::Raw(Bytes::from_static(b"a\xFFb")));
        assert_eq!(&dst[..], b"a\xFFb");
    }

    #[test]
    fn encode_negotiate() {
        let dst = encode_command(TelnetCommand::Negotiate(
            Negotiation::Do,
            TelnetOption::NAWS,
        ));
        assert_eq!(&dst[..], &[consts::IAC, consts::DO, consts::option::NAWS]);
    }

    #[test]
    fn encode_subnegotiation_escapes_payload() {
        let dst = encode_command(TelnetCommand::Subnegotiate(
            TelnetOption::MSDP,
            Bytes::from_static(&[0x01, 0xFF, 0x03]),
        ));
        assert_eq!(
            &dst[..],
            &[
                consts::IAC,
                consts::SB,
                consts::option::MSDP,
                0x01,
                0xFF,
                0xFF,
                0x03,
                consts::IAC,
                consts::SE,
            ]
        );
    }

    #[test]
    fn encode_text_translates_newlines() {
        let dst = encode_command(TelnetCommand::Text("a\nb\rc".to_string()));
        assert_eq!(&dst[..], b"a\r\nb\r\0c");
    }

    #[test]
    fn encode_terminal_type_request() {
        let dst = encode_command(TelnetCommand::TerminalTypeRequest);
        assert_eq!(
            &dst[..],
            &[
                consts::IAC,
                consts::SB,
                consts::option::TTYPE,
                consts::option::ttype::SEND,
                consts::IAC,
                consts::SE,
            ]
        );
    }

    #[test]
    fn encode_server_status_table() {
        let mut table = mssp::StatusTable::new();
        table.insert("NAME", "Test");
        let dst = encode_command(TelnetCommand::ServerStatus(table));
        let mut expected = vec![consts::IAC, consts::SB, consts::option::MSSP];
        expected.extend_from_slice(b"\x01NAME\x02Test");
        expected.extend_from_slice(&[consts::IAC, consts::SE]);
        assert_eq!(&dst[..], &expected[..]);
    }

    #[test]
    fn encode_begin_compression_flips_flag() {
        let mut codec = TelnetCodec::new();
        let mut dst = BytesMut::new();
        assert!(!codec.is_compressing());
        codec
            .encode(TelnetCommand::BeginCompression, &mut dst)
            .unwrap();
        assert!(codec.is_compressing());
        assert_eq!(
            &dst[..],
            &[
                consts::IAC,
                consts::SB,
                consts::option::COMPRESS2,
                consts::IAC,
                consts::SE,
            ]
        );
    }

    // ------------------------------------------------------------------
    // Round trips
    // ------------------------------------------------------------------

    #[test]
    fn escaped_payload_round_trips_through_decoder() {
        let payload = b"before\xFFafter\xFF\xFF";
        let mut encoder = TelnetCodec::new();
        let mut wire = BytesMut::new();
        encoder
            .encode(
                TelnetCommand::Data(Bytes::copy_from_slice(payload)),
                &mut wire,
            )
            .unwrap();

        let mut decoder = TelnetCodec::new();
        let events = decoder.feed(&wire);
        assert_eq!(
            events,
            vec![TelnetEvent::Data(Bytes::copy_from_slice(payload))]
        );
    }

    #[test]
    fn mssp_round_trips_through_decoder() {
        let mut table = mssp::StatusTable::new();
        table.insert("NAME", "Test");

        let mut encoder = TelnetCodec::new();
        let mut wire = BytesMut::new();
        encoder
            .encode(TelnetCommand::ServerStatus(table.clone()), &mut wire)
            .unwrap();

        let mut decoder = TelnetCodec::new();
        let events = decoder.feed(&wire);
        assert_eq!(events, vec![TelnetEvent::ServerStatus(table)]);
    }
}
