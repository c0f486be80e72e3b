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

//! Per-connection plumbing: reader and writer tasks around the codec

use crate::capability::Capabilities;
use crate::config::SetupConfig;
use crate::error::{SessionError, SessionResult};
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use mudwire_telnetcodec::mssp::StatusTable;
use mudwire_telnetcodec::{Negotiation, TelnetCodec, TelnetCommand, TelnetEvent, TelnetOption};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio_util::codec::{Encoder, FramedRead};
use tracing::{debug, warn};

/// One telnet connection: two background tasks and the handle that owns the
/// encoder, the event queue consumer side and the capability record.
///
/// The reader task feeds socket bytes through the frame decoder and pushes
/// every decoded [`TelnetEvent`] into a bounded queue; the writer task
/// drains a bounded queue of encoded byte chunks back to the socket. The
/// decoder never leaves the reader task, and the queue has exactly one
/// logical consumer at a time: the negotiation sequencer during setup, the
/// session loop afterwards.
///
/// When the transport fails or the peer disconnects, the reader task closes
/// the event queue, so any blocked [`TelnetConnection::next_event`] call
/// returns [`SessionError::ConnectionClosed`] rather than hanging or being
/// mistaken for a timeout. Dropping the handle tears down both tasks.
pub struct TelnetConnection {
    pub(crate) events: mpsc::Receiver<TelnetEvent>,
    pub(crate) outbound: mpsc::Sender<Bytes>,
    pub(crate) encoder: TelnetCodec,
    pub(crate) capabilities: Capabilities,
    pub(crate) config: SetupConfig,
}

impl TelnetConnection {
    /// Wraps a transport in a telnet connection and spawns its reader and
    /// writer tasks.
    ///
    /// The transport is any async byte stream. When the peer negotiates
    /// compression, the decompressing filter wraps the transport before it
    /// gets here; the protocol engine itself never transforms bytes.
    pub fn spawn<S>(stream: S, config: SetupConfig) -> TelnetConnection
    where
        S: AsyncRead + AsyncWrite + Send + 'static,
    {
        let (read_half, mut write_half) = tokio::io::split(stream);
        let (event_tx, events) = mpsc::channel::<TelnetEvent>(config.event_queue_depth);
        let (outbound, mut outbound_rx) = mpsc::channel::<Bytes>(config.outbound_queue_depth);

        tokio::spawn(async move {
            let mut inbound = FramedRead::new(read_half, TelnetCodec::new());
            loop {
                match inbound.next().await {
                    Some(Ok(event)) => {
                        // A failed send means the handle is gone; stop reading.
                        if event_tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Some(Err(error)) => {
                        warn!(%error, "telnet read failed");
                        break;
                    }
                    None => {
                        debug!("telnet stream ended");
                        break;
                    }
                }
            }
            // event_tx drops here, closing the queue and unblocking waiters.
        });

        tokio::spawn(async move {
            while let Some(chunk) = outbound_rx.recv().await {
                if let Err(error) = write_half.write_all(&chunk).await {
                    warn!(%error, "telnet write failed");
                    break;
                }
                if let Err(error) = write_half.flush().await {
                    warn!(%error, "telnet flush failed");
                    break;
                }
            }
        });

        TelnetConnection {
            events,
            outbound,
            encoder: TelnetCodec::new(),
            capabilities: Capabilities::new(),
            config,
        }
    }

    /// Waits for the next protocol event.
    ///
    /// With a timeout, the wait gives up after that long with
    /// [`SessionError::Timeout`]; nothing is discarded, and whatever arrives
    /// later is delivered to the next caller. Without one, the wait blocks
    /// until an event arrives or the connection closes.
    ///
    /// Window resizes are recorded into the capability record as they pass
    /// through, so an unsolicited NAWS update after setup is never lost even
    /// if the session loop ignores the event itself.
    pub async fn next_event(&mut self, timeout: Option<Duration>) -> SessionResult<TelnetEvent> {
        let received = match timeout {
            Some(limit) => match tokio::time::timeout(limit, self.events.recv()).await {
                Ok(received) => received,
                Err(_) => return Err(SessionError::Timeout),
            },
            None => self.events.recv().await,
        };
        match received {
            Some(event) => {
                if let TelnetEvent::Naws(size) = &event {
                    self.capabilities.record_window(*size);
                }
                Ok(event)
            }
            None => Err(SessionError::ConnectionClosed),
        }
    }

    /// What the handshake learned about the peer.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Whether the outbound stream is compressed from here on.
    pub fn is_compressing(&self) -> bool {
        self.encoder.is_compressing()
    }

    /// Sends application payload, escaping as needed.
    pub async fn send_data(&mut self, bytes: &[u8]) -> SessionResult<()> {
        self.send_command(TelnetCommand::Data(Bytes::copy_from_slice(bytes)))
            .await
    }

    /// Sends text with telnet newline translation applied.
    pub async fn send_text(&mut self, text: &str) -> SessionResult<()> {
        self.send_command(TelnetCommand::Text(text.to_string()))
            .await
    }

    /// Sends pre-framed bytes without any escaping.
    pub async fn send_raw(&mut self, bytes: &[u8]) -> SessionResult<()> {
        self.send_command(TelnetCommand::Raw(Bytes::copy_from_slice(bytes)))
            .await
    }

    /// Sends a negotiation command for an option.
    pub async fn send_negotiate(
        &mut self,
        verb: Negotiation,
        option: TelnetOption,
    ) -> SessionResult<()> {
        self.send_command(TelnetCommand::Negotiate(verb, option))
            .await
    }

    /// Sends a complete subnegotiation with an escaped payload.
    pub async fn send_subnegotiation(
        &mut self,
        option: TelnetOption,
        payload: &[u8],
    ) -> SessionResult<()> {
        self.send_command(TelnetCommand::Subnegotiate(
            option,
            Bytes::copy_from_slice(payload),
        ))
        .await
    }

    /// Sends the MSSP variable table.
    pub async fn send_server_status(&mut self, status: &StatusTable) -> SessionResult<()> {
        self.send_command(TelnetCommand::ServerStatus(status.clone()))
            .await
    }

    /// Asks the peer for its terminal name.
    pub async fn request_terminal_type(&mut self) -> SessionResult<()> {
        self.send_command(TelnetCommand::TerminalTypeRequest).await
    }

    /// Emits the COMPRESS2 begin marker and marks the outbound stream
    /// compressed. The compression transform itself is an external filter's
    /// job.
    pub async fn begin_compression(&mut self) -> SessionResult<()> {
        self.send_command(TelnetCommand::BeginCompression).await
    }

    /// Encodes one outbound intent and queues the bytes for the writer task.
    async fn send_command(&mut self, command: TelnetCommand) -> SessionResult<()> {
        let mut buffer = BytesMut::new();
        self.encoder.encode(command, &mut buffer)?;
        self.outbound
            .send(buffer.freeze())
            .await
            .map_err(|_| SessionError::ConnectionClosed)
    }
}

impl std::fmt::Debug for TelnetConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelnetConnection")
            .field("capabilities", &self.capabilities)
            .field("compressing", &self.encoder.is_compressing())
            .finish()
    }
}
