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

//! Error types for connection and negotiation operations

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Errors surfaced to the session layer.
///
/// Nothing here is fatal to the process; every failure is scoped to a single
/// connection.
#[derive(Debug, Error)]
pub enum SessionError {
    /// I/O error from the underlying stream.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Protocol error from the codec layer.
    #[error("protocol error: {0}")]
    Codec(#[from] mudwire_telnetcodec::CodecError),

    /// The connection is gone: the reader task closed the event queue or the
    /// writer task is no longer draining the outbound queue.
    #[error("connection closed")]
    ConnectionClosed,

    /// No event arrived within the requested wait. The event queue and the
    /// decoder state are untouched; a later wait will still see whatever
    /// arrives next.
    #[error("timed out waiting for a protocol event")]
    Timeout,
}

impl SessionError {
    /// Whether this error means the connection itself is gone, as opposed to
    /// a recoverable per-operation condition.
    pub fn is_disconnect(&self) -> bool {
        matches!(
            self,
            SessionError::ConnectionClosed | SessionError::Io(_)
        )
    }
}
