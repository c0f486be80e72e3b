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

//! # Mudwire Session Plumbing
//!
//! The connection half of the Mudwire telnet engine: per-connection reader
//! and writer tasks around the codec, a bounded event queue with timeout and
//! cancellation semantics, the capability record, and the negotiation
//! sequencer that fills it in during connection setup.
//!
//! ## Shape
//!
//! [`TelnetConnection::spawn`] wraps any async byte stream and starts two
//! tasks: the reader feeds socket bytes through the frame decoder and queues
//! the resulting events; the writer drains encoded chunks back to the
//! socket. The handle left in the caller's hands owns the encoder, the
//! consumer side of the event queue, and the [`Capabilities`] record.
//!
//! Exactly one logical consumer reads events at a time. During setup that is
//! the negotiation sequencer ([`TelnetConnection::setup`] and the
//! `setup_*` steps); afterwards it is the session loop. A timed-out wait
//! discards nothing, and a closed connection is reported as
//! [`SessionError::ConnectionClosed`], never as a timeout.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mudwire_session::{SetupConfig, StatusTable, TelnetConnection};
//! use tokio::net::TcpStream;
//!
//! # async fn example(socket: TcpStream) -> Result<(), Box<dyn std::error::Error>> {
//! let mut status = StatusTable::new();
//! status.insert("NAME", "Mudwire");
//!
//! let mut connection = TelnetConnection::spawn(socket, SetupConfig::default());
//! connection.setup(&status).await?;
//!
//! if connection.capabilities().naws {
//!     // lay out output for the reported window
//! }
//! connection.send_text("Welcome!\n").await?;
//! # Ok(())
//! # }
//! ```

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

mod capability;
mod config;
mod connection;
mod error;
mod negotiate;

pub use self::capability::Capabilities;
pub use self::config::SetupConfig;
pub use self::connection::TelnetConnection;
pub use self::error::{SessionError, SessionResult};
pub use self::negotiate::NegotiationOutcome;

pub use mudwire_telnetcodec::mssp::StatusTable;
pub use mudwire_telnetcodec::naws::WindowSize;
pub use mudwire_telnetcodec::{Negotiation, TelnetEvent, TelnetOption};
