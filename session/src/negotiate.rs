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

//! Capability negotiation sequencer
//!
//! A request/response handshake run once per connection at setup time: send
//! a negotiation command, wait (bounded) for the matching reply, classify
//! the outcome, and for some options run an extra data round-trip. Options
//! are negotiated strictly one after another; a step fully resolves before
//! the next begins.

use crate::connection::TelnetConnection;
use crate::error::{SessionError, SessionResult};
use mudwire_telnetcodec::mssp::StatusTable;
use mudwire_telnetcodec::ttype::TermTypeCommand;
use mudwire_telnetcodec::{Negotiation, TelnetEvent, TelnetOption};
use std::time::Duration;
use tracing::{debug, info};

/// How one negotiation step resolved.
///
/// Produced once per step and never persisted; the lasting effect of a
/// successful step is a flag or value in the capability record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NegotiationOutcome {
    /// The peer sent the expected acceptance.
    Accepted,
    /// The peer refused, or answered with something else entirely. The
    /// event is surfaced so the caller can inspect it; a data event arriving
    /// mid-negotiation may still matter to the session layer.
    Rejected(TelnetEvent),
    /// The peer never answered within the timeout. The capability stays
    /// unset; this is a normal outcome, not an error.
    TimedOut,
}

impl NegotiationOutcome {
    /// Whether the peer accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, NegotiationOutcome::Accepted)
    }
}

/// The reply that counts as acceptance of the given verb for an option.
fn acceptance_of(verb: Negotiation, option: TelnetOption) -> TelnetEvent {
    match verb {
        Negotiation::Will => TelnetEvent::Do(option),
        Negotiation::Wont => TelnetEvent::Dont(option),
        Negotiation::Do => TelnetEvent::Will(option),
        Negotiation::Dont => TelnetEvent::Wont(option),
    }
}

impl TelnetConnection {
    /// Sends one negotiation command and classifies the peer's reply.
    ///
    /// Each option is negotiated at most once per setup pass, so a hostile
    /// peer replying out of turn cannot drag the handshake into a loop.
    pub async fn negotiate(
        &mut self,
        verb: Negotiation,
        option: TelnetOption,
    ) -> SessionResult<NegotiationOutcome> {
        let timeout = self.config.negotiation_timeout;
        self.send_negotiate(verb, option).await?;
        self.await_reply(acceptance_of(verb, option), timeout).await
    }

    /// Waits for the next event and classifies it against the expected
    /// acceptance. Anything else, including an unrelated event, resolves the
    /// step as rejected with the event surfaced.
    pub async fn await_reply(
        &mut self,
        accepted: TelnetEvent,
        timeout: Duration,
    ) -> SessionResult<NegotiationOutcome> {
        match self.next_event(Some(timeout)).await {
            Ok(event) if event == accepted => Ok(NegotiationOutcome::Accepted),
            Ok(event) => {
                debug!(?event, "negotiation not accepted");
                Ok(NegotiationOutcome::Rejected(event))
            }
            Err(SessionError::Timeout) => Ok(NegotiationOutcome::TimedOut),
            Err(error) => Err(error),
        }
    }

    /// Runs the whole setup handshake in order: drain, MSSP, COMPRESS2,
    /// NAWS, TERMINAL-TYPE, MXP, MSP, MSDP.
    ///
    /// Rejections and timeouts are normal; the corresponding capability
    /// simply stays off. Only a dead connection aborts the pass.
    pub async fn setup(&mut self, status: &StatusTable) -> SessionResult<()> {
        self.drain_stray_events().await?;
        self.setup_server_status(status).await?;
        self.setup_compression().await?;
        self.setup_window_size().await?;
        self.setup_terminal_type().await?;
        self.setup_mxp().await?;
        self.setup_msp().await?;
        self.setup_msdp().await?;
        Ok(())
    }

    /// Offers MSSP; on acceptance, sends the status table right away.
    pub async fn setup_server_status(
        &mut self,
        status: &StatusTable,
    ) -> SessionResult<NegotiationOutcome> {
        let outcome = self.negotiate(Negotiation::Will, TelnetOption::MSSP).await?;
        if outcome.is_accepted() {
            self.send_server_status(status).await?;
            self.capabilities.mssp = true;
            info!("peer accepts MSSP");
        }
        Ok(outcome)
    }

    /// Offers COMPRESS2; on acceptance, emits the begin marker so every
    /// later outbound byte goes through the external compression filter.
    pub async fn setup_compression(&mut self) -> SessionResult<NegotiationOutcome> {
        let outcome = self
            .negotiate(Negotiation::Will, TelnetOption::Compress2)
            .await?;
        if outcome.is_accepted() {
            self.begin_compression().await?;
            self.capabilities.compress2 = true;
            info!("started COMPRESS2 compression");
        }
        Ok(outcome)
    }

    /// Asks for NAWS; on acceptance, waits once more for the size report
    /// itself and records it.
    pub async fn setup_window_size(&mut self) -> SessionResult<NegotiationOutcome> {
        let outcome = self.negotiate(Negotiation::Do, TelnetOption::NAWS).await?;
        if !outcome.is_accepted() {
            return Ok(outcome);
        }
        let timeout = self.config.negotiation_timeout;
        match self.next_event(Some(timeout)).await {
            Ok(TelnetEvent::Naws(size)) => {
                // next_event already recorded the size
                self.capabilities.naws = true;
                info!(%size, "peer window size");
                Ok(NegotiationOutcome::Accepted)
            }
            Ok(event) => {
                debug!(?event, "expected a window size report");
                Ok(NegotiationOutcome::Rejected(event))
            }
            Err(SessionError::Timeout) => Ok(NegotiationOutcome::TimedOut),
            Err(error) => Err(error),
        }
    }

    /// Asks for TERMINAL-TYPE and walks the peer's name cycle.
    ///
    /// Clients with several names cycle through them and repeat one to say
    /// "no more"; the walk stops on the first repeat, or after a bounded
    /// number of rounds for peers that never repeat. Collected names feed
    /// the MTTS scan.
    pub async fn setup_terminal_type(&mut self) -> SessionResult<NegotiationOutcome> {
        let outcome = self.negotiate(Negotiation::Do, TelnetOption::TTYPE).await?;
        if !outcome.is_accepted() {
            return Ok(outcome);
        }
        self.capabilities.terminals.clear();
        let mut last: Option<String> = None;
        let max_rounds = self.config.ttype_max_rounds;
        for _round in 0..max_rounds {
            self.request_terminal_type().await?;
            let Some(name) = self.read_terminal_name().await? else {
                return Ok(NegotiationOutcome::TimedOut);
            };
            if last.as_deref() == Some(name.as_str()) {
                break;
            }
            self.capabilities.record_terminal(&name);
            last = Some(name);
        }
        self.capabilities.update_mtts();
        self.capabilities.ttype = true;
        info!(terminals = ?self.capabilities.terminals, "peer terminals");
        Ok(NegotiationOutcome::Accepted)
    }

    /// Checks whether the peer wants MXP markup.
    pub async fn setup_mxp(&mut self) -> SessionResult<NegotiationOutcome> {
        let outcome = self.negotiate(Negotiation::Do, TelnetOption::MXP).await?;
        if outcome.is_accepted() {
            self.capabilities.mxp = true;
            info!("peer accepts MXP");
        }
        Ok(outcome)
    }

    /// Checks whether the peer wants MSP sound triggers.
    pub async fn setup_msp(&mut self) -> SessionResult<NegotiationOutcome> {
        let outcome = self.negotiate(Negotiation::Do, TelnetOption::MSP).await?;
        if outcome.is_accepted() {
            self.capabilities.msp = true;
            info!("peer accepts MSP");
        }
        Ok(outcome)
    }

    /// Offers MSDP server data.
    pub async fn setup_msdp(&mut self) -> SessionResult<NegotiationOutcome> {
        let outcome = self.negotiate(Negotiation::Will, TelnetOption::MSDP).await?;
        if outcome.is_accepted() {
            self.capabilities.msdp = true;
            info!("peer accepts MSDP");
        }
        Ok(outcome)
    }

    /// Takes over echoing so the client stops showing what is typed, for
    /// password prompts. A compliant client acknowledges with DO ECHO.
    pub async fn password_mode(&mut self) -> SessionResult<NegotiationOutcome> {
        let timeout = self.config.echo_timeout;
        self.send_negotiate(Negotiation::Will, TelnetOption::Echo)
            .await?;
        self.await_reply(TelnetEvent::Do(TelnetOption::Echo), timeout)
            .await
    }

    /// Hands echoing back to the client after a password prompt.
    pub async fn normal_mode(&mut self) -> SessionResult<NegotiationOutcome> {
        let timeout = self.config.echo_timeout;
        self.send_negotiate(Negotiation::Wont, TelnetOption::Echo)
            .await?;
        self.await_reply(TelnetEvent::Dont(TelnetOption::Echo), timeout)
            .await
    }

    /// Reads events until a TERMINAL-TYPE IS reply shows up, discarding the
    /// filler bytes some clients insist on sending, bounded by the retry
    /// budget.
    async fn read_terminal_name(&mut self) -> SessionResult<Option<String>> {
        let timeout = self.config.negotiation_timeout;
        let retries = self.config.ttype_retries;
        for _attempt in 0..retries {
            match self.next_event(Some(timeout)).await {
                Ok(TelnetEvent::TerminalType(TermTypeCommand::Is, name)) => return Ok(Some(name)),
                Ok(event) => {
                    debug!(?event, "discarding while waiting for a terminal name");
                }
                Err(SessionError::Timeout) => {}
                Err(error) => return Err(error),
            }
        }
        Ok(None)
    }

    /// Logs and throws away whatever the client volunteered before we start
    /// negotiating, so stray early commands cannot be mistaken for replies.
    async fn drain_stray_events(&mut self) -> SessionResult<()> {
        let timeout = self.config.drain_timeout;
        loop {
            match self.next_event(Some(timeout)).await {
                Ok(event) => debug!(?event, "event before negotiation"),
                Err(SessionError::Timeout) => return Ok(()),
                Err(error) => return Err(error),
            }
        }
    }
}
