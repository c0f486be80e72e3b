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

//! Connection and negotiation tuning knobs

use std::time::Duration;

/// Configuration for a telnet connection and its setup handshake.
#[derive(Clone, Debug)]
pub struct SetupConfig {
    /// How long each negotiation step waits for the peer's reply.
    pub negotiation_timeout: Duration,

    /// How long the pre-handshake drain waits before deciding the peer has
    /// nothing more to say.
    pub drain_timeout: Duration,

    /// How long the echo-mode switches wait for acknowledgment. Kept short;
    /// clients that do not answer still get the prompt.
    pub echo_timeout: Duration,

    /// Reads allowed per TERMINAL-TYPE round before giving up on a reply.
    /// Some clients pad the handshake with junk that must be skipped.
    pub ttype_retries: usize,

    /// Upper bound on TERMINAL-TYPE rounds. Caps the name cycle so a
    /// misbehaving peer cannot keep the handshake alive forever.
    pub ttype_max_rounds: usize,

    /// Capacity of the inbound event queue.
    pub event_queue_depth: usize,

    /// Capacity of the outbound byte-chunk queue.
    pub outbound_queue_depth: usize,
}

impl Default for SetupConfig {
    fn default() -> Self {
        SetupConfig {
            negotiation_timeout: Duration::from_millis(1000),
            drain_timeout: Duration::from_millis(500),
            echo_timeout: Duration::from_millis(100),
            ttype_retries: 3,
            ttype_max_rounds: 8,
            event_queue_depth: 64,
            outbound_queue_depth: 64,
        }
    }
}

impl SetupConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        SetupConfig::default()
    }

    /// Sets the per-step negotiation timeout.
    pub fn with_negotiation_timeout(mut self, timeout: Duration) -> Self {
        self.negotiation_timeout = timeout;
        self
    }

    /// Sets the pre-handshake drain timeout.
    pub fn with_drain_timeout(mut self, timeout: Duration) -> Self {
        self.drain_timeout = timeout;
        self
    }

    /// Sets both queue capacities.
    pub fn with_queue_depth(mut self, depth: usize) -> Self {
        self.event_queue_depth = depth;
        self.outbound_queue_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeouts_are_sane() {
        let config = SetupConfig::default();
        assert_eq!(config.negotiation_timeout, Duration::from_millis(1000));
        assert!(config.ttype_retries >= 1);
        assert!(config.ttype_max_rounds >= 2);
    }

    #[test]
    fn builders_override_fields() {
        let config = SetupConfig::new()
            .with_negotiation_timeout(Duration::from_millis(50))
            .with_queue_depth(8);
        assert_eq!(config.negotiation_timeout, Duration::from_millis(50));
        assert_eq!(config.event_queue_depth, 8);
        assert_eq!(config.outbound_queue_depth, 8);
    }
}
