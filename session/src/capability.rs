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

//! Per-connection capability record

use mudwire_telnetcodec::naws::WindowSize;

/// What the setup handshake learned about the peer.
///
/// Created empty when the connection starts and populated by the
/// negotiation sequencer. Afterwards it is read-only from the session
/// layer's point of view, with one exception: a client may resize its
/// window at any time, and the unsolicited NAWS update flows in through
/// the same connection handle that owns this record.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Capabilities {
    /// Last reported window size, if NAWS ever completed.
    pub window: Option<WindowSize>,
    /// Terminal names the client announced, in announcement order, without
    /// duplicates.
    pub terminals: Vec<String>,
    /// The name the client settled on (the last one announced).
    pub terminal: Option<String>,
    /// Numeric capability code parsed from an `MTTS <n>` terminal name.
    pub mtts: Option<u32>,
    /// Peer answered WILL to our DO NAWS.
    pub naws: bool,
    /// Peer answered WILL to our DO TTYPE and the name cycle completed.
    pub ttype: bool,
    /// Peer accepted our MSSP offer.
    pub mssp: bool,
    /// Peer accepted our MSDP offer.
    pub msdp: bool,
    /// Peer accepted MSP (sound) announcements.
    pub msp: bool,
    /// Peer accepted MXP (markup) announcements.
    pub mxp: bool,
    /// Peer accepted COMPRESS2; the outbound stream is compressed from the
    /// marker onwards.
    pub compress2: bool,
}

impl Capabilities {
    /// Creates an empty record.
    pub fn new() -> Self {
        Capabilities::default()
    }

    /// Whether the client announced the given terminal name.
    pub fn has_terminal(&self, name: &str) -> bool {
        self.terminals.iter().any(|terminal| terminal == name)
    }

    /// Appends a terminal name if it is new and marks it active.
    pub(crate) fn record_terminal(&mut self, name: &str) {
        if !self.has_terminal(name) {
            self.terminals.push(name.to_string());
        }
        self.terminal = Some(name.to_string());
    }

    /// Records the window size reported by the peer.
    pub(crate) fn record_window(&mut self, size: WindowSize) {
        self.window = Some(size);
    }

    /// Scans the collected terminal names for an `MTTS <n>` entry and
    /// remembers its numeric code.
    pub(crate) fn update_mtts(&mut self) {
        for name in &self.terminals {
            if let Some(digits) = name.strip_prefix("MTTS ") {
                if let Ok(code) = digits.trim().parse() {
                    self.mtts = Some(code);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_terminal_deduplicates_and_tracks_active() {
        let mut caps = Capabilities::new();
        caps.record_terminal("xterm");
        caps.record_terminal("ansi");
        caps.record_terminal("xterm");
        assert_eq!(caps.terminals, vec!["xterm", "ansi"]);
        assert_eq!(caps.terminal.as_deref(), Some("xterm"));
    }

    #[test]
    fn update_mtts_parses_numeric_code() {
        let mut caps = Capabilities::new();
        caps.record_terminal("xterm");
        caps.record_terminal("MTTS 141");
        caps.update_mtts();
        assert_eq!(caps.mtts, Some(141));
    }

    #[test]
    fn update_mtts_ignores_garbage() {
        let mut caps = Capabilities::new();
        caps.record_terminal("MTTS banana");
        caps.update_mtts();
        assert_eq!(caps.mtts, None);
    }

    #[test]
    fn record_window_overwrites_previous_size() {
        let mut caps = Capabilities::new();
        caps.record_window(WindowSize::new(80, 24));
        caps.record_window(WindowSize::new(120, 40));
        assert_eq!(caps.window, Some(WindowSize::new(120, 40)));
    }
}
