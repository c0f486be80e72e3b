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

use tracing::warn;

///
/// Receiver for protocol anomalies the decoder recovers from: malformed
/// subnegotiation payloads, unexpected bytes after IAC inside a
/// subnegotiation, and similar peer misbehavior that should be recorded but
/// must never kill the connection.
///
/// The decoder takes the observer at construction time so tests can install a
/// capturing implementation instead of inspecting global subscriber state.
///
pub trait ProtocolObserver: Send + Sync {
    /// Called once per recovered protocol anomaly.
    fn protocol_warning(&self, message: &str);
}

///
/// Default observer; forwards every warning to the `tracing` subscriber.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl ProtocolObserver for TracingObserver {
    fn protocol_warning(&self, message: &str) {
        warn!("{message}");
    }
}
