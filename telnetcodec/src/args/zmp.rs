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

//! Zenith Mud Protocol
//!

use crate::consts;

/// Decodes a ZMP payload into its argument list.
///
/// Arguments are NUL-terminated byte runs. A trailing run without its NUL is
/// still captured; clients disagree on whether the final terminator is
/// mandatory.
pub fn decode(buffer: &[u8]) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut run: Vec<u8> = Vec::new();
    for &byte in buffer {
        if byte == consts::NUL {
            arguments.push(String::from_utf8_lossy(&run).into_owned());
            run.clear();
        } else {
            run.push(byte);
        }
    }
    if !run.is_empty() {
        arguments.push(String::from_utf8_lossy(&run).into_owned());
    }
    arguments
}
