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

//! Subnegotiation payload interpreters, one module per option the engine
//! understands. Each `decode` takes the raw bytes accumulated between
//! `IAC SB <option>` and `IAC SE` (escapes already resolved) and produces a
//! typed value or a [`crate::CodecError`] the dispatch layer downgrades to a
//! warning.

pub mod environ;
pub mod mssp;
pub mod naws;
pub mod ttype;
pub mod zmp;
