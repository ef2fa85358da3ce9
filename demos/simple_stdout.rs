// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use logforth_channel::Channel;

fn main() {
    let mut channel = Channel::stdout("\n").unwrap();

    logforth_channel::trace!(channel, "Hello trace!").unwrap();
    logforth_channel::debug!(channel, "Hello debug!").unwrap();
    logforth_channel::info!(channel, "Hello info!").unwrap();
    logforth_channel::warning!(channel, "Hello warning!").unwrap();
    logforth_channel::error!(channel, "Hello error!").unwrap();
    logforth_channel::critical!(channel, "Hello critical!").unwrap();
    logforth_channel::fatal!(channel, "Hello fatal!").unwrap();

    channel.close().unwrap();
}
