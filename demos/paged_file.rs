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
use logforth_channel::Paging;

fn main() {
    std::fs::create_dir_all("logs").unwrap();
    let mut channel = Channel::file("logs/", "my_app", ".log", "\n", Paging::Second).unwrap();

    let repeat = 3;

    for i in 0..repeat {
        logforth_channel::info!(channel, "Hello page {}!", i).unwrap();
        println!("wrote to {}", channel.filepath().unwrap().display());

        if i + 1 < repeat {
            std::thread::sleep(std::time::Duration::from_secs(1));
        }
    }

    channel.close().unwrap();
}
