// Copyright 2023 Comcast Cable Communications Management, LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::io::Read;

use applink_skill::build_skill;
use skill_sdk::api::request::RequestEnvelope;
use skill_sdk::log::{error, info, LevelFilter};
use skill_sdk::utils::logger::init_logger;

/// Transport-agnostic runner: one JSON request envelope on stdin, one JSON
/// response envelope on stdout. The hosting layer owns everything else.
fn main() {
    if init_logger("applink_skill".into(), LevelFilter::Info).is_err() {
        eprintln!("Could not load the logger");
        std::process::exit(exitcode::CONFIG);
    }

    let mut raw = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut raw) {
        error!("Failed to read the request envelope: {}", e);
        std::process::exit(exitcode::IOERR);
    }

    let envelope: RequestEnvelope = match serde_json::from_str(&raw) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!("Malformed request envelope: {}", e);
            std::process::exit(exitcode::DATAERR);
        }
    };

    let response = build_skill().route(&envelope);
    match serde_json::to_string(&response) {
        Ok(json) => {
            info!("Responding with: {}", json);
            println!("{}", json);
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            error!("Failed to serialize the response envelope: {}", e);
            std::process::exit(exitcode::SOFTWARE);
        }
    }
}
