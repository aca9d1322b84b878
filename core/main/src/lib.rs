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

use skill_sdk::skill::Skill;

pub mod handlers;
pub mod link_builder;

use handlers::builtin::{CancelAndStopIntentHandler, HelpIntentHandler, IntentReflectorHandler};
use handlers::error::GenericErrorHandler;
use handlers::launch::LaunchRequestHandler;
use handlers::session::{SessionEndedRequestHandler, SessionResumedRequestHandler};
use handlers::shopping::{GetOrdersIntentHandler, OpenAppIntentHandler, SearchIntentHandler};

/// Wires every handler in precedence order. The order matters: the reflector
/// must stay last so it does not shadow the specific intent handlers.
pub fn build_skill() -> Skill {
    Skill::builder()
        .add_handler(LaunchRequestHandler)
        .add_handler(OpenAppIntentHandler)
        .add_handler(GetOrdersIntentHandler)
        .add_handler(SearchIntentHandler)
        .add_handler(HelpIntentHandler)
        .add_handler(CancelAndStopIntentHandler)
        .add_handler(SessionEndedRequestHandler)
        .add_handler(SessionResumedRequestHandler)
        .add_handler(IntentReflectorHandler)
        .add_error_handler(GenericErrorHandler)
        .build()
}
