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

use skill_sdk::api::request::RequestEnvelope;
use skill_sdk::api::response::ResponseEnvelope;
use skill_sdk::log::error;
use skill_sdk::skill::SkillErrorHandler;
use skill_sdk::utils::error::SkillError;

const ERROR_RESPONSE: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// Catch-all error responder. Matches every error so the skill never fails
/// to produce a response.
pub struct GenericErrorHandler;

impl SkillErrorHandler for GenericErrorHandler {
    fn can_handle(&self, _envelope: &RequestEnvelope, _error: &SkillError) -> bool {
        true
    }

    fn handle(&self, _envelope: &RequestEnvelope, error: &SkillError) -> ResponseEnvelope {
        error!("Error handled: {:?}", error);
        ResponseEnvelope::builder()
            .speak(ERROR_RESPONSE)
            .reprompt(ERROR_RESPONSE)
            .build()
    }
}
