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

use skill_sdk::api::request::{Request, RequestEnvelope};
use skill_sdk::api::response::ResponseEnvelope;
use skill_sdk::log::info;
use skill_sdk::skill::RequestHandler;
use skill_sdk::utils::error::SkillError;

const LINK_FAILED_RESPONSE: &str =
    "Oh no, sorry I was unable to link to the app. Check the status code in the logs to see what went wrong.";

/// The platform resumes the session to report the outcome of a previously
/// issued connection directive.
pub struct SessionResumedRequestHandler;

impl RequestHandler for SessionResumedRequestHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        matches!(envelope.request, Request::SessionResumed(_))
    }

    fn handle(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        let request = match &envelope.request {
            Request::SessionResumed(request) => request,
            _ => return Err(SkillError::InvalidInput),
        };

        if let Some(cause) = &request.cause {
            if let Ok(raw) = serde_json::to_string(cause) {
                info!("Session resumed with cause: {}", raw);
            }
            // The voice experience only continues when both the primary link
            // and its fallback failed on the device.
            if cause.result.as_ref().map(|r| r.both_failed()).unwrap_or(false) {
                return Ok(ResponseEnvelope::builder()
                    .speak(LINK_FAILED_RESPONSE)
                    .build());
            }
        }
        Ok(ResponseEnvelope::builder().build())
    }
}

pub struct SessionEndedRequestHandler;

impl RequestHandler for SessionEndedRequestHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        matches!(envelope.request, Request::SessionEnded(_))
    }

    fn handle(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        if let Request::SessionEnded(request) = &envelope.request {
            info!(
                "Session ended: {}",
                request.reason.as_deref().unwrap_or("no reason given")
            );
        }
        // Any cleanup logic goes here.
        Ok(ResponseEnvelope::builder().build())
    }
}
