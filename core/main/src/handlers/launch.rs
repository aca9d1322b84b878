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

use crate::link_builder::CANNOT_SERVE_RESPONSE;

const WELCOME_RESPONSE: &str = "Welcome, you can launch a deep link to the Amazon shopping mobile app. I support deep linking to the search page, your order history, or simply opening the app. Which would you like to try? ";

pub struct LaunchRequestHandler;

impl RequestHandler for LaunchRequestHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        matches!(envelope.request, Request::Launch(_))
    }

    fn handle(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        if let Ok(raw) = serde_json::to_string(envelope) {
            info!("{}", raw);
        }

        let speech = if envelope.app_link().is_some() {
            WELCOME_RESPONSE
        } else {
            CANNOT_SERVE_RESPONSE
        };

        Ok(ResponseEnvelope::builder()
            .speak(speech)
            .reprompt(speech)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(context: serde_json::Value) -> RequestEnvelope {
        serde_json::from_value(json!({
            "version": "1.0",
            "context": context,
            "request": { "type": "LaunchRequest", "requestId": "req-1" }
        }))
        .unwrap()
    }

    #[test]
    fn test_launch_without_capability_cannot_serve() {
        let envelope = envelope(json!({}));
        assert!(LaunchRequestHandler.can_handle(&envelope));

        let response = LaunchRequestHandler.handle(&envelope).unwrap();
        assert_eq!(
            response.speech_text(),
            Some(format!("<speak>{}</speak>", CANNOT_SERVE_RESPONSE).as_str())
        );
        assert!(response.directive().is_none());
    }

    #[test]
    fn test_launch_with_capability_welcomes() {
        let envelope = envelope(json!({
            "AppLink": { "supportedCatalogTypes": ["GOOGLE_PLAY_STORE"] }
        }));
        let response = LaunchRequestHandler.handle(&envelope).unwrap();
        assert_eq!(
            response.speech_text(),
            Some(format!("<speak>{}</speak>", WELCOME_RESPONSE).as_str())
        );
        assert!(response.response.reprompt.is_some());
    }

    #[test]
    fn test_ignores_other_request_types() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "context": {},
            "request": { "type": "SessionEndedRequest", "requestId": "req-1" }
        }))
        .unwrap();
        assert!(!LaunchRequestHandler.can_handle(&envelope));
    }
}
