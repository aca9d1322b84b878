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
use skill_sdk::skill::RequestHandler;
use skill_sdk::utils::error::SkillError;

pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

const HELP_RESPONSE: &str = "This skill only works from the context of the Alexa mobile app, a mobile accessory such as the Echo Buds, or from an Alexa-enable mobile phone. You can ask me to deep link into the Amazon shopping app's order history, search page, or simply opening the app. What would you like me to do?";
const GOODBYE_RESPONSE: &str = "Goodbye!";

pub struct HelpIntentHandler;

impl RequestHandler for HelpIntentHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.intent_name() == Some(HELP_INTENT)
    }

    fn handle(&self, _envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        Ok(ResponseEnvelope::builder()
            .speak(HELP_RESPONSE)
            .reprompt(HELP_RESPONSE)
            .build())
    }
}

pub struct CancelAndStopIntentHandler;

impl RequestHandler for CancelAndStopIntentHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        matches!(
            envelope.intent_name(),
            Some(CANCEL_INTENT) | Some(STOP_INTENT)
        )
    }

    fn handle(&self, _envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        Ok(ResponseEnvelope::builder().speak(GOODBYE_RESPONSE).build())
    }
}

/// Echoes the intent name back for interaction-model testing. Must be
/// registered after every specific intent handler.
pub struct IntentReflectorHandler;

impl RequestHandler for IntentReflectorHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        matches!(envelope.request, Request::Intent(_))
    }

    fn handle(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        let name = envelope.intent_name().ok_or(SkillError::MissingInput)?;
        Ok(ResponseEnvelope::builder()
            .speak(format!("You just triggered {}", name))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn intent_envelope(name: &str) -> RequestEnvelope {
        serde_json::from_value(json!({
            "version": "1.0",
            "context": {},
            "request": {
                "type": "IntentRequest",
                "requestId": "req-1",
                "intent": { "name": name }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_help_speaks_and_reprompts() {
        let envelope = intent_envelope(HELP_INTENT);
        assert!(HelpIntentHandler.can_handle(&envelope));

        let response = HelpIntentHandler.handle(&envelope).unwrap();
        assert!(response.speech_text().unwrap().contains("deep link"));
        assert!(response.response.reprompt.is_some());
    }

    #[rstest]
    #[case(CANCEL_INTENT)]
    #[case(STOP_INTENT)]
    fn test_cancel_and_stop_say_goodbye(#[case] name: &str) {
        let envelope = intent_envelope(name);
        assert!(CancelAndStopIntentHandler.can_handle(&envelope));

        let response = CancelAndStopIntentHandler.handle(&envelope).unwrap();
        assert_eq!(response.speech_text(), Some("<speak>Goodbye!</speak>"));
    }

    #[test]
    fn test_reflector_echoes_intent_name() {
        let envelope = intent_envelope("MysteryIntent");
        assert!(IntentReflectorHandler.can_handle(&envelope));

        let response = IntentReflectorHandler.handle(&envelope).unwrap();
        assert_eq!(
            response.speech_text(),
            Some("<speak>You just triggered MysteryIntent</speak>")
        );
    }

    #[test]
    fn test_reflector_ignores_non_intent_requests() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "context": {},
            "request": { "type": "LaunchRequest", "requestId": "req-1" }
        }))
        .unwrap();
        assert!(!IntentReflectorHandler.can_handle(&envelope));
    }
}
