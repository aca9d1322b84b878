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

use log::{debug, error};

use crate::api::request::RequestEnvelope;
use crate::api::response::ResponseEnvelope;
use crate::utils::error::SkillError;

/// A single (predicate, responder) pair. Registration order on the skill is
/// the precedence rule: the first handler whose can_handle returns true is
/// the only one invoked for a request. Handlers take &self and must be
/// stateless so concurrent invocations cannot interfere.
pub trait RequestHandler: Send + Sync {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool;
    fn handle(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError>;
}

/// Consulted when a request handler fails or no request handler matched.
/// Must not fail itself.
pub trait SkillErrorHandler: Send + Sync {
    fn can_handle(&self, envelope: &RequestEnvelope, error: &SkillError) -> bool;
    fn handle(&self, envelope: &RequestEnvelope, error: &SkillError) -> ResponseEnvelope;
}

pub struct Skill {
    handlers: Vec<Box<dyn RequestHandler>>,
    error_handlers: Vec<Box<dyn SkillErrorHandler>>,
}

impl Skill {
    pub fn builder() -> SkillBuilder {
        SkillBuilder::default()
    }

    /// Routes the request to the first matching handler and always returns a
    /// well-formed response envelope, whatever happens inside the handler.
    pub fn route(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        for (index, handler) in self.handlers.iter().enumerate() {
            if handler.can_handle(envelope) {
                debug!("Dispatching request to handler {}", index);
                return match handler.handle(envelope) {
                    Ok(response) => response,
                    Err(e) => self.handle_error(envelope, &e),
                };
            }
        }
        self.handle_error(envelope, &SkillError::NoHandlerAvailable)
    }

    fn handle_error(&self, envelope: &RequestEnvelope, error: &SkillError) -> ResponseEnvelope {
        error!("Error handled: {:?}", error);
        for handler in &self.error_handlers {
            if handler.can_handle(envelope, error) {
                return handler.handle(envelope, error);
            }
        }
        // Last resort when no error handler is registered. Still well formed.
        error!("No error handler matched, returning an empty response");
        ResponseEnvelope::builder().build()
    }
}

#[derive(Default)]
pub struct SkillBuilder {
    handlers: Vec<Box<dyn RequestHandler>>,
    error_handlers: Vec<Box<dyn SkillErrorHandler>>,
}

impl SkillBuilder {
    pub fn add_handler(mut self, handler: impl RequestHandler + 'static) -> SkillBuilder {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn add_error_handler(
        mut self,
        handler: impl SkillErrorHandler + 'static,
    ) -> SkillBuilder {
        self.error_handlers.push(Box::new(handler));
        self
    }

    pub fn build(self) -> Skill {
        Skill {
            handlers: self.handlers,
            error_handlers: self.error_handlers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn launch_envelope() -> RequestEnvelope {
        serde_json::from_value(json!({
            "version": "1.0",
            "context": {},
            "request": { "type": "LaunchRequest", "requestId": "req-1" }
        }))
        .unwrap()
    }

    struct FixedHandler {
        matches: bool,
        speech: &'static str,
    }

    impl RequestHandler for FixedHandler {
        fn can_handle(&self, _envelope: &RequestEnvelope) -> bool {
            self.matches
        }
        fn handle(&self, _envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
            Ok(ResponseEnvelope::builder().speak(self.speech).build())
        }
    }

    struct FailingHandler;

    impl RequestHandler for FailingHandler {
        fn can_handle(&self, _envelope: &RequestEnvelope) -> bool {
            true
        }
        fn handle(&self, _envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
            Err(SkillError::HandlerFailure("boom".into()))
        }
    }

    struct ApologyErrorHandler;

    impl SkillErrorHandler for ApologyErrorHandler {
        fn can_handle(&self, _envelope: &RequestEnvelope, _error: &SkillError) -> bool {
            true
        }
        fn handle(&self, _envelope: &RequestEnvelope, _error: &SkillError) -> ResponseEnvelope {
            ResponseEnvelope::builder().speak("sorry").build()
        }
    }

    #[test]
    fn test_first_matching_handler_wins() {
        let skill = Skill::builder()
            .add_handler(FixedHandler {
                matches: false,
                speech: "never",
            })
            .add_handler(FixedHandler {
                matches: true,
                speech: "first",
            })
            .add_handler(FixedHandler {
                matches: true,
                speech: "second",
            })
            .build();

        let response = skill.route(&launch_envelope());
        assert_eq!(response.speech_text(), Some("<speak>first</speak>"));
    }

    #[test]
    fn test_handler_failure_reaches_error_handler() {
        let skill = Skill::builder()
            .add_handler(FailingHandler)
            .add_error_handler(ApologyErrorHandler)
            .build();

        let response = skill.route(&launch_envelope());
        assert_eq!(response.speech_text(), Some("<speak>sorry</speak>"));
    }

    #[test]
    fn test_no_matching_handler_reaches_error_handler() {
        let skill = Skill::builder()
            .add_handler(FixedHandler {
                matches: false,
                speech: "never",
            })
            .add_error_handler(ApologyErrorHandler)
            .build();

        let response = skill.route(&launch_envelope());
        assert_eq!(response.speech_text(), Some("<speak>sorry</speak>"));
    }

    #[test]
    fn test_empty_skill_still_returns_well_formed_response() {
        let skill = Skill::builder().build();
        let response = skill.route(&launch_envelope());
        assert!(response.speech_text().is_none());
        assert!(response.directive().is_none());
        assert_eq!(response.version, "1.0");
    }
}
