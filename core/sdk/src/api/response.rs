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

use serde::{Deserialize, Serialize};

use crate::api::app_link::StartConnectionDirective;

pub const RESPONSE_ENVELOPE_VERSION: &str = "1.0";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: Response,
}

impl ResponseEnvelope {
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    pub fn speech_text(&self) -> Option<&str> {
        match &self.response.output_speech {
            Some(OutputSpeech::Ssml { ssml }) => Some(ssml.as_str()),
            Some(OutputSpeech::PlainText { text }) => Some(text.as_str()),
            None => None,
        }
    }

    pub fn directive(&self) -> Option<&StartConnectionDirective> {
        self.response.directives.first()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<StartConnectionDirective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
    #[serde(rename = "PlainText")]
    PlainText { text: String },
}

impl OutputSpeech {
    /// Wraps plain speech text in SSML speak tags, the way the upstream
    /// skill SDK renders every speak() call.
    pub fn ssml(speech: impl AsRef<str>) -> OutputSpeech {
        OutputSpeech::Ssml {
            ssml: format!("<speak>{}</speak>", speech.as_ref()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Accumulates speech, reprompt, directives and the end-session flag into a
/// well-formed response envelope. Everything is optional; build() never
/// fails.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn speak(mut self, speech: impl AsRef<str>) -> ResponseBuilder {
        self.response.output_speech = Some(OutputSpeech::ssml(speech));
        self
    }

    pub fn reprompt(mut self, speech: impl AsRef<str>) -> ResponseBuilder {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::ssml(speech),
        });
        self
    }

    pub fn directive(mut self, directive: StartConnectionDirective) -> ResponseBuilder {
        self.response.directives.push(directive);
        self
    }

    pub fn end_session(mut self, should_end: bool) -> ResponseBuilder {
        self.response.should_end_session = Some(should_end);
        self
    }

    pub fn build(self) -> ResponseEnvelope {
        ResponseEnvelope {
            version: RESPONSE_ENVELOPE_VERSION.into(),
            response: self.response,
        }
    }
}
