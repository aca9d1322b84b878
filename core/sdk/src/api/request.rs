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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::context::{AppLinkContext, AppLinkSupport, Context};

pub const LINK_RESULT_STATUS_SUCCESS: &str = "SUCCESS";
pub const LINK_RESULT_STATUS_FAILURE: &str = "FAILURE";

/// Top level envelope delivered by the voice platform runtime for every
/// turn. The transport is out of scope, only the shape matters here.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Context,
    pub request: Request,
}

impl RequestEnvelope {
    pub fn intent_name(&self) -> Option<&str> {
        match &self.request {
            Request::Intent(r) => Some(r.intent.name.as_str()),
            _ => None,
        }
    }

    pub fn slot_value(&self, name: &str) -> Option<&str> {
        match &self.request {
            Request::Intent(r) => r.intent.slot_value(name),
            _ => None,
        }
    }

    pub fn app_link(&self) -> Option<&AppLinkContext> {
        self.context.app_link.as_ref()
    }

    /// Decodes the client's app-linking capability once per request.
    pub fn app_link_support(&self) -> AppLinkSupport {
        AppLinkSupport::from_context(self.context.app_link.as_ref())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(rename = "new", default)]
    pub is_new: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "LaunchRequest")]
    Launch(LaunchRequest),
    #[serde(rename = "IntentRequest")]
    Intent(IntentRequest),
    #[serde(rename = "SessionResumedRequest")]
    SessionResumed(SessionResumedRequest),
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded(SessionEndedRequest),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub intent: Intent,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<HashMap<String, Slot>>,
}

impl Intent {
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .as_ref()
            .and_then(|slots| slots.get(name))
            .and_then(|slot| slot.value.as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Reported by the platform after a previously issued connection directive
/// has been carried out on the device.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionResumedRequest {
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<ConnectionCause>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionCause {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub cause_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ConnectionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<LinkResult>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LinkResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<LinkAttempt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<LinkAttempt>,
}

impl LinkResult {
    /// True only when both the primary link and its fallback were attempted
    /// and both came back FAILURE.
    pub fn both_failed(&self) -> bool {
        let failed = |attempt: &Option<LinkAttempt>| {
            attempt
                .as_ref()
                .map(|a| a.status == LINK_RESULT_STATUS_FAILURE)
                .unwrap_or(false)
        };
        failed(&self.primary) && failed(&self.fallback)
    }
}

// status is compared as a string so unknown platform statuses degrade
// instead of failing envelope deserialization
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LinkAttempt {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SessionEndedError>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedError {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
