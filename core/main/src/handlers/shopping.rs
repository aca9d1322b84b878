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
use skill_sdk::log::info;
use skill_sdk::skill::RequestHandler;
use skill_sdk::utils::error::SkillError;

use crate::link_builder::{build_directive, LinkIntent, CANNOT_SERVE_RESPONSE};

pub const OPEN_APP_INTENT: &str = "OpenAppIntent";
pub const GET_ORDERS_INTENT: &str = "GetOrdersIntent";
pub const SEARCH_INTENT: &str = "SearchIntent";
pub const SEARCH_QUERY_SLOT: &str = "query";

/// Shared tail of every shopping handler: attach the directive when one can
/// be built, otherwise degrade to the cannot-serve speech.
fn link_response(envelope: &RequestEnvelope, intent: LinkIntent) -> ResponseEnvelope {
    match build_directive(&intent, &envelope.app_link_support()) {
        Some(directive) => ResponseEnvelope::builder().directive(directive).build(),
        None => ResponseEnvelope::builder()
            .speak(CANNOT_SERVE_RESPONSE)
            .build(),
    }
}

/// Opens the companion app. Android launches the package directly, iOS goes
/// through the storefront universal link.
pub struct OpenAppIntentHandler;

impl RequestHandler for OpenAppIntentHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.intent_name() == Some(OPEN_APP_INTENT)
    }

    fn handle(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        Ok(link_response(envelope, LinkIntent::OpenApp))
    }
}

/// Opens the order history page in the mobile app, falling back to the
/// mobile website through the universal link.
pub struct GetOrdersIntentHandler;

impl RequestHandler for GetOrdersIntentHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.intent_name() == Some(GET_ORDERS_INTENT)
    }

    fn handle(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        Ok(link_response(envelope, LinkIntent::ViewOrders))
    }
}

/// Performs a search when the query slot is filled, otherwise opens the
/// bare search page.
pub struct SearchIntentHandler;

impl RequestHandler for SearchIntentHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.intent_name() == Some(SEARCH_INTENT)
    }

    fn handle(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        if let Ok(raw) = serde_json::to_string(envelope) {
            info!("{}", raw);
        }
        let query = envelope.slot_value(SEARCH_QUERY_SLOT).map(String::from);
        Ok(link_response(envelope, LinkIntent::Search(query)))
    }
}
