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

use std::collections::BTreeMap;

use skill_sdk::api::app_link::{
    AndroidPackageLink, CatalogInfo, CatalogLink, CatalogType, LinkActions, LinkAppInputV1,
    LinkAppInputV2, LinkEntry, LinkPrompts, LinkType, OnAppLinkedPrompt, OnScreenLockedPrompt,
    PrimaryLinkAction, PromptBehavior, SsmlPrompt, StartConnectionDirective, TopicPrompt,
    UniversalLinkEntry,
};
use skill_sdk::api::context::AppLinkSupport;
use skill_sdk::log::debug;
use url::Url;

// Amazon Shopping App constants, reproduced verbatim for behavioral
// compatibility with the production skill.
pub const AMAZON_ORDER_HISTORY_URL: &str = "https://www.amazon.com/gp/css/order-history/";
pub const AMAZON_SEARCH_URL: &str = "https://www.amazon.com/s";
pub const AMAZON_SEARCH_QUERY_PARAM: &str = "k";
pub const AMAZON_STOREFRONT_URL: &str = "https://amazon.com";

pub const AMAZON_ANDROID_PACKAGE: &str = "com.amazon.mShop.android.shopping";
pub const AMAZON_IOS_ID: &str = "id297606951";

pub const CANNOT_SERVE_RESPONSE: &str = "Sorry, you are not on a mobile device. Try asking from the Alexa mobile app, an Alexa Built-in phone, or from an Alexa mobile accessory.";

const OPEN_LOCKED_SPEECH: &str = "Please unlock your device to open the Amazon Shopping App. ";
const SEARCH_LOCKED_SPEECH: &str =
    "Please unlock your device to search in the Amazon Shopping App. ";

/// Abstract deep-link category a handler asks for. Search carries the
/// optional free-text query slot.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkIntent {
    OpenApp,
    ViewOrders,
    Search(Option<String>),
}

impl LinkIntent {
    fn unlocked_speech(&self) -> String {
        match self {
            LinkIntent::Search(Some(query)) => format!("Searching for {}. ", query),
            _ => "Okay. ".into(),
        }
    }

    fn locked_speech(&self) -> &'static str {
        match self {
            LinkIntent::Search(_) => SEARCH_LOCKED_SPEECH,
            _ => OPEN_LOCKED_SPEECH,
        }
    }

    // The on-linked prompt is only spoken for OpenApp; for the other
    // categories the topic string substitutes.
    fn prompt_behavior(&self) -> PromptBehavior {
        match self {
            LinkIntent::OpenApp => PromptBehavior::Speak,
            _ => PromptBehavior::Suppress,
        }
    }

    fn topic(&self) -> String {
        match self {
            LinkIntent::OpenApp => "Open the Amazon shopping app.".into(),
            LinkIntent::ViewOrders => "See your order history.".into(),
            LinkIntent::Search(Some(query)) => format!("See search results for {}.", query),
            LinkIntent::Search(None) => "See search results.".into(),
        }
    }

    fn universal_link(&self) -> String {
        match self {
            LinkIntent::OpenApp => AMAZON_STOREFRONT_URL.into(),
            LinkIntent::ViewOrders => AMAZON_ORDER_HISTORY_URL.into(),
            LinkIntent::Search(query) => search_url(query.as_deref()),
        }
    }
}

fn search_url(query: Option<&str>) -> String {
    let query = match query {
        Some(q) => q,
        None => return AMAZON_SEARCH_URL.into(),
    };
    match Url::parse(AMAZON_SEARCH_URL) {
        Ok(mut url) => {
            url.query_pairs_mut()
                .append_pair(AMAZON_SEARCH_QUERY_PARAM, query);
            url.to_string()
        }
        Err(_) => AMAZON_SEARCH_URL.into(),
    }
}

fn catalog_identifier(catalog: CatalogType) -> &'static str {
    match catalog {
        CatalogType::GooglePlayStore => AMAZON_ANDROID_PACKAGE,
        CatalogType::IosAppStore => AMAZON_IOS_ID,
    }
}

/// Pure function from (intent category, declared capability) to a connection
/// directive. Returns None whenever no valid directive can be built; the
/// caller degrades to the cannot-serve speech. Never fails.
pub fn build_directive(
    intent: &LinkIntent,
    support: &AppLinkSupport,
) -> Option<StartConnectionDirective> {
    match support {
        AppLinkSupport::Absent => None,
        AppLinkSupport::Unrecognized => {
            // Migration-period contexts fall through to the fallback speech.
            debug!("AppLink capability version not supported by this skill");
            None
        }
        AppLinkSupport::V1 { catalogs } => build_v1(intent, catalogs),
        AppLinkSupport::V2 { catalogs } => build_v2(intent, catalogs),
    }
}

fn build_v1(intent: &LinkIntent, catalogs: &[CatalogType]) -> Option<StartConnectionDirective> {
    // V1 is scoped to exactly one catalog. Android wins when both are
    // somehow declared.
    let catalog = if catalogs.contains(&CatalogType::GooglePlayStore) {
        CatalogType::GooglePlayStore
    } else if catalogs.contains(&CatalogType::IosAppStore) {
        CatalogType::IosAppStore
    } else {
        return None;
    };

    Some(StartConnectionDirective::v1(LinkAppInputV1 {
        catalog_info: CatalogInfo {
            identifier: catalog_identifier(catalog).into(),
            catalog_type: catalog,
        },
        actions: LinkActions {
            primary: v1_primary_action(intent, catalog),
        },
        prompts: LinkPrompts {
            on_app_linked: OnAppLinkedPrompt {
                prompt: SsmlPrompt::new(intent.unlocked_speech()),
                default_prompt_behavior: intent.prompt_behavior(),
            },
            on_screen_locked: OnScreenLockedPrompt {
                prompt: SsmlPrompt::new(intent.locked_speech()),
            },
        },
    }))
}

fn v1_primary_action(intent: &LinkIntent, catalog: CatalogType) -> PrimaryLinkAction {
    match (intent, catalog) {
        // Opening the app on Android launches the package directly.
        (LinkIntent::OpenApp, CatalogType::GooglePlayStore) => PrimaryLinkAction {
            link_type: LinkType::AndroidPackage,
            link: AMAZON_ANDROID_PACKAGE.into(),
        },
        _ => PrimaryLinkAction {
            link_type: LinkType::UniversalLink,
            link: intent.universal_link(),
        },
    }
}

fn build_v2(intent: &LinkIntent, catalogs: &[CatalogType]) -> Option<StartConnectionDirective> {
    if catalogs.is_empty() {
        return None;
    }

    let mut links = BTreeMap::new();
    for catalog in catalogs {
        links.insert(
            *catalog,
            CatalogLink {
                primary: v2_link_entry(intent, *catalog),
            },
        );
    }

    Some(StartConnectionDirective::v2(LinkAppInputV2 {
        links,
        prompt: TopicPrompt {
            topic: intent.topic(),
            direct_launch_default_prompt_behavior: intent.prompt_behavior(),
        },
    }))
}

fn v2_link_entry(intent: &LinkIntent, catalog: CatalogType) -> LinkEntry {
    match (intent, catalog) {
        (LinkIntent::OpenApp, CatalogType::GooglePlayStore) => {
            LinkEntry::AndroidPackage(AndroidPackageLink {
                package_identifier: AMAZON_ANDROID_PACKAGE.into(),
            })
        }
        _ => LinkEntry::UniversalLink(UniversalLinkEntry {
            app_identifier: catalog_identifier(catalog).into(),
            url: intent.universal_link(),
        }),
    }
}
