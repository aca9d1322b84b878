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

use serde::{Deserialize, Serialize};

pub const START_CONNECTION_DIRECTIVE_TYPE: &str = "Connections.StartConnection";
pub const LINK_APP_CONNECTION_URI_V1: &str = "connection://AMAZON.LinkApp/1";
pub const LINK_APP_CONNECTION_URI_V2: &str = "connection://AMAZON.LinkApp/2";

pub const SSML_PROMPT_TYPE: &str = "SSML";

pub const ANDROID_STORE_TYPE: &str = "GOOGLE_PLAY_STORE";
pub const IOS_STORE_TYPE: &str = "IOS_APP_STORE";

/// App-distribution platform used to scope a link action.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CatalogType {
    #[serde(rename = "GOOGLE_PLAY_STORE")]
    GooglePlayStore,
    #[serde(rename = "IOS_APP_STORE")]
    IosAppStore,
}

impl CatalogType {
    pub fn from_wire(value: &str) -> Option<CatalogType> {
        match value {
            ANDROID_STORE_TYPE => Some(CatalogType::GooglePlayStore),
            IOS_STORE_TYPE => Some(CatalogType::IosAppStore),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            CatalogType::GooglePlayStore => ANDROID_STORE_TYPE,
            CatalogType::IosAppStore => IOS_STORE_TYPE,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    #[serde(rename = "ANDROID_PACKAGE")]
    AndroidPackage,
    #[serde(rename = "UNIVERSAL_LINK")]
    UniversalLink,
    #[serde(rename = "CUSTOM_SCHEME")]
    CustomScheme,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PromptBehavior {
    #[serde(rename = "SPEAK")]
    Speak,
    #[serde(rename = "SUPPRESS")]
    Suppress,
}

/// The one directive this domain ever attaches to a response: a request to
/// open a connection to the companion app. The input payload shape depends
/// on which protocol version the client declared.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StartConnectionDirective {
    #[serde(rename = "type")]
    pub directive_type: String,
    pub uri: String,
    pub input: ConnectionInput,
}

impl StartConnectionDirective {
    pub fn v1(input: LinkAppInputV1) -> StartConnectionDirective {
        StartConnectionDirective {
            directive_type: START_CONNECTION_DIRECTIVE_TYPE.into(),
            uri: LINK_APP_CONNECTION_URI_V1.into(),
            input: ConnectionInput::V1(input),
        }
    }

    pub fn v2(input: LinkAppInputV2) -> StartConnectionDirective {
        StartConnectionDirective {
            directive_type: START_CONNECTION_DIRECTIVE_TYPE.into(),
            uri: LINK_APP_CONNECTION_URI_V2.into(),
            input: ConnectionInput::V2(input),
        }
    }

    pub fn version(&self) -> u8 {
        match self.input {
            ConnectionInput::V1(_) => 1,
            ConnectionInput::V2(_) => 2,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ConnectionInput {
    V2(LinkAppInputV2),
    V1(LinkAppInputV1),
}

/// Protocol V1: a single primary action scoped to exactly one catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkAppInputV1 {
    pub catalog_info: CatalogInfo,
    pub actions: LinkActions,
    pub prompts: LinkPrompts,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogInfo {
    pub identifier: String,
    #[serde(rename = "type")]
    pub catalog_type: CatalogType,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LinkActions {
    pub primary: PrimaryLinkAction,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrimaryLinkAction {
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub link: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkPrompts {
    pub on_app_linked: OnAppLinkedPrompt,
    pub on_screen_locked: OnScreenLockedPrompt,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnAppLinkedPrompt {
    pub prompt: SsmlPrompt,
    pub default_prompt_behavior: PromptBehavior,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OnScreenLockedPrompt {
    pub prompt: SsmlPrompt,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SsmlPrompt {
    pub ssml: String,
    #[serde(rename = "type")]
    pub prompt_type: String,
}

impl SsmlPrompt {
    pub fn new(speech: impl AsRef<str>) -> SsmlPrompt {
        SsmlPrompt {
            ssml: format!("<speak>{}</speak>", speech.as_ref()),
            prompt_type: SSML_PROMPT_TYPE.into(),
        }
    }
}

/// Protocol V2: one link entry per declared catalog plus a topic prompt.
/// The map is ordered so identical inputs always serialize identically.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkAppInputV2 {
    pub links: BTreeMap<CatalogType, CatalogLink>,
    pub prompt: TopicPrompt,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogLink {
    pub primary: LinkEntry,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum LinkEntry {
    #[serde(rename = "ANDROID_PACKAGE")]
    AndroidPackage(AndroidPackageLink),
    #[serde(rename = "UNIVERSAL_LINK")]
    UniversalLink(UniversalLinkEntry),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AndroidPackageLink {
    pub package_identifier: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UniversalLinkEntry {
    pub app_identifier: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopicPrompt {
    pub topic: String,
    pub direct_launch_default_prompt_behavior: PromptBehavior,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v1_directive() -> StartConnectionDirective {
        StartConnectionDirective::v1(LinkAppInputV1 {
            catalog_info: CatalogInfo {
                identifier: "com.example.app".into(),
                catalog_type: CatalogType::GooglePlayStore,
            },
            actions: LinkActions {
                primary: PrimaryLinkAction {
                    link_type: LinkType::AndroidPackage,
                    link: "com.example.app".into(),
                },
            },
            prompts: LinkPrompts {
                on_app_linked: OnAppLinkedPrompt {
                    prompt: SsmlPrompt::new("Okay. "),
                    default_prompt_behavior: PromptBehavior::Speak,
                },
                on_screen_locked: OnScreenLockedPrompt {
                    prompt: SsmlPrompt::new("Please unlock your device. "),
                },
            },
        })
    }

    #[test]
    fn test_v1_wire_shape() {
        let serialized = serde_json::to_value(v1_directive()).unwrap();
        assert_eq!(
            serialized,
            json!({
                "type": "Connections.StartConnection",
                "uri": "connection://AMAZON.LinkApp/1",
                "input": {
                    "catalogInfo": {
                        "identifier": "com.example.app",
                        "type": "GOOGLE_PLAY_STORE"
                    },
                    "actions": {
                        "primary": { "type": "ANDROID_PACKAGE", "link": "com.example.app" }
                    },
                    "prompts": {
                        "onAppLinked": {
                            "prompt": { "ssml": "<speak>Okay. </speak>", "type": "SSML" },
                            "defaultPromptBehavior": "SPEAK"
                        },
                        "onScreenLocked": {
                            "prompt": {
                                "ssml": "<speak>Please unlock your device. </speak>",
                                "type": "SSML"
                            }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_v2_wire_shape() {
        let mut links = BTreeMap::new();
        links.insert(
            CatalogType::GooglePlayStore,
            CatalogLink {
                primary: LinkEntry::AndroidPackage(AndroidPackageLink {
                    package_identifier: "com.example.app".into(),
                }),
            },
        );
        links.insert(
            CatalogType::IosAppStore,
            CatalogLink {
                primary: LinkEntry::UniversalLink(UniversalLinkEntry {
                    app_identifier: "id0000".into(),
                    url: "https://example.com".into(),
                }),
            },
        );
        let directive = StartConnectionDirective::v2(LinkAppInputV2 {
            links,
            prompt: TopicPrompt {
                topic: "Open the app.".into(),
                direct_launch_default_prompt_behavior: PromptBehavior::Speak,
            },
        });

        assert_eq!(directive.version(), 2);
        let serialized = serde_json::to_value(&directive).unwrap();
        assert_eq!(
            serialized,
            json!({
                "type": "Connections.StartConnection",
                "uri": "connection://AMAZON.LinkApp/2",
                "input": {
                    "links": {
                        "GOOGLE_PLAY_STORE": {
                            "primary": {
                                "ANDROID_PACKAGE": { "packageIdentifier": "com.example.app" }
                            }
                        },
                        "IOS_APP_STORE": {
                            "primary": {
                                "UNIVERSAL_LINK": {
                                    "appIdentifier": "id0000",
                                    "url": "https://example.com"
                                }
                            }
                        }
                    },
                    "prompt": {
                        "topic": "Open the app.",
                        "directLaunchDefaultPromptBehavior": "SPEAK"
                    }
                }
            })
        );
    }

    #[test]
    fn test_connection_input_roundtrip_picks_correct_version() {
        let directive = v1_directive();
        assert_eq!(directive.version(), 1);

        let json = serde_json::to_string(&directive).unwrap();
        let decoded: StartConnectionDirective = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, directive);
        assert_eq!(decoded.version(), 1);
    }

    #[test]
    fn test_catalog_type_wire_names() {
        assert_eq!(
            CatalogType::from_wire("GOOGLE_PLAY_STORE"),
            Some(CatalogType::GooglePlayStore)
        );
        assert_eq!(
            CatalogType::from_wire("IOS_APP_STORE"),
            Some(CatalogType::IosAppStore)
        );
        assert_eq!(CatalogType::from_wire("WINDOWS_STORE"), None);
        assert_eq!(CatalogType::IosAppStore.as_wire(), "IOS_APP_STORE");
    }
}
