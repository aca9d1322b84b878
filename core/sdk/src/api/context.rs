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

use log::debug;
use serde::{Deserialize, Serialize};

use crate::api::app_link::CatalogType;

pub const APP_LINK_INTERFACE: &str = "AppLink";

/// Client context attached to every request envelope. Interfaces the client
/// does not support are simply absent.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Context {
    #[serde(rename = "AppLink", skip_serializing_if = "Option::is_none")]
    pub app_link: Option<AppLinkContext>,
}

/// Raw AppLink interface declaration as it appears on the wire. Catalog
/// types stay strings here so an unknown store never fails deserialization.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppLinkContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub supported_catalog_types: Vec<String>,
}

/// App-linking capability decoded once per request. The protocol shapes are
/// mutually exclusive, so every consumer branches on exactly one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum AppLinkSupport {
    Absent,
    V1 { catalogs: Vec<CatalogType> },
    V2 { catalogs: Vec<CatalogType> },
    Unrecognized,
}

impl AppLinkSupport {
    pub fn from_context(context: Option<&AppLinkContext>) -> AppLinkSupport {
        let context = match context {
            Some(c) => c,
            None => return AppLinkSupport::Absent,
        };
        let catalogs = decode_catalogs(&context.supported_catalog_types);
        match context.version.as_deref() {
            None | Some("1") | Some("1.0") => AppLinkSupport::V1 { catalogs },
            Some("2") | Some("2.0") => AppLinkSupport::V2 { catalogs },
            Some(version) => {
                debug!("Unrecognized AppLink version declared: {}", version);
                AppLinkSupport::Unrecognized
            }
        }
    }

    pub fn catalogs(&self) -> &[CatalogType] {
        match self {
            AppLinkSupport::V1 { catalogs } | AppLinkSupport::V2 { catalogs } => catalogs,
            _ => &[],
        }
    }
}

fn decode_catalogs(raw: &[String]) -> Vec<CatalogType> {
    let mut catalogs = Vec::new();
    for entry in raw {
        match CatalogType::from_wire(entry) {
            Some(catalog) if !catalogs.contains(&catalog) => catalogs.push(catalog),
            Some(_) => {}
            None => debug!("Skipping unknown catalog type: {}", entry),
        }
    }
    catalogs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn context(value: serde_json::Value) -> AppLinkContext {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_absent_interface_decodes_to_absent() {
        assert_eq!(AppLinkSupport::from_context(None), AppLinkSupport::Absent);
    }

    #[rstest]
    #[case(json!({ "supportedCatalogTypes": ["GOOGLE_PLAY_STORE"] }))]
    #[case(json!({ "version": "1.0", "supportedCatalogTypes": ["GOOGLE_PLAY_STORE"] }))]
    #[case(json!({ "version": "1", "supportedCatalogTypes": ["GOOGLE_PLAY_STORE"] }))]
    fn test_v1_shapes(#[case] raw: serde_json::Value) {
        let support = AppLinkSupport::from_context(Some(&context(raw)));
        assert_eq!(
            support,
            AppLinkSupport::V1 {
                catalogs: vec![CatalogType::GooglePlayStore]
            }
        );
    }

    #[test]
    fn test_v2_shape_keeps_both_catalogs() {
        let raw = context(json!({
            "version": "2.0",
            "supportedCatalogTypes": ["GOOGLE_PLAY_STORE", "IOS_APP_STORE"]
        }));
        let support = AppLinkSupport::from_context(Some(&raw));
        assert_eq!(
            support.catalogs(),
            &[CatalogType::GooglePlayStore, CatalogType::IosAppStore]
        );
        assert!(matches!(support, AppLinkSupport::V2 { .. }));
    }

    #[test]
    fn test_unrecognized_version_degrades() {
        let raw = context(json!({
            "version": "3.0",
            "supportedCatalogTypes": ["GOOGLE_PLAY_STORE"]
        }));
        let support = AppLinkSupport::from_context(Some(&raw));
        assert_eq!(support, AppLinkSupport::Unrecognized);
        assert!(support.catalogs().is_empty());
    }

    #[test]
    fn test_unknown_and_duplicate_catalogs_are_dropped() {
        let raw = context(json!({
            "supportedCatalogTypes": [
                "GOOGLE_PLAY_STORE",
                "SOME_FUTURE_STORE",
                "GOOGLE_PLAY_STORE"
            ]
        }));
        let support = AppLinkSupport::from_context(Some(&raw));
        assert_eq!(support.catalogs(), &[CatalogType::GooglePlayStore]);
    }
}
