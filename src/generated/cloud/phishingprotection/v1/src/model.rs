// Copyright 2025 Stratus Cloud LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The messages exchanged with the Phishing Protection service.

/// Request message for
/// [PhishingProtection::report_phishing][crate::client::PhishingProtection::report_phishing].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReportPhishingRequest {
    /// Required. The name of the project for which the report will be
    /// created, in the format `projects/{project}`.
    pub parent: String,

    /// Required. The URI that is being reported for phishing content to be
    /// analyzed.
    pub uri: String,
}

impl ReportPhishingRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][ReportPhishingRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [uri][ReportPhishingRequest::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = v.into();
        self
    }
}

/// Response message for
/// [PhishingProtection::report_phishing][crate::client::PhishingProtection::report_phishing].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReportPhishingResponse {}

impl ReportPhishingResponse {
    pub fn new() -> Self {
        Self::default()
    }
}
