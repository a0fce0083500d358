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

//! The transport seam for the Phishing Protection client.

use crate::Result;
use crate::model;
use gax::options::RequestOptions;

/// Defines the trait used to implement
/// [crate::client::PhishingProtection].
///
/// Application developers may need to implement this trait to mock
/// `client::PhishingProtection`. In other use-cases, application developers
/// only use `client::PhishingProtection` and need not be concerned with this
/// trait or its implementations.
#[async_trait::async_trait]
pub trait PhishingProtection: std::fmt::Debug + Send + Sync {
    /// Implements
    /// [crate::client::PhishingProtection::report_phishing].
    async fn report_phishing(
        &self,
        req: model::ReportPhishingRequest,
        options: RequestOptions,
    ) -> Result<model::ReportPhishingResponse>;
}
