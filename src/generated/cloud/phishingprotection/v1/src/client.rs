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

use crate::builder;
use std::sync::Arc;

/// Implements a client for the Phishing Protection API.
///
/// # Example
/// ```
/// # use stratus_phishingprotection_v1::client::PhishingProtection;
/// # async fn sample(client: &PhishingProtection) -> stratus_phishingprotection_v1::Result<()> {
/// client
///     .report_phishing()
///     .set_parent("projects/my-project")
///     .set_uri("https://phishing.example.com/login")
///     .send()
///     .await?;
/// # Ok(()) }
/// ```
///
/// # Pooling and Cloning
///
/// `PhishingProtection` holds its stub in an [Arc], so cloning the client is
/// cheap and clones share the same underlying connection.
#[derive(Clone, Debug)]
pub struct PhishingProtection {
    inner: Arc<dyn crate::stub::PhishingProtection>,
}

impl PhishingProtection {
    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::PhishingProtection + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Reports a URI suspected of containing phishing content.
    pub fn report_phishing(&self) -> builder::phishing_protection::ReportPhishing {
        builder::phishing_protection::ReportPhishing::new(self.inner.clone())
    }
}
