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

/// Request builders for [PhishingProtection][crate::client::PhishingProtection].
pub mod phishing_protection {
    use crate::Result;
    use crate::model;
    use crate::service_config;
    use gax::options::RequestOptions;
    use std::sync::Arc;

    /// The request builder for
    /// [PhishingProtection::report_phishing][crate::client::PhishingProtection::report_phishing]
    /// calls.
    #[derive(Clone, Debug)]
    pub struct ReportPhishing {
        stub: Arc<dyn crate::stub::PhishingProtection>,
        request: model::ReportPhishingRequest,
        options: RequestOptions,
    }

    impl ReportPhishing {
        pub(crate) fn new(stub: Arc<dyn crate::stub::PhishingProtection>) -> Self {
            Self {
                stub,
                request: model::ReportPhishingRequest::new(),
                options: service_config::default_options("ReportPhishing"),
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::ReportPhishingRequest>>(mut self, v: V) -> Self {
            self.request = v.into();
            self
        }

        /// Sets the value of [parent][model::ReportPhishingRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.request.parent = v.into();
            self
        }

        /// Sets the value of [uri][model::ReportPhishingRequest::uri].
        pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
            self.request.uri = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ReportPhishingResponse> {
            tracing::debug!(
                method = "ReportPhishing",
                project = %self.request.parent,
                "dispatching request"
            );
            self.stub.report_phishing(self.request, self.options).await
        }
    }

    impl gax::options::internal::RequestBuilder for ReportPhishing {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}
