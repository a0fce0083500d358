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

//! The retry and timeout defaults for each RPC in the service.

use gax::method_config::{BackoffParams, MethodConfig, ServiceConfig};
use gax::options::RequestOptions;
use std::collections::HashMap;
use std::time::Duration;

pub(crate) const SERVICE_CONFIG: ServiceConfig = ServiceConfig {
    interface: "stratus.cloud.phishingprotection.v1.PhishingProtection",
    methods: &[
        // Reports are not idempotent, so the method is never retried.
        MethodConfig {
            name: "ReportPhishing",
            idempotent: false,
            retry_codes: &[],
            backoff: BackoffParams::default_params(),
            attempt_timeout: Duration::from_secs(60),
            total_timeout: Duration::from_secs(600),
        },
    ],
};

lazy_static::lazy_static! {
    static ref DEFAULT_OPTIONS: HashMap<&'static str, RequestOptions> = SERVICE_CONFIG
        .methods
        .iter()
        .map(|m| (m.name, m.request_options()))
        .collect();
}

/// The default request options for `method`.
pub(crate) fn default_options(method: &str) -> RequestOptions {
    DEFAULT_OPTIONS.get(method).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use std::time::Instant;

    #[test]
    fn report_phishing_is_never_retried() {
        let options = default_options("ReportPhishing");
        assert_eq!(options.idempotent(), Some(false));
        assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(60)));

        let policy = options.retry_policy().clone().unwrap();
        let unavailable = Error::service(Status::default().set_code(Code::Unavailable));
        assert!(
            policy
                .on_error(Instant::now(), 1, false, unavailable)
                .is_permanent()
        );
    }
}
