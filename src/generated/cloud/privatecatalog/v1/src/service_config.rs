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

use gax::error::rpc::Code;
use gax::method_config::{BackoffParams, MethodConfig, ServiceConfig};
use gax::options::RequestOptions;
use std::collections::HashMap;
use std::time::Duration;

const SEARCH_DEFAULTS: MethodConfig = MethodConfig {
    name: "",
    idempotent: true,
    retry_codes: &[Code::Unavailable],
    backoff: BackoffParams::default_params(),
    attempt_timeout: Duration::from_secs(20),
    total_timeout: Duration::from_secs(600),
};

pub(crate) const SERVICE_CONFIG: ServiceConfig = ServiceConfig {
    interface: "stratus.cloud.privatecatalog.v1.PrivateCatalog",
    methods: &[
        MethodConfig {
            name: "SearchCatalogs",
            ..SEARCH_DEFAULTS
        },
        MethodConfig {
            name: "SearchProducts",
            ..SEARCH_DEFAULTS
        },
        MethodConfig {
            name: "SearchVersions",
            ..SEARCH_DEFAULTS
        },
    ],
};

lazy_static::lazy_static! {
    // The retry and backoff policies are shared by all calls to a method, so
    // they are built once and cloned into each request.
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
    use gax::error::rpc::Status;
    use std::time::Instant;

    #[test]
    fn every_search_method_has_an_entry() {
        for name in ["SearchCatalogs", "SearchProducts", "SearchVersions"] {
            let method = SERVICE_CONFIG.method(name).unwrap_or_else(|| {
                panic!("missing configuration for {name}");
            });
            assert!(method.idempotent, "{name}");
            assert_eq!(method.attempt_timeout, Duration::from_secs(20), "{name}");
            assert_eq!(method.total_timeout, Duration::from_secs(600), "{name}");
        }
    }

    #[test]
    fn default_options_retry_unavailable() {
        let options = default_options("SearchCatalogs");
        assert_eq!(options.idempotent(), Some(true));
        let policy = options.retry_policy().clone().unwrap();
        let unavailable = Error::service(Status::default().set_code(Code::Unavailable));
        assert!(
            policy
                .on_error(Instant::now(), 1, true, unavailable)
                .is_continue()
        );
        let not_found = Error::service(Status::default().set_code(Code::NotFound));
        assert!(
            policy
                .on_error(Instant::now(), 1, true, not_found)
                .is_permanent()
        );
    }

    #[test]
    fn default_options_for_unknown_method_are_empty() {
        let options = default_options("Unknown");
        assert_eq!(options.idempotent(), None);
        assert!(options.retry_policy().is_none());
    }
}
