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

//! Static per-method retry and timeout configuration tables.
//!
//! Each generated client ships a table describing, for every RPC in the
//! service interface, which status codes are retryable, the backoff
//! parameters, and the timeout budget. The tables are immutable static data,
//! injected into the request options at client construction. They are never
//! global mutable state.

use crate::error::rpc::Code;
use crate::exponential_backoff::ExponentialBackoffBuilder;
use crate::options::RequestOptions;
use crate::retry_policy::{RetryPolicyExt, RetryableCodes};
use std::time::Duration;

/// The backoff parameters for a method.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackoffParams {
    /// The delay before the first retry.
    pub initial_delay: Duration,
    /// The multiplier applied to the delay after each failure.
    pub multiplier: f64,
    /// The upper bound on the delay between retries.
    pub max_delay: Duration,
}

impl BackoffParams {
    /// The default backoff parameters shared by most service configurations.
    pub const fn default_params() -> Self {
        Self {
            initial_delay: Duration::from_millis(100),
            multiplier: 1.3,
            max_delay: Duration::from_secs(60),
        }
    }
}

/// The retry and timeout configuration for a single RPC.
#[derive(Clone, Copy, Debug)]
pub struct MethodConfig {
    /// The RPC name, e.g. `"ListCatalogs"`.
    pub name: &'static str,
    /// If `true`, the RPC is safe to attempt more than once.
    pub idempotent: bool,
    /// The status codes that are retryable for this RPC. Empty means the RPC
    /// is never retried.
    pub retry_codes: &'static [Code],
    /// The backoff parameters for the retry loop.
    pub backoff: BackoffParams,
    /// The timeout for each attempt.
    pub attempt_timeout: Duration,
    /// The overall budget for the retry loop.
    pub total_timeout: Duration,
}

impl MethodConfig {
    /// Seeds [RequestOptions] with the defaults described by this entry.
    ///
    /// The options produced here can still be overridden per call via
    /// [RequestOptionsBuilder][crate::options::RequestOptionsBuilder].
    pub fn request_options(&self) -> RequestOptions {
        let mut options = RequestOptions::default();
        options.set_idempotency(self.idempotent);
        options.set_attempt_timeout(self.attempt_timeout);
        options.set_retry_policy(
            RetryableCodes::new(self.retry_codes).with_time_limit(self.total_timeout),
        );
        options.set_backoff_policy(
            ExponentialBackoffBuilder::new()
                .with_initial_delay(self.backoff.initial_delay)
                .with_maximum_delay(self.backoff.max_delay)
                .with_scaling(self.backoff.multiplier)
                .clamp(),
        );
        options
    }
}

/// The configuration table for a service interface.
#[derive(Clone, Copy, Debug)]
pub struct ServiceConfig {
    /// The fully qualified interface name, e.g.
    /// `"stratus.cloud.privatecatalog.v1.PrivateCatalog"`.
    pub interface: &'static str,
    /// One entry per RPC in the interface.
    pub methods: &'static [MethodConfig],
}

impl ServiceConfig {
    /// Looks up the configuration for `name`.
    pub fn method(&self, name: &str) -> Option<&MethodConfig> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Seeds request options for `name`, falling back to empty options for
    /// methods without an entry.
    pub fn request_options(&self, name: &str) -> RequestOptions {
        self.method(name)
            .map(MethodConfig::request_options)
            .unwrap_or_default()
    }
}
