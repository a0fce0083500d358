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

//! Stratus Cloud API helpers.
//!
//! This crate contains the types and functions shared by the implementation
//! of the Stratus Cloud Client Libraries for Rust. Most notably, it contains
//! the pagination adapters used by every `List*` RPC, the error type returned
//! by all clients, and the retry and backoff policies consumed by the
//! transport layer.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Types and traits to consume `List*` RPCs as a [futures::Stream].
pub mod paginator;

/// Blocking counterparts of the [paginator] adapters.
pub mod pager;

/// Client configuration and per request options.
pub mod options;

/// Static per-method retry and timeout configuration tables.
pub mod method_config;

/// Traits for retry policies and some common implementations.
pub mod retry_policy;

/// The result type for retry policy decisions.
pub mod retry_result;

/// Traits for backoff policies.
pub mod backoff_policy;

/// Truncated exponential backoff with jitter.
pub mod exponential_backoff;
