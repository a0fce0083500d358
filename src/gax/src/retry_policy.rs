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

//! Defines traits for retry policies and some common implementations.
//!
//! The transport layer automatically retries RPCs when they fail due to
//! transient errors **and** the RPC is idempotent, that is, it is safe to
//! perform the RPC more than once. The pagination adapters never retry on
//! their own; they surface errors to the caller and leave the retry decision
//! to the transport, configured through these policies.
//!
//! Applications may override the default behavior and maybe retry operations
//! that, while not safe in general, may be safe given how the application
//! manages resources.

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use std::sync::Arc;

/// Controls the behavior of a transport retry loop.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Queries the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts made so far. This method is
    ///   always called after the first attempt.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many
    ///   more errors are retryable on idempotent operations.
    /// * `error` - the last error received from a request.
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop can use this value to adjust the next RPC
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
    ) -> Option<std::time::Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T: RetryPolicy + 'static> std::convert::From<T> for RetryPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl std::convert::From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Self {
        value.0
    }
}

/// A retry policy that strictly follows AIP-194.
///
/// The retry decision for service errors is based only on the status code,
/// and the only retryable status code is `UNAVAILABLE`. Transport errors
/// without a response are treated as retryable for idempotent operations,
/// as the request may never have reached the service.
///
/// This policy should be decorated (see [RetryPolicyExt]) to limit the number
/// of retry attempts or the duration of the retry loop.
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl RetryPolicy for Aip194Strict {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if !idempotent {
            return RetryResult::Permanent(error);
        }
        if let Some(status) = error.status() {
            return if status.code == Code::Unavailable {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            };
        }
        if error.is_io() || error.is_timeout() {
            return RetryResult::Continue(error);
        }
        RetryResult::Permanent(error)
    }
}

/// A retry policy that retries all errors.
///
/// Only useful when the application can guarantee the operations are safe to
/// repeat, e.g. requests guarded by etags.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that retries a fixed set of status codes.
///
/// This is the policy produced from the static per-method configuration
/// tables, see [method_config][crate::method_config].
#[derive(Clone, Debug)]
pub struct RetryableCodes {
    codes: &'static [Code],
}

impl RetryableCodes {
    pub fn new(codes: &'static [Code]) -> Self {
        Self { codes }
    }
}

impl RetryPolicy for RetryableCodes {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if !idempotent {
            return RetryResult::Permanent(error);
        }
        if let Some(status) = error.status() {
            return if self.codes.contains(&status.code) {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            };
        }
        if error.is_io() {
            return RetryResult::Continue(error);
        }
        RetryResult::Permanent(error)
    }
}

/// Extension trait to decorate retry policies with limits.
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorates the policy to stop after `maximum_attempts` attempts.
    ///
    /// # Example
    /// ```
    /// # use stratus_gax::retry_policy::*;
    /// let policy = Aip194Strict.with_attempt_limit(3);
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::new(self, maximum_attempts)
    }

    /// Decorates the policy to stop after `maximum_duration` has elapsed.
    ///
    /// # Example
    /// ```
    /// # use stratus_gax::retry_policy::*;
    /// use std::time::Duration;
    /// let policy = Aip194Strict.with_time_limit(Duration::from_secs(600));
    /// ```
    fn with_time_limit(self, maximum_duration: std::time::Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::new(self, maximum_duration)
    }
}

impl<T: RetryPolicy + Sized> RetryPolicyExt for T {}

/// A retry policy decorator that limits the number of attempts.
///
/// Once the loop reaches the maximum number of attempts this policy returns
/// [Exhausted][RetryResult::Exhausted]. Before that, it returns the result of
/// the inner policy.
#[derive(Clone, Debug)]
pub struct LimitedAttemptCount<P> {
    inner: P,
    maximum_attempts: u32,
}

impl<P> LimitedAttemptCount<P> {
    pub fn new(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if attempt_count >= self.maximum_attempts {
            return RetryResult::Exhausted(error);
        }
        self.inner
            .on_error(loop_start, attempt_count, idempotent, error)
    }

    fn remaining_time(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
    ) -> Option<std::time::Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

/// A retry policy decorator that limits the elapsed time of the loop.
///
/// Once the loop exceeds its duration limit this policy returns
/// [Exhausted][RetryResult::Exhausted]. Before the deadline is reached, it
/// returns the result of the inner policy.
#[derive(Clone, Debug)]
pub struct LimitedElapsedTime<P> {
    inner: P,
    maximum_duration: std::time::Duration,
}

impl<P> LimitedElapsedTime<P> {
    pub fn new(inner: P, maximum_duration: std::time::Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if loop_start.elapsed() >= self.maximum_duration {
            return RetryResult::Exhausted(error);
        }
        self.inner
            .on_error(loop_start, attempt_count, idempotent, error)
    }

    fn remaining_time(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
    ) -> Option<std::time::Duration> {
        let remaining = self.maximum_duration.saturating_sub(loop_start.elapsed());
        match self.inner.remaining_time(loop_start, attempt_count) {
            Some(inner) => Some(std::cmp::min(remaining, inner)),
            None => Some(remaining),
        }
    }
}
