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

//! Blocking counterparts of the [paginator][crate::paginator] adapters.
//!
//! These adapters drive the same fetch-and-advance state machine as the
//! asynchronous [Paginator][crate::paginator::Paginator], expressed as
//! standard iterators for clients that issue blocking calls.

use crate::paginator::PageableResponse;

type ControlFlow = std::ops::ControlFlow<(), String>;

/// A lazy, forward-only iterator over the pages of a list RPC.
///
/// The pager holds a cursor (the next page token) and a closure that issues
/// the underlying call. No call is made until the first page is requested,
/// and each page transition performs exactly one call. An error ends the
/// iteration after it is yielded; the iterator is fused and yields `None`
/// forever once exhausted.
///
/// A pager cannot be restarted. To re-scan a list, invoke the originating
/// list call again and obtain a fresh pager.
pub struct Pager<T, E> {
    state: ControlFlow,
    execute: Box<dyn FnMut(String) -> Result<T, E> + Send>,
}

impl<T, E> Pager<T, E>
where
    T: PageableResponse,
{
    /// Creates a new [Pager] given the initial page token and a function to
    /// fetch the next [PageableResponse].
    ///
    /// As with the asynchronous variant, `execute` captures the initial
    /// request and any per-call metadata, and must issue a request identical
    /// to the original except for the `page_token` field.
    pub fn new(
        seed_token: String,
        execute: impl FnMut(String) -> Result<T, E> + Send + 'static,
    ) -> Self {
        Self {
            state: ControlFlow::Continue(seed_token),
            execute: Box::new(execute),
        }
    }

    /// Converts the page iterator into a flat iterator over its items.
    pub fn items(self) -> ItemPager<T, E> {
        ItemPager::new(self)
    }
}

impl<T, E> Iterator for Pager<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = match std::mem::replace(&mut self.state, ControlFlow::Break(())) {
            ControlFlow::Continue(token) => token,
            ControlFlow::Break(_) => return None,
        };
        match (self.execute)(token) {
            Ok(page) => {
                let tok = page.next_page_token();
                if !tok.is_empty() {
                    self.state = ControlFlow::Continue(tok);
                }
                Some(Ok(page))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl<T, E> std::iter::FusedIterator for Pager<T, E> where T: PageableResponse {}

/// An adapter that flattens a [Pager] into its items.
///
/// The current page is drained before the next one is fetched. An error from
/// the underlying call is yielded once, at the point the failing fetch was
/// reached, and ends the iteration.
pub struct ItemPager<T, E>
where
    T: PageableResponse,
{
    pages: Pager<T, E>,
    current: Option<std::vec::IntoIter<T::PageItem>>,
}

impl<T, E> ItemPager<T, E>
where
    T: PageableResponse,
{
    pub(crate) fn new(pages: Pager<T, E>) -> Self {
        Self {
            pages,
            current: None,
        }
    }
}

impl<T, E> Iterator for ItemPager<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(iter) = self.current.as_mut() {
                if let Some(item) = iter.next() {
                    return Some(Ok(item));
                }
            }
            match self.pages.next() {
                Some(Ok(page)) => self.current = Some(page.items().into_iter()),
                Some(Err(e)) => return Some(Err(e)),
                None => return None,
            }
        }
    }
}

impl<T, E> std::iter::FusedIterator for ItemPager<T, E> where T: PageableResponse {}
