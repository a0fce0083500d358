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

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a response type that can be iterated over with a [Paginator].
///
/// All `List*` RPC responses carry an ordered sequence of result items and an
/// opaque `next_page_token`. An empty token means there are no further pages.
pub trait PageableResponse {
    /// The type of the items in the repeated field of the page.
    type PageItem;

    /// Consumes the page and returns its items, in order.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token for the page after this one. Empty means no further pages.
    fn next_page_token(&self) -> String;
}

/// An adapter that converts list RPCs into a [futures::Stream] of pages.
///
/// The paginator is lazy: the first RPC is issued when the first page is
/// requested, and each page transition performs exactly one call. Errors from
/// the underlying call are yielded in place and end the stream; the stream
/// never retries on its own.
///
/// A paginator is a single forward cursor. It terminates when a response
/// carries an empty `next_page_token`. If a misbehaving service returns the
/// same non-empty token forever the stream is infinite; no repetition guard
/// is applied.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    ///
    /// The `execute` closure captures the initial request and any per-call
    /// metadata; it receives the page token for the next call and must send
    /// a request identical to the original except for the `page_token` field.
    pub fn new<F>(
        seed_token: String,
        execute: impl Fn(String) -> F + Clone + Send + 'static,
    ) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let tok = page.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        // `unfold` panics if polled again after completion; fusing makes
        // polling past the end return `None` instead.
        Self {
            stream: Box::pin(stream.fuse()),
        }
    }

    /// Returns the next page of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the page stream into a flat stream of its items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// An adapter that flattens a [Paginator] into its items.
///
/// The current page is drained before the next one is fetched, so the item
/// order is page order, then item order within a page. An error from the
/// underlying call is yielded once, at the point the failing fetch was
/// reached, and ends the iteration.
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    pages: Paginator<T, E>,
    current: Option<std::vec::IntoIter<T::PageItem>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse,
{
    pub(crate) fn new(pages: Paginator<T, E>) -> Self {
        Self {
            pages,
            current: None,
        }
    }

    /// Returns the next item, fetching a new page when the current one is
    /// exhausted.
    pub async fn next(&mut self) -> Option<Result<T::PageItem, E>> {
        loop {
            if let Some(iter) = self.current.as_mut() {
                if let Some(item) = iter.next() {
                    return Some(Ok(item));
                }
            }
            match self.pages.next().await {
                Some(Ok(page)) => {
                    self.current = Some(page.items().into_iter());
                }
                Some(Err(e)) => return Some(Err(e)),
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct TestRequest {
        page_token: String,
    }

    struct TestResponse {
        items: Vec<PageItem>,
        next_page_token: String,
    }

    #[derive(Clone)]
    struct PageItem {
        name: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = PageItem;

        fn items(self) -> Vec<PageItem> {
            self.items
        }

        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn page(names: &[&str], token: &str) -> TestResponse {
        TestResponse {
            items: names
                .iter()
                .map(|name| PageItem {
                    name: name.to_string(),
                })
                .collect(),
            next_page_token: token.to_string(),
        }
    }

    #[derive(Clone)]
    struct Client {
        responses: Arc<Mutex<VecDeque<TestResponse>>>,
        call_count: Arc<AtomicUsize>,
    }

    impl Client {
        fn new(responses: Vec<TestResponse>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(VecDeque::from(responses))),
                call_count: Arc::new(AtomicUsize::new(0)),
            }
        }

        async fn list_rpc(&self, _req: TestRequest) -> Result<TestResponse, String> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| "no more responses".to_string())
        }

        fn list_rpc_stream(&self, req: TestRequest) -> Paginator<TestResponse, String> {
            let client = self.clone();
            let tok = req.page_token.clone();
            let execute = move |token| {
                let mut req = req.clone();
                let client = client.clone();
                req.page_token = token;
                async move { client.list_rpc(req).await }
            };
            Paginator::new(tok, execute)
        }
    }

    #[tokio::test]
    async fn paginator_by_page() {
        let client = Client::new(vec![page(&["item1", "item2"], "token2"), page(&["item3"], "")]);
        let mut stream = client.list_rpc_stream(TestRequest::default());
        let mut pages = vec![];
        while let Some(result) = stream.next().await {
            pages.push(result.unwrap());
        }
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].items[0].name, "item1");
        assert_eq!(pages[0].items[1].name, "item2");
        assert_eq!(pages[1].items[0].name, "item3");
        assert_eq!(client.call_count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn paginator_token_propagation() {
        let mut expected_tokens = VecDeque::new();
        expected_tokens.push_back("token1".to_string());
        expected_tokens.push_back("token2".to_string());
        let mut responses = VecDeque::new();
        responses.push_back(page(&["item1", "item2"], "token2"));
        responses.push_back(page(&["item3"], ""));

        let state = Arc::new(Mutex::new(responses));
        let tokens = Arc::new(Mutex::new(expected_tokens));
        let execute = move |token: String| {
            let expected = tokens.lock().unwrap().pop_front().unwrap();
            assert_eq!(token, expected);
            let resp = state.lock().unwrap().pop_front().unwrap();
            async move { Ok::<_, String>(resp) }
        };

        let mut stream = Paginator::new("token1".to_string(), execute);
        let mut count = 0;
        while let Some(result) = stream.next().await {
            assert!(result.is_ok());
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn paginator_is_lazy() {
        let client = Client::new(vec![page(&["item1"], "")]);
        let mut stream = client.list_rpc_stream(TestRequest::default());
        assert_eq!(client.call_count.load(Ordering::SeqCst), 0);
        let _ = stream.next().await;
        assert_eq!(client.call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn paginator_fused_after_exhaustion() {
        let client = Client::new(vec![page(&["item1"], "")]);
        let mut stream = client.list_rpc_stream(TestRequest::default());
        assert!(stream.next().await.is_some());
        assert!(stream.next().await.is_none());
        assert!(stream.next().await.is_none());
        // No further calls are made after the terminal page.
        assert_eq!(client.call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn paginator_error() {
        let execute = |_| async { Err::<TestResponse, String>("err".to_string()) };
        let mut paginator = Paginator::new(String::new(), execute);
        let mut count = 0;
        while let Some(result) = paginator.next().await {
            match result {
                Ok(_) => panic!("should not succeed"),
                Err(e) => {
                    assert_eq!(&e, "err");
                    count += 1;
                }
            }
        }
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn paginator_fused_after_error() {
        let execute = |_| async { Err::<TestResponse, String>("err".to_string()) };
        let mut paginator = Paginator::new(String::new(), execute);
        assert!(matches!(paginator.next().await, Some(Err(_))));
        assert!(paginator.next().await.is_none());
        assert!(paginator.next().await.is_none());
    }

    #[tokio::test]
    async fn item_paginator_flattens_pages() {
        let client = Client::new(vec![
            page(&["item1", "item2", "item3"], "abc"),
            page(&[], "def"),
            page(&["item4"], "ghi"),
            page(&["item5", "item6"], ""),
        ]);
        let mut items = client.list_rpc_stream(TestRequest::default()).items();
        let mut names = vec![];
        while let Some(item) = items.next().await {
            names.push(item.unwrap().name);
        }
        assert_eq!(names, ["item1", "item2", "item3", "item4", "item5", "item6"]);
        assert_eq!(client.call_count.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn item_paginator_error_mid_iteration() {
        let responses = Arc::new(Mutex::new(VecDeque::from(vec![page(
            &["item1", "item2"],
            "token2",
        )])));
        let execute = move |_token: String| {
            let next = responses.lock().unwrap().pop_front();
            async move { next.ok_or_else(|| "boom".to_string()) }
        };
        let mut items = Paginator::new(String::new(), execute).items();
        assert_eq!(items.next().await.unwrap().unwrap().name, "item1");
        assert_eq!(items.next().await.unwrap().unwrap().name, "item2");
        match items.next().await {
            Some(Err(e)) => assert_eq!(&e, "boom"),
            _ => panic!("expected the transport error"),
        }
        assert!(items.next().await.is_none());
    }
}
