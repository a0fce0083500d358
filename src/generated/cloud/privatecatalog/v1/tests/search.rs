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

//! Tests the client surface against an in-memory stub.

use gax::error::rpc::{Code, Status};
use gax::options::{RequestOptions, RequestOptionsBuilder};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use stratus_privatecatalog_v1::client::PrivateCatalog;
use stratus_privatecatalog_v1::model;
use stratus_privatecatalog_v1::{Error, Result};

/// A scripted `SearchCatalogs` implementation recording each request.
#[derive(Clone, Debug, Default)]
struct FakePrivateCatalog {
    responses: Arc<Mutex<VecDeque<Result<model::SearchCatalogsResponse>>>>,
    requests: Arc<Mutex<Vec<(model::SearchCatalogsRequest, RequestOptions)>>>,
}

impl FakePrivateCatalog {
    fn with_responses(responses: Vec<Result<model::SearchCatalogsResponse>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            ..Default::default()
        }
    }

    fn requests(&self) -> Vec<(model::SearchCatalogsRequest, RequestOptions)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl stratus_privatecatalog_v1::stub::PrivateCatalog for FakePrivateCatalog {
    async fn search_catalogs(
        &self,
        req: model::SearchCatalogsRequest,
        options: RequestOptions,
    ) -> Result<model::SearchCatalogsResponse> {
        self.requests.lock().unwrap().push((req, options));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(Error::service(
                    Status::default()
                        .set_code(Code::Internal)
                        .set_message("no scripted response"),
                ))
            })
    }

    async fn search_products(
        &self,
        _req: model::SearchProductsRequest,
        _options: RequestOptions,
    ) -> Result<model::SearchProductsResponse> {
        unimplemented!("not used by these tests")
    }

    async fn search_versions(
        &self,
        _req: model::SearchVersionsRequest,
        _options: RequestOptions,
    ) -> Result<model::SearchVersionsResponse> {
        unimplemented!("not used by these tests")
    }
}

fn catalogs(names: &[&str]) -> Vec<model::Catalog> {
    names
        .iter()
        .map(|name| model::Catalog::new().set_name(*name))
        .collect()
}

fn four_pages() -> Vec<Result<model::SearchCatalogsResponse>> {
    vec![
        Ok(model::SearchCatalogsResponse::new()
            .set_catalogs(catalogs(&["catalogs/c1", "catalogs/c2", "catalogs/c3"]))
            .set_next_page_token("abc")),
        Ok(model::SearchCatalogsResponse::new().set_next_page_token("def")),
        Ok(model::SearchCatalogsResponse::new()
            .set_catalogs(catalogs(&["catalogs/c4"]))
            .set_next_page_token("ghi")),
        Ok(model::SearchCatalogsResponse::new()
            .set_catalogs(catalogs(&["catalogs/c5", "catalogs/c6"]))),
    ]
}

#[tokio::test]
async fn send_returns_a_single_page() -> anyhow::Result<()> {
    let stub = FakePrivateCatalog::with_responses(four_pages());
    let client = PrivateCatalog::from_stub(stub.clone());

    let page = client
        .search_catalogs()
        .set_resource("projects/test-project")
        .set_page_size(3)
        .send()
        .await?;
    assert_eq!(page.catalogs.len(), 3);
    assert_eq!(page.next_page_token, "abc");
    assert_eq!(stub.requests().len(), 1);
    Ok(())
}

#[tokio::test]
async fn by_item_walks_every_page() -> anyhow::Result<()> {
    let stub = FakePrivateCatalog::with_responses(four_pages());
    let client = PrivateCatalog::from_stub(stub.clone());

    let mut items = client
        .search_catalogs()
        .set_resource("projects/test-project")
        .set_page_size(3)
        .by_item();
    let mut names = Vec::new();
    while let Some(catalog) = items.next().await.transpose()? {
        names.push(catalog.name);
    }
    assert_eq!(
        names,
        [
            "catalogs/c1",
            "catalogs/c2",
            "catalogs/c3",
            "catalogs/c4",
            "catalogs/c5",
            "catalogs/c6"
        ]
    );
    assert_eq!(stub.requests().len(), 4);
    Ok(())
}

#[tokio::test]
async fn by_page_propagates_tokens_and_fields() -> anyhow::Result<()> {
    let stub = FakePrivateCatalog::with_responses(four_pages());
    let client = PrivateCatalog::from_stub(stub.clone());

    let mut pages = client
        .search_catalogs()
        .set_resource("projects/test-project")
        .set_query("name=catalogs/c1")
        .set_page_size(3)
        .by_page();
    while pages.next().await.transpose()?.is_some() {}

    let requests = stub.requests();
    assert_eq!(requests.len(), 4);
    let tokens = requests
        .iter()
        .map(|(r, _)| r.page_token.clone())
        .collect::<Vec<_>>();
    assert_eq!(tokens, ["", "abc", "def", "ghi"]);
    for (request, _) in requests {
        assert_eq!(request.resource, "projects/test-project");
        assert_eq!(request.query, "name=catalogs/c1");
        assert_eq!(request.page_size, 3);
    }
    Ok(())
}

#[tokio::test]
async fn no_request_before_first_poll() {
    let stub = FakePrivateCatalog::with_responses(four_pages());
    let client = PrivateCatalog::from_stub(stub.clone());

    let _pages = client
        .search_catalogs()
        .set_resource("projects/test-project")
        .by_page();
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn error_mid_iteration_ends_the_stream() {
    let stub = FakePrivateCatalog::with_responses(vec![
        Ok(model::SearchCatalogsResponse::new()
            .set_catalogs(catalogs(&["catalogs/c1"]))
            .set_next_page_token("abc")),
        Err(Error::service(
            Status::default()
                .set_code(Code::Unavailable)
                .set_message("simulated outage"),
        )),
    ]);
    let client = PrivateCatalog::from_stub(stub.clone());

    let mut items = client
        .search_catalogs()
        .set_resource("projects/test-project")
        .by_item();
    assert_eq!(items.next().await.unwrap().unwrap().name, "catalogs/c1");
    let err = items.next().await.unwrap().unwrap_err();
    assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
    assert!(items.next().await.is_none());
    assert_eq!(stub.requests().len(), 2);
}

#[tokio::test]
async fn default_options_reach_the_stub() -> anyhow::Result<()> {
    let stub = FakePrivateCatalog::with_responses(vec![Ok(
        model::SearchCatalogsResponse::new(),
    )]);
    let client = PrivateCatalog::from_stub(stub.clone());

    client
        .search_catalogs()
        .set_resource("projects/test-project")
        .send()
        .await?;

    let (_, options) = stub.requests().pop().unwrap();
    assert_eq!(options.idempotent(), Some(true));
    assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(20)));
    assert!(options.retry_policy().is_some());
    assert!(options.backoff_policy().is_some());
    Ok(())
}

#[tokio::test]
async fn per_call_overrides_replace_the_defaults() -> anyhow::Result<()> {
    let stub = FakePrivateCatalog::with_responses(vec![Ok(
        model::SearchCatalogsResponse::new(),
    )]);
    let client = PrivateCatalog::from_stub(stub.clone());

    client
        .search_catalogs()
        .set_resource("projects/test-project")
        .with_idempotency(false)
        .with_attempt_timeout(Duration::from_secs(5))
        .send()
        .await?;

    let (_, options) = stub.requests().pop().unwrap();
    assert_eq!(options.idempotent(), Some(false));
    assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(5)));
    Ok(())
}

#[tokio::test]
async fn per_call_metadata_reaches_the_stub() -> anyhow::Result<()> {
    let stub = FakePrivateCatalog::with_responses(vec![Ok(
        model::SearchCatalogsResponse::new(),
    )]);
    let client = PrivateCatalog::from_stub(stub.clone());

    let mut headers = http::HeaderMap::new();
    headers.insert("x-request-reason", http::HeaderValue::from_static("audit"));
    client
        .search_catalogs()
        .set_resource("projects/test-project")
        .with_metadata(headers.clone())
        .send()
        .await?;

    let (_, options) = stub.requests().pop().unwrap();
    assert_eq!(options.metadata(), &headers);
    Ok(())
}

#[tokio::test]
async fn with_request_replaces_prior_fields() -> anyhow::Result<()> {
    let stub = FakePrivateCatalog::with_responses(vec![Ok(
        model::SearchCatalogsResponse::new(),
    )]);
    let client = PrivateCatalog::from_stub(stub.clone());

    let request = model::SearchCatalogsRequest::new()
        .set_resource("folders/f1")
        .set_page_size(7);
    client
        .search_catalogs()
        .set_resource("projects/overwritten")
        .with_request(request.clone())
        .send()
        .await?;

    let (got, _) = stub.requests().pop().unwrap();
    assert_eq!(got, request);
    Ok(())
}
