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

/// Request builders for [PrivateCatalog][crate::client::PrivateCatalog].
pub mod private_catalog {
    use crate::Result;
    use crate::model;
    use crate::service_config;
    use gax::options::RequestOptions;
    use gax::paginator::{ItemPaginator, Paginator};
    use std::sync::Arc;

    /// The common fields of all the request builders in this module.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::PrivateCatalog>,
        request: R,
        options: RequestOptions,
    }

    impl<R: std::default::Default> RequestBuilder<R> {
        pub(crate) fn new(stub: Arc<dyn crate::stub::PrivateCatalog>, method: &str) -> Self {
            Self {
                stub,
                request: R::default(),
                options: service_config::default_options(method),
            }
        }
    }

    /// The request builder for
    /// [PrivateCatalog::search_catalogs][crate::client::PrivateCatalog::search_catalogs]
    /// calls.
    ///
    /// # Example
    /// ```
    /// # use stratus_privatecatalog_v1::builder::private_catalog::SearchCatalogs;
    /// # async fn sample(builder: SearchCatalogs) -> stratus_privatecatalog_v1::Result<()> {
    /// let mut pages = builder.set_resource("projects/my-project").by_page();
    /// while let Some(page) = pages.next().await.transpose()? {
    ///     println!("{} catalogs in this page", page.catalogs.len());
    /// }
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct SearchCatalogs(RequestBuilder<model::SearchCatalogsRequest>);

    impl SearchCatalogs {
        pub(crate) fn new(stub: Arc<dyn crate::stub::PrivateCatalog>) -> Self {
            Self(RequestBuilder::new(stub, "SearchCatalogs"))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::SearchCatalogsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [resource][model::SearchCatalogsRequest::resource].
        pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource = v.into();
            self
        }

        /// Sets the value of [query][model::SearchCatalogsRequest::query].
        pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.query = v.into();
            self
        }

        /// Sets the value of [page_size][model::SearchCatalogsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][model::SearchCatalogsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sends the request, returning a single page of results.
        pub async fn send(self) -> Result<model::SearchCatalogsResponse> {
            tracing::debug!(
                method = "SearchCatalogs",
                resource = %self.0.request.resource,
                "dispatching request"
            );
            self.0.stub.search_catalogs(self.0.request, self.0.options).await
        }

        /// Streams each page in the collection.
        ///
        /// The first network call is only issued when the stream is first
        /// polled, and each subsequent page is fetched on demand.
        pub fn by_page(self) -> Paginator<model::SearchCatalogsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection, fetching new pages as needed.
        pub fn by_item(self) -> ItemPaginator<model::SearchCatalogsResponse, gax::error::Error> {
            self.by_page().items()
        }
    }

    impl gax::options::internal::RequestBuilder for SearchCatalogs {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for
    /// [PrivateCatalog::search_products][crate::client::PrivateCatalog::search_products]
    /// calls.
    #[derive(Clone, Debug)]
    pub struct SearchProducts(RequestBuilder<model::SearchProductsRequest>);

    impl SearchProducts {
        pub(crate) fn new(stub: Arc<dyn crate::stub::PrivateCatalog>) -> Self {
            Self(RequestBuilder::new(stub, "SearchProducts"))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::SearchProductsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [resource][model::SearchProductsRequest::resource].
        pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource = v.into();
            self
        }

        /// Sets the value of [query][model::SearchProductsRequest::query].
        pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.query = v.into();
            self
        }

        /// Sets the value of [page_size][model::SearchProductsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][model::SearchProductsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sends the request, returning a single page of results.
        pub async fn send(self) -> Result<model::SearchProductsResponse> {
            tracing::debug!(
                method = "SearchProducts",
                resource = %self.0.request.resource,
                "dispatching request"
            );
            self.0.stub.search_products(self.0.request, self.0.options).await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> Paginator<model::SearchProductsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection, fetching new pages as needed.
        pub fn by_item(self) -> ItemPaginator<model::SearchProductsResponse, gax::error::Error> {
            self.by_page().items()
        }
    }

    impl gax::options::internal::RequestBuilder for SearchProducts {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for
    /// [PrivateCatalog::search_versions][crate::client::PrivateCatalog::search_versions]
    /// calls.
    #[derive(Clone, Debug)]
    pub struct SearchVersions(RequestBuilder<model::SearchVersionsRequest>);

    impl SearchVersions {
        pub(crate) fn new(stub: Arc<dyn crate::stub::PrivateCatalog>) -> Self {
            Self(RequestBuilder::new(stub, "SearchVersions"))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::SearchVersionsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [resource][model::SearchVersionsRequest::resource].
        pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource = v.into();
            self
        }

        /// Sets the value of [query][model::SearchVersionsRequest::query].
        pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.query = v.into();
            self
        }

        /// Sets the value of [page_size][model::SearchVersionsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][model::SearchVersionsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sends the request, returning a single page of results.
        pub async fn send(self) -> Result<model::SearchVersionsResponse> {
            tracing::debug!(
                method = "SearchVersions",
                resource = %self.0.request.resource,
                "dispatching request"
            );
            self.0.stub.search_versions(self.0.request, self.0.options).await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> Paginator<model::SearchVersionsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection, fetching new pages as needed.
        pub fn by_item(self) -> ItemPaginator<model::SearchVersionsResponse, gax::error::Error> {
            self.by_page().items()
        }
    }

    impl gax::options::internal::RequestBuilder for SearchVersions {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
