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

use crate::builder;
use std::sync::Arc;

/// Implements a client for the Private Catalog API.
///
/// # Example
/// ```
/// # use stratus_privatecatalog_v1::client::PrivateCatalog;
/// # async fn sample(client: &PrivateCatalog) -> stratus_privatecatalog_v1::Result<()> {
/// let mut items = client
///     .search_catalogs()
///     .set_resource("projects/my-project")
///     .by_item();
/// while let Some(catalog) = items.next().await.transpose()? {
///     println!("{}", catalog.name);
/// }
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// `PrivateCatalog` allows catalog consumers to retrieve `Catalog`, `Product`
/// and `Version` resources under a target resource context.
///
/// # Configuration
///
/// This client is built from an implementation of
/// [stub::PrivateCatalog][crate::stub::PrivateCatalog], the seam where a
/// transport plugs in. Per-call retry, backoff, and timeout defaults come
/// from the service configuration and can be overridden on each request
/// builder via [RequestOptionsBuilder][gax::options::RequestOptionsBuilder].
///
/// # Pooling and Cloning
///
/// `PrivateCatalog` holds its stub in an [Arc], so cloning the client is
/// cheap and clones share the same underlying connection.
#[derive(Clone, Debug)]
pub struct PrivateCatalog {
    inner: Arc<dyn crate::stub::PrivateCatalog>,
}

impl PrivateCatalog {
    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::PrivateCatalog + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Searches `Catalog` resources that consumers have access to, within the
    /// scope of the resource context.
    pub fn search_catalogs(&self) -> builder::private_catalog::SearchCatalogs {
        builder::private_catalog::SearchCatalogs::new(self.inner.clone())
    }

    /// Searches `Product` resources that consumers have access to, within the
    /// scope of the resource context.
    pub fn search_products(&self) -> builder::private_catalog::SearchProducts {
        builder::private_catalog::SearchProducts::new(self.inner.clone())
    }

    /// Searches `Version` resources that consumers have access to, within the
    /// scope of the resource context.
    pub fn search_versions(&self) -> builder::private_catalog::SearchVersions {
        builder::private_catalog::SearchVersions::new(self.inner.clone())
    }
}
