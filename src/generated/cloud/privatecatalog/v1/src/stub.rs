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

//! The transport seam for the Private Catalog client.

use crate::Result;
use crate::model;
use gax::options::RequestOptions;

/// Defines the trait used to implement
/// [crate::client::PrivateCatalog].
///
/// Application developers may need to implement this trait to mock
/// `client::PrivateCatalog`. In other use-cases, application developers only
/// use `client::PrivateCatalog` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new
/// methods too.
#[async_trait::async_trait]
pub trait PrivateCatalog: std::fmt::Debug + Send + Sync {
    /// Implements
    /// [crate::client::PrivateCatalog::search_catalogs].
    async fn search_catalogs(
        &self,
        req: model::SearchCatalogsRequest,
        options: RequestOptions,
    ) -> Result<model::SearchCatalogsResponse>;

    /// Implements
    /// [crate::client::PrivateCatalog::search_products].
    async fn search_products(
        &self,
        req: model::SearchProductsRequest,
        options: RequestOptions,
    ) -> Result<model::SearchProductsResponse>;

    /// Implements
    /// [crate::client::PrivateCatalog::search_versions].
    async fn search_versions(
        &self,
        req: model::SearchVersionsRequest,
        options: RequestOptions,
    ) -> Result<model::SearchVersionsResponse>;
}
