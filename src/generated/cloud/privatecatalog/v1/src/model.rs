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

//! The messages exchanged with the Private Catalog service.

use gax::paginator::PageableResponse;

/// The readonly representation of a catalog computed with a given resource
/// context.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Catalog {
    /// Output only. The resource name of the target catalog, in the format
    /// `catalogs/{catalog}`.
    pub name: String,

    /// Output only. The descriptive name of the catalog as it appears in UIs.
    pub display_name: String,

    /// Output only. The description of the catalog.
    pub description: String,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Catalog::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][Catalog::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [description][Catalog::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }
}

/// The readonly representation of a product computed with a given resource
/// context.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Product {
    /// Output only. The resource name of the target product, in the format
    /// `products/{product}`.
    pub name: String,

    /// Output only. The type of the product asset, e.g.
    /// `stratus.cloud.privatecatalog.DeploymentTemplate`.
    pub asset_type: String,

    /// Output only. The icon URI of the product.
    pub icon_uri: String,
}

impl Product {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Product::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [asset_type][Product::asset_type].
    pub fn set_asset_type<T: Into<String>>(mut self, v: T) -> Self {
        self.asset_type = v.into();
        self
    }

    /// Sets the value of [icon_uri][Product::icon_uri].
    pub fn set_icon_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.icon_uri = v.into();
        self
    }
}

/// The consumer representation of a version which is a child resource under a
/// `Product` with asset data.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Version {
    /// Output only. The resource name of the version, in the format
    /// `catalogs/{catalog}/products/{product}/versions/{version}`.
    pub name: String,

    /// Output only. The user-supplied description of the version.
    pub description: String,
}

impl Version {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Version::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][Version::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }
}

/// Request message for
/// [PrivateCatalog::search_catalogs][crate::client::PrivateCatalog::search_catalogs].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchCatalogsRequest {
    /// Required. The name of the resource context. It can be in following
    /// formats: `projects/{project}`, `folders/{folder}`, or
    /// `organizations/{organization}`.
    pub resource: String,

    /// The query to filter the catalogs. The supported queries are:
    /// `name=catalogs/{catalog}`.
    pub query: String,

    /// The maximum number of entries that are requested.
    pub page_size: i32,

    /// A pagination token returned from a previous call to `SearchCatalogs`
    /// that indicates where this listing should continue from.
    pub page_token: String,
}

impl SearchCatalogsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource][SearchCatalogsRequest::resource].
    pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
        self.resource = v.into();
        self
    }

    /// Sets the value of [query][SearchCatalogsRequest::query].
    pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
        self.query = v.into();
        self
    }

    /// Sets the value of [page_size][SearchCatalogsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][SearchCatalogsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Response message for
/// [PrivateCatalog::search_catalogs][crate::client::PrivateCatalog::search_catalogs].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchCatalogsResponse {
    /// The `Catalog`s computed from the resource context.
    pub catalogs: Vec<Catalog>,

    /// A pagination token returned from a previous call to `SearchCatalogs`
    /// that indicates from where listing should continue.
    pub next_page_token: String,
}

impl SearchCatalogsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalogs][SearchCatalogsResponse::catalogs].
    pub fn set_catalogs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Catalog>,
    {
        self.catalogs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [next_page_token][SearchCatalogsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for SearchCatalogsResponse {
    type PageItem = Catalog;

    fn items(self) -> Vec<Catalog> {
        self.catalogs
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for
/// [PrivateCatalog::search_products][crate::client::PrivateCatalog::search_products].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchProductsRequest {
    /// Required. The name of the resource context.
    pub resource: String,

    /// The query to filter the products. The supported queries are:
    /// `name=products/{product}`.
    pub query: String,

    /// The maximum number of entries that are requested.
    pub page_size: i32,

    /// A pagination token returned from a previous call to `SearchProducts`
    /// that indicates where this listing should continue from.
    pub page_token: String,
}

impl SearchProductsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource][SearchProductsRequest::resource].
    pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
        self.resource = v.into();
        self
    }

    /// Sets the value of [query][SearchProductsRequest::query].
    pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
        self.query = v.into();
        self
    }

    /// Sets the value of [page_size][SearchProductsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][SearchProductsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Response message for
/// [PrivateCatalog::search_products][crate::client::PrivateCatalog::search_products].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchProductsResponse {
    /// The `Product`s computed from the resource context.
    pub products: Vec<Product>,

    /// A pagination token returned from a previous call to `SearchProducts`
    /// that indicates from where listing should continue.
    pub next_page_token: String,
}

impl SearchProductsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [products][SearchProductsResponse::products].
    pub fn set_products<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Product>,
    {
        self.products = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [next_page_token][SearchProductsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for SearchProductsResponse {
    type PageItem = Product;

    fn items(self) -> Vec<Product> {
        self.products
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for
/// [PrivateCatalog::search_versions][crate::client::PrivateCatalog::search_versions].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchVersionsRequest {
    /// Required. The name of the resource context.
    pub resource: String,

    /// Required. The query to filter the versions. The supported queries are:
    /// `version=versions/{version}` or `parent=products/{product}`.
    pub query: String,

    /// The maximum number of entries that are requested.
    pub page_size: i32,

    /// A pagination token returned from a previous call to `SearchVersions`
    /// that indicates where this listing should continue from.
    pub page_token: String,
}

impl SearchVersionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource][SearchVersionsRequest::resource].
    pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
        self.resource = v.into();
        self
    }

    /// Sets the value of [query][SearchVersionsRequest::query].
    pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
        self.query = v.into();
        self
    }

    /// Sets the value of [page_size][SearchVersionsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][SearchVersionsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Response message for
/// [PrivateCatalog::search_versions][crate::client::PrivateCatalog::search_versions].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchVersionsResponse {
    /// The `Version`s computed from the resource context.
    pub versions: Vec<Version>,

    /// A pagination token returned from a previous call to `SearchVersions`
    /// that indicates from where the listing should continue.
    pub next_page_token: String,
}

impl SearchVersionsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [versions][SearchVersionsResponse::versions].
    pub fn set_versions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Version>,
    {
        self.versions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [next_page_token][SearchVersionsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for SearchVersionsResponse {
    type PageItem = Version;

    fn items(self) -> Vec<Version> {
        self.versions
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}
