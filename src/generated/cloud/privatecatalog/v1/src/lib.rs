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

//! Stratus Cloud client library for the Private Catalog API.
//!
//! The Private Catalog API lets organizations browse the catalogs, products,
//! and versions shared with them. All three search operations are paginated;
//! the request builders expose the results as a single page ([send]), a
//! stream of pages ([by_page]), or a stream of items ([by_item]).
//!
//! [send]: crate::builder::private_catalog::SearchCatalogs::send
//! [by_page]: crate::builder::private_catalog::SearchCatalogs::by_page
//! [by_item]: crate::builder::private_catalog::SearchCatalogs::by_item

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod model;
pub mod stub;

mod service_config;
