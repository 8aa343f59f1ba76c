// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`filter`]: Listing filters ([`Species`](filter::Species),
//!   [`Region`](filter::Region), [`FilterSelection`](filter::FilterSelection))
//! - [`route`]: Navigation targets ([`Route`](route::Route),
//!   [`ListingQuery`](route::ListingQuery))

pub mod filter;
pub mod route;
