// SPDX-License-Identifier: MPL-2.0
//! Application routes and the listing query contract.
//!
//! Routes keep a path form (`/`, `/profile`, ...) so navigation can be
//! logged and asserted on. The home listing accepts a query of the form
//! `type=<species>&area=<region>&page=<n>` with canonical labels.

use super::filter::{FilterSelection, Region, Species};

/// First page of a listing.
pub const FIRST_PAGE: u32 = 1;

// =============================================================================
// Listing Query
// =============================================================================

/// Query carried by the home listing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingQuery {
    pub filter: FilterSelection,
    /// 1-based page number.
    pub page: u32,
}

impl ListingQuery {
    /// First page of the listing for `filter`.
    #[must_use]
    pub fn first_page(filter: FilterSelection) -> Self {
        Self {
            filter,
            page: FIRST_PAGE,
        }
    }

    /// Encodes as `type=..&area=..&page=..`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!(
            "type={}&area={}&page={}",
            self.filter.species.label(),
            self.filter.region.label(),
            self.page
        )
    }

    /// Parses a query string. Unknown keys are ignored; missing or invalid
    /// components fall back to their defaults.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::first_page(FilterSelection::default());

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "type" => {
                    if let Some(species) = Species::from_label(value) {
                        parsed.filter.species = species;
                    }
                }
                "area" => {
                    if let Some(region) = Region::from_label(value) {
                        parsed.filter.region = region;
                    }
                }
                "page" => {
                    if let Some(page) = value.parse::<u32>().ok().filter(|p| *p >= FIRST_PAGE) {
                        parsed.page = page;
                    }
                }
                _ => {}
            }
        }

        parsed
    }
}

// =============================================================================
// Route
// =============================================================================

/// Pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Root listing (home feed), optionally narrowed by a query.
    Home(Option<ListingQuery>),
    FindShelter,
    Register,
    Profile,
}

impl Default for Route {
    fn default() -> Self {
        Self::Home(None)
    }
}

impl Route {
    /// Path form including the query string, if any.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Home(None) => "/".to_string(),
            Self::Home(Some(query)) => format!("/?{}", query.to_query_string()),
            Self::FindShelter => "/find-shelter".to_string(),
            Self::Register => "/register".to_string(),
            Self::Profile => "/profile".to_string(),
        }
    }

    /// Path without the query string.
    #[must_use]
    pub fn path_name(&self) -> &'static str {
        match self {
            Self::Home(_) => "/",
            Self::FindShelter => "/find-shelter",
            Self::Register => "/register",
            Self::Profile => "/profile",
        }
    }

    /// Parses a path. Unknown paths are rejected.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let (path_name, query) = match path.split_once('?') {
            Some((name, query)) => (name, Some(query)),
            None => (path, None),
        };

        match path_name {
            "/" | "" => Some(match query {
                Some(q) if !q.is_empty() => Self::Home(Some(ListingQuery::parse(q))),
                _ => Self::Home(None),
            }),
            "/find-shelter" => Some(Self::FindShelter),
            "/register" => Some(Self::Register),
            "/profile" => Some(Self::Profile),
            _ => None,
        }
    }

    /// Returns `true` for the root listing, with or without a query.
    #[must_use]
    pub fn is_home(&self) -> bool {
        matches!(self, Self::Home(_))
    }

    /// Listing query carried by the route, if any.
    #[must_use]
    pub fn listing_query(&self) -> Option<ListingQuery> {
        match self {
            Self::Home(query) => *query,
            _ => None,
        }
    }
}
