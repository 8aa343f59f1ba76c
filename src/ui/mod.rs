// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`feed`] - Home feed of autoplaying video tiles
//! - [`pages`] - Shelter search, registration and profile pages
//!
//! # Chrome
//!
//! - [`navbar`] - Navigation bar, owner of the category modal state
//! - [`category_modal`] - Species then region picker shown over the window
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod category_modal;
pub mod design_tokens;
pub mod feed;
pub mod navbar;
pub mod pages;
pub mod styles;
pub mod theming;
pub mod widgets;
