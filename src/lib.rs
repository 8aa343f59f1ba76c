// SPDX-License-Identifier: MPL-2.0
//! `pawfeed` is a pet-adoption video feed built with the Iced GUI framework.
//!
//! The home feed autoplays the most visible video, a category modal narrows
//! the listing by species and region, and the navbar links to the shelter,
//! registration and profile pages. Strings are localized with Fluent.

#![doc(html_root_url = "https://docs.rs/pawfeed/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod video_player;
