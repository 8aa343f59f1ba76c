// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::feed;
use crate::ui::navbar;
use crate::ui::pages;
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Feed(feed::Message),
    Page(pages::Message),
    /// The main window changed size.
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ko`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for the log file).
    /// Takes precedence over `PAWFEED_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PAWFEED_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Extra media URLs or paths appended to the feed.
    pub videos: Vec<String>,
}
