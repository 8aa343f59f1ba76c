// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The filter is written back to `settings.toml` each time it changes, so the
//! next start opens on the same listing.

use crate::config::{self, Config, FilterConfig};
use crate::domain::filter::FilterSelection;
use std::path::PathBuf;

/// Stores `selection` in `config` and saves it.
///
/// Failures are logged and otherwise ignored; the in-memory filter stays
/// authoritative.
pub fn persist_filter(config: &mut Config, selection: &FilterSelection, base_dir: Option<PathBuf>) {
    config.filter = FilterConfig::from_selection(*selection);

    if let Err(error) = config::save_with_override(config, base_dir) {
        log::warn!("Failed to save config: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE;
    use crate::domain::filter::{Region, Species};
    use tempfile::tempdir;

    #[test]
    fn persisted_filter_survives_reload() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        let selection = FilterSelection::new(Species::Dog, Region::Seoul);

        persist_filter(&mut config, &selection, Some(dir.path().to_path_buf()));

        let loaded = config::load_from_path(&dir.path().join(CONFIG_FILE))
            .expect("config should load");
        assert_eq!(loaded.filter.selection(), selection);
        assert_eq!(config.filter.selection(), selection);
    }
}
