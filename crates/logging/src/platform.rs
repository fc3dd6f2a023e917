// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

/// Initializes the logging framework to capture logs from the crates specified with a minimum
/// [`log::Level`] of [`Info`](log::Level::Info) on debug builds and [`Warn`](log::Level::Warn) on
/// release builds.  On desktop platforms, these defaults can be overridden by setting the
/// `RUST_LOG` environment variable.
pub struct Logging {
    crates: Vec<&'static str>,
}

impl Logging {
    /// Creates a new [`Logging`] instance with the specified list of crates to capture logs
    /// from.
    pub fn new(crates: Vec<&'static str>) -> Self {
        Self { crates }
    }

    /// The level used when `RUST_LOG` is not set.
    pub fn default_level() -> log::LevelFilter {
        if cfg!(debug_assertions) {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        }
    }

    /// Install the logger with the build-profile default level.  Must be called at most once.
    pub fn init(&self) {
        self.init_with_level(Self::default_level());
    }

    /// Install the logger, capturing the configured crates at `log_level` and above.
    pub fn init_with_level(&self, log_level: log::LevelFilter) {
        crate::platform_impl::init_with_level(&self.crates, log_level);
    }

    /// The `RUST_LOG`-style filter equivalent to this configuration at `log_level`.
    pub fn filter_string(&self, log_level: log::LevelFilter) -> String {
        let level_str = log_level.as_str().to_ascii_lowercase();
        self.crates
            .iter()
            .map(|&pkg_name| format!("{}={}", pkg_name.replace('-', "_"), level_str))
            .collect::<Vec<_>>()
            .join(",")
    }
}


// End of File
