// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Logging for the DPD Tools
//!
//! The simulation crates log through the [`log`] facade.  This crate installs [`env_logger`] as
//! the backend on desktop platforms, filtered to the crates named in a [`Logging`] instance.
//!
//! By default, the logging level is set to [`Info`](log::Level::Info) for debug builds, and
//! [`Warn`](log::Level::Warn) for release builds. This can be overridden by setting the `RUST_LOG`
//! environment variable, like so:
//!
//! ```sh
//! $> RUST_LOG=dpd_dynamics=debug cargo run
//! ```

mod platform;
mod platform_impl;
pub use platform::Logging;

/// A module which is typically glob imported.
pub mod prelude {
    pub use super::Logging;
}

// End of File
