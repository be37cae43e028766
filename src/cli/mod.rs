//! CLI definitions using clap derive API
//!
//! One argument struct per binary:
//! - local: `local-run` arguments
//! - deploy: `remote-deploy` arguments

use clap::builder::{Styles, styling::AnsiColor};

pub mod deploy;
pub mod local;

pub use deploy::DeployArgs;
pub use local::LocalArgs;

/// Help styling shared by both binaries
pub fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default())
}
