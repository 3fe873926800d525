//! `.accessormap.toml` configuration.
//!
//! ```toml
//! [scan]
//! exclude = ["**/generated/**"]
//! jobs = 4
//!
//! [output]
//! format = "json"
//! show_all = true
//! ```

mod core;
mod loader;

pub use self::core::{AccessormapConfig, OutputConfig, ScanConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_dir,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
