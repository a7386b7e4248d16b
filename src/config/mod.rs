mod core;
mod loader;

pub use self::core::{CodemixConfig, OutputConfig, PerformanceConfig, TagsConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
