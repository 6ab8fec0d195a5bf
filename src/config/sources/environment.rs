//! Environment source: `CXL__SECTION__KEY` overrides, e.g. `CXL__CONTEXT__SYSFS_ROOT`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Prefix of configuration overrides. The double separator keeps single-underscore
/// variables such as `CXL_LOG` and `CXL_MAN_VIEWER` out of the config tree.
pub const ENV_PREFIX: &str = "CXL";
pub const ENV_SEPARATOR: &str = "__";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR),
    )
}
