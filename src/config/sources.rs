//! Configuration sources, applied in precedence order by the facade.

pub mod environment;
pub mod explicit_file;
pub mod global_file;
