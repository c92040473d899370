pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::archive::{build_package, extract_package, PackEvent};
pub use services::config::{ConfigService, PackagerSettings};
pub use types::errors::{PackError, PackResult};
