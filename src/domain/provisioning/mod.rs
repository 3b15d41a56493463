//! Provisioning model: project layout, configuration file parsers, required
//! toolchain targets and registry credentials.

mod credentials;
mod error;
pub mod gradle_config;
mod layout;
pub mod targets;
pub mod toolchain_pin;

pub use credentials::{Credentials, GPR_KEY_PROPERTY, GPR_USER_PROPERTY};
pub use error::ProvisioningError;
pub use layout::ProjectLayout;
