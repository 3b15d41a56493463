//! Release tooling for the native libraries: export recorded versions into the
//! local Conan cache and provision a machine to publish the Android library.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, ExportOptions, ExportReport, ExportedRevision, ExportedVersion, ProvisionOptions,
    ProvisionReport, export_versions, publish_android,
};
