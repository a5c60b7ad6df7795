//! Command implementations for dotzsh-cli

pub mod provision;

pub use provision::{ProvisionOptions, run_provision, run_provision_with};
