//! Source composition for configuration loading.

pub(crate) mod service;
