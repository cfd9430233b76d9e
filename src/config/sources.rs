//! Configuration sources layered by the merge service.

pub(crate) mod environment;
pub(crate) mod global_file;
