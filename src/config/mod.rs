//! Typed render settings and their loaders.

pub(crate) mod settings;
