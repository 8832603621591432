//! Page layout and the render pipeline that turns layers into output files.

pub(crate) mod canvas;
pub(crate) mod layout;
pub(crate) mod preset;
