//! Colors, colormaps and the semantic palette.

pub(crate) mod color;
pub(crate) mod colormap;
pub(crate) mod palette;
