//! Scene description, polar placement and the SVG/PNG backend.
//!
//! Layers append [`scene::DrawOp`]s to a shared [`scene::Scene`]. Once every layer has
//! drawn, the scene is serialized to SVG, which is both the vector output and the input of
//! the `resvg` rasterizer that produces the PNG.

pub(crate) mod fonts;
pub(crate) mod polar;
pub(crate) mod raster;
pub(crate) mod scene;
pub(crate) mod svg;
