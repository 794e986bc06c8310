pub mod config;
pub mod consts;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod io;
pub mod mapping;
pub mod picker;
pub mod raster;
pub mod scene;
pub mod selection;
pub mod survey;
