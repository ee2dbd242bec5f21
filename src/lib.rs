pub mod basis;
pub mod collision;
pub mod error;
pub mod logging;
pub mod raster;
pub mod scene;

#[cfg(feature = "gui")]
pub mod display;
