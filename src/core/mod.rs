pub mod actions;
pub mod annotate;
pub mod data;
pub mod fractals;
pub mod navigation;
pub mod palette;
pub mod util;
