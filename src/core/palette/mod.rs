pub mod factory;
pub mod kinds;
#[allow(clippy::module_inception)]
pub mod palette;
