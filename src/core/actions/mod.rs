pub mod cancellation;
pub mod capture_region;
pub mod render_frame;
