pub mod duration;
pub mod scoring;
pub mod session;
pub mod store;
