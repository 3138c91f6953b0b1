pub mod badge;
pub mod category;
pub mod entry;

pub use badge::Badge;
pub use category::ParentCategory;
pub use entry::TimeEntry;
