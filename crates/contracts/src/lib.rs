pub mod analytics;
pub mod enums;
pub mod orders;
pub mod shared;
