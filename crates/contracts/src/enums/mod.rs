pub mod category;
pub mod gender;
pub mod region;

pub use category::Category;
pub use gender::Gender;
pub use region::Region;
