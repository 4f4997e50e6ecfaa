pub mod dataset;
pub mod record;

pub use dataset::dataset;
pub use record::OrderRecord;
