pub mod charts;
pub mod components;
pub mod format;
pub mod icons;
