pub mod filter_panel;
pub mod stat_card;
