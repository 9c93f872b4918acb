pub mod api;
pub mod cell;
pub mod neighborhood;
pub mod rule;
