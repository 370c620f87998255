pub mod cards;
pub mod chart;
pub mod map;
pub mod popup;
pub mod tables;
