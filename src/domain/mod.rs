pub mod catalog;
pub mod coin;
pub mod event;
pub mod ports;
pub mod product;
pub mod reserve;
