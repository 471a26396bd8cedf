pub mod config;
pub mod consts;
pub mod display;
pub mod error;
pub mod expr;
pub mod integrate;
pub mod session;
