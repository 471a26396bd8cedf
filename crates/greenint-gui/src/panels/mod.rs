pub mod controls;
mod helpers;
pub mod menu_bar;
pub mod plot;
pub mod status;

pub(crate) use helpers::{enum_combo, section_header};
