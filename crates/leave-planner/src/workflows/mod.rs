pub mod roster;
pub mod vacation;
