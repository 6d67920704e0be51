pub mod background;
pub mod contest;
pub mod entry;
pub mod roster;
pub mod settings;
