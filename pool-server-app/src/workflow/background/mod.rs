pub mod activate;
pub mod delete;
pub mod list;
pub mod upload;
