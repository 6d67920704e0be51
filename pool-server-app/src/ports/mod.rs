pub mod background_storage;
