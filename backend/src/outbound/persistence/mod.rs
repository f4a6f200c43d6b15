//! File-backed persistence adapters.
//!
//! The user collection is a single pretty-printed JSON array. Every save
//! rewrites the whole file; the backup adapter copies it to a sibling file
//! before that happens.

mod file_backup_store;
mod json_file_user_repository;

pub use file_backup_store::FileBackupStore;
pub use json_file_user_repository::JsonFileUserRepository;
