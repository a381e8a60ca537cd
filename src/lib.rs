pub mod cli;
pub mod core;
pub mod engine;
pub mod env_file;
pub mod services;

pub use crate::core::{
    ParameterPath, SyncError, SyncResult, SyncSummary, UploadItem, UploadOutcome,
};
pub use engine::SyncEngine;
pub use env_file::EnvFileReader;
