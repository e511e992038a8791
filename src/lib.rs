pub mod args;
pub mod commands;
pub mod error;
pub mod launch;
pub mod merge;
pub mod preset;
pub mod repo;
pub mod settings;
