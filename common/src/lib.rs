pub mod config;
pub mod gallery;
