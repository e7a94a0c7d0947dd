pub mod init_config;
pub mod questions;
pub mod score;
pub mod take;
