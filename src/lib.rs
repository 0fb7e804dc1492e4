//! QR Manager CLI
//!
//! 保存済みQRコードのアーカイブをコマンドラインから操作する

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod file_store;
pub mod logging;
