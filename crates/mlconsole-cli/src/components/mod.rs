pub mod init;
pub mod operations;
