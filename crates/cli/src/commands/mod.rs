pub mod demo;
pub mod init;
pub mod run;
pub mod validate;
