pub mod feed;
pub mod harvest;
pub mod hive;
pub mod init;
pub mod inspection;
pub mod season;
pub mod settings;
pub mod stats;
