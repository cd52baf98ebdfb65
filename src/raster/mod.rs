pub mod bridge;
pub mod registry;
pub mod transcode;
pub mod worker;
