pub mod error;
pub mod regions;
pub mod template;
pub mod terraform;
