pub mod batch;
pub mod entities;
pub mod filter;
pub mod stats;
