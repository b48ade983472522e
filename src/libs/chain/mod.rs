//! Chain access for the operator commands. [`client::Chain`] is the seam
//! every operation talks through; [`client::RpcChain`] is the alloy backed
//! implementation and [`spells`] holds the small helpers built on top.

pub mod client;
pub mod network;
pub mod spells;

pub use client::{Chain, Receipt, RpcChain, TxRequest};
pub use network::Network;
