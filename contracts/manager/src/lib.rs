#![no_std]

mod basket;
mod contract;
mod events;
mod manager;
mod proposal;
mod storage;

#[cfg(test)]
mod tests;

pub use crate::basket::Basket;
pub use crate::contract::{Manager, ManagerClient};
pub use crate::proposal::{Proposal, ProposalKind, ProposalState};
