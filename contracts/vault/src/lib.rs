#![no_std]

mod contract;
mod events;
mod storage;
mod vault;

#[cfg(test)]
mod tests;

pub use crate::contract::{Vault, VaultClient};
