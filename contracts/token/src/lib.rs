#![no_std]

mod admin;
mod allowance;
mod balance;
mod contract;
mod events;
mod metadata;
mod storage_types;


pub use crate::contract::{ReserveToken, ReserveTokenClient};
