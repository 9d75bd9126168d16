use soroban_sdk::{Address, Env, Symbol};

pub struct ManagerEvents {}

impl ManagerEvents {
    /// Emitted when the manager is initialized
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[operator: Address, basket_id: u32]`
    pub fn initialize(env: &Env, owner: Address, operator: Address, basket_id: u32) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, (operator, basket_id));
    }

    /// Emitted when a basket change is proposed
    ///
    /// - topics - `["propose", proposer: Address]`
    /// - data - `[id: u32]`
    pub fn propose(env: &Env, proposer: Address, id: u32) {
        let topics = (Symbol::new(env, "propose"), proposer);
        env.events().publish(topics, id);
    }

    /// Emitted when the operator accepts a proposal, starting the cooldown
    ///
    /// - topics - `["proposal_accepted", id: u32]`
    /// - data - `[proposer: Address, acceptance_time: u64]`
    pub fn proposal_accepted(env: &Env, id: u32, proposer: Address, acceptance_time: u64) {
        let topics = (Symbol::new(env, "proposal_accepted"), id);
        env.events().publish(topics, (proposer, acceptance_time));
    }

    /// - topics - `["proposal_cancelled", id: u32]`
    /// - data - `[proposer: Address]`
    pub fn proposal_cancelled(env: &Env, id: u32, proposer: Address) {
        let topics = (Symbol::new(env, "proposal_cancelled"), id);
        env.events().publish(topics, proposer);
    }

    /// Emitted when a proposal executes and the active basket is replaced
    ///
    /// - topics - `["proposal_completed", id: u32]`
    /// - data - `[basket_id: u32]`
    pub fn proposal_completed(env: &Env, id: u32, basket_id: u32) {
        let topics = (Symbol::new(env, "proposal_completed"), id);
        env.events().publish(topics, basket_id);
    }

    /// - topics - `["issuance", user: Address]`
    /// - data - `[amount: i128]`
    pub fn issuance(env: &Env, user: Address, amount: i128) {
        let topics = (Symbol::new(env, "issuance"), user);
        env.events().publish(topics, amount);
    }

    /// - topics - `["redemption", user: Address]`
    /// - data - `[amount: i128]`
    pub fn redemption(env: &Env, user: Address, amount: i128) {
        let topics = (Symbol::new(env, "redemption"), user);
        env.events().publish(topics, amount);
    }

    /// - topics - `["emergency_changed"]`
    /// - data - `[old: bool, new: bool]`
    pub fn emergency_changed(env: &Env, old: bool, new: bool) {
        let topics = (Symbol::new(env, "emergency_changed"),);
        env.events().publish(topics, (old, new));
    }

    /// - topics - `["issuance_paused_changed"]`
    /// - data - `[old: bool, new: bool]`
    pub fn issuance_paused_changed(env: &Env, old: bool, new: bool) {
        let topics = (Symbol::new(env, "issuance_paused_changed"),);
        env.events().publish(topics, (old, new));
    }

    /// - topics - `["operator_changed"]`
    /// - data - `[old: Address, new: Address]`
    pub fn operator_changed(env: &Env, old: Address, new: Address) {
        let topics = (Symbol::new(env, "operator_changed"),);
        env.events().publish(topics, (old, new));
    }

    /// - topics - `["vault_changed"]`
    /// - data - `[old: Address, new: Address]`
    pub fn vault_changed(env: &Env, old: Address, new: Address) {
        let topics = (Symbol::new(env, "vault_changed"),);
        env.events().publish(topics, (old, new));
    }

    /// - topics - `["seigniorage_changed"]`
    /// - data - `[old: i64, new: i64]`
    pub fn seigniorage_changed(env: &Env, old: i64, new: i64) {
        let topics = (Symbol::new(env, "seigniorage_changed"),);
        env.events().publish(topics, (old, new));
    }

    /// - topics - `["delay_changed"]`
    /// - data - `[old: u64, new: u64]`
    pub fn delay_changed(env: &Env, old: u64, new: u64) {
        let topics = (Symbol::new(env, "delay_changed"),);
        env.events().publish(topics, (old, new));
    }

    /// - topics - `["whitelist_changed"]`
    /// - data - `[enabled: bool]`
    pub fn whitelist_changed(env: &Env, enabled: bool) {
        let topics = (Symbol::new(env, "whitelist_changed"),);
        env.events().publish(topics, enabled);
    }
}
