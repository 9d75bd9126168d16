use soroban_sdk::{Address, Env, Symbol};

pub struct ReserveTokenEvents {}

impl ReserveTokenEvents {
    /// Emitted when the managed-mint role moves to a new address
    ///
    /// - topics - `["minter_changed", admin: Address]`
    /// - data - `[old_minter: Address, new_minter: Address]`
    pub fn minter_changed(env: &Env, admin: Address, old_minter: Address, new_minter: Address) {
        let topics = (Symbol::new(env, "minter_changed"), admin);
        env.events().publish(topics, (old_minter, new_minter));
    }
}
