use soroban_sdk::{Address, Env, Symbol};

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted when the vault is initialized
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[manager: Address]`
    pub fn initialize(env: &Env, owner: Address, manager: Address) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, manager);
    }

    /// Emitted for every withdrawal leaving custody
    ///
    /// - topics - `["withdrawal", token: Address]`
    /// - data - `[amount: i128, to: Address]`
    pub fn withdrawal(env: &Env, token: Address, amount: i128, to: Address) {
        let topics = (Symbol::new(env, "withdrawal"), token);
        env.events().publish(topics, (amount, to));
    }

    /// Emitted when the manager role moves
    ///
    /// - topics - `["manager_transferred"]`
    /// - data - `[previous_manager: Address, new_manager: Address]`
    pub fn manager_transferred(env: &Env, previous_manager: Address, new_manager: Address) {
        let topics = (Symbol::new(env, "manager_transferred"),);
        env.events().publish(topics, (previous_manager, new_manager));
    }
}
