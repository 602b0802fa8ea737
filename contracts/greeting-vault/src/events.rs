use soroban_sdk::{contracttype, symbol_short, Address, Bytes, Env, String};

use crate::types::StoragePolicy;

// ===== EVENT TYPES =====

/// Event emitted when a greeting is written to a slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GreetingStoredEvent {
    /// Slot key the greeting was stored under
    pub key: Bytes,
    /// Stored greeting
    pub greeting: String,
    /// Counter value the key was derived from
    pub counter: u64,
    /// Ledger timestamp
    pub timestamp: u64,
}

/// Event emitted when the funding reserve is topped up.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveFundedEvent {
    /// Account that paid into the reserve
    pub from: Address,
    /// Amount paid in
    pub amount: i128,
    /// Reserve total after the payment
    pub total: i128,
    /// Ledger timestamp
    pub timestamp: u64,
}

/// Event emitted once when the vault is initialized.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultInitializedEvent {
    /// Contract administrator
    pub admin: Address,
    /// Storage policy the vault was constructed with
    pub policy: StoragePolicy,
    /// Ledger timestamp
    pub timestamp: u64,
}

// ===== EVENT EMITTER =====

/// Centralized event emission for the vault.
pub struct EventEmitter;

impl EventEmitter {
    /// Emit a greeting stored event.
    pub fn emit_greeting_stored(env: &Env, key: &Bytes, greeting: &String, counter: u64) {
        let event = GreetingStoredEvent {
            key: key.clone(),
            greeting: greeting.clone(),
            counter,
            timestamp: env.ledger().timestamp(),
        };
        env.events()
            .publish((symbol_short!("greeting"), symbol_short!("stored")), event);
    }

    /// Emit a reserve funded event.
    pub fn emit_reserve_funded(env: &Env, from: &Address, amount: i128, total: i128) {
        let event = ReserveFundedEvent {
            from: from.clone(),
            amount,
            total,
            timestamp: env.ledger().timestamp(),
        };
        env.events()
            .publish((symbol_short!("reserve"), symbol_short!("funded")), event);
    }

    /// Emit a vault initialized event.
    pub fn emit_vault_initialized(env: &Env, admin: &Address, policy: &StoragePolicy) {
        let event = VaultInitializedEvent {
            admin: admin.clone(),
            policy: *policy,
            timestamp: env.ledger().timestamp(),
        };
        env.events()
            .publish((symbol_short!("vault"), symbol_short!("init")), event);
    }
}
