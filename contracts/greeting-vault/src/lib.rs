#![no_std]

extern crate alloc;

mod errors;
mod events;
mod greetings;
mod keys;
mod store;
mod types;

pub use errors::Error;
pub use types::{DataKey, ReserveStatus, StoragePolicy};

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, String, Vec};

use crate::events::EventEmitter;
use crate::greetings::GreetingManager;
use crate::store::SlotStore;

/// Greeting Vault: an on-chain key-value store for greetings under box-style
/// persistent storage.
///
/// The vault exposes a single request/response operation, `hello`, that
/// produces `"Hello, " + name` and persists it under a derived storage key.
/// Key derivation depends on the [`StoragePolicy`] the vault was constructed
/// with: `Overwrite` keeps exactly one live slot under a fixed key, `Append`
/// creates a brand-new slot per call by embedding a monotonic sequence
/// counter in the key.
///
/// The call protocol is two-phase: callers first compute the exact key their
/// call will touch via `planned_key` and declare it in the call's
/// storage-access manifest; a write to an undeclared key is rejected before
/// any state changes. A funding reserve must cover the storage cost of all
/// live slots, checked before every write.
#[contract]
pub struct GreetingVault;

#[contractimpl]
impl GreetingVault {
    /// One-time constructor: record the administrator and storage policy and
    /// zero the sequence counter and reserve accounting.
    pub fn initialize(env: Env, admin: Address, policy: StoragePolicy) -> Result<(), Error> {
        if env.storage().persistent().has(&DataKey::Policy) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(&DataKey::Policy, &policy);
        env.storage().persistent().set(&DataKey::Counter, &0u64);
        env.storage().persistent().set(&DataKey::Funded, &0i128);
        env.storage().persistent().set(&DataKey::Used, &0i128);

        EventEmitter::emit_vault_initialized(&env, &admin, &policy);
        Ok(())
    }

    /// Produce a greeting for `name` and persist it.
    ///
    /// `declared_keys` is the storage-access manifest for this call. It must
    /// contain the key returned by [`GreetingVault::planned_key`] for the
    /// same name, or the write is rejected with `UndeclaredKey` before any
    /// state changes.
    pub fn hello(env: Env, name: String, declared_keys: Vec<Bytes>) -> Result<String, Error> {
        GreetingManager::handle(&env, &name, &declared_keys)
    }

    /// Exact storage key the next `hello` call for `name` will touch.
    ///
    /// Side-effect-free; used to build the storage-access manifest before
    /// submitting the call.
    pub fn planned_key(env: Env, name: String) -> Result<Bytes, Error> {
        GreetingManager::planned_key(&env, &name)
    }

    /// Greeting stored under `key`.
    pub fn get_greeting(env: Env, key: Bytes) -> Result<String, Error> {
        SlotStore::get(&env, &key)
    }

    /// Number of committed append-mode writes.
    pub fn get_counter(env: Env) -> u64 {
        SlotStore::get_counter(&env)
    }

    /// Keys of all live slots, in insertion order.
    pub fn list_keys(env: Env) -> Vec<Bytes> {
        SlotStore::list_keys(&env)
    }

    /// Pay `amount` into the funding reserve and return the new total.
    pub fn fund_reserve(env: Env, from: Address, amount: i128) -> Result<i128, Error> {
        from.require_auth();

        let total = SlotStore::fund(&env, amount)?;
        EventEmitter::emit_reserve_funded(&env, &from, amount, total);
        Ok(total)
    }

    /// Current reserve accounting.
    pub fn reserve_status(env: Env) -> ReserveStatus {
        SlotStore::reserve_status(&env)
    }

    /// Storage policy the vault was constructed with.
    pub fn get_policy(env: Env) -> Result<StoragePolicy, Error> {
        SlotStore::policy(&env)
    }

    /// Contract administrator.
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }
}
