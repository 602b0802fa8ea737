use soroban_sdk::{Bytes, Env, String, Vec};

use crate::errors::Error;
use crate::types::{DataKey, ReserveStatus, StoragePolicy};

/// Base storage cost of one live slot, in micro-units.
pub const SLOT_BASE_COST: i128 = 2_500;

/// Storage cost per byte of key plus value, in micro-units.
pub const SLOT_BYTE_COST: i128 = 400;

/// Persistent greeting slots plus the sequence counter and funding reserve
/// accounting that back them.
///
/// The store is the exclusive owner of `Counter`, `Funded` and `Used`; no
/// other module writes them. Every check in [`SlotStore::put`] precedes every
/// mutation, so a failed write leaves the counter, the slot index, the
/// reserve accounting and all slots exactly as they were.
pub struct SlotStore;

impl SlotStore {
    /// Storage policy selected at initialization.
    pub fn policy(env: &Env) -> Result<StoragePolicy, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Policy)
            .ok_or(Error::NotInitialized)
    }

    /// Current sequence counter.
    ///
    /// Equals the number of append-mode writes that have committed so far:
    /// the counter is bumped by exactly 1 inside the same `put` that creates
    /// the slot, and never on a failed write.
    pub fn get_counter(env: &Env) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::Counter)
            .unwrap_or(0)
    }

    /// Storage cost of a slot holding `value` under `key`, in micro-units.
    pub fn slot_cost(key: &Bytes, value: &String) -> i128 {
        SLOT_BASE_COST + SLOT_BYTE_COST * (key.len() as i128 + value.len() as i128)
    }

    /// Write `value` under `key`.
    ///
    /// `declared_keys` is the call's storage-access manifest: a write whose
    /// key was not declared up front is rejected before anything is touched.
    /// The funding reserve must cover the summed cost of all live slots
    /// including the new or re-priced one, or the write fails with
    /// `InsufficientReserve` and no partial state.
    ///
    /// Under `Append` the key has never been used before (guaranteed by the
    /// deriver plus the current counter) and the counter is incremented as
    /// part of the same operation. Under `Overwrite` an existing slot is
    /// replaced in place and re-priced.
    pub fn put(
        env: &Env,
        key: &Bytes,
        value: &String,
        declared_keys: &Vec<Bytes>,
    ) -> Result<(), Error> {
        if !declared_keys.contains(key) {
            return Err(Error::UndeclaredKey);
        }

        let policy = Self::policy(env)?;
        let slot_key = DataKey::Slot(key.clone());
        let existing: Option<String> = env.storage().persistent().get(&slot_key);

        let old_cost = match &existing {
            Some(old) => Self::slot_cost(key, old),
            None => 0,
        };
        let status = Self::reserve_status(env);
        let projected_used = status.used - old_cost + Self::slot_cost(key, value);
        if status.funded < projected_used {
            return Err(Error::InsufficientReserve);
        }

        env.storage().persistent().set(&slot_key, value);
        env.storage().persistent().set(&DataKey::Used, &projected_used);

        if existing.is_none() {
            let mut index = Self::list_keys(env);
            index.push_back(key.clone());
            env.storage().persistent().set(&DataKey::KeyIndex, &index);
        }

        if policy == StoragePolicy::Append {
            let next = Self::get_counter(env) + 1;
            env.storage().persistent().set(&DataKey::Counter, &next);
        }

        Ok(())
    }

    /// Greeting stored under `key`.
    pub fn get(env: &Env, key: &Bytes) -> Result<String, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Slot(key.clone()))
            .ok_or(Error::GreetingNotFound)
    }

    /// Keys of all live slots, in insertion order.
    pub fn list_keys(env: &Env) -> Vec<Bytes> {
        env.storage()
            .persistent()
            .get(&DataKey::KeyIndex)
            .unwrap_or(Vec::new(env))
    }

    /// Add `amount` to the funding reserve and return the new total.
    pub fn fund(env: &Env, amount: i128) -> Result<i128, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let funded: i128 = env
            .storage()
            .persistent()
            .get(&DataKey::Funded)
            .unwrap_or(0)
            + amount;
        env.storage().persistent().set(&DataKey::Funded, &funded);
        Ok(funded)
    }

    /// Current reserve accounting.
    pub fn reserve_status(env: &Env) -> ReserveStatus {
        ReserveStatus {
            funded: env
                .storage()
                .persistent()
                .get(&DataKey::Funded)
                .unwrap_or(0),
            used: env.storage().persistent().get(&DataKey::Used).unwrap_or(0),
        }
    }
}
