use soroban_sdk::{Bytes, Env, String, Vec};

use crate::errors::Error;
use crate::events::EventEmitter;
use crate::keys::{name_bytes, KeyDeriver};
use crate::store::SlotStore;

/// Prefix of every stored greeting.
const GREETING_PREFIX: &[u8] = b"Hello, ";

/// The "greet-and-persist" operation.
///
/// Stateless between calls: every invocation derives its key from the
/// counter it reads at entry, so a failed call is simply resubmitted and
/// picks up a fresh counter.
pub struct GreetingManager;

impl GreetingManager {
    /// Exact storage key the next greeting call for `name` will touch,
    /// without writing anything.
    ///
    /// This is the declaration half of the two-phase call protocol: the
    /// caller submits this key in the storage-access manifest alongside the
    /// call, and any write to a key that was not declared is rejected. Key
    /// derivation is deterministic, so a caller that declares this key can
    /// never mismatch the write that follows.
    pub fn planned_key(env: &Env, name: &String) -> Result<Bytes, Error> {
        let policy = SlotStore::policy(env)?;
        let counter = SlotStore::get_counter(env);
        Ok(KeyDeriver::derive_key(env, &policy, name, counter))
    }

    /// Produce the greeting for `name`, persist it under the derived key and
    /// return it.
    pub fn handle(env: &Env, name: &String, declared_keys: &Vec<Bytes>) -> Result<String, Error> {
        let policy = SlotStore::policy(env)?;
        let counter = SlotStore::get_counter(env);
        let key = KeyDeriver::derive_key(env, &policy, name, counter);
        let greeting = Self::compose_greeting(env, name);

        SlotStore::put(env, &key, &greeting, declared_keys)?;

        EventEmitter::emit_greeting_stored(env, &key, &greeting, counter);
        Ok(greeting)
    }

    /// `"Hello, " + name`, plain byte append with no locale transformation.
    fn compose_greeting(env: &Env, name: &String) -> String {
        let mut text = alloc::vec::Vec::from(GREETING_PREFIX);
        text.extend_from_slice(&name_bytes(name));
        String::from_bytes(env, &text)
    }
}
