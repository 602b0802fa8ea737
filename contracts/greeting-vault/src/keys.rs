use alloc::vec;
use alloc::vec::Vec;

use soroban_sdk::{Bytes, Env, String};

use crate::types::StoragePolicy;

/// Fixed key used by every overwrite-mode call.
pub const OVERWRITE_KEY: &[u8] = b"greeting";

/// Separator byte between the name bytes and the counter suffix of an
/// append-mode key.
pub const KEY_SEPARATOR: u8 = 0x5F;

/// Derives the storage key a greeting call will touch.
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the storage key for a call with this name and counter.
    ///
    /// Total, deterministic and side-effect-free: the caller can compute the
    /// key before submitting the call, which the storage-access manifest
    /// requires. Under `Overwrite` the key is the fixed constant
    /// [`OVERWRITE_KEY`], independent of all inputs. Under `Append` it is
    /// `name-bytes || 0x5F || 8-byte big-endian counter`. The counter suffix
    /// is fixed-width so keys stay byte-orderable and two counter values can
    /// never alias through truncation.
    ///
    /// A name may itself contain the separator byte. Keys remain pairwise
    /// unique because the trailing 8 bytes are always the counter, but a
    /// parser splitting on the separator cannot recover the name
    /// unambiguously from such a key.
    pub fn derive_key(env: &Env, policy: &StoragePolicy, name: &String, counter: u64) -> Bytes {
        match policy {
            StoragePolicy::Overwrite => Bytes::from_slice(env, OVERWRITE_KEY),
            StoragePolicy::Append => {
                let mut key = Bytes::from_slice(env, &name_bytes(name));
                key.push_back(KEY_SEPARATOR);
                key.extend_from_array(&counter.to_be_bytes());
                key
            }
        }
    }
}

/// Copy a Soroban string's raw bytes into an owned buffer.
pub(crate) fn name_bytes(name: &String) -> Vec<u8> {
    let mut buf = vec![0u8; name.len() as usize];
    name.copy_into_slice(&mut buf);
    buf
}
