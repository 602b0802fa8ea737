use soroban_sdk::{contracttype, Bytes};

/// Slot lifecycle policy, selected once at vault construction.
///
/// The policy decides how storage keys are derived and whether a call creates
/// a new slot or rewrites the existing one. It is fixed at `initialize` time
/// and never changes for the lifetime of the vault.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StoragePolicy {
    /// Every call rewrites the single fixed greeting slot in place.
    Overwrite,
    /// Every call creates a brand-new slot keyed by name and sequence counter.
    Append,
}

/// Persistent storage keys for the vault's own state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Contract administrator recorded at initialization
    Admin,
    /// Selected storage policy
    Policy,
    /// Monotonic sequence counter backing append-mode key derivation
    Counter,
    /// Total amount paid into the funding reserve
    Funded,
    /// Reserve amount consumed by currently live slots
    Used,
    /// Insertion-ordered index of live slot keys
    KeyIndex,
    /// One greeting slot, addressed by its derived key
    Slot(Bytes),
}

/// Snapshot of the funding reserve accounting.
///
/// Invariant maintained by the store: `funded >= used` at all times, with
/// `used` equal to the summed storage cost of every live slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveStatus {
    /// Total amount paid into the reserve
    pub funded: i128,
    /// Amount backing currently live slots
    pub used: i128,
}
