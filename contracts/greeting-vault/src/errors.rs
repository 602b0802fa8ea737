#![allow(dead_code)]

use soroban_sdk::contracterror;

/// Error codes for the Greeting Vault contract.
///
/// Each error carries a unique numeric code, grouped by category:
///
/// **Storage errors (100-199):**
/// - Reserve accounting failures and missing slots
///
/// **Call protocol errors (200-299):**
/// - Violations of the storage-access manifest
///
/// **Validation errors (300-399):**
/// - Invalid input parameters
///
/// **Lifecycle errors (400-499):**
/// - Initialization state violations
///
/// Every fallible contract function returns `Result<T, Error>`. A failed call
/// leaves all persisted state exactly as it was before the call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ===== STORAGE ERRORS =====
    /// Funding reserve cannot cover the storage cost of the slot
    InsufficientReserve = 100,
    /// No greeting stored under the requested key
    GreetingNotFound = 101,

    // ===== CALL PROTOCOL ERRORS =====
    /// Write targeted a key absent from the declared storage-access manifest
    UndeclaredKey = 200,

    // ===== VALIDATION ERRORS =====
    /// Funding amount must be positive
    InvalidAmount = 300,

    // ===== LIFECYCLE ERRORS =====
    /// Contract is already initialized
    AlreadyInitialized = 400,
    /// Contract has not been initialized
    NotInitialized = 401,
}

impl Error {
    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            Error::InsufficientReserve => "Funding reserve cannot cover the slot storage cost",
            Error::GreetingNotFound => "No greeting stored under the requested key",
            Error::UndeclaredKey => "Storage key was not declared in the call manifest",
            Error::InvalidAmount => "Funding amount must be positive",
            Error::AlreadyInitialized => "Contract is already initialized",
            Error::NotInitialized => "Contract has not been initialized",
        }
    }

    /// Get the error code as a standardized string identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InsufficientReserve => "INSUFFICIENT_RESERVE",
            Error::GreetingNotFound => "GREETING_NOT_FOUND",
            Error::UndeclaredKey => "UNDECLARED_KEY",
            Error::InvalidAmount => "INVALID_AMOUNT",
            Error::AlreadyInitialized => "ALREADY_INITIALIZED",
            Error::NotInitialized => "NOT_INITIALIZED",
        }
    }
}
