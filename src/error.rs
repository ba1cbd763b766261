// src/error.rs

use soroban_sdk::contracterror;

/// Error codes returned by the registry.
///
/// Codes are part of the contract interface and must not be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized = 100,
    InvalidVoterId = 101,
    InvalidEncryptedData = 102,
    InvalidProof = 103,
    AlreadyRegistered = 104,
    VoterNotFound = 105,
    InvalidUpdate = 106,
    // Reserved: 107, 109 and 120 are not emitted by any operation yet.
    InvalidTimestamp = 107,
    AuthorityNotSet = 108,
    InvalidStatus = 109,
    MaxVotersExceeded = 110,
    InvalidLocation = 111,
    InvalidAge = 112,
    InvalidCitizenship = 113,
    InvalidRegistrationFee = 114,
    InvalidVerificationThreshold = 115,
    InvalidGracePeriod = 116,
    InvalidPenalty = 117,
    InvalidCurrency = 118,
    InvalidEligibility = 119,
    InvalidAudit = 120,
}
