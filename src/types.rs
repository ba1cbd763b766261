// src/types.rs

use soroban_sdk::{contracttype, Address, Bytes, Env, String};

/// Currency a voter's registration fee is denominated in.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Currency {
    Stx,
    Usd,
}

impl Currency {
    /// Parses one of the accepted currency codes (`"STX"`, `"USD"`).
    pub fn from_code(env: &Env, code: &String) -> Option<Self> {
        if *code == String::from_str(env, "STX") {
            Some(Currency::Stx)
        } else if *code == String::from_str(env, "USD") {
            Some(Currency::Usd)
        } else {
            None
        }
    }

    pub fn code(&self, env: &Env) -> String {
        match self {
            Currency::Stx => String::from_str(env, "STX"),
            Currency::Usd => String::from_str(env, "USD"),
        }
    }
}

/// A registered voter.
///
/// Heights are ledger sequence numbers. `voter_id`, `registered_at`, `status`,
/// `citizenship`, `penalty` and `currency` never change after registration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub voter_id: Bytes,
    pub encrypted_data: Bytes,
    pub registered_at: u32,
    pub status: bool,
    pub location: String,
    pub age: u32,
    pub citizenship: String,
    pub last_update: u32,
    pub penalty: u32,
    pub currency: Currency,
}

/// Most recent edit applied to a voter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterUpdate {
    pub encrypted_data: Bytes,
    pub timestamp: u32,
    pub updater: Address,
    pub location: String,
    pub age: u32,
}

/// Most recent audit of a voter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterAudit {
    pub timestamp: u32,
    pub auditor: Address,
    pub status: bool,
}
