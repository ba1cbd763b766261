// src/config.rs

use soroban_sdk::{contracttype, Address};

use crate::error::Error;

pub const DEFAULT_MAX_VOTERS: u64 = 1_000_000;
pub const DEFAULT_REGISTRATION_FEE: i128 = 500;
pub const DEFAULT_VERIFICATION_THRESHOLD: u32 = 50;
pub const DEFAULT_GRACE_PERIOD: u32 = 30;

pub const MAX_VERIFICATION_THRESHOLD: u32 = 100;
pub const MAX_GRACE_PERIOD: u32 = 90;

/// Operating parameters of a registry instance.
///
/// `fee_token` and `verifier` are fixed at construction. `authority` is a
/// one-time latch: once `Some`, it never changes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub authority: Option<Address>,
    pub max_voters: u64,
    pub registration_fee: i128,
    pub verification_threshold: u32,
    pub grace_period: u32,
    pub fee_token: Address,
    pub verifier: Address,
}

impl Config {
    pub fn new(fee_token: Address, verifier: Address) -> Self {
        Self {
            authority: None,
            max_voters: DEFAULT_MAX_VOTERS,
            registration_fee: DEFAULT_REGISTRATION_FEE,
            verification_threshold: DEFAULT_VERIFICATION_THRESHOLD,
            grace_period: DEFAULT_GRACE_PERIOD,
            fee_token,
            verifier,
        }
    }

    /// Returns the authority, or `AuthorityNotSet` if the latch is still open.
    pub fn require_authority(&self) -> Result<&Address, Error> {
        self.authority.as_ref().ok_or(Error::AuthorityNotSet)
    }

    /// Closes the authority latch. Self-appointment and a second call both
    /// fail with `NotAuthorized`.
    pub fn set_authority(&mut self, caller: &Address, candidate: Address) -> Result<(), Error> {
        if *caller == candidate {
            return Err(Error::NotAuthorized);
        }
        if self.authority.is_some() {
            return Err(Error::NotAuthorized);
        }
        self.authority = Some(candidate);
        Ok(())
    }

    pub fn set_max_voters(&mut self, max_voters: u64) -> Result<(), Error> {
        if max_voters == 0 {
            return Err(Error::InvalidUpdate);
        }
        self.require_authority()?;
        self.max_voters = max_voters;
        Ok(())
    }

    pub fn set_registration_fee(&mut self, fee: i128) -> Result<(), Error> {
        if fee < 0 {
            return Err(Error::InvalidRegistrationFee);
        }
        self.require_authority()?;
        self.registration_fee = fee;
        Ok(())
    }

    pub fn set_verification_threshold(&mut self, threshold: u32) -> Result<(), Error> {
        if threshold == 0 || threshold > MAX_VERIFICATION_THRESHOLD {
            return Err(Error::InvalidVerificationThreshold);
        }
        self.require_authority()?;
        self.verification_threshold = threshold;
        Ok(())
    }

    pub fn set_grace_period(&mut self, period: u32) -> Result<(), Error> {
        if period > MAX_GRACE_PERIOD {
            return Err(Error::InvalidGracePeriod);
        }
        self.require_authority()?;
        self.grace_period = period;
        Ok(())
    }
}
