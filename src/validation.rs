// src/validation.rs
//
// Input checks shared by registration and update. Each helper maps exactly one
// field to exactly one error code.

use soroban_sdk::{Bytes, Env, String};

use crate::error::Error;
use crate::types::Currency;

pub const MAX_VOTER_ID_LEN: u32 = 32;
pub const MAX_ENCRYPTED_DATA_LEN: u32 = 256;
pub const MAX_LOCATION_LEN: u32 = 100;
pub const MAX_CITIZENSHIP_LEN: u32 = 50;
pub const MIN_VOTER_AGE: u32 = 18;
pub const MAX_PENALTY: u32 = 100;

// A char is at most four bytes of UTF-8.
const MAX_UTF8_CHAR_LEN: u32 = 4;
const MAX_TEXT_BYTES: usize = (MAX_LOCATION_LEN * MAX_UTF8_CHAR_LEN) as usize;

fn len_within(len: u32, max: u32) -> bool {
    len > 0 && len <= max
}

/// Bounds `text` by its length in chars. Invalid UTF-8 never fits.
fn chars_within(text: &String, max: u32) -> bool {
    let bytes = text.len();
    if bytes == 0 || bytes > max * MAX_UTF8_CHAR_LEN || bytes as usize > MAX_TEXT_BYTES {
        return false;
    }
    let mut buf = [0u8; MAX_TEXT_BYTES];
    let slice = &mut buf[..bytes as usize];
    text.copy_into_slice(slice);
    match core::str::from_utf8(slice) {
        Ok(text) => len_within(text.chars().count() as u32, max),
        Err(_) => false,
    }
}

pub fn voter_id(voter_id: &Bytes) -> Result<(), Error> {
    if !len_within(voter_id.len(), MAX_VOTER_ID_LEN) {
        return Err(Error::InvalidVoterId);
    }
    Ok(())
}

pub fn encrypted_data(data: &Bytes) -> Result<(), Error> {
    if !len_within(data.len(), MAX_ENCRYPTED_DATA_LEN) {
        return Err(Error::InvalidEncryptedData);
    }
    Ok(())
}

pub fn proof(proof: &Bytes) -> Result<(), Error> {
    if proof.is_empty() {
        return Err(Error::InvalidProof);
    }
    Ok(())
}

pub fn location(location: &String) -> Result<(), Error> {
    if !chars_within(location, MAX_LOCATION_LEN) {
        return Err(Error::InvalidLocation);
    }
    Ok(())
}

pub fn age(age: u32) -> Result<(), Error> {
    if age < MIN_VOTER_AGE {
        return Err(Error::InvalidAge);
    }
    Ok(())
}

pub fn citizenship(citizenship: &String) -> Result<(), Error> {
    if !chars_within(citizenship, MAX_CITIZENSHIP_LEN) {
        return Err(Error::InvalidCitizenship);
    }
    Ok(())
}

pub fn penalty(penalty: u32) -> Result<(), Error> {
    if penalty > MAX_PENALTY {
        return Err(Error::InvalidPenalty);
    }
    Ok(())
}

pub fn currency(env: &Env, code: &String) -> Result<Currency, Error> {
    Currency::from_code(env, code).ok_or(Error::InvalidCurrency)
}

/// Checks every field of an update request, in the order the errors are
/// reported.
pub fn update_fields(new_data: &Bytes, new_location: &String, new_age: u32) -> Result<(), Error> {
    encrypted_data(new_data)?;
    location(new_location)?;
    age(new_age)
}
