//! Local checks on merchant-entered contract configuration values.
//!
//! Both validators accept an absent or blank value: the fields are optional
//! and only constrain the gateway when set.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    consts::{self, messages},
    errors::FieldError,
};

#[allow(clippy::expect_used)]
static COUNTRY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!?[A-Z]{2}$").expect("country code pattern is valid"));

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Minimum customer age: an integer between 0 and [`consts::MAX_MIN_AGE`].
pub fn verify_min_age(value: Option<&str>) -> Result<(), FieldError> {
    let Some(value) = non_blank(value) else {
        return Ok(());
    };

    match value.parse::<u8>() {
        Ok(age) if age <= consts::MAX_MIN_AGE => Ok(()),
        _ => Err(FieldError::new(
            consts::MIN_AGE_KEY,
            messages::MIN_AGE_INVALID,
        )),
    }
}

/// Country restriction: comma separated ISO 3166-1 alpha-2 codes, each
/// optionally negated with `!` (`DE`, `AT,DE`, `!FR`).
pub fn verify_country_restriction(value: Option<&str>) -> Result<(), FieldError> {
    let Some(value) = non_blank(value) else {
        return Ok(());
    };

    if value
        .split(',')
        .map(str::trim)
        .all(|code| COUNTRY_CODE.is_match(code))
    {
        Ok(())
    } else {
        Err(FieldError::new(
            consts::COUNTRY_RESTRICTION_KEY,
            messages::COUNTRY_RESTRICTION_INVALID,
        ))
    }
}
