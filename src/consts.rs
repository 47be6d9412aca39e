//! Contract configuration keys and gateway constants.

/// Reserved error key for failures not attributable to a configuration field.
pub const GENERIC_ERROR: &str = "GENERIC_ERROR";

pub const MERCHANT_NAME_KEY: &str = "merchantName";
pub const MERCHANT_ID_KEY: &str = "merchantId";
pub const AUTHORISATION_KEY: &str = "authorisationKey";
pub const SETTLEMENT_KEY: &str = "settlementKey";
pub const MIN_AGE_KEY: &str = "minAge";
pub const KYC_LEVEL_KEY: &str = "kycLevel";
pub const COUNTRY_RESTRICTION_KEY: &str = "countryRestriction";

pub const KYC_LEVEL_SIMPLE: &str = "SIMPLE";
pub const KYC_LEVEL_FULL: &str = "FULL";

pub const SANDBOX_URL: &str = "https://apitest.paysafecard.com";
pub const PRODUCTION_URL: &str = "https://api.paysafecard.com";
pub const PAYMENTS_PATH: &str = "/v1/payments";

pub const PAYMENT_TYPE: &str = "PAYSAFECARD";

/// Probe amount and currency used when checking a contract configuration.
pub const CHECK_AMOUNT: &str = "0.01";
pub const CHECK_CURRENCY: &str = "EUR";
pub const CHECK_CUSTOMER_ID: &str = "dumbId";

/// Highest accepted value for the minimum customer age.
pub const MAX_MIN_AGE: u8 = 99;

pub const RELEASE_DATE_FORMAT: &str = "[day]/[month]/[year]";

pub const ENV_PREFIX: &str = "PAYSAFECARD";

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
    pub(crate) const AUTHORIZATION: &str = "Authorization";
}

/// Gateway error codes with a dedicated field mapping.
pub(crate) mod gateway_codes {
    pub(crate) const INVALID_API_KEY: &str = "invalid_api_key";
    pub(crate) const INVALID_REQUEST_PARAMETER: &str = "invalid_request_parameter";
    pub(crate) const INVALID_RESTRICTION: &str = "invalid_restriction";

    pub(crate) const PARAM_KYC_LEVEL: &str = "kyc_level";
    pub(crate) const PARAM_MIN_AGE: &str = "min_age";
}

/// Localization keys.
pub(crate) mod messages {
    pub(crate) const PROJECT_NAME: &str = "project.name";
    pub(crate) const MIN_AGE_INVALID: &str = "error.minAge.invalid";
    pub(crate) const COUNTRY_RESTRICTION_INVALID: &str = "error.countryRestriction.invalid";
}
