//! Host platform data shapes consumed and produced by the connector.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

/// Amount expressed in the currency's smallest denomination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize)]
pub struct MinorUnit(i64);

impl MinorUnit {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }

    pub fn is_greater_than(&self, value: i64) -> bool {
        self.0 > value
    }
}

impl fmt::Display for MinorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 4217 currency code as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn currency_code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Amount {
    pub amount_in_smallest_unit: Option<MinorUnit>,
    pub currency: Option<Currency>,
}

impl Amount {
    pub fn new(amount: i64, currency: &str) -> Self {
        Self {
            amount_in_smallest_unit: Some(MinorUnit::new(amount)),
            currency: Some(Currency::new(currency)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Buyer {
    pub customer_identifier: Option<String>,
    pub email: Option<String>,
}

/// Host environment: callback URLs and the sandbox switch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Environment {
    pub notification_url: String,
    pub redirection_return_url: String,
    pub redirection_cancel_url: String,
    pub is_sandbox: bool,
}

/// Locale requested by the host, as a BCP 47 style tag (`fr`, `en-GB`, `fr_FR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Lowercased primary language subtag.
    pub fn language(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContractProperty {
    pub value: String,
}

impl ContractProperty {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Field key to error message, as returned by a configuration check.
pub type CheckErrors = HashMap<String, String>;

/// Merchant contract settings stored by the host for this payment method.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContractConfiguration {
    pub payment_method_identifier: String,
    pub properties: HashMap<String, ContractProperty>,
}

impl ContractConfiguration {
    pub fn new(payment_method_identifier: impl Into<String>) -> Self {
        Self {
            payment_method_identifier: payment_method_identifier.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, key: &str, value: impl Into<String>) -> Self {
        self.properties
            .insert(key.to_string(), ContractProperty::new(value));
        self
    }

    pub fn get_property(&self, key: &str) -> Option<&ContractProperty> {
        self.properties.get(key)
    }

    /// Value of `key`, treating blank values as absent.
    pub fn get_optional_value(&self, key: &str) -> Option<&str> {
        self.get_property(key)
            .map(|property| property.value.trim())
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContractParametersCheckRequest {
    pub contract_configuration: ContractConfiguration,
    pub environment: Option<Environment>,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentRequest {
    pub transaction_id: String,
    pub amount: Option<Amount>,
    pub buyer: Option<Buyer>,
    pub contract_configuration: ContractConfiguration,
    pub environment: Option<Environment>,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RefundRequest {
    pub transaction_id: String,
    pub partner_transaction_id: String,
    pub amount: Option<Amount>,
    pub buyer: Option<Buyer>,
    pub contract_configuration: ContractConfiguration,
    pub environment: Option<Environment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBoxOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKind {
    Input,
    Password,
    ListBox { options: Vec<ListBoxOption> },
}

/// One entry of the contract configuration form shown by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationParameter {
    pub key: String,
    pub label: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: ParameterKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInformation {
    pub version: String,
    pub date: time::Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureCause {
    InvalidData,
    CommunicationError,
    PaymentProviderError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentResponse {
    Redirect {
        payment_id: String,
        redirect_url: String,
    },
    Failure {
        error_code: String,
        message: Option<String>,
        cause: FailureCause,
    },
}
