use error_stack::report;
use hyperswitch_masking::Secret;

use super::requests;
use crate::{
    consts::{self, gateway_codes},
    errors::ConnectorError,
    types::{
        Amount, Buyer, CheckErrors, ContractConfiguration, ContractParametersCheckRequest,
        Environment, FailureCause, MinorUnit, PaymentRequest, PaymentResponse, RefundRequest,
    },
};

pub use super::requests::*;
pub use super::responses::*;

type Error = error_stack::Report<ConnectorError>;

// Amount encoding

/// Renders a smallest-unit amount as the gateway's two-decimal string.
///
/// The gateway always expects two fractional digits, whatever the currency.
/// Negative amounts keep their sign (`-5` renders as `"-0.05"`); request
/// building rejects them before this is reached.
pub fn create_amount(amount: MinorUnit) -> String {
    let value = amount.get_amount_as_i64();
    let sign = if value < 0 { "-" } else { "" };
    let digits = format!("{:03}", value.unsigned_abs());
    let (units, cents) = digits.split_at(digits.len() - 2);
    format!("{sign}{units}.{cents}")
}

// Request building

fn get_authorization(configuration: &ContractConfiguration) -> Result<Secret<String>, Error> {
    configuration
        .get_optional_value(consts::AUTHORISATION_KEY)
        .map(|key| Secret::new(format!("Basic {key}")))
        .ok_or_else(|| {
            report!(ConnectorError::invalid_request("missing authorisation key"))
        })
}

fn get_environment(environment: Option<&Environment>) -> Result<&Environment, Error> {
    let environment = environment.ok_or_else(|| {
        report!(ConnectorError::invalid_request("missing environment"))
    })?;

    [
        ("notification", &environment.notification_url),
        ("redirection return", &environment.redirection_return_url),
        ("redirection cancel", &environment.redirection_cancel_url),
    ]
    .into_iter()
    .try_for_each(|(name, value)| {
        url::Url::parse(value.trim()).map(|_| ()).map_err(|err| {
            report!(ConnectorError::invalid_request(format!("invalid {name} url")))
                .attach_printable(err.to_string())
        })
    })?;

    Ok(environment)
}

fn get_amount(amount: Option<&Amount>) -> Result<(String, String), Error> {
    let value = amount
        .and_then(|amount| amount.amount_in_smallest_unit)
        .filter(|value| value.is_greater_than(0))
        .ok_or_else(|| {
            report!(ConnectorError::invalid_request("missing or non positive amount"))
        })?;

    let currency = amount
        .and_then(|amount| amount.currency.as_ref())
        .map(|currency| currency.currency_code().trim())
        .filter(|code| !code.is_empty())
        .ok_or_else(|| {
            report!(ConnectorError::invalid_request("missing currency"))
        })?;

    Ok((create_amount(value), currency.to_string()))
}

fn get_customer_id(buyer: Option<&Buyer>) -> Result<String, Error> {
    buyer
        .and_then(|buyer| buyer.customer_identifier.as_deref())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            report!(ConnectorError::invalid_request("missing buyer customer identifier"))
        })
}

fn build_redirect(environment: &Environment) -> requests::PaysafecardRedirect {
    requests::PaysafecardRedirect {
        success_url: environment.redirection_return_url.clone(),
        failure_url: environment.redirection_cancel_url.clone(),
    }
}

fn build_customer(id: String, configuration: &ContractConfiguration) -> requests::PaysafecardCustomer {
    let optional = |key: &str| configuration.get_optional_value(key).map(str::to_string);
    requests::PaysafecardCustomer {
        id,
        min_age: optional(consts::MIN_AGE_KEY),
        kyc_level: optional(consts::KYC_LEVEL_KEY),
        country_restriction: configuration
            .get_optional_value(consts::COUNTRY_RESTRICTION_KEY)
            .map(normalize_country_restriction),
    }
}

/// Strips the whitespace tolerated around list entries (`"AT, DE"` is sent as `"AT,DE"`).
fn normalize_country_restriction(value: &str) -> String {
    value
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(",")
}

fn build_transaction_request(
    amount: Option<&Amount>,
    buyer: Option<&Buyer>,
    configuration: &ContractConfiguration,
    environment: Option<&Environment>,
) -> Result<PaysafecardPaymentRequest, Error> {
    let authorization = get_authorization(configuration)?;
    let (amount, currency) = get_amount(amount)?;
    let environment = get_environment(environment)?;
    let customer_id = get_customer_id(buyer)?;

    Ok(PaysafecardPaymentRequest {
        payment_type: consts::PAYMENT_TYPE,
        amount,
        currency,
        redirect: build_redirect(environment),
        notification_url: environment.notification_url.clone(),
        customer: build_customer(customer_id, configuration),
        submerchant_id: None,
        shop_id: None,
        capture: false,
        authorization,
    })
}

impl TryFrom<&ContractParametersCheckRequest> for PaysafecardPaymentRequest {
    type Error = Error;
    fn try_from(item: &ContractParametersCheckRequest) -> Result<Self, Self::Error> {
        let configuration = &item.contract_configuration;
        let authorization = get_authorization(configuration)?;
        let environment = get_environment(item.environment.as_ref())?;

        Ok(Self {
            payment_type: consts::PAYMENT_TYPE,
            amount: consts::CHECK_AMOUNT.to_string(),
            currency: consts::CHECK_CURRENCY.to_string(),
            redirect: build_redirect(environment),
            notification_url: environment.notification_url.clone(),
            customer: build_customer(consts::CHECK_CUSTOMER_ID.to_string(), configuration),
            submerchant_id: None,
            shop_id: None,
            capture: false,
            authorization,
        })
    }
}

impl TryFrom<&PaymentRequest> for PaysafecardPaymentRequest {
    type Error = Error;
    fn try_from(item: &PaymentRequest) -> Result<Self, Self::Error> {
        build_transaction_request(
            item.amount.as_ref(),
            item.buyer.as_ref(),
            &item.contract_configuration,
            item.environment.as_ref(),
        )
    }
}

impl TryFrom<&RefundRequest> for PaysafecardPaymentRequest {
    type Error = Error;
    fn try_from(item: &RefundRequest) -> Result<Self, Self::Error> {
        build_transaction_request(
            item.amount.as_ref(),
            item.buyer.as_ref(),
            &item.contract_configuration,
            item.environment.as_ref(),
        )
    }
}

// Response handling

/// Adds the configuration field errors carried by a gateway response.
///
/// Messages are the gateway's own text, falling back to the error code.
/// `invalid_request_parameter` errors naming an unknown parameter are dropped.
pub fn map_errors(response: &PaysafecardPaymentResponse, errors: &mut CheckErrors) {
    let Some(code) = response.code.as_deref() else {
        return;
    };
    let message = response.message.clone().unwrap_or_else(|| code.to_string());

    let field = match code {
        gateway_codes::INVALID_API_KEY => Some(consts::AUTHORISATION_KEY),
        gateway_codes::INVALID_REQUEST_PARAMETER => match response.param.as_deref() {
            Some(gateway_codes::PARAM_KYC_LEVEL) => Some(consts::KYC_LEVEL_KEY),
            Some(gateway_codes::PARAM_MIN_AGE) => Some(consts::MIN_AGE_KEY),
            other => {
                tracing::warn!(param = ?other, "unmapped invalid_request_parameter error");
                None
            }
        },
        gateway_codes::INVALID_RESTRICTION => Some(consts::COUNTRY_RESTRICTION_KEY),
        _ => Some(consts::GENERIC_ERROR),
    };

    if let Some(field) = field {
        errors.insert(field.to_string(), message);
    }
}

fn failure_cause(code: &str) -> FailureCause {
    match code {
        gateway_codes::INVALID_REQUEST_PARAMETER | gateway_codes::INVALID_RESTRICTION => {
            FailureCause::InvalidData
        }
        _ => FailureCause::PaymentProviderError,
    }
}

impl From<PaysafecardPaymentResponse> for PaymentResponse {
    fn from(response: PaysafecardPaymentResponse) -> Self {
        if let Some(error_code) = response.code {
            return Self::Failure {
                cause: failure_cause(&error_code),
                error_code,
                message: response.message,
            };
        }

        let auth_url = response
            .redirect
            .and_then(|redirect| redirect.auth_url);

        match (response.id, auth_url) {
            (Some(payment_id), Some(redirect_url)) => Self::Redirect {
                payment_id,
                redirect_url,
            },
            _ => Self::Failure {
                error_code: "missing_auth_url".to_string(),
                message: Some("gateway response carries no redirection URL".to_string()),
                cause: FailureCause::PaymentProviderError,
            },
        }
    }
}
