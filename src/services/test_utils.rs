use std::sync::Mutex;

use async_trait::async_trait;
use error_stack::report;

use crate::{
    connectors::paysafecard::{GatewayClient, PaysafecardPaymentRequest, PaysafecardPaymentResponse},
    consts,
    errors::{ConnectorError, CustomResult},
    types::{ContractConfiguration, Environment},
};

/// What the fake gateway saw for one call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub amount: String,
    pub capture: bool,
    pub is_sandbox: bool,
}

/// Gateway double answering every call with the same canned outcome.
pub(crate) struct FakeGateway {
    outcome: Result<PaysafecardPaymentResponse, ConnectorError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeGateway {
    pub(crate) fn answering(response: PaysafecardPaymentResponse) -> Self {
        Self {
            outcome: Ok(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(error: ConnectorError) -> Self {
        Self {
            outcome: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GatewayClient for FakeGateway {
    async fn send(
        &self,
        request: &PaysafecardPaymentRequest,
        is_sandbox: bool,
    ) -> CustomResult<PaysafecardPaymentResponse, ConnectorError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                amount: request.amount.clone(),
                capture: request.capture,
                is_sandbox,
            });
        }
        self.outcome.clone().map_err(|error| report!(error))
    }
}

pub(crate) fn environment() -> Environment {
    Environment {
        notification_url: "https://host.example.com/notify".to_string(),
        redirection_return_url: "https://host.example.com/success".to_string(),
        redirection_cancel_url: "https://host.example.com/cancel".to_string(),
        is_sandbox: true,
    }
}

pub(crate) fn configuration() -> ContractConfiguration {
    ContractConfiguration::new("PAYSAFECARD")
        .with_property(consts::MERCHANT_NAME_KEY, "Test shop")
        .with_property(consts::MERCHANT_ID_KEY, "1090001806")
        .with_property(consts::AUTHORISATION_KEY, "cHNjX2tleQ==")
        .with_property(consts::MIN_AGE_KEY, "18")
        .with_property(consts::KYC_LEVEL_KEY, consts::KYC_LEVEL_FULL)
        .with_property(consts::COUNTRY_RESTRICTION_KEY, "AT,DE")
}
