use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    configs::Config,
    connectors::paysafecard::{GatewayClient, HttpGatewayClient, PaysafecardPaymentRequest},
    errors::{ConfigurationError, ConnectorError, CustomResult},
    logger,
    types::{FailureCause, PaymentRequest, PaymentResponse},
};

#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Creates the payment at the gateway and returns where to send the buyer.
    async fn payment_request(&self, request: &PaymentRequest) -> PaymentResponse;
}

pub struct PaysafecardPaymentService {
    client: Arc<dyn GatewayClient>,
}

impl PaysafecardPaymentService {
    pub fn new(client: Arc<dyn GatewayClient>) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> CustomResult<Self, ConfigurationError> {
        logger::setup(&config.log);
        let client = HttpGatewayClient::new(config.gateway.clone())?;
        Ok(Self::new(Arc::new(client)))
    }
}

fn failure(error: &ConnectorError) -> PaymentResponse {
    let (error_code, cause) = match error {
        ConnectorError::InvalidRequest { .. } => ("invalid_request", FailureCause::InvalidData),
        ConnectorError::TransportError { .. } => {
            ("communication_error", FailureCause::CommunicationError)
        }
        ConnectorError::RequestEncodingFailed
        | ConnectorError::ResponseDeserializationFailed
        | ConnectorError::FailedToObtainIntegrationUrl => {
            ("connector_error", FailureCause::PaymentProviderError)
        }
    };
    PaymentResponse::Failure {
        error_code: error_code.to_string(),
        message: Some(error.to_string()),
        cause,
    }
}

#[async_trait]
impl PaymentService for PaysafecardPaymentService {
    #[logger::instrument(skip_all, fields(transaction_id = %request.transaction_id))]
    async fn payment_request(&self, request: &PaymentRequest) -> PaymentResponse {
        let payment_request = match PaysafecardPaymentRequest::try_from(request) {
            Ok(payment_request) => payment_request,
            Err(report) => {
                logger::warn!(error = ?report, "unable to build paysafecard payment request");
                return failure(report.current_context());
            }
        };

        let is_sandbox = request
            .environment
            .as_ref()
            .is_some_and(|environment| environment.is_sandbox);

        match self.client.send(&payment_request, is_sandbox).await {
            Ok(response) => {
                let response = PaymentResponse::from(response);
                logger::info!(response = ?response, "paysafecard payment created");
                response
            }
            Err(report) => {
                logger::error!(error = ?report, "paysafecard payment request failed");
                failure(report.current_context())
            }
        }
    }
}
