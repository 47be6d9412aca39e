use std::time::Duration;

use async_trait::async_trait;
use error_stack::{report, ResultExt};
use hyperswitch_masking::PeekInterface;

use super::transformers::{PaysafecardPaymentRequest, PaysafecardPaymentResponse};
use crate::{
    configs,
    consts::{self, headers},
    errors::{ConfigurationError, ConnectorError, CustomResult},
};

/// Outbound access to the paysafecard payments endpoint.
///
/// A gateway-reported error is a successful call: its body is returned and
/// only connection, encoding or decoding failures are errors.
#[async_trait]
pub trait GatewayClient: Send + Sync {
    async fn send(
        &self,
        request: &PaysafecardPaymentRequest,
        is_sandbox: bool,
    ) -> CustomResult<PaysafecardPaymentResponse, ConnectorError>;
}

#[derive(Debug, Clone)]
pub struct HttpGatewayClient {
    client: reqwest::Client,
    gateway: configs::Gateway,
}

impl HttpGatewayClient {
    pub fn new(gateway: configs::Gateway) -> CustomResult<Self, ConfigurationError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(gateway.connect_timeout_ms))
            .timeout(Duration::from_millis(gateway.total_timeout_ms))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .change_context(ConfigurationError::HttpClientBuildFailed)?;

        Ok(Self { client, gateway })
    }

    /// Payments endpoint under the configured base, keeping any base path
    /// (`https://proxy.example.com/psc` gives `https://proxy.example.com/psc/v1/payments`).
    pub fn payments_url(&self, is_sandbox: bool) -> CustomResult<url::Url, ConnectorError> {
        let base_url = self.gateway.base_url(is_sandbox);
        let directory = format!("{}/", base_url.trim().trim_end_matches('/'));
        url::Url::parse(&directory)
            .and_then(|base| base.join(consts::PAYMENTS_PATH.trim_start_matches('/')))
            .change_context(ConnectorError::FailedToObtainIntegrationUrl)
            .attach_printable_lazy(|| format!("base url: {base_url}"))
    }
}

#[async_trait]
impl GatewayClient for HttpGatewayClient {
    async fn send(
        &self,
        request: &PaysafecardPaymentRequest,
        is_sandbox: bool,
    ) -> CustomResult<PaysafecardPaymentResponse, ConnectorError> {
        let url = self.payments_url(is_sandbox)?;
        let body =
            serde_json::to_vec(request).change_context(ConnectorError::RequestEncodingFailed)?;

        tracing::info!(url = %url, sandbox = is_sandbox, request = ?request, "sending paysafecard request");

        let response = self
            .client
            .post(url)
            .header(headers::CONTENT_TYPE, "application/json")
            .header(headers::AUTHORIZATION, request.authorization.peek())
            .body(body)
            .send()
            .await
            .map_err(|err| {
                report!(ConnectorError::TransportError {
                    message: err.to_string(),
                })
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|err| {
            report!(ConnectorError::TransportError {
                message: err.to_string(),
            })
        })?;

        tracing::info!(status = status.as_u16(), "paysafecard response received");

        serde_json::from_slice::<PaysafecardPaymentResponse>(&bytes)
            .change_context(ConnectorError::ResponseDeserializationFailed)
            .attach_printable_lazy(|| format!("http status: {status}"))
    }
}
