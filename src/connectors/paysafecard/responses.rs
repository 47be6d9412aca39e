use serde::{Deserialize, Serialize};

/// Body returned by `POST /v1/payments`, for both accepted payments and
/// gateway-reported errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaysafecardPaymentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaysafecardPaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<PaysafecardRedirectResponse>,
}

impl PaysafecardPaymentResponse {
    pub fn is_error(&self) -> bool {
        self.code.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaysafecardRedirectResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaysafecardPaymentStatus {
    Initiated,
    Redirected,
    Expired,
    CanceledMerchant,
    CanceledCustomer,
    Authorized,
    Success,
    #[serde(other)]
    Unknown,
}
