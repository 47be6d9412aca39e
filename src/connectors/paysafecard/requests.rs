use hyperswitch_masking::Secret;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PaysafecardPaymentRequest {
    #[serde(rename = "type")]
    pub payment_type: &'static str,
    pub amount: String,
    pub currency: String,
    pub redirect: PaysafecardRedirect,
    pub notification_url: String,
    pub customer: PaysafecardCustomer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submerchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<String>,
    pub capture: bool,
    /// `Basic <credential>`, sent as a header and never in the body.
    #[serde(skip)]
    pub authorization: Secret<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaysafecardRedirect {
    pub success_url: String,
    pub failure_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaysafecardCustomer {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_restriction: Option<String>,
}
