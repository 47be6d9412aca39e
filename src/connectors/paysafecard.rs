pub mod client;
pub mod requests;
pub mod responses;
pub mod transformers;
pub mod validators;


pub use client::{GatewayClient, HttpGatewayClient};
pub use transformers::{
    create_amount, map_errors, PaysafecardPaymentRequest, PaysafecardPaymentResponse,
};
