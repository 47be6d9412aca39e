// paysafecard connector library
// Contract configuration checks and payment initiation for the paysafecard gateway

pub mod configs;
pub mod connectors;
pub mod consts;
pub mod errors;
pub mod localization;
pub mod logger;
pub mod services;
pub mod types;

pub use services::{
    ConfigurationService, PaymentService, PaysafecardConfigurationService,
    PaysafecardPaymentService,
};
