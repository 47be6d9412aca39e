//! Operations exposed to the host platform.

pub mod configuration;
pub mod payment;

#[cfg(test)]
pub(crate) mod test_utils;

pub use configuration::{ConfigurationService, PaysafecardConfigurationService};
pub use payment::{PaymentService, PaysafecardPaymentService};
