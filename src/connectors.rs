// Connector registry and exports

pub mod paysafecard;

pub use paysafecard::{GatewayClient, HttpGatewayClient};
