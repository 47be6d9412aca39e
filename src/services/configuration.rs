use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    configs::Config,
    connectors::paysafecard::{
        map_errors, validators, GatewayClient, HttpGatewayClient, PaysafecardPaymentRequest,
        PaysafecardPaymentResponse,
    },
    consts::{self, messages},
    errors::{ConfigurationError, ConnectorError, CustomResult},
    localization::{BundledLocalization, LocalizationService},
    logger,
    types::{
        CheckErrors, ConfigurationParameter, ContractParametersCheckRequest, ListBoxOption,
        Locale, ParameterKind, ReleaseInformation,
    },
};

/// Contract configuration operations called by the host's configuration UI.
#[async_trait]
pub trait ConfigurationService: Send + Sync {
    /// Parameters the merchant fills in, labelled for `locale`.
    fn get_parameters(&self, locale: &Locale) -> Vec<ConfigurationParameter>;

    /// Validates a contract configuration, returning field key to message.
    /// An empty map means the configuration was accepted.
    async fn check(&self, request: &ContractParametersCheckRequest) -> CheckErrors;

    fn get_release_information(&self) -> ReleaseInformation;

    fn get_name(&self, locale: &Locale) -> String;
}

pub struct PaysafecardConfigurationService {
    client: Arc<dyn GatewayClient>,
    localization: Arc<dyn LocalizationService>,
    release: ReleaseInformation,
}

impl PaysafecardConfigurationService {
    pub fn new(
        client: Arc<dyn GatewayClient>,
        localization: Arc<dyn LocalizationService>,
        release: ReleaseInformation,
    ) -> Self {
        Self {
            client,
            localization,
            release,
        }
    }

    /// Wires the production collaborators described by `config`.
    pub fn from_config(config: &Config) -> CustomResult<Self, ConfigurationError> {
        logger::setup(&config.log);
        let client = HttpGatewayClient::new(config.gateway.clone())?;
        let localization = BundledLocalization::new()?;
        let release = config.release.to_release_information()?;
        Ok(Self::new(Arc::new(client), Arc::new(localization), release))
    }

    fn localized(&self, key: &str, locale: &Locale) -> String {
        self.localization.get_safe_localized_string(key, locale)
    }

    fn parameter(
        &self,
        key: &str,
        locale: &Locale,
        required: bool,
        with_description: bool,
        kind: ParameterKind,
    ) -> ConfigurationParameter {
        ConfigurationParameter {
            key: key.to_string(),
            label: self.localized(&format!("contract.{key}.label"), locale),
            description: with_description
                .then(|| self.localized(&format!("contract.{key}.description"), locale)),
            required,
            kind,
        }
    }

    fn validate_fields(&self, request: &ContractParametersCheckRequest) -> CheckErrors {
        let configuration = &request.contract_configuration;
        let value = |key: &str| {
            configuration
                .get_property(key)
                .map(|property| property.value.as_str())
        };

        [
            validators::verify_min_age(value(consts::MIN_AGE_KEY)),
            validators::verify_country_restriction(value(consts::COUNTRY_RESTRICTION_KEY)),
        ]
        .into_iter()
        .filter_map(Result::err)
        .map(|error| {
            (
                error.field.to_string(),
                self.localized(error.message, &request.locale),
            )
        })
        .collect()
    }

    async fn probe_gateway(
        &self,
        request: &ContractParametersCheckRequest,
    ) -> CustomResult<PaysafecardPaymentResponse, ConnectorError> {
        let check_request = PaysafecardPaymentRequest::try_from(request)?;
        let is_sandbox = request
            .environment
            .as_ref()
            .is_some_and(|environment| environment.is_sandbox);
        self.client.send(&check_request, is_sandbox).await
    }
}

#[async_trait]
impl ConfigurationService for PaysafecardConfigurationService {
    fn get_parameters(&self, locale: &Locale) -> Vec<ConfigurationParameter> {
        let kyc_levels = ParameterKind::ListBox {
            options: vec![
                ListBoxOption {
                    value: consts::KYC_LEVEL_SIMPLE.to_string(),
                    label: self.localized("contract.kycLevel.simple", locale),
                },
                ListBoxOption {
                    value: consts::KYC_LEVEL_FULL.to_string(),
                    label: self.localized("contract.kycLevel.full", locale),
                },
            ],
        };

        vec![
            self.parameter(consts::MERCHANT_NAME_KEY, locale, true, false, ParameterKind::Input),
            self.parameter(consts::MERCHANT_ID_KEY, locale, true, false, ParameterKind::Input),
            self.parameter(consts::AUTHORISATION_KEY, locale, true, true, ParameterKind::Password),
            self.parameter(consts::SETTLEMENT_KEY, locale, false, false, ParameterKind::Password),
            self.parameter(consts::MIN_AGE_KEY, locale, false, true, ParameterKind::Input),
            self.parameter(consts::KYC_LEVEL_KEY, locale, false, true, kyc_levels),
            self.parameter(consts::COUNTRY_RESTRICTION_KEY, locale, false, true, ParameterKind::Input),
        ]
    }

    #[logger::instrument(skip_all, fields(locale = ?request.locale))]
    async fn check(&self, request: &ContractParametersCheckRequest) -> CheckErrors {
        let mut errors = self.validate_fields(request);
        if !errors.is_empty() {
            logger::info!(rejected = ?errors.keys().collect::<Vec<_>>(), "contract configuration rejected locally");
            return errors;
        }

        match self.probe_gateway(request).await {
            Ok(response) => {
                if response.is_error() {
                    logger::info!(code = ?response.code, param = ?response.param, "gateway rejected contract configuration");
                    map_errors(&response, &mut errors);
                }
            }
            Err(report) => {
                logger::error!(error = ?report, "unable to check the connection");
                errors.insert(
                    consts::GENERIC_ERROR.to_string(),
                    report.current_context().to_string(),
                );
            }
        }

        errors
    }

    fn get_release_information(&self) -> ReleaseInformation {
        self.release.clone()
    }

    fn get_name(&self, locale: &Locale) -> String {
        self.localized(messages::PROJECT_NAME, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_utils::{configuration, environment, FakeGateway};

    fn release() -> ReleaseInformation {
        ReleaseInformation {
            version: "1.0.0".to_string(),
            date: time::Date::from_calendar_date(2026, time::Month::October, 17).unwrap(),
        }
    }

    fn service(gateway: Arc<FakeGateway>) -> PaysafecardConfigurationService {
        PaysafecardConfigurationService::new(
            gateway,
            Arc::new(BundledLocalization::new().unwrap()),
            release(),
        )
    }

    fn check_request() -> ContractParametersCheckRequest {
        ContractParametersCheckRequest {
            contract_configuration: configuration(),
            environment: Some(environment()),
            locale: Locale::new("en"),
        }
    }

    fn gateway_error(code: &str, param: Option<&str>, message: &str) -> PaysafecardPaymentResponse {
        PaysafecardPaymentResponse {
            code: Some(code.to_string()),
            param: param.map(str::to_string),
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn parameters_cover_the_contract_form() {
        let gateway = Arc::new(FakeGateway::answering(PaysafecardPaymentResponse::default()));
        let parameters = service(gateway).get_parameters(&Locale::new("en"));

        let keys: Vec<_> = parameters.iter().map(|parameter| parameter.key.as_str()).collect();
        assert_eq!(
            keys,
            [
                consts::MERCHANT_NAME_KEY,
                consts::MERCHANT_ID_KEY,
                consts::AUTHORISATION_KEY,
                consts::SETTLEMENT_KEY,
                consts::MIN_AGE_KEY,
                consts::KYC_LEVEL_KEY,
                consts::COUNTRY_RESTRICTION_KEY,
            ]
        );

        let authorisation = &parameters[2];
        assert!(authorisation.required);
        assert_eq!(authorisation.kind, ParameterKind::Password);
        assert_eq!(authorisation.label, "Authorisation key");
        assert!(authorisation.description.is_some());

        let settlement = &parameters[3];
        assert!(!settlement.required);
        assert_eq!(settlement.kind, ParameterKind::Password);

        let country_restriction = &parameters[6];
        assert_eq!(country_restriction.label, "Country restriction");
        assert!(country_restriction
            .description
            .as_deref()
            .is_some_and(|description| description.contains("ISO")));
    }

    #[test]
    fn kyc_level_offers_two_locale_independent_options() {
        let gateway = Arc::new(FakeGateway::answering(PaysafecardPaymentResponse::default()));
        let service = service(gateway);

        let options = |locale: &str| {
            service
                .get_parameters(&Locale::new(locale))
                .into_iter()
                .find(|parameter| parameter.key == consts::KYC_LEVEL_KEY)
                .map(|parameter| match parameter.kind {
                    ParameterKind::ListBox { options } => options,
                    other => panic!("kyc level is not a list box: {other:?}"),
                })
                .unwrap()
        };

        let english = options("en");
        let french = options("fr");
        assert_eq!(english.len(), 2);
        assert_ne!(english[0].label, english[1].label);
        assert_eq!(
            english.iter().map(|option| &option.value).collect::<Vec<_>>(),
            french.iter().map(|option| &option.value).collect::<Vec<_>>()
        );
        assert_eq!(english[1].value, consts::KYC_LEVEL_FULL);
        assert_eq!(french[1].label, "Complet");
    }

    #[tokio::test]
    async fn invalid_min_age_is_reported_without_calling_the_gateway() {
        let gateway = Arc::new(FakeGateway::answering(PaysafecardPaymentResponse::default()));
        let service = service(gateway.clone());

        let mut request = check_request();
        request.contract_configuration = request
            .contract_configuration
            .with_property(consts::MIN_AGE_KEY, "abc");

        let errors = service.check(&request).await;

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(consts::MIN_AGE_KEY).map(String::as_str),
            Some("Minimum age must be a whole number between 0 and 99")
        );
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn field_errors_accumulate_and_are_localized() {
        let gateway = Arc::new(FakeGateway::answering(PaysafecardPaymentResponse::default()));
        let service = service(gateway.clone());

        let mut request = check_request();
        request.locale = Locale::new("fr-FR");
        request.contract_configuration = request
            .contract_configuration
            .with_property(consts::MIN_AGE_KEY, "150")
            .with_property(consts::COUNTRY_RESTRICTION_KEY, "germany");

        let errors = service.check(&request).await;

        assert_eq!(errors.len(), 2);
        assert!(errors[consts::MIN_AGE_KEY].starts_with("L'âge minimum"));
        assert!(errors[consts::COUNTRY_RESTRICTION_KEY].starts_with("La restriction de pays"));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn accepted_configuration_probes_the_sandbox() {
        let gateway = Arc::new(FakeGateway::answering(PaysafecardPaymentResponse {
            id: Some("pay_1".to_string()),
            ..Default::default()
        }));
        let service = service(gateway.clone());

        let errors = service.check(&check_request()).await;

        assert!(errors.is_empty(), "{errors:?}");
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].amount, consts::CHECK_AMOUNT);
        assert!(calls[0].is_sandbox);
        assert!(!calls[0].capture);
    }

    #[tokio::test]
    async fn production_environment_is_forwarded() {
        let gateway = Arc::new(FakeGateway::answering(PaysafecardPaymentResponse::default()));
        let service = service(gateway.clone());

        let mut request = check_request();
        if let Some(environment) = request.environment.as_mut() {
            environment.is_sandbox = false;
        }
        service.check(&request).await;

        assert!(!gateway.calls()[0].is_sandbox);
    }

    #[tokio::test]
    async fn gateway_errors_are_mapped_to_fields() {
        let cases = [
            (gateway_error("invalid_api_key", None, "bad key"), consts::AUTHORISATION_KEY),
            (gateway_error("invalid_restriction", None, "bad country"), consts::COUNTRY_RESTRICTION_KEY),
            (
                gateway_error("invalid_request_parameter", Some("kyc_level"), "bad kyc"),
                consts::KYC_LEVEL_KEY,
            ),
            (gateway_error("general_technical_error", None, "boom"), consts::GENERIC_ERROR),
        ];

        for (response, field) in cases {
            let message = response.message.clone();
            let service = service(Arc::new(FakeGateway::answering(response)));
            let errors = service.check(&check_request()).await;
            assert_eq!(errors.len(), 1, "{errors:?}");
            assert_eq!(errors.get(field), message.as_ref());
        }
    }

    #[tokio::test]
    async fn transport_failure_is_reported_as_generic_error() {
        let gateway = Arc::new(FakeGateway::failing(ConnectorError::TransportError {
            message: "connection refused".to_string(),
        }));
        let errors = service(gateway).check(&check_request()).await;

        assert_eq!(errors.len(), 1);
        assert!(errors[consts::GENERIC_ERROR].contains("connection refused"));
    }

    #[tokio::test]
    async fn missing_credential_is_reported_before_any_call() {
        let gateway = Arc::new(FakeGateway::answering(PaysafecardPaymentResponse::default()));
        let service = service(gateway.clone());

        let mut request = check_request();
        request
            .contract_configuration
            .properties
            .remove(consts::AUTHORISATION_KEY);
        let errors = service.check(&request).await;

        assert!(errors[consts::GENERIC_ERROR].contains("authorisation key"));
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn metadata_is_served_from_configuration() {
        let gateway = Arc::new(FakeGateway::answering(PaysafecardPaymentResponse::default()));
        let service = service(gateway);

        assert_eq!(service.get_release_information(), release());
        assert_eq!(service.get_name(&Locale::new("fr")), "paysafecard");
    }

    #[test]
    fn builds_from_bundled_configuration() {
        let config = Config::new().unwrap();
        let service = PaysafecardConfigurationService::from_config(&config).unwrap();
        assert_eq!(service.get_release_information().version, config.release.version);
    }
}
