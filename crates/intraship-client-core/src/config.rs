use url::Url;

use crate::error::IntrashipError;

pub const INTRASHIP_WSDL: &str = "http://www.intraship.de/ws/1_0/ISService/DE.wsdl";
pub const INTRASHIP_ENDPOINT: &str = "http://www.intraship.de/ws/1_0/de/ISService";
pub const INTRASHIP_TEST_WSDL: &str = "http://test-intraship.dhl.com/ws/1_0/ISService/DE.wsdl";
pub const INTRASHIP_TEST_ENDPOINT: &str = "http://test-intraship.dhl.com/ws/1_0/de/ISService";

/// Account credentials and identifiers, fixed for the lifetime of a client.
///
/// Missing credentials deserialize as empty strings so that they are reported
/// by [`ClientConfig::validate`] as a configuration error.
#[derive(Clone, typed_builder::TypedBuilder, serde::Deserialize)]
pub struct ClientConfig {
    #[builder(setter(into))]
    #[serde(default)]
    pub user: String,
    /// The account password.
    #[builder(setter(into))]
    #[serde(default)]
    pub signature: String,
    /// First part of the DHL account number.
    #[builder(setter(into))]
    #[serde(default)]
    pub ekp: String,
    #[builder(default = default_sub_id(), setter(into))]
    #[serde(default = "default_sub_id")]
    pub procedure_id: String,
    #[builder(default = default_sub_id(), setter(into))]
    #[serde(default = "default_sub_id")]
    pub partner_id: String,
}

fn default_sub_id() -> String {
    "01".to_string()
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("user", &self.user)
            .field("signature", &"<redacted>")
            .field("ekp", &self.ekp)
            .field("procedure_id", &self.procedure_id)
            .field("partner_id", &self.partner_id)
            .finish()
    }
}

impl ClientConfig {
    /// Rejects a configuration with a blank user, signature or EKP.
    pub fn validate(&self) -> Result<(), IntrashipError> {
        let required = [
            (&self.user, "User must be specified"),
            (&self.signature, "Signature (password) must be specified"),
            (
                &self.ekp,
                "EKP (first part of the DHL account number) must be specified",
            ),
        ];

        for (value, message) in required {
            if value.trim().is_empty() {
                return Err(IntrashipError::Configuration(message.into()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Production,
    Test,
}

impl Environment {
    pub const fn wsdl(self) -> &'static str {
        match self {
            Self::Production => INTRASHIP_WSDL,
            Self::Test => INTRASHIP_TEST_WSDL,
        }
    }

    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Production => INTRASHIP_ENDPOINT,
            Self::Test => INTRASHIP_TEST_ENDPOINT,
        }
    }

    pub fn endpoint_url(self) -> Result<Url, IntrashipError> {
        Url::parse(self.endpoint())
            .map_err(|e| IntrashipError::Configuration(format!("invalid endpoint: {e}").into()))
    }
}
