//! Server settings and the configuration object derived from them.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;

/// Settings layered from CLI flags, `UNIT_CONVERTER_*` environment variables
/// and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "UNIT_CONVERTER")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Skip mounting the Swagger UI, the OpenAPI route and the root redirect.
    #[ortho_config(default = false)]
    pub disable_swagger_ui: bool,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to the front-end's default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) swagger_ui: bool,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr` with Swagger UI enabled.
    #[must_use]
    pub fn new(bind_addr: (String, u16)) -> Self {
        Self {
            bind_addr,
            swagger_ui: true,
        }
    }

    /// Toggle the interactive documentation routes.
    #[must_use]
    pub fn with_swagger_ui(mut self, enabled: bool) -> Self {
        self.swagger_ui = enabled;
        self
    }
}

impl From<&ServerSettings> for ServerConfig {
    fn from(settings: &ServerSettings) -> Self {
        Self::new((settings.host().to_owned(), settings.port()))
            .with_swagger_ui(!settings.disable_swagger_ui)
    }
}
