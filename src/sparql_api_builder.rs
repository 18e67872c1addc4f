use crate::{
    config::WIKIDATA_CONFIG, Config, IdValidation, SparqlApi, VernacularError,
    DEFAULT_REQUEST_DELAY,
};
use std::time::Duration;

/// The default user agent
const DEFAULT_USER_AGENT: &str = "Rust Wikidata vernacular names";

#[derive(Debug)]
pub struct SparqlApiBuilder {
    client: Option<reqwest::Client>,
    user_agent: Option<String>,
    endpoint_url: String,
    request_delay: Option<Duration>,
    id_validation: IdValidation,
    config: Config,
}

impl SparqlApiBuilder {
    /// Sets the SPARQL endpoint URL. This in mandatory.
    /// # Errors
    /// Returns an error if the endpoint URL is not a valid http(s) URL.
    pub fn new<S: Into<String>>(endpoint_url: S) -> Result<Self, VernacularError> {
        let endpoint_url = Self::validate_endpoint_url(&endpoint_url.into())?;
        Ok(Self {
            client: None,
            user_agent: None,
            endpoint_url,
            request_delay: None,
            id_validation: IdValidation::default(),
            config: WIKIDATA_CONFIG,
        })
    }

    /// Sets the user agent. By default, the user agent is "Rust Wikidata vernacular names; {`package_name`}/{`package_version`}"
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the `reqwest::Client`. By default, a new `reqwest::Client` is created.
    /// Use this to set a timeout.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the pause before each request of a multi-identifier lookup. Default is 2 seconds.
    pub const fn with_request_delay(mut self, request_delay: Duration) -> Self {
        self.request_delay = Some(request_delay);
        self
    }

    /// Sets how identifiers are checked before querying. Default is `IdValidation::PassThrough`.
    pub const fn with_id_validation(mut self, id_validation: IdValidation) -> Self {
        self.id_validation = id_validation;
        self
    }

    /// Sets the query vocabulary, for Wikibase instances other than Wikidata.
    pub const fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Builds the `SparqlApi`.
    /// The builder gets consumed by this operation.
    pub fn build(self) -> SparqlApi {
        let user_agent = self.user_agent.unwrap_or(Self::default_user_agent());
        let request_delay = self.request_delay.unwrap_or(DEFAULT_REQUEST_DELAY);
        let client = self.client.unwrap_or_default();
        SparqlApi::new(
            client,
            user_agent,
            self.endpoint_url,
            request_delay,
            self.id_validation,
            self.config,
        )
    }

    /// Checks that the endpoint URL parses and uses http or https.
    fn validate_endpoint_url(endpoint_url: &str) -> Result<String, VernacularError> {
        let url = reqwest::Url::parse(endpoint_url)
            .map_err(|_| VernacularError::EndpointUrlInvalid(endpoint_url.to_owned()))?;
        match url.scheme() {
            "http" | "https" => Ok(url.to_string()),
            _ => Err(VernacularError::EndpointUrlInvalid(endpoint_url.to_owned())),
        }
    }

    /// Returns the default user agent, a versioned string based on `DEFAULT_USER_AGENT`.
    fn default_user_agent() -> String {
        format!(
            "{DEFAULT_USER_AGENT}; {}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
    }
}
