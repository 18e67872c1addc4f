use crate::{
    Binding, Config, FetchBindings, IdValidation, SparqlApiBuilder, VernacularError,
};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// The public Wikidata Query Service endpoint
pub const WIKIDATA_SPARQL_ENDPOINT: &str = "https://query.wikidata.org/bigdata/namespace/wdq/sparql";

/// The media type requested from the endpoint
const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

#[derive(Debug, Clone)]
pub struct SparqlApi {
    client: reqwest::Client,
    user_agent: String,
    endpoint_url: String,
    request_delay: Duration,
    id_validation: IdValidation,
    config: Config,
}

impl SparqlApi {
    /// Returns a `SparqlApiBuilder` for the given SPARQL endpoint URL.
    /// # Errors
    /// Returns an error if the URL is not a valid http(s) URL.
    pub fn builder<S: Into<String>>(endpoint_url: S) -> Result<SparqlApiBuilder, VernacularError> {
        SparqlApiBuilder::new(endpoint_url)
    }

    /// Returns a `SparqlApi` for the Wikidata Query Service, with default settings.
    /// # Errors
    /// Returns an error if the endpoint URL is invalid.
    pub fn wikidata() -> Result<Self, VernacularError> {
        Ok(Self::builder(WIKIDATA_SPARQL_ENDPOINT)?.build())
    }

    pub(crate) fn new(
        client: reqwest::Client,
        user_agent: String,
        endpoint_url: String,
        request_delay: Duration,
        id_validation: IdValidation,
        config: Config,
    ) -> Self {
        Self {
            client,
            user_agent,
            endpoint_url,
            request_delay,
            id_validation,
            config,
        }
    }

    /// Returns a `RequestBuilder` for a SPARQL GET request with JSON results.
    /// # Errors
    /// Returns an error if the headers cannot be created
    pub fn sparql_request_builder(
        &self,
        query: &str,
    ) -> Result<reqwest::RequestBuilder, VernacularError> {
        let headers = self.headers()?;
        Ok(self
            .client
            .get(&self.endpoint_url)
            .headers(headers)
            .query(&[("query", query), ("format", "json")]))
    }

    /// Returns a `HeaderMap` with the user agent and the SPARQL JSON accept header
    fn headers(&self) -> Result<HeaderMap, VernacularError> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, self.user_agent.parse()?);
        headers.insert(reqwest::header::ACCEPT, SPARQL_RESULTS_JSON.parse()?);
        Ok(headers)
    }

    /// Executes a `reqwest::Request`, and returns a `reqwest::Response`.
    /// # Errors
    /// Returns an error if the request cannot be executed
    pub async fn execute(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, VernacularError> {
        let response = self.client.execute(request).await?;
        Ok(response)
    }

    /// Turns a response into JSON; non-success statuses become `HttpStatus` errors.
    async fn filter_response_error(
        response: reqwest::Response,
    ) -> Result<Value, VernacularError> {
        if !response.status().is_success() {
            return Err(VernacularError::from_response(&response));
        }
        let body = response.text().await?;
        let j: Value = serde_json::from_str(&body)?;
        Ok(j)
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl FetchBindings for SparqlApi {
    async fn fetch_bindings(&self, query: &str) -> Result<Vec<Binding>, VernacularError> {
        let request = self.sparql_request_builder(query)?.build()?;
        debug!(endpoint = %self.endpoint_url, "sending SPARQL query");
        let response = self.execute(request).await?;
        let j = Self::filter_response_error(response).await?;
        Binding::from_results_json(j)
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn request_delay(&self) -> Duration {
        self.request_delay
    }

    fn id_validation(&self) -> IdValidation {
        self.id_validation
    }
}
