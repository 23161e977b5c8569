use reqwest::{redirect, Client, Url};
use time::Date;

use super::api_requests::{
    ApiRequest, ChannelType, CreateChannel, DeleteChannel, EditChannel, GetChannel, GetProgram,
    ListChannels, ListPrograms, ListTransactions,
};
use super::{ApiError, Config, Params, Response};

#[derive(Debug, Clone)]
/// ApiClient for interacting with the publisher API
///
/// Holds no state besides its configuration and connection pool, so clones
/// can be used from concurrent tasks. Dropping a pending call cancels it.
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    /// Create a new ApiClient from a configuration
    /// # Arguments
    /// * `config` - API key, base URL, decoding mode and timeout
    /// # Returns
    /// * `Self` - The client
    pub fn new(config: Config) -> Result<Self, ApiError> {
        // Never follow redirects, a 3xx surfaces as a status error.
        let mut builder = Client::builder().redirect(redirect::Policy::none());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a request that implements ApiRequest to the API
    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<Response, ApiError> {
        self.send(&request.path(), request.params()).await
    }

    /// POST `params` plus the API key, form encoded, to `path` under the
    /// base URL.
    pub async fn send(&self, path: &str, params: Params) -> Result<Response, ApiError> {
        let url = request_url(self.config.base_url(), path)?;
        let form = params.into_form(self.config.api_key());

        tracing::debug!(path, "sending api request");
        let response = self.client.post(url).form(&form).send().await?;

        let status = response.status();
        tracing::debug!(path, %status, "received api response");
        if !status.is_success() {
            tracing::warn!(path, %status, "api request failed");
        }

        let body = response.text().await?;
        Response::from_body(status, body, self.config.decode_responses())
    }

    pub async fn list_channels(&self) -> Result<Response, ApiError> {
        self.call(ListChannels).await
    }

    pub async fn create_channel(
        &self,
        channel_type: ChannelType,
        name: &str,
        url: &str,
    ) -> Result<Response, ApiError> {
        self.call(CreateChannel {
            channel_type,
            name: name.to_string(),
            url: url.to_string(),
        })
        .await
    }

    pub async fn get_channel(&self, id: u64) -> Result<Response, ApiError> {
        self.call(GetChannel { id }).await
    }

    pub async fn edit_channel(&self, id: u64, new_name: &str) -> Result<Response, ApiError> {
        self.call(EditChannel {
            id,
            name: new_name.to_string(),
        })
        .await
    }

    pub async fn delete_channel(&self, id: u64) -> Result<Response, ApiError> {
        self.call(DeleteChannel { id }).await
    }

    pub async fn list_programs(&self) -> Result<Response, ApiError> {
        self.call(ListPrograms).await
    }

    pub async fn get_program(&self, id: u64) -> Result<Response, ApiError> {
        self.call(GetProgram { id }).await
    }

    pub async fn list_transactions(
        &self,
        start: Option<Date>,
        stop: Option<Date>,
        channel_id: Option<u64>,
        program_id: Option<u64>,
    ) -> Result<Response, ApiError> {
        self.call(ListTransactions {
            start,
            stop,
            channel_id,
            program_id,
        })
        .await
    }
}

/// Resolve a request path against the configured base URL.
pub(crate) fn request_url(base_url: &Url, path: &str) -> Result<Url, ApiError> {
    Ok(base_url.join(path.trim_start_matches('/'))?)
}
