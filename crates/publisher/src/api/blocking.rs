use reqwest::blocking::Client;
use reqwest::redirect;
use time::Date;

use super::api_requests::{
    ApiRequest, ChannelType, CreateChannel, DeleteChannel, EditChannel, GetChannel, GetProgram,
    ListChannels, ListPrograms, ListTransactions,
};
use super::client::request_url;
use super::{ApiError, Config, Params, Response};

/// Blocking counterpart of [`ApiClient`](super::ApiClient).
///
/// Must not be created or used from inside an async runtime.
#[derive(Debug, Clone)]
pub struct BlockingApiClient {
    config: Config,
    client: Client,
}

impl BlockingApiClient {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn call<T: ApiRequest>(&self, request: T) -> Result<Response, ApiError> {
        self.send(&request.path(), request.params())
    }

    pub fn send(&self, path: &str, params: Params) -> Result<Response, ApiError> {
        let url = request_url(self.config.base_url(), path)?;
        let form = params.into_form(self.config.api_key());

        tracing::debug!(path, "sending api request");
        let response = self.client.post(url).form(&form).send()?;

        let status = response.status();
        tracing::debug!(path, %status, "received api response");
        if !status.is_success() {
            tracing::warn!(path, %status, "api request failed");
        }

        let body = response.text()?;
        Response::from_body(status, body, self.config.decode_responses())
    }

    pub fn list_channels(&self) -> Result<Response, ApiError> {
        self.call(ListChannels)
    }

    pub fn create_channel(
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
    }

    pub fn get_channel(&self, id: u64) -> Result<Response, ApiError> {
        self.call(GetChannel { id })
    }

    pub fn edit_channel(&self, id: u64, new_name: &str) -> Result<Response, ApiError> {
        self.call(EditChannel {
            id,
            name: new_name.to_string(),
        })
    }

    pub fn delete_channel(&self, id: u64) -> Result<Response, ApiError> {
        self.call(DeleteChannel { id })
    }

    pub fn list_programs(&self) -> Result<Response, ApiError> {
        self.call(ListPrograms)
    }

    pub fn get_program(&self, id: u64) -> Result<Response, ApiError> {
        self.call(GetProgram { id })
    }

    pub fn list_transactions(
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
    }
}
