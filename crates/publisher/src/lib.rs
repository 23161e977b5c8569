//! Client for the Adrecord Publisher API v1.
//!
//! Every endpoint is a type implementing [`ApiRequest`](prelude::ApiRequest).
//! A client built from a [`Config`](prelude::Config) turns it into a single
//! form encoded `POST` with the account's API key attached.
//!
//! ```no_run
//! use adrecord_publisher::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(Config::from_env()?)?;
//!
//! let channels = client.call(ListChannels).await?;
//! let filtered = client
//!     .call(ListTransactions::default().program(5))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod api;

pub mod prelude {
    pub use crate::api::{
        api_requests::{
            ApiRequest, ChannelType, CreateChannel, DeleteChannel, EditChannel, GetChannel,
            GetProgram, ListChannels, ListPrograms, ListTransactions,
        },
        ApiClient, BlockingApiClient, Config, ParamValue, Params, Response,
    };
}

pub mod error {
    pub use crate::api::api_requests::ParseChannelTypeError;
    pub use crate::api::{ApiError, ConfigError};
}
