mod channels;
mod programs;
mod transactions;

pub use channels::{
    ChannelType, CreateChannel, DeleteChannel, EditChannel, GetChannel, ListChannels,
    ParseChannelTypeError,
};
pub use programs::{GetProgram, ListPrograms};
pub use transactions::ListTransactions;

use super::Params;

/// Defintion of an API request
pub trait ApiRequest: Send + Sync {
    /// Resource path relative to the base URL, without a leading slash
    fn path(&self) -> String;

    /// Form parameters, excluding the API key
    fn params(&self) -> Params {
        Params::new()
    }
}
