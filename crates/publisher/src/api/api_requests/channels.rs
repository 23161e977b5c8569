use std::fmt;
use std::str::FromStr;

use super::ApiRequest;
use crate::api::Params;

/// Kind of traffic source a channel represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelType {
    Website,
    Adwords,
    Facebook,
}

impl ChannelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Website => "website",
            ChannelType::Adwords => "adwords",
            ChannelType::Facebook => "facebook",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown channel type: {0:?}")]
pub struct ParseChannelTypeError(String);

impl FromStr for ChannelType {
    type Err = ParseChannelTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "website" => Ok(ChannelType::Website),
            "adwords" => Ok(ChannelType::Adwords),
            "facebook" => Ok(ChannelType::Facebook),
            _ => Err(ParseChannelTypeError(s.to_string())),
        }
    }
}

/// All channels on the account.
#[derive(Debug, Clone)]
pub struct ListChannels;

impl ApiRequest for ListChannels {
    fn path(&self) -> String {
        "channels".to_string()
    }
}

/// Register a new channel.
#[derive(Debug, Clone)]
pub struct CreateChannel {
    pub channel_type: ChannelType,
    pub name: String,
    pub url: String,
}

impl ApiRequest for CreateChannel {
    fn path(&self) -> String {
        "channels/new".to_string()
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params
            .insert("type", self.channel_type.as_str())
            .insert("name", self.name.as_str())
            .insert("url", self.url.as_str());
        params
    }
}

#[derive(Debug, Clone)]
pub struct GetChannel {
    pub id: u64,
}

impl ApiRequest for GetChannel {
    fn path(&self) -> String {
        format!("channels/{}", self.id)
    }
}

/// Rename a channel.
#[derive(Debug, Clone)]
pub struct EditChannel {
    pub id: u64,
    pub name: String,
}

impl ApiRequest for EditChannel {
    fn path(&self) -> String {
        format!("channels/{}/edit", self.id)
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert("name", self.name.as_str());
        params
    }
}

#[derive(Debug, Clone)]
pub struct DeleteChannel {
    pub id: u64,
}

impl ApiRequest for DeleteChannel {
    fn path(&self) -> String {
        format!("channels/{}/delete", self.id)
    }
}
