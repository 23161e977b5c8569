#![allow(dead_code)]

use adrecord_publisher::prelude::*;
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("adrecord_publisher=debug")
        .with_test_writer()
        .try_init();
}

pub fn config(server: &MockServer, decode: bool) -> Config {
    Config::new(API_KEY)
        .with_base_url(format!("{}/v1", server.uri()).parse().unwrap())
        .with_decode_responses(decode)
}

pub fn client(server: &MockServer, decode: bool) -> ApiClient {
    ApiClient::new(config(server, decode)).unwrap()
}
