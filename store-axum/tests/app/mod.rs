#![allow(dead_code)]

mod application;
mod permissions;
mod recording;

pub use application::TestApp;
pub use permissions::{Permissions, token};
pub use recording::{CREATED_ID, Call, RecordingRepository};

use axum_test::TestServer;
use store_axum::{config::AxumConfig, router};
use store_core::ports::ProductRepository;

/// Serve a [`TestApp`] over the given repository with the default config.
pub fn server<R>(repository: R) -> TestServer
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    server_with_config(repository, AxumConfig::default())
}

pub fn server_with_config<R>(repository: R, config: AxumConfig) -> TestServer
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    TestServer::new(router(TestApp::new(repository), config)).unwrap()
}
