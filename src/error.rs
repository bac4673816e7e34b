use std::net::SocketAddr;

use leptos::config::errors::LeptosConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Couldn't load site configuration: {0}")]
    Config(#[from] LeptosConfigError),
    #[error("Couldn't bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server stopped: {0}")]
    Serve(#[source] std::io::Error),
}
