//! HTTP client layer: `OpennemHttp` over a pluggable blocking [`Transport`].

pub mod client;
pub mod transport;

pub use client::OpennemHttp;
pub use transport::{RawResponse, ReqwestTransport, Transport};
