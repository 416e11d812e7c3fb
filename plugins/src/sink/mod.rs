pub mod http;

pub use http::HttpResultSink;
