pub mod analyze;
pub mod cli;
pub mod http_server;
