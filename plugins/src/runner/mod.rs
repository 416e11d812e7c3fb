pub mod ruff;

pub use ruff::RuffRunner;
