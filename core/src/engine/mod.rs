mod dispatch;
mod summary;

pub use dispatch::AnalysisDispatcher;
