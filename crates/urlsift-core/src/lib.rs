pub mod config;
pub mod logging;

// Pipeline: input → dedupe → pool (fetch → extract → sort → dedupe → print)
pub mod dedupe;
pub mod extract;
pub mod fetch;
pub mod input;
pub mod pool;
