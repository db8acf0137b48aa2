pub mod engine;
pub mod fetcher;
pub mod parser;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{ExtractResult, IpSet, RenderedBlocklist};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
