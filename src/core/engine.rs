use crate::core::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub total_entries: usize,
    pub sources_ok: usize,
    pub sources_failed: usize,
}

pub struct BlocklistEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BlocklistEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting blocklist generation...");

        // Extract
        let extracted = self.pipeline.extract().await?;
        let sources_ok = extracted.succeeded.len();
        let sources_failed = extracted.failed.len();
        tracing::info!(
            "Collected {} unique entries from {} source(s), {} failed",
            extracted.entries.len(),
            sources_ok,
            sources_failed
        );

        // Transform
        let rendered = self.pipeline.transform(extracted).await?;
        let total_entries = rendered.total_entries;

        // Load
        let output_path = self.pipeline.load(rendered).await?;
        tracing::info!("Blocklist with {} entries written to {}", total_entries, output_path);

        Ok(RunSummary {
            output_path,
            total_entries,
            sources_ok,
            sources_failed,
        })
    }
}
