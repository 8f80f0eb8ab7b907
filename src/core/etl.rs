use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 回傳已渲染的報表內容
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting ticket analysis...");

        // Extract
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());

        // Transform
        let report = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Analyzed {} matching tickets across {} carriers",
            report.matched_tickets,
            report.carriers.len()
        );

        // Load
        let rendered = self.pipeline.load(report).await?;
        tracing::debug!("Rendered report ({} bytes)", rendered.len());

        Ok(rendered)
    }
}
