use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives a [`Pipeline`] through read, calculate and report exactly once.
pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting utilization report");

        let dataset = self.pipeline.read()?;
        tracing::info!(
            "Read {} sample points and {} intervals",
            dataset.series.len(),
            dataset.intervals.len()
        );

        let records = self.pipeline.calculate(&dataset)?;
        tracing::info!("Calculated {} output records", records.len());

        let destination = self.pipeline.report(&records)?;
        tracing::info!("Report written to {}", destination);

        Ok(destination)
    }
}
