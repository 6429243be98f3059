use crate::core::{calculator, printer, reader};
use crate::core::{ConfigProvider, Dataset, OutputRecord, Pipeline, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub const STDOUT_DESTINATION: &str = "<stdout>";

pub struct UtilizationPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> UtilizationPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for UtilizationPipeline<S, C> {
    fn read(&self) -> Result<Dataset> {
        reader::read_dataset(&self.storage, self.config.input_path())
    }

    fn calculate(&self, dataset: &Dataset) -> Result<Vec<OutputRecord>> {
        let mut records = calculator::calculate(dataset);

        if self.config.skip_idle() {
            let before = records.len();
            records.retain(|record| !record.is_idle());
            tracing::debug!("Skipped {} idle sample points", before - records.len());
        }

        Ok(records)
    }

    fn report(&self, records: &[OutputRecord]) -> Result<String> {
        let rendered = printer::render(records, self.config.format())?;

        match self.config.output_path() {
            Some(path) => {
                tracing::debug!("Writing report ({} bytes) to {}", rendered.len(), path);
                self.storage.write_file(path, &rendered)?;
                Ok(path.to_string())
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&rendered)?;
                stdout.flush()?;
                Ok(STDOUT_DESTINATION.to_string())
            }
        }
    }
}
