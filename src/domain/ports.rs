use crate::domain::model::{Dataset, OutputFormat, OutputRecord};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn format(&self) -> OutputFormat;
    fn skip_idle(&self) -> bool;
}

pub trait Pipeline {
    fn read(&self) -> Result<Dataset>;
    fn calculate(&self, dataset: &Dataset) -> Result<Vec<OutputRecord>>;
    /// Renders the report and returns where it was written.
    fn report(&self, records: &[OutputRecord]) -> Result<String>;
}
