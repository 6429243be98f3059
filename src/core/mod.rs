pub mod calculator;
pub mod etl;
pub mod pipeline;
pub mod printer;
pub mod reader;

pub use crate::domain::model::{
    Dataset, IntervalRecord, OutputFormat, OutputItem, OutputRecord, SamplePoint,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
