mod countries;
mod dataset;
mod dataset_date;
mod error;
mod showcase;
mod update_frequency;

pub use self::countries::Countries;
pub use self::dataset::{Dataset, Resource, Tag};
pub use self::dataset_date::DatasetDate;
pub use self::error::HdxError;
pub use self::showcase::Showcase;
pub use self::update_frequency::UpdateFrequency;
