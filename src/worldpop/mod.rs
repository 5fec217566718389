mod country_record;
mod generate;

pub use self::country_record::{load_country_records, CountryRecord};
pub use self::generate::{generate_dataset_and_showcase, Generated};
