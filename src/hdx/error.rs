use failure::Fail;

/// Values that HDX refuses to accept for a dataset.
#[derive(Debug, Fail, PartialEq)]
pub enum HdxError {
    #[fail(display = "Invalid dataset date: {}", _0)]
    InvalidDatasetDate(String),
    #[fail(display = "Invalid update frequency: {}", _0)]
    InvalidUpdateFrequency(String),
    #[fail(display = "Country {} not found!", _0)]
    UnknownCountry(String),
}
