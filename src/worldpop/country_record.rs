use failure::Error;
use failure::Fail;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::downloader::Downloader;

/// This struct contains the metadata of one country from the WorldPop feed.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CountryRecord {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Dataset Title")]
    pub dataset_title: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// Kept as raw JSON since only the boolean `true` marks sub-national data.
    #[serde(rename = "Dataset contains sub-national data")]
    pub sub_national: JsonValue,
    #[serde(rename = "License")]
    pub license: String,
    #[serde(rename = "Define License", default)]
    pub define_license: Option<String>,
    #[serde(rename = "Organisation", default)]
    pub organisation: Option<String>,
    #[serde(rename = "Visibility")]
    pub visibility: String,
    #[serde(default)]
    pub id_no: Option<JsonValue>,
    #[serde(rename = "URL_direct")]
    pub url_direct: String,
    #[serde(rename = "URL_summaryPage")]
    pub url_summary_page: String,
    #[serde(rename = "URL_datasetDetailsPage", default)]
    pub url_dataset_details_page: Option<String>,
    #[serde(rename = "URL_image")]
    pub url_image: String,
    #[serde(rename = "productionDate", default)]
    pub production_date: Option<String>,
    #[serde(rename = "datasetDate")]
    pub dataset_date: String,
    #[serde(rename = "lastModifiedDate", default)]
    pub last_modified_date: Option<String>,
    #[serde(rename = "fileFormat")]
    pub file_format: String,
    #[serde(rename = "location", default)]
    pub location_code: Option<String>,
    #[serde(rename = "updateFrequency")]
    pub update_frequency: String,
    #[serde(rename = "maintainerName")]
    pub maintainer_name: String,
    #[serde(rename = "maintainerEmail")]
    pub maintainer_email: String,
    #[serde(rename = "authorName")]
    pub author_name: String,
    #[serde(rename = "authorEmail")]
    pub author_email: String,
    pub tags: Vec<String>,
}

impl CountryRecord {
    pub fn is_sub_national(&self) -> bool {
        self.sub_national == JsonValue::Bool(true)
    }

    pub fn is_private(&self) -> bool {
        self.visibility != "Public"
    }

    /// The licence url, which only records with an "Other" licence have to provide.
    pub fn define_license(&self) -> Result<&str, RecordError> {
        self.define_license
            .as_deref()
            .ok_or_else(|| RecordError::MissingField {
                location: self.location.clone(),
                field: "Define License",
            })
    }
}

/// This error occurs when a record lacks a key that is only required in some cases.
#[derive(Debug, Fail, PartialEq)]
pub enum RecordError {
    #[fail(display = "Record `{}` is missing field `{}`", location, field)]
    MissingField {
        location: String,
        field: &'static str,
    },
}

#[derive(Debug, Deserialize)]
struct WorldPopFeed {
    #[serde(rename = "worldPopData")]
    world_pop_data: Vec<JsonValue>,
}

/// This error occurs when the feed does not have the expected shape.
#[derive(Debug, Fail)]
pub enum FeedError {
    #[fail(display = "Feed `{}` is malformed: {}", url, message)]
    Malformed { url: String, message: String },
    #[fail(display = "Record {} of feed `{}` is malformed: {}", index, url, message)]
    MalformedRecord {
        url: String,
        index: usize,
        message: String,
    },
}

/// This function downloads the WorldPop feed and returns its country records.
pub fn load_country_records(
    url: &str,
    downloader: &dyn Downloader,
) -> Result<Vec<CountryRecord>, Error> {
    let response = downloader.download(url)?;
    debug!("Parsing WorldPop feed from `{}`", response.url());

    let feed: WorldPopFeed = response
        .json()
        .map_err(|e| FeedError::Malformed {
            url: url.into(),
            message: e.to_string(),
        })?;

    let records = feed
        .world_pop_data
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| FeedError::MalformedRecord {
                url: url.into(),
                index,
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<CountryRecord>, FeedError>>()?;

    info!("Loaded {} country records from `{}`", records.len(), url);

    Ok(records)
}
