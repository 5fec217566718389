use log::debug;
use serde::{Serialize, Serializer};

use crate::hdx::{Countries, DatasetDate, HdxError, UpdateFrequency};

/// A CKAN tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self { name: name.into() }
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl From<&String> for Tag {
    fn from(name: &String) -> Self {
        Self { name: name.clone() }
    }
}

/// A CKAN group, used by HDX for locations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Group {
    pub name: String,
}

/// A downloadable resource of a dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub name: String,
    pub format: String,
    pub url: String,
    pub description: String,
    pub url_type: String,
    pub resource_type: String,
}

/// An HDX dataset in CKAN package form.
///
/// The plain metadata fields are public. Fields HDX validates are only reachable
/// through their setters.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub name: String,
    pub title: String,
    pub notes: String,
    pub methodology: String,
    pub methodology_other: String,
    pub dataset_source: String,
    pub subnational: bool,
    pub license_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_other: Option<String>,
    pub private: bool,
    pub url: String,
    pub author: String,
    pub author_email: String,
    pub maintainer: String,
    pub maintainer_email: String,
    #[serde(
        rename = "dataset_date",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_dataset_date"
    )]
    date: Option<DatasetDate>,
    #[serde(
        rename = "data_update_frequency",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_update_frequency"
    )]
    update_frequency: Option<UpdateFrequency>,
    groups: Vec<Group>,
    tags: Vec<Tag>,
    resources: Vec<Resource>,
}

impl Dataset {
    pub fn set_dataset_date(&mut self, dataset_date: &str) -> Result<(), HdxError> {
        self.date = Some(DatasetDate::parse(dataset_date)?);
        Ok(())
    }

    pub fn dataset_date(&self) -> Option<DatasetDate> {
        self.date
    }

    pub fn set_expected_update_frequency(&mut self, frequency: &str) -> Result<(), HdxError> {
        self.update_frequency = Some(UpdateFrequency::parse(frequency)?);
        Ok(())
    }

    pub fn expected_update_frequency(&self) -> Option<UpdateFrequency> {
        self.update_frequency
    }

    /// Add a country by name or ISO3 code. A country is only added once.
    pub fn add_country_location(&mut self, location: &str) -> Result<(), HdxError> {
        let country = Countries::builtin().find(location)?;
        let name = country.iso3.to_lowercase();
        debug!("Location `{}` is {} ({})", location, country.name, country.iso3);

        if !self.groups.iter().any(|group| group.name == name) {
            self.groups.push(Group { name });
        }

        Ok(())
    }

    /// The lowercase ISO3 codes of the dataset's locations.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.name.as_str())
    }

    /// Append tags in the given order.
    pub fn add_tags<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Add a resource or replace the one with the same name.
    pub fn add_update_resource(&mut self, resource: Resource) {
        match self
            .resources
            .iter_mut()
            .find(|existing| existing.name == resource.name)
        {
            Some(existing) => *existing = resource,
            None => self.resources.push(resource),
        }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

fn serialize_dataset_date<S: Serializer>(
    date: &Option<DatasetDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.collect_str(date),
        None => serializer.serialize_none(),
    }
}

fn serialize_update_frequency<S: Serializer>(
    frequency: &Option<UpdateFrequency>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match frequency {
        Some(frequency) => serializer.collect_str(&frequency.days()),
        None => serializer.serialize_none(),
    }
}
