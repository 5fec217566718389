use std::collections::HashMap;
use std::io::Read;
use std::sync::OnceLock;

use failure::Error;
use serde::Deserialize;

use crate::hdx::HdxError;

const COUNTRIES_CSV: &str = include_str!("../../data/countries.csv");

/// A country as HDX knows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Country {
    pub iso3: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct CountryRow {
    iso3: String,
    name: String,
    aliases: String,
}

/// Lookup table from ISO3 codes, names and aliases to countries.
#[derive(Debug)]
pub struct Countries {
    countries: Vec<Country>,
    index: HashMap<String, usize>,
}

impl Countries {
    /// The built-in ISO 3166 table.
    pub fn builtin() -> &'static Self {
        static COUNTRIES: OnceLock<Countries> = OnceLock::new();
        COUNTRIES.get_or_init(|| {
            Self::from_reader(COUNTRIES_CSV.as_bytes())
                .expect("embedded data/countries.csv must be a valid country table")
        })
    }

    /// Read a table with the columns `iso3`, `name` and `aliases` (separated by `;`).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut countries = Vec::new();
        let mut index = HashMap::new();

        for row in csv::Reader::from_reader(reader).deserialize() {
            let row: CountryRow = row?;
            let position = countries.len();

            index.insert(row.iso3.to_lowercase(), position);
            index.insert(Self::normalize(&row.name), position);
            for alias in row.aliases.split(';').filter(|alias| !alias.trim().is_empty()) {
                index.entry(Self::normalize(alias)).or_insert(position);
            }

            countries.push(Country {
                iso3: row.iso3,
                name: row.name,
            });
        }

        Ok(Self { countries, index })
    }

    /// Find a country by ISO3 code, name or alias, ignoring case, accents and punctuation.
    pub fn find(&self, location: &str) -> Result<&Country, HdxError> {
        self.index
            .get(&Self::normalize(location))
            .map(|&position| &self.countries[position])
            .ok_or_else(|| HdxError::UnknownCountry(location.into()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    fn normalize(name: &str) -> String {
        slug::slugify(name)
    }
}
