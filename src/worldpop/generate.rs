use failure::Error;
use log::{debug, error, info};

use crate::downloader::Downloader;
use crate::hdx::{Dataset, HdxError, Resource, Showcase};
use crate::worldpop::CountryRecord;

const OTHER_LICENCE: &str = "other";
const HDX_OTHER_LICENCE: &str = "hdx-other";

/// The outcome of turning one country record into HDX objects.
#[derive(Debug)]
pub enum Generated {
    Created { dataset: Dataset, showcase: Showcase },
    /// HDX refused one of the derived values. Nothing was created.
    Rejected { title: String, reason: HdxError },
}

/// Remove every occurrence of "dataset" from a WorldPop title.
pub fn clean_title(dataset_title: &str) -> String {
    dataset_title.replace("dataset", "").trim().to_string()
}

/// URL slug of a title: ASCII only, lowercase, words joined by single hyphens.
pub fn slugify_title(title: &str) -> String {
    slug::slugify(title).to_lowercase()
}

/// Create the HDX dataset and showcase for one WorldPop country record.
///
/// The downloader is only used to fetch the licence text of records with an "Other" licence.
pub fn generate_dataset_and_showcase(
    downloader: &dyn Downloader,
    record: &CountryRecord,
) -> Result<Generated, Error> {
    let title = clean_title(&record.dataset_title);
    info!("Creating dataset: {}", title);

    let mut licence_id = record.license.to_lowercase();
    let mut licence = None;
    if licence_id == OTHER_LICENCE {
        licence_id = HDX_OTHER_LICENCE.into();
        let response = downloader.download(record.define_license()?)?;
        licence = Some(response.text().to_string());
    }

    let slugified_name = slugify_title(&title);
    let url_summary = &record.url_summary_page;
    let description = format!(
        "Go to [WorldPop Dataset Summary Page]({}) for more information",
        url_summary
    );

    let mut dataset = Dataset::default();
    dataset.name = slugified_name.clone();
    dataset.title = title.clone();
    dataset.notes = record.description.clone();
    dataset.methodology = "Other".into();
    dataset.methodology_other = description.clone();
    dataset.dataset_source = record.source.clone();
    dataset.subnational = record.is_sub_national();
    dataset.license_id = licence_id;
    dataset.private = record.is_private();
    dataset.url = url_summary.clone();
    dataset.author = record.author_name.clone();
    dataset.author_email = record.author_email.clone();
    dataset.maintainer = record.maintainer_name.clone();
    dataset.maintainer_email = record.maintainer_email.clone();

    if let Err(reason) = set_validated_fields(&mut dataset, record) {
        error!("{} has a problem! {}", title, reason);
        return Ok(Generated::Rejected { title, reason });
    }
    debug!(
        "{} covers {:?} in {:?}, updated {:?}",
        title,
        dataset.dataset_date().map(|date| date.to_string()),
        dataset.locations().collect::<Vec<_>>(),
        dataset.expected_update_frequency().map(|frequency| frequency.label())
    );

    dataset.add_tags(&record.tags);
    dataset.license_other = licence.filter(|text| !text.is_empty());

    dataset.add_update_resource(Resource {
        name: title.clone(),
        format: record.file_format.clone(),
        url: record.url_direct.clone(),
        description,
        url_type: "api".into(),
        resource_type: "api".into(),
    });

    let mut showcase = Showcase::default();
    showcase.name = format!("{}-showcase", slugified_name);
    showcase.title = format!("WorldPop {} Summary Page", record.location);
    showcase.notes = format!("{} Summary Page", title);
    showcase.url = url_summary.clone();
    showcase.image_url = record.url_image.clone();
    showcase.add_tags(&record.tags);

    Ok(Generated::Created { dataset, showcase })
}

fn set_validated_fields(dataset: &mut Dataset, record: &CountryRecord) -> Result<(), HdxError> {
    dataset.set_dataset_date(&record.dataset_date)?;
    dataset.set_expected_update_frequency(&record.update_frequency)?;
    dataset.add_country_location(&record.location)?;
    Ok(())
}
