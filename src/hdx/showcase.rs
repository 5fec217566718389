use serde::Serialize;

use crate::hdx::Tag;

/// An HDX showcase, linking to a page that presents a dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Showcase {
    pub name: String,
    pub title: String,
    pub notes: String,
    pub url: String,
    pub image_url: String,
    tags: Vec<Tag>,
}

impl Showcase {
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
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serialize_with_tags() {
        let mut showcase = Showcase {
            name: "worldpop-kenya-showcase".into(),
            url: "http://www.worldpop.org.uk".into(),
            ..Default::default()
        };
        showcase.add_tags(&["WorldPop".to_string(), "Population".to_string()]);

        assert_eq!(
            serde_json::to_value(&showcase).unwrap(),
            json!({
                "name": "worldpop-kenya-showcase",
                "title": "",
                "notes": "",
                "url": "http://www.worldpop.org.uk",
                "image_url": "",
                "tags": [{"name": "WorldPop"}, {"name": "Population"}],
            })
        );
    }
}
