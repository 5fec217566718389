use std::time::Duration;

use failure::Error;
use failure::Fail;
use log::debug;
use serde::de::DeserializeOwned;

use crate::settings::DownloaderSettings;

/// Something that can fetch the body of an url.
pub trait Downloader {
    fn download(&self, url: &str) -> Result<Response, Error>;
}

/// The fully read body of a successful download.
#[derive(Debug)]
pub struct Response {
    url: String,
    body: String,
}

impl Response {
    pub fn new(url: &str, body: String) -> Self {
        Self {
            url: url.into(),
            body,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|e| {
            DownloadError::InvalidJson {
                url: self.url.clone(),
                message: e.to_string(),
            }
            .into()
        })
    }

    pub fn text(&self) -> &str {
        &self.body
    }
}

/// Blocking HTTP downloader.
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    pub fn new(settings: &DownloaderSettings) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str) -> Result<Response, Error> {
        debug!("Downloading `{}`", url);

        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status {
                url: url.into(),
                status: status.as_u16(),
            }
            .into());
        }

        Ok(Response::new(url, response.text()?))
    }
}

#[derive(Debug, Fail)]
pub enum DownloadError {
    #[fail(display = "Request to `{}` failed with status {}", url, status)]
    Status { url: String, status: u16 },
    #[fail(display = "Response of `{}` is no valid JSON: {}", url, message)]
    InvalidJson { url: String, message: String },
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::test_utils::MockWebserver;

    use super::*;

    fn downloader() -> HttpDownloader {
        HttpDownloader::new(&DownloaderSettings {
            timeout_seconds: 5,
            user_agent: "test".into(),
        })
        .unwrap()
    }

    #[test]
    fn download_text() {
        let webserver = MockWebserver::from_text("/licence.txt", "Some licence");

        let response = downloader()
            .download(&webserver.url("/licence.txt"))
            .unwrap();

        assert_eq!(response.text(), "Some licence");
        assert_eq!(response.url(), webserver.url("/licence.txt"));
    }

    #[test]
    fn download_json() {
        #[derive(Deserialize)]
        struct Foo {
            foo: String,
        }

        let webserver = MockWebserver::from_json("/foo.json", r#"{"foo": "bar"}"#);

        let foo: Foo = downloader()
            .download(&webserver.url("/foo.json"))
            .unwrap()
            .json()
            .unwrap();

        assert_eq!(foo.foo, "bar");
    }

    #[test]
    fn non_success_status_is_an_error() {
        let webserver = MockWebserver::from_status("/missing", 404);

        let error = downloader()
            .download(&webserver.url("/missing"))
            .unwrap_err();

        match error.downcast::<DownloadError>() {
            Ok(DownloadError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn invalid_json_is_an_error() {
        let response = Response::new("http://localhost", "no json".into());

        assert!(response.json::<serde_json::Value>().is_err());
    }
}
