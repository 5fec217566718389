use std::cell::RefCell;
use std::collections::HashMap;

use failure::Error;

use crate::downloader::{DownloadError, Downloader, Response};

/// An in-memory `Downloader` that serves fixed bodies and records every requested url.
#[derive(Debug, Default)]
pub struct FakeDownloader {
    bodies: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl FakeDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.into(), body.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Downloader for FakeDownloader {
    fn download(&self, url: &str) -> Result<Response, Error> {
        self.requests.borrow_mut().push(url.into());

        match self.bodies.get(url) {
            Some(body) => Ok(Response::new(url, body.clone())),
            None => Err(DownloadError::Status {
                url: url.into(),
                status: 404,
            }
            .into()),
        }
    }
}
