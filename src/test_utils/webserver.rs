use mockito::{mock, Mock};

pub struct MockWebserver {
    _mock: Mock,
}

impl MockWebserver {
    pub fn from_text(path: &str, text: &str) -> Self {
        Self {
            _mock: mock("GET", path).with_body(text).create(),
        }
    }

    pub fn from_json(path: &str, json_string: &str) -> Self {
        Self {
            _mock: mock("GET", path)
                .with_header("content-type", "application/json")
                .with_body(json_string)
                .create(),
        }
    }

    pub fn from_status(path: &str, status: usize) -> Self {
        Self {
            _mock: mock("GET", path).with_status(status).create(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", mockito::server_url(), path)
    }
}
