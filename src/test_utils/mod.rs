mod fake_downloader;
mod log_capture;
mod webserver;

use std::io::Write;

use tempfile::TempPath;

pub use self::fake_downloader::FakeDownloader;
pub use self::log_capture::capture_logs;
pub use self::webserver::MockWebserver;

pub fn create_temp_file_with_suffix(suffix: &str, content: &str) -> TempPath {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Unable to create test file.");

    write!(file, "{}", content).expect("Unable to write content to test file.");

    file.into_temp_path()
}
