use std::io;
use std::sync::{Arc, Mutex};

use adrenal_cli::config::load_config;
use adrenal_cli::logging;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn legacy_config() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "output": "markdown" }"#).unwrap();
    (dir, path)
}

#[test]
fn config_migration_is_logged_during_startup() {
    let (_dir, path) = legacy_config();
    let captured = Captured::default();

    let config = tracing::subscriber::with_default(
        logging::subscriber(false, captured.clone()),
        || load_config(&path),
    )
    .unwrap();

    assert_eq!(config.config_version, 1);
    assert!(
        captured.contents().contains("migrated config v0"),
        "{}",
        captured.contents()
    );
}

#[test]
fn json_subscriber_emits_json_lines() {
    let (_dir, path) = legacy_config();
    let captured = Captured::default();

    tracing::subscriber::with_default(logging::subscriber(true, captured.clone()), || {
        load_config(&path)
    })
    .unwrap();

    let contents = captured.contents();
    let line = contents
        .lines()
        .find(|l| l.contains("migrated config"))
        .unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "INFO");
}
