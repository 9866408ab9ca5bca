use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_reelscope_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("REELSCOPE_CONFIG_PATH", "/tmp/reelscope-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/reelscope-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("reelscope")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("reelscope")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_dashboard_layout() {
    let s = Settings::default();
    assert_eq!(s.aggregates.top_n, 10);
    assert_eq!(s.aggregates.histogram_bins, 30);
    assert_eq!(s.aggregates.preview_rows, 5);
    assert_eq!(s.aggregates.multi_value_delimiter, ",");
    assert_eq!(s.data.delimiter_byte(), b',');
    assert!(s.filters.types.is_empty());
    assert!(s.filters.countries.is_empty());
    assert!(s.logging.file.is_none());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[data]
path = "/data/titles.tsv"
delimiter = "\t"

[filters]
types = ["Movie"]
countries = ["India", "Japan"]
min_year = 2000
max_year = 2010

[aggregates]
top_n = 5
multi_value_delimiter = "|"
histogram_bins = 12
preview_rows = 3

[export]
path = "/tmp/out.csv"

[ui]
header_text = "hello"
year_step = 5

[logging]
level = "debug"
file = "/tmp/reelscope.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("REELSCOPE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("REELSCOPE__AGGREGATES__TOP_N");

    let s = Settings::load().unwrap();
    assert_eq!(s.data.path, std::path::PathBuf::from("/data/titles.tsv"));
    assert_eq!(s.data.delimiter_byte(), b'\t');
    assert_eq!(s.filters.types, vec!["Movie".to_string()]);
    assert_eq!(s.filters.countries, vec!["India".to_string(), "Japan".to_string()]);
    assert_eq!(s.filters.min_year, Some(2000));
    assert_eq!(s.filters.max_year, Some(2010));
    assert_eq!(s.aggregates.top_n, 5);
    assert_eq!(s.aggregates.multi_value_delimiter, "|");
    assert_eq!(s.aggregates.histogram_bins, 12);
    assert_eq!(s.aggregates.preview_rows, 3);
    assert_eq!(s.export.path, std::path::PathBuf::from("/tmp/out.csv"));
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.year_step, 5);
    assert_eq!(s.logging.level, "debug");
    assert_eq!(
        s.logging.file,
        Some(std::path::PathBuf::from("/tmp/reelscope.log"))
    );
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[aggregates]
top_n = 10
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("REELSCOPE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("REELSCOPE__AGGREGATES__TOP_N", "3");

    let s = Settings::load().unwrap();
    assert_eq!(s.aggregates.top_n, 3);
}

#[test]
fn validate_rejects_unusable_values() {
    let mut s = Settings::default();
    s.aggregates.top_n = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.aggregates.histogram_bins = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.aggregates.multi_value_delimiter.clear();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.data.delimiter = ";;".to_string();
    assert!(s.validate().is_err());
    assert_eq!(s.data.delimiter_byte(), b',');

    let mut s = Settings::default();
    s.ui.year_step = 0;
    assert!(s.validate().is_err());
}
