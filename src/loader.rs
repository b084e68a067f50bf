use crate::types::AllDomainData;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File names of the twelve domain datasets inside a data directory.
pub const DATASET_FILES: &[(&str, &str)] = &[
    ("gsdp", "gsdp.json"),
    ("revenue", "revenue.json"),
    ("fiscalHealth", "fiscal-health.json"),
    ("statewise", "statewise.json"),
    ("population", "population.json"),
    ("literacy", "literacy.json"),
    ("health", "health.json"),
    ("enrollment", "enrollment.json"),
    ("unemployment", "unemployment.json"),
    ("participation", "participation.json"),
    ("infrastructure", "infrastructure.json"),
    ("disease", "disease.json"),
];

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub loaded: Vec<&'static str>,
    pub missing: Vec<&'static str>,
    pub failed: Vec<(&'static str, String)>,
}

impl LoadReport {
    pub fn total(&self) -> usize {
        self.loaded.len() + self.missing.len() + self.failed.len()
    }
}

/// Load every domain dataset found in `dir`.
///
/// Each file is isolated: a missing or malformed file leaves its slot in
/// [`AllDomainData`] empty and is recorded in the [`LoadReport`], but never
/// stops the others from loading.
pub fn load_domain_data(dir: &Path) -> (AllDomainData, LoadReport) {
    let mut report = LoadReport::default();
    let data = AllDomainData {
        gsdp: load_one(dir, "gsdp", &mut report),
        revenue: load_one(dir, "revenue", &mut report),
        fiscal_health: load_one(dir, "fiscalHealth", &mut report),
        statewise: load_one(dir, "statewise", &mut report),
        population: load_one(dir, "population", &mut report),
        literacy: load_one(dir, "literacy", &mut report),
        health: load_one(dir, "health", &mut report),
        enrollment: load_one(dir, "enrollment", &mut report),
        unemployment: load_one(dir, "unemployment", &mut report),
        participation: load_one(dir, "participation", &mut report),
        infrastructure: load_one(dir, "infrastructure", &mut report),
        disease: load_one(dir, "disease", &mut report),
    };

    info!(
        dir = %dir.display(),
        loaded = report.loaded.len(),
        missing = report.missing.len(),
        failed = report.failed.len(),
        "domain datasets loaded"
    );
    (data, report)
}

/// Load a single JSON bundle holding all datasets under their camelCase keys.
pub fn load_bundle(path: &Path) -> Result<AllDomainData, crate::error::AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn dataset_path(dir: &Path, key: &str) -> Option<PathBuf> {
    DATASET_FILES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, file)| dir.join(file))
}

fn load_one<T: DeserializeOwned>(
    dir: &Path,
    key: &'static str,
    report: &mut LoadReport,
) -> Option<T> {
    let path = dataset_path(dir, key)?;
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(dataset = key, path = %path.display(), "dataset not present");
            report.missing.push(key);
            return None;
        }
        Err(e) => {
            warn!(dataset = key, path = %path.display(), error = %e, "failed to read dataset");
            report.failed.push((key, e.to_string()));
            return None;
        }
    };
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => {
            report.loaded.push(key);
            Some(value)
        }
        Err(e) => {
            warn!(dataset = key, path = %path.display(), error = %e, "failed to parse dataset");
            report.failed.push((key, e.to_string()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_directory_loads_what_it_can() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("gsdp.json"),
            r#"{"year":"2022-23","states":[{"id":"MH","name":"Maharashtra","gsdp":3527922.12}]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("health.json"),
            r#"{"stateImr":[{"id":"KL","name":"Kerala","value":6}],"stateHealth":[]}"#,
        )
        .unwrap();
        fs::write(dir.path().join("literacy.json"), "{ not json").unwrap();

        let (data, report) = load_domain_data(dir.path());
        assert!(data.gsdp.is_some());
        assert!(data.health.is_some());
        assert!(data.literacy.is_none());
        assert!(data.revenue.is_none());
        assert_eq!(data.loaded_count(), 2);

        assert_eq!(report.loaded, vec!["gsdp", "health"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "literacy");
        assert_eq!(report.missing.len(), 9);
        assert_eq!(report.total(), DATASET_FILES.len());
    }

    #[test]
    fn bundle_reads_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.json");
        fs::write(
            &path,
            concat!(
                r#"{"fiscalHealth":{"states":"#,
                r#"[{"id":"PB","fiscalDeficitPctGsdp":4.9,"debtToGsdp":47.6}]}}"#,
            ),
        )
        .unwrap();
        let data = load_bundle(&path).unwrap();
        let fiscal = data.fiscal_health.unwrap();
        assert_eq!(fiscal.states[0].debt_to_gsdp, Some(47.6));
        assert!(data.gsdp.is_none());
    }
}
