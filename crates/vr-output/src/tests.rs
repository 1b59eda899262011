//! Integration tests for vr-output.

#[cfg(test)]
mod helpers {
    use tempfile::TempDir;

    use vr_transform::{FcBreakdown, JurisdictionReport};

    pub fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    pub fn report(id: &str, road_count: usize, total_miles: f64) -> JurisdictionReport {
        JurisdictionReport {
            jurisdiction:      id.to_owned(),
            jurisdiction_name: format!("{id} County"),
            generated:         "2024-01-01T00:00:00.000Z".to_owned(),
            version:           "1.0".to_owned(),
            road_count,
            total_miles,
            fc_breakdown:      FcBreakdown::default(),
            roads:             Vec::new(),
        }
    }
}

// ── JsonStore ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_store {
    use std::fs;

    use serde_json::Value;

    use vr_transform::JurisdictionReport;

    use super::helpers::{report, tmp};
    use crate::{JsonStore, Manifest, OutputWriter};

    #[test]
    fn new_creates_roads_dir() {
        let dir = tmp();
        let out = dir.path().join("data");
        let _store = JsonStore::new(&out, None, false).unwrap();
        assert!(out.join("roads").is_dir());
    }

    #[test]
    fn persist_writes_road_file_and_manifest() {
        let dir = tmp();
        let mut store = JsonStore::new(dir.path(), None, false).unwrap();
        let path = store.persist(&report("henrico", 12, 34.56)).unwrap();

        assert_eq!(path, dir.path().join("roads").join("henrico.json"));
        let back: JurisdictionReport =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(back, report("henrico", 12, 34.56));

        let manifest = Manifest::load_or_default(&store.manifest_path()).unwrap();
        let entry = &manifest.jurisdictions["henrico"];
        assert!(entry.available);
        assert_eq!(entry.road_count, 12);
        assert_eq!(entry.total_miles, 34.56);
        assert_eq!(entry.last_updated, back.generated);
        assert_eq!(entry.last_updated, "2024-01-01T00:00:00.000Z");
        assert_eq!(manifest.version, "1.0");
    }

    #[test]
    fn compact_by_default_pretty_on_request() {
        let dir = tmp();
        let mut compact = JsonStore::new(dir.path().join("a"), None, false).unwrap();
        let mut pretty = JsonStore::new(dir.path().join("b"), None, true).unwrap();

        let a = fs::read_to_string(compact.write_report(&report("x", 0, 0.0)).unwrap()).unwrap();
        let b = fs::read_to_string(pretty.write_report(&report("x", 0, 0.0)).unwrap()).unwrap();

        assert!(!a.contains('\n'));
        assert!(b.contains("\n  \"jurisdiction\": \"x\""));
        assert_eq!(
            serde_json::from_str::<Value>(&a).unwrap(),
            serde_json::from_str::<Value>(&b).unwrap()
        );
    }

    #[test]
    fn road_file_is_fully_replaced() {
        let dir = tmp();
        let mut store = JsonStore::new(dir.path(), None, false).unwrap();
        store.write_report(&report("henrico", 500, 1234.5)).unwrap();
        let path = store.write_report(&report("henrico", 1, 0.5)).unwrap();

        let back: JurisdictionReport =
            serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(back.road_count, 1);
    }

    #[test]
    fn manifest_accumulates_and_preserves_prior_entries() {
        let dir = tmp();
        let mut store = JsonStore::new(dir.path(), None, false).unwrap();
        store.persist(&report("henrico", 1, 1.0)).unwrap();

        // A second run over a different jurisdiction.
        let mut store = JsonStore::new(dir.path(), None, false).unwrap();
        store.persist(&report("richmond_city", 2, 2.0)).unwrap();

        let manifest = Manifest::load_or_default(&store.manifest_path()).unwrap();
        let ids: Vec<_> = manifest.jurisdictions.keys().cloned().collect();
        assert_eq!(ids, ["henrico", "richmond_city"]);
    }

    #[test]
    fn repeat_upsert_is_idempotent_except_timestamps() {
        let dir = tmp();
        let mut store = JsonStore::new(dir.path(), None, false).unwrap();
        let r = report("henrico", 7, 8.25);

        store.persist(&r).unwrap();
        let mut first = Manifest::load_or_default(&store.manifest_path()).unwrap();
        store.persist(&r).unwrap();
        let mut second = Manifest::load_or_default(&store.manifest_path()).unwrap();

        for m in [&mut first, &mut second] {
            m.generated.clear();
            for entry in m.jurisdictions.values_mut() {
                entry.last_updated.clear();
            }
        }
        assert_eq!(first, second);
    }

    #[test]
    fn persist_over_manifest_with_placeholder_and_foreign_keys() {
        let dir = tmp();
        let mut store = JsonStore::new(dir.path(), None, false).unwrap();
        fs::write(
            store.manifest_path(),
            r#"{"generated":"","version":"1.0","stateName":"Virginia",
                "jurisdictions":{"accomack":{"available":false}}}"#,
        )
        .unwrap();

        store.persist(&report("henrico", 4, 2.5)).unwrap();

        let v: Value = serde_json::from_slice(&fs::read(store.manifest_path()).unwrap()).unwrap();
        assert_eq!(v["stateName"], "Virginia");
        assert_eq!(v["jurisdictions"]["accomack"]["available"], false);
        assert_eq!(v["jurisdictions"]["henrico"]["roadCount"], 4);
        assert_eq!(v["jurisdictions"]["henrico"]["lastUpdated"], "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn failed_road_write_leaves_manifest_untouched() {
        let dir = tmp();
        let mut store = JsonStore::new(dir.path(), None, false).unwrap();
        // A directory where the road file should go makes the write fail.
        fs::create_dir_all(store.road_path("henrico")).unwrap();

        assert!(store.persist(&report("henrico", 1, 1.0)).is_err());
        assert!(!store.manifest_path().exists());
    }

    #[test]
    fn finish_without_archive_path_is_noop() {
        let dir = tmp();
        let mut store = JsonStore::new(dir.path(), None, false).unwrap();
        assert_eq!(store.finish().unwrap(), None);
        assert_eq!(store.finish().unwrap(), None);
    }

    #[test]
    fn finish_archives_once() {
        let dir = tmp();
        let zip_path = dir.path().join("out.zip");
        let mut store = JsonStore::new(dir.path().join("data"), Some(zip_path.clone()), false).unwrap();
        store.persist(&report("henrico", 1, 1.0)).unwrap();

        assert_eq!(store.finish().unwrap(), Some(zip_path.clone()));
        assert!(zip_path.is_file());
        assert_eq!(store.finish().unwrap(), None);
    }
}

// ── Manifest ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod manifest {
    use std::fs;

    use serde_json::json;

    use super::helpers::{report, tmp};
    use crate::{Manifest, OutputError};

    #[test]
    fn absent_file_gives_empty_manifest() {
        let dir = tmp();
        let m = Manifest::load_or_default(&dir.path().join("manifest.json")).unwrap();
        assert_eq!(m, Manifest::default());
        assert_eq!(m.generated, "");
        assert_eq!(m.version, "1.0");
        assert!(m.jurisdictions.is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tmp();
        let path = dir.path().join("manifest.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Manifest::load_or_default(&path).unwrap_err();
        assert!(matches!(err, OutputError::CorruptManifest { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn upsert_replaces_entry() {
        let mut m = Manifest::default();
        m.upsert(&report("henrico", 1, 1.0), "2024-01-01T00:00:00.000Z");
        let mut newer = report("henrico", 9, 9.5);
        newer.generated = "2024-02-01T00:00:00.000Z".to_owned();
        m.upsert(&newer, "2024-02-01T00:00:05.000Z");

        assert_eq!(m.jurisdictions.len(), 1);
        assert_eq!(m.jurisdictions["henrico"].road_count, 9);
        assert_eq!(m.jurisdictions["henrico"].last_updated, "2024-02-01T00:00:00.000Z");
        assert_eq!(m.generated, "2024-02-01T00:00:05.000Z");
    }

    #[test]
    fn placeholder_entries_load_with_defaults() {
        let dir = tmp();
        let path = dir.path().join("manifest.json");
        fs::write(
            &path,
            r#"{"generated":"","version":"1.0","jurisdictions":{"accomack":{"available":false}}}"#,
        )
        .unwrap();

        let m = Manifest::load_or_default(&path).unwrap();
        let entry = &m.jurisdictions["accomack"];
        assert!(!entry.available);
        assert_eq!(entry.last_updated, "");
        assert_eq!(entry.road_count, 0);
        assert_eq!(entry.total_miles, 0.0);
    }

    #[test]
    fn missing_top_level_fields_take_defaults() {
        let dir = tmp();
        let path = dir.path().join("manifest.json");
        fs::write(&path, "{}").unwrap();
        assert_eq!(Manifest::load_or_default(&path).unwrap(), Manifest::default());
    }

    #[test]
    fn unknown_keys_survive_upsert_and_save() {
        let dir = tmp();
        let path = dir.path().join("manifest.json");
        fs::write(
            &path,
            r#"{"generated":"","version":"1.0","stateName":"Virginia",
                "jurisdictions":{"accomack":{"available":false,"note":"pending"}}}"#,
        )
        .unwrap();

        let mut m = Manifest::load_or_default(&path).unwrap();
        m.upsert(&report("henrico", 3, 4.5), "2024-03-01T00:00:00.000Z");
        m.save(&path, false).unwrap();

        let v: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(v["stateName"], "Virginia");
        assert_eq!(v["jurisdictions"]["accomack"]["note"], "pending");
        assert_eq!(v["jurisdictions"]["accomack"]["available"], false);
        assert_eq!(v["jurisdictions"]["henrico"]["roadCount"], 3);
    }

    #[test]
    fn json_shape() {
        let mut m = Manifest::default();
        m.upsert(&report("henrico", 3, 4.5), "2024-01-01T00:00:00.000Z");

        assert_eq!(
            serde_json::to_value(&m).unwrap(),
            json!({
                "generated": "2024-01-01T00:00:00.000Z",
                "version": "1.0",
                "jurisdictions": {
                    "henrico": {
                        "available": true,
                        "lastUpdated": "2024-01-01T00:00:00.000Z",
                        "roadCount": 3,
                        "totalMiles": 4.5
                    }
                }
            })
        );
    }
}

// ── Archive ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod archive {
    use std::fs::{self, File};
    use std::io::Read;

    use super::helpers::tmp;
    use crate::zip_dir;

    fn entry_names(path: &std::path::Path) -> Vec<String> {
        let zip = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut names: Vec<String> = zip.file_names().map(str::to_owned).collect();
        names.sort();
        names
    }

    #[test]
    fn entries_are_relative_to_root() {
        let dir = tmp();
        let data = dir.path().join("data");
        fs::create_dir_all(data.join("roads")).unwrap();
        fs::write(data.join("manifest.json"), "{}").unwrap();
        fs::write(data.join("roads").join("henrico.json"), "{\"roadCount\":0}").unwrap();

        let dest = dir.path().join("out.zip");
        assert_eq!(zip_dir(&data, &dest).unwrap(), 2);
        assert_eq!(entry_names(&dest), ["manifest.json", "roads/", "roads/henrico.json"]);

        let mut zip = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let mut body = String::new();
        zip.by_name("roads/henrico.json").unwrap().read_to_string(&mut body).unwrap();
        assert_eq!(body, "{\"roadCount\":0}");
    }

    #[test]
    fn archive_inside_source_is_not_self_included() {
        let dir = tmp();
        fs::write(dir.path().join("a.json"), "[]").unwrap();

        let dest = dir.path().join("bundle.zip");
        assert_eq!(zip_dir(dir.path(), &dest).unwrap(), 1);
        assert_eq!(entry_names(&dest), ["a.json"]);
    }

    #[test]
    fn empty_tree_gives_empty_archive() {
        let dir = tmp();
        let data = dir.path().join("data");
        fs::create_dir_all(&data).unwrap();

        let dest = dir.path().join("empty.zip");
        assert_eq!(zip_dir(&data, &dest).unwrap(), 0);
        assert!(entry_names(&dest).is_empty());
    }
}
