use chrono::{DateTime, Local, TimeZone};
use phonehunter::core::placeholder::LINK_POOL;
use phonehunter::domain::model::FieldValue;
use phonehunter::domain::ports::Clock;
use phonehunter::{HunterEngine, HunterError, LocalStorage, MetadataTable, Report, SystemClock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct FixedClock(DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

fn at(second: u32) -> FixedClock {
    FixedClock(Local.with_ymd_and_hms(2025, 1, 2, 3, 4, second).unwrap())
}

fn files_in(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    files.sort();
    files
}

#[test]
fn test_end_to_end_valid_saudi_mobile() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("results");

    let engine = HunterEngine::new(
        LocalStorage::new(&output_dir),
        SystemClock,
        MetadataTable::builtin().unwrap(),
    );
    let mut rng = StdRng::seed_from_u64(42);
    let mut console: Vec<u8> = Vec::new();

    let base = engine
        .run("+966501234567", &mut rng, &mut console)
        .unwrap()
        .expect("report should be saved");

    let console = String::from_utf8(console).unwrap();
    assert!(console.contains("--- معلومات أساسية ---"));
    assert!(console.contains("--- نتائج OSINT عميقة (دارك ويب 🔥) ---"));
    assert!(console.contains("--- روابط بحث سريعة ---"));
    assert!(console.contains("International Format: +966 50 123 4567"));
    assert!(console.contains("Country: Saudi Arabia"));
    assert!(console.contains("Number Type: MOBILE"));

    let files = files_in(&output_dir);
    assert_eq!(files.len(), 2);

    let json_path = PathBuf::from(format!("{}.json", base.display()));
    let txt_path = PathBuf::from(format!("{}.txt", base.display()));
    assert!(files.contains(&json_path));
    assert!(files.contains(&txt_path));

    let confirmation = console.lines().last().unwrap();
    assert!(confirmation.starts_with("✅"));
    assert!(confirmation.contains(&json_path.display().to_string()));
    assert!(confirmation.contains(&txt_path.display().to_string()));

    let file_name = base.file_name().unwrap().to_str().unwrap();
    assert!(file_name.starts_with("966501234567_"));
    // 966501234567_YYYYMMDD_HHMMSS
    assert_eq!(file_name.len(), "966501234567_".len() + 15);
}

#[test]
fn test_json_artifact_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let engine = HunterEngine::new(
        LocalStorage::new(temp_dir.path()),
        at(5),
        MetadataTable::builtin().unwrap(),
    );
    let mut rng = StdRng::seed_from_u64(9);

    let in_memory = engine
        .build_report("+966501234567", &mut StdRng::seed_from_u64(9))
        .unwrap();
    let base = engine
        .run("+966501234567", &mut rng, &mut std::io::sink())
        .unwrap()
        .unwrap();

    let json = std::fs::read_to_string(format!("{}.json", base.display())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let sections: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(sections.len(), 3);
    for name in ["Basic Info", "Links", "Deep OSINT"] {
        assert!(value.get(name).is_some(), "missing section {}", name);
    }
    assert!(value["Basic Info"]["Timezones"].is_array());
    assert!(value["Deep OSINT"]["Leaked Links"].is_array());
    assert!(value["Deep OSINT"]["Confidence Level"].is_string());

    let from_disk: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(from_disk, in_memory);
    assert_eq!(
        from_disk.basic_info.labels().collect::<Vec<_>>(),
        in_memory.basic_info.labels().collect::<Vec<_>>()
    );
}

#[test]
fn test_text_artifact_lists_leaked_links() {
    let temp_dir = TempDir::new().unwrap();
    let engine = HunterEngine::new(
        LocalStorage::new(temp_dir.path()),
        at(6),
        MetadataTable::builtin().unwrap(),
    );

    let base = engine
        .run("+966501234567", &mut StdRng::seed_from_u64(3), &mut std::io::sink())
        .unwrap()
        .unwrap();

    let text = std::fs::read_to_string(format!("{}.txt", base.display())).unwrap();
    assert!(text.starts_with("📞 رقم الهاتف: +966501234567\n--- معلومات أساسية ---\n"));
    assert!(text.contains("--- نتائج OSINT عميقة (نمط دارك ويب) ---"));
    for index in 1..=3 {
        let line = text
            .lines()
            .find(|line| line.starts_with(&format!("{}. ", index)))
            .unwrap();
        let link = line.splitn(2, ". ").nth(1).unwrap();
        assert!(LINK_POOL.contains(&link));
    }
    assert!(!text.lines().any(|line| line.starts_with("4. ")));
}

#[test]
fn test_invalid_number_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("results");
    let engine = HunterEngine::new(
        LocalStorage::new(&output_dir),
        SystemClock,
        MetadataTable::builtin().unwrap(),
    );

    for phone in ["+10000000000", "+1000", "+9660000000000"] {
        let mut console: Vec<u8> = Vec::new();
        let result = engine.run(phone, &mut StdRng::seed_from_u64(1), &mut console);

        assert!(
            matches!(result, Err(HunterError::InvalidNumber { .. })),
            "{}",
            phone
        );
        assert!(console.is_empty());
    }
    assert!(files_in(&output_dir).is_empty());
}

#[test]
fn test_unparseable_input_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("results");
    let engine = HunterEngine::new(
        LocalStorage::new(&output_dir),
        SystemClock,
        MetadataTable::builtin().unwrap(),
    );

    let result = engine.run("not a number", &mut StdRng::seed_from_u64(1), &mut std::io::sink());

    let err = result.unwrap_err();
    assert!(matches!(err, HunterError::Unparseable { .. }));
    assert!(err.user_friendly_message().contains("+9665xxxxxxx"));
    assert!(!output_dir.exists());
}

#[test]
fn test_dry_run_prints_but_does_not_save() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("results");
    let engine = HunterEngine::new(
        LocalStorage::new(&output_dir),
        SystemClock,
        MetadataTable::builtin().unwrap(),
    )
    .with_dry_run(true);
    let mut console: Vec<u8> = Vec::new();

    let result = engine
        .run("+966501234567", &mut StdRng::seed_from_u64(1), &mut console)
        .unwrap();

    assert!(result.is_none());
    let console = String::from_utf8(console).unwrap();
    assert!(console.contains("--- روابط بحث سريعة ---"));
    assert!(!console.contains("✅"));
    assert!(!output_dir.exists());
}

#[test]
fn test_runs_in_different_seconds_accumulate() {
    let temp_dir = TempDir::new().unwrap();
    let metadata = MetadataTable::builtin().unwrap();

    for second in [10, 11] {
        let engine =
            HunterEngine::new(LocalStorage::new(temp_dir.path()), at(second), metadata.clone());
        engine
            .run("+966501234567", &mut StdRng::seed_from_u64(1), &mut std::io::sink())
            .unwrap();
    }

    assert_eq!(files_in(temp_dir.path()).len(), 4);
}

#[test]
fn test_runs_in_same_second_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let metadata = MetadataTable::builtin().unwrap();

    for seed in [1, 2] {
        let engine =
            HunterEngine::new(LocalStorage::new(temp_dir.path()), at(20), metadata.clone());
        engine
            .run("+966501234567", &mut StdRng::seed_from_u64(seed), &mut std::io::sink())
            .unwrap();
    }

    assert_eq!(files_in(temp_dir.path()).len(), 2);
}

#[test]
fn test_custom_metadata_table() {
    let temp_dir = TempDir::new().unwrap();
    let metadata = MetadataTable::from_toml_str(
        r#"
[regions.SA]
name = "Kingdom of Saudi Arabia"
timezones = ["Asia/Riyadh"]

[[carriers]]
code = 966
prefixes = ["501"]
name = "Test Carrier"
"#,
    )
    .unwrap();
    let engine = HunterEngine::new(LocalStorage::new(temp_dir.path()), at(30), metadata);

    let report = engine
        .build_report("+966501234567", &mut StdRng::seed_from_u64(1))
        .unwrap();

    assert_eq!(
        report.basic_info.get("Country"),
        Some(&FieldValue::Scalar("Kingdom of Saudi Arabia".to_string()))
    );
    assert_eq!(
        report.basic_info.get("Carrier"),
        Some(&FieldValue::Scalar("Test Carrier".to_string()))
    );
}
