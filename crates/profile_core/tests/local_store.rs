use chrono::{TimeZone, Utc};
use profile_core::store::{PROFILES_KEY, SETTINGS_KEY};
use profile_core::{
    Feeling, KeyValueStore, LocalStore, MemoryKvStore, Profile, ProfileFormData, ProfileId,
    SqliteKvStore,
};
use profile_core::db::open_db;
use serde_json::json;

fn sample(id: &str, name: &str) -> Profile {
    let at = Utc.with_ymd_and_hms(2024, 7, 14, 18, 45, 30).unwrap();
    let data = ProfileFormData {
        name: name.to_string(),
        feeling: Feeling::Good,
        rating: 4,
        positive_points: vec!["Kind".to_string(), "Kind".to_string()],
        negative_points: vec!["Loud".to_string()],
        interesting_points: vec!["Speaks Polish".to_string()],
        observations: "Met at the climbing gym".to_string(),
    };
    Profile::from_form(ProfileId::from(id), data, at)
}

#[test]
fn profiles_roundtrip_with_iso_timestamps() {
    let store = LocalStore::new(MemoryKvStore::new());
    let profiles = vec![sample("a", "Ana"), sample("b", "Bruno")];

    store.save_profiles(&profiles).unwrap();

    let raw = store.kv().get(PROFILES_KEY).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["createdAt"], "2024-07-14T18:45:30.000Z");
    assert_eq!(stored[0]["updatedAt"], "2024-07-14T18:45:30.000Z");
    assert_eq!(stored[1]["interestingPoints"], json!(["Speaks Polish"]));

    assert_eq!(store.load_profiles(), profiles);
}

#[test]
fn browser_style_records_load() {
    let kv = MemoryKvStore::new();
    kv.set(
        PROFILES_KEY,
        &json!([{
            "id": "1717171717171abc123def",
            "name": "Legacy",
            "feeling": "neutral",
            "rating": 2,
            "positivePoints": [],
            "negativePoints": ["Rude"],
            "interestingPoints": [],
            "observations": "",
            "createdAt": "2023-12-31T23:00:00.123Z",
            "updatedAt": "2024-01-01T10:15:00.456Z"
        }])
        .to_string(),
    )
    .unwrap();

    let profiles = LocalStore::new(kv).load_profiles();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id.as_str(), "1717171717171abc123def");
    assert_eq!(profiles[0].negative_points, vec!["Rude"]);
    assert_eq!(
        profiles[0].updated_at,
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 15, 0).unwrap()
            + chrono::TimeDelta::milliseconds(456)
    );
}

#[test]
fn malformed_entries_are_skipped_individually() {
    let good = serde_json::to_value(sample("ok", "Ana")).unwrap();
    let duplicate = serde_json::to_value(sample("ok", "Shadow")).unwrap();
    let mut bad_date = serde_json::to_value(sample("bad-date", "Bruno")).unwrap();
    bad_date["createdAt"] = json!("yesterday");

    let kv = MemoryKvStore::new();
    kv.set(
        PROFILES_KEY,
        &json!([good, {"name": "no id"}, bad_date, duplicate]).to_string(),
    )
    .unwrap();

    let profiles = LocalStore::new(kv).load_profiles();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name, "Ana");
}

#[test]
fn sqlite_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles.db");

    {
        let store = LocalStore::new(SqliteKvStore::new(open_db(&path).unwrap()));
        store.save_profiles(&[sample("a", "Ana")]).unwrap();
        store
            .kv()
            .set(SETTINGS_KEY, r#"{"theme":"cyberpunk"}"#)
            .unwrap();
    }

    let store = LocalStore::new(SqliteKvStore::new(open_db(&path).unwrap()));
    assert_eq!(store.load_profiles(), vec![sample("a", "Ana")]);
    assert_eq!(
        store.load_settings().theme,
        profile_core::Theme::Cyberpunk
    );
}

#[test]
fn updated_before_created_is_clamped_on_load() {
    let mut record = serde_json::to_value(sample("skewed", "Ana")).unwrap();
    record["createdAt"] = json!("2024-07-14T18:45:30.000Z");
    record["updatedAt"] = json!("2024-07-14T18:45:29.999Z");

    let kv = MemoryKvStore::new();
    kv.set(PROFILES_KEY, &json!([record]).to_string()).unwrap();

    let profiles = LocalStore::new(kv).load_profiles();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].updated_at, profiles[0].created_at);
}

#[test]
fn blank_custom_image_survives_roundtrip() {
    let store = LocalStore::new(MemoryKvStore::new());
    let mut settings = profile_core::AppSettings::default();
    settings.background_settings.custom_image = Some(String::new());

    store.save_settings(&settings).unwrap();
    assert_eq!(store.load_settings(), settings);
}
