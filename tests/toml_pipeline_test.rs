use tempfile::TempDir;
use ticket_stats::utils::validation::Validate;
use ticket_stats::{EtlEngine, LocalStorage, TicketPipeline, TomlConfig};

const DOCUMENT: &str = r#"{
  "tickets": [
    {"origin": "LED", "destination": "MOW", "departure_date": "01.06.18", "departure_time": "7:05",
     "arrival_date": "01.06.18", "arrival_time": "8:35", "carrier": "SU", "price": 4200},
    {"origin": "LED", "destination": "MOW", "departure_date": "01.06.18", "departure_time": "9:00",
     "arrival_date": "01.06.18", "arrival_time": "??:??", "carrier": "S7", "price": 3900},
    {"origin": "LED", "destination": "MOW", "departure_date": "01.06.18", "departure_time": "21:15",
     "arrival_date": "01.06.18", "arrival_time": "22:40", "carrier": "S7", "price": "3800"}
  ]
}"#;

#[tokio::test]
async fn test_toml_configured_run_with_skip_policy() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("flights.json"), DOCUMENT).unwrap();

    let toml_content = r#"
[source]
path = "flights.json"

[route]
origin = "LED"
destination = "MOW"

[analysis]
on_parse_error = "skip"

[output]
format = "csv"
path = "out/carriers.csv"
"#;
    let config = TomlConfig::from_toml_str(toml_content).unwrap();
    config.validate().unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = TicketPipeline::new(storage, config);
    let output = EtlEngine::new(pipeline).run().await.unwrap();

    assert_eq!(
        output,
        "carrier,min_flight_minutes,ticket_count\nS7,85,1\nSU,90,1\n"
    );
    let saved = std::fs::read_to_string(temp_dir.path().join("out/carriers.csv")).unwrap();
    assert_eq!(saved, output);
}

#[tokio::test]
async fn test_toml_configured_run_aborts_by_default() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("flights.json"), DOCUMENT).unwrap();

    let config = TomlConfig::from_toml_str(
        "[source]\npath = \"flights.json\"\n[route]\norigin = \"LED\"\ndestination = \"MOW\"\n",
    )
    .unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = TicketPipeline::new(storage, config);
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(err.to_string().contains("arrival_date/arrival_time"));
}
