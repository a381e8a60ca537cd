// エンドツーエンド統合テスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::*;
use param_sync::{
    cli::commands::{execute_push, PushConfig},
    services::{DefaultDispatchConfig, SyncConfig},
    EnvFileReader, ParameterPath, SyncEngine,
};
use std::collections::HashSet;
use std::path::PathBuf;

#[tokio::test]
async fn test_config_env_file_and_engine_pipeline() {
    let (_dir, config_path) = create_project(
        "my-service",
        2,
        "# comment\nDB_HOST=db.internal\nDB_PASS='s3cr3t'\nEMPTY=\nFEATURE_FLAG=on\n",
    );

    let config = SyncConfig::load(&config_path).unwrap();
    let env_path = config.resolve_env_file(&config_path, "dev").unwrap();
    let items = EnvFileReader::read_items(&env_path).unwrap();

    let engine = SyncEngine::new(
        RecordingUploader::new(),
        DefaultDispatchConfig::from_requested(config.concurrency),
        CollectingReporter::new(),
    );
    let summary = engine
        .sync(
            &ParameterPath::new(&config.base_path, "dev"),
            ".env.development",
            items,
        )
        .await
        .unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded, 3);

    let names: HashSet<String> = engine.uploader().names().into_iter().collect();
    let expected: HashSet<String> = [
        "/my-service/dev/DB_HOST",
        "/my-service/dev/DB_PASS",
        "/my-service/dev/FEATURE_FLAG",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(names, expected);

    let calls = engine.uploader().calls.lock().unwrap().clone();
    assert!(calls.contains(&("/my-service/dev/DB_PASS".to_string(), "s3cr3t".to_string())));
}

#[tokio::test]
async fn test_reporter_sees_start_each_item_and_single_completion() {
    let engine = SyncEngine::new(
        RecordingUploader::new().failing("X", "AccessDenied"),
        DefaultDispatchConfig::new(2),
        CollectingReporter::new(),
    );
    let items = EnvFileReader::parse_str("A=1\nX=2\nC=3\n");

    engine
        .sync(&ParameterPath::new("/app", "prod"), ".env.production", items)
        .await
        .unwrap();

    let events = engine.reporter().events();
    assert_eq!(
        events.first(),
        Some(&ReportEvent::Started {
            source: ".env.production".to_string(),
            total: 3
        })
    );
    assert_eq!(
        events.last(),
        Some(&ReportEvent::Completed {
            prefix: "/app/prod".to_string(),
            source: ".env.production".to_string(),
            total: 3,
            failed: 1
        })
    );

    let completed = events
        .iter()
        .filter(|e| matches!(e, ReportEvent::Completed { .. }))
        .count();
    assert_eq!(completed, 1);

    let uploaded = events
        .iter()
        .filter(|e| matches!(e, ReportEvent::Uploaded { .. }))
        .count();
    assert_eq!(uploaded, 2);

    assert!(events.contains(&ReportEvent::Failed {
        name: "/app/prod/X".to_string(),
        reason: "AccessDenied".to_string(),
    }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrency_limit_is_respected() {
    let content: String = (0..40).map(|i| format!("KEY_{i}=value{i}\n")).collect();
    let items = EnvFileReader::parse_str(&content);

    let engine = SyncEngine::new(
        RecordingUploader::new().with_delay(5),
        DefaultDispatchConfig::new(3),
        CollectingReporter::new(),
    );
    let summary = engine
        .sync(&ParameterPath::new("app", "dev"), ".env", items)
        .await
        .unwrap();

    let names = engine.uploader().names();
    let unique: HashSet<&String> = names.iter().collect();

    assert_eq!(summary.total, 40);
    assert_eq!(names.len(), 40);
    assert_eq!(unique.len(), 40);
    assert!(
        engine
            .uploader()
            .max_in_flight
            .load(std::sync::atomic::Ordering::SeqCst)
            <= 3
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_push_through_fake_aws_cli() {
    let (dir, config_path) = create_project("/my-service", 3, "A=1\nB=2\nC=3\nD=\n");
    let (script, log) = create_fake_aws_cli(dir.path());

    let summary = execute_push(PushConfig {
        environment: "dev".to_string(),
        config: config_path,
        concurrency: None,
        dry_run: false,
        aws_cli: script,
        quiet: true,
    })
    .await
    .unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.failed, 0);

    let mut names = logged_names(&log);
    names.sort();
    assert_eq!(
        names,
        vec!["/my-service/dev/A", "/my-service/dev/B", "/my-service/dev/C"]
    );

    let raw = std::fs::read_to_string(&log).unwrap();
    assert!(raw.contains("--region ap-northeast-2"));
    assert!(raw.contains("--profile ci"));
    assert!(raw.contains("--type SecureString --overwrite"));
}

#[tokio::test]
async fn test_dry_run_push_touches_nothing() {
    let (_dir, config_path) = create_project("svc", 1, "A=1\nB=2\n");

    let summary = execute_push(PushConfig {
        environment: "dev".to_string(),
        config: config_path,
        concurrency: Some(4),
        dry_run: true,
        aws_cli: PathBuf::from("/nonexistent/aws"),
        quiet: true,
    })
    .await
    .unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.succeeded, 2);
}

#[tokio::test]
async fn test_secret_values_reach_uploader_unchanged() {
    let (_dir, config_path) = create_project(
        "app",
        2,
        "PASS=p$ssw0rd\nHOME_REF=$HOME\nTEMPLATE=\"a${PASS}b\"\nPATTERN=\"\\d+\"\n",
    );

    let config = SyncConfig::load(&config_path).unwrap();
    let env_path = config.resolve_env_file(&config_path, "dev").unwrap();
    let items = EnvFileReader::read_items(&env_path).unwrap();

    let engine = SyncEngine::new(
        RecordingUploader::new(),
        DefaultDispatchConfig::new(2),
        CollectingReporter::new(),
    );
    engine
        .sync(&ParameterPath::new("app", "dev"), ".env.development", items)
        .await
        .unwrap();

    let calls: HashSet<(String, String)> = engine
        .uploader()
        .calls
        .lock()
        .unwrap()
        .iter()
        .cloned()
        .collect();
    let expected: HashSet<(String, String)> = [
        ("/app/dev/PASS", "p$ssw0rd"),
        ("/app/dev/HOME_REF", "$HOME"),
        ("/app/dev/TEMPLATE", "a${PASS}b"),
        ("/app/dev/PATTERN", "\\d+"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect();
    assert_eq!(calls, expected);
}
