//! Integration tests for the crawler
//!
//! These tests use wiremock to stand in for the novel site and a temporary
//! directory for the output root, and run complete crawls end-to-end.

use chapter_crawler::config::Config;
use chapter_crawler::crawler::{Coordinator, CrawlRequest};
use chapter_crawler::state::ChapterState;
use chapter_crawler::CrawlError;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server and a temp root
fn create_test_config(base_url: &str, root: &Path, delay_ms: u64) -> Config {
    let mut config = Config::default();
    config.crawler.base_url = base_url.to_string();
    config.crawler.request_delay_ms = delay_ms;
    config.crawler.timeout_secs = 5;
    config.output.root_dir = root.to_string_lossy().into_owned();
    config
}

fn chapter_page(sentences: &[&str]) -> String {
    let body: String = sentences
        .iter()
        .map(|s| {
            format!(
                r#"<p><sentence class="original">{}</sentence><sentence class="translated">...</sentence></p>"#,
                s
            )
        })
        .collect();
    format!(
        "<html><head><title>Chapter</title></head><body><div class=\"chapter-body\">{}</div></body></html>",
        body
    )
}

async fn mount_chapter(server: &MockServer, slug: &str, chapter: u32, html: String) {
    Mock::given(method("GET"))
        .and(path(format!("/chapter/{}-chapter-{}", slug, chapter)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn chapter_file(root: &Path, title: &str, slug: &str, chapter: u32) -> PathBuf {
    root.join(title)
        .join(format!("{}-chapter-{}-zn.txt", slug, chapter))
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[tokio::test]
async fn test_single_chapter_saved() {
    let mock_server = MockServer::start().await;
    mount_chapter(&mock_server, "test-novel", 1, chapter_page(&["你好", "世界"])).await;

    let temp = TempDir::new().unwrap();
    let root = temp.path().join("Books");
    let config = create_test_config(&mock_server.uri(), &root, 0);

    let request = CrawlRequest::new("Test Novel", 1, 1).unwrap();
    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let report = coordinator.run(&request).await.expect("Crawl failed");

    let file = root.join("Test Novel").join("test-novel-chapter-1-zn.txt");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "你好世界");
    assert_eq!(report.state_of(1), Some(ChapterState::Written));
    assert_eq!(report.written(), vec![1]);
}

#[tokio::test]
async fn test_http_error_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    let slug = "emperor-s-domination";

    mount_chapter(&mock_server, slug, 4, chapter_page(&["第四章"])).await;
    Mock::given(method("GET"))
        .and(path(format!("/chapter/{}-chapter-5", slug)))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_chapter(&mock_server, slug, 6, chapter_page(&["第六章"])).await;

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), temp.path(), 0);

    let request = CrawlRequest::new("Emperor's Domination", 4, 6).unwrap();
    let report = Coordinator::new(config)
        .unwrap()
        .run(&request)
        .await
        .expect("Crawl failed");

    let title = "Emperor's Domination";
    assert!(chapter_file(temp.path(), title, slug, 4).exists());
    assert!(!chapter_file(temp.path(), title, slug, 5).exists());
    assert_eq!(
        std::fs::read_to_string(chapter_file(temp.path(), title, slug, 6)).unwrap(),
        "第六章"
    );

    let files = files_in(&temp.path().join(title));
    assert!(files.iter().all(|f| !f.contains("-chapter-5-")));
    assert_eq!(report.state_of(5), Some(ChapterState::FetchFailed));
    assert_eq!(report.failed(), vec![5]);
}

#[tokio::test]
async fn test_fetches_each_chapter_once_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/chapter/ordered-chapter-\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(chapter_page(&["字"])))
        .expect(5)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), temp.path(), 0);

    let request = CrawlRequest::new("Ordered", 3, 7).unwrap();
    let report = Coordinator::new(config)
        .unwrap()
        .run(&request)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let paths: Vec<String> = requests.iter().map(|r| r.url.path().to_string()).collect();
    assert_eq!(
        paths,
        vec![
            "/chapter/ordered-chapter-3",
            "/chapter/ordered-chapter-4",
            "/chapter/ordered-chapter-5",
            "/chapter/ordered-chapter-6",
            "/chapter/ordered-chapter-7",
        ]
    );
    assert_eq!(report.attempted(), 5);
    assert_eq!(
        report.chapters.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
        vec![3, 4, 5, 6, 7]
    );
}

#[tokio::test]
async fn test_pacing_between_chapters() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(chapter_page(&["字"])))
        .expect(3)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), temp.path(), 150);

    let request = CrawlRequest::new("Paced", 1, 3).unwrap();
    let started = Instant::now();
    Coordinator::new(config)
        .unwrap()
        .run(&request)
        .await
        .unwrap();

    // Two pauses for three chapters
    assert!(started.elapsed() >= Duration::from_millis(300));
}

#[tokio::test]
async fn test_no_pause_after_last_chapter() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(chapter_page(&["字"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), temp.path(), 10_000);

    let request = CrawlRequest::new("Single", 1, 1).unwrap();
    let started = Instant::now();
    Coordinator::new(config)
        .unwrap()
        .run(&request)
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_page_without_marker_is_skipped() {
    let mock_server = MockServer::start().await;
    mount_chapter(
        &mock_server,
        "empty-novel",
        1,
        "<html><body><p>Chapter not available</p></body></html>".to_string(),
    )
    .await;

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), temp.path(), 0);

    let request = CrawlRequest::new("Empty Novel", 1, 1).unwrap();
    let report = Coordinator::new(config)
        .unwrap()
        .run(&request)
        .await
        .expect("An empty page must not fail the crawl");

    assert_eq!(report.state_of(1), Some(ChapterState::ExtractEmpty));
    assert_eq!(report.skipped(), vec![1]);
    assert!(report.failed().is_empty());
    assert!(!chapter_file(temp.path(), "Empty Novel", "empty-novel", 1).exists());
    // The writer is never reached, so not even the novel directory exists
    assert!(!temp.path().join("Empty Novel").exists());
}

#[tokio::test]
async fn test_rerun_overwrites_with_same_content() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/chapter/again-chapter-\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(chapter_page(&["重", "复"])))
        .expect(4)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let request = CrawlRequest::new("Again", 1, 2).unwrap();

    let config = create_test_config(&mock_server.uri(), temp.path(), 0);
    Coordinator::new(config.clone())
        .unwrap()
        .run(&request)
        .await
        .unwrap();
    let first = files_in(&temp.path().join("Again"));

    // Tamper with a file so the second run has something to overwrite
    std::fs::write(chapter_file(temp.path(), "Again", "again", 2), "stale").unwrap();

    Coordinator::new(config)
        .unwrap()
        .run(&request)
        .await
        .unwrap();
    let second = files_in(&temp.path().join("Again"));

    assert_eq!(first, second);
    assert_eq!(
        first,
        vec!["again-chapter-1-zn.txt", "again-chapter-2-zn.txt"]
    );
    for chapter in 1..=2 {
        assert_eq!(
            std::fs::read_to_string(chapter_file(temp.path(), "Again", "again", chapter)).unwrap(),
            "重复"
        );
    }
}

#[tokio::test]
async fn test_unwritable_file_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    mount_chapter(&mock_server, "blocked", 1, chapter_page(&["一"])).await;
    mount_chapter(&mock_server, "blocked", 2, chapter_page(&["二"])).await;

    let temp = TempDir::new().unwrap();
    // A directory where chapter 1's file should go makes the write fail
    std::fs::create_dir_all(chapter_file(temp.path(), "Blocked", "blocked", 1)).unwrap();

    let config = create_test_config(&mock_server.uri(), temp.path(), 0);
    let request = CrawlRequest::new("Blocked", 1, 2).unwrap();
    let report = Coordinator::new(config)
        .unwrap()
        .run(&request)
        .await
        .expect("A write failure must not fail the crawl");

    assert_eq!(report.state_of(1), Some(ChapterState::WriteFailed));
    assert_eq!(report.state_of(2), Some(ChapterState::Written));
    assert_eq!(
        std::fs::read_to_string(chapter_file(temp.path(), "Blocked", "blocked", 2)).unwrap(),
        "二"
    );
}

#[tokio::test]
async fn test_directory_failure_aborts_run() {
    let mock_server = MockServer::start().await;
    // Only the first chapter is requested before the run stops
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(chapter_page(&["内容"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let root = temp.path().join("Books");
    std::fs::write(&root, "a file, not a directory").unwrap();

    let config = create_test_config(&mock_server.uri(), &root, 0);
    let request = CrawlRequest::new("Doomed", 1, 3).unwrap();
    let result = Coordinator::new(config).unwrap().run(&request).await;

    match result {
        Err(CrawlError::OutputDirectory { path, .. }) => {
            assert_eq!(path, root.join("Doomed"));
        }
        other => panic!("expected OutputDirectory error, got {:?}", other.map(|r| r.chapters)),
    }
}

#[tokio::test]
async fn test_unreachable_site_reports_every_chapter() {
    // Bind then drop a listener so nothing is serving on the port
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&format!("http://127.0.0.1:{}", port), temp.path(), 0);

    let request = CrawlRequest::new("Offline", 1, 3).unwrap();
    let report = Coordinator::new(config)
        .unwrap()
        .run(&request)
        .await
        .expect("Network errors must not fail the crawl");

    assert_eq!(report.count(ChapterState::FetchFailed), 3);
    assert!(!temp.path().join("Offline").exists());
}
