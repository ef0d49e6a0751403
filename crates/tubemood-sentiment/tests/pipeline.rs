//! End-to-end pipeline tests against a mocked comment API.

use serde_json::{json, Value};
use tubemood_core::{SentimentLabel, Thresholds};
use tubemood_sentiment::{run_pipeline, write_csv, PipelineConfig};
use tubemood_youtube::{CommentCache, FetchLimits, YoutubeClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn thread(id: &str, video_id: &str, author: &str, text: &str) -> Value {
    json!({
        "id": id,
        "snippet": {
            "videoId": video_id,
            "topLevelComment": {
                "id": id,
                "snippet": {
                    "authorDisplayName": author,
                    "textOriginal": text,
                    "publishedAt": "2025-02-10T12:00:00Z"
                }
            }
        }
    })
}

fn config(video_ids: &[&str]) -> PipelineConfig {
    PipelineConfig {
        video_ids: video_ids.iter().map(ToString::to_string).collect(),
        limits: FetchLimits {
            max_pages: Some(1),
            max_results: Some(100),
        },
        thresholds: Thresholds::default(),
        top_tokens: 10,
    }
}

#[tokio::test]
async fn pipeline_scores_fetched_comments_and_reports_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("videoId", "aaaaaaaaaaa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                thread("c1", "aaaaaaaaaaa", "@ana", "<b>great</b> service \u{1F44D}"),
                thread("c2", "aaaaaaaaaaa", "@budi", "terrible wait https://x.y/z"),
                thread("c3", "aaaaaaaaaaa", "@ana", "antrian lagi"),
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("videoId", "bbbbbbbbbbb"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "The video has disabled comments." }
        })))
        .mount(&server)
        .await;

    let client = YoutubeClient::with_base_url("k", 30, &server.uri()).unwrap();
    let mut cache = CommentCache::disabled();
    let report = run_pipeline(&config(&["aaaaaaaaaaa", "bbbbbbbbbbb"]), &client, &mut cache)
        .await
        .expect("one failing video must not fail the run");

    assert_eq!(report.comments.len(), 3);
    assert_eq!(report.comments[0].normalized, "great service");
    assert_eq!(report.comments[0].label, SentimentLabel::Positive);
    assert_eq!(report.comments[1].normalized, "terrible wait");
    assert_eq!(report.comments[1].label, SentimentLabel::Negative);

    let summary = &report.summary;
    assert_eq!(summary.total_comments, 3);
    assert_eq!(summary.total_authors, 2);
    assert_eq!(summary.total_videos, 1);
    assert_eq!(summary.videos[0].video_id, "aaaaaaaaaaa");

    let failed: Vec<_> = report.failed_fetches().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].video_id, "bbbbbbbbbbb");
    assert!(failed[0]
        .error
        .as_deref()
        .is_some_and(|e| e.contains("disabled comments")));

    let mut csv = Vec::new();
    write_csv(&mut csv, &report.comments).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains("@budi,terrible wait https://x.y/z,negative,2025-02-10T12:00:00Z"));
}

#[tokio::test]
async fn pipeline_with_no_comments_yields_empty_summary() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let client = YoutubeClient::with_base_url("k", 30, &server.uri()).unwrap();
    let report = run_pipeline(
        &config(&["aaaaaaaaaaa"]),
        &client,
        &mut CommentCache::disabled(),
    )
    .await
    .unwrap();

    assert!(report.comments.is_empty());
    assert_eq!(report.summary.total_comments, 0);
    assert_eq!(report.summary.labels.positive_pct, 0.0);
    assert!(report.failed_fetches().next().is_none());
}

#[tokio::test]
async fn shared_cache_serves_repeat_runs_without_refetching() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [thread("c1", "aaaaaaaaaaa", "@ana", "great service")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = YoutubeClient::with_base_url("k", 30, &server.uri()).unwrap();
    let mut cache = CommentCache::new(std::time::Duration::from_secs(3600));
    let config = config(&["aaaaaaaaaaa"]);

    let first = run_pipeline(&config, &client, &mut cache).await.unwrap();
    let second = run_pipeline(&config, &client, &mut cache).await.unwrap();

    assert!(!first.fetches[0].from_cache);
    assert!(second.fetches[0].from_cache);
    assert_eq!(second.summary, first.summary);
}
