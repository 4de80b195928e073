//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over real HTTP.

use site_indexer::config::{Config, CrawlerConfig, SearchConfig, UserAgentConfig};
use site_indexer::crawler::{
    build_http_client, crawl_site, Crawler, Fetcher, HtmlExtractor, HttpFetcher,
};
use site_indexer::output::write_results;
use site_indexer::{IndexerError, PageError, PageState};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration rooted at the given seed
fn create_test_config(seed: &str, keyword: &str) -> Config {
    Config {
        crawler: CrawlerConfig {
            seed: seed.to_string(),
            max_depth: None,
            max_pages: None,
            request_timeout: 5,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/contact".to_string(),
            contact_email: "test@example.com".to_string(),
        },
        search: SearchConfig {
            keyword: keyword.to_string(),
        },
    }
}

fn http_crawler() -> Crawler<HttpFetcher> {
    let client = build_http_client(
        &create_test_config("http://localhost", "").user_agent,
        Duration::from_secs(5),
    )
    .expect("Failed to build client");
    Crawler::new(HttpFetcher::new(client), HtmlExtractor)
}

/// Mounts an HTML page that must be requested exactly `times` times
async fn mount_page(server: &MockServer, route: &str, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_relative_link_followed_external_ignored() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body>
            <h1>Welcome!</h1>
            <a href="/about">About Us</a>
            <a href="https://external.com">External Link</a>
        </body></html>"#,
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/about",
        "<html><body><p>About the team</p></body></html>",
        1,
    )
    .await;

    let mut crawler = http_crawler();
    crawler.crawl(&base_url, None).await;

    let about = format!("{}/about", base_url);
    assert!(crawler.visited().contains(&about));
    assert_eq!(crawler.visited().state(&about), Some(PageState::Indexed));
    assert!(crawler.index().contains(&base_url));
    assert!(crawler.index().get(&base_url).unwrap().contains("Welcome!"));

    assert!(!crawler.visited().contains("https://external.com"));
    assert!(!crawler.visited().contains("https://external.com/"));
    assert_eq!(crawler.stats().links_out_of_scope, 1);
}

#[tokio::test]
async fn test_seed_without_trailing_slash_fetched_once() {
    let mock_server = MockServer::start().await;
    let seed = mock_server.uri();

    // Links back to the seed exactly as written, plus an empty href
    mount_page(
        &mock_server,
        "/",
        &format!(
            r#"<p>Home</p><a href="{}">Home</a><a href="">Self</a><a href="/about">About</a>"#,
            seed
        ),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/about",
        &format!(r#"<p>About</p><a href="{}">Back</a>"#, seed),
        1,
    )
    .await;

    let mut crawler = http_crawler();
    crawler.crawl(&seed, None).await;

    let order: Vec<&str> = crawler.index().addresses().collect();
    assert_eq!(order, vec![seed.clone(), format!("{}/about", seed)]);
    assert!(!crawler.visited().contains(&format!("{}/", seed)));
    assert_eq!(crawler.search("home"), vec![seed.clone()]);
}

#[tokio::test]
async fn test_every_page_fetched_once_despite_cycles() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/", mock_server.uri());

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/b">B</a><a href="/">Home</a>"#,
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        r#"<a href="/b">B</a><a href="/">Home</a>"#,
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/b",
        r#"<a href="/a">A</a><a href="/b">Self</a>"#,
        1,
    )
    .await;

    let mut crawler = http_crawler();
    crawler.crawl(&seed, None).await;

    let order: Vec<&str> = crawler.index().addresses().collect();
    let expected = vec![
        seed.clone(),
        format!("{}a", seed),
        format!("{}b", seed),
    ];
    assert_eq!(order, expected);

    // Wiremock verifies the one-request-per-page expectations when mock_server drops
}

#[tokio::test]
async fn test_failed_page_is_isolated() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/", mock_server.uri());

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/missing">Gone</a><a href="/error">Boom</a><a href="/ok">Fine</a>"#,
        1,
    )
    .await;
    mount_page(&mock_server, "/ok", "<p>still here</p>", 1).await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut crawler = http_crawler();
    crawler.crawl(&seed, None).await;

    let missing = format!("{}missing", seed);
    let error = format!("{}error", seed);
    let ok = format!("{}ok", seed);

    assert_eq!(crawler.visited().state(&missing), Some(PageState::FetchFailed));
    assert_eq!(crawler.visited().state(&error), Some(PageState::FetchFailed));
    assert!(!crawler.index().contains(&missing));
    assert!(!crawler.index().contains(&error));
    assert_eq!(crawler.index().get(&ok), Some("still here"));
    assert_eq!(crawler.stats().fetch_failures, 2);
}

#[tokio::test]
async fn test_unreachable_seed_returns_normally() {
    let seed = "http://127.0.0.1:1/";

    let mut crawler = http_crawler();
    crawler.crawl(seed, None).await;

    assert!(crawler.visited().contains(seed));
    assert_eq!(crawler.visited().state(seed), Some(PageState::FetchFailed));
    assert!(crawler.index().is_empty());
    assert!(crawler.search("anything").is_empty());
}

#[tokio::test]
async fn test_status_and_timeout_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(1))
        .expect("Failed to build client");
    let fetcher = HttpFetcher::new(client);

    let gone = format!("{}/gone", mock_server.uri());
    assert_eq!(
        fetcher.fetch(&gone).await,
        Err(PageError::Status {
            url: gone.clone(),
            status: 404
        })
    );

    let slow = format!("{}/slow", mock_server.uri());
    assert_eq!(
        fetcher.fetch(&slow).await,
        Err(PageError::Timeout { url: slow.clone() })
    );
}

#[tokio::test]
async fn test_crawl_site_then_search_and_report() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header(
            "user-agent",
            "TestBot/1.0.0 (+https://example.com/contact; test@example.com)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><p>Home</p>
                <a href="/guide">Guide</a>
                <a href="/news">News</a>
            </body></html>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        "/guide",
        "<p>How to run the TEST suite</p>",
        1,
    )
    .await;
    mount_page(&mock_server, "/news", "<p>Latest tests passed</p>", 1).await;

    let config = create_test_config(&seed, "test");
    let crawler = crawl_site(&config).await.expect("Crawl setup failed");

    let results = crawler.search(&config.search.keyword);
    assert_eq!(
        results,
        vec![format!("{}guide", seed), format!("{}news", seed)]
    );

    let mut out = Vec::new();
    write_results(&results, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Search results:\n"));
    assert!(out.contains(&format!("- {}guide\n", seed)));

    let mut empty = Vec::new();
    write_results(&crawler.search("nowhere"), &mut empty).unwrap();
    assert_eq!(String::from_utf8(empty).unwrap(), "No results found.\n");
}

#[tokio::test]
async fn test_crawl_site_respects_limits() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/", mock_server.uri());

    mount_page(&mock_server, "/", r#"<a href="/level1">1</a>"#, 1).await;
    mount_page(&mock_server, "/level1", r#"<a href="/level2">2</a>"#, 1).await;
    mount_page(&mock_server, "/level2", "<p>too deep</p>", 0).await;

    let mut config = create_test_config(&seed, "deep");
    config.crawler.max_depth = Some(1);

    let crawler = crawl_site(&config).await.expect("Crawl setup failed");

    assert_eq!(crawler.index().len(), 2);
    assert!(crawler.search("deep").is_empty());
    assert_eq!(crawler.stats().links_beyond_depth, 1);
}

#[tokio::test]
async fn test_crawl_site_rejects_invalid_seed() {
    let config = create_test_config("not-a-url", "test");
    let result = crawl_site(&config).await;
    assert!(matches!(result, Err(IndexerError::Config(_))));
}
