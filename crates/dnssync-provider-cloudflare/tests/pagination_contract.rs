//! Contract Test: Paged Listings
//!
//! Constraints verified:
//! - Exactly max(1, ceil(total_count / page_size)) requests per listing
//! - The result holds every item from every page, in page order
//! - Page 1 is always requested, even when the listing is empty
//! - Requests carry page, per_page and a stable name ordering
//! - A failing page fails the listing and nothing partial is returned
//! - Zone ids and record types are escaped in the request path

mod common;

use common::*;
use dnssync_core::{Error, RecordProvider, RecordType};
use dnssync_provider_cloudflare::{RECORD_PAGE_SIZE, ZONE_PAGE_SIZE};

#[tokio::test]
async fn request_count_follows_total_count() {
    let page_size = RECORD_PAGE_SIZE as usize;

    // (total_count, expected requests)
    for (total, expected) in [(0usize, 1usize), (1, 1), (100, 1), (101, 2), (250, 3), (300, 3)] {
        let mut transport = ScriptedTransport::new();
        let mut served = 0;
        for _ in 0..expected {
            let count = page_size.min(total - served);
            transport = transport.respond(200, page(a_records(served, count), total as u64));
            served += count;
        }

        let provider = provider(token_auth(), &transport);
        let records = provider
            .list_records("zone-1", &RecordType::A)
            .await
            .unwrap();

        assert_eq!(transport.request_count(), expected, "total_count = {}", total);
        assert_eq!(records.len(), total, "total_count = {}", total);
    }
}

#[tokio::test]
async fn zone_listing_with_no_zones_issues_one_request() {
    let transport = ScriptedTransport::new().respond(200, page(vec![], 0));
    let provider = provider(token_auth(), &transport);

    let zones = provider.list_zone_ids().await.unwrap();

    assert!(zones.is_empty());
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn zone_listing_pages_by_fifty_and_filters_active() {
    let first: Vec<_> = (0..50)
        .map(|i| zone_json(&format!("z{}", i), &format!("zone{}.example", i)))
        .collect();
    let second = vec![zone_json("z50", "zone50.example")];

    let transport = ScriptedTransport::new()
        .respond(200, page(first, 51))
        .respond(200, page(second, 51));
    let provider = provider(token_auth(), &transport);

    let zones = provider.list_zone_ids().await.unwrap();

    assert_eq!(zones.len(), 51);
    assert_eq!(zones.first().map(String::as_str), Some("z0"));
    assert_eq!(zones.last().map(String::as_str), Some("z50"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].url,
        format!(
            "{}zones?status=active&page=1&per_page={}&order=name&direction=asc",
            BASE_URL, ZONE_PAGE_SIZE
        )
    );
    assert!(requests[1].url.contains("&page=2&"));
}

#[tokio::test]
async fn record_listing_filters_by_type_and_tags_zone() {
    let transport = ScriptedTransport::new().respond(
        200,
        page(
            vec![record_json("r1", "TXT", "example.com", "v=spf1 -all")],
            1,
        ),
    );
    let provider = provider(token_auth(), &transport);

    let records = provider
        .list_records("zone-9", &RecordType::Txt)
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].zone_id, "zone-9");
    assert_eq!(records[0].record_type, RecordType::Txt);

    let url = &transport.requests()[0].url;
    assert!(url.starts_with(&format!("{}zones/zone-9/dns_records?type=TXT&", BASE_URL)));
    assert!(url.contains(&format!("per_page={}", RECORD_PAGE_SIZE)));
}

#[tokio::test]
async fn zone_id_cannot_alter_the_listing_query() {
    let transport = ScriptedTransport::new().respond(200, page(vec![], 0));
    let provider = provider(token_auth(), &transport);

    provider
        .list_records("z1/../zones?type=MX&", &RecordType::Other("A&x=1".to_string()))
        .await
        .unwrap();

    let url = &transport.requests()[0].url;
    assert!(url.starts_with(&format!(
        "{}zones/z1%2F..%2Fzones%3Ftype%3DMX%26/dns_records?type=A%26x%3D1&page=1&",
        BASE_URL
    )));
}

#[tokio::test]
async fn total_count_is_taken_from_each_page() {
    // The provider grows the listing between pages; the second page's
    // total decides whether a third page is fetched.
    let transport = ScriptedTransport::new()
        .respond(200, page(a_records(0, 100), 150))
        .respond(200, page(a_records(100, 100), 201))
        .respond(200, page(a_records(200, 1), 201));
    let provider = provider(token_auth(), &transport);

    let records = provider
        .list_records("zone-1", &RecordType::A)
        .await
        .unwrap();

    assert_eq!(transport.request_count(), 3);
    assert_eq!(records.len(), 201);
    assert_eq!(ids(&records)[200], "r200");
}

#[tokio::test]
async fn failing_second_page_discards_first_page() {
    let transport = ScriptedTransport::new()
        .respond(200, page(a_records(0, 100), 150))
        .respond(500, api_error(1000, "Internal error"));
    let provider = provider(key_auth(), &transport);

    let err = provider
        .list_records("zone-1", &RecordType::A)
        .await
        .unwrap_err();

    match err {
        Error::Api {
            status, messages, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(messages, vec!["Internal error".to_string()]);
        }
        other => panic!("expected API error, got {:?}", other),
    }
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn html_page_mid_listing_fails_even_with_success_status() {
    let transport = ScriptedTransport::new()
        .respond(200, page(a_records(0, 100), 150))
        .respond(200, "<html><body>Origin unreachable</body></html>");
    let provider = provider(token_auth(), &transport);

    let err = provider
        .list_records("zone-1", &RecordType::A)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Gateway { .. }));
    assert!(err.to_string().contains("Origin unreachable"));
}

#[tokio::test]
async fn page_without_result_info_is_a_decode_error() {
    let body = r#"{"success":true,"result":[]}"#;
    let transport = ScriptedTransport::new().respond(200, body);
    let provider = provider(token_auth(), &transport);

    let err = provider.list_zone_ids().await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert_eq!(err.body(), Some(body));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    let transport = ScriptedTransport::new().fail("connection refused");
    let provider = provider(token_auth(), &transport);

    let err = provider.list_zone_ids().await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
    assert!(err.to_string().contains("connection refused"));
    assert!(err.to_string().contains("Listing zones"));
}
