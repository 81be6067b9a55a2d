//! Catalog client tests against a local counting stub server.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use essence_storefront::catalog::CatalogClient;
use essence_storefront::config::CatalogApiConfig;

/// Serve a fixed JSON body on every connection, counting connections.
/// `connection: close` keeps one TCP connection per request, so the count
/// equals the number of upstream calls.
async fn stub_server(body: &'static str) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            server_hits.fetch_add(1, Ordering::SeqCst);

            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
        }
    });

    (format!("http://{addr}"), hits)
}

#[tokio::test]
async fn concurrent_cold_cache_fetches_issue_one_upstream_call() {
    let (base_url, hits) =
        stub_server(r#"[{"id":1,"title":"Amber Noir","price":49.99}]"#).await;
    let client = CatalogClient::new(&CatalogApiConfig { base_url });

    // Two lookups racing on a cold cache coalesce into a single request
    let (a, b) = tokio::join!(client.products(), client.products());
    assert_eq!(a.unwrap().len(), 1);
    assert_eq!(b.unwrap().len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // A warm cache issues no further calls
    let again = client.products().await.unwrap();
    assert_eq!(again.len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
