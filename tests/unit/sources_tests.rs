/*!
 * Tests for local and remote guide sources
 */

use anyhow::Result;
use epgtidy::errors::EpgError;
use epgtidy::sources::{DocumentSource, HttpSource, LocalFileSource, SourceLocation};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;
use crate::common;

/// Serve a single canned HTTP response on an ephemeral port
async fn serve_once(status_line: &'static str, body: Vec<u8>) -> Result<Url> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut request = vec![0u8; 4096];
            let _ = socket.read(&mut request).await;
            let head = format!(
                "{}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                body.len()
            );
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(&body).await;
            let _ = socket.shutdown().await;
        }
    });

    Ok(Url::parse(&format!("http://{}/epg.xml.gz", address))?)
}

/// Test that a local source returns the file bytes unchanged
#[test]
fn test_localFileSource_withExistingFile_shouldReturnBytes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "guide.xml.gz", b"\x1f\x8bdata")?;

    let bytes = tokio_test::block_on(LocalFileSource::new(&path).fetch())?;

    assert_eq!(bytes, b"\x1f\x8bdata");
    Ok(())
}

/// Test that a missing local file is a fetch error
#[tokio::test]
async fn test_localFileSource_withMissingFile_shouldReturnFetchError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = LocalFileSource::new(temp_dir.path().join("absent.xml.gz"));

    let result = source.fetch().await;

    assert!(matches!(result, Err(EpgError::Fetch(_))));
    Ok(())
}

/// Test that a successful response body is returned as-is
#[tokio::test]
async fn test_httpSource_withOkResponse_shouldReturnBody() -> Result<()> {
    let url = serve_once("HTTP/1.1 200 OK", b"guide-bytes".to_vec()).await?;

    let bytes = HttpSource::new(url).fetch().await?;

    assert_eq!(bytes, b"guide-bytes");
    Ok(())
}

/// Test that a non-success status is a fetch error
#[tokio::test]
async fn test_httpSource_withNotFound_shouldReturnFetchError() -> Result<()> {
    let url = serve_once("HTTP/1.1 404 Not Found", Vec::new()).await?;

    let result = HttpSource::new(url).fetch().await;

    match result {
        Err(error) => assert_eq!(error.kind(), "fetch"),
        Ok(_) => panic!("404 should not be treated as a guide"),
    }
    Ok(())
}

/// Test that an unreachable host is a fetch error
#[tokio::test]
async fn test_httpSource_withRefusedConnection_shouldReturnFetchError() -> Result<()> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let address = listener.local_addr()?;
    drop(listener);

    let url = Url::parse(&format!("http://{}/epg.xml.gz", address))?;
    let result = HttpSource::new(url).fetch().await;

    assert!(matches!(result, Err(EpgError::Fetch(_))));
    Ok(())
}

/// Test that opening a location picks the matching source
#[test]
fn test_open_withEachLocation_shouldDescribeLocation() -> Result<()> {
    let local: SourceLocation = "guide.xml.gz".parse()?;
    let remote: SourceLocation = "http://example.com/epg.xml.gz".parse()?;

    assert!(local.open().describe().contains("guide.xml.gz"));
    assert!(remote.open().describe().contains("example.com"));
    Ok(())
}
