//! End-to-end tests: CLI-equivalent clients against a live service.

use std::net::SocketAddr;

use tokenmngr::{Client, Executor, Server, ServiceConfig};
use tokio::sync::oneshot;

async fn start_service() -> (SocketAddr, oneshot::Sender<()>) {
    let config = ServiceConfig {
        host: "127.0.0.1".into(),
        port: 0,
        ..ServiceConfig::default()
    };
    let server = Server::bind(&config, Executor::default()).await.unwrap();
    let addr = server.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(server.serve_with_shutdown(async {
        let _ = rx.await;
    }));
    (addr, tx)
}

#[tokio::test]
async fn test_remote_tournament() {
    let (addr, _shutdown) = start_service().await;
    let mut client = Client::connect(addr).await.unwrap();

    assert!(client.create("t").await.unwrap());
    assert_eq!(client.write("t", "x", 0, 3, 6).await.unwrap(), 2);
    assert_eq!(client.read("t").await.unwrap(), 2);
    assert_eq!(client.write("t", "x", 0, 2, 7).await.unwrap(), 0);
    assert_eq!(client.read("t").await.unwrap(), 6);

    let info = client.inspect("t").await.unwrap();
    assert_eq!((info.low, info.mid, info.high), (0, 2, 7));
    assert_eq!((info.partial, info.final_), (0, 6));
}

/// Concurrent writes from separate connections never mix payload fields.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_remote_writes_serialize() {
    const WRITERS: u64 = 6;

    let (addr, _shutdown) = start_service().await;
    let mut setup = Client::connect(addr).await.unwrap();
    setup.create("shared").await.unwrap();

    let mut handles = Vec::new();
    for i in 0..WRITERS {
        handles.push(tokio::spawn(async move {
            let mut client = Client::connect(addr).await.unwrap();
            let name = format!("writer-{}", i);
            let partial = client
                .write("shared", &name, i * 100, i * 100 + 50, i * 100 + 90)
                .await
                .unwrap();
            (name, partial)
        }));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    let info = setup.inspect("shared").await.unwrap();
    let i = results
        .iter()
        .position(|(name, _)| *name == info.name)
        .expect("stored name must come from one writer") as u64;

    assert_eq!((info.low, info.mid, info.high), (i * 100, i * 100 + 50, i * 100 + 90));
    assert_eq!(info.partial, results[i as usize].1);
    assert_eq!(info.final_, 0);
}

#[tokio::test]
async fn test_ping_reports_version() {
    let (addr, _shutdown) = start_service().await;
    let mut client = Client::connect(addr).await.unwrap();
    assert!(!client.ping().await.unwrap().is_empty());
}
