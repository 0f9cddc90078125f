//! Notices raised through the default log sink.

use std::io;
use std::sync::{Arc, Mutex};

use rocketshoes_cache::MemoryStore;
use rocketshoes_commerce::cart::messages;
use rocketshoes_commerce::prelude::*;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn store_with_sold_out_shoe() -> CartStore {
    let catalog = Arc::new(
        InMemoryCatalog::new()
            .with_product(Product::new(ProductId::new(3), "Tênis Adidas", 219.9, ""), 0),
    );
    CartStore::builder(catalog, Arc::new(MemoryStore::new()))
        .open()
        .unwrap()
}

#[tokio::test]
async fn test_rejection_logged_once_at_warn() {
    let logs = Captured::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let store = store_with_sold_out_shoe();
    assert!(store.add_product(ProductId::new(3)).await.is_err());

    let text = logs.text();
    assert_eq!(text.lines().count(), 1, "{text}");
    assert!(text.contains("WARN"), "{text}");
    assert!(text.contains(messages::OUT_OF_STOCK), "{text}");
}

#[tokio::test]
async fn test_rejection_detail_logged_at_debug() {
    let logs = Captured::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let store = store_with_sold_out_shoe();
    assert!(store.add_product(ProductId::new(3)).await.is_err());

    let text = logs.text();
    assert!(text.contains("cart operation rejected"), "{text}");
    assert!(text.contains("Insufficient stock for product 3"), "{text}");
    assert_eq!(text.matches("cart notice").count(), 1, "{text}");
}
