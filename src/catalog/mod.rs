// Item catalog: in-process cache plus the remote fetcher with fallback
mod cache;
mod client;
mod fallback;
mod transport;

pub use cache::{CacheInfo, CacheSizes, CatalogCache, CACHE_TTL_MS};
pub use client::CatalogClient;
pub use transport::{HttpTransport, Transport, TransportError};
