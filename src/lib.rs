//! Client-side data layer for a photo gallery REST backend.
//!
//! `lightbox` pairs a typed HTTP client with one observable state store per
//! resource type (albums, photos, tags). Consumers dispatch intents (fetch
//! a page, fetch one entity, create, update, delete, reset) and read or
//! subscribe to the resulting snapshots; all reconciliation of asynchronous
//! outcomes happens inside the store's pure reducer.
//!
//! ```no_run
//! use lightbox::config::Config;
//! use lightbox::gallery::Gallery;
//! use lightbox::rest::PageQuery;
//! use lightbox::store::FetchMode;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let gallery = Gallery::new(&Config::load()?)?;
//! gallery.albums.fetch_page(PageQuery::new(0, 20), FetchMode::Replace).await;
//! for album in &gallery.albums.snapshot().items {
//!     println!("{:?}", album.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod gallery;
pub mod model;
pub mod rest;
pub mod store;
pub mod trace;
