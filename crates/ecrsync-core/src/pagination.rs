//! Cursor pagination over listing calls.
//!
//! [`paginate`] turns a "fetch one page" function into a lazy stream of
//! record batches. The stream begins at the first page every time it is
//! created and ends after the first page that carries no cursor.
//!
//! # Example
//!
//! ```no_run
//! use ecrsync_core::{RegistryLister, repository_pages};
//! use futures_util::StreamExt;
//!
//! # async fn example<R: RegistryLister>(registry: &R) -> ecrsync_core::Result<()> {
//! let mut pages = Box::pin(repository_pages(registry));
//!
//! while let Some(page) = pages.next().await {
//!     for repository in page? {
//!         println!("{}", repository.repository_name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use async_stream::try_stream;
use futures_util::Stream;
use tracing::trace;

use crate::Result;
use crate::record::{ImageRecord, Page, RepositoryRecord};
use crate::traits::RegistryLister;
use crate::types::Cursor;

/// Page size requested on every listing call (the registry's maximum).
pub const MAX_RESULTS: u32 = 999;

/// Drive `fetch` from the first page until a page omits its cursor.
///
/// Each item is one page of records in source order. Empty pages that still
/// carry a cursor are yielded and enumeration continues. An error from
/// `fetch` is yielded once and ends the stream.
pub fn paginate<'a, T, F, Fut>(mut fetch: F) -> impl Stream<Item = Result<Vec<T>>> + Send + 'a
where
    T: Send + 'a,
    F: FnMut(Option<Cursor>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<Page<T>>> + Send + 'a,
{
    try_stream! {
        let mut cursor: Option<Cursor> = None;

        loop {
            let page = fetch(cursor.take()).await?;
            trace!(
                records = page.records.len(),
                more = page.cursor.is_some(),
                "Fetched page"
            );

            cursor = page.cursor;
            yield page.records;

            if cursor.is_none() {
                break;
            }
        }
    }
}

/// Stream every page of repositories in the registry.
pub fn repository_pages<'a, R>(
    registry: &'a R,
) -> impl Stream<Item = Result<Vec<RepositoryRecord>>> + Send + 'a
where
    R: RegistryLister + ?Sized,
{
    paginate(move |cursor: Option<Cursor>| async move {
        registry
            .list_repositories(cursor.as_ref(), MAX_RESULTS)
            .await
    })
}

/// Stream every page of images in one repository.
pub fn image_pages<'a, R>(
    registry: &'a R,
    repository_name: &'a str,
) -> impl Stream<Item = Result<Vec<ImageRecord>>> + Send + 'a
where
    R: RegistryLister + ?Sized,
{
    paginate(move |cursor: Option<Cursor>| async move {
        registry
            .list_images(repository_name, cursor.as_ref(), MAX_RESULTS)
            .await
    })
}
