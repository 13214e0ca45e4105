// src/api/pagination.rs
//! Page-number pagination driven by the server's reported page count.

use crate::error::AppError;

/// Outcome of a page crawl.
#[derive(Debug)]
pub struct PageCrawl<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
    /// The error that ended the crawl early, if any.
    pub interrupted: Option<AppError>,
}

/// Fetches pages 1, 2, ... one at a time, accumulating their items.
///
/// `fetch_page(n)` yields the items of page `n` and the total page count
/// that response reports. The crawl continues while `n < total`, re-reading
/// the total from every page, so it follows the latest value if the remote
/// count changes mid-crawl. The first error stops the crawl and the items
/// gathered so far are kept. `max_pages` bounds the number of requests.
pub async fn collect_pages<T, F, Fut>(mut fetch_page: F, max_pages: u32) -> PageCrawl<T>
where
    F: FnMut(u32) -> Fut,
    Fut: std::future::Future<Output = Result<(Vec<T>, u32), AppError>>,
{
    let mut items = Vec::new();
    let mut page = 1u32;
    let mut pages_fetched = 0u32;
    let mut interrupted = None;

    loop {
        if pages_fetched >= max_pages {
            log::warn!("Stopping crawl at page limit {}", max_pages);
            break;
        }

        match fetch_page(page).await {
            Ok((batch, total_pages)) => {
                pages_fetched += 1;
                log::debug!(
                    "Page {}/{}: {} items",
                    page,
                    total_pages,
                    batch.len()
                );
                items.extend(batch);

                if page >= total_pages {
                    break;
                }
                page += 1;
            }
            Err(e) => {
                log::warn!("Crawl stopped at page {}: {}", page, e);
                interrupted = Some(e);
                break;
            }
        }
    }

    PageCrawl {
        items,
        pages_fetched,
        interrupted,
    }
}
