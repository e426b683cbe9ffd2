//! Paginated fetcher.
//!
//! Drives a page-returning list call until the control plane stops handing
//! back a continuation cursor, accumulating every page in order. The fetcher
//! never retries; a failed page call surfaces as-is.

use crate::error::Result;
use std::future::Future;

/// One page of a list call.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Continuation cursor; `None` means this was the last page.
    pub next_page: Option<String>,
}

/// Fetch the complete collection behind a paginated list call.
///
/// `list_page` is invoked with `None` first, then with each continuation
/// cursor the previous response carried. An empty collection is a valid
/// result, not an error.
pub async fn fetch_all<T, F, Fut>(mut list_page: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut all_items = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = list_page(cursor.take()).await?;
        all_items.extend(page.items);

        match page.next_page {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(all_items)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serve `pages` one call at a time, chaining cursors "1", "2", ...
    fn paged_source(pages: Vec<Vec<u32>>) -> impl FnMut(Option<String>) -> PageFuture {
        let mut served = 0usize;
        move |cursor| {
            let expected = if served == 0 {
                None
            } else {
                Some(served.to_string())
            };
            assert_eq!(cursor, expected, "cursor must echo the previous response");
            let items = pages[served].clone();
            served += 1;
            let next_page = (served < pages.len()).then(|| served.to_string());
            Box::pin(async move { Ok(Page { items, next_page }) })
        }
    }

    type PageFuture =
        std::pin::Pin<Box<dyn Future<Output = Result<Page<u32>>>>>;

    #[test]
    fn single_page_is_returned_whole() {
        let items = tokio_test::block_on(fetch_all(paged_source(vec![vec![1, 2, 3]]))).unwrap();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn two_pages_of_two_concatenate_in_order() {
        let items = fetch_all(paged_source(vec![vec![1, 2], vec![3, 4]]))
            .await
            .unwrap();
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn uneven_pages_sum_up() {
        let pages = vec![vec![1], vec![], vec![2, 3, 4], vec![5]];
        let expected: Vec<u32> = pages.iter().flatten().copied().collect();
        let items = fetch_all(paged_source(pages)).await.unwrap();
        assert_eq!(items, expected);
    }

    #[tokio::test]
    async fn empty_scope_yields_empty_collection() {
        let items = fetch_all(paged_source(vec![vec![]])).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn page_error_propagates() {
        let result: Result<Vec<u32>> = fetch_all(|_cursor| async {
            Err(crate::error::ActivityError::Api {
                status: 404,
                message: "NotAuthorizedOrNotFound".into(),
            })
        })
        .await;
        assert!(matches!(
            result,
            Err(crate::error::ActivityError::Api { status: 404, .. })
        ));
    }
}
