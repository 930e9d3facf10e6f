use std::future::Future;

/// One page of a paged read, plus the token for the next page if any.
#[derive(Debug, Clone)]
pub struct Page<T, K> {
    pub items: Vec<T>,
    pub next: Option<K>,
}

/// Calls `fetch_page` with the previous page's token until a page comes back
/// without one. Pages are concatenated in the order they were returned.
///
/// The first error aborts the loop; items gathered so far are dropped.
pub async fn collect_pages<T, K, E, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(Option<K>) -> Fut,
    Fut: Future<Output = Result<Page<T, K>, E>>,
{
    let mut items = Vec::new();
    let mut token = None;
    let mut pages = 0usize;

    loop {
        let page = fetch_page(token.take()).await?;
        pages += 1;
        items.extend(page.items);

        match page.next {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    tracing::debug!("Collected {} items across {} pages", items.len(), pages);
    Ok(items)
}
