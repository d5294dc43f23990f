//! Scan pagination.
//!
//! DynamoDB returns at most 1 MB per scan call. [`scan_all`] keeps asking for
//! the next page until the table reports no `LastEvaluatedKey`.

use std::collections::HashMap;
use std::future::Future;

use aws_sdk_dynamodb::types::AttributeValue;
use contacts_core::contact::Contact;
use contacts_core::storage::Result;

use super::conversions::item_to_contact;

pub type Item = HashMap<String, AttributeValue>;

/// Items of one scan page plus the key to resume from, if any.
pub type ScanPage = (Vec<Item>, Option<Item>);

/// Reads every page through `fetch_page` and returns the contacts along with
/// the number of pages read.
///
/// `fetch_page` receives the `ExclusiveStartKey` for the page: `None` for the
/// first one, then the previous page's `LastEvaluatedKey`. An absent or empty
/// key ends the scan.
pub async fn scan_all<F, Fut>(mut fetch_page: F) -> Result<(Vec<Contact>, usize)>
where
    F: FnMut(Option<Item>) -> Fut,
    Fut: Future<Output = Result<ScanPage>>,
{
    let mut contacts = Vec::new();
    let mut start_key = None;
    let mut pages = 0usize;

    loop {
        let (items, last_evaluated_key) = fetch_page(start_key.take()).await?;
        pages += 1;

        for item in &items {
            contacts.push(item_to_contact(item)?);
        }

        match last_evaluated_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => break,
        }
    }

    Ok((contacts, pages))
}
