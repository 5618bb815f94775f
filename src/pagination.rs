//! Cursor-based pagination, as advertised by Shopify in the `Link` response header.
//!
//! A paginated list response carries a header like:
//!
//! ```text
//! Link: <https://shop.myshopify.com/admin/api/2024-01/shopify_payments/payouts.json?limit=50&page_info=abc>; rel="previous",
//!       <https://shop.myshopify.com/admin/api/2024-01/shopify_payments/payouts.json?limit=50&page_info=def>; rel="next"
//! ```
//!
//! Each entry is turned into a [`PageOptions`](crate::pagination::PageOptions) that can be fed back
//! into the next list request.

use reqwest::header::{HeaderMap, LINK};
use serde::{Deserialize, Serialize};
use url::Url;

/// Cursors to the pages surrounding the one just fetched.
///
/// Both sides are `None` when the server did not return a `Link` header,
/// i.e. the whole result fitted in a single page.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<PageOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<PageOptions>,
}

impl Pagination {
    /// Opaque token pointing at the previous page, if any.
    pub fn previous_cursor(&self) -> Option<&str> {
        self.previous_page.as_ref().map(|p| p.page_info.as_str())
    }

    /// Opaque token pointing at the next page, if any.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_page.as_ref().map(|p| p.page_info.as_str())
    }

    /// Whether the result fitted in a single page, with no cursor on either side.
    pub fn is_empty(&self) -> bool {
        self.previous_page.is_none() && self.next_page.is_none()
    }
}

/// Query parameters needed to fetch one specific page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub page_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Failure to make sense of a `Link` header.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationParseError {
    /// The entry is not in the `<url>; rel="..."` form.
    #[error("malformed link entry: {0:?}")]
    MalformedLink(String),
    /// The target of the entry is not an absolute URL.
    #[error("invalid link URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Only `previous` and `next` relations are understood.
    #[error("unsupported link relation: {0:?}")]
    UnsupportedRelation(String),
    #[error("missing page_info in link URL {0:?}")]
    MissingPageInfo(String),
    #[error("invalid limit {0:?} in link URL")]
    InvalidLimit(String),
}

/// Extracts the pagination cursors from the `Link` headers of a response.
///
/// A missing header is not an error: it yields an empty [`Pagination`].
pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Pagination, PaginationParseError> {
    let mut pagination = Pagination::default();

    for value in headers.get_all(LINK) {
        let value = value
            .to_str()
            .map_err(|_| PaginationParseError::MalformedLink(format!("{:?}", value)))?;
        let parsed = parse_link_header(value)?;

        if parsed.previous_page.is_some() {
            pagination.previous_page = parsed.previous_page;
        }
        if parsed.next_page.is_some() {
            pagination.next_page = parsed.next_page;
        }
    }

    Ok(pagination)
}

/// Parses the value of a single `Link` header.
pub fn parse_link_header(header: &str) -> Result<Pagination, PaginationParseError> {
    let mut pagination = Pagination::default();
    if header.trim().is_empty() {
        return Ok(pagination);
    }

    for entry in split_entries(header) {
        let (target, relation) = parse_link_entry(entry)?;
        let page = page_options_from_url(target)?;

        match relation {
            "next" => pagination.next_page = Some(page),
            "previous" | "prev" => pagination.previous_page = Some(page),
            other => {
                return Err(PaginationParseError::UnsupportedRelation(
                    other.to_string(),
                ))
            }
        }
    }

    tracing::debug!(
        previous = ?pagination.previous_cursor(),
        next = ?pagination.next_cursor(),
        "Parsed pagination from Link header"
    );

    Ok(pagination)
}

/// Splits a header value on the commas separating its entries.
///
/// Commas inside `<...>` belong to the target URL (e.g. `fields=id,amount`) and are kept.
fn split_entries(header: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut inside_target = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            '<' => inside_target = true,
            '>' => inside_target = false,
            ',' if !inside_target => {
                entries.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&header[start..]);

    entries
}

/// Splits `<target>; rel="relation"` into its target and relation.
fn parse_link_entry(entry: &str) -> Result<(&str, &str), PaginationParseError> {
    let entry = entry.trim();
    let malformed = || PaginationParseError::MalformedLink(entry.to_string());

    let (target, params) = entry
        .strip_prefix('<')
        .and_then(|rest| rest.split_once('>'))
        .ok_or_else(malformed)?;

    // Parameters must follow the target immediately, separated by `;`
    let params = params.trim_start().strip_prefix(';').ok_or_else(malformed)?;

    let relation = params
        .split(';')
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("rel"))
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|relation| !relation.is_empty())
        .ok_or_else(malformed)?;

    Ok((target, relation))
}

fn page_options_from_url(target: &str) -> Result<PageOptions, PaginationParseError> {
    let url = Url::parse(target).map_err(|source| PaginationParseError::InvalidUrl {
        url: target.to_string(),
        source,
    })?;

    let mut page_info = None;
    let mut limit = None;
    let mut fields = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "page_info" => page_info = Some(value.into_owned()),
            "limit" => {
                limit = Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| PaginationParseError::InvalidLimit(value.to_string()))?,
                )
            }
            "fields" => fields = Some(value.into_owned()),
            _ => {}
        }
    }

    let page_info = page_info
        .filter(|p| !p.is_empty())
        .ok_or_else(|| PaginationParseError::MissingPageInfo(target.to_string()))?;

    Ok(PageOptions {
        page_info,
        limit,
        fields,
    })
}
