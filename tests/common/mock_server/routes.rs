use reqwest::Url;
use serde_json::json;
use shopify_payouts::apis::payouts::Payout;
use wiremock::{Request, Respond, ResponseTemplate};

static DEFAULT_PAGE_SIZE: usize = 50;

/// GET /admin/api/{version}/shopify_payments/payouts.json
///
/// Serves the stored payouts in pages, advertising the surrounding pages in the `Link` header.
/// The `page_info` cursor encodes the offset of the page and the `status` filter of the
/// original request, the same way Shopify keeps filters inside its cursors.
pub(super) struct ListPayouts {
    pub(super) base_url: Url,
    pub(super) payouts: Vec<Payout>,
}

impl Respond for ListPayouts {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let query = |key: &str| {
            request
                .url
                .query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
        };

        let limit = match query("limit").map(|l| l.parse::<usize>()) {
            None => DEFAULT_PAGE_SIZE,
            Some(Ok(limit)) if (1..=250).contains(&limit) => limit,
            Some(_) => {
                return ResponseTemplate::new(400)
                    .set_body_json(json!({ "errors": { "limit": ["is invalid"] } }))
            }
        };

        let (offset, status) = match query("page_info") {
            Some(page_info) => match decode_cursor(&page_info) {
                Some(cursor) => cursor,
                None => {
                    return ResponseTemplate::new(400)
                        .set_body_json(json!({ "errors": { "page_info": ["is invalid"] } }))
                }
            },
            None => (0, query("status")),
        };

        let filtered = self
            .payouts
            .iter()
            .filter(|p| status.as_deref().map_or(true, |s| p.status == s))
            .collect::<Vec<_>>();
        let page = filtered
            .iter()
            .skip(offset)
            .take(limit)
            .collect::<Vec<_>>();

        let mut links = Vec::new();
        if offset > 0 {
            let previous = encode_cursor(offset.saturating_sub(limit), status.as_deref());
            links.push(format!(
                r#"<{}>; rel="previous""#,
                self.page_url(limit, &previous)
            ));
        }
        if offset + limit < filtered.len() {
            let next = encode_cursor(offset + limit, status.as_deref());
            links.push(format!(r#"<{}>; rel="next""#, self.page_url(limit, &next)));
        }

        let mut response = ResponseTemplate::new(200).set_body_json(json!({ "payouts": page }));
        if !links.is_empty() {
            response = response.append_header("Link", links.join(", ").as_str());
        }

        response
    }
}

impl ListPayouts {
    fn page_url(&self, limit: usize, page_info: &str) -> Url {
        let mut url = self
            .base_url
            .join("shopify_payments/payouts.json")
            .unwrap();
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("page_info", page_info);
        url
    }
}

fn encode_cursor(offset: usize, status: Option<&str>) -> String {
    format!("{}.{}", offset, status.unwrap_or_default())
}

fn decode_cursor(page_info: &str) -> Option<(usize, Option<String>)> {
    let (offset, status) = page_info.split_once('.')?;
    let offset = offset.parse().ok()?;
    let status = Some(status.to_string()).filter(|s| !s.is_empty());

    Some((offset, status))
}

/// GET /admin/api/{version}/shopify_payments/payouts/{id}.json
pub(super) struct GetPayoutById {
    pub(super) payouts: Vec<Payout>,
}

impl Respond for GetPayoutById {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let payout = request
            .url
            .path_segments()
            .and_then(|segments| segments.last())
            .and_then(|segment| segment.strip_suffix(".json"))
            .and_then(|id| id.parse::<i64>().ok())
            .and_then(|id| self.payouts.iter().find(|p| p.id == id));

        match payout {
            Some(payout) => ResponseTemplate::new(200).set_body_json(json!({ "payout": payout })),
            None => ResponseTemplate::new(404).set_body_json(json!({ "errors": "Not Found" })),
        }
    }
}
