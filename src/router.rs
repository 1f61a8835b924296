use crate::catalog::{Catalog, SortOrder};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, stylesheet_response};
use crate::templates;
use astra::Request;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// Routes a request. `today` is sampled once by the caller and drives every
/// new-release decision made while rendering this response.
pub fn handle(req: Request, catalog: &Catalog, today: NaiveDate) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => {
            let params = parse_query(&req);
            let sort = match params.get("sort") {
                Some(raw) => raw.parse::<SortOrder>().map_err(ServerError::BadRequest)?,
                None => SortOrder::default(),
            };
            html_response(templates::pages::home_page(catalog, sort, today))
        }
        ("GET", "/static/main.css") => stylesheet_response(),
        ("GET", _) => match path.strip_prefix("/shoe/") {
            Some(slug) if !slug.is_empty() => {
                let shoe = catalog.find(slug).ok_or(ServerError::NotFound)?;
                html_response(templates::pages::shoe_page(shoe, today))
            }
            _ => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
