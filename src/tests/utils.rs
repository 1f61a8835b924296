use crate::catalog::Catalog;
use astra::{Body, Request, Response};
use chrono::NaiveDate;
use std::io::Read;

/// Fixed "today" every router test renders against.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

/// One shoe per variant, relative to `today()`.
pub fn test_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
        { "slug": "old-trainer", "name": "Old Trainer", "imageSrc": "/assets/old.jpg",
          "price": 9000, "releaseDate": "2023-01-01", "numOfColors": 1 },
        { "slug": "fresh-runner", "name": "Fresh Runner", "imageSrc": "/assets/fresh.jpg",
          "price": 15000, "releaseDate": "2024-01-10", "numOfColors": 3 },
        { "slug": "cheap-racer", "name": "Cheap Racer", "imageSrc": "/assets/racer.jpg",
          "price": 12000, "salePrice": 11000, "releaseDate": "2024-01-01", "numOfColors": 2 }
    ]"#,
    )
    .unwrap_or_else(|e| panic!("Test catalog failed to load: {e}"))
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::from(String::new()))
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
