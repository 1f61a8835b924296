// src/tests/router_tests/grid_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_catalog, today};

#[test]
fn home_lists_every_shoe_with_its_badge() {
    let catalog = test_catalog();

    let resp = handle(get("/"), &catalog, today()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Old Trainer"));
    assert!(body.contains("Fresh Runner"));
    assert!(body.contains("Cheap Racer"));

    // Cheap Racer is both recent and on sale: sale wins.
    assert_eq!(body.matches(">Sale</span>").count(), 1);
    assert_eq!(body.matches("Just Released").count(), 1);
    assert_eq!(body.matches(r#"data-variant="default""#).count(), 1);
}

#[test]
fn home_sorts_newest_first_by_default() {
    let body = body_string(handle(get("/"), &test_catalog(), today()).unwrap());

    let fresh = body.find("Fresh Runner").unwrap();
    let racer = body.find("Cheap Racer").unwrap();
    let old = body.find("Old Trainer").unwrap();
    assert!(fresh < racer && racer < old);
}

#[test]
fn home_sorts_by_price_when_asked() {
    let body = body_string(handle(get("/?sort=price"), &test_catalog(), today()).unwrap());

    let old = body.find("Old Trainer").unwrap();
    let racer = body.find("Cheap Racer").unwrap();
    let fresh = body.find("Fresh Runner").unwrap();
    assert!(old < racer && racer < fresh);
    assert!(body.contains(r#"<option value="price" selected>"#));
}

#[test]
fn unknown_sort_is_a_bad_request() {
    let err = handle(get("/?sort=cheapest"), &test_catalog(), today()).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(msg) if msg.contains("cheapest")));
}

#[test]
fn badges_move_with_the_calendar() {
    let catalog = test_catalog();
    let later = today() + chrono::Duration::days(60);

    let body = body_string(handle(get("/"), &catalog, later).unwrap());
    assert!(!body.contains("Just Released"));
    assert!(body.contains(">Sale</span>"));
}

#[test]
fn stylesheet_is_served() {
    let resp = handle(get("/static/main.css"), &test_catalog(), today()).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
}
