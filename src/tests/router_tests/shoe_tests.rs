use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_catalog, today};

#[test]
fn shoe_page_shows_sale_details() {
    let resp = handle(get("/shoe/cheap-racer"), &test_catalog(), today()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Cheap Racer"));
    assert!(body.contains("$120.00"));
    assert!(body.contains("$110.00"));
    assert!(body.contains("You save"));
    assert!(body.contains("$10.00"));
    assert!(body.contains("January 1, 2024"));
}

#[test]
fn shoe_page_for_new_release_has_no_savings() {
    let body = body_string(handle(get("/shoe/fresh-runner"), &test_catalog(), today()).unwrap());

    assert!(body.contains("Just Released"));
    assert!(body.contains("3 Colors"));
    assert!(!body.contains("You save"));
}

#[test]
fn unknown_shoe_is_not_found() {
    let err = handle(get("/shoe/nope"), &test_catalog(), today()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let err = handle(get("/shoe/"), &test_catalog(), today()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn non_get_requests_are_not_found() {
    let req = http::Request::builder()
        .method("POST")
        .uri("/")
        .body(astra::Body::from(String::new()))
        .unwrap();

    assert!(matches!(
        handle(req, &test_catalog(), today()),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn errors_render_as_html_pages() {
    let resp = error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));

    let resp = error_to_response(ServerError::BadRequest("unknown sort order: x".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("unknown sort order: x"));
}
