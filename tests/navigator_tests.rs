//! End-to-end traversal tests against a mock transport.

mod common;

use common::MockTransport;
use halboy::{HalError, Navigator, Resource, SettingsOverrides, TransportResponse};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use url::Url;

fn create_user(id: &str, name: &str) -> Resource {
    Resource::new()
        .add_link("self", format!("/users/{id}"))
        .add_property("name", name)
        .add_property("id", id)
}

fn params(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn overrides_for(transport: &Arc<MockTransport>) -> SettingsOverrides {
    SettingsOverrides::new()
        .with_header("authorization", "some-token")
        .with_transport(transport.clone())
}

fn root_doc() -> serde_json::Value {
    json!({
        "_links": {"users": {"href": "/users"}},
        "_embedded": {},
        "prop1": 1,
    })
}

#[test]
fn discover_wraps_the_root_resource() {
    let transport = Arc::new(MockTransport::new().on_get("http://test.com", root_doc()));

    let navigator = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();

    assert_eq!(navigator.status(), 200);
    assert_eq!(
        navigator.resource().get_href("users").unwrap(),
        halboy::Slot::Single("/users".to_string())
    );
    assert_eq!(navigator.resource().get_property("prop1").unwrap(), &json!(1));
}

#[test]
fn get_follows_a_relative_link_and_parses_embedded_resources() {
    let users_doc = Resource::new()
        .add_property("test", 1)
        .add_link("self", "http://test.com/users")
        .add_resource(
            "users",
            vec![
                create_user("fred", "Fred"),
                create_user("sue", "Sue"),
                create_user("mary", "Mary"),
            ],
        )
        .to_object();

    let transport = Arc::new(
        MockTransport::new()
            .on_get("http://test.com", root_doc())
            .on_get("http://test.com/users", users_doc),
    );

    let root = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();
    let result = root.get("users", None).unwrap();

    assert_eq!(result.status(), 200);
    assert_eq!(result.resource().get_property("test").unwrap(), &json!(1));
    assert_eq!(
        result.resource().get_href("self").unwrap(),
        halboy::Slot::Single("http://test.com/users".to_string())
    );

    let users = result.resource().get_resource("users").unwrap();
    let names: Vec<_> = users
        .iter()
        .map(|u| u.get_property("name").unwrap().clone())
        .collect();
    assert_eq!(names, vec![json!("Fred"), json!("Sue"), json!("Mary")]);
}

#[test]
fn templated_links_expand_against_params() {
    let transport = Arc::new(
        MockTransport::new()
            .on_get(
                "http://test.com",
                json!({"_links": {"user": {"href": "/users/{userId}", "templated": true}}}),
            )
            .on_get(
                "http://test.com/users/fred",
                create_user("fred", "Fred").to_object(),
            ),
    );

    let root = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();
    let result = root
        .get("user", Some(params(&[("userId", "fred")])))
        .unwrap();

    assert_eq!(result.status(), 200);
    assert_eq!(result.resource().get_property("name").unwrap(), &json!("Fred"));

    // The parameter was consumed by the template, so it is not re-sent as a
    // query parameter.
    let calls = transport.calls();
    let hop = &calls[1];
    assert_eq!(hop.url, "http://test.com/users/fred");
    assert!(hop.params.is_empty());
}

#[test]
fn unconsumed_params_become_query_parameters() {
    let transport = Arc::new(
        MockTransport::new()
            .on_get(
                "http://test.com",
                json!({"_links": {"user": {"href": "/users/{userId}", "templated": true}}}),
            )
            .on_get(
                "http://test.com/users/fred",
                create_user("fred", "Fred").to_object(),
            ),
    );

    let root = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();
    root.get(
        "user",
        Some(params(&[("userId", "fred"), ("expand", "orders")])),
    )
    .unwrap();

    let calls = transport.calls();
    assert_eq!(calls[1].params, params(&[("expand", "orders")]));
}

#[test]
fn post_dispatches_a_body_and_exposes_response_headers() {
    let thomas = create_user("thomas", "Thomas").to_object();
    let response = TransportResponse::new(
        200,
        Url::parse("http://test.com/users").unwrap(),
        thomas.to_string(),
    )
    .with_header("Location", "http://test.com/users/thomas");

    let transport = Arc::new(
        MockTransport::new()
            .on_get("http://test.com/", root_doc())
            .on_post_response("http://test.com/users", response),
    );

    let root = Navigator::discover("http://test.com/", Some(overrides_for(&transport))).unwrap();
    let result = root.post("users", &json!({"name": "Thomas"}), None).unwrap();

    assert_eq!(result.status(), 200);
    assert_eq!(
        result.get_header("Location").unwrap(),
        "http://test.com/users/thomas"
    );

    let calls = transport.calls();
    assert_eq!(calls[1].method, "POST");
    assert_eq!(calls[1].body, Some(json!({"name": "Thomas"})));
}

#[test]
fn header_lookup_ignores_transport_name_casing() {
    // The default transport hands back reqwest-normalized (lowercase) header
    // names; callers still look headers up by their canonical spelling.
    let thomas = create_user("thomas", "Thomas").to_object();
    let response = TransportResponse::new(
        200,
        Url::parse("http://test.com/users").unwrap(),
        thomas.to_string(),
    )
    .with_header("location", "http://test.com/users/thomas");

    let transport = Arc::new(
        MockTransport::new()
            .on_get("http://test.com", root_doc())
            .on_post_response("http://test.com/users", response),
    );

    let root = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();
    let result = root.post("users", &json!({"name": "Thomas"}), None).unwrap();

    assert_eq!(
        result.get_header("Location").unwrap(),
        "http://test.com/users/thomas"
    );
    assert_eq!(
        result.get_header("location").unwrap(),
        "http://test.com/users/thomas"
    );
}

#[test]
fn missing_header_lookup_fails() {
    let transport = Arc::new(MockTransport::new().on_get("http://test.com", root_doc()));
    let root = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();

    assert!(matches!(
        root.get_header("Location"),
        Err(HalError::HeaderNotFound(_))
    ));
}

#[test]
fn missing_relation_fails_before_any_request() {
    let transport = Arc::new(MockTransport::new().on_get("http://test.com", root_doc()));
    let root = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();

    let err = root.get("nope", None).unwrap_err();
    assert!(matches!(err, HalError::RelationNotFound(_)));

    // Only the discover call reached the transport.
    assert_eq!(transport.calls().len(), 1);
}

#[test]
fn settings_headers_are_sent_on_every_hop() {
    let transport = Arc::new(
        MockTransport::new()
            .on_get("http://test.com", root_doc())
            .on_get("http://test.com/users", json!({"test": 1})),
    );

    let root = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();
    root.get("users", None).unwrap();

    for call in transport.calls() {
        assert_eq!(call.headers.get("authorization").map(String::as_str), Some("some-token"));
    }
}

#[test]
fn multi_valued_relations_follow_the_first_link_by_default() {
    let transport = Arc::new(
        MockTransport::new()
            .on_get(
                "http://test.com",
                json!({"_links": {"users": [{"href": "/users/a"}, {"href": "/users/b"}]}}),
            )
            .on_get("http://test.com/users/a", json!({"pool": "a"}))
            .on_get("http://test.com/users/b", json!({"pool": "b"})),
    );

    let root = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();

    let first = root.get("users", None).unwrap();
    assert_eq!(first.resource().get_property("pool").unwrap(), &json!("a"));

    let second = root.get_nth("users", 1, None).unwrap();
    assert_eq!(second.resource().get_property("pool").unwrap(), &json!("b"));
}

#[test]
fn out_of_range_link_index_fails_without_a_request() {
    let transport = Arc::new(MockTransport::new().on_get(
        "http://test.com",
        json!({"_links": {"users": [{"href": "/users/a"}, {"href": "/users/b"}]}}),
    ));

    let root = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();
    let err = root.get_nth("users", 5, None).unwrap_err();

    assert!(matches!(err, HalError::LinkIndexOutOfRange { index: 5, .. }));
    assert_eq!(transport.calls().len(), 1);
}

#[test]
fn relative_links_resolve_against_the_response_url() {
    // The root document lives under /api/, so a host-relative link must
    // resolve against the host while keeping scheme and authority.
    let transport = Arc::new(
        MockTransport::new()
            .on_get(
                "http://test.com/api/",
                json!({"_links": {"users": {"href": "/users"}, "nested": {"href": "nested"}}}),
            )
            .on_get("http://test.com/users", json!({"test": 1}))
            .on_get("http://test.com/api/nested", json!({"test": 2})),
    );

    let root =
        Navigator::discover("http://test.com/api/", Some(overrides_for(&transport))).unwrap();

    let absolute_path = root.get("users", None).unwrap();
    assert_eq!(absolute_path.resource().get_property("test").unwrap(), &json!(1));

    let relative_path = root.get("nested", None).unwrap();
    assert_eq!(relative_path.resource().get_property("test").unwrap(), &json!(2));
}

#[test]
fn a_navigator_is_a_reusable_bookmark() {
    let transport = Arc::new(
        MockTransport::new()
            .on_get(
                "http://test.com",
                json!({"_links": {"a": {"href": "/a"}, "b": {"href": "/b"}}}),
            )
            .on_get("http://test.com/a", json!({"from": "a"}))
            .on_get("http://test.com/b", json!({"from": "b"})),
    );

    let root = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();

    // Branch two traversals from the same snapshot.
    let a = root.get("a", None).unwrap();
    let b = root.get("b", None).unwrap();

    assert_eq!(a.resource().get_property("from").unwrap(), &json!("a"));
    assert_eq!(b.resource().get_property("from").unwrap(), &json!("b"));
    assert_eq!(root.status(), 200);
}

#[test]
fn non_2xx_statuses_are_surfaced_not_raised() {
    let not_found = TransportResponse::new(
        404,
        Url::parse("http://test.com/users/ghost").unwrap(),
        json!({"error": "no such user"}).to_string(),
    );

    let transport = Arc::new(
        MockTransport::new()
            .on_get(
                "http://test.com",
                json!({"_links": {"user": {"href": "/users/{userId}", "templated": true}}}),
            )
            .on_get_response("http://test.com/users/ghost", not_found),
    );

    let root = Navigator::discover("http://test.com", Some(overrides_for(&transport))).unwrap();
    let result = root
        .get("user", Some(params(&[("userId", "ghost")])))
        .unwrap();

    assert_eq!(result.status(), 404);
    assert_eq!(
        result.resource().get_property("error").unwrap(),
        &json!("no such user")
    );
}
