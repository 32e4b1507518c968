use futures::executor::block_on;

use super::*;
use crate::net::testing::harness;
use crate::net::transport::{Method, RequestBody};

fn user_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": "ana@example.com",
        "role": "JOB_SEEKER",
        "firstName": "Ana",
        "lastName": null,
        "phone": null,
        "location": null,
        "bio": null,
        "resumeUrl": null,
        "skills": ["Rust"],
        "currentPosition": null,
        "yearsOfExperience": null,
        "companyName": null,
        "companyWebsite": null,
        "createdAt": null
    })
}

#[test]
fn get_targets_user_by_id() {
    let h = harness();
    h.transport.push_status(200, user_json("u-5"));

    let user = block_on(get(&h.gateway, "u-5")).unwrap();

    let request = h.transport.last_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/users/u-5");
    assert_eq!(user.id, "u-5");
}

#[test]
fn update_puts_only_changed_fields() {
    let h = harness();
    h.transport.push_status(200, user_json("u-5"));

    let changes = UserUpdate {
        location: Some("Porto".to_owned()),
        ..UserUpdate::default()
    };
    block_on(update(&h.gateway, "u-5", &changes)).unwrap();

    let request = h.transport.last_request();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "/users/u-5");
    assert_eq!(request.body, RequestBody::Json(serde_json::json!({"location": "Porto"})));
}
