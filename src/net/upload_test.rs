use futures::executor::block_on;

use super::*;
use crate::net::testing::harness;
use crate::net::transport::{Method, RequestBody};

fn pdf_payload() -> FilePayload {
    FilePayload {
        filename: "resume.pdf".to_owned(),
        content_type: RESUME_CONTENT_TYPE.to_owned(),
        bytes: vec![0x25, 0x50, 0x44, 0x46],
    }
}

#[test]
fn upload_resume_posts_multipart_under_fixed_field() {
    let h = harness();
    h.transport.push_status(
        200,
        serde_json::json!({"resumeUrl": "https://cdn.example.com/resumes/r1.pdf",
            "message": "Resume uploaded successfully"}),
    );

    let response = block_on(upload_resume(&h.gateway, pdf_payload())).unwrap();

    let request = h.transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/upload/resume");
    assert_eq!(
        request.body,
        RequestBody::Multipart {
            field: RESUME_FIELD.to_owned(),
            file: pdf_payload(),
        }
    );
    assert_eq!(response.resume_url, "https://cdn.example.com/resumes/r1.pdf");
}

#[test]
fn upload_resume_rejects_non_pdf_before_dispatch() {
    let h = harness();

    let error = block_on(upload_resume(
        &h.gateway,
        FilePayload {
            filename: "resume.png".to_owned(),
            content_type: "image/png".to_owned(),
            bytes: vec![1, 2, 3],
        },
    ))
    .unwrap_err();

    assert_eq!(
        error,
        ApiError::UnsupportedFileType {
            expected: RESUME_CONTENT_TYPE.to_owned(),
            actual: "image/png".to_owned(),
        }
    );
    assert_eq!(h.transport.request_count(), 0);
}

#[test]
fn upload_resume_carries_bearer_token() {
    let h = harness();
    h.gateway.set_token(Some("tok1".to_owned()));
    h.transport.push_status(
        200,
        serde_json::json!({"resumeUrl": "https://cdn.example.com/r2.pdf", "message": null}),
    );

    block_on(upload_resume(&h.gateway, pdf_payload())).unwrap();

    assert_eq!(h.transport.last_request().bearer_token(), Some("tok1"));
}
