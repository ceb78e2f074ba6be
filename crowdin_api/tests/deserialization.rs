use crowdin_api::types::{
    AnyValue, BranchMerge, BulkEnvelope, Envelope, ListEnvelope, Project, RawEnvelope, Scalar,
    TranslationBuild,
};
use crowdin_api::{decode, Error, Response};
use reqwest::{header::HeaderMap, StatusCode};

fn ok() -> Response {
    Response::new(StatusCode::OK, HeaderMap::new())
}

const PROJECT: &str = r#"{
    "data": {
        "id": 8,
        "type": 1,
        "userId": 12,
        "sourceLanguageId": "en",
        "targetLanguageIds": ["uk", "es-ES"],
        "languageAccessPolicy": "moderate",
        "name": "Knowledge Base",
        "identifier": "knowledge-base",
        "description": "Vault of all terms",
        "visibility": "private",
        "logo": null,
        "publicDownloads": true,
        "webUrl": "https://crowdin.com/project/knowledge-base",
        "fields": {"priority": 3},
        "createdAt": "2023-09-20T11:34:40+00:00",
        "updatedAt": "2023-09-21T08:00:00+00:00",
        "lastActivity": null
    }
}"#;

#[test]
fn project_envelope_decodes_all_fields() {
    let mut response = ok();
    let project = decode::<Envelope<Project>>(PROJECT.as_bytes(), &mut response).unwrap();

    assert_eq!(project.id, 8);
    assert_eq!(project.project_type, 1);
    assert_eq!(project.target_language_ids, vec!["uk", "es-ES"]);
    assert_eq!(project.public_downloads, Some(true));
    assert!(project.logo.is_none());
    assert!(project.last_activity.is_none());
    assert_eq!(project.created_at.to_rfc3339(), "2023-09-20T11:34:40+00:00");

    let fields = project.fields.as_object().unwrap();
    assert_eq!(fields["priority"], serde_json::json!(3));
}

#[test]
fn project_fields_may_be_an_empty_array() {
    let body = PROJECT.replace(r#"{"priority": 3}"#, "[]");
    let project = decode::<Envelope<Project>>(body.as_bytes(), &mut ok()).unwrap();
    assert_eq!(project.fields, AnyValue::Array(vec![]));
}

#[test]
fn missing_required_field_is_decode_error() {
    let body = PROJECT.replace(r#""sourceLanguageId": "en","#, "");
    let err = decode::<Envelope<Project>>(body.as_bytes(), &mut ok()).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert!(err.to_string().contains("sourceLanguageId"));
}

#[test]
fn empty_list_keeps_pagination() {
    let body = br#"{"data":[],"pagination":{"offset":500,"limit":25}}"#;
    let mut response = ok();
    let builds = decode::<ListEnvelope<TranslationBuild>>(body, &mut response).unwrap();
    assert!(builds.is_empty());
    assert_eq!(response.pagination.offset, 500);
    assert_eq!(response.pagination.limit, 25);
}

#[test]
fn build_attributes_and_progress() {
    let body = br#"{"data":{
        "id": 2,
        "projectId": 8,
        "status": "finished",
        "progress": 100,
        "attributes": {"branchId": null, "targetLanguageIds": ["uk"]},
        "createdAt": "2023-09-20T11:34:40+00:00",
        "finishedAt": "2023-09-20T11:35:10+00:00"
    }}"#;
    let build = decode::<Envelope<TranslationBuild>>(body, &mut ok()).unwrap();
    assert!(build.is_finished());
    assert!(build.attributes.as_object().is_some());
    assert!(build.updated_at.is_none());
}

#[test]
fn merge_attributes_tolerate_any_shape() {
    for (attributes, expected_null) in [("null", true), ("{}", false), ("[]", false)] {
        let body = format!(
            r#"{{"data":{{"identifier":"50fb3506","status":"inProgress","progress":40,"attributes":{}}}}}"#,
            attributes
        );
        let merge = decode::<Envelope<BranchMerge>>(body.as_bytes(), &mut ok()).unwrap();
        assert_eq!(merge.attributes.is_null(), expected_null, "{attributes}");
    }
}

#[test]
fn raw_envelope_keeps_scalars() {
    let value = decode::<RawEnvelope>(br#"{"data":"done"}"#, &mut ok()).unwrap();
    assert_eq!(value, AnyValue::Scalar(Scalar::String("done".to_string())));
    assert_eq!(value.as_str(), Some("done"));

    let value = decode::<RawEnvelope>(br#"{"data":true}"#, &mut ok()).unwrap();
    assert_eq!(value, AnyValue::Scalar(Scalar::Bool(true)));
}

#[test]
fn bulk_envelope_without_added_defaults_to_empty() {
    let body = br#"{"skipped":[{"data":{"id":1,"username":"alice"}}]}"#;
    let mut response = ok();
    let result = decode::<BulkEnvelope<crowdin_api::types::ProjectMember>>(body, &mut response)
        .unwrap();
    assert_eq!(result.skipped.len(), 1);
    assert!(result.added.is_empty());
    assert_eq!(response.pagination.limit, 0);
}
