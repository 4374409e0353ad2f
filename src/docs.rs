use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{authz, models, routes};

#[derive(OpenApi)]
#[openapi(
	paths(
		routes::health::health,
		routes::decisions::decide,
		routes::decisions::decide_batch,
		routes::decisions::enforce_decision
	),
	components(
		schemas(
			authz::Action,
			authz::AuthzMode,
			authz::Principal,
			authz::Role,
			models::category::Category,
			models::project::Project,
			models::work_item::Issue,
			models::work_item::Task,
			models::work_item::Status,
			models::work_item::WorkItemType,
			models::progression::Progression,
			models::review::Review,
			models::review::ReviewState,
			models::resolution::Resolution,
			models::user::UserRecord,
			models::resource::ResourceKind,
			models::decision::DecisionRequest,
			models::decision::DecisionResponse,
			models::decision::BatchDecisionRequest,
			models::decision::BatchDecisionResponse,
			routes::health::HealthResponse
		)
	),
	tags(
		(name = "Health", description = "Service health"),
		(name = "Decisions", description = "Authorization decisions")
	)
)]
pub struct ApiDoc;

pub fn build_openapi(port: u16) -> anyhow::Result<utoipa::openapi::OpenApi> {
	let mut doc = serde_json::to_value(&ApiDoc::openapi())?;

	add_examples(&mut doc);
	ensure_servers(&mut doc, port);

	Ok(serde_json::from_value(doc)?)
}

pub fn swagger_routes(doc: utoipa::openapi::OpenApi) -> anyhow::Result<Router> {
	let swagger_config = utoipa_swagger_ui::Config::new(["/api-docs/openapi.json"]).try_it_out_enabled(true);

	let doc_json = Arc::new(serde_json::to_value(&doc)?);

	let json_route = {
		let doc_json = Arc::clone(&doc_json);
		get(move || {
			let doc_json = Arc::clone(&doc_json);
			async move { Json((*doc_json).clone()) }
		})
	};

	Ok(Router::new()
		.route("/api-docs/openapi.json", json_route)
		.merge(SwaggerUi::new("/docs").config(swagger_config)))
}

/// The resource field is an open object in the schema; show a full chain.
fn add_examples(doc: &mut Value) {
	let Some(schema) = doc.pointer_mut("/components/schemas/DecisionRequest") else {
		return;
	};
	if let Some(obj) = schema.as_object_mut() {
		obj.insert("example".to_string(), decision_example());
	}
}

fn decision_example() -> Value {
	json!({
		"user": {"user_id": "7f1c2a52-4c1e-4b7a-9d1e-0c4a5e1b2f30", "role": "worker"},
		"action": "create",
		"resource": {
			"kind": "task_comment",
			"id": "0b9e7d0e-2f7a-4f0e-8a36-1d1c3b5d8e21",
			"owner": "7f1c2a52-4c1e-4b7a-9d1e-0c4a5e1b2f30",
			"body": "Blocked on the staging deploy",
			"parent": {
				"id": "5a3c9e47-6b1d-4f6a-9a0d-2e8f7c1b4d55",
				"owner": "c3d8a1f2-9e4b-4c7d-8a1f-6b2e5d9c0a13",
				"status": "open",
				"assignees": ["7f1c2a52-4c1e-4b7a-9d1e-0c4a5e1b2f30"],
				"project": {
					"id": "9d2f4b6a-1c3e-4a5b-8d7f-0e1a2b3c4d5e",
					"name": "Launch Planning",
					"visible": true,
					"internal": true,
					"category": {
						"id": "1e2d3c4b-5a69-4788-9a0b-1c2d3e4f5a6b",
						"name": "Infrastructure",
						"visible": true,
						"internal": false
					}
				}
			}
		}
	})
}

fn ensure_servers(doc: &mut Value, port: u16) {
	if let Some(obj) = doc.as_object_mut() {
		obj.entry("servers")
			.or_insert_with(|| json!([{ "url": format!("http://localhost:{}", port) }]));
	}
}
