mod common;

use axum::http::StatusCode;
use common::{create, delete, get, post, put};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = common::setup_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_position_crud() {
    let app = common::setup_app().await;

    let id = create(&app, "/api/v1/positions", json!({ "title": " Backend Developer " })).await;

    let (status, body) = get(&app, &format!("/api/v1/positions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Backend Developer");

    let (status, body) = put(
        &app,
        &format!("/api/v1/positions/{id}"),
        json!({ "title": "Senior Backend Developer" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Senior Backend Developer");

    let (status, _) = delete(&app, &format!("/api/v1/positions/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &format!("/api/v1/positions/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_duplicate_position_title_conflicts() {
    let app = common::setup_app().await;
    create(&app, "/api/v1/positions", json!({ "title": "QA Engineer" })).await;

    let (status, body) = post(&app, "/api/v1/positions", json!({ "title": "QA Engineer" })).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_malformed_ids_and_titles_are_bad_requests() {
    let app = common::setup_app().await;

    let (status, body) = get(&app, "/api/v1/skills/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ID");

    let (status, body) = post(&app, "/api/v1/skills", json!({ "title": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = get(&app, "/api/v1/skills?pageNumber=0&pageSize=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_skill_requirement_lifecycle() {
    let app = common::setup_app().await;
    let position_id = create(&app, "/api/v1/positions", json!({ "title": "Backend Developer" })).await;
    let skill_id = create(&app, "/api/v1/skills", json!({ "title": "Rust" })).await;
    let body = json!({
        "positionId": position_id,
        "skillId": skill_id,
        "easy": 20,
        "medium": 50,
        "hard": 30
    });

    let requirement_id = create(&app, "/api/v1/skill-requirements", body.clone()).await;

    let (status, found) = get(&app, &format!("/api/v1/skill-requirements/{requirement_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["medium"], 50);
    assert_eq!(found["positionId"], position_id.as_str());

    let (status, error) = post(&app, "/api/v1/skill-requirements", body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "CONFLICT");

    let (status, listed) = get(
        &app,
        &format!("/api/v1/skill-requirements/search?positionId={position_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let (status, updated) = put(
        &app,
        &format!("/api/v1/skill-requirements/{requirement_id}"),
        json!({
            "positionId": position_id,
            "skillId": skill_id,
            "easy": 0,
            "medium": 0,
            "hard": 100
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["hard"], 100);

    let pair_uri = format!("/api/v1/skill-requirements/position/{position_id}/skill/{skill_id}");
    let (status, _) = delete(&app, &pair_uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = delete(&app, &pair_uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_skill_requirement_checks_run_in_order() {
    let app = common::setup_app().await;
    let position_id = create(&app, "/api/v1/positions", json!({ "title": "Backend Developer" })).await;
    let skill_id = create(&app, "/api/v1/skills", json!({ "title": "Rust" })).await;
    let missing_skill = "2d7f3c8e-93a1-4c59-8d0e-6b1a0f4e2c11";

    // Reference checks come before arithmetic.
    let (status, error) = post(
        &app,
        "/api/v1/skill-requirements",
        json!({ "positionId": position_id, "skillId": missing_skill, "easy": 90, "medium": 90, "hard": 90 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(error["message"].as_str().is_some_and(|m| m.starts_with("Skill")));

    let (status, error) = post(
        &app,
        "/api/v1/skill-requirements",
        json!({ "positionId": position_id, "skillId": skill_id, "easy": 30, "medium": 30, "hard": 30 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INCONSISTENT_TOTAL");

    let (status, error) = post(
        &app,
        "/api/v1/skill-requirements",
        json!({ "positionId": position_id, "skillId": skill_id, "easy": 120, "medium": -20, "hard": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "PERCENTAGE_OUT_OF_RANGE");

    let (_, listed) = get(&app, "/api/v1/skill-requirements").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_skill_delete_is_blocked_by_questions() {
    let app = common::setup_app().await;
    let skill_id = create(&app, "/api/v1/skills", json!({ "title": "Kotlin" })).await;
    let question_id = create(
        &app,
        "/api/v1/questions",
        json!({ "skillId": skill_id, "title": "What is val?", "difficultyLevel": "EASY" }),
    )
    .await;

    let (status, error) = delete(&app, &format!("/api/v1/skills/{skill_id}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["message"], "Skill has related questions");

    let (status, questions) = get(&app, &format!("/api/v1/skills/{skill_id}/questions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(questions[0]["id"], question_id.as_str());

    let (status, _) = delete(&app, &format!("/api/v1/questions/{question_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = delete(&app, &format!("/api/v1/skills/{skill_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = delete(&app, &format!("/api/v1/skills/{skill_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_skill_lookup_by_title() {
    let app = common::setup_app().await;
    let skill_id = create(&app, "/api/v1/skills", json!({ "title": "Rust" })).await;

    let (status, found) = get(&app, "/api/v1/skills/search?title=Rust").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"], skill_id.as_str());

    let (status, _) = get(&app, "/api/v1/skills/search?title=Haskell").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_question_search() {
    let app = common::setup_app().await;
    let kotlin = create(&app, "/api/v1/skills", json!({ "title": "Kotlin" })).await;
    let java = create(&app, "/api/v1/skills", json!({ "title": "Java" })).await;
    for (skill_id, title, level) in [
        (&kotlin, "What is Kotlin?", "EASY"),
        (&kotlin, "KOTLIN coroutines", "HARD"),
        (&java, "Java basics", "easy"),
    ] {
        create(
            &app,
            "/api/v1/questions",
            json!({ "skillId": skill_id, "title": title, "rightAnswer": "yes", "difficultyLevel": level }),
        )
        .await;
    }

    let (status, found) = post(&app, "/api/v1/questions/search", json!({ "title": "kotlin" })).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<_> = found
        .as_array()
        .expect("array")
        .iter()
        .map(|q| q["title"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(titles, ["What is Kotlin?", "KOTLIN coroutines"]);

    let (_, found) = post(
        &app,
        "/api/v1/questions/search",
        json!({ "difficultyLevel": "EASY", "rightAnswer": "yes" }),
    )
    .await;
    assert_eq!(found.as_array().map(Vec::len), Some(2));
    assert_eq!(found[1]["difficultyLevel"], "EASY");

    let (_, everything) = post(&app, "/api/v1/questions/search", json!({})).await;
    assert_eq!(everything.as_array().map(Vec::len), Some(3));

    let (_, paged) = post(
        &app,
        "/api/v1/questions/search?pageNumber=1&pageSize=2",
        json!({ "skillId": "" }),
    )
    .await;
    assert_eq!(paged.as_array().map(Vec::len), Some(1));
    assert_eq!(paged[0]["title"], "Java basics");
}

#[tokio::test]
async fn test_question_requires_existing_skill() {
    let app = common::setup_app().await;

    let (status, error) = post(
        &app,
        "/api/v1/questions",
        json!({
            "skillId": "7a0e8f7e-8b6c-4b41-a2b4-0c5f9f3d1e22",
            "title": "Orphan?",
            "difficultyLevel": "MEDIUM"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(error["message"].as_str().is_some_and(|m| m.starts_with("Skill")));

    let (status, error) = post(
        &app,
        "/api/v1/questions",
        json!({
            "skillId": "7a0e8f7e-8b6c-4b41-a2b4-0c5f9f3d1e22",
            "title": "Orphan?",
            "difficultyLevel": "EXTREME"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_skill_delete_is_blocked_by_requirements() {
    let app = common::setup_app().await;
    let position_id = create(&app, "/api/v1/positions", json!({ "title": "Backend Developer" })).await;
    let skill_id = create(&app, "/api/v1/skills", json!({ "title": "Rust" })).await;
    create(
        &app,
        "/api/v1/skill-requirements",
        json!({ "positionId": position_id, "skillId": skill_id, "easy": 50, "medium": 30, "hard": 20 }),
    )
    .await;

    let (status, error) = delete(&app, &format!("/api/v1/skills/{skill_id}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["message"], "Skill is required by positions");

    let (_, listed) = get(
        &app,
        &format!("/api/v1/skill-requirements/search?positionId={position_id}"),
    )
    .await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}
