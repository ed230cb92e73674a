use serde_json::json;

use crate::common::{TestApp, routes};

mod listing {
    use super::*;

    #[tokio::test]
    async fn fresh_server_lists_three_seeded_projects() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::PROJECTS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.ids(), ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn listing_uses_camel_case_fields() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::PROJECTS).await;

        let first = &res.body[0];
        assert!(first.get("githubUrl").is_some());
        assert!(first.get("liveUrl").is_some());
        assert!(first["tags"].is_array());
    }

    #[tokio::test]
    async fn listing_preserves_creation_order() {
        let app = TestApp::spawn_empty().await;
        let token = app.login().await;
        let mut created = Vec::new();
        for i in 0..11 {
            created.push(app.create_project(&token, &format!("Project {i}")).await);
        }

        let res = app.get(routes::PROJECTS).await;

        assert_eq!(res.ids(), created);
    }
}

mod creation {
    use super::*;

    #[tokio::test]
    async fn create_continues_the_shared_counter() {
        let app = TestApp::spawn().await;
        let token = app.login().await;

        let id = app.create_project(&token, "Sixth").await;

        // Seeds took 1-3 for projects and 4-5 for links.
        assert_eq!(id, "6");
    }

    #[tokio::test]
    async fn create_ignores_body_id() {
        let app = TestApp::spawn().await;
        let token = app.login().await;

        let res = app
            .post_with_token(routes::PROJECTS, &json!({"id": "1", "title": "Mine"}), &token)
            .await;

        assert_eq!(res.status, 200);
        assert_ne!(res.id(), "1");
        let listed = app.get(routes::PROJECTS).await;
        assert_eq!(listed.body[0]["title"], "AI-based Ticketing & Support Platform");
    }

    #[tokio::test]
    async fn create_round_trips_optional_fields() {
        let app = TestApp::spawn_empty().await;
        let token = app.login().await;

        let res = app
            .post_with_token(
                routes::PROJECTS,
                &json!({
                    "title": "Tracker",
                    "description": null,
                    "githubUrl": "https://github.com/example/tracker",
                    "tags": ["Rust", "axum"],
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["githubUrl"], "https://github.com/example/tracker");
        assert_eq!(res.body["liveUrl"], serde_json::Value::Null);
        assert_eq!(res.body["tags"], json!(["Rust", "axum"]));
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let app = TestApp::spawn().await;
        let token = app.login().await;

        let res = app
            .post_with_token(routes::PROJECTS, &json!({"title": "   "}), &token)
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let app = TestApp::spawn().await;
        let token = app.login().await;

        let res = app
            .post_with_token(routes::PROJECTS, &json!({"tags": "not-a-list"}), &token)
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn update_replaces_wholesale_and_pins_path_id() {
        let app = TestApp::spawn().await;
        let token = app.login().await;

        let res = app
            .put_with_token(
                &routes::project("2"),
                &json!({"id": "99", "title": "Renamed"}),
                &token,
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["id"], "2");
        assert_eq!(res.body["title"], "Renamed");
        assert_eq!(res.body["tags"], serde_json::Value::Null);

        let listed = app.get(routes::PROJECTS).await;
        assert_eq!(listed.ids(), ["1", "2", "3"]);
        assert_eq!(listed.body[1]["title"], "Renamed");
    }

    #[tokio::test]
    async fn update_of_missing_project_is_404_and_changes_nothing() {
        let app = TestApp::spawn().await;
        let token = app.login().await;
        let before = app.get(routes::PROJECTS).await;

        let res = app
            .put_with_token(&routes::project("404"), &json!({"title": "Ghost"}), &token)
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(app.get(routes::PROJECTS).await.body, before.body);
    }

    #[tokio::test]
    async fn update_with_link_id_is_404() {
        let app = TestApp::spawn().await;
        let token = app.login().await;

        // Id 4 belongs to a seeded link, not a project.
        let res = app
            .put_with_token(&routes::project("4"), &json!({"title": "Wrong kind"}), &token)
            .await;

        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn update_without_token_is_401() {
        let app = TestApp::spawn().await;

        let res = app
            .put_without_token(&routes::project("1"), &json!({"title": "Nope"}))
            .await;

        assert_eq!(res.status, 401);
    }
}

mod deletion {
    use super::*;

    #[tokio::test]
    async fn delete_removes_project() {
        let app = TestApp::spawn().await;
        let token = app.login().await;

        let res = app.delete_with_token(&routes::project("1"), &token).await;

        assert_eq!(res.status, 204);
        assert_eq!(app.get(routes::PROJECTS).await.ids(), ["2", "3"]);
    }

    #[tokio::test]
    async fn delete_of_missing_project_is_204() {
        let app = TestApp::spawn().await;
        let token = app.login().await;

        for id in ["1", "1", "12345", "not-a-number"] {
            let res = app.delete_with_token(&routes::project(id), &token).await;
            assert_eq!(res.status, 204, "delete of {id} failed");
        }
        assert_eq!(app.get(routes::PROJECTS).await.ids(), ["2", "3"]);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let app = TestApp::spawn_empty().await;
        let token = app.login().await;
        let first = app.create_project(&token, "First").await;
        app.delete_with_token(&routes::project(&first), &token).await;

        let second = app.create_project(&token, "Second").await;

        assert_ne!(first, second);
        assert!(second.parse::<u64>().unwrap() > first.parse::<u64>().unwrap());
    }

    #[tokio::test]
    async fn delete_without_token_keeps_project() {
        let app = TestApp::spawn().await;

        let res = app.delete_without_token(&routes::project("1")).await;

        assert_eq!(res.status, 401);
        assert_eq!(app.get(routes::PROJECTS).await.ids(), ["1", "2", "3"]);
    }
}
