use reqwest::StatusCode;

use crate::common::{exhibition_form, object_form, TestApp};

fn artifact_form<'a>(name: &'a str, category: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("item_name", name),
        ("category", category),
        ("origin", "Gandhara"),
        ("historical_period", "2nd century"),
        ("location", "Gallery 236"),
        ("image_filename", "bodhisattva.jpg"),
        ("description", "Schist figure."),
        ("category_desc", "Art of South Asia."),
    ]
}

mod gate {
    use super::*;

    #[tokio::test]
    async fn anonymous_requests_never_reach_the_store() {
        let app = TestApp::spawn().await;

        app.get("/section_exhibition").await.assert_redirect("/adminLogin");
        app.post_form("/section_artifacts", &artifact_form("Bodhisattva", "Indian Art"))
            .await
            .assert_redirect("/adminLogin");
        app.post_form("/delete_artifact/1", &[]).await.assert_redirect("/adminLogin");
        app.get("/edit_exhibition_object/1").await.assert_redirect("/adminLogin");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artifacts")
            .fetch_one(&app.pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}

mod create {
    use super::*;

    #[tokio::test]
    async fn created_artifact_is_listed_in_its_section_and_category_page() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;

        app.post_form("/section_artifacts", &artifact_form("Bodhisattva", "Indian Art"))
            .await
            .assert_redirect("/section_artifacts");

        let section = app.get("/section_artifacts").await;
        assert_eq!(section.body["view"], "section_artifacts");
        assert_eq!(section.body["data"]["rows"][0]["item_name"], "Bodhisattva");

        let page = app.get("/indian_art").await;
        assert_eq!(page.status, StatusCode::OK);
        assert_eq!(page.body["data"]["category"], "Indian Art");
        assert_eq!(page.body["data"]["artifacts"][0]["item_name"], "Bodhisattva");
        let asian = app.get("/asian_art").await;
        assert_eq!(asian.body["data"]["artifacts"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn missing_required_field_re_renders_with_errors() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;
        let mut form = exhibition_form("Arms of the Samurai", "Arms");
        form.retain(|(k, _)| *k != "location");

        let res = app.post_form("/section_exhibition", &form).await;

        assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(res.body["view"], "section_exhibition");
        assert_eq!(res.body["data"]["errors"]["location"], "Location is required.");
        assert_eq!(res.body["data"]["rows"].as_array().unwrap().len(), 0);
    }
}

mod edit {
    use super::*;

    #[tokio::test]
    async fn edit_of_an_absent_row_returns_to_the_section() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;

        app.get("/edit_exhibition/42").await.assert_redirect("/section_exhibition");
    }

    #[tokio::test]
    async fn update_replaces_the_row_and_leaves_others_alone() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;
        app.create_object("Wanderer", "Caspar David Friedrich", "Germany").await;
        app.create_object("Moonrise", "Caspar David Friedrich", "Germany").await;

        let edit = app.get("/edit_exhibition_object/1").await;
        assert_eq!(edit.body["view"], "edit_exhibition_object");
        assert_eq!(edit.body["data"]["title"], "Wanderer");

        app.post_form(
            "/update_exhibition_object/1",
            &object_form("Wanderer above the Sea of Fog", "Caspar David Friedrich", "Germany"),
        )
        .await
        .assert_redirect("/section_exhibition_objects");

        let updated = app.get("/edit_exhibition_object/1").await;
        let mut expected = edit.body["data"].clone();
        expected["title"] = "Wanderer above the Sea of Fog".into();
        assert_eq!(updated.body["data"], expected);
        let untouched = app.get("/edit_exhibition_object/2").await;
        assert_eq!(untouched.body["data"]["title"], "Moonrise");
    }

    #[tokio::test]
    async fn update_with_a_missing_field_is_a_bad_request() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;
        app.create_object("Wanderer", "Caspar David Friedrich", "Germany").await;
        let mut form = object_form("Renamed", "Caspar David Friedrich", "Germany");
        form.retain(|(k, _)| *k != "credit");

        let res = app.post_form("/update_exhibition_object/1", &form).await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.body["error"]["code"], "bad_request");
        let edit = app.get("/edit_exhibition_object/1").await;
        assert_eq!(edit.body["data"]["title"], "Wanderer");
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn delete_removes_the_row() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;
        app.create_exhibition("Cycladic Art", "Sculpture").await;

        app.post_form("/delete_exhibition/1", &[])
            .await
            .assert_redirect("/section_exhibition");

        let section = app.get("/section_exhibition").await;
        assert_eq!(section.body["data"]["rows"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn deleting_an_absent_id_still_redirects() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;

        app.post_form("/delete_artifact/99999", &[])
            .await
            .assert_redirect("/section_artifacts");
    }
}
