use reqwest::StatusCode;

use crate::common::{TestApp, USER_EMAIL};

#[tokio::test]
async fn empty_store_shows_zero_counts() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;

    let res = app.get("/adminDashboard").await;

    assert_eq!(res.status, StatusCode::OK);
    let counts = &res.body["data"]["counts"];
    for key in ["exhibitions", "events", "artifacts", "users"] {
        assert_eq!(counts[key], 0, "{key}");
    }
    assert_eq!(res.body["data"]["recent_exhibitions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn only_the_exact_event_category_counts_as_an_event() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;
    app.create_exhibition("Spring Gala", "Event").await;
    app.create_exhibition("Lecture Series", "Events").await;
    app.create_exhibition("Cycladic Art", "Sculpture").await;

    let res = app.get("/adminDashboard").await;

    let counts = &res.body["data"]["counts"];
    assert_eq!(counts["events"], 1);
    assert_eq!(counts["exhibitions"], 2);

    let events = app.get("/events").await;
    let listed = events.body["data"]["events"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["exhibit_name"], "Spring Gala");
}

#[tokio::test]
async fn recent_exhibitions_are_the_five_newest_non_events() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;
    for name in ["One", "Two", "Three", "Four", "Five", "Six"] {
        app.create_exhibition(name, "Painting").await;
    }
    app.create_exhibition("Gala", "Event").await;

    let res = app.get("/adminDashboard").await;

    let names: Vec<&str> = res.body["data"]["recent_exhibitions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["exhibit_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Six", "Five", "Four", "Three", "Two"]);
}

#[tokio::test]
async fn counts_include_artifacts_and_users() {
    let app = TestApp::spawn().await;
    app.register_user(USER_EMAIL).await.assert_redirect("/login");
    app.login_as_admin().await;
    app.post_form(
        "/section_artifacts",
        &[
            ("item_name", "Scarab"),
            ("category", "Egyptian Art"),
            ("origin", "Thebes"),
            ("historical_period", "New Kingdom"),
            ("location", "Gallery 117"),
            ("image_filename", "scarab.jpg"),
        ],
    )
    .await
    .assert_redirect("/section_artifacts");

    let res = app.get("/adminDashboard").await;

    assert_eq!(res.body["data"]["counts"]["artifacts"], 1);
    assert_eq!(res.body["data"]["counts"]["users"], 1);
}
