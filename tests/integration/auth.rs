use reqwest::StatusCode;

use crate::common::{new_client, user_registration, TestApp, ADMIN_EMAIL, PASSWORD, USER_EMAIL};

mod registration {
    use super::*;

    #[tokio::test]
    async fn user_can_register_and_log_in() {
        let app = TestApp::spawn().await;

        app.register_user(USER_EMAIL).await.assert_redirect("/login");
        let res = app
            .post_form("/login", &[("email", USER_EMAIL), ("password", PASSWORD)])
            .await;
        res.assert_redirect("/");

        let home = app.get("/").await;
        assert_eq!(home.status, StatusCode::OK);
        assert_eq!(home.body["view"], "index");
        assert_eq!(home.body["data"]["session"]["user"], USER_EMAIL);
        assert!(home.body["data"]["session"]["admin"].is_null());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_with_a_database_error() {
        let app = TestApp::spawn().await;
        app.register_user(USER_EMAIL).await.assert_redirect("/login");

        let res = app.register_user(USER_EMAIL).await;

        assert_eq!(res.status, StatusCode::CONFLICT);
        assert_eq!(res.body["view"], "register");
        assert_eq!(res.body["data"]["errors"]["database"], "Email already exists.");
    }

    #[tokio::test]
    async fn the_same_email_may_be_both_user_and_admin() {
        let app = TestApp::spawn().await;

        app.register_user("both@museum.test").await.assert_redirect("/login");
        app.register_admin("both@museum.test").await.assert_redirect("/adminLogin");
    }

    #[tokio::test]
    async fn password_without_a_symbol_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form("/register", &user_registration(USER_EMAIL, "abc12345"))
            .await;

        assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(res.body["data"]["errors"]["password"].is_string());
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&app.pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn mismatched_confirmation_is_rejected() {
        let app = TestApp::spawn().await;
        let mut form = user_registration(USER_EMAIL, PASSWORD);
        form.retain(|(k, _)| *k != "confirm_password");
        form.push(("confirm_password", "gallery2!"));

        let res = app.post_form("/register", &form).await;

        assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(res.body["data"]["errors"]["confirm_password"], "Passwords do not match.");
    }

    #[tokio::test]
    async fn passwords_are_stored_as_digests() {
        let app = TestApp::spawn().await;
        app.register_admin(ADMIN_EMAIL).await.assert_redirect("/adminLogin");

        let stored: String = sqlx::query_scalar("SELECT password FROM admins WHERE email = ?")
            .bind(ADMIN_EMAIL)
            .fetch_one(&app.pool)
            .await
            .unwrap();

        assert_ne!(stored, PASSWORD);
        assert!(stored.starts_with("$argon2"));
    }
}

mod login {
    use super::*;

    #[tokio::test]
    async fn wrong_password_and_unknown_email_get_the_same_error() {
        let app = TestApp::spawn().await;
        app.register_user(USER_EMAIL).await.assert_redirect("/login");

        let wrong = app
            .post_form("/login", &[("email", USER_EMAIL), ("password", "gallery9!")])
            .await;
        let unknown = app
            .post_form("/login", &[("email", "nobody@museum.test"), ("password", PASSWORD)])
            .await;

        for res in [wrong, unknown] {
            assert_eq!(res.status, StatusCode::UNAUTHORIZED);
            assert_eq!(res.body["view"], "login");
            assert_eq!(res.body["data"]["errors"]["login"], "Invalid email or password.");
        }
        let home = app.get("/").await;
        assert!(home.body["data"]["session"]["user"].is_null());
    }

    #[tokio::test]
    async fn user_credentials_do_not_open_an_admin_session() {
        let app = TestApp::spawn().await;
        app.register_user(USER_EMAIL).await.assert_redirect("/login");

        let res = app
            .post_form("/adminLogin", &[("email", USER_EMAIL), ("password", PASSWORD)])
            .await;

        assert_eq!(res.status, StatusCode::UNAUTHORIZED);
        assert_eq!(res.body["view"], "adminLogin");
    }

    #[tokio::test]
    async fn malformed_email_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form("/login", &[("email", "not-an-email"), ("password", PASSWORD)])
            .await;

        assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(res.body["data"]["errors"]["email"].is_string());
    }
}

mod sessions {
    use super::*;

    #[tokio::test]
    async fn user_session_does_not_pass_the_admin_gate() {
        let app = TestApp::spawn().await;
        app.login_as_user().await;

        app.get("/adminDashboard").await.assert_redirect("/adminLogin");
        app.get("/section_artifacts").await.assert_redirect("/adminLogin");
    }

    #[tokio::test]
    async fn admin_session_opens_the_dashboard() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;

        let res = app.get("/adminDashboard").await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["view"], "adminDashboard");
        assert_eq!(res.body["data"]["admin_email"], ADMIN_EMAIL);
    }

    #[tokio::test]
    async fn user_logout_keeps_the_admin_session() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;
        app.login_as_user().await;

        app.get("/logout").await.assert_redirect("/");

        let home = app.get("/").await;
        assert!(home.body["data"]["session"]["user"].is_null());
        assert_eq!(home.body["data"]["session"]["admin"], ADMIN_EMAIL);
        assert_eq!(app.get("/adminDashboard").await.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn admin_logout_closes_the_gate() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;

        app.get("/adminLogout").await.assert_redirect("/");

        app.get("/adminDashboard").await.assert_redirect("/adminLogin");
    }

    #[tokio::test]
    async fn sessions_belong_to_one_client() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;
        let other = new_client();

        app.get_with(&other, "/adminDashboard").await.assert_redirect("/adminLogin");
    }
}
