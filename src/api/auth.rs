//! Auth API.

use std::sync::Arc;

use crate::client::{ClientInner, Session};
use crate::error::Result;
use crate::models::UpstreamError;

/// API for authentication.
pub struct AuthApi {
    client: Arc<ClientInner>,
}

/// Outcome of a login attempt.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Credentials accepted; the captured cookie set.
    Granted(Session),
    /// Credentials rejected; the upstream body, untouched.
    Denied(UpstreamError),
}

impl AuthApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Log in with email and password.
    ///
    /// On HTTP 200 the response cookies become the session credential; any
    /// other status surfaces the upstream body as-is. The request is issued
    /// even for empty arguments — skipping those is the construction-time
    /// bootstrap's job, not this call's.
    pub async fn login(
        &self,
        email: impl AsRef<str>,
        password: impl AsRef<str>,
    ) -> Result<LoginOutcome> {
        let form = vec![
            ("email", email.as_ref().to_owned()),
            ("password", password.as_ref().to_owned()),
        ];

        let response = self.client.post_form("auth/login", form).await?;

        if response.status == 200 {
            Ok(LoginOutcome::Granted(Session::new(response.cookies)))
        } else {
            Ok(LoginOutcome::Denied(response.json()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{client, MockTransport};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_login_success_captures_cookies() {
        let transport = MockTransport::new();
        transport.push_cookies(
            200,
            &[
                ("jwt", "placeholder_token_1"),
                ("refreshToken", "placeholder_token_2"),
            ],
        );

        let outcome = client(transport.clone())
            .auth()
            .login("test@email.com", "password")
            .await
            .unwrap();

        let session = match outcome {
            LoginOutcome::Granted(session) => session,
            LoginOutcome::Denied(err) => panic!("denied: {:?}", err),
        };
        assert_eq!(session.get("jwt"), Some("placeholder_token_1"));
        assert_eq!(session.get("refreshToken"), Some("placeholder_token_2"));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.path(), "/v1/auth/login");
        assert_eq!(
            requests[0].form,
            vec![
                ("email", "test@email.com".to_owned()),
                ("password", "password".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn test_login_rejected_passes_body_through() {
        let transport = MockTransport::new();
        transport.push_json(
            401,
            serde_json::json!({"code": 401, "message": "Incorrect email or password"}),
        );

        let outcome = client(transport)
            .auth()
            .login("incorrect@email.com", "incorrect_password")
            .await
            .unwrap();

        match outcome {
            LoginOutcome::Denied(err) => {
                assert_eq!(err.code, 401);
                assert_eq!(err.message, "Incorrect email or password");
            }
            LoginOutcome::Granted(_) => panic!("expected denial"),
        }
    }

    #[tokio::test]
    async fn test_login_validation_error_keeps_field_errors() {
        let transport = MockTransport::new();
        transport.push_json(
            400,
            serde_json::json!({
                "code": 400,
                "message": "Validation error",
                "errors": [
                    {
                        "field": "email",
                        "location": "body",
                        "messages": [
                            "\"email\" is not allowed to be empty",
                            "\"email\" must be a valid email"
                        ],
                        "types": ["any.empty", "string.email"]
                    },
                    {
                        "field": "password",
                        "location": "body",
                        "messages": ["\"password\" is not allowed to be empty"],
                        "types": ["any.empty"]
                    }
                ]
            }),
        );

        let outcome = client(transport).auth().login("", "").await.unwrap();

        match outcome {
            LoginOutcome::Denied(err) => {
                assert_eq!(err.message, "Validation error");
                assert_eq!(err.errors.len(), 2);
                assert_eq!(err.errors[1].field, "password");
                assert_eq!(err.errors[0].types, vec!["any.empty", "string.email"]);
            }
            LoginOutcome::Granted(_) => panic!("expected denial"),
        }
    }

    #[tokio::test]
    async fn test_connect_stores_session() {
        let transport = MockTransport::new();
        transport.push_cookies(200, &[("jwt", "tok")]);

        let client = crate::LoadingClient::builder()
            .transport(transport.clone())
            .credentials("test@email.com", "password")
            .connect()
            .await
            .unwrap();

        assert!(client.is_authenticated());
        assert_eq!(client.session().unwrap().get("jwt"), Some("tok"));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_connect_rejected_leaves_unauthenticated() {
        let transport = MockTransport::new();
        transport.push_json(
            401,
            serde_json::json!({"code": 401, "message": "Incorrect email or password"}),
        );

        let client = crate::LoadingClient::builder()
            .transport(transport.clone())
            .credentials("incorrect@email.com", "incorrect_password")
            .connect()
            .await
            .unwrap();

        assert!(!client.is_authenticated());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_connect_skips_login_for_missing_credentials() {
        // Empty email or password means no request at all.
        let transport = MockTransport::new();

        let client = crate::LoadingClient::builder()
            .transport(transport.clone())
            .credentials("", "")
            .connect()
            .await
            .unwrap();

        assert!(!client.is_authenticated());
        assert!(transport.requests().is_empty());

        let transport = MockTransport::new();
        let client = crate::LoadingClient::builder()
            .transport(transport.clone())
            .connect()
            .await
            .unwrap();

        assert!(!client.is_authenticated());
        assert!(transport.requests().is_empty());
    }
}
