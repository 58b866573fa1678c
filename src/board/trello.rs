use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

use super::{BoardService, Position, RawList, RawTask};
use crate::config::Credentials;
use crate::error::{Result, RotaError};
use crate::model;

/// Production board API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.trello.com";

/// Blocking Trello REST client.
///
/// Authenticates every request with the credential key/token as query
/// parameters. The base URL is injectable so tests can point the client
/// at a local mock server.
pub struct TrelloBoard {
    client: Client,
    base: Url,
    credentials: Credentials,
}

impl TrelloBoard {
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, DEFAULT_API_URL)
    }

    pub fn with_base_url(credentials: Credentials, base: &str) -> Result<Self> {
        let base = Url::parse(base)
            .map_err(|err| RotaError::Config(format!("invalid API URL {base:?}: {err}")))?;
        let client = Client::builder()
            .user_agent(concat!("rota/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base,
            credentials,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|err| RotaError::Config(format!("invalid API path {path:?}: {err}")))
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .header(ACCEPT, "application/json")
            .query(&self.auth_query())
            .send()?;
        if !response.status().is_success() {
            return Err(RotaError::Status {
                status: response.status().as_u16(),
                path: path.to_string(),
            });
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn put(&self, path: &str, params: &[(&str, String)]) -> Result<()> {
        let response = self
            .client
            .put(self.endpoint(path)?)
            .header(ACCEPT, "application/json")
            .query(&self.auth_query())
            .query(params)
            .send()?;
        if !response.status().is_success() {
            return Err(RotaError::Status {
                status: response.status().as_u16(),
                path: path.to_string(),
            });
        }
        Ok(())
    }

    fn auth_query(&self) -> [(&'static str, &str); 2] {
        [
            ("key", self.credentials.api_key.as_str()),
            ("token", self.credentials.api_token.as_str()),
        ]
    }
}

impl BoardService for TrelloBoard {
    fn lists(&self) -> Result<Vec<RawList>> {
        self.get_json(&format!("/1/boards/{}/lists", self.credentials.board_id))
    }

    fn tasks(&self, list_id: &str) -> Result<Vec<RawTask>> {
        self.get_json(&format!("/1/lists/{list_id}/cards"))
    }

    fn relocate(
        &self,
        task_id: &str,
        due: DateTime<Utc>,
        completed: bool,
        list_id: &str,
    ) -> Result<()> {
        self.put(
            &format!("/1/cards/{task_id}"),
            &[
                ("dueComplete", completed.to_string()),
                ("due", model::format_due(due)),
                ("idList", list_id.to_string()),
            ],
        )
    }

    fn reposition(&self, task_id: &str, position: Position) -> Result<()> {
        self.put(
            &format!("/1/cards/{task_id}"),
            &[("pos", position.to_string())],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn credentials() -> Credentials {
        Credentials {
            board_id: "board-1".to_string(),
            api_key: "key-2".to_string(),
            api_token: "token-3".to_string(),
        }
    }

    fn client_for(server: &mockito::ServerGuard) -> TrelloBoard {
        // reqwest is built with `rustls-no-provider`; main installs the ring
        // provider at startup. These unit tests bypass main, so install it
        // here. Err means it is already installed, which is fine.
        let _ = rustls::crypto::ring::default_provider().install_default();
        TrelloBoard::with_base_url(credentials(), &server.url()).unwrap()
    }

    fn authenticated() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), "key-2".into()),
            Matcher::UrlEncoded("token".into(), "token-3".into()),
        ])
    }

    #[test]
    fn fetches_board_lists() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/1/boards/board-1/lists")
            .match_query(authenticated())
            .with_header("content-type", "application/json")
            .with_body(r#"[{"name": "Monday", "id": "l1"}, {"name": "Inbox", "id": "l2"}]"#)
            .create();

        let lists = client_for(&server).lists().unwrap();

        mock.assert();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].name, "Monday");
        assert_eq!(lists[1].id, "l2");
    }

    #[test]
    fn fetches_list_tasks() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/1/lists/l1/cards")
            .match_query(authenticated())
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"name": "Water plants", "id": "t1", "due": "2023-01-01T00:00:00.000Z",
                     "desc": "1 weeks", "labels": [{"name": "Regular"}]}]"#,
            )
            .create();

        let tasks = client_for(&server).tasks("l1").unwrap();

        mock.assert();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].desc, "1 weeks");
    }

    #[test]
    fn relocates_with_due_list_and_completion_flag() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/1/cards/t1")
            .match_query(Matcher::AllOf(vec![
                authenticated(),
                Matcher::UrlEncoded("dueComplete".into(), "false".into()),
                Matcher::UrlEncoded("due".into(), "2023-01-22T00:00:00.000Z".into()),
                Matcher::UrlEncoded("idList".into(), "l7".into()),
            ]))
            .create();

        let due = model::parse_due("2023-01-22T00:00:00.000Z").unwrap();
        client_for(&server).relocate("t1", due, false, "l7").unwrap();

        mock.assert();
    }

    #[test]
    fn repositions_to_the_bottom() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/1/cards/t1")
            .match_query(Matcher::AllOf(vec![
                authenticated(),
                Matcher::UrlEncoded("pos".into(), "bottom".into()),
            ]))
            .create();

        client_for(&server)
            .reposition("t1", Position::Bottom)
            .unwrap();

        mock.assert();
    }

    #[test]
    fn maps_error_statuses() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/1/boards/board-1/lists")
            .match_query(Matcher::Any)
            .with_status(401)
            .create();

        let result = client_for(&server).lists();
        assert!(matches!(result, Err(RotaError::Status { status: 401, .. })));
    }

    #[test]
    fn rejects_invalid_base_urls() {
        assert!(TrelloBoard::with_base_url(credentials(), "not a url").is_err());
    }
}
