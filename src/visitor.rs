use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use teloxide::types::User;

/// Everything known about the person on the other side of the chat.
/// Fingerprint and IP address are resolved once per session; the visitor
/// id arrives from the backend after the visit is recorded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Visitor {
    pub fingerprint: Option<String>,
    pub ip_address: Option<String>,
    pub visitor_id: Option<String>,
    pub visit_reported: bool,
    pub user_agent: String,
}

/// Derives a stable identifier from the account characteristics Telegram
/// exposes. Heuristic, not unique: good enough to recognize a returning
/// visitor, nothing more. Messages without a sender yield no fingerprint
/// and the dependent flows simply stay idle.
pub fn fingerprint(user: Option<&User>) -> Option<String> {
    let user = user?;

    let mut hasher = Sha256::new();
    hasher.update(user.id.0.to_le_bytes());
    hasher.update([user.is_bot as u8]);
    if let Some(language) = &user.language_code {
        hasher.update(language.as_bytes());
    }

    Some(hex::encode(hasher.finalize()))
}

#[derive(Debug, Deserialize)]
struct IpReply {
    ip: String,
}

/// Asks a public lookup service which address this client appears from.
pub async fn public_ip(http: &reqwest::Client, api_url: &str) -> Result<String, reqwest::Error> {
    let reply: IpReply = http
        .get(api_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(reply.ip)
}

pub fn user_agent() -> String {
    format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

/// Builds the session's `Visitor`. Either identity value can come up
/// empty; dependent flows check for that instead of erroring here.
pub async fn resolve(http: &reqwest::Client, ip_api_url: &str, user: Option<&User>) -> Visitor {
    let fingerprint = fingerprint(user);
    let ip_address = match public_ip(http, ip_api_url).await {
        Ok(ip) => Some(ip),
        Err(err) => {
            log::error!("Error fetching IP address: {}", err);
            None
        }
    };

    Visitor {
        fingerprint,
        ip_address,
        visitor_id: None,
        visit_reported: false,
        user_agent: user_agent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};
    use teloxide::types::UserId;

    fn user(id: u64) -> User {
        User {
            id: UserId(id),
            is_bot: false,
            first_name: "Mark".to_string(),
            last_name: None,
            username: None,
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        }
    }

    #[test]
    fn fingerprint_is_stable_for_the_same_account() {
        assert_eq!(fingerprint(Some(&user(7))), fingerprint(Some(&user(7))));
    }

    #[test]
    fn fingerprint_differs_between_accounts() {
        assert_ne!(fingerprint(Some(&user(7))), fingerprint(Some(&user(8))));
    }

    #[test]
    fn missing_sender_fails_open() {
        assert_eq!(fingerprint(None), None);
    }

    #[test]
    fn ip_reply_parses_the_lookup_format() {
        let reply: IpReply = serde_json::from_str(r#"{"ip": "203.0.113.7"}"#).unwrap();
        assert_eq!(reply.ip, "203.0.113.7");
    }

    #[test]
    fn user_agent_names_the_client() {
        let agent = user_agent();
        assert!(agent.starts_with("portfolio-bot/"));
    }
}
