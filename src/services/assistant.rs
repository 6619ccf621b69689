//! Chat assistant proxy
//!
//! Forwards user messages to the Gemini generateContent endpoint. Any
//! network error or non-2xx reply falls back to a canned response; after
//! three consecutive failures the assistant latches into offline mode and
//! stops issuing network calls until someone toggles it back online.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use rand::seq::SliceRandom;
use reqwest::Client;
use serde_json::json;

use crate::models::AssistantStatus;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Consecutive failures before the assistant latches offline
pub const OFFLINE_THRESHOLD: u32 = 3;

/// Canned replies used whenever the upstream call cannot be made
const FALLBACK_REPLIES: [&str; 7] = [
    "I'm offline right now, but our solar plans typically pay for themselves in 7-10 years.",
    "I can't reach the assistant service at the moment. Try the ROI calculator for a quick estimate.",
    "Connection trouble on my end. Most households cut 20-30% of emissions with the top two recommended actions.",
    "I'm in offline mode. The carbon calculator can give you a full breakdown in under a minute.",
    "Sorry, I'm temporarily unavailable. Verdant's pricing page lists everything included in each tier.",
    "No connection right now. Battery storage pairs well with solar if your rates peak in the evening.",
    "I'm offline, but you can export any calculator result as JSON and share it with our team.",
];

pub struct Assistant {
    pub api_key: String,
    endpoint: String,
    offline: AtomicBool,
    consecutive_failures: AtomicU32,
}

impl Assistant {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            endpoint: GEMINI_ENDPOINT.to_string(),
            offline: AtomicBool::new(false),
            consecutive_failures: AtomicU32::new(0),
        }
    }

    pub fn status(&self) -> AssistantStatus {
        AssistantStatus {
            offline: self.offline.load(Ordering::SeqCst),
            consecutive_failures: self.consecutive_failures.load(Ordering::SeqCst),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    /// Manual recovery; clears the latch and the failure counter
    pub fn set_online(&self) {
        self.offline.store(false, Ordering::SeqCst);
        self.consecutive_failures.store(0, Ordering::SeqCst);
    }

    pub fn record_success(&self) {
        self.consecutive_failures.store(0, Ordering::SeqCst);
    }

    /// Count a failure; the third in a row latches offline mode
    pub fn record_failure(&self) {
        let failures = self.consecutive_failures.fetch_add(1, Ordering::SeqCst) + 1;
        if failures >= OFFLINE_THRESHOLD {
            self.offline.store(true, Ordering::SeqCst);
        }
    }

    fn fallback_reply(&self) -> String {
        let mut rng = rand::thread_rng();
        FALLBACK_REPLIES
            .choose(&mut rng)
            .unwrap_or(&FALLBACK_REPLIES[0])
            .to_string()
    }

    /// The configured key, unless the caller supplied a non-blank override
    fn effective_key<'a>(&'a self, override_key: Option<&'a str>) -> &'a str {
        match override_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => &self.api_key,
        }
    }

    /// Send one message, preferring `key_override` over the configured key.
    /// Offline mode and a missing key both short-circuit to a canned reply
    /// without touching the network.
    pub async fn send(&self, message: &str, key_override: Option<&str>) -> (String, AssistantStatus) {
        let key = self.effective_key(key_override);
        if self.is_offline() || key.is_empty() {
            return (self.fallback_reply(), self.status());
        }

        match self.forward(message, key).await {
            Ok(reply) => {
                self.record_success();
                (reply, self.status())
            }
            Err(err) => {
                println!("assistant upstream failure: {err}");
                self.record_failure();
                (self.fallback_reply(), self.status())
            }
        }
    }

    async fn forward(&self, message: &str, key: &str) -> Result<String, String> {
        let url = format!("{}?key={}", self.endpoint, key);
        let res = Client::new()
            .post(&url)
            .json(&json!({
                "contents": [{ "parts": [{ "text": message }] }]
            }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            return Err(format!("upstream returned {}", res.status()));
        }

        let body: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;
        body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| "upstream response missing candidate text".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_consecutive_failures_latch_offline() {
        let assistant = Assistant::new("key".into());
        assistant.record_failure();
        assistant.record_failure();
        assert!(!assistant.is_offline());
        assistant.record_failure();
        assert!(assistant.is_offline());
        assert_eq!(assistant.status().consecutive_failures, 3);
    }

    #[test]
    fn success_resets_the_failure_streak() {
        let assistant = Assistant::new("key".into());
        assistant.record_failure();
        assistant.record_failure();
        assistant.record_success();
        assistant.record_failure();
        assistant.record_failure();
        // Streak broken, so still online after four total failures
        assert!(!assistant.is_offline());
    }

    #[test]
    fn offline_latch_holds_until_manual_reset() {
        let assistant = Assistant::new("key".into());
        for _ in 0..OFFLINE_THRESHOLD {
            assistant.record_failure();
        }
        assert!(assistant.is_offline());
        // A stray success does not clear the latch
        assistant.record_success();
        assert!(assistant.is_offline());
        assistant.set_online();
        assert!(!assistant.is_offline());
        assert_eq!(assistant.status().consecutive_failures, 0);
    }

    #[tokio::test]
    async fn offline_send_short_circuits_to_a_canned_reply() {
        let assistant = Assistant::new("key".into());
        for _ in 0..OFFLINE_THRESHOLD {
            assistant.record_failure();
        }
        let (reply, status) = assistant.send("hello", None).await;
        assert!(status.offline);
        assert!(FALLBACK_REPLIES.contains(&reply.as_str()));
    }

    #[tokio::test]
    async fn missing_api_key_never_calls_the_network() {
        let assistant = Assistant::new(String::new());
        let (reply, status) = assistant.send("hello", None).await;
        assert!(!status.offline);
        assert!(FALLBACK_REPLIES.contains(&reply.as_str()));
        // Short-circuit path does not count as a failure
        assert_eq!(status.consecutive_failures, 0);
    }

    #[test]
    fn caller_key_overrides_the_configured_key() {
        let assistant = Assistant::new("configured".into());
        assert_eq!(assistant.effective_key(Some("caller")), "caller");
        assert_eq!(assistant.effective_key(Some("   ")), "configured");
        assert_eq!(assistant.effective_key(None), "configured");
    }

    #[tokio::test]
    async fn blank_override_does_not_unlock_a_keyless_assistant() {
        let assistant = Assistant::new(String::new());
        let (reply, status) = assistant.send("hello", Some("   ")).await;
        assert!(FALLBACK_REPLIES.contains(&reply.as_str()));
        assert_eq!(status.consecutive_failures, 0);
    }
}
