use std::collections::HashMap;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use tracing::debug;

/// Client-side string storage, the server's view of the browser's local
/// storage. Writes replace the whole value under a key.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

const COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Storage kept in the browser's cookies. Values are base64url-encoded so JSON
/// survives the cookie grammar; every write becomes a `Set-Cookie` header once
/// the jar is returned from the handler.
#[derive(Debug, Clone)]
pub struct CookieStore {
    jar: CookieJar,
    secure: bool,
}

impl CookieStore {
    pub fn new(jar: CookieJar, secure: bool) -> Self {
        Self { jar, secure }
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        let raw = self.jar.get(key)?.value();
        let decoded = URL_SAFE_NO_PAD
            .decode(raw.as_bytes())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok());
        if decoded.is_none() {
            debug!(key, "cookie value is not base64url text; ignoring");
        }
        decoded
    }

    fn set(&mut self, key: &str, value: String) {
        let cookie = Cookie::build((key.to_string(), URL_SAFE_NO_PAD.encode(value.as_bytes())))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::days(COOKIE_MAX_AGE_DAYS))
            .build();
        self.jar = self.jar.clone().add(cookie);
    }

    fn remove(&mut self, key: &str) {
        self.jar = self
            .jar
            .clone()
            .remove(Cookie::build(key.to_string()).path("/"));
    }
}
