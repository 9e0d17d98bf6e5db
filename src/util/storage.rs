//! Browser localStorage persistence for the session token pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! `net::http` owns the in-memory pair; this module holds the durable copy
//! that survives reloads. Both halves are written and removed together so a
//! restored session never sees a mismatched pair. SSR and host builds no-op.

use crate::net::http::TokenPair;

#[cfg(feature = "hydrate")]
const ACCESS_TOKEN_KEY: &str = "autoshorts_access_token";
#[cfg(feature = "hydrate")]
const REFRESH_TOKEN_KEY: &str = "autoshorts_refresh_token";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Write both tokens under their fixed keys.
pub(crate) fn persist_tokens(pair: &TokenPair) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.set_item(ACCESS_TOKEN_KEY, &pair.access);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, &pair.refresh);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pair;
    }
}

/// Read the persisted pair; `None` unless both halves are present.
pub(crate) fn read_tokens() -> Option<TokenPair> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let access = storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()?;
        let refresh = storage.get_item(REFRESH_TOKEN_KEY).ok().flatten()?;
        Some(TokenPair { access, refresh })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove both tokens. Idempotent.
pub(crate) fn clear_tokens() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
