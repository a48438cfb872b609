//! Persisted theme preference.

use crate::error::StoreError;
use crate::kv::{KeyValueStore, THEME_KEY};
use crate::types::Theme;

/// Read the stored theme. Absent, unreadable, or unrecognised values give
/// [`Theme::Light`].
pub fn load_theme<K: KeyValueStore + ?Sized>(kv: &K) -> Theme {
    match kv.get(THEME_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|err: String| {
            tracing::warn!(error = %err, "stored theme unrecognised; using light");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(err) => {
            tracing::warn!(error = %err, "theme slot unreadable; using light");
            Theme::default()
        }
    }
}

pub fn save_theme<K: KeyValueStore + ?Sized>(kv: &mut K, theme: Theme) -> Result<(), StoreError> {
    kv.set(THEME_KEY, theme.as_str())
}

/// Flip the stored theme and return the new one.
pub fn toggle_theme<K: KeyValueStore + ?Sized>(kv: &mut K) -> Result<Theme, StoreError> {
    let next = load_theme(kv).toggled();
    save_theme(kv, next)?;
    Ok(next)
}
