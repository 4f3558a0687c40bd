mod constants;
pub use constants::{
    ANNOTATION_BUILD_URL, DEFAULT_BUILD_URL_KEYWORDS, DEFAULT_IMAGE_KEYWORDS, POD_API_VERSION,
    POD_KIND, SCHEDULING_HINT_KEY, TEAM_OTHER_VALUE, TEAM_SELF_VALUE,
};

mod map;
pub use map::StringMap;

/// Fields of a JSON object that the typed model does not know about.
///
/// Kept verbatim so that a decoded object serializes back to the same document.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Optional object field that remembers an explicit JSON `null`.
///
/// `None` means the key was absent, `Some(None)` means it was `null`. Both
/// serialize back to what was read.
pub type Nullable<T> = Option<Option<T>>;
