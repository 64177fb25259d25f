//! `RestClient`-backed implementations of the core API traits.
//!
//! Each endpoint only shapes parameters and paths; all envelope handling
//! and error mapping happens in [`RestClient`](crate::rest_client::RestClient).

mod ai;
mod cms;
mod footer;
mod language;
mod product;
mod translation;

pub use ai::RestAiApi;
pub use cms::RestCmsApi;
pub use footer::RestFooterApi;
pub use language::RestLanguageApi;
pub use product::RestProductApi;
pub use translation::RestTranslationApi;

/// Percent-encodes one path segment (language codes, slugs).
pub(crate) fn segment(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            other => encoded.push_str(&format!("%{:02X}", other)),
        }
    }
    encoded
}
