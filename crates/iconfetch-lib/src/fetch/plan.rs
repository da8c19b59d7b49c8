use crate::error::IconFetchError;
use crate::manifest::{Collection, Manifest};
use url::Url;

use super::types::FetchItem;

/// Parses a base URL that icon identifiers can be appended to.
pub fn parse_base_url(base_url: &str) -> Result<Url, IconFetchError> {
    let invalid = |reason: String| IconFetchError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query strings and fragments are not supported".to_string()));
    }
    Ok(url)
}

/// Builds `<base_url>/<identifier>`.
///
/// Existing percent-escapes in the identifier are kept as-is; only characters that
/// cannot appear in a path (spaces, `?`, `#`, ...) are encoded.
pub fn icon_url(base_url: &Url, identifier: &str) -> Result<Url, IconFetchError> {
    if base_url.cannot_be_a_base() {
        return Err(IconFetchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }
    let mut url = base_url.clone();
    let path = format!("{}/{}", base_url.path().trim_end_matches('/'), identifier);
    url.set_path(&path);
    Ok(url)
}

/// Lists every icon to fetch, in the order it will be fetched.
pub fn plan(manifest: &Manifest, base_url: &Url) -> Result<Vec<FetchItem>, IconFetchError> {
    [Collection::Support, Collection::Chara]
        .into_iter()
        .flat_map(move |collection| {
            manifest.collection(collection).iter().flat_map(move |record| {
                record
                    .icon
                    .identifiers()
                    .iter()
                    .map(move |identifier| (collection, record, identifier))
            })
        })
        .map(|(collection, record, identifier)| {
            Ok(FetchItem {
                collection,
                identifier: identifier.clone(),
                name: record.name.clone(),
                url: icon_url(base_url, identifier)?,
            })
        })
        .collect()
}
