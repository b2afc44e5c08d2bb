use ::url::Url;

use crate::error::ClientError;

/// True when `candidate` parses as an absolute URL.
///
/// Pure syntax check; nothing is resolved or contacted.
pub fn validate_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

/// `{collection}/{segment}` with `segment` percent-encoded as a single path
/// segment, so spaces, `/`, `?` and `#` cannot change the request target.
pub fn join_segment(collection: &str, segment: &str) -> Result<String, ClientError> {
    let mut url = Url::parse("http://localhost").map_err(|e| ClientError::Setup(e.to_string()))?;
    url.set_path(collection);
    url.path_segments_mut()
        .map_err(|()| ClientError::Setup(format!("cannot append to path {collection}")))?
        .push(segment);
    Ok(url.path().to_string())
}
