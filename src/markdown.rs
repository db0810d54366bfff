use crate::{folder, http::Error};
use reqwest::Url;

pub const RAW_CONTENT_BASE_URL: &str = "https://raw.githubusercontent.com";

pub fn raw_url(owner: &str, repo: &str, branch: &str, path: &str) -> Result<Url, Error> {
    let invalid = || Error::InvalidBaseUrl {
        url: RAW_CONTENT_BASE_URL.to_owned(),
    };

    let mut url = Url::parse(RAW_CONTENT_BASE_URL).map_err(|_| invalid())?;

    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend([owner, repo])
        .extend(branch.split('/'))
        .extend(path.split('/'));

    Ok(url)
}

pub fn format_output(name: &str, url: &str) -> String {
    if folder::is_image(name) {
        format!("![{}]({})", name, url)
    } else {
        format!("[{}]({})", name, url)
    }
}
