//! Site-wide constants shared by the server and the browser build.

/// Every route and asset is served under this prefix.
pub const BASE_PATH: &str = "/career";

/// Lead-capture endpoint the contact form posts to.
pub const CONTACT_ENDPOINT: &str = "https://carrer-api.vercel.app/api/contact";

/// Hosts remote images may be loaded from.
pub const REMOTE_IMAGE_HOSTS: &[&str] = &["hebbkx1anhila5yf.public.blob.vercel-storage.com"];

/// Prefix a site-relative path with [`BASE_PATH`].
pub fn with_base_path(path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{BASE_PATH}/")
    } else {
        format!("{BASE_PATH}/{path}")
    }
}

/// Whether `url` points at one of the [`REMOTE_IMAGE_HOSTS`].
pub fn is_allowed_image_host(url: &str) -> bool {
    let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    else {
        return false;
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    REMOTE_IMAGE_HOSTS.contains(&host)
}
