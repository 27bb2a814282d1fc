use leptos::prelude::*;

use crate::config::{is_allowed_image_host, with_base_path};

/// Local paths get the base path prefix; remote URLs pass through only for allow-listed hosts.
pub fn resolve_image_src(src: &str) -> Option<String> {
    if src.starts_with("http://") || src.starts_with("https://") {
        is_allowed_image_host(src).then(|| src.to_string())
    } else {
        Some(with_base_path(src))
    }
}

/// Unoptimized `<img>`; renders nothing for a remote host outside the allow-list.
#[component]
pub fn SiteImage(
    #[prop(into)] src: String,
    alt: &'static str,
    #[prop(optional)] class: Option<&'static str>,
    #[prop(optional)] eager: bool,
) -> impl IntoView {
    let loading = if eager { "eager" } else { "lazy" };

    resolve_image_src(&src).map(|src| {
        view! { <img src=src alt=alt class=class loading=loading/> }
    })
}
