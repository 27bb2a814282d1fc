use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::config::BASE_PATH;
use crate::models::content::{keywords_meta, SITE_DESCRIPTION, SITE_TITLE};
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/career.css"/>
        <Title text=SITE_TITLE/>
        <Meta name="title" content=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>
        <Meta name="keywords" content=keywords_meta()/>
        <Meta property="og:title" content=SITE_TITLE/>
        <Meta property="og:description" content=SITE_DESCRIPTION/>
        <Meta property="og:type" content="website"/>
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=SITE_TITLE/>
        <Meta name="twitter:description" content=SITE_DESCRIPTION/>

        <Router base=BASE_PATH>
            <main>
                <Routes fallback=|| view! { <h1>"404 - ページが見つかりません"</h1> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
