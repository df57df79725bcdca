use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::ui::auth::SessionState;
use crate::ui::{SignUpForm, SnackbarHost, provide_snackbar_context, provide_user_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Page-wide session and notification state
    let session = provide_user_context();
    provide_snackbar_context();

    // Whether the sign-up panel is open
    let auth_open = RwSignal::new(false);

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/vestra.css"/>

        // sets the document title
        <Title text="Vestra - Fashion Boutique"/>

        <header class="site-header">
            <a class="brand" href="/">"Vestra"</a>
            <nav class="site-nav">
                {move || match session.state.get() {
                    SessionState::SignedIn(active) => {
                        view! {
                            <span class="account-greeting">
                                {format!("Hi, {}", active.user.given_name())}
                            </span>
                        }
                            .into_any()
                    }
                    SessionState::SignedOut => {
                        view! {
                            <button
                                class="account-button"
                                on:click=move |_| auth_open.set(true)
                            >
                                "Create account"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </nav>
        </header>

        <main class="storefront">
            <section class="hero">
                <p class="hero-kicker">"Autumn 2026 collection"</p>
                <h1>"New season, new silhouettes"</h1>
                <p class="hero-copy">
                    "Considered womenswear in natural fabrics, cut to last beyond the season."
                </p>
                <button class="hero-cta" on:click=move |_| auth_open.set(true)>
                    "Join Vestra"
                </button>
            </section>
        </main>

        <Show when=move || auth_open.get()>
            <SignUpForm modal=true on_close=Callback::new(move |_: ()| auth_open.set(false)) />
        </Show>

        <SnackbarHost/>
    }
}
