#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use share_tooltip::ShareTooltipConfig;
    use share_web::app::App;
    use share_web::browser::{CONFIG_SCRIPT_ID, config_json};
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{EnvFilter, fmt};

    const DEFAULT_SHARE_CONFIG: &str = "share.toml";

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let conf = get_configuration(None).context("Failed to load Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let share_config_path = std::env::var("SHARE_CONFIG").unwrap_or_else(|_| DEFAULT_SHARE_CONFIG.to_string());
    let share_config = ShareTooltipConfig::load_or_default(std::path::Path::new(&share_config_path))?;
    tracing::info!(
        prompt = %share_config.text.prompt,
        confirmation = %share_config.text.confirmation,
        "share tooltip configured"
    );

    let site_root = leptos_options.site_root.clone();
    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let share_config = share_config.clone();
                move || provide_context(share_config.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                let embedded = config_json(&share_config);
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8" />
                                <meta name="viewport" content="width=device-width, initial-scale=1" />
                                <meta name="description" content="Share a link to this page." />
                                <link rel="stylesheet" href="/pkg/share-web.css" />
                                <script
                                    type="application/json"
                                    id=CONFIG_SCRIPT_ID
                                    inner_html=embedded.clone()
                                ></script>
                                <HydrationScripts options=leptos_options.clone() />
                            </head>
                            <body>
                                <App />
                            </body>
                        </html>
                    }
                }
            },
        )
        .fallback_service(ServeDir::new(&*site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client entry point is `hydrate()` in the lib
}
