//! adgorithm web client - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adgorithm_web::runner::{config::RunnerConfig, run, RunnerDeps};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env file is normal
        dotenvy::dotenv().ok();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "adgorithm_web=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting adgorithm");

    let platform = adgorithm_web::infrastructure::platform::create_platform();

    #[allow(unused_mut)]
    let mut config = RunnerConfig::from_env();

    // Browsers have no env; pick the shell from the viewport instead
    #[cfg(target_arch = "wasm32")]
    {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);

        config.shell = if width < 768.0 {
            adgorithm_web::runner::config::ShellKind::Mobile
        } else {
            adgorithm_web::runner::config::ShellKind::Desktop
        };
    }

    run(RunnerDeps { platform, config });
}
