fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Relay tokens are read with option_env! in src/config.rs
    for var in [
        "PORTFOLIO_EMAILJS_ENDPOINT",
        "PORTFOLIO_EMAILJS_SERVICE_ID",
        "PORTFOLIO_EMAILJS_TEMPLATE_ID",
        "PORTFOLIO_EMAILJS_USER_ID",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
