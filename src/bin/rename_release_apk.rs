use tara_web::packaging::{AndroidRelease, DEFAULT_OUTPUTS_DIR};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "tara_web=info".into()))
        .init();

    let outputs_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUTS_DIR.to_string());
    let release = AndroidRelease::new(outputs_dir);

    match release.finalize()? {
        Some(path) => println!("{}", path.display()),
        None => eprintln!("{} not found", release.source_apk().display()),
    }
    Ok(())
}
