use env_logger::Env;

/// Initialize the global logger.
///
/// Defaults to `info` for this crate and `warn` elsewhere; `RUST_LOG`
/// overrides both.
pub fn init_logging() {
    let env = Env::default().default_filter_or("warn,resume_editor=info,ResumeEditor=info");
    // A second init (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
