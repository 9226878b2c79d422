//! Startup banner for interactive mode.

use crate::config::ClientConfig;

/// Print the startup banner with the backend in use.
pub fn print_banner(config: &ClientConfig) {
    println!("{}", banner_text(config));
}

fn banner_text(config: &ClientConfig) -> String {
    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║        P R O F E S S O R              ║
   ║            R E V I E W S              ║
   ╚═══════════════════════════════════════╝

   version   {}
   backend   {}

   Enter a professor's name to get a summary. `quit` to leave.
"#,
        env!("CARGO_PKG_VERSION"),
        config.base_url,
    )
}
