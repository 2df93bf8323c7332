//! Init command implementation

use std::fmt::Write as _;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tashkil_core::{DEFAULT_MAX_FILE_SIZE, LinterConfig, REMOVE_LOOSE_DIACRITICS, RuleId};
use tracing::info;

/// Renders a configuration listing every option with its default.
fn default_config() -> String {
    let mut out = String::from("{\n");
    out.push_str("  // Each rule takes true, false, \"error\", \"warning\" or \"off\".\n");
    out.push_str("  \"options\": {\n");
    for rule in RuleId::ALL {
        let _ = writeln!(out, "    // {}", rule.description());
        let _ = writeln!(out, "    \"{}\": \"{}\",", rule.name(), rule.default_severity().as_str());
    }
    out.push_str("    // Attach fixes that delete loose diacritics.\n");
    let _ = writeln!(out, "    \"{}\": true", REMOVE_LOOSE_DIACRITICS);
    out.push_str("  },\n");
    out.push_str("  \"include\": [],\n");
    out.push_str("  \"exclude\": [],\n");
    out.push_str("  \"timings\": false,\n");
    let _ = writeln!(out, "  \"max_file_size\": {}", DEFAULT_MAX_FILE_SIZE);
    out.push_str("}\n");
    out
}

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(LinterConfig::CONFIG_FILES[0]);
    let default_config = default_config();

    loop {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.custom_flags(libc::O_NOFOLLOW);
        }

        match options.open(&config_path) {
            Ok(mut file) => {
                use std::io::Write;
                file.write_all(default_config.as_bytes())
                    .into_diagnostic()?;
                info!("Created {}", config_path.display());
                return Ok(());
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                if !force {
                    return Err(miette::miette!(
                        "Config file already exists. Use --force to overwrite."
                    ));
                }

                match std::fs::remove_file(&config_path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_diagnostic(),
                }
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
}
