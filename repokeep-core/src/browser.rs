//! Platform browser launcher

use std::process::Command;

use crate::{Error, Result};

/// Open `url` in the platform web browser
///
/// The opener is spawned and not waited on. Operating systems without a
/// known opener report [`Error::UnsupportedPlatform`] before anything is
/// invoked.
pub fn open_browser(url: &str) -> Result<()> {
    let (program, args): (&str, Vec<&str>) = match std::env::consts::OS {
        "linux" => ("xdg-open", vec![url]),
        "windows" => ("rundll32", vec!["url.dll,FileProtocolHandler", url]),
        "macos" => ("open", vec![url]),
        os => {
            return Err(Error::UnsupportedPlatform { os: os.to_string() });
        }
    };

    Command::new(program)
        .args(&args)
        .spawn()
        .map_err(|e| Error::Process {
            command: format!("{} {}", program, args.join(" ")),
            reason: e.to_string(),
        })?;

    Ok(())
}
