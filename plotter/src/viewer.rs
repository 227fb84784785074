use anyhow::Context;
use std::path::Path;
use std::process::Command;

/// Hands a saved image to the platform's default viewer without waiting for it.
pub fn show(path: &Path) -> anyhow::Result<()> {
    let mut command = viewer_command(path);
    command
        .spawn()
        .with_context(|| format!("opening {} in the image viewer", path.display()))?;
    Ok(())
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_command_passes_image_path() {
        let command = viewer_command(Path::new("out/run.tiff"));
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.last().unwrap().to_str(), Some("out/run.tiff"));
    }
}
