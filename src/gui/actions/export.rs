// src/gui/actions/export.rs
use std::path::{Path, PathBuf};

use crate::file::normalize_separators;
use crate::gui::{app::App, progress::GuiProgress};
use crate::runner;

/// Write every table (unfiltered) plus the enabled reports to the output folder.
pub fn export(app: &mut App) {
    let out_text = normalize_separators(&app.state.gui.out_dir_text);
    app.state.options.export.set_out_dir(&out_text);
    logf!("Export: Out dir set → {}", app.state.options.export.out_dir().display());

    let Some(analysis) = &app.analysis else {
        app.status("Nothing to export (run ANALYZE first)");
        logd!("Export: Clicked, but there's no analysis");
        return;
    };

    let mut prog = GuiProgress::new(app.status.clone());
    match runner::export_all(
        analysis,
        &app.state.options.export,
        app.state.options.analysis.top_n,
        &mut prog,
    ) {
        Ok(paths) => {
            logf!("Export: OK count={}", paths.len());
            app.status(format!(
                "Exported {} file(s) to {}",
                paths.len(),
                app.state.options.export.out_dir().display()
            ));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

/// Open the output folder (or its nearest existing parent) in the system file explorer.
pub fn open_output_folder(app: &App) {
    let folder = find_nearest_existing_parent(app.state.options.export.out_dir());

    let absolute_folder = match std::fs::canonicalize(&folder) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        logf!("Opened folder: {}", absolute_folder.display());
    }
}

fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "linux")]
    let program = "xdg-open";
    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    return Err(s!("Opening folders not supported on this platform"));

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        std::process::Command::new(program)
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn {}: {}", program, e))?;
        Ok(())
    }
}
