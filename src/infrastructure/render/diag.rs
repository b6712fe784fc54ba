//! 진단 정보 출력 줄 생성.

use super::style::Palette;
use crate::application::usecases::diag::DiagReport;
use crate::domain::options::DisplayOptions;

pub fn diag_lines(report: &DiagReport, display: &DisplayOptions) -> Vec<String> {
    let p = Palette::new(display.color);
    let mut out = vec![
        p.green("Diagnostic Information"),
        format!(
            "{} {}",
            p.green("Current Date/Time:"),
            report.now.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("{} {}", p.green("Version:"), report.version),
        format!("{} {}", p.green("Platform:"), report.platform),
        p.green("Config file paths:"),
    ];

    for path in &report.searched_paths {
        let loaded = if report.loaded_paths.contains(path) {
            " (loaded)"
        } else {
            ""
        };
        out.push(format!("\t{}{loaded}", path.display()));
    }

    if let Some(uri) = &report.server_uri {
        out.push(format!("{} {uri}", p.green("Server URI:")));
    }
    if let Some(version) = &report.server_version {
        out.push(format!("{} {version}", p.green("Server version:")));
    }

    if let Some(files) = &report.files {
        out.push(p.green("Config file contents:"));
        if files.is_empty() {
            out.push(p.yellow("No config files loaded"));
        }
        for (path, contents) in files {
            out.push(format!("# {}", path.display()));
            match contents {
                Some(text) => out.extend(text.lines().map(ToString::to_string)),
                None => out.push(p.yellow("Could not open config file")),
            }
            out.push(String::new());
        }
    }

    out
}
