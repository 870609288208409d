//! Scheduled security updates on Windows via PSWindowsUpdate
//!
//! The PowerShell script is delivered as-is to a temporary `.ps1` file and
//! run once with the execution policy bypassed for that invocation only.

use std::io::Write;

use tempfile::TempPath;

use crate::cmd::CommandRunner;
use crate::error::{Error, Result};
use crate::paths;
use crate::settings::Settings;

const TASK_NAME_PLACEHOLDER: &str = "@TASK_NAME@";

/// Installs PSWindowsUpdate on demand and registers a daily SYSTEM task that
/// installs all pending updates.
pub const UPDATE_SCRIPT: &str = r#"
# Make sure the PSWindowsUpdate module is available
if (-not (Get-Module -ListAvailable -Name PSWindowsUpdate)) {
    try {
        # Install the NuGet package provider non-interactively
        Install-PackageProvider -Name NuGet -MinimumVersion 2.8.5.201 -Force -Scope AllUsers

        # Install the PSWindowsUpdate module non-interactively
        Install-Module -Name PSWindowsUpdate -Force -Scope AllUsers -ErrorAction Stop
    } catch {
        Write-Error "Failed to install the PSWindowsUpdate module or the NuGet provider: $_"
        exit 1
    }
}

Import-Module PSWindowsUpdate

$taskName = "@TASK_NAME@"

if (-not (Get-ScheduledTask -TaskName $taskName -ErrorAction SilentlyContinue)) {
    try {
        $action = New-ScheduledTaskAction -Execute 'PowerShell.exe' -Argument '-NoProfile -WindowStyle Hidden -Command "Import-Module PSWindowsUpdate; Get-WindowsUpdate -Install -AcceptAll"'

        # Daily at 11am
        $trigger = New-ScheduledTaskTrigger -Daily -At 11am

        $principal = New-ScheduledTaskPrincipal -UserId "SYSTEM" -RunLevel Highest

        Register-ScheduledTask -TaskName $taskName -Action $action -Trigger $trigger -Principal $principal -ErrorAction Stop
        Write-Output "Scheduled task '$taskName' created."
    } catch {
        Write-Error "Failed to create the scheduled task: $_"
        exit 1
    }
} else {
    Write-Output "Scheduled task '$taskName' already exists. Nothing to do."
}
"#;

/// Script text with the scheduled task name filled in
pub fn render_script(task_name: &str) -> String {
    UPDATE_SCRIPT.replace(TASK_NAME_PLACEHOLDER, task_name)
}

/// Write the script to a fresh temporary `.ps1` file.
///
/// The file is closed on return and deleted when the returned path drops.
pub fn write_script(content: &str) -> Result<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix(paths::SCRIPT_PREFIX)
        .suffix(".ps1")
        .tempfile()
        .map_err(Error::TempScript)?;

    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(Error::TempScript)?;

    Ok(file.into_temp_path())
}

pub struct WindowsConfigurator<'a> {
    runner: &'a dyn CommandRunner,
    settings: &'a Settings,
}

impl<'a> WindowsConfigurator<'a> {
    pub fn new(runner: &'a dyn CommandRunner, settings: &'a Settings) -> Self {
        Self { runner, settings }
    }

    pub fn configure(&self) -> Result<()> {
        println!("Configuring automatic security updates on Windows...");

        let script = write_script(&render_script(&self.settings.task_name))?;
        let script_path = script.to_string_lossy().into_owned();
        tracing::debug!(script = %script_path, "wrote update script");

        self.runner
            .run(
                "powershell",
                &[
                    "-NoProfile",
                    "-ExecutionPolicy",
                    "Bypass",
                    "-File",
                    script_path.as_str(),
                ],
            )
            .map_err(|e| Error::step("run PowerShell update script", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;

    /// Captures the script file while powershell would be running it
    #[derive(Default)]
    struct ScriptRunner {
        fail: bool,
        args: RefCell<Vec<String>>,
        script: RefCell<Option<(PathBuf, String)>>,
    }

    impl CommandRunner for ScriptRunner {
        fn run(&self, program: &str, args: &[&str]) -> Result<()> {
            assert_eq!(program, "powershell");
            *self.args.borrow_mut() = args.iter().map(|a| a.to_string()).collect();

            let path = PathBuf::from(args[args.len() - 1]);
            let content = fs::read_to_string(&path).unwrap();
            *self.script.borrow_mut() = Some((path, content));

            if self.fail {
                return Err(Error::ExitStatus {
                    program: program.to_string(),
                    code: Some(1),
                });
            }
            Ok(())
        }

        fn exists(&self, _program: &str) -> bool {
            true
        }
    }

    #[test]
    fn script_runs_with_policy_bypass() {
        let runner = ScriptRunner::default();
        let settings = Settings::default();

        WindowsConfigurator::new(&runner, &settings).configure().unwrap();

        let args = runner.args.borrow();
        assert_eq!(
            args[..4],
            ["-NoProfile", "-ExecutionPolicy", "Bypass", "-File"]
        );
        assert!(args[4].ends_with(".ps1"));
    }

    #[test]
    fn script_is_delivered_then_removed() {
        let runner = ScriptRunner::default();
        let settings = Settings::default();

        WindowsConfigurator::new(&runner, &settings).configure().unwrap();

        let (path, content) = runner.script.borrow_mut().take().unwrap();
        assert_eq!(content, render_script("AutomaticSecurityUpdates"));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("update_script_"));
        assert!(!path.exists());
    }

    #[test]
    fn script_is_removed_when_powershell_fails() {
        let runner = ScriptRunner {
            fail: true,
            ..ScriptRunner::default()
        };
        let settings = Settings::default();

        let err = WindowsConfigurator::new(&runner, &settings)
            .configure()
            .unwrap_err();

        assert!(matches!(err.root(), Error::ExitStatus { code: Some(1), .. }));
        let (path, _) = runner.script.borrow_mut().take().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn rendered_script_names_the_task() {
        let script = render_script("NightlyPatches");
        assert!(script.contains("$taskName = \"NightlyPatches\""));
        assert!(!script.contains(TASK_NAME_PLACEHOLDER));
        assert!(script.contains("New-ScheduledTaskPrincipal -UserId \"SYSTEM\""));
        assert!(script.contains("New-ScheduledTaskTrigger -Daily"));
    }

    #[test]
    fn written_script_exists_until_dropped() {
        let script = write_script("Write-Output 'hi'").unwrap();
        let path = script.to_path_buf();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Write-Output 'hi'");
        drop(script);
        assert!(!path.exists());
    }
}
