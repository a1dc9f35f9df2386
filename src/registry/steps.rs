//! Install and setup steps for each registry entry.
//!
//! Install steps are idempotent: when the toolchain already resolves on the
//! search path nothing is spawned and the step succeeds trivially. On
//! platforms without an automatic install path the step fails with a
//! manual-install hint, which the runner records as an install failure for
//! that technology only.

use crate::error::{EnviroxError, Result};
use crate::registry::StepContext;
use crate::shell::{is_elevated, Executor, HostOs};

/// `sudo ` prefix for privileged package-manager commands, dropped when the
/// process is already running as root.
fn sudo() -> &'static str {
    if is_elevated() {
        ""
    } else {
        "sudo "
    }
}

fn apt_install(packages: &str) -> String {
    let sudo = sudo();
    format!(
        "{sudo}apt-get update && {sudo}apt-get install -y {packages}",
        sudo = sudo,
        packages = packages
    )
}

fn manual_install(tool: &str, url: &str) -> EnviroxError {
    EnviroxError::ManualInstallRequired {
        tool: tool.to_string(),
        url: url.to_string(),
    }
}

fn unsupported(technology: &str) -> EnviroxError {
    EnviroxError::UnsupportedPlatform {
        technology: technology.to_string(),
    }
}

// --- Node.js ---

pub fn node_install(ctx: &StepContext) -> Result<()> {
    if ctx.exec.command_exists("node") {
        tracing::debug!("node already on PATH");
        return Ok(());
    }
    match ctx.os {
        HostOs::Linux => {
            ctx.exec.run(
                ctx.dir,
                "curl -fsSL https://deb.nodesource.com/setup_lts.x | sudo -E bash -",
                "Setting up Node.js repository",
            )?;
            ctx.exec.run(
                ctx.dir,
                &format!("{}apt-get install -y nodejs", sudo()),
                "Installing Node.js",
            )?;
            Ok(())
        }
        HostOs::MacOs => {
            ctx.exec
                .run(ctx.dir, "brew install node", "Installing Node.js")?;
            Ok(())
        }
        HostOs::Windows => Err(manual_install(
            "Node.js",
            "https://nodejs.org/en/download/",
        )),
        HostOs::Unsupported => Err(unsupported("Node.js")),
    }
}

/// Pick the package manager from lockfiles: yarn.lock wins, then bun.lockb,
/// else npm. Bun is the only manager we auto-install, since its lockfile
/// cannot be used by anything else.
pub fn node_setup(ctx: &StepContext) -> Result<()> {
    let manager = if ctx.dir.join("yarn.lock").exists() {
        "yarn"
    } else if ctx.dir.join("bun.lockb").exists() {
        if !ctx.exec.command_exists("bun") {
            ctx.exec.run(
                ctx.dir,
                "curl -fsSL https://bun.sh/install | bash",
                "Installing bun",
            )?;
        }
        "bun"
    } else {
        "npm"
    };

    ctx.exec.run(
        ctx.dir,
        &format!("{} install", manager),
        &format!("Installing Node.js dependencies with {}", manager),
    )?;
    Ok(())
}

// --- Python ---

/// Resolved `python`/`pip` command names for this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PythonCommands {
    pub python: Option<&'static str>,
    pub pip: Option<&'static str>,
}

/// Resolve the python and pip command names, preferring the versioned form
/// (`python3`/`pip3`) everywhere except Windows and falling back to the
/// unversioned one.
pub fn python_commands(os: HostOs, exec: &dyn Executor) -> PythonCommands {
    let (python_pref, pip_pref) = if os == HostOs::Windows {
        (["python", "python3"], ["pip", "pip3"])
    } else {
        (["python3", "python"], ["pip3", "pip"])
    };

    PythonCommands {
        python: python_pref
            .into_iter()
            .find(|cmd| exec.command_exists(cmd)),
        pip: pip_pref.into_iter().find(|cmd| exec.command_exists(cmd)),
    }
}

pub fn python_install(ctx: &StepContext) -> Result<()> {
    let commands = python_commands(ctx.os, ctx.exec);
    if commands.python.is_some() {
        tracing::debug!("python already on PATH");
        return Ok(());
    }
    match ctx.os {
        HostOs::Linux => {
            ctx.exec.run(
                ctx.dir,
                &apt_install("python3 python3-venv python3-pip"),
                "Installing Python",
            )?;
            Ok(())
        }
        HostOs::MacOs => {
            ctx.exec
                .run(ctx.dir, "brew install python3", "Installing Python")?;
            Ok(())
        }
        HostOs::Windows => Err(manual_install(
            "Python",
            "https://www.python.org/downloads/",
        )),
        HostOs::Unsupported => Err(unsupported("Python")),
    }
}

pub fn python_setup(ctx: &StepContext) -> Result<()> {
    let commands = python_commands(ctx.os, ctx.exec);
    let pip = commands.pip.ok_or_else(|| EnviroxError::ToolMissing {
        tool: "pip".to_string(),
        hint: "Please install pip.".to_string(),
    })?;

    ctx.exec.run(
        ctx.dir,
        &format!("{} install -r requirements.txt", pip),
        "Installing Python dependencies",
    )?;
    Ok(())
}

// --- Go ---

pub fn go_install(ctx: &StepContext) -> Result<()> {
    if ctx.exec.command_exists("go") {
        tracing::debug!("go already on PATH");
        return Ok(());
    }
    match ctx.os {
        HostOs::Linux => {
            ctx.exec
                .run(ctx.dir, &apt_install("golang"), "Installing Go")?;
            Ok(())
        }
        HostOs::MacOs => {
            ctx.exec.run(ctx.dir, "brew install go", "Installing Go")?;
            Ok(())
        }
        HostOs::Windows => Err(manual_install("Go", "https://golang.org/dl/")),
        HostOs::Unsupported => Err(unsupported("Go")),
    }
}

pub fn go_setup(ctx: &StepContext) -> Result<()> {
    ctx.exec
        .run(ctx.dir, "go mod tidy", "Setting up Go modules")?;
    Ok(())
}

// --- Docker ---

/// Docker installs are too distro-specific to automate; the build step will
/// surface a clear error if the daemon is absent.
pub fn docker_install(_ctx: &StepContext) -> Result<()> {
    Ok(())
}

pub fn docker_setup(ctx: &StepContext) -> Result<()> {
    ctx.exec.run(
        ctx.dir,
        "docker build -t envirox_app .",
        "Building Docker image",
    )?;
    Ok(())
}

// --- Rust ---

pub fn rust_install(ctx: &StepContext) -> Result<()> {
    if ctx.exec.command_exists("rustc") {
        tracing::debug!("rustc already on PATH");
        return Ok(());
    }
    if ctx.os == HostOs::Unsupported {
        return Err(unsupported("Rust"));
    }
    ctx.exec
        .run(
            ctx.dir,
            "curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh -s -- -y",
            "Installing Rust via rustup",
        )
        .map_err(|_| manual_install("Rust", "https://rustup.rs/"))?;
    Ok(())
}

pub fn rust_setup(ctx: &StepContext) -> Result<()> {
    ctx.exec
        .run(ctx.dir, "cargo build", "Building Rust project")?;
    Ok(())
}

// --- Ruby ---

pub fn ruby_install(ctx: &StepContext) -> Result<()> {
    if !ctx.exec.command_exists("ruby") {
        match ctx.os {
            HostOs::Linux => {
                ctx.exec.run(
                    ctx.dir,
                    &apt_install("ruby-full build-essential zlib1g-dev"),
                    "Installing Ruby",
                )?;
            }
            HostOs::MacOs => {
                ctx.exec
                    .run(ctx.dir, "brew install ruby", "Installing Ruby")?;
            }
            HostOs::Windows => {
                return Err(manual_install("Ruby", "https://rubyinstaller.org/"));
            }
            HostOs::Unsupported => return Err(unsupported("Ruby")),
        }
    }
    // Bundler ships separately from the ruby package
    if !ctx.exec.command_exists("bundle") {
        ctx.exec
            .run(ctx.dir, "gem install bundler", "Installing Bundler")?;
    }
    Ok(())
}

pub fn ruby_setup(ctx: &StepContext) -> Result<()> {
    ctx.exec
        .run(ctx.dir, "bundle install", "Installing Ruby gems")?;
    Ok(())
}

// --- Java (Maven) ---

pub fn maven_install(ctx: &StepContext) -> Result<()> {
    if ctx.exec.command_exists("mvn") && ctx.exec.command_exists("java") {
        return Ok(());
    }
    match ctx.os {
        HostOs::Linux => {
            ctx.exec.run(
                ctx.dir,
                &apt_install("maven default-jdk"),
                "Installing Maven and JDK",
            )?;
            Ok(())
        }
        HostOs::MacOs => {
            ctx.exec.run(
                ctx.dir,
                "brew install maven openjdk",
                "Installing Maven and JDK",
            )?;
            Ok(())
        }
        HostOs::Windows => Err(manual_install(
            "Java (JDK) and Maven",
            "https://maven.apache.org/install.html",
        )),
        HostOs::Unsupported => Err(unsupported("Java (Maven)")),
    }
}

pub fn maven_setup(ctx: &StepContext) -> Result<()> {
    ctx.exec
        .run(ctx.dir, "mvn clean install", "Building project with Maven")?;
    Ok(())
}

// --- Java (Gradle) ---

pub fn gradle_install(ctx: &StepContext) -> Result<()> {
    if ctx.exec.command_exists("gradle") && ctx.exec.command_exists("java") {
        return Ok(());
    }
    match ctx.os {
        HostOs::Linux => {
            ctx.exec.run(
                ctx.dir,
                &apt_install("gradle default-jdk"),
                "Installing Gradle and JDK",
            )?;
            Ok(())
        }
        HostOs::MacOs => {
            ctx.exec.run(
                ctx.dir,
                "brew install gradle openjdk",
                "Installing Gradle and JDK",
            )?;
            Ok(())
        }
        HostOs::Windows => Err(manual_install(
            "Java (JDK) and Gradle",
            "https://gradle.org/install/",
        )),
        HostOs::Unsupported => Err(unsupported("Java (Gradle)")),
    }
}

pub fn gradle_setup(ctx: &StepContext) -> Result<()> {
    ctx.exec
        .run(ctx.dir, "gradle build", "Building project with Gradle")?;
    Ok(())
}

// --- PHP (Composer) ---

pub fn php_install(ctx: &StepContext) -> Result<()> {
    if ctx.exec.command_exists("php") && ctx.exec.command_exists("composer") {
        return Ok(());
    }
    match ctx.os {
        HostOs::Linux => {
            ctx.exec.run(
                ctx.dir,
                &apt_install("php-cli composer"),
                "Installing PHP and Composer",
            )?;
            Ok(())
        }
        HostOs::MacOs => {
            ctx.exec.run(
                ctx.dir,
                "brew install php composer",
                "Installing PHP and Composer",
            )?;
            Ok(())
        }
        HostOs::Windows => Err(manual_install(
            "PHP and Composer",
            "https://getcomposer.org/download/",
        )),
        HostOs::Unsupported => Err(unsupported("PHP")),
    }
}

pub fn php_setup(ctx: &StepContext) -> Result<()> {
    ctx.exec.run(
        ctx.dir,
        "composer install",
        "Installing PHP dependencies with Composer",
    )?;
    Ok(())
}

// --- .NET ---

pub fn dotnet_install(ctx: &StepContext) -> Result<()> {
    if ctx.exec.command_exists("dotnet") {
        return Ok(());
    }
    match ctx.os {
        // .NET install paths vary by distro; point at the official docs
        HostOs::Linux | HostOs::Windows => Err(manual_install(
            ".NET SDK",
            "https://dotnet.microsoft.com/en-us/download",
        )),
        HostOs::MacOs => {
            ctx.exec.run(
                ctx.dir,
                "brew install --cask dotnet",
                "Installing .NET SDK",
            )?;
            Ok(())
        }
        HostOs::Unsupported => Err(unsupported(".NET")),
    }
}

pub fn dotnet_setup(ctx: &StepContext) -> Result<()> {
    ctx.exec.run(
        ctx.dir,
        "dotnet restore",
        "Restoring .NET project dependencies",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockExecutor;
    use std::fs;
    use tempfile::TempDir;

    fn ctx<'a>(
        dir: &'a std::path::Path,
        os: HostOs,
        exec: &'a MockExecutor,
    ) -> StepContext<'a> {
        StepContext { dir, os, exec }
    }

    #[test]
    fn node_install_is_noop_when_node_present() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["node"]);

        node_install(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.call_count(), 0);
    }

    #[test]
    fn node_install_fails_on_windows_without_node() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::new();

        let err = node_install(&ctx(temp.path(), HostOs::Windows, &exec)).unwrap_err();
        assert!(err.to_string().contains("nodejs.org"));
        assert_eq!(exec.call_count(), 0);
    }

    #[test]
    fn node_install_fails_on_unsupported_platform() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::new();

        let err = node_install(&ctx(temp.path(), HostOs::Unsupported, &exec)).unwrap_err();
        assert!(matches!(err, EnviroxError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn node_setup_prefers_yarn_lockfile() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();
        // yarn wins even when a bun lockfile is also present
        fs::write(temp.path().join("bun.lockb"), "").unwrap();
        let exec = MockExecutor::with_tools(&["yarn"]);

        node_setup(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.commands(), vec!["yarn install"]);
    }

    #[test]
    fn node_setup_installs_bun_when_lockfile_present_and_bun_missing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bun.lockb"), "").unwrap();
        let exec = MockExecutor::new();

        node_setup(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        let commands = exec.commands();
        assert_eq!(commands.len(), 2);
        assert!(commands[0].contains("bun.sh/install"));
        assert_eq!(commands[1], "bun install");
    }

    #[test]
    fn node_setup_skips_bun_install_when_bun_present() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bun.lockb"), "").unwrap();
        let exec = MockExecutor::with_tools(&["bun"]);

        node_setup(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.commands(), vec!["bun install"]);
    }

    #[test]
    fn node_setup_defaults_to_npm() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::new();

        node_setup(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.commands(), vec!["npm install"]);
    }

    #[test]
    fn python_commands_prefer_versioned_names() {
        let exec = MockExecutor::with_tools(&["python3", "pip3", "python", "pip"]);
        let commands = python_commands(HostOs::Linux, &exec);
        assert_eq!(commands.python, Some("python3"));
        assert_eq!(commands.pip, Some("pip3"));
    }

    #[test]
    fn python_commands_fall_back_to_unversioned() {
        let exec = MockExecutor::with_tools(&["python", "pip"]);
        let commands = python_commands(HostOs::Linux, &exec);
        assert_eq!(commands.python, Some("python"));
        assert_eq!(commands.pip, Some("pip"));
    }

    #[test]
    fn python_commands_prefer_unversioned_on_windows() {
        let exec = MockExecutor::with_tools(&["python", "python3", "pip", "pip3"]);
        let commands = python_commands(HostOs::Windows, &exec);
        assert_eq!(commands.python, Some("python"));
        assert_eq!(commands.pip, Some("pip"));
    }

    #[test]
    fn python_install_is_noop_when_python_present() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["python3"]);

        python_install(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.call_count(), 0);
    }

    #[test]
    fn python_setup_errors_without_pip() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["python3"]);

        let err = python_setup(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap_err();
        assert!(matches!(err, EnviroxError::ToolMissing { .. }));
        assert_eq!(exec.call_count(), 0);
    }

    #[test]
    fn python_setup_uses_resolved_pip() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["python3", "pip3"]);

        python_setup(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.commands(), vec!["pip3 install -r requirements.txt"]);
    }

    #[test]
    fn go_install_is_noop_when_go_present() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["go"]);

        go_install(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.call_count(), 0);
    }

    #[test]
    fn go_install_uses_apt_on_linux() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::new();

        go_install(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        let commands = exec.commands();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].contains("apt-get install -y golang"));
    }

    #[test]
    fn go_setup_runs_mod_tidy() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["go"]);

        go_setup(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.commands(), vec!["go mod tidy"]);
    }

    #[test]
    fn docker_install_spawns_nothing() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::new();

        docker_install(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.call_count(), 0);
    }

    #[test]
    fn docker_setup_builds_image() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::new();

        docker_setup(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.commands(), vec!["docker build -t envirox_app ."]);
    }

    #[test]
    fn rust_install_is_noop_when_rustc_present() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["rustc"]);

        rust_install(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.call_count(), 0);
    }

    #[test]
    fn rust_install_failure_maps_to_manual_hint() {
        let temp = TempDir::new().unwrap();
        let mut exec = MockExecutor::new();
        exec.fail_matching("rustup");

        let err = rust_install(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap_err();
        assert!(err.to_string().contains("rustup.rs"));
    }

    #[test]
    fn ruby_install_adds_bundler_when_missing() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["ruby"]);

        ruby_install(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.commands(), vec!["gem install bundler"]);
    }

    #[test]
    fn ruby_install_is_noop_when_ruby_and_bundler_present() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["ruby", "bundle"]);

        ruby_install(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.call_count(), 0);
    }

    #[test]
    fn maven_install_requires_both_mvn_and_java() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["mvn"]);

        maven_install(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        let commands = exec.commands();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].contains("maven default-jdk"));
    }

    #[test]
    fn gradle_setup_runs_build() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["gradle", "java"]);

        gradle_setup(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.commands(), vec!["gradle build"]);
    }

    #[test]
    fn php_setup_runs_composer_install() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["php", "composer"]);

        php_setup(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.commands(), vec!["composer install"]);
    }

    #[test]
    fn dotnet_install_fails_on_linux_without_dotnet() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::new();

        let err = dotnet_install(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap_err();
        assert!(err.to_string().contains("dotnet.microsoft.com"));
    }

    #[test]
    fn dotnet_install_uses_brew_cask_on_macos() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::new();

        dotnet_install(&ctx(temp.path(), HostOs::MacOs, &exec)).unwrap();
        assert_eq!(exec.commands(), vec!["brew install --cask dotnet"]);
    }

    #[test]
    fn dotnet_setup_runs_restore() {
        let temp = TempDir::new().unwrap();
        let exec = MockExecutor::with_tools(&["dotnet"]);

        dotnet_setup(&ctx(temp.path(), HostOs::Linux, &exec)).unwrap();
        assert_eq!(exec.commands(), vec!["dotnet restore"]);
    }
}
