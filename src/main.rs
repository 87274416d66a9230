mod adapters;
mod application;
mod cli;
mod config;
mod dependency_mapping;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use application::dto::{MappingRequest, OutputFormat, RepositoryKind, DEFAULT_ROOT_CLASS_NAME};
use application::factories::{PresenterFactory, PresenterType, RendererFactory, RepositoryFactory};
use application::use_cases::GenerateMappingUseCase;
use cli::Args;
use config::ConfigFile;
use owo_colors::OwoColorize;
use shared::error::{ExitCode, MapperError};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Load configuration: explicit file, or the one found in the project
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => match config::discover_config(&project_path)? {
            Some(config) => {
                if !args.quiet {
                    eprintln!(
                        "📄 Auto-discovered config file: {}",
                        project_path.join(config::CONFIG_FILENAME).display()
                    );
                }
                config
            }
            None => ConfigFile::default(),
        },
    };

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    // Merge CLI options over the config file
    let settings = Settings::merge(args, config);

    // Create adapters (Dependency Injection)
    let repositories = if settings.request.remote_groups.is_empty() {
        Vec::new()
    } else {
        RepositoryFactory::create_all(&settings.repositories)?
    };

    // Execute use case
    let use_case = GenerateMappingUseCase::new(repositories, progress_reporter);
    let response = use_case.execute(settings.request).await?;

    // Display progress message
    if !settings.quiet {
        eprintln!("{}", RendererFactory::progress_message(settings.format));
    }

    // Create renderer using factory
    let renderer = RendererFactory::create(settings.format, settings.java_package.as_deref());
    let rendered = renderer.render(&response.class_spec)?;

    // Present output
    let output_path = if settings.stdout {
        None
    } else {
        let output_dir = match &settings.output_dir {
            Some(dir) => project_path.join(dir),
            None => project_path.clone(),
        };
        let file_name = settings
            .file_name
            .unwrap_or_else(|| renderer.default_file_name(&settings.root_class_name));
        Some(output_dir.join(file_name))
    };

    let presenter_type = match &output_path {
        Some(path) => PresenterType::File(path.clone()),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type).present(&rendered)?;

    if let Some(path) = output_path.filter(|_| !settings.quiet) {
        eprintln!("✅ Output complete: {}", path.display());
    }

    Ok(())
}

/// Effective options after merging CLI arguments over the config file
struct Settings {
    root_class_name: String,
    format: OutputFormat,
    output_dir: Option<String>,
    file_name: Option<String>,
    java_package: Option<String>,
    stdout: bool,
    quiet: bool,
    repositories: Vec<RepositoryKind>,
    request: MappingRequest,
}

impl Settings {
    /// CLI values win over config values; list options are concatenated,
    /// config entries first, so CLI dependencies come last in feed order
    fn merge(args: Args, config: ConfigFile) -> Self {
        let root_class_name = args
            .root_class
            .or(config.root_class_name)
            .unwrap_or_else(|| DEFAULT_ROOT_CLASS_NAME.to_string());

        let (config_repositories, config_groups) = match config.remote {
            Some(remote) => (remote.repositories, remote.groups),
            None => (None, Vec::new()),
        };
        let repositories = if args.repositories.is_empty() {
            config_repositories.unwrap_or_else(|| vec![RepositoryKind::MavenCentral])
        } else {
            args.repositories
        };

        let mut request = MappingRequest::new(root_class_name.as_str())
            .with_dependencies(config.dependencies)
            .with_dependencies(args.dependencies)
            .with_exclude_patterns(config.exclude.into_iter().chain(args.exclude).collect())
            .with_collision_policy(
                args.collision_policy
                    .or(config.collision_policy)
                    .unwrap_or_default(),
            )
            .with_fail_on_fetch_error(
                args.fail_on_fetch_error || config.fail_on_fetch_error.unwrap_or(false),
            );

        for group in config_groups {
            request = request.with_remote_group(group.group.trim(), group.recursive);
        }
        for group in &args.groups {
            request = request.with_remote_group(group.trim(), args.recursive);
        }
        for (notation, path) in config.mappings {
            request = request.with_mapping(notation, path);
        }
        if let Some(formatting) = &config.formatting {
            request = request.with_formatter(formatting.to_formatter());
        }

        Self {
            root_class_name,
            format: args.format.or(config.format).unwrap_or_default(),
            output_dir: args.output_dir.or(config.output_dir),
            file_name: args.file_name.or(config.file_name),
            java_package: args.java_package.or(config.java_package),
            stdout: args.stdout,
            quiet: args.quiet,
            repositories,
            request,
        }
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(MapperError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| MapperError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(MapperError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(MapperError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
