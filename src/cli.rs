use clap::Parser;

use crate::application::dto::{OutputFormat, RepositoryKind};
use crate::dependency_mapping::services::CollisionPolicy;

/// Map Maven dependency notations to nested, dot-navigable generated constants
#[derive(Parser, Debug)]
#[command(name = "deps-mapper")]
#[command(version)]
#[command(
    about = "Map Maven dependency notations to nested, dot-navigable generated constants",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Config file (defaults to deps-mapper.config.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: rust, java or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output directory for the generated file
    #[arg(short, long = "output", value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Name of the generated file (defaults per format)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Name of the outermost generated class
    #[arg(long = "root-class", value_name = "NAME")]
    pub root_class: Option<String>,

    /// Dependency notation to map, e.g. "com.squareup.okio:okio"
    /// Can be specified multiple times
    #[arg(short, long = "dependency", value_name = "NOTATION")]
    pub dependencies: Vec<String>,

    /// Remote group whose artifacts are fetched and mapped
    /// Can be specified multiple times
    #[arg(short, long = "group", value_name = "GROUP")]
    pub groups: Vec<String>,

    /// Also fetch groups nested under the --group values
    #[arg(long)]
    pub recursive: bool,

    /// Repository to fetch remote groups from: maven-central or google
    /// Can be specified multiple times
    #[arg(short, long = "repository", value_name = "REPOSITORY")]
    pub repositories: Vec<RepositoryKind>,

    /// Exclude notations matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "*:*-debug" -e "com.example:*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Print the generated source to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// What to do when two dependencies get the same name: fail or last-write-wins
    #[arg(long)]
    pub collision_policy: Option<CollisionPolicy>,

    /// Fail instead of warning when a remote group cannot be fetched
    #[arg(long)]
    pub fail_on_fetch_error: bool,

    /// Package declaration for Java output
    #[arg(long)]
    pub java_package: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parses process arguments, leaving the exit decision to the caller
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["deps-mapper"]).unwrap();
        assert!(args.path.is_none());
        assert!(args.format.is_none());
        assert!(args.dependencies.is_empty());
        assert!(!args.stdout);
        assert!(!args.recursive);
        assert!(args.collision_policy.is_none());
    }

    #[test]
    fn test_parse_repeated_options() {
        let args = Args::try_parse_from([
            "deps-mapper",
            "-d",
            "com.squareup.okio:okio",
            "--dependency",
            "io.ktor:ktor-io",
            "-g",
            "androidx.compose",
            "--recursive",
            "-r",
            "google",
            "-r",
            "maven-central",
            "-e",
            "*:*-debug",
        ])
        .unwrap();

        assert_eq!(args.dependencies, vec!["com.squareup.okio:okio", "io.ktor:ktor-io"]);
        assert_eq!(args.groups, vec!["androidx.compose"]);
        assert!(args.recursive);
        assert_eq!(
            args.repositories,
            vec![RepositoryKind::Google, RepositoryKind::MavenCentral]
        );
        assert_eq!(args.exclude, vec!["*:*-debug"]);
    }

    #[test]
    fn test_parse_typed_values() {
        let args = Args::try_parse_from([
            "deps-mapper",
            "--format",
            "JAVA",
            "--collision-policy",
            "last-write-wins",
            "--root-class",
            "Deps",
            "--java-package",
            "com.example",
            "--stdout",
        ])
        .unwrap();

        assert_eq!(args.format, Some(OutputFormat::Java));
        assert_eq!(args.collision_policy, Some(CollisionPolicy::LastWriteWins));
        assert_eq!(args.root_class.as_deref(), Some("Deps"));
        assert_eq!(args.java_package.as_deref(), Some("com.example"));
        assert!(args.stdout);
    }

    #[test]
    fn test_parse_invalid_format() {
        let result = Args::try_parse_from(["deps-mapper", "--format", "kotlin"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid format"));
    }

    #[test]
    fn test_parse_invalid_repository() {
        assert!(Args::try_parse_from(["deps-mapper", "-r", "jcenter"]).is_err());
    }
}
