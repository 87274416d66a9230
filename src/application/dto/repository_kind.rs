use serde::{Deserialize, Serialize};

/// Remote repositories the mapper can list dependencies from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoryKind {
    MavenCentral,
    Google,
}

impl std::str::FromStr for RepositoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maven-central" | "mavencentral" | "central" => Ok(RepositoryKind::MavenCentral),
            "google" => Ok(RepositoryKind::Google),
            _ => Err(format!(
                "Invalid repository: {}. Valid values are: maven-central, google",
                s
            )),
        }
    }
}

impl std::fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryKind::MavenCentral => write!(f, "maven-central"),
            RepositoryKind::Google => write!(f, "google"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_repository_kind_from_str() {
        assert_eq!(
            RepositoryKind::from_str("maven-central").unwrap(),
            RepositoryKind::MavenCentral
        );
        assert_eq!(
            RepositoryKind::from_str("mavenCentral").unwrap(),
            RepositoryKind::MavenCentral
        );
        assert_eq!(RepositoryKind::from_str("Google").unwrap(), RepositoryKind::Google);
        assert!(RepositoryKind::from_str("mvnrepository").is_err());
    }

    #[test]
    fn test_repository_kind_deserialize() {
        let kinds: Vec<RepositoryKind> =
            serde_yaml_ng::from_str("- maven-central\n- google\n").unwrap();
        assert_eq!(kinds, vec![RepositoryKind::MavenCentral, RepositoryKind::Google]);
    }
}
