//! Local-repository descriptor lookup.
//!
//! Maven stores the POM of every artifact it has resolved under the local
//! repository (`~/.m2/repository` by default), keyed by coordinate:
//!
//! ```text
//! <repo>/org/slf4j/slf4j-api/2.0.13/slf4j-api-2.0.13.pom
//! ```
//!
//! A resolved coordinate whose POM is absent (e.g. an artifact published
//! without one) is simply skipped downstream - no error is raised.

use std::path::{Path, PathBuf};

use crate::maven::MavenCoordinate;

/// Default local repository location (`~/.m2/repository`).
///
/// Returns `None` when the home directory cannot be determined.
#[must_use]
pub fn default_local_repository() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".m2").join("repository"))
}

/// The POM path a coordinate maps to within a local repository.
///
/// Dots in the group id become path separators per the Maven repository
/// layout.
#[must_use]
pub fn pom_path(coordinate: &MavenCoordinate, local_repo: &Path) -> PathBuf {
    let mut path = local_repo.to_path_buf();
    for segment in coordinate.group_id.split('.') {
        path.push(segment);
    }
    path.push(&coordinate.artifact_id);
    path.push(&coordinate.version);
    path.push(format!("{}-{}.pom", coordinate.artifact_id, coordinate.version));
    path
}

/// Locate the descriptor for a coordinate, or `None` if it is not on disk.
#[must_use]
pub fn find_pom(coordinate: &MavenCoordinate, local_repo: &Path) -> Option<PathBuf> {
    let path = pom_path(coordinate, local_repo);
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate() -> MavenCoordinate {
        MavenCoordinate {
            group_id: "org.slf4j".to_string(),
            artifact_id: "slf4j-api".to_string(),
            version: "2.0.13".to_string(),
        }
    }

    #[test]
    fn pom_path_follows_repository_layout() {
        let path = pom_path(&coordinate(), Path::new("/repo"));
        assert_eq!(
            path,
            Path::new("/repo/org/slf4j/slf4j-api/2.0.13/slf4j-api-2.0.13.pom")
        );
    }

    #[test]
    fn find_pom_returns_none_for_missing_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_pom(&coordinate(), dir.path()), None);
    }

    #[test]
    fn find_pom_returns_existing_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let expected = pom_path(&coordinate(), dir.path());
        std::fs::create_dir_all(expected.parent().unwrap()).unwrap();
        std::fs::write(&expected, "<project/>").unwrap();
        assert_eq!(find_pom(&coordinate(), dir.path()), Some(expected));
    }
}
