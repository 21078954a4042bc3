//! Maven integration: resolved dependency collection.
//!
//! thanks does not reimplement dependency resolution. It shells out to the
//! system `mvn` (the build tool that owns the resolution algorithm) and
//! parses the output of `dependency:list`, which prints one line per
//! resolved artifact across every module of the build:
//!
//! ```text
//! [INFO]    org.slf4j:slf4j-api:jar:2.0.13:compile
//! [INFO]    com.google.guava:guava:jar:33.0.0-jre:compile -- module com.google.common
//! ```
//!
//! Lines that are not coordinates (section headers, blank separators, build
//! summary) are skipped silently, as are unresolved artifacts - Maven does
//! not list what it could not resolve. This mirrors the pipeline's general
//! stance: resolution gaps are not errors.

pub mod command_builder;

use anyhow::Result;
use std::fmt;
use std::path::Path;

pub use command_builder::{MvnCommand, MvnOutput};

/// Which slice of the resolved graph to scan.
///
/// A single code path parameterized by this enum replaces the two
/// near-duplicate "direct" and "all" variants of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyScope {
    /// Only dependencies declared by the project's own POMs.
    Direct,
    /// The full transitive closure (default).
    Transitive,
}

/// A resolved dependency coordinate: group, artifact, and concrete version.
///
/// Packaging, classifier, and scope are parsed past but not retained - the
/// descriptor lookup only needs these three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenCoordinate {
    /// Group identifier, e.g. `org.slf4j`
    pub group_id: String,
    /// Artifact identifier, e.g. `slf4j-api`
    pub artifact_id: String,
    /// Resolved version, e.g. `2.0.13`
    pub version: String,
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// List the resolved dependencies of the Maven project at `project_dir`.
///
/// Runs `mvn -B dependency:list` (with `-DexcludeTransitive=true` for
/// [`DependencyScope::Direct`]) and parses the coordinates out of the
/// aggregated output. Multi-module builds are covered in the single
/// invocation because Maven emits each module's list in turn.
pub async fn list_dependencies(
    project_dir: &Path,
    scope: DependencyScope,
) -> Result<Vec<MavenCoordinate>> {
    let mut cmd = MvnCommand::new()
        .arg("dependency:list")
        .arg("-DoutputAbsoluteArtifactFilename=false")
        .current_dir(project_dir);
    if scope == DependencyScope::Direct {
        cmd = cmd.arg("-DexcludeTransitive=true");
    }

    let output = cmd.execute().await?;
    let coordinates = parse_dependency_list(&output.stdout);
    tracing::debug!(
        target: "maven",
        "Resolved {} dependency coordinates ({:?} scope)",
        coordinates.len(),
        scope
    );
    Ok(coordinates)
}

/// Parse `dependency:list` output into coordinates, skipping non-matching lines.
pub fn parse_dependency_list(stdout: &str) -> Vec<MavenCoordinate> {
    stdout.lines().filter_map(parse_dependency_line).collect()
}

/// Parse a single output line.
///
/// Coordinate lines have five (`group:artifact:packaging:version:scope`) or
/// six (with a classifier) colon-separated fields. Newer Maven appends a
/// ` -- module <name>` annotation which is stripped first. Anything else -
/// log prefixes aside, that means headers, separators, timestamps - yields
/// `None`.
fn parse_dependency_line(line: &str) -> Option<MavenCoordinate> {
    let line = line.strip_prefix("[INFO]").unwrap_or(line).trim();
    let line = match line.find(" -- module") {
        Some(idx) => line[..idx].trim(),
        None => line,
    };

    let parts: Vec<&str> = line.split(':').collect();
    let (group_id, artifact_id, version) = match parts.as_slice() {
        [group, artifact, _packaging, version, _scope] => (group, artifact, version),
        [group, artifact, _packaging, _classifier, version, _scope] => (group, artifact, version),
        _ => return None,
    };

    // Prose lines can contain the right number of colons; coordinates never
    // contain whitespace in these fields.
    for field in [group_id, artifact_id, version] {
        if field.is_empty() || field.contains(char::is_whitespace) {
            return None;
        }
    }

    Some(MavenCoordinate {
        group_id: (*group_id).to_string(),
        artifact_id: (*artifact_id).to_string(),
        version: (*version).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_coordinate_line() {
        let coords = parse_dependency_list("[INFO]    org.slf4j:slf4j-api:jar:2.0.13:compile\n");
        assert_eq!(
            coords,
            vec![MavenCoordinate {
                group_id: "org.slf4j".to_string(),
                artifact_id: "slf4j-api".to_string(),
                version: "2.0.13".to_string(),
            }]
        );
    }

    #[test]
    fn strips_module_annotation() {
        let coords = parse_dependency_list(
            "[INFO]    com.google.guava:guava:jar:33.0.0-jre:compile -- module com.google.common [auto]",
        );
        assert_eq!(coords.len(), 1);
        assert_eq!(coords[0].version, "33.0.0-jre");
    }

    #[test]
    fn parses_classifier_coordinates() {
        let coords =
            parse_dependency_list("[INFO]    org.openjfx:javafx-base:jar:win:21:compile");
        assert_eq!(coords.len(), 1);
        assert_eq!(coords[0].artifact_id, "javafx-base");
        assert_eq!(coords[0].version, "21");
    }

    #[test]
    fn skips_noise_in_realistic_output() {
        let stdout = "\
[INFO] --- dependency:3.6.1:list (default-cli) @ demo ---
[INFO]
[INFO] The following files have been resolved:
[INFO]    org.slf4j:slf4j-api:jar:2.0.13:compile
[INFO]    com.fasterxml.jackson.core:jackson-databind:jar:2.17.0:compile
[INFO]
[INFO] BUILD SUCCESS
[INFO] Total time:  1.893 s
[INFO] Finished at: 2024-05-01T10:00:00+02:00
";
        let coords = parse_dependency_list(stdout);
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0].group_id, "org.slf4j");
        assert_eq!(coords[1].artifact_id, "jackson-databind");
    }

    #[test]
    fn optional_marker_on_scope_is_tolerated() {
        let coords =
            parse_dependency_list("[INFO]    org.jetbrains:annotations:jar:24.1.0:compile (optional)");
        assert_eq!(coords.len(), 1);
        assert_eq!(coords[0].group_id, "org.jetbrains");
    }

    #[test]
    fn empty_output_yields_no_coordinates() {
        assert!(parse_dependency_list("").is_empty());
        assert!(parse_dependency_list("[INFO]    none\n").is_empty());
    }
}
