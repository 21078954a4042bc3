//! Build-plugin collection and the plugin-to-repository lookup table.
//!
//! Plugins applied to a build are not dependencies: they never show up in
//! `dependency:list` output, and their POMs frequently point at a parent
//! aggregator rather than their own repository. So they get their own small
//! resolution step - an explicit lookup table from plugin identifier
//! (`groupId:artifactId`) to repository, with a namespace fallback for the
//! plugins Maven itself ships.
//!
//! The set of "applied" plugins is read from the project's own `pom.xml`:
//! every `<plugin>` declared under `<build><plugins>`. Declarations under
//! `<pluginManagement>` only pin versions and are not traversed. A plugin
//! declared without a `<groupId>` gets `org.apache.maven.plugins`, the same
//! default Maven applies.

use anyhow::Result;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;
use std::path::Path;

use crate::constants::DEFAULT_PLUGIN_GROUP;
use crate::core::{RepoRef, ThanksError};

/// Namespace whose plugins all live in the Maven monorepo family.
const APACHE_MAVEN_NAMESPACE: &str = "org.apache.maven";

/// Catch-all repository for plugins under [`APACHE_MAVEN_NAMESPACE`].
const APACHE_MAVEN_REPO: &str = "apache/maven";

/// Lookup table from plugin identifier to repository reference.
///
/// The table is an explicit value rather than buried literals so callers
/// can swap in their own mapping via [`PluginRepos::new`] without touching
/// the resolution call sites. [`PluginRepos::default`] carries the builtin
/// entries for widely used plugins.
pub struct PluginRepos {
    exact: HashMap<String, RepoRef>,
}

impl Default for PluginRepos {
    fn default() -> Self {
        let entries = [
            ("org.springframework.boot:spring-boot-maven-plugin", "spring-projects/spring-boot"),
            ("com.github.spotbugs:spotbugs-maven-plugin", "spotbugs/spotbugs-maven-plugin"),
            ("org.jetbrains.kotlin:kotlin-maven-plugin", "JetBrains/kotlin"),
            ("com.diffplug.spotless:spotless-maven-plugin", "diffplug/spotless"),
            ("org.graalvm.buildtools:native-maven-plugin", "graalvm/native-build-tools"),
            ("io.quarkus:quarkus-maven-plugin", "quarkusio/quarkus"),
            ("org.jacoco:jacoco-maven-plugin", "jacoco/jacoco"),
            ("org.codehaus.mojo:versions-maven-plugin", "mojohaus/versions"),
        ];
        Self::new(
            entries
                .into_iter()
                .map(|(id, repo)| (id.to_string(), RepoRef::new(repo)))
                .collect(),
        )
    }
}

impl PluginRepos {
    /// Build a table from an explicit mapping.
    #[must_use]
    pub fn new(exact: HashMap<String, RepoRef>) -> Self {
        Self { exact }
    }

    /// Resolve a plugin identifier to a repository reference.
    ///
    /// Exact entries win; identifiers under the `org.apache.maven`
    /// namespace fall back to the `apache/maven` catch-all; everything else
    /// yields nothing.
    #[must_use]
    pub fn resolve(&self, plugin_id: &str) -> Option<RepoRef> {
        if let Some(repo) = self.exact.get(plugin_id) {
            return Some(repo.clone());
        }
        if plugin_id.starts_with(APACHE_MAVEN_NAMESPACE) {
            return Some(RepoRef::new(APACHE_MAVEN_REPO));
        }
        None
    }
}

/// Collect `groupId:artifactId` identifiers of plugins declared in a POM.
pub async fn declared_plugins(pom_path: &Path) -> Result<Vec<String>> {
    let xml = tokio::fs::read_to_string(pom_path).await?;
    parse_declared_plugins(&xml)
}

/// Parse plugin declarations out of POM XML.
///
/// Walks the element stack looking for `build/plugins/plugin` paths; the
/// suffix match keeps `pluginManagement` (and a plugin's own nested
/// `<configuration>` elements) out of the result.
pub fn parse_declared_plugins(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<String> = Vec::new();
    let mut plugins = Vec::new();
    let mut group: Option<String> = None;
    let mut artifact: Option<String> = None;

    loop {
        match reader.read_event().map_err(|e| ThanksError::DescriptorParseError {
            reason: e.to_string(),
        })? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                stack.push(name);
                if stack_ends_with(&stack, &["build", "plugins", "plugin"]) {
                    group = None;
                    artifact = None;
                }
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(|e| ThanksError::DescriptorParseError {
                    reason: e.to_string(),
                })?;
                if stack_ends_with(&stack, &["build", "plugins", "plugin", "groupId"]) {
                    group = Some(text.trim().to_string());
                } else if stack_ends_with(&stack, &["build", "plugins", "plugin", "artifactId"]) {
                    artifact = Some(text.trim().to_string());
                }
            }
            Event::End(_) => {
                if stack_ends_with(&stack, &["build", "plugins", "plugin"]) {
                    if let Some(artifact_id) = artifact.take() {
                        let group_id =
                            group.take().unwrap_or_else(|| DEFAULT_PLUGIN_GROUP.to_string());
                        plugins.push(format!("{group_id}:{artifact_id}"));
                    }
                }
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(plugins)
}

fn stack_ends_with(stack: &[String], suffix: &[&str]) -> bool {
    stack.len() >= suffix.len()
        && stack[stack.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(a, b)| a == b)
}
