pub mod error;
pub mod logging;
pub mod message;
pub mod notify;
pub mod webhook;

use std::env;

/// Outcome of the CI build, as reported by `DRONE_BUILD_STATUS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    Success,
    Failure,
    Error,
    Killed,
    Other(String),
}

impl BuildStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => BuildStatus::Success,
            "failure" => BuildStatus::Failure,
            "error" => BuildStatus::Error,
            "killed" => BuildStatus::Killed,
            other => BuildStatus::Other(other.to_string()),
        }
    }

    /// Returns true only for a successful build; every other status counts as failed.
    pub fn is_success(&self) -> bool {
        matches!(self, BuildStatus::Success)
    }
}

/// Trigger that started the pipeline, as reported by `DRONE_BUILD_EVENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    Push,
    PullRequest,
    Tag,
    Other(String),
}

impl BuildEvent {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "push" => BuildEvent::Push,
            "pull_request" => BuildEvent::PullRequest,
            "tag" => BuildEvent::Tag,
            other => BuildEvent::Other(other.to_string()),
        }
    }
}

/// Facts about the current build, read once from the CI environment.
#[derive(Debug, Clone)]
pub struct BuildFacts {
    pub status: BuildStatus,
    pub event: BuildEvent,
    pub repo: String,
    pub author: String,
    pub author_avatar: String,
    pub branch: String,
    pub source_branch: String,
    pub tag: String,
    pub number: String,
    pub link: String,
}

/// Settings supplied to the plugin through `PLUGIN_*` variables.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    pub webhook: String,
    /// Hex color override; `None` when unset or empty.
    pub color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub plugin: PluginConfig,
    pub build: BuildFacts,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup. Missing keys read as empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();

        let color = Some(get("PLUGIN_COLOR")).filter(|c| !c.is_empty());

        Self {
            plugin: PluginConfig {
                webhook: get("PLUGIN_WEBHOOK"),
                color,
            },
            build: BuildFacts {
                status: BuildStatus::parse(&get("DRONE_BUILD_STATUS")),
                event: BuildEvent::parse(&get("DRONE_BUILD_EVENT")),
                repo: get("DRONE_REPO"),
                author: get("DRONE_COMMIT_AUTHOR"),
                author_avatar: get("DRONE_COMMIT_AUTHOR_AVATAR"),
                branch: get("DRONE_COMMIT_BRANCH"),
                source_branch: get("DRONE_SOURCE_BRANCH"),
                tag: get("DRONE_TAG"),
                number: get("DRONE_BUILD_NUMBER"),
                link: get("DRONE_BUILD_LINK"),
            },
        }
    }
}
