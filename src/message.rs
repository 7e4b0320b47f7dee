//! Build notification message assembly

use crate::{BuildEvent, BuildFacts, BuildStatus, Settings};

pub const COLOR_SUCCESS: u32 = 0x1AC600;
pub const COLOR_FAILURE: u32 = 0xFF3232;
pub const COLOR_PENDING: u32 = 0xFFD930;

const MAX_COLOR: u32 = 0xFFFFFF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAuthor {
    pub name: String,
    pub avatar_url: String,
}

/// A rendered build notification, ready to be wrapped into a webhook payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub title: String,
    pub description: String,
    pub link: String,
    pub color: u32,
    pub author: MessageAuthor,
}

/// Picks the embed color.
///
/// An override that parses as hex once every `#` is removed and fits in 24 bits wins.
/// Anything else falls back to the status palette without reporting an error.
pub fn resolve_color(color_override: Option<&str>, status: &BuildStatus) -> u32 {
    if let Some(raw) = color_override {
        let hex = raw.replace('#', "");
        if let Ok(color) = u32::from_str_radix(&hex, 16) {
            if color <= MAX_COLOR {
                return color;
            }
        }
    }

    match status {
        BuildStatus::Success => COLOR_SUCCESS,
        BuildStatus::Failure | BuildStatus::Error | BuildStatus::Killed => COLOR_FAILURE,
        BuildStatus::Other(_) => COLOR_PENDING,
    }
}

pub fn format_title(build: &BuildFacts) -> String {
    // "succeded" is the wording downstream channels already match on
    let status_word = if build.status.is_success() {
        "succeded"
    } else {
        "failed"
    };
    format!(
        "Build #**{}** on `{}` has {}.",
        build.number, build.repo, status_word
    )
}

/// Describes what triggered the build. Unrecognized events produce an empty string.
pub fn format_description(build: &BuildFacts) -> String {
    match &build.event {
        BuildEvent::Push => format!("**{}** pushed to `{}`.", build.author, build.branch),
        BuildEvent::PullRequest => format!(
            "**{}** opened a pull request from `{}` to `{}`",
            build.author, build.source_branch, build.branch
        ),
        BuildEvent::Tag => format!("**{}** created tag `{}`.", build.author, build.tag),
        BuildEvent::Other(_) => String::new(),
    }
}

pub fn build_message(settings: &Settings) -> Message {
    let build = &settings.build;
    Message {
        title: format_title(build),
        description: format_description(build),
        link: build.link.clone(),
        color: resolve_color(settings.plugin.color.as_deref(), &build.status),
        author: MessageAuthor {
            name: build.author.clone(),
            avatar_url: build.author_avatar.clone(),
        },
    }
}
