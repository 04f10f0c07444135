//! Slash commands.
//!
//! A line starting with [`COMMAND_PREFIX`] is never sent. The text after the
//! prefix is split on single spaces: the first token names the command and
//! only the second token is used as its argument. Anything after that is
//! ignored.
//!
//! | command | argument | effect |
//! |---|---|---|
//! | `nick` | name | sets the username |
//! | `role` | text | sets the role badge, upper-cased (no argument clears it) |
//! | `color` | `#RRGGBB` | sets the name and role colors |
//! | `nickcolor` | `#RRGGBB` | sets the name color |
//! | `rolecolor` | `#RRGGBB` | sets the role color |
//! | `randomcolor` | | one fresh pale color for name and role |
//!
//! Unknown commands are ignored.

use rand::Rng;
use thiserror::Error;

use crate::UserAttributes;

/// First character of a command line.
pub const COMMAND_PREFIX: char = '/';

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/nick <name>`
    Nick(String),
    /// `/role <text>`
    Role(String),
    /// `/color <hex>`
    Color(String),
    /// `/nickcolor <hex>`
    NickColor(String),
    /// `/rolecolor <hex>`
    RoleColor(String),
    /// `/randomcolor`
    RandomColor,
    /// Unrecognized command name.
    Unknown(String),
}

/// Errors from applying a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Required argument was missing.
    #[error("usage: /{command} <{argument}>")]
    MissingArgument {
        /// Command name.
        command: &'static str,
        /// Argument placeholder.
        argument: &'static str,
    },

    /// Color argument is not `#RRGGBB`.
    #[error("/{command}: invalid color '{value}' (expected #RRGGBB)")]
    InvalidColor {
        /// Command name.
        command: &'static str,
        /// Rejected value.
        value: String,
    },
}

impl Command {
    /// Parse the text following the command prefix.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split(' ');
        let name = tokens.next().unwrap_or_default();
        let arg = tokens.next().unwrap_or_default().to_string();

        match name {
            "nick" => Self::Nick(arg),
            "role" => Self::Role(arg),
            "color" => Self::Color(arg),
            "nickcolor" => Self::NickColor(arg),
            "rolecolor" => Self::RoleColor(arg),
            "randomcolor" => Self::RandomColor,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Apply the command to `attrs`.
    ///
    /// On error `attrs` is left unchanged.
    pub fn apply<R: Rng + ?Sized>(
        self,
        attrs: &mut UserAttributes,
        rng: &mut R,
    ) -> Result<(), CommandError> {
        match self {
            Self::Nick(name) => {
                if name.is_empty() {
                    return Err(CommandError::MissingArgument { command: "nick", argument: "name" });
                }
                attrs.username = name;
            },
            Self::Role(role) => attrs.role = role.to_uppercase(),
            Self::Color(value) => {
                let color = require_color("color", &value)?;
                attrs.username_color.clone_from(&color);
                attrs.role_color = color;
            },
            Self::NickColor(value) => attrs.username_color = require_color("nickcolor", &value)?,
            Self::RoleColor(value) => attrs.role_color = require_color("rolecolor", &value)?,
            Self::RandomColor => {
                let color = pale_color(rng);
                attrs.username_color.clone_from(&color);
                attrs.role_color = color;
            },
            Self::Unknown(name) => {
                tracing::debug!(%name, "ignoring unknown command");
            },
        }
        Ok(())
    }
}

fn require_color(command: &'static str, value: &str) -> Result<String, CommandError> {
    parse_hex_color(value)
        .ok_or_else(|| CommandError::InvalidColor { command, value: value.to_string() })
}

/// Normalize a `#RRGGBB` (or `RRGGBB`) color to upper-case `#RRGGBB`.
///
/// Returns `None` if `value` is not six hex digits.
pub fn parse_hex_color(value: &str) -> Option<String> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("#{}", digits.to_ascii_uppercase()))
    } else {
        None
    }
}

/// Generate a pale color: each channel uniform in `[100, 255]`.
///
/// Pale colors stay legible on dark terminal backgrounds.
pub fn pale_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let r: u8 = rng.random_range(100..=255);
    let g: u8 = rng.random_range(100..=255);
    let b: u8 = rng.random_range(100..=255);
    format!("#{r:02X}{g:02X}{b:02X}")
}
