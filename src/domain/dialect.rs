//! Prompt dialect definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emphasis conventions understood by image generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// NovelAI: `{tag}`
    #[serde(rename = "novelai")]
    NovelAi,
    /// Stable Diffusion: `(tag)`
    #[default]
    StableDiffusion,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::NovelAi, Dialect::StableDiffusion];

    /// Character opening one emphasis layer
    pub fn opener(&self) -> char {
        match self {
            Dialect::NovelAi => '{',
            Dialect::StableDiffusion => '(',
        }
    }

    /// Character closing one emphasis layer
    pub fn closer(&self) -> char {
        match self {
            Dialect::NovelAi => '}',
            Dialect::StableDiffusion => ')',
        }
    }

    /// Wrap a value in one layer of this dialect's brackets
    pub fn wrap(&self, value: &str) -> String {
        let mut wrapped = String::with_capacity(value.len() + 2);
        wrapped.push(self.opener());
        wrapped.push_str(value);
        wrapped.push(self.closer());
        wrapped
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::NovelAi => "novelai",
            Dialect::StableDiffusion => "stable-diffusion",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "novelai" => Ok(Dialect::NovelAi),
            "stable-diffusion" => Ok(Dialect::StableDiffusion),
            _ => Err(format!(
                "Invalid dialect: '{}'. Valid dialects are: novelai, stable-diffusion",
                s
            )),
        }
    }
}
