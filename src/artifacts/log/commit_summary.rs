//! Latest commit of a repository
//!
//! Parses the first commit block of `git log` in its medium format:
//!
//! ```text
//! commit <sha>
//! Merge: <sha> <sha>        (merge commits only)
//! Author: <name> <email>
//! Date:   <weekday> <month> <day> <hh:mm:ss> <year> <offset>
//!
//!     <message>
//! ```

use anyhow::Context;
use chrono::{DateTime, FixedOffset};

pub const SHORT_HASH_LEN: usize = 7;
pub const LOG_DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    hash: String,
    author: String,
    date: DateTime<FixedOffset>,
    message: String,
}

impl CommitSummary {
    pub fn new(
        hash: String,
        author: String,
        date: DateTime<FixedOffset>,
        message: String,
    ) -> Self {
        CommitSummary {
            hash,
            author,
            date,
            message,
        }
    }

    /// Abbreviated hash, the first seven characters of the full one
    pub fn short_hash(&self) -> &str {
        &self.hash
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Most recent commit on the current branch, if there is one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatestCommit {
    Commit(CommitSummary),
    NoCommits,
}

impl LatestCommit {
    pub fn parse(raw_log: &str) -> anyhow::Result<Self> {
        if raw_log.trim().is_empty() {
            return Ok(LatestCommit::NoCommits);
        }

        let mut hash = None;
        let mut author = None;
        let mut date = None;
        let mut message = None;

        for line in raw_log.lines() {
            let mut tokens = line.split_whitespace();
            let Some(first_token) = tokens.next() else {
                continue;
            };

            if date.is_some() {
                message = Some(line.trim().to_string());
                break;
            }

            match first_token {
                "commit" if hash.is_some() => break,
                "commit" => hash = Some(Self::parse_hash(tokens.next())?),
                "Author:" => author = Some(Self::parse_author(tokens.collect())),
                "Date:" => date = Some(Self::parse_date(line)?),
                _ => continue,
            }
        }

        let hash = hash.ok_or_else(|| anyhow::anyhow!("missing commit line"))?;
        let author = author.ok_or_else(|| anyhow::anyhow!("missing Author line"))?;
        let date = date.ok_or_else(|| anyhow::anyhow!("missing Date line"))?;

        Ok(LatestCommit::Commit(CommitSummary::new(
            hash,
            author,
            date,
            message.unwrap_or_default(),
        )))
    }

    fn parse_hash(token: Option<&str>) -> anyhow::Result<String> {
        let hash = token.ok_or_else(|| anyhow::anyhow!("commit line has no hash"))?;

        hash.get(..SHORT_HASH_LEN)
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("commit hash too short: {}", hash))
    }

    // Drops the trailing "<email>" token, keeping the name
    fn parse_author(tokens: Vec<&str>) -> String {
        let name_tokens = match tokens.split_last() {
            Some((last, rest)) if last.starts_with('<') => rest,
            _ => tokens.as_slice(),
        };

        name_tokens.join(" ")
    }

    fn parse_date(line: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        let (_, raw_date) = line
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("malformed Date line: {:?}", line))?;
        let raw_date = raw_date.trim();

        DateTime::parse_from_str(raw_date, LOG_DATE_FORMAT)
            .with_context(|| format!("invalid commit date: {:?}", raw_date))
    }

    pub fn commit(&self) -> Option<&CommitSummary> {
        match self {
            LatestCommit::Commit(commit) => Some(commit),
            LatestCommit::NoCommits => None,
        }
    }
}
