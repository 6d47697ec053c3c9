use crate::artifacts::status::file_change::{ModifiedFile, UNTRACKED_CODE};
use regex::Regex;
use std::collections::BTreeSet;

pub const AHEAD_REGEX: &str = r"ahead (?:of '[^']*' by )?(\d+)";
pub const BEHIND_REGEX: &str = r"behind (?:'[^']*' by )?(\d+)";
pub const DIVERGED_REGEX: &str = r"have (\d+) and (\d+) different commits? each";

const BRANCH_HEADER_PREFIX: &str = "## ";
const UP_TO_DATE_PHRASES: [&str; 2] = ["up to date", "up-to-date"];
const CLEAN_TREE_PHRASE: &str = "nothing to commit";
const RENAME_CODES: [char; 2] = ['R', 'C'];
const RENAME_SEPARATOR: &str = " -> ";

/// Commits the local branch has that its upstream lacks, and the reverse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Divergence {
    pub ahead: usize,
    pub behind: usize,
}

impl Divergence {
    pub fn parse(raw_status: &str) -> anyhow::Result<Self> {
        if let Some(caps) = Regex::new(DIVERGED_REGEX)?.captures(raw_status) {
            return Ok(Divergence {
                ahead: caps[1].parse()?,
                behind: caps[2].parse()?,
            });
        }

        let ahead = match Regex::new(AHEAD_REGEX)?.captures(raw_status) {
            Some(caps) => caps[1].parse()?,
            None => 0,
        };
        let behind = match Regex::new(BEHIND_REGEX)?.captures(raw_status) {
            Some(caps) => caps[1].parse()?,
            None => 0,
        };

        Ok(Divergence { ahead, behind })
    }

    pub fn is_empty(&self) -> bool {
        self.ahead == 0 && self.behind == 0
    }
}

impl std::fmt::Display for Divergence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.ahead > 0 {
            parts.push(format!("↑{}", self.ahead));
        }
        if self.behind > 0 {
            parts.push(format!("↓{}", self.behind));
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// Branch name and upstream comparison taken from the first two status lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchHeader {
    pub branch_name: String,
    pub branch_status: String,
    pub has_diverged: bool,
}

impl BranchHeader {
    pub fn parse(raw_status: &str) -> anyhow::Result<Self> {
        if raw_status.trim().is_empty() {
            anyhow::bail!("git status produced no output");
        }

        let mut lines = raw_status.split('\n');
        let first_line = lines.next().unwrap_or_default();
        let second_line = lines.next().unwrap_or_default();

        if let Some(header) = first_line.strip_prefix(BRANCH_HEADER_PREFIX) {
            return Ok(Self::parse_short_header(header));
        }

        let branch_name = Self::parse_branch_name(first_line)?;

        let (branch_status, has_diverged) = if second_line.contains("branch") {
            let is_up_to_date = UP_TO_DATE_PHRASES
                .iter()
                .any(|phrase| second_line.contains(phrase));
            (second_line.trim().to_string(), !is_up_to_date)
        } else {
            (String::new(), false)
        };

        Ok(BranchHeader {
            branch_name,
            branch_status,
            has_diverged,
        })
    }

    fn parse_branch_name(line: &str) -> anyhow::Result<String> {
        let line = line.trim();

        if line.starts_with("HEAD detached") {
            return Ok(line.to_string());
        }
        if line.starts_with("Not currently on any branch") {
            return Ok("(no branch)".to_string());
        }
        if !line.contains("branch") {
            return Ok(String::new());
        }

        line.split_whitespace()
            .nth(2)
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("malformed branch line: {:?}", line))
    }

    // Format: "## <branch>[...<upstream>][ [ahead N][, behind M]]"
    fn parse_short_header(header: &str) -> Self {
        let header = header.trim();
        let branch_part = header
            .strip_prefix("No commits yet on ")
            .or_else(|| header.strip_prefix("Initial commit on "))
            .unwrap_or(header);
        let branch_name = branch_part
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .split("...")
            .next()
            .unwrap_or_default()
            .to_string();
        let has_diverged = header.contains('[');

        BranchHeader {
            branch_name,
            branch_status: if has_diverged {
                header.to_string()
            } else {
                String::new()
            },
            has_diverged,
        }
    }
}

/// Per-file changes listed by `git status --porcelain`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileChanges {
    pub modified_files: Vec<ModifiedFile>,
    pub untracked_files: Vec<String>,
}

impl FileChanges {
    pub fn parse_porcelain(raw_porcelain: &str) -> Self {
        let mut changes = FileChanges::default();
        let mut seen = BTreeSet::<(char, String)>::new();

        for line in raw_porcelain.lines() {
            let trimmed = line.trim_start();
            let Some(code_token) = trimmed.split_whitespace().next() else {
                continue;
            };
            let Some(code) = code_token.chars().next() else {
                continue;
            };
            let file_name = Self::parse_path(code, trimmed[code_token.len()..].trim_start());
            if file_name.is_empty() {
                tracing::debug!(line, "skipping porcelain line without a path");
                continue;
            }

            if code == UNTRACKED_CODE {
                changes.untracked_files.push(file_name);
            } else if seen.insert((code, file_name.clone())) {
                match ModifiedFile::try_from_code(code, file_name) {
                    Some(file) => changes.modified_files.push(file),
                    None => {
                        tracing::debug!(line, "skipping porcelain line with unknown change type")
                    }
                }
            }
        }

        changes
    }

    // Renames and copies read "<old> -> <new>", each side quoted on its own
    fn parse_path(code: char, raw_path: &str) -> String {
        if RENAME_CODES.contains(&code)
            && let Some((from, to)) = Self::split_rename(raw_path)
        {
            return format!("{} -> {}", Self::unquote(from), Self::unquote(to));
        }

        Self::unquote(raw_path)
    }

    fn split_rename(raw_path: &str) -> Option<(&str, &str)> {
        if raw_path.starts_with('"') {
            let closing = Self::closing_quote(raw_path)?;
            let (from, rest) = raw_path.split_at(closing + 1);
            return rest.strip_prefix(RENAME_SEPARATOR).map(|to| (from, to));
        }

        raw_path.split_once(RENAME_SEPARATOR)
    }

    // Byte index of the quote closing the one at index 0, skipping escapes
    fn closing_quote(quoted: &str) -> Option<usize> {
        let mut escaped = false;
        for (index, c) in quoted.char_indices().skip(1) {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => return Some(index),
                _ => {}
            }
        }
        None
    }

    // git C-quotes paths holding special characters
    fn unquote(path: &str) -> String {
        let Some(inner) = path
            .strip_prefix('"')
            .and_then(|path| path.strip_suffix('"'))
        else {
            return path.to_string();
        };

        let mut bytes = Vec::with_capacity(inner.len());
        let mut chars = inner.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '\\' {
                let mut buf = [0; 4];
                bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                continue;
            }

            match chars.next() {
                Some('n') => bytes.push(b'\n'),
                Some('t') => bytes.push(b'\t'),
                Some('r') => bytes.push(b'\r'),
                Some('a') => bytes.push(0x07),
                Some('b') => bytes.push(0x08),
                Some('f') => bytes.push(0x0c),
                Some('v') => bytes.push(0x0b),
                Some(digit @ '0'..='7') => {
                    let mut value = digit.to_digit(8).unwrap_or_default();
                    for _ in 0..2 {
                        match chars.peek().and_then(|next| next.to_digit(8)) {
                            Some(next) => {
                                value = value * 8 + next;
                                chars.next();
                            }
                            None => break,
                        }
                    }
                    bytes.push(value as u8);
                }
                Some(other) => {
                    let mut buf = [0; 4];
                    bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
                }
                None => bytes.push(b'\\'),
            }
        }

        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.modified_files.is_empty() && self.untracked_files.is_empty()
    }
}

/// Status summary of a single repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) branch_name: String,
    pub(crate) branch_status: String,
    pub(crate) has_diverged: bool,
    pub(crate) divergence: Divergence,
    pub(crate) has_changes: bool,
    pub(crate) modified_files: Vec<ModifiedFile>,
    pub(crate) untracked_files: Vec<String>,
}

impl StatusInfo {
    /// Build the record from the plain status output and, when file changes
    /// are collected, the porcelain output
    pub fn parse(raw_status: &str, raw_porcelain: Option<&str>) -> anyhow::Result<Self> {
        let header = BranchHeader::parse(raw_status)?;
        let divergence = if header.has_diverged {
            Divergence::parse(raw_status)?
        } else {
            Divergence::default()
        };
        let changes = raw_porcelain
            .map(FileChanges::parse_porcelain)
            .unwrap_or_default();

        let has_changes =
            !raw_status.contains(CLEAN_TREE_PHRASE) || header.has_diverged || !changes.is_empty();

        Ok(StatusInfo {
            branch_name: header.branch_name,
            branch_status: header.branch_status,
            has_diverged: header.has_diverged,
            divergence,
            has_changes,
            modified_files: changes.modified_files,
            untracked_files: changes.untracked_files,
        })
    }

    pub fn branch_name(&self) -> &str {
        &self.branch_name
    }

    pub fn branch_status(&self) -> &str {
        &self.branch_status
    }

    pub fn has_diverged_from_upstream(&self) -> bool {
        self.has_diverged
    }

    pub fn divergence(&self) -> Divergence {
        self.divergence
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    pub fn modified_files(&self) -> &[ModifiedFile] {
        &self.modified_files
    }

    pub fn untracked_files(&self) -> &[String] {
        &self.untracked_files
    }
}
