use colored::Colorize;

const LABEL_WIDTH: usize = 11;

// https://git-scm.com/docs/git-status#_short_format
pub const CHANGE_LABELS: phf::Map<char, &'static str> = phf::phf_map! {
    'M' => "modified",
    'A' => "new file",
    'D' => "deleted",
    'R' => "renamed",
    'C' => "copied",
    'U' => "unmerged",
};

pub const UNTRACKED_CODE: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeType {
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    Unmerged,
}

impl ChangeType {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(ChangeType::Modified),
            'A' => Some(ChangeType::Added),
            'D' => Some(ChangeType::Deleted),
            'R' => Some(ChangeType::Renamed),
            'C' => Some(ChangeType::Copied),
            'U' => Some(ChangeType::Unmerged),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            ChangeType::Modified => 'M',
            ChangeType::Added => 'A',
            ChangeType::Deleted => 'D',
            ChangeType::Renamed => 'R',
            ChangeType::Copied => 'C',
            ChangeType::Unmerged => 'U',
        }
    }

    pub fn label(&self) -> &'static str {
        CHANGE_LABELS.get(&self.code()).copied().unwrap_or_default()
    }
}

impl From<&ChangeType> for &str {
    fn from(change: &ChangeType) -> Self {
        change.label()
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{}", label)
    }
}

/// A tracked file with staged or unstaged changes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModifiedFile {
    change: ChangeType,
    file_name: String,
}

impl ModifiedFile {
    /// Build an entry from a porcelain status code, dropping unmappable codes
    pub fn try_from_code(code: char, file_name: impl Into<String>) -> Option<Self> {
        ChangeType::from_code(code).map(|change| ModifiedFile {
            change,
            file_name: file_name.into(),
        })
    }

    pub fn short_type_code(&self) -> char {
        self.change.code()
    }

    pub fn long_type_label(&self) -> &'static str {
        self.change.label()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl std::fmt::Display for ModifiedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = format!("{}:", self.long_type_label());
        write!(
            f,
            "{:<width$} {}",
            label,
            self.file_name.yellow(),
            width = LABEL_WIDTH
        )
    }
}
