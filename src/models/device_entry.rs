use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks and anything else `ls -F` could not classify.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DeviceEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Unknown entries are usually symlinks such as `/sdcard`, so they are
    /// allowed to descend alongside real directories.
    pub fn can_descend(&self) -> bool {
        matches!(self.kind, EntryKind::Directory | EntryKind::Unknown)
    }

    /// Parses one line of `ls -F` output.
    pub fn from_classified(line: &str) -> Option<Self> {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            return None;
        }
        let (name, kind) = match line.chars().last() {
            Some('/') => (&line[..line.len() - 1], EntryKind::Directory),
            Some('@') => (&line[..line.len() - 1], EntryKind::Unknown),
            Some('*' | '|' | '=') => (&line[..line.len() - 1], EntryKind::File),
            _ => (line, EntryKind::File),
        };
        if name.is_empty() {
            return None;
        }
        Some(Self::new(name, kind))
    }
}

/// One entry per non-empty output line, in device order.
pub fn parse_listing(output: &str) -> Vec<DeviceEntry> {
    if output.is_empty() {
        return Vec::new();
    }
    output
        .split('\n')
        .filter_map(DeviceEntry::from_classified)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_output_has_no_entries() {
        assert!(parse_listing("").is_empty());
    }

    #[test]
    fn classifies_by_suffix() {
        let entries = parse_listing("Android/\nsdcard@\nrun.sh*\nnotes.txt\npipe|\nsock=");
        assert_eq!(
            entries,
            vec![
                DeviceEntry::new("Android", EntryKind::Directory),
                DeviceEntry::new("sdcard", EntryKind::Unknown),
                DeviceEntry::new("run.sh", EntryKind::File),
                DeviceEntry::new("notes.txt", EntryKind::File),
                DeviceEntry::new("pipe", EntryKind::File),
                DeviceEntry::new("sock", EntryKind::File),
            ]
        );
    }

    #[test]
    fn strips_carriage_returns_and_blank_lines() {
        let entries = parse_listing("DCIM/\r\n\r\nMusic/\r");
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["DCIM", "Music"]);
    }

    #[test]
    fn only_directories_and_unknown_descend() {
        assert!(DeviceEntry::new("a", EntryKind::Directory).can_descend());
        assert!(DeviceEntry::new("a", EntryKind::Unknown).can_descend());
        assert!(!DeviceEntry::new("a", EntryKind::File).can_descend());
    }
}
