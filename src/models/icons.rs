use super::device_entry::EntryKind;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Folder,
    File,
    Link,
    Copy,
    Paste,
    Delete,
    Rename,
    Permission,
    Create,
    Back,
    Up,
    Refresh,
    Power,
    Device,
}

impl IconKind {
    pub const ALL: [IconKind; 14] = [
        IconKind::Folder,
        IconKind::File,
        IconKind::Link,
        IconKind::Copy,
        IconKind::Paste,
        IconKind::Delete,
        IconKind::Rename,
        IconKind::Permission,
        IconKind::Create,
        IconKind::Back,
        IconKind::Up,
        IconKind::Refresh,
        IconKind::Power,
        IconKind::Device,
    ];

    /// Location relative to the assets directory.
    pub fn asset_path(self) -> &'static str {
        match self {
            IconKind::Folder => "icons/folder.svg",
            IconKind::File => "icons/file.svg",
            IconKind::Link => "icons/link.svg",
            IconKind::Copy => "icons/copy.svg",
            IconKind::Paste => "icons/paste.svg",
            IconKind::Delete => "icons/delete.svg",
            IconKind::Rename => "icons/rename.svg",
            IconKind::Permission => "icons/permission.svg",
            IconKind::Create => "icons/create.svg",
            IconKind::Back => "icons/back.svg",
            IconKind::Up => "icons/up.svg",
            IconKind::Refresh => "icons/refresh.svg",
            IconKind::Power => "icons/power.svg",
            IconKind::Device => "icons/device.svg",
        }
    }
}

/// Icons that were found at startup. Anything missing is simply not drawn.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    paths: HashMap<IconKind, &'static str>,
}

impl IconSet {
    pub fn resolve(exists: impl Fn(&str) -> bool) -> Self {
        let paths = IconKind::ALL
            .iter()
            .map(|kind| (*kind, kind.asset_path()))
            .filter(|(_, path)| exists(path))
            .collect();
        Self { paths }
    }

    pub fn load_dir(dir: &Path) -> Self {
        Self::resolve(|path| dir.join(path).is_file())
    }

    pub fn get(&self, kind: IconKind) -> Option<&'static str> {
        self.paths.get(&kind).copied()
    }

    pub fn for_entry(&self, kind: EntryKind) -> Option<&'static str> {
        self.get(match kind {
            EntryKind::Directory => IconKind::Folder,
            EntryKind::File => IconKind::File,
            EntryKind::Unknown => IconKind::Link,
        })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_files_are_skipped() -> std::io::Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("icons"))?;
        fs::write(dir.path().join("icons/folder.svg"), "<svg/>")?;

        let icons = IconSet::load_dir(dir.path());
        assert_eq!(icons.len(), 1);
        assert_eq!(
            icons.for_entry(EntryKind::Directory),
            Some("icons/folder.svg")
        );
        assert_eq!(icons.for_entry(EntryKind::File), None);
        Ok(())
    }

    #[test]
    fn empty_dir_degrades_to_no_icons() -> std::io::Result<()> {
        let dir = tempdir()?;
        assert!(IconSet::load_dir(dir.path()).is_empty());
        Ok(())
    }

    #[test]
    fn shipped_assets_are_complete() {
        let icons = IconSet::load_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").as_path());
        assert_eq!(icons.len(), IconKind::ALL.len());
    }
}
