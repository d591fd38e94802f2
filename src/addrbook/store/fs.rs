use super::{codec, ContactStore};
use crate::error::{AddrBookError, Result};
use crate::model::Contact;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "addressbook.txt";

/// Stores contacts in a single pipe-delimited text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AddrBookError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl ContactStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Contact>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no data file at {}, starting empty", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                log::warn!(
                    "could not read {}: {}; starting empty",
                    self.path.display(),
                    e
                );
                return Ok(None);
            }
        };

        let text = String::from_utf8_lossy(&bytes);
        let contacts = codec::decode(&text);
        log::debug!(
            "read {} contacts from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(Some(contacts))
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent()?;

        // Write beside the target, then rename over it.
        let tmp_file = self.tmp_path();
        fs::write(&tmp_file, codec::encode(contacts)).map_err(AddrBookError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(AddrBookError::Io(e));
        }

        log::debug!(
            "wrote {} contacts to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("addressbook.txt"));
        (dir, store)
    }

    #[test]
    fn missing_file_is_no_data() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_writes_pipe_lines_in_given_order() {
        let (_dir, mut store) = setup();
        let contacts = vec![
            Contact::new("Zed", "5550001", "z@z.io", "Far"),
            Contact::new("Amy", "5550002", "a@a.io", ""),
        ];
        store.save(&contacts).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, "Zed|5550001|z@z.io|Far\nAmy|5550002|a@a.io|\n");
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let (_dir, mut store) = setup();
        store
            .save(&[Contact::new("Old", "5550001", "o@o.io", "")])
            .unwrap();
        store.save(&[]).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
        assert_eq!(store.load().unwrap(), Some(vec![]));
    }

    #[test]
    fn load_returns_file_order() {
        let (_dir, store) = setup();
        fs::write(store.path(), "B|5550002|b@b.io|\nA|5550001|a@a.io|\n").unwrap();

        let loaded = store.load().unwrap().unwrap();
        let names: Vec<_> = loaded.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/book.txt"));
        store.save(&[Contact::new("A", "5550001", "a@a.io", "")]).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn failed_save_leaves_previous_file() {
        let (_dir, mut store) = setup();
        fs::write(store.path(), "Keep|5550001|k@k.io|\n").unwrap();

        // A directory squatting on the temp path makes the write fail.
        fs::create_dir(store.tmp_path()).unwrap();
        let err = store.save(&[]).unwrap_err();
        assert!(matches!(err, AddrBookError::Io(_)));

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "Keep|5550001|k@k.io|\n"
        );
    }

    #[test]
    fn unreadable_path_is_no_data() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }
}
