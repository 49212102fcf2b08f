//! State container for the resume file picker modal.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use dirs_next::{document_dir, download_dir, home_dir};
use hireview_types::SelectedFile;
use rat_focus::{FocusFlag, HasFocus};
use ratatui::{layout::Rect, widgets::ListState};

/// Quick access shortcut displayed in the picker sidebar.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub name: String,
    pub path: PathBuf,
}

/// One row in the directory listing.
#[derive(Debug, Clone)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size_bytes: u64,
}

/// UI state backing the file picker modal.
///
/// Tracks the active directory, the listing for it, and the set of files
/// the user has toggled on. Directories always appear in the listing;
/// files appear only when their extension is on the allow-list.
#[derive(Debug)]
pub struct FilePickerState {
    cur_dir: Option<PathBuf>,
    entries: Vec<PickerEntry>,
    picked: Vec<SelectedFile>,
    read_error: Option<String>,

    allowed_extensions: &'static [&'static str],
    shortcuts: Vec<Shortcut>,
    list_state: ListState,

    container_focus: FocusFlag,
    pub f_list: FocusFlag,
    pub f_cancel: FocusFlag,
    pub f_confirm: FocusFlag,
    pub shortcuts_focus: Vec<FocusFlag>,
    pub last_area: Rect,
}

impl FilePickerState {
    /// Builds a picker rooted at the user's home directory.
    pub fn new(allowed_extensions: &'static [&'static str]) -> Self {
        let shortcuts: Vec<Shortcut> = [home_dir(), document_dir(), download_dir()]
            .into_iter()
            .flatten()
            .filter_map(|path| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                Some(Shortcut { name, path })
            })
            .collect();
        let shortcuts_focus = shortcuts
            .iter()
            .map(|s| FocusFlag::named(&format!("filepicker.shortcut.{}", s.name)))
            .collect();

        let mut state = Self {
            cur_dir: home_dir(),
            entries: Vec::new(),
            picked: Vec::new(),
            read_error: None,
            allowed_extensions,
            shortcuts,
            list_state: ListState::default(),
            container_focus: FocusFlag::named("filepicker.container"),
            f_list: FocusFlag::named("filepicker.list"),
            f_cancel: FocusFlag::named("filepicker.cancel"),
            f_confirm: FocusFlag::named("filepicker.confirm"),
            shortcuts_focus,
            last_area: Rect::default(),
        };
        state.refresh();
        state
    }

    pub fn cur_dir(&self) -> Option<&Path> {
        self.cur_dir.as_deref()
    }

    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    pub fn read_error(&self) -> Option<&str> {
        self.read_error.as_deref()
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    pub fn selected_entry(&self) -> Option<&PickerEntry> {
        self.entries.get(self.list_state.selected()?)
    }

    fn is_allowed_extension(&self, extension: Option<&OsStr>) -> bool {
        extension
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .is_some_and(|ext| self.allowed_extensions.contains(&ext.as_str()))
    }

    /// Re-reads the active directory into `entries`.
    ///
    /// Directories sort before files, each group alphabetically. Unreadable
    /// directories leave the previous listing empty and record the error.
    pub fn refresh(&mut self) {
        self.entries.clear();
        self.read_error = None;
        self.list_state.select(None);

        let Some(dir) = self.cur_dir.clone() else {
            self.read_error = Some("No home directory available".to_string());
            return;
        };
        if dir.parent().is_some() {
            self.entries.push(PickerEntry {
                name: "..".to_string(),
                path: dir.parent().map(Path::to_path_buf).unwrap_or_else(|| dir.clone()),
                is_dir: true,
                size_bytes: 0,
            });
        }

        let read = match std::fs::read_dir(&dir) {
            Ok(read) => read,
            Err(err) => {
                self.read_error = Some(format!("Cannot read {}: {err}", dir.display()));
                return;
            }
        };

        let mut dirs: Vec<PickerEntry> = Vec::new();
        let mut files: Vec<PickerEntry> = Vec::new();
        for entry in read.flatten() {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(OsStr::to_str).map(str::to_owned) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            if path.is_dir() {
                dirs.push(PickerEntry {
                    name,
                    path,
                    is_dir: true,
                    size_bytes: 0,
                });
            } else if self.is_allowed_extension(path.extension()) {
                let size_bytes = entry.metadata().map(|m| m.len()).unwrap_or(0);
                files.push(PickerEntry {
                    name,
                    path,
                    is_dir: false,
                    size_bytes,
                });
            }
        }
        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));
        self.entries.extend(dirs);
        self.entries.extend(files);

        if !self.entries.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = self
            .list_state
            .selected()
            .map(|idx| (idx + 1) % self.entries.len())
            .unwrap_or(0);
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len();
        let prev = self
            .list_state
            .selected()
            .map(|idx| (idx + len - 1) % len)
            .unwrap_or(len - 1);
        self.list_state.select(Some(prev));
    }

    /// Descends into the selected directory, or toggles the selected file.
    pub fn activate_selected(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };
        if entry.is_dir {
            self.cur_dir = Some(entry.path);
            self.refresh();
        } else {
            self.toggle_picked(&entry);
        }
    }

    /// Adds the file to the picked set, or removes it when already present.
    pub fn toggle_picked(&mut self, entry: &PickerEntry) {
        if entry.is_dir {
            return;
        }
        if let Some(pos) = self.picked.iter().position(|f| f.path == entry.path) {
            self.picked.remove(pos);
        } else {
            self.picked
                .push(SelectedFile::new(entry.path.clone(), entry.size_bytes));
        }
    }

    pub fn is_picked(&self, path: &Path) -> bool {
        self.picked.iter().any(|f| f.path == path)
    }

    pub fn picked(&self) -> &[SelectedFile] {
        &self.picked
    }

    /// Consumes the picked set for handoff to the upload page.
    pub fn take_picked(&mut self) -> Vec<SelectedFile> {
        std::mem::take(&mut self.picked)
    }

    /// Navigates to a shortcut directory.
    pub fn shortcut_pressed(&mut self, idx: usize) {
        if let Some(shortcut) = self.shortcuts.get(idx) {
            self.cur_dir = Some(shortcut.path.clone());
            self.refresh();
        }
    }
}

impl HasFocus for FilePickerState {
    fn build(&self, builder: &mut rat_focus::FocusBuilder) {
        let tag = builder.start(self);
        for shortcut in &self.shortcuts_focus {
            builder.leaf_widget(shortcut);
        }
        builder.leaf_widget(&self.f_list);
        builder.leaf_widget(&self.f_cancel);
        builder.leaf_widget(&self.f_confirm);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireview_types::RESUME_EXTENSIONS;

    fn entry(name: &str, size: u64) -> PickerEntry {
        PickerEntry {
            name: name.to_string(),
            path: PathBuf::from(format!("/tmp/{name}")),
            is_dir: false,
            size_bytes: size,
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut state = FilePickerState::new(RESUME_EXTENSIONS);
        let resume = entry("resume.pdf", 1024);
        state.toggle_picked(&resume);
        assert!(state.is_picked(&resume.path));
        state.toggle_picked(&resume);
        assert!(!state.is_picked(&resume.path));
    }

    #[test]
    fn directories_cannot_be_picked() {
        let mut state = FilePickerState::new(RESUME_EXTENSIONS);
        let dir = PickerEntry {
            name: "docs".to_string(),
            path: PathBuf::from("/tmp/docs"),
            is_dir: true,
            size_bytes: 0,
        };
        state.toggle_picked(&dir);
        assert!(state.picked().is_empty());
    }

    #[test]
    fn take_picked_drains_the_set() {
        let mut state = FilePickerState::new(RESUME_EXTENSIONS);
        state.toggle_picked(&entry("a.pdf", 1));
        state.toggle_picked(&entry("b.docx", 2));
        let files = state.take_picked();
        assert_eq!(files.len(), 2);
        assert!(state.picked().is_empty());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let state = FilePickerState::new(RESUME_EXTENSIONS);
        assert!(state.is_allowed_extension(Some(OsStr::new("PDF"))));
        assert!(!state.is_allowed_extension(Some(OsStr::new("exe"))));
        assert!(!state.is_allowed_extension(None));
    }
}
