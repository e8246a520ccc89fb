use camino::Utf8PathBuf;

/// Name of the directory that holds per-project logo folders.
pub const LOGOS_DIR: &str = "logos";

/// Outcome of locating the project root from a starting directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectMatch {
    /// Started inside `<root>/logos/<name>/`.
    Direct { root: Utf8PathBuf, name: String },
    /// Found an ancestor containing `logos/`; the name is not inferable.
    Ancestor { root: Utf8PathBuf },
    NotFound,
}

/// Resolved project root and name, fixed for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub root: Utf8PathBuf,
    pub name: String,
}

impl ProjectContext {
    /// `<root>/logos/<name>`, where the numbered source files live.
    pub fn project_dir(&self) -> Utf8PathBuf {
        self.root.join(LOGOS_DIR).join(&self.name)
    }

    /// `<root>/logos/<name>/generated`
    pub fn generated_dir(&self) -> Utf8PathBuf {
        self.project_dir().join("generated")
    }

    /// `<root>/logos/<name>/generated/macOS`
    pub fn macos_dir(&self) -> Utf8PathBuf {
        self.generated_dir().join("macOS")
    }

    /// `<root>/tools`, the optional configuration directory.
    pub fn tools_dir(&self) -> Utf8PathBuf {
        self.root.join("tools")
    }
}
