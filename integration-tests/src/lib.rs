use assert_cmd::Command;
use resvg::tiny_skia::Pixmap;
use std::path::{Path, PathBuf};

pub const SYMBOL_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
    <path d="M12 2l3 7h7l-5.5 4.5 2 7.5-6.5-4.5-6.5 4.5 2-7.5-5.5-4.5h7z" fill="#1e88e5"/>
</svg>
"##;

/// A temporary checkout with a `data/styles` tree, used as the working
/// directory of the generator.
pub struct Workdir {
    dir: tempfile::TempDir,
}

impl Workdir {
    const TARGET_BINARY_NAME: &'static str = "test-skingen";

    pub fn new() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("data").join("styles")).unwrap();
        Self { dir }
    }

    /// Creates the `symbols` directories of every theme and skin variant.
    pub fn with_symbol_dirs(self) -> Self {
        for style in ["style-clear", "style-night"] {
            for symbols in ["symbols", "symbols-ad"] {
                std::fs::create_dir_all(self.styles_root().join("clear").join(style).join(symbols))
                    .unwrap();
            }
        }
        self
    }

    pub fn with_svg(self, dir: &str, name: &str) -> Self {
        self.with_file(&format!("{}/{}", dir, name), SYMBOL_SVG)
    }

    /// Writes a file below the styles root, creating parent directories.
    pub fn with_file(self, path: &str, contents: impl AsRef<[u8]>) -> Self {
        let path = self.styles_root().join(path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents.as_ref()).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn styles_root(&self) -> PathBuf {
        self.path().join("data").join("styles")
    }

    /// `data/resources-<name>`
    pub fn output(&self, name: &str) -> PathBuf {
        self.path().join("data").join(format!("resources-{}", name))
    }

    pub fn scratch(&self) -> PathBuf {
        self.path().join("tmp")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin(Self::TARGET_BINARY_NAME).unwrap();
        cmd.current_dir(self.path()).env_remove("SKINGEN_CONFIG");
        cmd
    }

    /// Every path below the working directory, sorted.
    pub fn snapshot(&self) -> Vec<PathBuf> {
        fn walk(dir: &Path, paths: &mut Vec<PathBuf>) {
            for entry in std::fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    walk(&path, paths);
                }
                paths.push(path);
            }
        }

        let mut paths = Vec::new();
        walk(self.path(), &mut paths);
        paths.sort();
        paths
    }
}

impl Default for Workdir {
    fn default() -> Self {
        Self::new()
    }
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    names.sort();
    names
}

pub fn png_dimensions(path: &Path) -> (u32, u32) {
    let pixmap = Pixmap::load_png(path).unwrap();
    (pixmap.width(), pixmap.height())
}
