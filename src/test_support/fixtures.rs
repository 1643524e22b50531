//! Test fixtures for multi-directory scenarios.
//!
//! A [`TreeFixture`] describes a repository as a list of directories, each
//! with its files, the imports of those files, and optionally an existing
//! build file.

use std::path::PathBuf;

use crate::core::BuildFile;
use crate::generate::{GenerateArgs, PrecomputedImports};
use crate::util::JsConfig;

/// One directory of a fixture tree.
#[derive(Debug, Clone)]
pub struct DirFixture {
    /// Package path, empty for the root.
    pub pkg: String,
    /// Absolute directory path.
    pub dir: PathBuf,
    /// Files on disk.
    pub files: Vec<String>,
    /// Existing build file.
    pub build_file: Option<BuildFile>,
}

/// Fixture for a repository tree.
#[derive(Debug, Clone, Default)]
pub struct TreeFixture {
    /// Configuration shared by every directory.
    pub config: JsConfig,
    /// Directories in declaration order.
    pub dirs: Vec<DirFixture>,
    /// Imports by `<pkg>/<file>`.
    pub analyzer: PrecomputedImports,
}

impl TreeFixture {
    /// Create an empty fixture with the default config.
    pub fn new() -> Self {
        TreeFixture::default()
    }

    /// Add a directory with its files.
    pub fn dir(mut self, pkg: &str, files: &[&str]) -> Self {
        self.dirs.push(DirFixture {
            pkg: pkg.to_string(),
            dir: PathBuf::from("/repo").join(pkg),
            files: files.iter().map(|f| f.to_string()).collect(),
            build_file: None,
        });
        self
    }

    /// Record the imports of `file` in directory `pkg`.
    pub fn imports(mut self, pkg: &str, file: &str, imports: &[&str]) -> Self {
        let key = PathBuf::from("/repo").join(pkg).join(file);
        self.analyzer
            .insert(key.to_string_lossy().into_owned(), imports.iter().copied());
        self
    }

    /// Attach an existing build file to the most recently added directory.
    pub fn build_file(mut self, file: BuildFile) -> Self {
        if let Some(last) = self.dirs.last_mut() {
            last.build_file = Some(file);
        }
        self
    }

    /// Generation arguments for every directory.
    pub fn args(&self) -> Vec<GenerateArgs<'_>> {
        self.dirs
            .iter()
            .map(|d| GenerateArgs {
                config: &self.config,
                dir: &d.dir,
                rel: &d.pkg,
                regular_files: &d.files,
                gen_files: &[],
                file: d.build_file.as_ref(),
            })
            .collect()
    }

    /// A small Vue CLI app: `vue.config.js` and `jest.config.js` at `app`,
    /// sources under `app/src`, and a test three levels below the jest config.
    pub fn vue_app() -> Self {
        TreeFixture::new()
            .dir("app", &["vue.config.js", "jest.config.js"])
            .dir("app/src", &["main.js", "App.vue"])
            .imports("app/src", "main.js", &["vue", "./App", "~/store/index"])
            .imports("app/src", "App.vue", &["@/app/src/components/forms/Input"])
            .dir("app/src/store", &["index.js"])
            .imports("app/src/store", "index.js", &["vuex", "vue"])
            .dir("app/src/components/forms", &["Input.vue", "Input.test.js"])
            .imports(
                "app/src/components/forms",
                "Input.test.js",
                &["./Input", "@vue/test-utils"],
            )
    }
}
