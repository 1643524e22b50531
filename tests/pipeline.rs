//! End-to-end tests for generate-then-resolve.
//!
//! These tests drive whole directory trees through the public API: every
//! directory is generated and indexed first, then resolved.

use std::path::PathBuf;

use jsrules::core::ExistingRule;
use jsrules::generate::PrecomputedImports;
use jsrules::util::config::load_config;
use jsrules::{update_tree, BuildFile, DirectoryUpdate, GenerateArgs, JsConfig};
use tempfile::TempDir;

/// One directory of a test tree.
struct Dir {
    pkg: String,
    path: PathBuf,
    files: Vec<String>,
    build_file: Option<BuildFile>,
}

fn dir(pkg: &str, files: &[&str]) -> Dir {
    Dir {
        pkg: pkg.to_string(),
        path: PathBuf::from("/repo").join(pkg),
        files: files.iter().map(|f| f.to_string()).collect(),
        build_file: None,
    }
}

/// Run both passes over `dirs` with a shared config.
fn run(config: &JsConfig, dirs: &[Dir], analyzer: &PrecomputedImports) -> Vec<DirectoryUpdate> {
    let args: Vec<GenerateArgs<'_>> = dirs
        .iter()
        .map(|d| GenerateArgs {
            config,
            dir: &d.path,
            rel: &d.pkg,
            regular_files: &d.files,
            gen_files: &[],
            file: d.build_file.as_ref(),
        })
        .collect();

    update_tree(&args, analyzer)
}

// ============================================================================
// resolution
// ============================================================================

#[test]
fn test_sibling_and_npm_imports() {
    let analyzer = PrecomputedImports::new().with_file("/repo/web/a.ts", ["./b", "c"]);
    let updates = run(
        &JsConfig::default(),
        &[dir("web", &["a.ts", "b.ts"])],
        &analyzer,
    );

    let a = updates[0].target("a").unwrap();
    assert_eq!(a.kind, "ts_project");
    assert_eq!(a.deps(), [":b", "@npm//c"]);
    assert!(updates[0].diagnostics.is_empty());
}

#[test]
fn test_cross_package_import() {
    let analyzer = PrecomputedImports::new()
        .with_file("/repo/web/main.js", ["@/lib/format", "@scope/pkg/sub"]);
    let updates = run(
        &JsConfig::default(),
        &[dir("lib", &["format.js"]), dir("web", &["main.js"])],
        &analyzer,
    );

    let main = updates[1].target("main").unwrap();
    assert_eq!(main.deps(), ["//lib:format", "@npm//@scope/pkg"]);
}

#[test]
fn test_ambiguous_import_reported() {
    let analyzer = PrecomputedImports::new().with_file("/repo/web/main.js", ["@/lib/util"]);
    let updates = run(
        &JsConfig::default(),
        &[dir("lib", &["util.js", "util.ts"]), dir("web", &["main.js"])],
        &analyzer,
    );

    let web = &updates[1];
    assert!(web.target("main").unwrap().attr("deps").is_none());
    assert_eq!(web.diagnostics.len(), 1);
    assert!(web.diagnostics[0].message.contains("multiple rules"));
}

#[test]
fn test_jest_config_three_levels_up() {
    let analyzer = PrecomputedImports::new()
        .with_file("/repo/app/src/components/forms/Input.test.js", ["./Input"]);
    let updates = run(
        &JsConfig::default(),
        &[
            dir("app", &["jest.config.js"]),
            dir("app/src/components/forms", &["Input.vue", "Input.test.js"]),
        ],
        &analyzer,
    );

    let test = updates[1].target("Input.test").unwrap();
    assert_eq!(test.kind, "jest_test");
    assert_eq!(test.deps(), [":Input"]);
    assert_eq!(
        test.attr("config").and_then(|v| v.as_str()),
        Some("//app:jest.config")
    );
}

// ============================================================================
// stale targets and idempotence
// ============================================================================

#[test]
fn test_stale_library_reported_empty() {
    let mut web = dir("web", &["a.ts"]);
    web.build_file = Some(
        BuildFile::new("web")
            .with_rule(ExistingRule::new("js_library", "old", ["old.js"]))
            .with_rule(ExistingRule::new("ts_project", "a", ["a.ts"])),
    );

    let updates = run(&JsConfig::default(), &[web], &PrecomputedImports::new());

    let empty: Vec<(&str, &str)> = updates[0]
        .empty
        .iter()
        .map(|t| (t.kind.as_str(), t.name.as_str()))
        .collect();
    assert_eq!(empty, vec![("js_library", "old")]);
}

#[test]
fn test_rerun_is_idempotent() {
    let analyzer = PrecomputedImports::new()
        .with_file("/repo/web/a.ts", ["./b", "react"])
        .with_file("/repo/web/a.test.js", ["./a"]);
    let config = JsConfig::default();
    let first = run(
        &config,
        &[dir("web", &["a.ts", "b.ts", "a.test.js"])],
        &analyzer,
    );

    let mut web = dir("web", &["a.ts", "b.ts", "a.test.js"]);
    let mut file = BuildFile::new("web");
    for target in &first[0].targets {
        file.rules.push(ExistingRule::new(
            target.kind.clone(),
            target.name.clone(),
            target.srcs().to_vec(),
        ));
    }
    web.build_file = Some(file);

    let second = run(&config, &[web], &analyzer);
    assert_eq!(first[0].targets, second[0].targets);
    assert!(second[0].empty.is_empty());
}

// ============================================================================
// configuration
// ============================================================================

#[test]
fn test_config_file_enables_import_targets() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("jsrules.toml");
    std::fs::write(
        &project,
        "import_extensions = [\".css\"]\nnpm_repository = \"node_deps\"",
    )
    .unwrap();

    let config = load_config(&tmp.path().join("missing.toml"), &project);
    let analyzer = PrecomputedImports::new().with_file("/repo/ui/button.js", ["lodash"]);
    let updates = run(&config, &[dir("ui", &["button.js", "button.css"])], &analyzer);

    let ui = &updates[0];
    assert_eq!(ui.target("button").unwrap().deps(), ["@node_deps//lodash"]);
    let css = ui.target("button_css").unwrap();
    assert_eq!(css.kind, "js_import");
    assert!(css.attr("deps").is_none());
}

#[test]
fn test_directive_disables_tests() {
    let root = JsConfig::default();
    let child = root.for_child([("js_generate_tests", "false")]);
    let updates = run(
        &child,
        &[dir("web", &["a.js", "a.test.js"])],
        &PrecomputedImports::new(),
    );

    let names: Vec<&str> = updates[0].targets.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["a"]);
}
