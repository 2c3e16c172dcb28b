//! Integration tests for target resolution over the canonical fixtures

use rufo_finder::{FileFinder, FinderOptions, FoundFile};
use rufo_test_utils::{FixtureTree, finder_fixtures, init_logging, relative_pairs};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn resolve(targets: &[PathBuf], includes: &[&str], excludes: &[&str]) -> Vec<(bool, PathBuf)> {
    init_logging();
    let finder = FileFinder::with_patterns(
        targets.to_vec(),
        includes.iter().map(|p| p.to_string()).collect(),
        excludes.iter().map(|p| p.to_string()).collect(),
    );
    finder
        .resolve()
        .map(|found| found.unwrap().into_pair())
        .collect()
}

fn resolve_fixture(
    root: &TempDir,
    name: &str,
    includes: &[&str],
    excludes: &[&str],
) -> Vec<(bool, String)> {
    let dir = root.path().join(name);
    relative_pairs(resolve(&[dir.clone()], includes, excludes), &dir)
}

fn pairs(expected: &[&str]) -> Vec<(bool, String)> {
    let mut pairs: Vec<_> = expected.iter().map(|p| (true, p.to_string())).collect();
    pairs.sort();
    pairs
}

#[test]
fn test_directory_with_ruby_files() {
    let root = finder_fixtures().unwrap();
    assert_eq!(resolve_fixture(&root, "only_ruby", &[], &[]), pairs(&["a.rb"]));
}

#[test]
fn test_missing_directory() {
    let root = finder_fixtures().unwrap();
    let missing = root.path().join("does_not_exist");

    let found = resolve(&[missing], &[], &[]);
    assert_eq!(
        relative_pairs(found, root.path()),
        vec![(false, "does_not_exist".to_string())]
    );
}

#[test]
fn test_explicit_file() {
    let root = finder_fixtures().unwrap();
    let file = root.path().join("only_ruby").join("a.rb");

    let found = resolve(&[file], &[], &[]);
    assert_eq!(
        relative_pairs(found, root.path()),
        vec![(true, "only_ruby/a.rb".to_string())]
    );
}

#[test]
fn test_missing_file() {
    let root = finder_fixtures().unwrap();
    let file = root.path().join("only_ruby").join("does_not_exist.rb");

    let found = resolve(&[file], &[], &[]);
    assert_eq!(
        relative_pairs(found, root.path()),
        vec![(false, "only_ruby/does_not_exist.rb".to_string())]
    );
}

#[test]
fn test_explicit_file_ignores_extension_and_excludes() {
    let root = finder_fixtures().unwrap();
    let file = root.path().join("mixed_dir").join("a.txt");

    let found = resolve(&[file.clone()], &[], &["*.txt"]);
    assert_eq!(found, vec![(true, file)]);
}

#[test]
fn test_gem_files() {
    let root = finder_fixtures().unwrap();
    assert_eq!(
        resolve_fixture(&root, "only_gemfiles", &[], &[]),
        pairs(&["Gemfile", "a.gemspec"])
    );
}

#[test]
fn test_rake_files() {
    let root = finder_fixtures().unwrap();
    assert_eq!(
        resolve_fixture(&root, "only_rake_files", &[], &[]),
        pairs(&["Rakefile", "a.rake"])
    );
}

#[test]
fn test_vendor_directory_is_ignored() {
    let root = finder_fixtures().unwrap();
    assert!(resolve_fixture(&root, "only_vendor", &[], &[]).is_empty());
    // Include patterns do not reach into vendor either
    assert!(resolve_fixture(&root, "only_vendor", &["*.rb", "vendor/*"], &[]).is_empty());
}

#[test]
fn test_rackup_files() {
    let root = finder_fixtures().unwrap();
    assert_eq!(
        resolve_fixture(&root, "only_rackup_files", &[], &[]),
        pairs(&["config.ru"])
    );
}

#[test]
fn test_erb_files() {
    let root = finder_fixtures().unwrap();
    assert_eq!(
        resolve_fixture(&root, "only_erb_files", &[], &[]),
        pairs(&["example.erb"])
    );
}

#[test]
fn test_files_can_be_included() {
    let root = finder_fixtures().unwrap();
    assert_eq!(
        resolve_fixture(&root, "mixed_dir", &["*.txt"], &[]),
        pairs(&["a.rb", "a.txt"])
    );
}

#[test]
fn test_files_can_be_excluded() {
    let root = finder_fixtures().unwrap();
    assert!(resolve_fixture(&root, "mixed_dir", &[], &["*.rb"]).is_empty());
}

#[test]
fn test_unrecognized_files_are_not_selected() {
    let root = finder_fixtures().unwrap();
    assert_eq!(resolve_fixture(&root, "mixed_dir", &[], &[]), pairs(&["a.rb"]));
}

#[test]
fn test_resolve_is_repeatable() {
    let root = finder_fixtures().unwrap();
    let finder = FileFinder::new([root.path()], FinderOptions::new());

    let first: HashSet<FoundFile> = finder.resolve().map(Result::unwrap).collect();
    let second: HashSet<FoundFile> = (&finder).into_iter().map(Result::unwrap).collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 9);
}

#[test]
fn test_targets_resolved_in_order() {
    let root = finder_fixtures().unwrap();
    let targets = vec![
        root.path().join("only_erb_files"),
        root.path().join("missing.rb"),
        root.path().join("only_ruby").join("a.rb"),
    ];

    let found = resolve(&targets, &[], &[]);
    assert_eq!(
        found,
        vec![
            (true, root.path().join("only_erb_files").join("example.erb")),
            (false, root.path().join("missing.rb")),
            (true, root.path().join("only_ruby").join("a.rb")),
        ]
    );
}

#[test]
fn test_paths_keep_the_target_form() {
    let root = FixtureTree::new().file("app/models/user.rb").build().unwrap();
    let target = root.path().join("app").join(".").join("models");

    let found = resolve(&[target.clone()], &[], &[]);
    assert_eq!(found.len(), 1);
    // `Path` equality skips interior `.` components, so compare the raw form
    let expected = target.join("user.rb");
    assert_eq!(found[0].1.as_os_str(), expected.as_os_str());
    let kept = format!("app{sep}.{sep}models", sep = std::path::MAIN_SEPARATOR);
    assert!(found[0].1.to_string_lossy().contains(&kept));
}

#[test]
fn test_aliased_targets_yield_each_file_once() {
    let root = FixtureTree::new().file("lib/a.rb").build().unwrap();
    let lib = root.path().join("lib");
    let aliased = root.path().join("lib").join("..").join("lib");

    let found = resolve(&[lib.clone(), aliased], &[], &[]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].1.as_os_str(), lib.join("a.rb").as_os_str());
}

#[test]
fn test_resolution_is_lazy() {
    let root = FixtureTree::new()
        .file("first/a.rb")
        .file("second/b.rb")
        .build()
        .unwrap();
    let second = root.path().join("second");
    let finder = FileFinder::new([root.path().join("first"), second.clone()], FinderOptions::new());

    let mut resolve = finder.resolve();
    let first = resolve.next().unwrap().unwrap();
    assert!(first.exists);

    // The second target has not been looked at yet
    fs::remove_dir_all(&second).unwrap();

    let rest: Vec<_> = resolve.map(Result::unwrap).collect();
    assert_eq!(rest.len(), 1);
    assert!(!rest[0].exists);
    assert_eq!(rest[0].path, second);
}

#[test]
fn test_options_from_figment_drive_resolution() {
    use figment::Figment;
    use figment::providers::{Format, Toml};

    let root = finder_fixtures().unwrap();
    let figment = Figment::new().merge(Toml::string(
        r#"
        includes = ["*.txt"]
        excludes = ["mixed_dir/*.rb"]
        "#,
    ));
    let options = FinderOptions::from_figment(&figment).unwrap();
    let finder = FileFinder::new([root.path()], options);

    let found: Vec<_> = finder.resolve().map(|f| f.unwrap().into_pair()).collect();
    let relative = relative_pairs(found, root.path());
    assert!(relative.contains(&(true, "mixed_dir/a.txt".to_string())));
    assert!(!relative.contains(&(true, "mixed_dir/a.rb".to_string())));
    assert!(relative.contains(&(true, "only_ruby/a.rb".to_string())));
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_reported() {
    use rufo_finder::FinderError;
    use std::os::unix::fs::PermissionsExt;

    let root = FixtureTree::new()
        .file("open/a.rb")
        .file("locked/b.rb")
        .build()
        .unwrap();
    let locked = root.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not apply to privileged users
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let finder = FileFinder::new([root.path()], FinderOptions::new());
    let results: Vec<_> = finder.resolve().collect();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let errors: Vec<_> = results.iter().filter_map(|r| r.as_ref().err()).collect();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], FinderError::Traversal { .. }));
    assert_eq!(errors[0].path(), Some(Path::new(&locked)));

    let found: Vec<_> = results.into_iter().filter_map(|r| r.ok()).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].path, root.path().join("open").join("a.rb"));
}
