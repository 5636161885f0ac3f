//! Edge case and error handling tests for treefolder


use harness::{TestTree, canonical_root, run_treefolder};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_to_file_is_not_listed() {
    let tree = TestTree::new();
    tree.add_file("target.txt", "target");
    symlink(tree.path().join("target.txt"), tree.path().join("link.txt"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &[]);
    assert!(success, "treefolder should succeed with symlink");
    assert!(stdout.contains("└─ target.txt"), "target is the last entry: {}", stdout);
    assert!(!stdout.contains("link.txt"));
}

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "");
    symlink("..", tree.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &[]);
    assert!(success, "treefolder should not hang on parent symlink");
    assert!(stdout.contains("subdir"));
    assert!(stdout.contains("file.txt"));
    assert!(!stdout.contains("parent"));
}

#[test]
#[cfg(unix)]
fn test_broken_symlink() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "");
    symlink("nonexistent.txt", tree.path().join("broken_link.txt"))
        .expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &[]);
    assert!(success, "treefolder should handle broken symlinks");
    assert!(stdout.contains("real.txt"));
}

#[test]
#[cfg(unix)]
fn test_symlinked_root_keeps_given_name() {
    let tree = TestTree::new();
    tree.add_file("real/inner.txt", "");
    let alias = tree.path().join("alias");
    symlink(tree.path().join("real"), &alias).expect("Failed to create root symlink");
    let alias_arg = alias.to_string_lossy().to_string();

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &[&alias_arg]);
    assert!(success);
    assert_eq!(stdout, "alias\n└─ inner.txt\n");

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &["-l", &alias_arg]);
    assert!(success);
    assert_eq!(
        stdout,
        format!("{}/\n{}\n", alias.display(), alias.join("inner.txt").display())
    );
}

// ============================================================================
// Permission Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_directory_aborts_run() {
    let tree = TestTree::new();
    tree.add_file("readable/file.txt", "");
    let unreadable = tree.add_dir("unreadable");
    fs::write(unreadable.join("hidden.txt"), "").expect("Failed to write file");

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    // Privileged users can read the folder anyway; nothing to check then
    let still_readable = fs::read_dir(&unreadable).is_ok();
    let (stdout, stderr, success) = run_treefolder(tree.path(), &[]);

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    if still_readable {
        return;
    }
    assert!(!success, "an unreadable folder fails the whole run");
    assert!(stdout.is_empty(), "no partial tree: {}", stdout);
    assert!(stderr.contains("unreadable"), "stderr names the folder: {}", stderr);
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let tree = TestTree::new();
    tree.add_file("my file.txt", "");
    tree.add_file("dir with spaces/inner.txt", "");

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("├─ dir with spaces"));
    assert!(stdout.contains("└─ my file.txt"));
}

#[test]
fn test_filename_with_unicode() {
    let tree = TestTree::new();
    tree.add_file("日本語.txt", "");
    tree.add_file("émoji_🎉.txt", "");

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("日本語.txt"));
    assert!(stdout.contains("émoji_🎉.txt"));
}

#[test]
fn test_sorting_order() {
    let tree = TestTree::new();
    tree.add_file("zebra.txt", "");
    tree.add_file("Apple.txt", "");
    tree.add_file("middle.txt", "");
    tree.add_file("éclair.txt", "");
    tree.add_file("zoo/inner.txt", "");

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &[]);
    assert!(success);

    let zoo = stdout.find("zoo").expect("should have zoo");
    let apple = stdout.find("Apple.txt").expect("should have apple");
    let eclair = stdout.find("éclair.txt").expect("should have eclair");
    let middle = stdout.find("middle.txt").expect("should have middle");
    let zebra = stdout.find("zebra.txt").expect("should have zebra");

    assert!(zoo < apple, "folders come before files");
    assert!(apple < eclair, "case does not break alphabetical order");
    assert!(eclair < middle, "accents sort with their base letter");
    assert!(middle < zebra);
}

#[test]
fn test_unsorted_keeps_all_entries() {
    let tree = TestTree::new();
    tree.add_file("b.txt", "");
    tree.add_file("a.txt", "");
    tree.add_file("c/d.txt", "");

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &["--unsorted"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 5);
    for name in ["a.txt", "b.txt", "d.txt"] {
        assert!(stdout.contains(name), "missing {}: {}", name, stdout);
    }
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_empty_root() {
    let tree = TestTree::new();
    let root = canonical_root(&tree);

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &["-s", "colored"]);
    assert!(success);
    assert_eq!(
        stdout,
        format!("📁 {}\n", root.file_name().unwrap().to_string_lossy())
    );
}

#[test]
fn test_parent_root_argument_is_folded() {
    let tree = TestTree::new();
    tree.add_file("sub/inner.txt", "");
    let root = canonical_root(&tree);

    let (stdout, _stderr, success) = run_treefolder(&tree.path().join("sub"), &[".."]);
    assert!(success);
    assert_eq!(
        stdout.lines().next(),
        Some(root.file_name().unwrap().to_string_lossy().as_ref())
    );
}

#[test]
fn test_very_deep_nesting() {
    let tree = TestTree::new();
    tree.add_file("a/b/c/d/e/f/g/h/deep.txt", "");

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &[]);
    assert!(success, "treefolder should handle deep nesting");
    // Each level below a last sibling adds three blanks
    assert!(
        stdout.contains(&format!("{}└─ deep.txt", " ".repeat(3 * 8))),
        "unexpected indent: {}",
        stdout
    );
}

#[test]
fn test_many_files_hit_default_limit() {
    let tree = TestTree::new();
    for i in 0..500 {
        tree.add_file(&format!("file_{:03}.txt", i), "");
    }

    // 500 files plus the root folder is one over the default limit
    let (stdout, stderr, success) = run_treefolder(tree.path(), &[]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("\"total\": 501"), "stderr: {}", stderr);

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &["-m", "501"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 501);
}

#[test]
fn test_middle_sibling_continuation() {
    let tree = TestTree::new();
    tree.add_file("a/one.txt", "");
    tree.add_file("a/two.txt", "");
    tree.add_file("b/three.txt", "");

    let (stdout, _stderr, success) = run_treefolder(tree.path(), &[]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().skip(1).collect();
    assert_eq!(
        lines,
        vec![
            "├─ a",
            "│  ├─ one.txt",
            "│  └─ two.txt",
            "└─ b",
            "   └─ three.txt",
        ]
    );
}
