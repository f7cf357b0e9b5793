//! Failure injection through a fake tree implementation.
//!
//! No step of a swap is rolled back; these tests pin down exactly how far
//! each operation gets when a tree primitive fails.

use std::cell::Cell;
use swap_core::{Error, Pointer, SwapLayout, SwapManager};
use swap_fs::{NativeTree, NormalizedPath, TreeOps};
use swap_test_utils::TestHome;

/// Delegates to the real filesystem until the configured call fails.
#[derive(Default)]
struct FlakyTree {
    fail_copy_to: Option<NormalizedPath>,
    fail_remove_of: Option<NormalizedPath>,
    copies: Cell<usize>,
}

fn injected(path: &NormalizedPath) -> swap_fs::Error {
    swap_fs::Error::io(
        path.to_native(),
        std::io::Error::other("injected failure"),
    )
}

impl TreeOps for FlakyTree {
    fn copy_tree(&self, src: &NormalizedPath, dst: &NormalizedPath) -> swap_fs::Result<()> {
        self.copies.set(self.copies.get() + 1);
        if self.fail_copy_to.as_ref() == Some(dst) {
            return Err(injected(dst));
        }
        NativeTree.copy_tree(src, dst)
    }

    fn remove_tree(&self, path: &NormalizedPath) -> swap_fs::Result<()> {
        if self.fail_remove_of.as_ref() == Some(path) {
            return Err(injected(path));
        }
        NativeTree.remove_tree(path)
    }
}

fn setup(tree: FlakyTree) -> (TestHome, SwapManager<FlakyTree>) {
    let home = TestHome::new();
    let layout = SwapLayout::new(home.root(), home.live());
    let manager = SwapManager::with_tree(layout, tree);
    manager.ensure_storage().unwrap();
    (home, manager)
}

#[test]
fn failed_enable_copy_leaves_pointer_cleared() {
    let home = TestHome::new();
    let tree = FlakyTree {
        fail_copy_to: Some(NormalizedPath::new(home.live())),
        ..Default::default()
    };
    let manager = SwapManager::with_tree(SwapLayout::new(home.root(), home.live()), tree);
    manager.ensure_storage().unwrap();
    home.write_snapshot("A", &[("init.el", ";; a")]);
    home.write_snapshot("B", &[("init.el", ";; b")]);
    home.write_pointer("A");
    home.write_live(&[("init.el", ";; a edited")]);

    let result = manager.set("B");

    assert!(matches!(result, Err(Error::Storage(_))));
    // A was saved and the pointer cleared before the failing copy
    home.assert_snapshot_contains("A", "init.el", ";; a edited");
    assert_eq!(manager.read_pointer().unwrap(), Pointer::NoActive);
}

#[test]
fn failed_archive_aborts_before_pointer_change() {
    let home = TestHome::new();
    let tree = FlakyTree {
        fail_copy_to: Some(NormalizedPath::new(home.root().join("A"))),
        ..Default::default()
    };
    let manager = SwapManager::with_tree(SwapLayout::new(home.root(), home.live()), tree);
    manager.ensure_storage().unwrap();
    home.write_snapshot("B", &[("init.el", ";; b")]);
    home.write_pointer("A");
    home.write_live(&[("init.el", ";; a live")]);

    let result = manager.set("B");

    assert!(result.is_err());
    assert_eq!(home.pointer_content(), "A");
    home.assert_live_contains("init.el", ";; a live");
}

#[test]
fn failed_live_removal_keeps_pointer_untouched_on_first_enable() {
    let home = TestHome::new();
    let tree = FlakyTree {
        fail_remove_of: Some(NormalizedPath::new(home.live())),
        ..Default::default()
    };
    let manager = SwapManager::with_tree(SwapLayout::new(home.root(), home.live()), tree);
    manager.ensure_storage().unwrap();
    home.write_snapshot("B", &[("init.el", ";; b")]);
    home.write_live(&[("init.el", ";; untracked")]);

    let result = manager.set("B");

    assert!(result.is_err());
    assert_eq!(manager.read_pointer().unwrap(), Pointer::NoActive);
    home.assert_live_contains("init.el", ";; untracked");
}

#[test]
fn missing_snapshot_never_touches_trees() {
    let (_home, manager) = setup(FlakyTree::default());

    let result = manager.set("ghost");

    assert!(matches!(result, Err(Error::SnapshotNotFound { .. })));
    assert_eq!(manager_copies(&manager), 0);
}

#[test]
fn set_from_no_active_copies_once() {
    let (home, manager) = setup(FlakyTree::default());
    home.write_snapshot("B", &[("init.el", ";; b")]);

    manager.set("B").unwrap();

    assert_eq!(manager_copies(&manager), 1);
}

#[test]
fn set_from_active_copies_twice() {
    let (home, manager) = setup(FlakyTree::default());
    home.write_snapshot("A", &[("init.el", ";; a")]);
    home.write_snapshot("B", &[("init.el", ";; b")]);
    home.write_pointer("A");
    home.write_live(&[("init.el", ";; a")]);

    manager.set("B").unwrap();

    assert_eq!(manager_copies(&manager), 2);
}

fn manager_copies(manager: &SwapManager<FlakyTree>) -> usize {
    manager.tree().copies.get()
}
