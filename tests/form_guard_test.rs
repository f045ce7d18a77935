use storyterm::ui::forms::{FormExitGuard, FormRegistry};

#[test]
fn test_guard_clean_before_any_input() {
    let mut registry = FormRegistry::new();
    registry.register("journal");

    let guard = FormExitGuard::install(&mut registry, "journal");
    assert!(!guard.is_dirty());
    assert!(!guard.should_block_exit());
}

#[test]
fn test_guard_dirty_after_first_input() {
    let mut registry = FormRegistry::new();
    registry.register("journal");
    let guard = FormExitGuard::install(&mut registry, "journal");

    registry.form_mut("journal").unwrap().insert_char('a');

    assert!(guard.is_dirty());
    assert!(guard.should_block_exit());
}

#[test]
fn test_guard_flag_is_sticky() {
    let mut registry = FormRegistry::new();
    registry.register("journal");
    let guard = FormExitGuard::install(&mut registry, "journal");

    let form = registry.form_mut("journal").unwrap();
    form.insert_char('a');
    form.backspace();

    // Deleting everything again does not clear the flag
    assert!(form.value.is_empty());
    assert!(guard.is_dirty());
}

#[test]
fn test_set_value_counts_as_input() {
    let mut registry = FormRegistry::new();
    registry.register("journal");
    let guard = FormExitGuard::install(&mut registry, "journal");

    registry.form_mut("journal").unwrap().set_value("went left");
    assert!(guard.is_dirty());
}

#[test]
fn test_guard_on_missing_form_is_silent_noop() {
    let mut registry = FormRegistry::new();
    registry.register("journal");

    // Installing on an unknown id attaches nothing and raises nothing
    let guard = FormExitGuard::install(&mut registry, "no-such-form");

    registry.form_mut("journal").unwrap().insert_char('a');
    assert!(!guard.is_dirty());
    assert!(!guard.should_block_exit());
}

#[test]
fn test_duplicate_guards_have_independent_flags() {
    let mut registry = FormRegistry::new();
    registry.register("journal");

    let first = FormExitGuard::install(&mut registry, "journal");
    registry.form_mut("journal").unwrap().insert_char('a');

    // A guard installed after the input starts clean
    let second = FormExitGuard::install(&mut registry, "journal");
    assert!(first.is_dirty());
    assert!(!second.is_dirty());

    // The next input event reaches every watcher
    registry.form_mut("journal").unwrap().insert_char('b');
    assert!(first.is_dirty());
    assert!(second.is_dirty());
}
