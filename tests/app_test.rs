use storyterm::config::Config;
use storyterm::constants::JOURNAL_FORM_ID;
use storyterm::ui::App;

#[test]
fn test_quit_with_clean_journal_exits_directly() {
    let mut app = App::new(&Config::default());

    app.request_quit();
    assert!(app.should_quit);
    assert!(!app.confirming_exit);
}

#[test]
fn test_quit_with_unsaved_journal_is_intercepted() {
    let mut app = App::new(&Config::default());
    app.forms.form_mut(JOURNAL_FORM_ID).unwrap().insert_char('a');

    app.request_quit();
    assert!(!app.should_quit);
    assert!(app.confirming_exit);
}

#[test]
fn test_quit_still_intercepted_after_save() {
    let mut app = App::new(&Config::default());
    app.forms.form_mut(JOURNAL_FORM_ID).unwrap().insert_char('a');
    app.save_journal();

    // Saving shows a notification but the guard flag never resets
    assert_eq!(app.notifications.len(), 1);
    app.request_quit();
    assert!(app.confirming_exit);
}

#[test]
fn test_save_records_parseable_timestamp() {
    let mut app = App::new(&Config::default());
    app.save_journal();

    let saved_at = app.last_saved_at.as_deref().unwrap();
    let formatted = storyterm::utils::date::format_long_datetime(saved_at);
    assert_ne!(formatted, "Invalid Date");
}
