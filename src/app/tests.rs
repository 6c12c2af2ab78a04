use super::*;
use crate::commands::Context;
use crate::daemon::mock::MockDaemon;
use crate::daemon::{DaemonClient, DaemonError};
use crate::song::{Song, SongId};
use crate::songlist::{Lifecycle, Playlist, Songlist};
use mockall::predicate::eq;
use std::sync::Arc;

fn s(file: &str) -> Song {
    let mut song = Song::new();
    song.set_tag("file", file);
    song
}

fn list(name: &str, files: &[&str]) -> Arc<Songlist> {
    let list = Songlist::new(name);
    for f in files {
        list.add(s(f));
    }
    Arc::new(list)
}

fn shared(list: Arc<Songlist>) -> Arc<dyn Lifecycle> {
    list
}

fn app_with(lists: Vec<Arc<Songlist>>) -> App {
    let lists = lists.into_iter().map(shared).collect();
    App::new(lists, None)
}

#[test]
fn new_without_lists_has_an_empty_active_list() {
    let app = App::new(Vec::new(), None);
    assert_eq!(app.list_count(), 1);
    assert!(app.active_songlist().is_empty());
    assert!(app.cursor_song().is_none());
    assert!(!app.is_connected());
}

#[test]
fn cursor_wraps_in_both_directions() {
    let mut app = app_with(vec![list("q", &["a", "b", "c"])]);
    app.prev();
    assert_eq!(app.cursor, 2);
    app.next();
    assert_eq!(app.cursor, 0);
    app.bottom();
    assert_eq!(app.cursor_song().and_then(|s| s.file().map(String::from)), Some("c".into()));
    app.top();
    assert_eq!(app.cursor, 0);
}

#[test]
fn cursor_moves_are_no_ops_on_empty_list() {
    let mut app = app_with(vec![list("q", &[])]);
    app.next();
    app.prev();
    app.bottom();
    assert_eq!(app.cursor, 0);
}

#[test]
fn clamp_cursor_follows_shrinking_list() {
    let queue = list("q", &["a", "b", "c"]);
    let mut app = app_with(vec![Arc::clone(&queue)]);
    app.bottom();
    queue.truncate(1).unwrap();
    app.clamp_cursor();
    assert_eq!(app.cursor, 0);
}

#[test]
fn next_list_switches_active_list_and_resets_cursor() {
    let mut app = app_with(vec![list("Queue", &["a", "b"]), list("Library", &["x"])]);
    app.next();
    app.next_list();
    assert_eq!(app.active_index(), 1);
    assert_eq!(app.cursor, 0);
    assert_eq!(app.active_songlist().name(), "Library");
    app.next_list();
    assert_eq!(app.active_index(), 0);
}

#[test]
fn command_line_editing() {
    let mut app = app_with(vec![list("q", &[])]);
    app.enter_command_mode();
    assert_eq!(app.mode, InputMode::Command);
    app.push_input_char('s');
    app.push_input_char('x');
    app.pop_input_char();
    assert_eq!(app.input, "s");
    app.pop_input_char();
    app.pop_input_char();
    assert_eq!(app.mode, InputMode::Normal);

    app.enter_command_mode();
    app.push_input_char('x');
    app.cancel_command();
    assert_eq!(app.mode, InputMode::Normal);
    assert!(app.input.is_empty());
}

#[test]
fn submit_reports_errors_in_status_bar() {
    let mut app = app_with(vec![list("q", &["a"])]);
    app.enter_command_mode();
    for c in "play cursor".chars() {
        app.push_input_char(c);
    }
    app.submit_command();
    assert_eq!(app.mode, InputMode::Normal);
    let msg = app.message.clone().unwrap();
    assert!(msg.is_error);
    assert!(msg.text.contains("not connected"));
}

#[test]
fn execute_sort_reorders_active_list() {
    let queue = Songlist::new("q");
    for (file, title) in [("1", "b"), ("2", "a")] {
        let mut song = s(file);
        song.set_tag("title", title);
        queue.add(song);
    }
    let mut app = app_with(vec![Arc::new(queue)]);
    app.execute("sort title");
    assert!(!app.message.clone().unwrap().is_error);
    assert_eq!(app.cursor_song().unwrap().file(), Some("2"));
}

#[test]
fn play_cursor_goes_through_daemon() {
    let mut daemon = MockDaemon::new();
    daemon
        .expect_add_id()
        .with(eq("a"), eq(None::<u32>))
        .times(1)
        .returning(|_, _| Ok(5));
    daemon
        .expect_play_id()
        .with(eq(5u32))
        .times(1)
        .returning(|_| Ok(()));
    let daemon: Arc<dyn DaemonClient> = Arc::new(daemon);
    let lists: Vec<Arc<dyn Lifecycle>> = vec![shared(list("Library", &["a"]))];
    let mut app = App::new(lists, Some(daemon));
    assert!(app.is_connected());
    assert_eq!(app.cursor_song().unwrap().id, SongId::Unassigned);

    app.execute("play cursor");
    assert!(!app.message.clone().unwrap().is_error);
}

#[test]
fn close_active_deletes_stored_playlist() {
    let mut daemon = MockDaemon::new();
    daemon
        .expect_remove_playlist()
        .with(eq("evening"))
        .times(1)
        .returning(|_| Ok(()));
    let daemon: Arc<dyn DaemonClient> = Arc::new(daemon);
    let playlist: Arc<dyn Lifecycle> = Arc::new(Playlist::new(Songlist::new("evening"), Arc::clone(&daemon)));
    let lists: Vec<Arc<dyn Lifecycle>> = vec![shared(list("Queue", &[])), playlist];
    let mut app = App::new(lists, Some(daemon));

    app.next_list();
    app.close_active();
    assert_eq!(app.list_count(), 1);
    assert_eq!(app.active_index(), 0);
    assert_eq!(app.active_songlist().name(), "Queue");
    assert!(!app.message.clone().unwrap().is_error);

    app.close_active();
    assert_eq!(app.list_count(), 1);
    assert!(app.message.clone().unwrap().is_error);
}

#[test]
fn close_active_reports_daemon_failure() {
    let mut daemon = MockDaemon::new();
    daemon
        .expect_remove_playlist()
        .returning(|_| Err(DaemonError::Protocol("denied".to_string())));
    let daemon: Arc<dyn DaemonClient> = Arc::new(daemon);
    let playlist: Arc<dyn Lifecycle> = Arc::new(Playlist::new(Songlist::new("p"), Arc::clone(&daemon)));
    let lists: Vec<Arc<dyn Lifecycle>> = vec![playlist, shared(list("Queue", &[]))];
    let mut app = App::new(lists, Some(daemon));

    app.close_active();
    assert_eq!(app.list_count(), 1);
    assert!(app.message.clone().unwrap().text.contains("denied"));
}
