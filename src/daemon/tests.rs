use super::mpd::MpdClient;
use super::*;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

enum Reply {
    Now(&'static str),
    /// Send the head, stall, then send the tail.
    Stalled(&'static str, Duration, &'static str),
}

/// Start a one-shot fake MPD server answering each request with the next
/// canned reply (`OK` once they run out). `idle`/`noidle` are handled
/// internally and not recorded. Returns the port and a handle yielding
/// the recorded request lines.
fn fake_server(replies: Vec<Reply>) -> (u16, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut writer = stream.try_clone().unwrap();
        let mut reader = BufReader::new(stream);
        writer.write_all(b"OK MPD 0.23.5\n").unwrap();

        let mut replies = replies.into_iter();
        let mut received = Vec::new();
        let mut line = String::new();
        loop {
            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let request = line.trim_end();
            let sent = match request {
                r if r == "idle" || r.starts_with("idle ") => Ok(()),
                "noidle" => writer.write_all(b"OK\n"),
                r if r.starts_with("binarylimit") => writer.write_all(b"OK\n"),
                _ => {
                    received.push(request.to_string());
                    match replies.next() {
                        Some(Reply::Now(text)) => writer.write_all(text.as_bytes()),
                        Some(Reply::Stalled(head, pause, tail)) => {
                            stalled_reply(&mut writer, head, pause, tail)
                        }
                        None => writer.write_all(b"OK\n"),
                    }
                }
            };
            if sent.is_err() {
                break;
            }
        }
        received
    });
    (port, handle)
}

fn stalled_reply(
    writer: &mut impl Write,
    head: &str,
    pause: Duration,
    tail: &str,
) -> std::io::Result<()> {
    writer.write_all(head.as_bytes())?;
    writer.flush()?;
    thread::sleep(pause);
    writer.write_all(tail.as_bytes())
}

fn connect(port: u16) -> MpdClient {
    MpdClient::connect("127.0.0.1", port, None, TIMEOUT).unwrap()
}

#[test]
fn play_variants_issue_play_commands() {
    let (port, server) = fake_server(vec![]);
    let client = connect(port);
    client.play(None).unwrap();
    client.play(Some(3)).unwrap();
    client.play_id(17).unwrap();
    drop(client);

    let received = server.join().unwrap();
    assert_eq!(received.len(), 3);
    assert_eq!(received[0], "play");
    assert!(received[1].starts_with("play ") && received[1].ends_with('3'));
    assert!(received[2].starts_with("playid") && received[2].ends_with("17"));
}

#[test]
fn add_id_returns_assigned_id() {
    let (port, server) = fake_server(vec![Reply::Now("Id: 99\nOK\n")]);
    let client = connect(port);
    assert_eq!(client.add_id("dir/song.mp3", None).unwrap(), 99);
    drop(client);

    let received = server.join().unwrap();
    assert!(received[0].starts_with("addid"));
    assert!(received[0].contains("dir/song.mp3"));
}

#[test]
fn password_is_sent_on_connect() {
    let (port, server) = fake_server(vec![Reply::Now("OK\n")]);
    let client = MpdClient::connect("127.0.0.1", port, Some("hunter2"), TIMEOUT).unwrap();
    drop(client);

    let received = server.join().unwrap();
    assert!(received[0].starts_with("password"));
    assert!(received[0].contains("hunter2"));
}

#[test]
fn error_reply_becomes_command_error() {
    let (port, server) = fake_server(vec![Reply::Now("ACK [50@0] {playid} No such song\n")]);
    let client = connect(port);
    let err = client.play_id(5).unwrap_err();
    assert!(matches!(err, DaemonError::Command(_)));
    drop(client);
    server.join().unwrap();
}

#[test]
fn queue_carries_ids_positions_and_tags() {
    let (port, server) = fake_server(vec![Reply::Now(
        "file: a.mp3\nTitle: A\nArtist: X\nPos: 0\nId: 1\n\
         file: b.mp3\nTitle: B\nPos: 1\nId: 2\nOK\n",
    )]);
    let client = connect(port);
    let queue = client.queue().unwrap();
    drop(client);

    assert_eq!(queue.len(), 2);
    assert_eq!(queue[0]["file"], "a.mp3");
    assert_eq!(queue[0]["Title"], "A");
    assert_eq!(queue[0]["Artist"], "X");
    assert_eq!(queue[1]["Id"], "2");
    assert_eq!(queue[1]["Pos"], "1");
    assert!(!queue[1].contains_key("Artist"));
    assert_eq!(server.join().unwrap(), vec!["playlistinfo"]);
}

#[test]
fn library_songs_have_no_queue_id() {
    let (port, server) = fake_server(vec![Reply::Now(
        "file: music/a.flac\nAlbum: Blue\nfile: music/b.flac\nOK\n",
    )]);
    let client = connect(port);
    let library = client.library().unwrap();
    drop(client);

    assert_eq!(library.len(), 2);
    assert_eq!(library[0]["Album"], "Blue");
    assert!(!library[0].contains_key("Id"));
    assert!(server.join().unwrap()[0].starts_with("listallinfo"));
}

#[test]
fn stored_playlists_are_listed_read_and_removed() {
    let (port, server) = fake_server(vec![
        Reply::Now(
            "playlist: evening\nLast-Modified: 2024-01-01T00:00:00Z\n\
             playlist: gym\nLast-Modified: 2024-02-01T00:00:00Z\nOK\n",
        ),
        Reply::Now("file: x.ogg\nTitle: X\nOK\n"),
        Reply::Now("OK\n"),
    ]);
    let client = connect(port);
    assert_eq!(client.playlists().unwrap(), vec!["evening", "gym"]);
    let songs = client.playlist("gym").unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["file"], "x.ogg");
    client.remove_playlist("gym").unwrap();
    drop(client);

    let received = server.join().unwrap();
    assert_eq!(received[0], "listplaylists");
    assert!(received[1].starts_with("listplaylistinfo") && received[1].contains("gym"));
    assert!(received[2].starts_with("rm") && received[2].contains("gym"));
}

#[test]
fn timed_out_request_does_not_shift_later_replies() {
    let (port, server) = fake_server(vec![
        Reply::Stalled(
            "file: a.mp3\nPos: 0\nId: 1\n",
            Duration::from_millis(600),
            "OK\n",
        ),
        Reply::Now("Id: 77\nOK\n"),
    ]);
    let client = MpdClient::connect("127.0.0.1", port, None, Duration::from_millis(200)).unwrap();

    let err = client.queue().unwrap_err();
    assert!(matches!(
        err,
        DaemonError::Timeout {
            command: "playlistinfo",
            ..
        }
    ));

    // Let the stalled reply finish arriving before the next request.
    thread::sleep(Duration::from_millis(800));
    assert_eq!(client.add_id("b.mp3", None).unwrap(), 77);
    drop(client);
    server.join().unwrap();
}

#[test]
fn bad_greeting_fails_to_connect() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream.write_all(b"HELLO\n").unwrap();
    });
    let err = MpdClient::connect("127.0.0.1", port, None, TIMEOUT).err().unwrap();
    assert!(matches!(err, DaemonError::Connect(_)));
    server.join().unwrap();
}

#[test]
fn refused_connection_is_an_io_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let err = MpdClient::connect("127.0.0.1", port, None, TIMEOUT).err().unwrap();
    assert!(matches!(err, DaemonError::Io(_)));
}
