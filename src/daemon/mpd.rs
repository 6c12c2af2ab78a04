//! `DaemonClient` on top of the `mpd_client` crate.
//!
//! `mpd_client` is async; `MpdClient` owns a small tokio runtime and blocks
//! on it so the rest of the program stays synchronous. The crate frames
//! every reply itself, so a request that times out here is still read to
//! completion in the background and cannot desynchronise later requests.

use std::time::Duration;

use mpd_client::Client;
use mpd_client::commands::{
    self, Add, Command, DeletePlaylist, GetPlaylist, GetPlaylists, ListAllIn, Play, Queue,
};
use mpd_client::responses::{Song, SongInQueue};
use mpd_client::tag::Tag;
use tokio::net::TcpStream;
use tokio::runtime::{Builder, Runtime};

use super::{DaemonClient, DaemonError};
use crate::song::Attrs;

/// Tags copied from daemon songs into attribute sets.
fn copied_tags() -> [(Tag, &'static str); 10] {
    [
        (Tag::Artist, "Artist"),
        (Tag::AlbumArtist, "AlbumArtist"),
        (Tag::Album, "Album"),
        (Tag::Title, "Title"),
        (Tag::Track, "Track"),
        (Tag::Disc, "Disc"),
        (Tag::Date, "Date"),
        (Tag::Genre, "Genre"),
        (Tag::Composer, "Composer"),
        (Tag::Name, "Name"),
    ]
}

pub struct MpdClient {
    runtime: Runtime,
    client: Client,
    timeout: Duration,
}

impl MpdClient {
    /// Connect to `host:port`, authenticating with `password` when given.
    ///
    /// `timeout` bounds the connection attempt and every later request.
    pub fn connect(
        host: &str,
        port: u16,
        password: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, DaemonError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("lento-mpd")
            .enable_all()
            .build()?;

        let (client, mut events) = runtime.block_on(async {
            let stream = tokio::time::timeout(timeout, TcpStream::connect((host, port)))
                .await
                .map_err(|_| DaemonError::Timeout {
                    command: "connect",
                    after: timeout,
                })??;
            let connected = match password {
                Some(password) => Client::connect_with_password(stream, password).await?,
                None => Client::connect(stream).await?,
            };
            Ok::<_, DaemonError>(connected)
        })?;

        // Drain state change notifications; the queue view polls instead.
        runtime.spawn(async move {
            while events.next().await.is_some() {
                log::trace!("daemon state changed");
            }
            log::debug!("daemon connection closed");
        });

        Ok(Self {
            runtime,
            client,
            timeout,
        })
    }

    /// Send one typed command and wait for its response.
    fn run<C: Command>(&self, name: &'static str, command: C) -> Result<C::Response, DaemonError> {
        log::trace!("mpd > {name}");
        let reply = self
            .runtime
            .block_on(async { tokio::time::timeout(self.timeout, self.client.command(command)).await })
            .map_err(|_| DaemonError::Timeout {
                command: name,
                after: self.timeout,
            })?;
        Ok(reply?)
    }
}

impl DaemonClient for MpdClient {
    fn play(&self, position: Option<u32>) -> Result<(), DaemonError> {
        let command = match position {
            Some(pos) => Play::song(commands::SongPosition(pos as usize)),
            None => Play::current(),
        };
        self.run("play", command)
    }

    fn play_id(&self, id: u32) -> Result<(), DaemonError> {
        self.run("playid", Play::song(commands::SongId(u64::from(id))))
    }

    fn add_id(&self, uri: &str, position: Option<u32>) -> Result<u32, DaemonError> {
        let mut command = Add::uri(uri);
        if let Some(pos) = position {
            command = command.at(commands::SongPosition(pos as usize));
        }
        let id = self.run("addid", command)?;
        u32::try_from(id.0)
            .map_err(|_| DaemonError::Protocol(format!("song id {} out of range", id.0)))
    }

    fn queue(&self) -> Result<Vec<Attrs>, DaemonError> {
        let queue = self.run("playlistinfo", Queue)?;
        Ok(queue.iter().map(queued_song_attrs).collect())
    }

    fn library(&self) -> Result<Vec<Attrs>, DaemonError> {
        let songs = self.run("listallinfo", ListAllIn::root())?;
        Ok(songs.iter().map(song_attrs).collect())
    }

    fn playlists(&self) -> Result<Vec<String>, DaemonError> {
        let playlists = self.run("listplaylists", GetPlaylists)?;
        Ok(playlists.into_iter().map(|p| p.name).collect())
    }

    fn playlist(&self, name: &str) -> Result<Vec<Attrs>, DaemonError> {
        let songs = self.run("listplaylistinfo", GetPlaylist(name))?;
        Ok(songs.iter().map(song_attrs).collect())
    }

    fn remove_playlist(&self, name: &str) -> Result<(), DaemonError> {
        self.run("rm", DeletePlaylist(name))
    }
}

/// Attribute set of a database or playlist song. Multi-valued tags are
/// joined with `", "`.
fn song_attrs(song: &Song) -> Attrs {
    let mut attrs = Attrs::from([("file".to_string(), song.url.clone())]);
    for (tag, key) in copied_tags() {
        if let Some(values) = song.tags.get(&tag).filter(|v| !v.is_empty()) {
            attrs.insert(key.to_string(), values.join(", "));
        }
    }
    attrs
}

/// Attribute set of a queued song, carrying its queue id and position.
fn queued_song_attrs(queued: &SongInQueue) -> Attrs {
    let mut attrs = song_attrs(&queued.song);
    attrs.insert("Id".to_string(), queued.id.0.to_string());
    attrs.insert("Pos".to_string(), queued.position.0.to_string());
    attrs
}
