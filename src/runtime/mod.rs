use std::env;
use std::sync::Arc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::daemon::DaemonClient;

mod event_loop;
mod logging;
mod refresh;
mod settings;
mod startup;


/// Run the client until the user quits.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    if env::args().nth(1).as_deref() == Some("--dump-config") {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    logging::init_logging(&settings.log)?;

    let daemon: Option<Arc<dyn DaemonClient>> = match startup::connect(&settings.daemon) {
        Ok(client) => Some(client),
        Err(e) => {
            log::warn!(
                "cannot connect to {}:{}: {e}",
                settings.daemon.host,
                settings.daemon.port
            );
            None
        }
    };

    let lists = startup::load_lists(daemon.as_ref(), &settings.sort);
    let mut refresher = daemon.as_ref().map(|d| {
        refresh::QueueRefresher::spawn(
            Arc::clone(&lists.queue),
            Arc::clone(d),
            Duration::from_millis(settings.daemon.refresh_ms),
        )
    });

    let mut app = App::new(lists.views, daemon);
    if !app.is_connected() {
        app.set_error(format!(
            "not connected to {}:{}",
            settings.daemon.host, settings.daemon.port
        ));
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut app, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(refresher) = refresher.as_mut() {
        refresher.stop();
    }
    log::info!("lento exiting");

    run_result
}
