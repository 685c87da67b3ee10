//! Setterline -- a volleyball rotation engine speaking a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics are logged to stderr.

use std::io::{self, BufRead, Write};

use tracing::{error, warn};

use setterline::logging;
use setterline::protocol::parser::{parse_command, Command};
use setterline::session::Session;

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() -> io::Result<()> {
    logging::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("failed to read stdin: {}", e);
                break;
            }
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Hello => session.handle_hello(&mut out)?,
            Command::IsReady => session.handle_isready(&mut out)?,
            Command::SetOption { name, value } => {
                if let Err(e) = session.set_option(&name, value.as_deref()) {
                    warn!("setoption: {}", e);
                }
            }
            Command::NewSession => session.new_session(),
            Command::Rotation(n) => {
                if let Err(e) = session.set_rotation(n) {
                    warn!("rotation: {}", e);
                }
            }
            Command::Next => session.next(),
            Command::Prev => session.prev(),
            Command::Offset(n) => {
                if let Err(e) = session.set_offset(n) {
                    warn!("offset: {}", e);
                }
            }
            Command::Start(n) => {
                if let Err(e) = session.set_start(n) {
                    warn!("start: {}", e);
                }
            }
            Command::View(mode) => session.set_view(mode),
            Command::Toggle => session.toggle_view(),
            Command::Show => session.handle_show(&mut out)?,
            Command::Json => session.handle_json(&mut out)?,
            Command::Quit => break,
        }
    }

    out.flush()
}
