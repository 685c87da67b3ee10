//! Session state management.
//!
//! Holds the display rotation, offset and view mode chosen by the user, plus
//! the startup configuration, and answers protocol commands. The rotation
//! core never sees this state directly: every response resolves a fresh
//! `Layout` from the current values.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{RotationConfig, UnknownConfig};
use crate::court::{Offset, Position, Rotation};
use crate::error::DomainError;
use crate::layout::{ActualPositionOverrides, Layout, OverridesError, ViewMode};
use crate::protocol::format::format_layout;

/// Errors from `setoption`.
#[derive(Debug, Error)]
pub enum OptionError {
    #[error("unknown option '{0}'")]
    Unknown(String),

    #[error("option '{0}' requires a value")]
    MissingValue(String),

    #[error(transparent)]
    Config(#[from] UnknownConfig),

    #[error("failed to load overrides: {0}")]
    Overrides(#[from] OverridesError),

    #[error("option '{0}' can only be set before the session starts")]
    SessionStarted(String),
}

/// The user-controlled part of a session.
///
/// Every transition returns a new state; moving the rotation always goes
/// back to the standard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub rotation: Rotation,
    pub offset: Offset,
    pub view: ViewMode,
}

impl SessionState {
    /// Back to rotation 1 in the standard view, keeping the offset.
    pub const fn restart(self) -> Self {
        SessionState {
            rotation: Rotation::FIRST,
            offset: self.offset,
            view: ViewMode::Standard,
        }
    }

    pub const fn with_rotation(self, rotation: Rotation) -> Self {
        SessionState {
            rotation,
            offset: self.offset,
            view: ViewMode::Standard,
        }
    }

    pub const fn next(self) -> Self {
        self.with_rotation(self.rotation.next())
    }

    pub const fn prev(self) -> Self {
        self.with_rotation(self.rotation.prev())
    }

    /// A new offset restarts the cycle from display rotation 1.
    pub const fn with_offset(self, offset: Offset) -> Self {
        SessionState {
            rotation: Rotation::FIRST,
            offset,
            view: ViewMode::Standard,
        }
    }

    pub const fn with_view(self, view: ViewMode) -> Self {
        SessionState { view, ..self }
    }
}

/// Where the active override table came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverridesSource {
    #[default]
    None,
    Builtin,
    File(PathBuf),
}

impl std::fmt::Display for OverridesSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverridesSource::None => f.write_str("none"),
            OverridesSource::Builtin => f.write_str("builtin"),
            OverridesSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything a shell needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub view: ViewMode,
    /// The setter stands in position 1 and serves in the standard view.
    pub setter_serving: bool,
    pub layout: Layout,
}

/// Holds the session between commands.
#[derive(Debug, Default)]
pub struct Session {
    pub state: SessionState,
    config: RotationConfig,
    overrides: Option<ActualPositionOverrides>,
    overrides_source: OverridesSource,
    /// Set by the first state change; the config is fixed from then on.
    started: bool,
}

impl Session {
    /// Creates a standard-table session with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RotationConfig) -> Self {
        Session {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> RotationConfig {
        self.config
    }

    pub fn overrides(&self) -> Option<&ActualPositionOverrides> {
        self.overrides.as_ref()
    }

    pub fn overrides_source(&self) -> &OverridesSource {
        &self.overrides_source
    }

    /// Resolves the layout for the current state.
    pub fn layout(&self) -> Layout {
        Layout::resolve(
            self.config,
            self.state.rotation,
            self.state.offset,
            self.overrides.as_ref(),
        )
    }

    fn serving(&self, layout: &Layout) -> bool {
        self.state.view == ViewMode::Standard && layout.setter == Position::One
    }

    pub fn snapshot(&self) -> Snapshot {
        let layout = self.layout();
        Snapshot {
            view: self.state.view,
            setter_serving: self.serving(&layout),
            layout,
        }
    }

    fn apply(&mut self, state: SessionState) {
        self.state = state;
        self.started = true;
        let layout = self.layout();
        debug!(
            display = %layout.display,
            effective = %layout.effective,
            offset = %layout.offset,
            setter = %layout.setter,
            penetration = layout.needs_penetration,
            view = self.state.view.name(),
            "session state updated"
        );
    }

    /// Starts over at rotation 1; the offset survives.
    pub fn new_session(&mut self) {
        self.apply(self.state.restart());
    }

    pub fn set_rotation(&mut self, rotation: u8) -> Result<(), DomainError> {
        let rotation = Rotation::new(rotation)?;
        self.apply(self.state.with_rotation(rotation));
        Ok(())
    }

    pub fn next(&mut self) {
        self.apply(self.state.next());
    }

    pub fn prev(&mut self) {
        self.apply(self.state.prev());
    }

    pub fn set_offset(&mut self, offset: u8) -> Result<(), DomainError> {
        let offset = Offset::new(offset)?;
        self.apply(self.state.with_offset(offset));
        Ok(())
    }

    /// Picks the offset that puts the setter at `position` in rotation 1.
    pub fn set_start(&mut self, position: u8) -> Result<(), DomainError> {
        let position = Position::try_from(position)?;
        let offset = self.config.offset_for_start(position);
        info!(start = %position, offset = %offset, "setter starting position set");
        self.apply(self.state.with_offset(offset));
        Ok(())
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.apply(self.state.with_view(view));
    }

    pub fn toggle_view(&mut self) {
        self.set_view(self.state.view.toggled());
    }

    /// Whether any rotation, offset or view command has been applied.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Sets an option by name.
    ///
    /// `Config` is only accepted before the first state change: the offset
    /// chosen by `start` is an index into the active setter table.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        match name {
            "Config" => {
                if self.started {
                    return Err(OptionError::SessionStarted(name.to_string()));
                }
                let value = value.ok_or_else(|| OptionError::MissingValue(name.to_string()))?;
                let config: RotationConfig = value.parse()?;
                if self.overrides_source == OverridesSource::Builtin {
                    self.overrides = Some(ActualPositionOverrides::builtin_for(config)?);
                }
                self.config = config;
                info!(config = %self.config, "rotation config set");
            }
            "Overrides" => {
                let source = match value {
                    None | Some("none") => OverridesSource::None,
                    Some("builtin") => OverridesSource::Builtin,
                    Some(path) => OverridesSource::File(PathBuf::from(path)),
                };
                self.overrides = match &source {
                    OverridesSource::None => None,
                    OverridesSource::Builtin => {
                        Some(ActualPositionOverrides::builtin_for(self.config)?)
                    }
                    OverridesSource::File(path) => Some(ActualPositionOverrides::load(path)?),
                };
                info!(
                    source = %source,
                    entries = self.overrides.as_ref().map_or(0, |o| o.len()),
                    "position overrides set"
                );
                self.overrides_source = source;
            }
            other => return Err(OptionError::Unknown(other.to_string())),
        }
        Ok(())
    }

    /// Handles the handshake: writes id, options, protocol_version, and hellook.
    pub fn handle_hello<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "id name setterline")?;
        writeln!(out, "id author setterline")?;
        writeln!(
            out,
            "option name Config type combo default standard var standard var counter"
        )?;
        writeln!(out, "option name Overrides type string default none")?;
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "hellook")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `show` command.
    pub fn handle_show<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let layout = self.layout();
        for line in format_layout(&layout, self.state.view, self.serving(&layout)) {
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "showok")?;
        out.flush()
    }

    /// Handles the `json` command.
    pub fn handle_json<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string(&self.snapshot())?;
        writeln!(out, "snapshot {}", json)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::Coord;

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn new_session_starts_at_rotation_one() {
        let session = Session::new();
        assert_eq!(session.state.rotation, Rotation::FIRST);
        assert_eq!(session.state.offset, Offset::ZERO);
        assert_eq!(session.state.view, ViewMode::Standard);
        assert_eq!(session.config(), RotationConfig::Standard);
        assert!(session.overrides().is_none());
    }

    #[test]
    fn next_and_prev_cycle() {
        let mut session = Session::new();
        session.prev();
        assert_eq!(session.state.rotation.get(), 6);
        session.next();
        session.next();
        assert_eq!(session.state.rotation.get(), 2);
    }

    #[test]
    fn moving_resets_view() {
        let mut session = Session::new();
        session.toggle_view();
        assert_eq!(session.state.view, ViewMode::Actual);
        session.next();
        assert_eq!(session.state.view, ViewMode::Standard);
    }

    #[test]
    fn new_session_keeps_offset() {
        let mut session = Session::new();
        session.set_offset(2).unwrap();
        session.set_rotation(4).unwrap();
        session.set_view(ViewMode::Actual);
        session.new_session();
        assert_eq!(session.state.rotation, Rotation::FIRST);
        assert_eq!(session.state.offset.get(), 2);
        assert_eq!(session.state.view, ViewMode::Standard);
    }

    #[test]
    fn domain_errors_leave_state_unchanged() {
        let mut session = Session::new();
        session.set_rotation(3).unwrap();
        assert_eq!(session.set_rotation(7), Err(DomainError::Rotation(7)));
        assert_eq!(session.set_offset(6), Err(DomainError::Offset(6)));
        assert_eq!(session.set_start(0), Err(DomainError::Position(0)));
        assert_eq!(session.state.rotation.get(), 3);
        assert_eq!(session.state.offset, Offset::ZERO);
    }

    #[test]
    fn start_position_sets_offset() {
        let mut session = Session::new();
        session.set_rotation(5).unwrap();
        session.set_start(6).unwrap();
        assert_eq!(session.state.rotation, Rotation::FIRST);
        assert_eq!(session.state.offset.get(), 2);
        assert_eq!(session.layout().setter, Position::Six);

        let mut counter = Session::with_config(RotationConfig::CounterRotation);
        counter.set_start(4).unwrap();
        assert_eq!(counter.state.offset.get(), 3);
        assert_eq!(counter.layout().setter, Position::Four);
    }

    #[test]
    fn set_option_config() {
        let mut session = Session::new();
        session.set_option("Config", Some("counter")).unwrap();
        assert_eq!(session.config(), RotationConfig::CounterRotation);
        assert_eq!(session.layout().setter, Position::One);

        assert!(matches!(
            session.set_option("Config", Some("diagonal")),
            Err(OptionError::Config(_))
        ));
        assert!(matches!(
            session.set_option("Config", None),
            Err(OptionError::MissingValue(_))
        ));
        assert_eq!(session.config(), RotationConfig::CounterRotation);
        assert!(!session.started());
    }

    #[test]
    fn config_is_fixed_once_session_starts() {
        let mut session = Session::new();
        session.set_start(6).unwrap();
        session.set_rotation(3).unwrap();
        assert!(session.started());
        let before = session.layout();

        assert!(matches!(
            session.set_option("Config", Some("counter")),
            Err(OptionError::SessionStarted(_))
        ));
        assert_eq!(session.config(), RotationConfig::Standard);
        assert_eq!(session.config().start_position(session.state.offset), Position::Six);
        assert_eq!(session.layout(), before);

        // A view change also starts the session.
        let mut session = Session::new();
        session.toggle_view();
        assert!(session.set_option("Config", Some("counter")).is_err());
    }

    #[test]
    fn overrides_can_change_after_start() {
        let mut session = Session::new();
        session.set_rotation(2).unwrap();
        session.set_option("Overrides", Some("builtin")).unwrap();
        assert!(session.overrides().is_some());
    }

    #[test]
    fn builtin_overrides_require_standard_config() {
        let mut counter = Session::with_config(RotationConfig::CounterRotation);
        assert!(matches!(
            counter.set_option("Overrides", Some("builtin")),
            Err(OptionError::Overrides(OverridesError::NoBuiltin(
                RotationConfig::CounterRotation
            )))
        ));
        assert!(counter.overrides().is_none());

        let mut session = Session::new();
        session.set_option("Overrides", Some("builtin")).unwrap();
        assert!(matches!(
            session.set_option("Config", Some("counter")),
            Err(OptionError::Overrides(OverridesError::NoBuiltin(_)))
        ));
        assert_eq!(session.config(), RotationConfig::Standard);
        assert!(session.overrides().is_some());
    }

    #[test]
    fn set_option_overrides() {
        let mut session = Session::new();
        session.set_option("Overrides", Some("builtin")).unwrap();
        assert_eq!(session.overrides_source(), &OverridesSource::Builtin);
        assert!(session.overrides().is_some());

        session.set_option("Overrides", Some("none")).unwrap();
        assert!(session.overrides().is_none());

        let err = session.set_option("Overrides", Some("/nonexistent/file.json"));
        assert!(matches!(err, Err(OptionError::Overrides(OverridesError::Io(_)))));
    }

    #[test]
    fn set_option_unknown() {
        let mut session = Session::new();
        assert!(matches!(
            session.set_option("Threads", Some("4")),
            Err(OptionError::Unknown(_))
        ));
    }

    #[test]
    fn actual_view_uses_overrides() {
        let mut session = Session::new();
        session.set_option("Overrides", Some("builtin")).unwrap();
        session.set_rotation(2).unwrap();
        let standard = session.snapshot();
        session.set_view(ViewMode::Actual);
        let actual = session.snapshot();

        let setter = actual.layout.setter_record();
        assert_eq!(setter.coord(ViewMode::Actual), Coord::new(68.0, 40.0));
        assert_eq!(
            standard.layout.setter_record().coord(ViewMode::Standard),
            Position::One.standard_coord()
        );
    }

    #[test]
    fn serving_flag_only_in_standard_view() {
        let mut session = Session::new();
        session.set_rotation(2).unwrap();
        assert!(session.snapshot().setter_serving);
        session.toggle_view();
        assert!(!session.snapshot().setter_serving);
        session.set_rotation(1).unwrap();
        assert!(!session.snapshot().setter_serving);
    }

    #[test]
    fn handle_hello_outputs_handshake() {
        let session = Session::new();
        let output = output_of(|out| session.handle_hello(out));
        assert!(output.contains("id name setterline"));
        assert!(output.contains("option name Config"));
        assert!(output.contains("protocol_version 1"));
        assert_eq!(output.lines().last(), Some("hellook"));
    }

    #[test]
    fn handle_isready_outputs_readyok() {
        let session = Session::new();
        let output = output_of(|out| session.handle_isready(out));
        assert_eq!(output.trim(), "readyok");
    }

    #[test]
    fn handle_show_outputs_layout() {
        let mut session = Session::new();
        session.set_rotation(2).unwrap();
        let output = output_of(|out| session.handle_show(out));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "rotation 2 effective 2 offset 0 config standard view standard");
        assert_eq!(lines[1], "setter position 1 row back penetration yes serving yes");
        assert_eq!(lines.iter().filter(|l| l.starts_with("player ")).count(), 6);
        assert!(lines.iter().any(|l| l.starts_with("route from 1")));
        assert_eq!(lines.last(), Some(&"showok"));
    }

    #[test]
    fn handle_json_outputs_snapshot() {
        let session = Session::new();
        let output = output_of(|out| session.handle_json(out));
        let json = output.trim().strip_prefix("snapshot ").unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["view"], "standard");
        assert_eq!(value["layout"]["setter"], 2);
        assert_eq!(value["layout"]["config"], "standard");
        assert_eq!(value["layout"]["players"].as_array().unwrap().len(), 6);
        assert!(value["layout"]["route"].is_null());
    }
}
