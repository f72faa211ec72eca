use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    NotStarted,
    Started,
}

impl EngineState {
    pub const fn is_started(self) -> bool {
        matches!(self, Self::Started)
    }
}

/// Everything the game reacts to, after input normalization.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Move(Direction),
    Activate,
    Close,
    JumpTo(CellIndex),
    ClickCell(CellIndex),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    NoChange,
    Started,
    Moved,
    Discovered,
    Opened,
    Closed,
}

impl CommandOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Grid, cursor and detail-view state of one discovery game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiscoveryEngine {
    grid: GridModel,
    cursor: Cursor,
    expanded: Option<CellIndex>,
    state: EngineState,
}

impl DiscoveryEngine {
    pub fn new(grid: GridModel) -> Self {
        let cursor = Cursor::new(grid.len());
        Self {
            grid,
            cursor,
            expanded: None,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_started(&self) -> bool {
        self.state.is_started()
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn items(&self) -> &[Item] {
        self.grid.items()
    }

    pub fn side(&self) -> CellCount {
        self.cursor.side()
    }

    pub fn position(&self) -> CellIndex {
        self.cursor.position()
    }

    pub fn discovered_count(&self) -> CellCount {
        self.grid.discovered_count()
    }

    pub fn expanded(&self) -> Option<CellIndex> {
        self.expanded
    }

    /// Item shown in the detail view, if one is open.
    pub fn expanded_item(&self) -> Option<&Item> {
        self.expanded.map(|index| &self.grid[index])
    }

    /// Applies `command` in place.
    ///
    /// Before [`Command::Start`] every other command is ignored. Indices are
    /// validated before anything changes, so an error leaves the engine as it was.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome> {
        use Command::*;

        if !self.is_started() && command != Start {
            log::trace!("ignoring {:?} before start", command);
            return Ok(CommandOutcome::NoChange);
        }

        let outcome = match command {
            Start => self.start(),
            Move(direction) => self.move_cursor(direction),
            Activate => self.activate(),
            Close => self.close(),
            JumpTo(index) => self.jump_to(index)?,
            ClickCell(index) => self.click_cell(index)?,
        };
        log::debug!("{:?} -> {:?}", command, outcome);
        Ok(outcome)
    }

    /// Returns the state after `command`, leaving `self` untouched.
    pub fn reduce(&self, command: Command) -> Result<Self> {
        let mut next = self.clone();
        next.apply(command)?;
        Ok(next)
    }

    fn start(&mut self) -> CommandOutcome {
        if self.is_started() {
            return CommandOutcome::NoChange;
        }
        self.state = EngineState::Started;
        CommandOutcome::Started
    }

    fn move_cursor(&mut self, direction: Direction) -> CommandOutcome {
        let before = self.cursor.position();
        let after = self.cursor.step(direction);
        let closed = self.expanded.take().is_some();

        if before != after || closed {
            CommandOutcome::Moved
        } else {
            CommandOutcome::NoChange
        }
    }

    fn jump_to(&mut self, index: CellIndex) -> Result<CommandOutcome> {
        let index = self.grid.validate_index(index)?;
        let before = self.cursor.position();
        self.cursor.jump_to(index)?;
        let closed = self.expanded.take().is_some();

        Ok(if before != index || closed {
            CommandOutcome::Moved
        } else {
            CommandOutcome::NoChange
        })
    }

    fn activate(&mut self) -> CommandOutcome {
        let index = self.cursor.position();
        let newly_discovered = self.grid.discover(index).unwrap_or_default();
        let already_open = self.expanded.replace(index) == Some(index);

        match (newly_discovered, already_open) {
            (true, _) => CommandOutcome::Discovered,
            (false, false) => CommandOutcome::Opened,
            (false, true) => CommandOutcome::NoChange,
        }
    }

    fn close(&mut self) -> CommandOutcome {
        match self.expanded.take() {
            Some(_) => CommandOutcome::Closed,
            None => CommandOutcome::NoChange,
        }
    }

    fn click_cell(&mut self, index: CellIndex) -> Result<CommandOutcome> {
        let index = self.grid.validate_index(index)?;

        if index == self.cursor.position() {
            return Ok(self.activate());
        }

        if self.grid.is_discovered(index) {
            return Ok(if self.expanded == Some(index) {
                self.expanded = None;
                CommandOutcome::Closed
            } else {
                self.expanded = Some(index);
                CommandOutcome::Opened
            });
        }

        self.jump_to(index)
    }
}
