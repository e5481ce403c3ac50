use serde::{Deserialize, Serialize};

use crate::*;

/// Discrete requests mapped from keys or buttons by the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Go back to the menu to pick a new board.
    NewGame,
    /// Start over with the current board size and mine count.
    Reset,
    Quit,
}

/// Everything the presentation layer sampled during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub click: ClickKind,
    /// Pointer position in screen pixels.
    pub pointer: (i32, i32),
    /// Time since the previous tick.
    pub delta_ms: u32,
    pub command: Option<Command>,
}

/// Valid transitions:
/// - Menu -> Playing (menu selection confirmed)
/// - Playing -> Playing (reset or continued play)
/// - Playing -> Menu (new game requested)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Menu,
    Playing,
}

/// Inputs that can move the controller between screens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScreenEvent {
    Start,
    Reset,
    NewGame,
}

impl Screen {
    pub const fn next(self, event: ScreenEvent) -> Self {
        match (self, event) {
            (Self::Menu, ScreenEvent::Start) => Self::Playing,
            (Self::Menu, _) => Self::Menu,
            (Self::Playing, ScreenEvent::NewGame) => Self::Menu,
            (Self::Playing, _) => Self::Playing,
        }
    }
}

/// Drives a game frame by frame: owns the board, the elapsed time and the current screen.
#[derive(Clone, Debug)]
pub struct GameController {
    settings: Settings,
    screen: Screen,
    board: Option<Board>,
    elapsed_ms: u64,
    running: bool,
}

impl GameController {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            screen: Screen::default(),
            board: None,
            elapsed_ms: 0,
            running: true,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The board being played, or the last one played while back in the menu.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whole seconds played, capped at the configured display limit.
    pub fn elapsed_seconds(&self) -> u32 {
        let secs = self.elapsed_ms / 1000;
        u32::try_from(secs)
            .unwrap_or(u32::MAX)
            .min(self.settings.time_cap)
    }

    pub fn mines_remaining(&self) -> isize {
        self.board.as_ref().map_or(0, Board::mines_remaining)
    }

    /// Leaves the menu with the selected board.
    pub fn start(&mut self, config: BoardConfig) -> Result<()> {
        if self.screen != Screen::Menu {
            return Err(GameError::NotInMenu);
        }
        self.board = Some(Board::create(config.width, config.height, config.mines)?);
        self.elapsed_ms = 0;
        self.transition(ScreenEvent::Start);
        Ok(())
    }

    /// Processes one frame of input.
    pub fn tick(&mut self, input: &TickInput) {
        if let Some(command) = input.command {
            self.handle_command(command);
            return;
        }

        if self.screen != Screen::Playing {
            return;
        }
        let Some(board) = self.board.as_mut() else {
            return;
        };
        if board.is_finished() {
            return;
        }

        self.elapsed_ms += u64::from(input.delta_ms);

        let (row, col) = screen_to_index(
            input.pointer,
            self.settings.board_offset,
            self.settings.tile_size,
        );
        match input.click {
            ClickKind::None => {}
            ClickKind::Left => {
                let outcome = board.reveal_tile(row, col);
                if outcome.has_update() {
                    log::debug!("Reveal ({}, {}): {:?}", row, col, outcome);
                }
            }
            ClickKind::Right => {
                let outcome = board.place_flag(row, col);
                if outcome.has_update() {
                    log::debug!("Flag ({}, {}): {:?}", row, col, outcome);
                }
            }
        }
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => {
                log::debug!("Quit requested");
                self.running = false;
            }
            Command::NewGame => self.transition(ScreenEvent::NewGame),
            Command::Reset => {
                if self.screen != Screen::Playing {
                    return;
                }
                if let Some(board) = self.board.as_mut() {
                    let config = board.config();
                    match board.reset(config.width, config.height, config.mines) {
                        Ok(()) => self.elapsed_ms = 0,
                        Err(err) => log::warn!("Could not reset board: {}", err),
                    }
                }
                self.transition(ScreenEvent::Reset);
            }
        }
    }

    fn transition(&mut self, event: ScreenEvent) {
        let next = self.screen.next(event);
        if next != self.screen {
            log::debug!("{:?} -> {:?}", self.screen, next);
        }
        self.screen = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(config: BoardConfig) -> GameController {
        let mut controller = GameController::new(Settings::default());
        controller.start(config).unwrap();
        controller
    }

    fn click(click: ClickKind, row: i32, col: i32) -> TickInput {
        // aim at the middle of the tile
        TickInput {
            click,
            pointer: (col * 32 + 16, row * 32 + 16),
            delta_ms: 16,
            command: None,
        }
    }

    fn command(command: Command) -> TickInput {
        TickInput {
            command: Some(command),
            ..TickInput::default()
        }
    }

    #[test]
    fn transition_table() {
        use ScreenEvent::*;

        assert_eq!(Screen::Menu.next(Start), Screen::Playing);
        assert_eq!(Screen::Menu.next(Reset), Screen::Menu);
        assert_eq!(Screen::Menu.next(NewGame), Screen::Menu);
        assert_eq!(Screen::Playing.next(Reset), Screen::Playing);
        assert_eq!(Screen::Playing.next(Start), Screen::Playing);
        assert_eq!(Screen::Playing.next(NewGame), Screen::Menu);
    }

    #[test]
    fn starts_in_menu() {
        let controller = GameController::new(Settings::default());

        assert_eq!(controller.screen(), Screen::Menu);
        assert!(controller.board().is_none());
        assert!(controller.is_running());
        assert_eq!(controller.elapsed_seconds(), 0);
    }

    #[test]
    fn start_builds_selected_board() {
        let controller = playing(BoardConfig::new_unchecked(12, 10, 20));
        let board = controller.board().unwrap();

        assert_eq!(controller.screen(), Screen::Playing);
        assert_eq!(board.size(), (10, 12));
        assert_eq!(controller.mines_remaining(), 20);
    }

    #[test]
    fn start_only_from_menu() {
        let mut controller = playing(Preset::Beginner.config());

        assert_eq!(
            controller.start(Preset::Expert.config()),
            Err(GameError::NotInMenu)
        );
    }

    #[test]
    fn start_rejects_invalid_selection() {
        let mut controller = GameController::new(Settings::default());

        assert!(controller.start(BoardConfig::new_unchecked(3, 3, 9)).is_err());
        assert_eq!(controller.screen(), Screen::Menu);
    }

    #[test]
    fn clicks_reach_the_board() {
        let mut controller = playing(BoardConfig::new_unchecked(10, 10, 0));

        controller.tick(&click(ClickKind::Right, 2, 3));
        assert_eq!(controller.board().unwrap().overlay_at((2, 3)), Overlay::Flagged);
        assert_eq!(controller.mines_remaining(), -1);

        controller.tick(&click(ClickKind::Left, 0, 0));
        let board = controller.board().unwrap();
        assert_eq!(board.overlay_at((0, 0)), Overlay::Revealed);
        assert_eq!(board.overlay_at((2, 3)), Overlay::Flagged);
        assert!(!board.is_solved());
    }

    #[test]
    fn clicks_outside_board_are_harmless() {
        let mut controller = playing(BoardConfig::new_unchecked(10, 10, 5));

        controller.tick(&TickInput {
            click: ClickKind::Left,
            pointer: (5, 10 * 32 + 4),
            delta_ms: 16,
            command: None,
        });

        assert_eq!(controller.board().unwrap().revealed_count(), 0);
    }

    #[test]
    fn timer_accumulates_while_playing() {
        let mut controller = playing(BoardConfig::new_unchecked(10, 10, 5));

        for _ in 0..125 {
            controller.tick(&TickInput {
                delta_ms: 20,
                ..TickInput::default()
            });
        }

        assert_eq!(controller.elapsed_seconds(), 2);
    }

    #[test]
    fn timer_display_is_capped() {
        let mut controller = playing(BoardConfig::new_unchecked(10, 10, 5));

        controller.tick(&TickInput {
            delta_ms: u32::MAX,
            ..TickInput::default()
        });

        assert_eq!(controller.elapsed_seconds(), 9999);
    }

    #[test]
    fn timer_stops_on_solved_board() {
        let mut controller = playing(BoardConfig::new_unchecked(2, 2, 0));

        controller.tick(&TickInput {
            delta_ms: 1500,
            ..click(ClickKind::Left, 0, 0)
        });
        assert!(controller.board().unwrap().is_solved());

        controller.tick(&TickInput {
            delta_ms: 5000,
            ..TickInput::default()
        });
        assert_eq!(controller.elapsed_seconds(), 1);
    }

    #[test]
    fn reset_keeps_dimensions_and_clears_timer() {
        let mut controller = playing(BoardConfig::new_unchecked(12, 10, 20));
        controller.tick(&TickInput {
            delta_ms: 3000,
            ..click(ClickKind::Right, 0, 0)
        });

        controller.tick(&command(Command::Reset));

        let board = controller.board().unwrap();
        assert_eq!(controller.screen(), Screen::Playing);
        assert_eq!(board.config(), BoardConfig::new_unchecked(12, 10, 20));
        assert_eq!(board.flag_count(), 0);
        assert_eq!(controller.elapsed_seconds(), 0);
    }

    #[test]
    fn new_game_returns_to_menu() {
        let mut controller = playing(Preset::Beginner.config());

        controller.tick(&command(Command::NewGame));
        assert_eq!(controller.screen(), Screen::Menu);

        // clicks in the menu are not board moves
        controller.tick(&click(ClickKind::Left, 0, 0));
        assert_eq!(controller.board().unwrap().revealed_count(), 0);

        controller.start(Preset::Intermediate.config()).unwrap();
        assert_eq!(controller.board().unwrap().size(), (16, 16));
        assert_eq!(controller.screen(), Screen::Playing);
    }

    #[test]
    fn reset_in_menu_is_ignored() {
        let mut controller = GameController::new(Settings::default());

        controller.tick(&command(Command::Reset));

        assert_eq!(controller.screen(), Screen::Menu);
        assert!(controller.board().is_none());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut controller = playing(Preset::Beginner.config());

        controller.tick(&command(Command::Quit));

        assert!(!controller.is_running());
    }
}
