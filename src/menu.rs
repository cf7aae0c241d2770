//! Menu screens and cursor navigation, independent of the terminal.
//!
//! The control loop owns a [`Menu`], feeds it [`MenuInput`]s and reacts to
//! the [`MenuAction`] it returns. Choosing a difficulty or game mode only
//! updates the menu's selection; the next run picks it up.

use crate::game::settings::{Difficulty, GameMode};

/// Which menu is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuScreen {
    Main,
    Play,
    Difficulty,
    GameMode,
    Records,
    Paused,
    GameOver,
}

/// Input actions for menus (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select, // Enter
    Back,   // Esc
    Other,
}

/// What the control loop should do after a menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    StartGame,
    Resume,
    Restart,
    BackToMain,
    Quit,
}

const MAIN_ITEMS: &[&str] = &["PLAY", "QUIT"];
const PLAY_ITEMS: &[&str] = &["NEW GAME", "DIFFICULTY", "GAME MODE", "RECORDS", "BACK"];
const RECORDS_ITEMS: &[&str] = &["BACK"];
const PAUSED_ITEMS: &[&str] = &["RESUME", "MENU"];
const GAME_OVER_ITEMS: &[&str] = &["RESTART", "MENU"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub screen: MenuScreen,
    /// Cursor row on the current screen.
    pub selected: usize,
    /// Difficulty for the next run.
    pub difficulty: Difficulty,
    /// Game mode for the next run.
    pub mode: GameMode,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(Difficulty::default(), GameMode::default())
    }
}

impl Menu {
    pub fn new(difficulty: Difficulty, mode: GameMode) -> Self {
        Self {
            screen: MenuScreen::Main,
            selected: 0,
            difficulty,
            mode,
        }
    }

    /// Switch screens. Picker screens start with the cursor on the current choice.
    pub fn open(&mut self, screen: MenuScreen) {
        self.screen = screen;
        self.selected = match screen {
            MenuScreen::Difficulty => self.difficulty.index(),
            MenuScreen::GameMode => self.mode.index(),
            _ => 0,
        };
    }

    /// Labels shown on the current screen, top to bottom.
    pub fn items(&self) -> Vec<&'static str> {
        match self.screen {
            MenuScreen::Main => MAIN_ITEMS.to_vec(),
            MenuScreen::Play => PLAY_ITEMS.to_vec(),
            MenuScreen::Difficulty => Difficulty::ALL
                .iter()
                .map(Difficulty::name)
                .chain(std::iter::once("BACK"))
                .collect(),
            MenuScreen::GameMode => GameMode::ALL
                .iter()
                .map(GameMode::name)
                .chain(std::iter::once("BACK"))
                .collect(),
            MenuScreen::Records => RECORDS_ITEMS.to_vec(),
            MenuScreen::Paused => PAUSED_ITEMS.to_vec(),
            MenuScreen::GameOver => GAME_OVER_ITEMS.to_vec(),
        }
    }

    /// True if the item at `index` is the active difficulty or mode.
    pub fn is_current_choice(&self, index: usize) -> bool {
        match self.screen {
            MenuScreen::Difficulty => index == self.difficulty.index(),
            MenuScreen::GameMode => index == self.mode.index(),
            _ => false,
        }
    }

    pub fn navigate_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        let last = self.items().len().saturating_sub(1);
        if self.selected < last {
            self.selected += 1;
        }
    }

    fn back_target(&self) -> Option<MenuScreen> {
        match self.screen {
            MenuScreen::Play => Some(MenuScreen::Main),
            MenuScreen::Difficulty | MenuScreen::GameMode | MenuScreen::Records => {
                Some(MenuScreen::Play)
            }
            MenuScreen::Main | MenuScreen::Paused | MenuScreen::GameOver => None,
        }
    }
}

/// Process a menu input and return the action for the control loop.
pub fn process_input(menu: &mut Menu, input: MenuInput) -> MenuAction {
    match input {
        MenuInput::Up => {
            menu.navigate_up();
            MenuAction::None
        }
        MenuInput::Down => {
            menu.navigate_down();
            MenuAction::None
        }
        MenuInput::Select => select(menu),
        MenuInput::Back => match menu.screen {
            MenuScreen::Main => MenuAction::Quit,
            MenuScreen::Paused => MenuAction::Resume,
            MenuScreen::GameOver => {
                menu.open(MenuScreen::Main);
                MenuAction::BackToMain
            }
            _ => {
                if let Some(target) = menu.back_target() {
                    menu.open(target);
                }
                MenuAction::None
            }
        },
        MenuInput::Other => MenuAction::None,
    }
}

fn select(menu: &mut Menu) -> MenuAction {
    let label = menu.items().get(menu.selected).copied().unwrap_or("BACK");

    match (menu.screen, label) {
        (MenuScreen::Main, "PLAY") => {
            menu.open(MenuScreen::Play);
            MenuAction::None
        }
        (MenuScreen::Main, _) => MenuAction::Quit,

        (MenuScreen::Play, "NEW GAME") => MenuAction::StartGame,
        (MenuScreen::Play, "DIFFICULTY") => {
            menu.open(MenuScreen::Difficulty);
            MenuAction::None
        }
        (MenuScreen::Play, "GAME MODE") => {
            menu.open(MenuScreen::GameMode);
            MenuAction::None
        }
        (MenuScreen::Play, "RECORDS") => {
            menu.open(MenuScreen::Records);
            MenuAction::None
        }

        (MenuScreen::Difficulty, "BACK") | (MenuScreen::GameMode, "BACK") => {
            menu.open(MenuScreen::Play);
            MenuAction::None
        }
        (MenuScreen::Difficulty, _) => {
            menu.difficulty = Difficulty::from_index(menu.selected);
            log::debug!("Difficulty set to {}", menu.difficulty.name());
            MenuAction::None
        }
        (MenuScreen::GameMode, _) => {
            menu.mode = GameMode::from_index(menu.selected);
            log::debug!("Game mode set to {}", menu.mode.name());
            MenuAction::None
        }

        (MenuScreen::Paused, "RESUME") => MenuAction::Resume,
        (MenuScreen::GameOver, "RESTART") => MenuAction::Restart,
        (MenuScreen::Paused, _) | (MenuScreen::GameOver, _) => {
            menu.open(MenuScreen::Main);
            MenuAction::BackToMain
        }

        // BACK on Play and Records
        _ => {
            if let Some(target) = menu.back_target() {
                menu.open(target);
            }
            MenuAction::None
        }
    }
}
