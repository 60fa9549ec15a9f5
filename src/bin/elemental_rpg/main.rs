mod display;

use std::io::{stdout, BufWriter, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::rngs::ThreadRng;
use rand::thread_rng;

use elemental_arcade::config::RpgConfig;
use elemental_arcade::error::SaveError;
use elemental_arcade::rpg::encounter::start_game;
use elemental_arcade::rpg::save::{load_into, save_game};
use elemental_arcade::rpg::turn::apply;
use elemental_arcade::rpg::{Action, AttackKind, Catalog, ClassKind, RpgState};

/// Which screen the key presses are aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    ClassSelect,
    Battle,
    Inventory,
    Shop,
    Skills,
}

pub struct App {
    pub catalog: Catalog,
    pub config: RpgConfig,
    pub screen: Screen,
    pub state: Option<RpgState>,
    /// Transient notice shown under the log (errors, refusals).
    pub notice: Option<String>,
    rng: ThreadRng,
}

enum Flow {
    Continue,
    Quit,
}

impl App {
    fn new() -> Self {
        App {
            catalog: Catalog::standard(),
            config: RpgConfig::default(),
            screen: Screen::ClassSelect,
            state: None,
            notice: None,
            rng: thread_rng(),
        }
    }

    fn act(&mut self, action: Action) {
        let Some(state) = &self.state else {
            return;
        };
        match apply(state, action, &self.catalog, &mut self.rng) {
            Ok(next) => {
                self.state = Some(next);
                self.notice = None;
            }
            Err(err) => {
                info!("action refused: {}", err);
                self.notice = Some(err.to_string());
            }
        }
    }

    fn save(&mut self) {
        let Some(state) = &self.state else {
            return;
        };
        match save_game(&self.config.save_path, state) {
            Ok(next) => self.state = Some(next),
            // Save failures are not surfaced beyond the log.
            Err(err) => warn!("save failed: {}", err),
        }
    }

    fn load(&mut self) {
        let Some(state) = &self.state else {
            return;
        };
        match load_into(&self.config.save_path, state, &self.catalog, &mut self.rng) {
            Ok(next) => {
                self.state = Some(next);
                self.notice = None;
            }
            Err(SaveError::NotFound(_)) => self.notice = Some("No saved game found!".to_string()),
            Err(err) => {
                warn!("load failed: {}", err);
                self.notice = Some(err.to_string());
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> Flow {
        if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            return Flow::Quit;
        }
        match self.screen {
            Screen::ClassSelect => {
                let picked = match code {
                    KeyCode::Char(c @ '1'..='4') => {
                        ClassKind::ALL.get(c as usize - '1' as usize).copied()
                    }
                    _ => None,
                };
                if let Some(class) = picked {
                    self.state = start_game(class, &self.catalog, &self.config, &mut self.rng);
                    if self.state.is_some() {
                        self.screen = Screen::Battle;
                    }
                }
            }
            Screen::Battle => match code {
                KeyCode::Char('1') => self.act(Action::Attack(AttackKind::Basic)),
                KeyCode::Char('2') => self.act(Action::Attack(AttackKind::Special)),
                KeyCode::Char('3') => self.act(Action::Attack(AttackKind::Elemental)),
                KeyCode::Char('4') => self.act(Action::Heal),
                KeyCode::Char('5') => self.act(Action::Flee),
                KeyCode::Char('i') | KeyCode::Char('I') => self.screen = Screen::Inventory,
                KeyCode::Char('b') | KeyCode::Char('B') => self.screen = Screen::Shop,
                KeyCode::Char('k') | KeyCode::Char('K') => self.screen = Screen::Skills,
                KeyCode::Char('s') | KeyCode::Char('S') => self.save(),
                KeyCode::Char('l') | KeyCode::Char('L') => self.load(),
                KeyCode::Char('r') | KeyCode::Char('R') if self.is_over() => {
                    self.state = None;
                    self.notice = None;
                    self.screen = Screen::ClassSelect;
                }
                _ => {}
            },
            Screen::Inventory => {
                if let Some(item) = self.pick(code, display::inventory_items) {
                    self.act(Action::UseItem(item));
                    self.screen = Screen::Battle;
                } else if code == KeyCode::Esc {
                    self.screen = Screen::Battle;
                }
            }
            Screen::Shop => {
                if let Some(item) = self.pick(code, |app| {
                    app.catalog.shop.iter().map(|entry| entry.item).collect()
                }) {
                    self.act(Action::Buy(item));
                } else if code == KeyCode::Esc {
                    self.screen = Screen::Battle;
                }
            }
            Screen::Skills => {
                if code == KeyCode::Esc {
                    self.screen = Screen::Battle;
                }
            }
        }
        Flow::Continue
    }

    /// Map a digit key onto the n-th entry of a list screen.
    fn pick<T: Copy>(&self, code: KeyCode, entries: impl Fn(&App) -> Vec<T>) -> Option<T> {
        match code {
            KeyCode::Char(c @ '1'..='9') => entries(self).get(c as usize - '1' as usize).copied(),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.as_ref().map_or(false, |s| !s.game.game_active)
    }
}

fn run<W: Write>(out: &mut W, app: &mut App) -> std::io::Result<()> {
    loop {
        display::render(out, app)?;
        if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event::read()? {
            if kind != KeyEventKind::Press {
                continue;
            }
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }
            if let Flow::Quit = app.handle_key(code) {
                return Ok(());
            }
        }
    }
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let mut app = App::new();
    let result = run(&mut out, &mut app);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
