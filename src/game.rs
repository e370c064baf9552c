//! The game itself: which screen is up, moving between them, and everything that outlives any one screen.

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    assets::Assets,
    audio::Jukebox,
    constants::gameplay::{FINAL_LEVEL, ROOMS_PER_LEVEL},
    engine::{Game, Replies, Response},
    io::{Action, Key, Screen, XY},
    player::Player,
    scenes::{
        hud, Ctx, InventoryScreen, LoseScreen, Menu, MidLevel, Outcome, Scene, Shop, Shopkeeper, TriviaRoom,
        VictoryScreen, View,
    },
    trivia::QuestionBank,
    Event, GameState,
};

pub struct TriviaRoguelite {
    state: GameState,
    /// Where to go back to when the inventory closes.
    previous_state: Option<GameState>,

    assets: Assets,
    bank: QuestionBank,
    jukebox: Box<dyn Jukebox>,
    rng: SmallRng,

    player: Player,
    level: u32,
    rooms_cleared: u32,

    mouse: Option<XY>,
    ctrl: bool,

    menu: Menu,
    mid_level: MidLevel,
    trivia: Option<TriviaRoom>,
    shopkeeper: Shopkeeper,
    shop: Shop,
    inventory: InventoryScreen,
    lose: LoseScreen,
    victory: VictoryScreen,
}

/// Borrow the fields a screen may change, leaving the screens themselves free to borrow too.
macro_rules! ctx {
    ($self:ident) => {
        Ctx {
            player: &mut $self.player,
            rng: &mut $self.rng,
            bank: &$self.bank,
            level: $self.level,
        }
    };
}

impl TriviaRoguelite {
    pub fn new(assets: Assets, bank: QuestionBank, jukebox: Box<dyn Jukebox>, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mid_level = MidLevel::new(&bank, &mut rng);
        let victory = VictoryScreen::new(&mut rng);
        let mut game = Self {
            state: GameState::Menu,
            previous_state: None,
            assets,
            bank,
            jukebox,
            rng,
            player: Player::fresh(),
            level: 1,
            rooms_cleared: 0,
            mouse: None,
            ctrl: false,
            menu: Menu::new(),
            mid_level,
            trivia: None,
            shopkeeper: Shopkeeper,
            shop: Shop::new(),
            inventory: InventoryScreen::new(),
            lose: LoseScreen::new(),
            victory,
        };
        tracing::info!(seed, "game created");
        game.transition_state(GameState::Menu);
        game
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn rooms_cleared(&self) -> u32 {
        self.rooms_cleared
    }

    pub fn mid_level(&self) -> &MidLevel {
        &self.mid_level
    }

    pub fn trivia(&self) -> Option<&TriviaRoom> {
        self.trivia.as_ref()
    }

    /// Where the mouse was last seen.
    pub fn mouse(&self) -> Option<XY> {
        self.mouse
    }

    /// Switch screens, changing the music to match.
    pub fn transition_state(&mut self, new: GameState) {
        tracing::info!(from = %self.state, to = %new, "state transition");
        if new == GameState::Shop && self.state != GameState::Shop {
            self.shop = Shop::new();
        }
        self.state = new;
        self.jukebox.stop();
        if let Some(track) = new.track() {
            self.jukebox.play_looped(track);
        }
    }

    /// Open the inventory over the current screen, or close it and go back. The music carries on either way.
    pub fn open_inventory(&mut self) {
        if self.state != GameState::Inventory {
            self.previous_state = Some(self.state);
            self.state = GameState::Inventory;
            self.inventory.open();
        } else {
            self.state = self.previous_state.take().unwrap_or(GameState::MidLevel);
        }
        tracing::debug!(state = %self.state, "inventory toggled");
    }

    /// Go into a trivia room on the named category.
    pub fn trivia_room(&mut self, category: &str) {
        let Some(cat) = self.bank.category(category) else {
            tracing::warn!(category, "no such category, staying put");
            return;
        };
        match &mut self.trivia {
            Some(room) => room.enter(cat, &mut self.rng),
            None => self.trivia = Some(TriviaRoom::new(cat, &mut self.rng)),
        }
        self.transition_state(GameState::TriviaRoom);
    }

    /// Start over from scratch. Doesn't change screens.
    pub fn new_run(&mut self) {
        self.player = Player::fresh();
        self.level = 1;
        self.rooms_cleared = 0;
        self.trivia = None;
        self.previous_state = None;
        self.mid_level.reroll(&self.bank, &mut self.rng);
        self.victory = VictoryScreen::new(&mut self.rng);
        self.shop = Shop::new();
        tracing::info!("new run");
    }

    fn room_cleared(&mut self) {
        self.rooms_cleared += 1;
        if self.rooms_cleared >= ROOMS_PER_LEVEL {
            self.rooms_cleared = 0;
            self.level += 1;
            tracing::info!(level = self.level, "level up");
        }
        if self.level > FINAL_LEVEL {
            tracing::info!(score = self.player.score, "victory");
            self.transition_state(GameState::Victory);
        } else {
            self.mid_level.reroll(&self.bank, &mut self.rng);
            self.transition_state(GameState::MidLevel);
        }
    }

    fn apply(&mut self, outcome: Outcome) -> Response {
        match outcome {
            Outcome::Nothing => return Response::Nothing,
            Outcome::Redraw => (),
            Outcome::Goto(state) => self.transition_state(state),
            Outcome::EnterTrivia(category) => self.trivia_room(&category),
            Outcome::RoomCleared => self.room_cleared(),
            Outcome::NewRun(next) => {
                self.new_run();
                self.transition_state(next);
            }
            Outcome::ToggleInventory => self.open_inventory(),
            Outcome::Quit => return Response::Quit,
        }
        Response::Redraw
    }

    /// Keys that work on every screen. Returns whether the key was one of them.
    fn hotkey(&mut self, action: &Action) -> bool {
        match action.pressed_char() {
            Some('l') => self.transition_state(GameState::Lose),
            Some('s') => self.transition_state(GameState::Shop),
            Some('m') => self.transition_state(GameState::MidLevel),
            Some('i') => self.open_inventory(),
            _ => return false,
        }
        true
    }
}

impl Game for TriviaRoguelite {
    type Message = Event;

    fn input(&mut self, action: Action, _replies: &mut Replies<Event>) -> Response {
        if let Some(pos) = action.position() {
            self.mouse = Some(pos);
        }
        match action {
            Action::KeyPress { key } if key.is_ctrl() => {
                self.ctrl = true;
                return Response::Nothing;
            }
            Action::KeyRelease { key } if key.is_ctrl() => {
                self.ctrl = false;
                return Response::Nothing;
            }
            Action::KeyPress { key: Key::Char('c') } if self.ctrl => {
                tracing::info!("ctrl+c, quitting");
                return Response::Quit;
            }
            _ => (),
        }

        if self.hotkey(&action) {
            return Response::Redraw;
        }

        let mut ctx = ctx!(self);
        let outcome = match self.state {
            GameState::Menu => self.menu.input(&action, &mut ctx),
            GameState::MidLevel => self.mid_level.input(&action, &mut ctx),
            GameState::TriviaRoom => match &mut self.trivia {
                Some(room) => room.input(&action, &mut ctx),
                None => Outcome::Nothing,
            },
            GameState::Lose => self.lose.input(&action, &mut ctx),
            GameState::Victory => self.victory.input(&action, &mut ctx),
            GameState::Shopkeeper => self.shopkeeper.input(&action, &mut ctx),
            GameState::Shop => self.shop.input(&action, &mut ctx),
            GameState::Inventory => self.inventory.input(&action, &mut ctx),
        };
        self.apply(outcome)
    }

    fn message(&mut self, msg: &Event) -> Response {
        let mut ctx = ctx!(self);
        match msg {
            Event::Tick => {
                let moved = match self.state {
                    GameState::MidLevel => self.mid_level.tick(&mut ctx),
                    GameState::Victory => self.victory.tick(&mut ctx),
                    _ => false,
                };
                Response::redraw_if(moved)
            }
            Event::Second => {
                let outcome = match (self.state, &mut self.trivia) {
                    (GameState::TriviaRoom, Some(room)) => room.second(&mut ctx),
                    _ => Outcome::Nothing,
                };
                self.apply(outcome)
            }
        }
    }

    fn render(&self, screen: &mut Screen) {
        screen.clear();
        let view = View {
            player: &self.player,
            assets: &self.assets,
            level: self.level,
            rooms_cleared: self.rooms_cleared,
        };
        match self.state {
            GameState::Menu => self.menu.render(&view, screen),
            GameState::MidLevel => self.mid_level.render(&view, screen),
            GameState::TriviaRoom => {
                if let Some(room) = &self.trivia {
                    room.render(&view, screen);
                }
            }
            GameState::Lose => self.lose.render(&view, screen),
            GameState::Victory => self.victory.render(&view, screen),
            GameState::Shopkeeper => self.shopkeeper.render(&view, screen),
            GameState::Shop => self.shop.render(&view, screen),
            GameState::Inventory => self.inventory.render(&view, screen),
        }
        if self.state.shows_hud() {
            hud::render(&view, screen);
        }
    }
}
