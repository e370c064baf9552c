//! The win screen, where it rains socks.

use rand::Rng;

use crate::{
    constants::graphics::{RAIN_HEIGHT, RAIN_WIDTH, SOCK_COUNT, SOCK_RESPAWN_HEIGHT, SOCK_SPEED},
    io::{Action, Key, Screen},
    text, GameState,
};

use super::{centered, Ctx, Outcome, Scene, View};

/// One falling sock, in the rain's logical coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sock {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
}

/// Socks falling through a `RAIN_WIDTH` by `RAIN_HEIGHT` space, which is scaled to the screen when drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SockRain {
    socks: Vec<Sock>,
}

impl SockRain {
    /// Scatter `count` socks somewhere above the top of the space.
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let socks = (0..count)
            .map(|_| Sock {
                x: rng.gen_range(0..=RAIN_WIDTH),
                y: rng.gen_range(-RAIN_HEIGHT..=0),
                speed: rng.gen_range(SOCK_SPEED),
            })
            .collect();
        Self { socks }
    }

    /// Move every sock down by its speed. Any that fall off the bottom start again just above the top.
    pub fn update(&mut self, rng: &mut impl Rng) {
        for sock in &mut self.socks {
            sock.y += sock.speed;
            if sock.y > RAIN_HEIGHT {
                sock.x = rng.gen_range(0..=RAIN_WIDTH);
                sock.y = rng.gen_range(-SOCK_RESPAWN_HEIGHT..=0);
            }
        }
    }

    pub fn socks(&self) -> &[Sock] {
        &self.socks
    }

    /// Where a sock lands on a screen this big, as a (column, row) which may be off the top.
    fn to_screen(sock: &Sock, screen: &Screen) -> (isize, isize) {
        let size = screen.size();
        let col = sock.x as isize * size.x() as isize / RAIN_WIDTH as isize;
        let row = sock.y as isize * size.y() as isize / RAIN_HEIGHT as isize;
        (col, row)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VictoryScreen {
    rain: SockRain,
}

impl VictoryScreen {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            rain: SockRain::new(SOCK_COUNT, rng),
        }
    }

    pub fn rain(&self) -> &SockRain {
        &self.rain
    }
}

impl Scene for VictoryScreen {
    fn input(&mut self, action: &Action, _ctx: &mut Ctx) -> Outcome {
        if action.is_press(Key::Escape) || action.is_press(Key::Enter) {
            Outcome::NewRun(GameState::Menu)
        } else {
            Outcome::Nothing
        }
    }

    fn tick(&mut self, ctx: &mut Ctx) -> bool {
        self.rain.update(ctx.rng);
        true
    }

    fn render(&self, view: &View, screen: &mut Screen) {
        let bg = &view.assets.victory_screen;
        let top = screen.size().y().saturating_sub(bg.size().y()) / 2;
        screen.blit(bg, centered(screen, bg.size()), top as isize);

        let sock = &view.assets.victory_rain_sock;
        for s in self.rain.socks() {
            let (col, row) = SockRain::to_screen(s, screen);
            screen.blit(sock, col, row);
        }

        screen.write_centered(1, text![bright_yellow bold "Congratulations!"]);
        screen.write_centered(3, text![bright_yellow "Score: {}"(view.player.score)]);
        screen.write_centered(
            screen.size().y().saturating_sub(1),
            text![bright_black "Enter or Esc to start over"],
        );
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::SmallRng, SeedableRng};

    use crate::{io::press, scenes::testing::Harness};

    use super::*;

    #[test]
    fn socks_start_above_and_in_range() {
        let mut rng = SmallRng::seed_from_u64(9);
        let rain = SockRain::new(SOCK_COUNT, &mut rng);
        assert_eq!(rain.socks().len(), SOCK_COUNT);
        for s in rain.socks() {
            assert!((0..=RAIN_WIDTH).contains(&s.x));
            assert!((-RAIN_HEIGHT..=0).contains(&s.y));
            assert!(SOCK_SPEED.contains(&s.speed));
        }
    }

    #[test]
    fn socks_fall_and_recycle() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut rain = SockRain {
            socks: vec![
                Sock { x: 10, y: 0, speed: 4 },
                Sock { x: 20, y: RAIN_HEIGHT - 1, speed: 2 },
            ],
        };
        rain.update(&mut rng);
        assert_eq!(rain.socks()[0], Sock { x: 10, y: 4, speed: 4 });
        let recycled = rain.socks()[1];
        assert!((-SOCK_RESPAWN_HEIGHT..=0).contains(&recycled.y));
        assert!((0..=RAIN_WIDTH).contains(&recycled.x));
        assert_eq!(recycled.speed, 2);
    }

    #[test]
    fn exactly_at_the_bottom_keeps_falling() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut rain = SockRain {
            socks: vec![Sock { x: 5, y: RAIN_HEIGHT - 3, speed: 3 }],
        };
        rain.update(&mut rng);
        assert_eq!(rain.socks()[0].y, RAIN_HEIGHT);
    }

    #[test]
    fn banner_and_score() {
        let mut h = Harness::new();
        h.player.score = 420;
        let mut v = VictoryScreen::new(&mut h.rng);
        assert!(v.tick(&mut h.ctx()));
        let screen = h.draw(&v);
        assert!(screen.row_text(1).contains("Congratulations!"));
        assert!(screen.row_text(3).contains("Score: 420"));
        assert_eq!(v.input(&press(Key::Escape), &mut h.ctx()), Outcome::NewRun(GameState::Menu));
        assert_eq!(v.input(&press(Key::Up), &mut h.ctx()), Outcome::Nothing);
    }
}
