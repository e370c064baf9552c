//! Renders to a real terminal with `crossterm`.

use std::{
    io::Write,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, TryRecvError},
        Arc,
    },
    time::Duration,
};

use ::crossterm::{
    cursor::{Hide, MoveTo, MoveToNextLine, Show},
    event::{self as ct, DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{
        Attribute, Color as CtColor, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::{
    error::Result,
    io::{
        fmt::{Cell, Color, Formatted},
        Action, IoRunner, IoSystem, Key, MouseButton, Screen, XY,
    },
};

fn io4ct_btn(ct: ct::MouseButton) -> MouseButton {
    match ct {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Middle => MouseButton::Middle,
        ct::MouseButton::Right => MouseButton::Right,
    }
}

fn io4ct_key(code: ct::KeyCode) -> Option<Key> {
    let key = match code {
        ct::KeyCode::Char(c) => Key::Char(c),
        ct::KeyCode::F(n) => Key::F(n as usize),
        ct::KeyCode::Backspace => Key::Backspace,
        ct::KeyCode::Enter => Key::Enter,
        ct::KeyCode::Left => Key::Left,
        ct::KeyCode::Right => Key::Right,
        ct::KeyCode::Up => Key::Up,
        ct::KeyCode::Down => Key::Down,
        ct::KeyCode::Home => Key::Home,
        ct::KeyCode::End => Key::End,
        ct::KeyCode::PageUp => Key::PageUp,
        ct::KeyCode::PageDown => Key::PageDown,
        ct::KeyCode::Tab => Key::Tab,
        ct::KeyCode::Delete => Key::Delete,
        ct::KeyCode::Insert => Key::Insert,
        ct::KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(key)
}

/// The main-thread half: owns the terminal modes and pumps `crossterm` events into the queue.
pub struct CtRunner {
    actions: mpsc::Sender<Action>,
    stop: Arc<AtomicBool>,
}

impl CtRunner {
    fn init_term() -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            std::io::stdout(),
            EnableMouseCapture,
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
        )?;
        Ok(())
    }

    fn clean_term() -> Result<()> {
        execute!(
            std::io::stdout(),
            Clear(ClearType::All),
            Show,
            EnableLineWrap,
            LeaveAlternateScreen,
            DisableMouseCapture,
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn new(actions: mpsc::Sender<Action>, stop: Arc<AtomicBool>) -> Result<Self> {
        Self::init_term()?;
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = Self::clean_term();
            default_hook(info);
        }));
        Ok(Self { actions, stop })
    }

    /// Translate one terminal event into zero or more actions. Returns `false` if the queue has hung up.
    fn forward(&self, ev: ct::Event) -> bool {
        let mut out = Vec::with_capacity(4);
        match ev {
            ct::Event::Key(ct::KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) => {
                if kind == ct::KeyEventKind::Release {
                    return true;
                }
                if modifiers.contains(ct::KeyModifiers::CONTROL) {
                    out.push(Action::KeyPress { key: Key::LeftCtrl });
                }
                if modifiers.contains(ct::KeyModifiers::ALT) {
                    out.push(Action::KeyPress { key: Key::LeftAlt });
                }
                match io4ct_key(code) {
                    Some(key) => {
                        out.push(Action::KeyPress { key });
                        out.push(Action::KeyRelease { key });
                    }
                    None => out.push(Action::Unknown(format!("key {:?}", code))),
                }
                if modifiers.contains(ct::KeyModifiers::ALT) {
                    out.push(Action::KeyRelease { key: Key::LeftAlt });
                }
                if modifiers.contains(ct::KeyModifiers::CONTROL) {
                    out.push(Action::KeyRelease { key: Key::LeftCtrl });
                }
            }
            ct::Event::Mouse(ct::MouseEvent {
                row, column, kind, ..
            }) => {
                let pos = XY(column as usize, row as usize);
                match kind {
                    ct::MouseEventKind::Down(btn) => out.push(Action::MousePress {
                        pos,
                        button: io4ct_btn(btn),
                    }),
                    ct::MouseEventKind::Up(btn) => out.push(Action::MouseRelease {
                        pos,
                        button: io4ct_btn(btn),
                    }),
                    ct::MouseEventKind::Drag(_) | ct::MouseEventKind::Moved => {
                        out.push(Action::MouseMove { pos })
                    }
                    ct::MouseEventKind::ScrollUp => out.push(Action::MousePress {
                        pos,
                        button: MouseButton::ScrollUp,
                    }),
                    ct::MouseEventKind::ScrollDown => out.push(Action::MousePress {
                        pos,
                        button: MouseButton::ScrollDown,
                    }),
                    #[allow(unreachable_patterns)]
                    _ => (),
                }
            }
            ct::Event::Resize(..) | ct::Event::FocusGained => out.push(Action::Redraw),
            ct::Event::FocusLost => (),
            #[allow(unreachable_patterns)]
            other => out.push(Action::Unknown(format!("{:?}", other))),
        }
        out.into_iter().all(|a| self.actions.send(a).is_ok())
    }
}

impl Drop for CtRunner {
    fn drop(&mut self) {
        let _ = Self::clean_term();
    }
}

impl IoRunner for CtRunner {
    fn step(&mut self) -> bool {
        if self.stop.load(Ordering::Relaxed) {
            return true;
        }
        // zero timeout so `step` never blocks
        match ct::poll(Duration::ZERO) {
            Ok(false) => return false,
            Ok(true) => (),
            Err(e) => {
                let _ = self.actions.send(Action::Error(format!("polling: {}", e)));
                return true;
            }
        }
        match ct::read() {
            Ok(ev) => !self.forward(ev),
            Err(e) => {
                let _ = self.actions.send(Action::Error(format!("reading: {}", e)));
                true
            }
        }
    }
}

fn ct4io_color(c: Color) -> CtColor {
    match c {
        Color::Black => CtColor::Black,
        Color::BrightBlack => CtColor::DarkGrey,
        Color::Red => CtColor::DarkRed,
        Color::BrightRed => CtColor::Red,
        Color::Green => CtColor::DarkGreen,
        Color::BrightGreen => CtColor::Green,
        Color::Yellow => CtColor::DarkYellow,
        Color::BrightYellow => CtColor::Yellow,
        Color::Blue => CtColor::DarkBlue,
        Color::BrightBlue => CtColor::Blue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::BrightMagenta => CtColor::Magenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::BrightCyan => CtColor::Cyan,
        Color::White => CtColor::Grey,
        Color::BrightWhite => CtColor::White,
    }
}

/// Render one row of cells, only emitting escape codes where the format changes.
fn render_row(row: &[Cell], out: &mut Vec<u8>) -> std::io::Result<()> {
    let mut ch_b = [0u8; 4];
    let mut last = None;
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    for cell in row {
        let fmt = cell.get_fmt();
        if last != Some(fmt) {
            queue!(
                out,
                SetAttribute(Attribute::Reset),
                SetForegroundColor(ct4io_color(fmt.fg)),
                SetBackgroundColor(ct4io_color(fmt.bg)),
            )?;
            if fmt.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if fmt.underline {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }
            last = Some(fmt);
        }
        out.extend_from_slice(cell.ch.encode_utf8(&mut ch_b).as_bytes());
    }
    queue!(out, MoveToNextLine(1))
}

/// The game-side half: receives actions from the [`CtRunner`] and draws straight to stdout.
pub struct CtSystem {
    queue: mpsc::Receiver<Action>,
    stop: Arc<AtomicBool>,
}

impl CtSystem {
    pub fn new() -> Result<(Self, CtRunner)> {
        let (queue_s, queue_r) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let runner = CtRunner::new(queue_s, stop.clone())?;
        Ok((
            Self {
                queue: queue_r,
                stop,
            },
            runner,
        ))
    }
}

impl IoSystem for CtSystem {
    fn size(&self) -> XY {
        match terminal::size() {
            Ok((x, y)) => XY(x as usize, y as usize),
            Err(_) => crate::constants::graphics::TARGET_SIZE,
        }
    }

    fn draw(&mut self, screen: &Screen) -> Result<()> {
        let mut out = vec![];
        queue!(&mut out, MoveTo(0, 0), Clear(ClearType::All))?;
        for row in screen.rows() {
            render_row(row, &mut out)?;
        }
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        stdout.write_all(&out)?;
        stdout.flush()?;
        Ok(())
    }

    fn input(&mut self) -> Result<Action> {
        self.queue
            .recv()
            .map_err(|_| "terminal input queue closed".into())
    }

    fn poll_input(&mut self) -> Result<Option<Action>> {
        match self.queue.try_recv() {
            Ok(res) => Ok(Some(res)),
            Err(TryRecvError::Disconnected) => Err("terminal input queue closed".into()),
            Err(TryRecvError::Empty) => Ok(None),
        }
    }

    fn stop(&mut self) {
        // the runner notices on its next `step` and restores the terminal when it's dropped
        self.stop.store(true, Ordering::Relaxed);
    }
}
