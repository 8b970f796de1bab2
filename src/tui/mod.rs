pub mod widgets;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use rand::rngs::StdRng;

use crate::color::Color as AppColor;
use crate::harmony::{self, Harmony};
use widgets::PaletteWidget;

const HELP: &str = " space/r regenerate   ←/→ harmony   +/- count   q quit";

/// State for the interactive TUI application.
pub struct TuiApp {
    pub locked: Vec<AppColor>,
    pub count: usize,
    pub harmony: Harmony,
    pub palette: Vec<AppColor>,
    rng: StdRng,
    quit: bool,
}

impl TuiApp {
    pub fn new(locked: Vec<AppColor>, count: usize, harmony: Harmony, rng: StdRng) -> Self {
        let mut app = Self {
            locked,
            count: count.max(1),
            harmony,
            palette: Vec::new(),
            rng,
            quit: false,
        };
        app.regenerate();
        app
    }

    pub fn regenerate(&mut self) {
        self.palette = harmony::generate(&self.locked, self.count, self.harmony, &mut self.rng);
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char(' ') | KeyCode::Char('r') => self.regenerate(),
            KeyCode::Left | KeyCode::Char('h') => {
                self.harmony = self.harmony.previous();
                self.regenerate();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.harmony = self.harmony.next();
                self.regenerate();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.count += 1;
                self.regenerate();
            }
            KeyCode::Char('-') if self.count > 1 => {
                self.count -= 1;
                self.regenerate();
            }
            _ => {}
        }
    }
}

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut TuiApp) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame, app: &TuiApp) {
    let [main, help] =
        Layout::vertical([Constraint::Min(6), Constraint::Length(1)]).areas(frame.area());
    frame.render_widget(
        PaletteWidget::new(&app.palette, app.harmony, app.locked.len()),
        main,
    );
    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        help,
    );
}
