//! Application state and event loop

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget, DefaultTerminal, Frame};

use crate::services::calendar::{self, CalendarView};
use crate::services::{ProfileFetcher, ProfileStats};
use crate::types::UserRecord;

use super::theme::Theme;
use super::widgets::{
    activity::ActivityView,
    help::HelpPopup,
    overview::Overview,
    recent::RecentView,
    skills::SkillsView,
    spinner::{LoadingStage, Spinner},
    tabs::Tab,
};

/// Application state
pub enum AppState {
    /// Loading data with spinner animation
    Loading {
        spinner_frame: usize,
        stage: LoadingStage,
    },
    /// Ready with loaded data
    Ready { data: Box<AppData> },
    /// Error state
    Error { message: String },
}

/// Loaded application data
pub struct AppData {
    pub record: UserRecord,
    pub stats: ProfileStats,
    pub calendar: CalendarView,
}

/// Progress messages from the background fetch thread
pub enum LoadProgress {
    Stage(LoadingStage),
    Done(Result<Box<AppData>, String>),
}

/// Main application
pub struct App {
    state: AppState,
    should_quit: bool,
    refresh_requested: bool,
    current_tab: Tab,
    recent_scroll: usize,
    show_help: bool,
    theme: Theme,
}

impl App {
    /// Create a new app in loading state
    pub fn new(theme: Theme) -> Self {
        Self {
            state: AppState::Loading {
                spinner_frame: 0,
                stage: LoadingStage::Fetching,
            },
            should_quit: false,
            refresh_requested: false,
            current_tab: Tab::default(),
            recent_scroll: 0,
            show_help: false,
            theme,
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        self.should_quit = true;
                    }
                    KeyCode::Tab => {
                        self.current_tab = self.current_tab.next();
                    }
                    KeyCode::BackTab => {
                        self.current_tab = self.current_tab.prev();
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.scroll_up();
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.scroll_down();
                    }
                    KeyCode::Char(c @ '1'..='4') => {
                        if let Some(tab) = Tab::from_number(c as u8 - b'0') {
                            self.current_tab = tab;
                        }
                    }
                    KeyCode::Char('?') => {
                        self.show_help = !self.show_help;
                    }
                    KeyCode::Char('r') if !matches!(self.state, AppState::Loading { .. }) => {
                        self.refresh_requested = true;
                    }
                    _ => {}
                }
            }
        }
    }

    /// Apply a progress message from the fetch thread
    pub fn apply_progress(&mut self, progress: LoadProgress) {
        match progress {
            LoadProgress::Stage(new_stage) => {
                if let AppState::Loading { spinner_frame, .. } = self.state {
                    self.state = AppState::Loading {
                        spinner_frame,
                        stage: new_stage,
                    };
                }
            }
            LoadProgress::Done(Ok(data)) => {
                self.recent_scroll = 0;
                self.state = AppState::Ready { data };
            }
            LoadProgress::Done(Err(message)) => {
                self.state = AppState::Error { message };
            }
        }
    }

    /// Begin a refresh: reset to loading state
    fn begin_refresh(&mut self) {
        self.refresh_requested = false;
        self.state = AppState::Loading {
            spinner_frame: 0,
            stage: LoadingStage::Fetching,
        };
    }

    /// Scroll up in the current view
    fn scroll_up(&mut self) {
        if self.current_tab == Tab::Recent {
            self.recent_scroll = self.recent_scroll.saturating_sub(1);
        }
    }

    /// Scroll down in the current view
    fn scroll_down(&mut self) {
        if self.current_tab == Tab::Recent {
            if let AppState::Ready { data } = &self.state {
                let max = data.record.recent.len().saturating_sub(1);
                self.recent_scroll = (self.recent_scroll + 1).min(max);
            }
        }
    }

    /// Update spinner animation
    pub fn tick(&mut self) {
        if let AppState::Loading {
            spinner_frame,
            stage,
        } = &self.state
        {
            self.state = AppState::Loading {
                spinner_frame: Spinner::next_frame(*spinner_frame),
                stage: *stage,
            };
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the application
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.state {
            AppState::Loading {
                spinner_frame,
                stage,
            } => {
                let spinner = Spinner::new(*spinner_frame, *stage);
                spinner.render(area, buf);
            }
            AppState::Ready { data } => {
                match self.current_tab {
                    Tab::Overview => {
                        Overview::new(&data.record, &data.stats, self.theme)
                            .with_tab(self.current_tab)
                            .render(area, buf);
                    }
                    Tab::Activity => {
                        ActivityView::new(&data.calendar, &data.stats, self.theme)
                            .render(area, buf);
                    }
                    Tab::Skills => {
                        SkillsView::new(data.record.skills.as_ref(), self.theme).render(area, buf);
                    }
                    Tab::Recent => {
                        RecentView::new(&data.record.recent, self.recent_scroll, self.theme)
                            .render(area, buf);
                    }
                }

                // Render help popup overlay if active
                if self.show_help {
                    let popup_area = HelpPopup::centered_area(area);
                    HelpPopup::new(self.theme).render(popup_area, buf);
                }
            }
            AppState::Error { message } => {
                let y = area.y + area.height / 2;
                let text = format!("Error: {}", message);
                let x = area.x + (area.width.saturating_sub(text.len() as u16)) / 2;
                buf.set_string(x, y, &text, Style::default().fg(self.theme.error()));
            }
        }
    }
}

/// Run the TUI application for one username
pub fn run(username: &str) -> anyhow::Result<()> {
    // Theme probing talks to the terminal, so it must happen before raw mode
    let theme = Theme::detect();
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, username, theme);
    ratatui::restore();
    result
}

/// Fetch and reshape profile data (extracted for background thread).
/// Stage messages keep the spinner honest about what is happening.
fn load_profile_sync(username: &str, tx: &mpsc::Sender<LoadProgress>) {
    let record = match ProfileFetcher::new().and_then(|fetcher| fetcher.fetch(username)) {
        Ok(record) => record,
        Err(e) => {
            let _ = tx.send(LoadProgress::Done(Err(e.to_string())));
            return;
        }
    };

    let _ = tx.send(LoadProgress::Stage(LoadingStage::Merging));
    let now = Utc::now().timestamp();
    let stats = ProfileStats::from_record(&record, now);

    let _ = tx.send(LoadProgress::Stage(LoadingStage::Building));
    let raw = record
        .activity
        .as_ref()
        .map(|a| a.submission_calendar.as_str())
        .unwrap_or("");
    let calendar = calendar::build(raw, now);

    let _ = tx.send(LoadProgress::Done(Ok(Box::new(AppData {
        record,
        stats,
        calendar,
    }))));
}

/// Spawn the background fetch thread, returning its progress channel
fn spawn_load(username: String) -> mpsc::Receiver<LoadProgress> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || load_profile_sync(&username, &tx));
    rx
}

fn run_app(terminal: &mut DefaultTerminal, username: &str, theme: Theme) -> anyhow::Result<()> {
    let mut app = App::new(theme);
    let mut progress_rx = spawn_load(username.to_string());

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        if app.refresh_requested {
            app.begin_refresh();
            progress_rx = spawn_load(username.to_string());
        }

        // Drain fetch progress (non-blocking)
        if matches!(app.state, AppState::Loading { .. }) {
            while let Ok(progress) = progress_rx.try_recv() {
                app.apply_progress(progress);
            }
        }

        // Poll for events with 100ms timeout for spinner animation
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        } else {
            app.tick();
        }
    }

    Ok(())
}
