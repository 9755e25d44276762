//! Terminal front end: draws the page and turns key presses into page events.

mod ui;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::page::ListKind;
use crate::view::{CatalogView, PageEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Front-end state that is not part of the page itself.
#[derive(Debug, Clone)]
pub struct TuiState {
    pub focus: ListKind,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub status_msg: String,
    selected: [usize; 3],
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            focus: ListKind::Catalog,
            input_mode: InputMode::Normal,
            should_quit: false,
            status_msg: String::new(),
            selected: [0; 3],
        }
    }
}

impl TuiState {
    pub fn selected(&self, list: ListKind) -> usize {
        self.selected[list.slot()]
    }

    fn reset_selection(&mut self, list: ListKind) {
        self.selected[list.slot()] = 0;
    }

    fn move_selection(&mut self, len: usize, down: bool) {
        let slot = &mut self.selected[self.focus.slot()];
        if len == 0 {
            *slot = 0;
        } else if down {
            *slot = (*slot + 1).min(len - 1);
        } else {
            *slot = slot.saturating_sub(1);
        }
    }

    fn cycle_focus(&mut self, similar_open: bool, forward: bool) {
        let order: &[ListKind] = if similar_open {
            &ListKind::ALL
        } else {
            &[ListKind::SearchResults, ListKind::Catalog]
        };
        let pos = order.iter().position(|k| *k == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % order.len()
        } else {
            (pos + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }
}

/// Take over the terminal until the user quits.
pub async fn run(view: &mut CatalogView) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, view).await;
    ratatui::restore();
    result
}

async fn event_loop(terminal: &mut ratatui::DefaultTerminal, view: &mut CatalogView) -> Result<()> {
    let mut state = TuiState {
        status_msg: "Ładowanie katalogu...".to_string(),
        ..TuiState::default()
    };
    terminal.draw(|frame| ui::render(view.page(), &state, frame))?;
    view.bootstrap().await;
    state.status_msg.clear();

    loop {
        terminal.draw(|frame| ui::render(view.page(), &state, frame))?;

        if state.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(view, &mut state, key).await;
            }
        }
    }
}

pub async fn handle_key(view: &mut CatalogView, state: &mut TuiState, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    match state.input_mode {
        InputMode::Editing => handle_input_key(view, state, key).await,
        InputMode::Normal => handle_list_key(view, state, key).await,
    }
}

async fn handle_input_key(view: &mut CatalogView, state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
            if view.dispatch(PageEvent::SubmitSearch).await {
                state.reset_selection(ListKind::SearchResults);
                state.focus = ListKind::SearchResults;
                state.status_msg = format!("Szukano: {}", view.page().search_input.trim());
            }
        }
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            view.page_mut().search_input.pop();
        }
        KeyCode::Char(c) => {
            view.page_mut().search_input.push(c);
        }
        _ => {}
    }
}

async fn handle_list_key(view: &mut CatalogView, state: &mut TuiState, key: KeyEvent) {
    let len = view.page().list(state.focus).len();
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
        }
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Editing;
        }
        KeyCode::Tab => {
            state.cycle_focus(view.page().details_wrapper_visible, true);
        }
        KeyCode::BackTab => {
            state.cycle_focus(view.page().details_wrapper_visible, false);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_selection(len, true);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_selection(len, false);
        }
        KeyCode::Enter => {
            let event = PageEvent::Click {
                list: state.focus,
                row: state.selected(state.focus),
            };
            if view.dispatch(event).await {
                state.reset_selection(ListKind::Similar);
                let details = &view.page().details;
                state.status_msg = if details.visible {
                    details.title.clone()
                } else {
                    "Brak szczegółów filmu.".to_string()
                };
            }
        }
        _ => {}
    }
}
