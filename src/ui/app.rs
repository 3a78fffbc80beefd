//! Main TUI application state and logic

use crate::pipeline::{analyze, Analysis, Options};
use crate::ui::panes::{self, NodePath, ParseState, TreeRow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashSet;
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Tree,
    Tokens,
}

impl FocusedPane {
    /// Move focus to the next pane (input -> tree -> tokens)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Input,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Tokens,
            FocusedPane::Tree => FocusedPane::Input,
            FocusedPane::Tokens => FocusedPane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    /// The expression being edited
    pub input: String,

    /// Cursor position in `input`, in chars
    pub cursor: usize,

    /// Builder and grammar used for every re-parse
    pub options: Options,

    /// Result of parsing the current input
    pub analysis: Analysis,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index of the selected row in the tree pane
    pub tree_selected: usize,

    /// Per-pane scroll offsets
    pub tree_scroll: usize,
    pub tokens_scroll: usize,

    /// Paths of collapsed tree nodes
    pub collapsed: FxHashSet<NodePath>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app editing `input`
    pub fn new(input: String, options: Options) -> Self {
        let analysis = analyze(&input, &options);
        let cursor = input.chars().count();
        let mut app = App {
            input,
            cursor,
            options,
            analysis,
            focused_pane: FocusedPane::Input,
            tree_selected: 0,
            tree_scroll: 0,
            tokens_scroll: 0,
            collapsed: FxHashSet::default(),
            should_quit: false,
            status_message: String::new(),
        };
        app.status_message = app.describe_analysis();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Rows currently visible in the tree pane
    pub fn tree_rows(&self) -> Vec<TreeRow> {
        let root = self.analysis.tree.as_ref().ok().and_then(|tree| tree.as_ref());
        panes::visible_rows(root, &self.collapsed)
    }

    pub fn parse_state(&self) -> ParseState {
        match &self.analysis.tree {
            Err(_) => ParseState::Failed,
            Ok(None) if self.analysis.tokens.is_empty() => ParseState::Empty,
            Ok(None) => ParseState::Unmatched,
            Ok(Some(root)) if root.is_partial() || !self.analysis.remainder.is_empty() => {
                ParseState::Partial
            }
            Ok(Some(_)) => ParseState::Complete,
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input on top, panes in the middle, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        // Tree (left) | Tokens (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[1]);

        panes::render_input_pane(
            frame,
            main_chunks[0],
            &self.input,
            self.cursor,
            self.focused_pane == FocusedPane::Input,
        );

        let rows = self.tree_rows();
        panes::render_tree_pane(
            frame,
            columns[0],
            &rows,
            self.analysis.tree.as_ref().err(),
            self.tree_selected,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        panes::render_tokens_pane(
            frame,
            columns[1],
            &self.analysis.tokens,
            &self.analysis.remainder,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            &self.options,
            self.parse_state(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::F(2) => {
                self.options.builder = self.options.builder.toggled();
                self.reparse();
            }
            KeyCode::F(3) => {
                self.options.grammar = self.options.grammar.toggled();
                self.reparse();
            }
            _ => match self.focused_pane {
                FocusedPane::Input => self.handle_input_key(key),
                FocusedPane::Tree => self.handle_tree_key(key),
                FocusedPane::Tokens => self.handle_tokens_key(key),
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
                self.reparse();
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.input.remove(at);
                    self.reparse();
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    let at = self.byte_offset(self.cursor);
                    self.input.remove(at);
                    self.reparse();
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.input.chars().count();
            }
            _ => {}
        }
    }

    fn handle_tree_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.tree_selected = self.tree_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let last = self.tree_rows().len().saturating_sub(1);
                self.tree_selected = (self.tree_selected + 1).min(last);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            _ => {}
        }
    }

    fn handle_tokens_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.tokens_scroll = self.tokens_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.tokens_scroll = self.tokens_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Collapse or expand the selected tree node
    fn toggle_selected(&mut self) {
        let rows = self.tree_rows();
        let Some(row) = rows.get(self.tree_selected) else {
            return;
        };
        if !row.has_children {
            return;
        }
        if !self.collapsed.remove(&row.path) {
            self.collapsed.insert(row.path.clone());
        }
    }

    /// Re-run the pipeline after the input or options changed
    fn reparse(&mut self) {
        self.analysis = analyze(&self.input, &self.options);
        self.collapsed.clear();
        let last = self.tree_rows().len().saturating_sub(1);
        self.tree_selected = self.tree_selected.min(last);
        self.status_message = self.describe_analysis();
    }

    fn describe_analysis(&self) -> String {
        match &self.analysis.tree {
            Err(err) => err.kind.to_string(),
            Ok(None) if self.analysis.tokens.is_empty() => "Nothing to show".to_string(),
            Ok(None) => format!(
                "{} token(s), none matched",
                self.analysis.tokens.len()
            ),
            Ok(Some(_)) => {
                let mut message = format!("{} token(s)", self.analysis.tokens.len());
                if !self.analysis.remainder.is_empty() {
                    message.push_str(&format!(
                        ", {} left outside the tree",
                        self.analysis.remainder.len()
                    ));
                }
                if !self.analysis.ignored.is_empty() {
                    message.push_str(&format!(
                        ", {} character(s) ignored",
                        self.analysis.ignored.len()
                    ));
                }
                message
            }
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map_or(self.input.len(), |(offset, _)| offset)
    }
}
