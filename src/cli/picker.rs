//! Multi-file picker TUI using ratatui
//!
//! Browses directories and lets the user mark JSON/YAML files. The picker
//! itself does not enforce the selection cap; it shows the marked count
//! against the cap and the launcher rejects oversized selections.

use std::io::{self, stdout};
use std::path::{Path, PathBuf};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::launcher::{self, MAX_SELECTION};
use crate::utils::truncate_string;

/// Result of the file picker interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerResult {
    /// User confirmed these files, in the order they were marked
    Selected(Vec<PathBuf>),
    /// User cancelled
    Cancelled,
}

/// A file or directory entry in the browser
#[derive(Debug, Clone)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// State for the file picker
#[derive(Debug)]
pub struct PickerState {
    pub current_dir: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub selected: usize,
    pub search: String,
    pub filtered: Vec<usize>,
    marked: Vec<PathBuf>,
}

impl PickerState {
    pub fn new(start_dir: PathBuf) -> Self {
        let entries = list_directory(&start_dir);
        let filtered: Vec<usize> = (0..entries.len()).collect();
        Self {
            current_dir: start_dir,
            entries,
            selected: 0,
            search: String::new(),
            filtered,
            marked: Vec::new(),
        }
    }

    fn refresh(&mut self) {
        self.entries = list_directory(&self.current_dir);
        self.search.clear();
        self.filtered = (0..self.entries.len()).collect();
        self.selected = 0;
    }

    pub fn navigate_to(&mut self, path: PathBuf) {
        self.current_dir = path;
        self.refresh();
    }

    pub fn update_filter(&mut self) {
        let search_lower = self.search.to_lowercase();
        self.filtered = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.name.to_lowercase().contains(&search_lower))
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
    }

    /// Entry under the cursor
    pub fn current(&self) -> Option<&PickerEntry> {
        self.filtered
            .get(self.selected)
            .map(|&idx| &self.entries[idx])
    }

    /// Files marked so far, in marking order. Marks survive directory changes.
    pub fn marked(&self) -> &[PathBuf] {
        &self.marked
    }

    pub fn is_marked(&self, path: &Path) -> bool {
        self.marked.iter().any(|p| p == path)
    }

    /// Mark or unmark the file under the cursor. Directories are ignored.
    pub fn toggle_current(&mut self) {
        let Some(entry) = self.current() else {
            return;
        };
        if entry.is_dir {
            return;
        }
        let path = entry.path.clone();
        if let Some(pos) = self.marked.iter().position(|p| *p == path) {
            self.marked.remove(pos);
        } else {
            self.marked.push(path);
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.filtered.len() {
            self.selected += 1;
        }
    }
}

/// Run the interactive file picker, starting in `start_dir`
/// (the home directory when `None`)
pub fn run_file_picker(start_dir: Option<PathBuf>) -> Result<PickerResult> {
    let start_dir = start_dir
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_file_picker_loop(&mut terminal, start_dir);

    guard.restore()?;

    result
}

/// Raw mode and alternate screen, undone on drop if setup or the picker bails out early
struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            raw_mode: true,
            alternate_screen: false,
        };
        stdout().execute(EnterAlternateScreen)?;
        guard.alternate_screen = true;
        Ok(guard)
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.raw_mode {
            self.raw_mode = false;
            disable_raw_mode()?;
        }
        if self.alternate_screen {
            self.alternate_screen = false;
            stdout().execute(LeaveAlternateScreen)?;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn run_file_picker_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    start_dir: PathBuf,
) -> Result<PickerResult> {
    let mut state = PickerState::new(start_dir);

    loop {
        terminal.draw(|frame| {
            draw_file_picker(frame, &state);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(result) = handle_picker_key(&mut state, key) {
                return Ok(result);
            }
        }
    }
}

/// Apply one key press. Returns `Some` when the picker should close.
///
/// Space marks a file, Enter opens a directory or confirms (the marked
/// files, or the file under the cursor when nothing is marked), Tab
/// confirms the marked files from anywhere.
pub fn handle_picker_key(state: &mut PickerState, key: KeyEvent) -> Option<PickerResult> {
    match key.code {
        KeyCode::Enter => {
            let entry = state.current()?.clone();
            if entry.is_dir {
                state.navigate_to(entry.path);
                None
            } else if state.marked.is_empty() {
                Some(PickerResult::Selected(vec![entry.path]))
            } else {
                Some(PickerResult::Selected(state.marked.clone()))
            }
        }
        KeyCode::Tab => {
            if state.marked.is_empty() {
                None
            } else {
                Some(PickerResult::Selected(state.marked.clone()))
            }
        }
        KeyCode::Char(' ') => {
            state.toggle_current();
            state.move_down();
            None
        }
        KeyCode::Backspace => {
            if state.search.is_empty() {
                if let Some(parent) = state.current_dir.parent() {
                    state.navigate_to(parent.to_path_buf());
                }
            } else {
                state.search.pop();
                state.update_filter();
            }
            None
        }
        KeyCode::Esc => {
            // Esc clears an active search before it cancels
            if state.search.is_empty() {
                Some(PickerResult::Cancelled)
            } else {
                state.search.clear();
                state.update_filter();
                None
            }
        }
        KeyCode::Up => {
            state.move_up();
            None
        }
        KeyCode::Down => {
            state.move_down();
            None
        }
        KeyCode::PageUp => {
            state.selected = state.selected.saturating_sub(10);
            None
        }
        KeyCode::PageDown => {
            state.selected = (state.selected + 10).min(state.filtered.len().saturating_sub(1));
            None
        }
        KeyCode::Home => {
            state.selected = 0;
            None
        }
        KeyCode::End => {
            state.selected = state.filtered.len().saturating_sub(1);
            None
        }
        KeyCode::Char(c) if !c.is_control() => {
            state.search.push(c);
            state.update_filter();
            None
        }
        _ => None,
    }
}

/// List directory contents: subdirectories and convertible files
pub fn list_directory(path: &Path) -> Vec<PickerEntry> {
    let mut entries = Vec::new();

    if let Some(parent) = path.parent() {
        if parent != path {
            entries.push(PickerEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
            });
        }
    }

    if let Ok(read_dir) = std::fs::read_dir(path) {
        for entry in read_dir.flatten() {
            let entry_path = entry.path();
            let is_dir = entry_path.is_dir();
            let name = entry.file_name().to_string_lossy().to_string();

            if name.starts_with('.') {
                continue;
            }

            if is_dir || is_convertible_file(&entry_path) {
                entries.push(PickerEntry {
                    name,
                    path: entry_path,
                    is_dir,
                });
            }
        }
    }

    // ".." first, then directories, then files, alphabetically
    entries.sort_by(|a, b| {
        if a.name == ".." {
            return std::cmp::Ordering::Less;
        }
        if b.name == ".." {
            return std::cmp::Ordering::Greater;
        }
        match (a.is_dir, b.is_dir) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    });

    entries
}

fn is_convertible_file(path: &Path) -> bool {
    launcher::Direction::ALL.iter().any(|d| d.matches(path))
}

fn draw_file_picker(frame: &mut Frame, state: &PickerState) {
    let area = frame.area();

    let logo_lines = vec![
        Line::from(Span::styled(
            "┏┓┓┏┏┓┏┓┏┓┓┏",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            " ┃┗┫┃ ┃┃┃┃┃┃",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "┗┛┗┛┗┛┗┛┛┗┗┛",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("⇄ ", Style::default().fg(Color::Magenta).bold()),
            Span::styled("JSON <-> YAML Converter", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    let logo_height = 6u16;

    let popup_width = 66u16;
    let popup_height = 22u16;
    let total_height = logo_height + popup_height;

    let x = area.width.saturating_sub(popup_width) / 2;
    let y = area.height.saturating_sub(total_height) / 2;

    let logo_area = Rect::new(x, y, popup_width.min(area.width), logo_height.min(area.height));
    frame.render_widget(
        Paragraph::new(logo_lines).alignment(Alignment::Center),
        logo_area,
    );

    let popup_y = y + logo_height;
    let popup_area = Rect::new(
        x,
        popup_y,
        popup_width.min(area.width),
        popup_height.min(area.height.saturating_sub(popup_y)),
    );

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Select up to {} files ", MAX_SELECTION))
        .title_style(Style::default().fg(Color::Cyan).bold())
        .title_alignment(Alignment::Center);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Current path
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // File list
            Constraint::Length(2), // Help text
        ])
        .split(inner);

    let path_str = state.current_dir.display().to_string();
    let max_path_len = (chunks[0].width as usize).saturating_sub(12);
    let path_line = Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("Current: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            truncate_string(&path_str, max_path_len),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(path_line), chunks[0]);

    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Filter ")
        .title_style(Style::default().fg(Color::DarkGray));

    let search_content = if state.search.is_empty() {
        Line::from(vec![
            Span::styled("Type to filter...", Style::default().fg(Color::DarkGray)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(vec![
            Span::styled(&state.search, Style::default().fg(Color::White)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ])
    };
    frame.render_widget(Paragraph::new(search_content).block(search_block), chunks[1]);

    let list_height = chunks[2].height as usize;
    let start_idx = if state.selected >= list_height {
        state.selected - list_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = state
        .filtered
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(list_height)
        .map(|(display_idx, &entry_idx)| {
            let entry = &state.entries[entry_idx];
            let marker = if entry.is_dir {
                "▸  "
            } else if state.is_marked(&entry.path) {
                "[x]"
            } else {
                "[ ]"
            };
            let suffix = if entry.is_dir && entry.name != ".." {
                "/"
            } else {
                ""
            };

            let style = if display_idx == state.selected {
                if entry.is_dir {
                    Style::default().fg(Color::Black).bg(Color::Cyan).bold()
                } else {
                    Style::default().fg(Color::Black).bg(Color::Green).bold()
                }
            } else if entry.is_dir {
                Style::default().fg(Color::Cyan)
            } else if state.is_marked(&entry.path) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(format!("  {} {}{}", marker, entry.name, suffix)).style(style)
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.saturating_sub(start_idx)));
    frame.render_stateful_widget(List::new(items), chunks[2], &mut list_state);

    let help_text = Line::from(vec![
        Span::styled("  Space", Style::default().fg(Color::Cyan)),
        Span::styled(" mark  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" open/confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(help_text), chunks[3]);

    // Marked count, red once it exceeds the cap
    let marked = state.marked.len();
    let count_text = format!(" Marked {}/{} ", marked, MAX_SELECTION);
    let count_color = if marked > MAX_SELECTION {
        Color::Red
    } else if marked > 0 {
        Color::Green
    } else {
        Color::DarkGray
    };
    let text_len = count_text.chars().count() as u16;
    if popup_area.width > text_len + 1 && popup_area.height > 0 {
        let count_area = Rect::new(
            popup_area.x + popup_area.width - text_len - 1,
            popup_area.y + popup_area.height - 1,
            text_len,
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(count_text, Style::default().fg(count_color))),
            count_area,
        );
    }

    if state.filtered.is_empty() {
        let msg = if state.search.is_empty() {
            "No JSON or YAML files in this directory"
        } else {
            "No matching files"
        };
        let msg_area = Rect::new(
            chunks[2].x + 2,
            chunks[2].y + chunks[2].height / 2,
            chunks[2].width.saturating_sub(4),
            1,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                msg,
                Style::default().fg(Color::DarkGray).italic(),
            )))
            .alignment(Alignment::Center),
            msg_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_terminal_guard_restore_runs_once() {
        // Raw mode was never enabled, so disabling it is a no-op
        let mut guard = TerminalGuard {
            raw_mode: true,
            alternate_screen: false,
        };

        assert!(guard.restore().is_ok());
        assert!(!guard.raw_mode);
        assert!(guard.restore().is_ok());
    }

    #[test]
    fn test_terminal_guard_drop_without_setup() {
        let guard = TerminalGuard {
            raw_mode: false,
            alternate_screen: false,
        };
        drop(guard);
    }
}
