//! 应用状态与按键分发
//!
//! 每次按键至多触发一次看板操作；操作结果转成限时提示（Notice），
//! 由事件循环的 tick 过期清除，界面永不阻塞。

use board_core::{BoardError, BoardManager, Severity};
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

// ============================================================================
// Notice
// ============================================================================

/// 提示级别，决定提示栏配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl From<Severity> for NoticeLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => NoticeLevel::Warning,
            Severity::Error => NoticeLevel::Error,
        }
    }
}

/// 限时操作提示，到期由 tick 清除
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    expires_at: Instant,
}

impl Notice {
    fn new(text: impl Into<String>, level: NoticeLevel, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            level,
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

// ============================================================================
// Input dispatch
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// 输入框提交后执行的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    /// 新订单加入 PREPARING
    Add,
    /// 修改 PREPARING 中选中的单号
    Update { current: u32 },
    /// 查找订单号
    Find,
}

impl PromptAction {
    /// Input box title shown while the prompt is open
    pub fn title(&self) -> String {
        match self {
            PromptAction::Add => " New Order Number ".to_string(),
            PromptAction::Update { current } => format!(" Update Order #{current} To "),
            PromptAction::Find => " Search Order Number ".to_string(),
        }
    }
}

/// 当前聚焦的列表面板
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Preparing,
    Ready,
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub manager: BoardManager,
    /// Input field state
    pub input: Input,
    /// Current input mode
    pub input_mode: InputMode,
    /// Operation the open prompt feeds
    pub prompt: Option<PromptAction>,
    /// Focused list panel
    pub focus: Panel,
    /// Selection state per panel
    pub preparing_state: ListState,
    pub ready_state: ListState,
    /// Auto-dismissing outcome notice
    pub notice: Option<Notice>,
    /// Last found order number, highlighted in its panel
    pub found: Option<u32>,
    /// Log pane visibility
    pub show_logs: bool,
    /// Logger Widget State
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
    notice_ttl: Duration,
}

impl App {
    pub fn new(manager: BoardManager, notice_ttl: Duration) -> Self {
        let mut app = Self {
            manager,
            input: Input::default(),
            input_mode: InputMode::default(),
            prompt: None,
            focus: Panel::default(),
            preparing_state: ListState::default(),
            ready_state: ListState::default(),
            notice: None,
            found: None,
            show_logs: false,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
            notice_ttl,
        };
        app.clamp_selections();
        app
    }

    /// Handle one key event; at most one board operation runs per call
    pub fn on_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.on_normal_key(key),
            InputMode::Editing => self.on_editing_key(key),
        }
    }

    /// Called by the event loop on every tick; expires the notice
    pub fn tick(&mut self) {
        if let Some(notice) = &self.notice
            && notice.is_expired(Instant::now())
        {
            self.notice = None;
        }
    }

    // ========== Key dispatch ==========

    fn on_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => self.open_prompt(PromptAction::Add),
            KeyCode::Char('u') => match self.selected_preparing() {
                Some(current) => self.open_prompt(PromptAction::Update { current }),
                None => {
                    self.set_notice("Select a PREPARING order to update.", NoticeLevel::Warning)
                }
            },
            KeyCode::Char('f') | KeyCode::Char('/') => self.open_prompt(PromptAction::Find),
            KeyCode::Enter => match self.focus {
                Panel::Preparing => self.move_selected_to_ready(),
                Panel::Ready => self.delete_selected_completed(),
            },
            KeyCode::Char('m') => self.move_selected_to_ready(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected_completed(),
            KeyCode::Char('s') => self.sort_numbers(),
            KeyCode::Tab => self.switch_focus(),
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('l') => self.show_logs = !self.show_logs,
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => {}
        }
    }

    fn on_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_prompt(),
            KeyCode::Esc => self.close_prompt(),
            // 订单号只接受数字，其余字符直接丢弃
            KeyCode::Char(c) if !c.is_ascii_digit() => {}
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
    }

    fn open_prompt(&mut self, action: PromptAction) {
        self.prompt = Some(action);
        self.input.reset();
        self.input_mode = InputMode::Editing;
    }

    fn close_prompt(&mut self) {
        self.prompt = None;
        self.input.reset();
        self.input_mode = InputMode::Normal;
    }

    fn submit_prompt(&mut self) {
        let Some(action) = self.prompt else {
            self.close_prompt();
            return;
        };

        let raw: String = self.input.value().into();
        if raw.is_empty() {
            return;
        }
        let Ok(number) = raw.parse::<u32>() else {
            self.set_notice(
                format!("'{raw}' is not a valid order number."),
                NoticeLevel::Error,
            );
            self.close_prompt();
            return;
        };

        match action {
            PromptAction::Add => self.add_order(number),
            PromptAction::Update { current } => self.update_number(current, number),
            PromptAction::Find => self.find_order(number),
        }
        self.close_prompt();
    }

    // ========== Board operations ==========

    fn add_order(&mut self, number: u32) {
        match self.manager.add_order(number) {
            Ok(()) => {
                self.on_board_changed();
                self.set_notice(
                    format!("Order #{number} added to 'PREPARING' list."),
                    NoticeLevel::Success,
                );
            }
            Err(err) => self.notify_error(err),
        }
    }

    fn move_selected_to_ready(&mut self) {
        let Some(number) = self.selected_preparing() else {
            self.set_notice("No PREPARING order selected.", NoticeLevel::Warning);
            return;
        };
        match self.manager.move_to_ready(number) {
            Ok(()) => {
                self.on_board_changed();
                self.set_notice(
                    format!("Order #{number} transferred to 'READY'."),
                    NoticeLevel::Success,
                );
            }
            Err(err) => self.notify_error(err),
        }
    }

    fn delete_selected_completed(&mut self) {
        let Some(number) = self.selected_ready() else {
            self.set_notice("No READY order selected.", NoticeLevel::Warning);
            return;
        };
        match self.manager.delete_completed(number) {
            Ok(()) => {
                self.on_board_changed();
                self.set_notice(
                    format!("Order #{number} deleted from 'READY'."),
                    NoticeLevel::Success,
                );
            }
            Err(err) => self.notify_error(err),
        }
    }

    fn update_number(&mut self, current: u32, new: u32) {
        match self.manager.update_number(current, new) {
            Ok(()) => {
                self.on_board_changed();
                self.set_notice(
                    format!("Order #{current} updated to #{new} in 'PREPARING'."),
                    NoticeLevel::Success,
                );
            }
            Err(err) => self.notify_error(err),
        }
    }

    fn sort_numbers(&mut self) {
        match self.manager.sort_numbers() {
            Ok(()) => {
                self.on_board_changed();
                self.set_notice(
                    "Both PREPARING and READY lists sorted.",
                    NoticeLevel::Success,
                );
            }
            Err(err) => self.notify_error(err),
        }
    }

    fn find_order(&mut self, number: u32) {
        match self.manager.find_order(number) {
            Some(_) => {
                self.found = Some(number);
                self.set_notice(format!("Order #{number} found!"), NoticeLevel::Success);
            }
            None => {
                self.found = None;
                self.set_notice(
                    format!("Order #{number} not found in either list."),
                    NoticeLevel::Error,
                );
            }
        }
    }

    // ========== Selection ==========

    /// Number currently selected in the PREPARING panel
    pub fn selected_preparing(&self) -> Option<u32> {
        let idx = self.preparing_state.selected()?;
        self.manager.board().preparing.get(idx).copied()
    }

    /// Number currently selected in the READY panel
    pub fn selected_ready(&self) -> Option<u32> {
        let idx = self.ready_state.selected()?;
        self.manager.board().ready.get(idx).copied()
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Panel::Preparing => Panel::Ready,
            Panel::Ready => Panel::Preparing,
        };
    }

    fn move_selection_up(&mut self) {
        let (state, len) = self.focused_state_mut();
        if len == 0 {
            return;
        }
        let next = match state.selected() {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        state.select(Some(next));
    }

    fn move_selection_down(&mut self) {
        let (state, len) = self.focused_state_mut();
        if len == 0 {
            return;
        }
        let next = match state.selected() {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        };
        state.select(Some(next));
    }

    fn focused_state_mut(&mut self) -> (&mut ListState, usize) {
        match self.focus {
            Panel::Preparing => (
                &mut self.preparing_state,
                self.manager.board().preparing.len(),
            ),
            Panel::Ready => (&mut self.ready_state, self.manager.board().ready.len()),
        }
    }

    /// After any successful mutation the found highlight is stale
    fn on_board_changed(&mut self) {
        self.found = None;
        self.clamp_selections();
    }

    /// Keep both selections inside the current list bounds
    fn clamp_selections(&mut self) {
        let preparing_len = self.manager.board().preparing.len();
        let ready_len = self.manager.board().ready.len();
        self.preparing_state
            .select(clamp_selection(self.preparing_state.selected(), preparing_len));
        self.ready_state
            .select(clamp_selection(self.ready_state.selected(), ready_len));
    }

    // ========== Notice ==========

    fn set_notice(&mut self, text: impl Into<String>, level: NoticeLevel) {
        self.notice = Some(Notice::new(text, level, self.notice_ttl));
    }

    fn notify_error(&mut self, err: BoardError) {
        match err.severity() {
            Severity::Warning => tracing::warn!(error = %err, "Operation rejected"),
            Severity::Error => tracing::error!(error = %err, "Operation failed"),
        }
        let level = NoticeLevel::from(err.severity());
        self.set_notice(err.to_string(), level);
    }
}

/// First row for a fresh selection, last row after the list shrank
fn clamp_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(current.unwrap_or(0).min(len - 1))
    }
}
