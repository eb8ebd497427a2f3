//! 界面渲染
//!
//! 布局：标题栏 / 两列看板（可选日志面板）/ 输入框 / 提示栏。
//! PREPARING 红色、READY 绿色，查找命中的单号反色加亮。

use crate::app::{App, InputMode, NoticeLevel, Panel};
use board_core::Stage;
use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

pub fn ui(f: &mut Frame, app: &mut App) {
    let constraints = if app.show_logs {
        vec![
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board panels
            Constraint::Length(8), // Log pane
            Constraint::Length(3), // Input
            Constraint::Length(1), // Notice / key help
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    if app.show_logs {
        render_logs(f, app, chunks[2]);
    }
    render_input(f, app, chunks[chunks.len() - 2]);
    render_notice(f, app, chunks[chunks.len() - 1]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let board = app.manager.board();
    let title = Paragraph::new(vec![Line::from(vec![
        Span::raw(" 🍔 Pickup Board "),
        Span::styled(
            format!(" PREPARING {} ", board.preparing.len()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw("|"),
        Span::styled(
            format!(" READY {} ", board.ready.len()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ])])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn render_board(f: &mut Frame, app: &mut App, area: Rect) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_order_list(f, app, panels[0], Panel::Preparing);
    render_order_list(f, app, panels[1], Panel::Ready);
}

fn render_order_list(f: &mut Frame, app: &mut App, area: Rect, panel: Panel) {
    let board = app.manager.board();
    let (stage, numbers, accent) = match panel {
        Panel::Preparing => (Stage::Preparing, &board.preparing, Color::Red),
        Panel::Ready => (Stage::Ready, &board.ready, Color::Green),
    };

    let border_style = if app.focus == panel {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent).add_modifier(Modifier::DIM)
    };

    let found = app.found;
    let items: Vec<ListItem> = numbers
        .iter()
        .map(|&n| {
            let item = ListItem::new(Line::from(format!(" #{n}")));
            if found == Some(n) {
                item.style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item.style(Style::default().fg(accent))
            }
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ({}) ", stage, numbers.len()))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let state = match panel {
        Panel::Preparing => &mut app.preparing_state,
        Panel::Ready => &mut app.ready_state,
    };
    f.render_stateful_widget(list, area, state);
}

fn render_logs(f: &mut Frame, app: &App, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let title = match (app.input_mode, app.prompt) {
        (InputMode::Editing, Some(action)) => action.title(),
        _ => " Order Number ".to_string(),
    };

    let style = match app.input_mode {
        InputMode::Normal => Style::default().fg(Color::Gray),
        InputMode::Editing => Style::default().fg(Color::Yellow),
    };

    let width = area.width.max(3) - 3;
    let scroll = app.input.visual_scroll(width as usize);
    let input = Paragraph::new(app.input.value())
        .style(style)
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(input, area);

    if app.input_mode == InputMode::Editing {
        f.set_cursor_position((
            area.x + ((app.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.notice {
        Some(notice) => {
            let style = match notice.level {
                NoticeLevel::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                NoticeLevel::Warning => Style::default().fg(Color::Yellow),
                NoticeLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            };
            Line::from(Span::styled(format!(" {}", notice.text), style))
        }
        None => Line::from(Span::styled(
            " a add | u update | f find | Enter move/delete | s sort | Tab focus | l logs | q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
