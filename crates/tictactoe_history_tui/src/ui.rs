//! Stateless UI rendering for the game and its move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tictactoe_history::{GameStatus, GameView, Player, Position, Square};

use crate::app::App;
use crate::config::MarkColors;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const TITLE_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const CURRENT_MOVE: Modifier = Modifier::REVERSED.union(Modifier::BOLD);

const HELP: &str = "arrows move  enter/1-9 play  [ ] step  home/end jump  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(BOARD_HEIGHT + 2),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let heading = Paragraph::new("Tic Tac Toe")
        .style(TITLE_STYLE)
        .alignment(Alignment::Center);
    frame.render_widget(heading, title);

    let columns = [Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(24)];
    let [game, moves] = Layout::horizontal(columns).areas(body);
    draw_game(frame, game, app);
    draw_moves(frame, moves, app.view());

    let footer_text = match app.notice() {
        Some(notice) => Line::from(Span::styled(notice, Style::default().fg(Color::Yellow))),
        None => Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
    };
    let footer_widget = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer_widget, footer);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.view();
    let sections = [Constraint::Length(1), Constraint::Min(BOARD_HEIGHT)];
    let [status, board] = Layout::vertical(sections).areas(area);

    let status_style = match view.status {
        GameStatus::InProgress(_) => Style::default(),
        GameStatus::Won(player) => mark_style(player, app.colors()),
        GameStatus::Draw => Style::default().fg(Color::Yellow),
    }
    .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(view.status.to_string())
            .style(status_style)
            .alignment(Alignment::Center),
        status,
    );

    let board_area = Rect {
        x: board.x + board.width.saturating_sub(BOARD_WIDTH) / 2,
        y: board.y,
        width: BOARD_WIDTH.min(board.width),
        height: BOARD_HEIGHT.min(board.height),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]);
    let cols = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3]);
    for (row, row_area) in rows.split(inner).iter().enumerate() {
        for (col, cell_area) in cols.split(*row_area).iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, *cell_area, view, pos, app.cursor(), app.colors());
            }
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    pos: Position,
    cursor: Position,
    colors: MarkColors,
) {
    let (symbol, base_style) = match view.board.get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            mark_style(player, colors).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White)
    } else {
        base_style
    };

    let mut lines = vec![Line::default(); usize::from(CELL_HEIGHT / 2)];
    lines.push(Line::from(Span::styled(symbol, style)));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(if pos == cursor {
            Style::default().bg(Color::White)
        } else {
            Style::default()
        });
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView) {
    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let text = format!("{:>2}. {}", entry.index + 1, entry.label);
            let style = if entry.current {
                Style::default().add_modifier(CURRENT_MOVE)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn mark_style(player: Player, colors: MarkColors) -> Style {
    let color = match player {
        Player::X => colors.x,
        Player::O => colors.o,
    };
    Style::default().fg(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Intent;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        terminal.draw(|f| draw(f, app)).expect("draw succeeds");
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_screen() {
        let screen = render(&App::new(MarkColors::default()));
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("1. Go to game start"));
        assert!(!screen.contains("Go to move #1"));
        assert!(screen.contains("q quit"));
    }

    #[test]
    fn test_screen_after_win() {
        let mut app = App::new(MarkColors::default());
        for cell in [0, 1, 3, 4, 6] {
            app.apply(Intent::Play(cell));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5"));
    }

    #[test]
    fn test_notice_replaces_help() {
        let mut app = App::new(MarkColors::default());
        app.apply(Intent::Play(4));
        app.apply(Intent::Play(4));
        let screen = render(&app);
        assert!(screen.contains("already occupied"));
        assert!(!screen.contains("q quit"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = App::new(MarkColors::default());
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).expect("test terminal");
        terminal.draw(|f| draw(f, &app)).expect("draw succeeds");
    }
}
