//! Stateless rendering for the team screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{StatusTone, TeamApp};
use crate::teams::{Participant, Team};

const PIN_GLYPH: &str = "📌";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &TeamApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Name input
            Constraint::Min(5),    // Roster
            Constraint::Length(3), // Generate button
            Constraint::Min(6),    // Teams
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Teams - Who's missing?")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_input(frame, chunks[1], app);
    draw_roster(frame, chunks[2], app);
    draw_generate_button(frame, chunks[3], app);
    draw_teams(frame, chunks[4], app);
    draw_status(frame, chunks[5], app);

    let help_text = if app.input_mode() {
        "Type name | Enter: Add | Esc: Done"
    } else {
        "a: Add | ↑↓: Select | p/1/2/0: Pin | d: Remove | c: Clear | g: Generate | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[6]);
}

fn draw_input(frame: &mut Frame, area: Rect, app: &TeamApp) {
    let (title, style) = if app.input_mode() {
        ("Player name (Enter to add)", Style::default().fg(Color::White))
    } else {
        ("Press 'a' to add a player", Style::default().fg(Color::DarkGray))
    };
    let input = Paragraph::new(app.input())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);
}

fn draw_roster(frame: &mut Frame, area: Rect, app: &TeamApp) {
    let session = app.session();
    let config = session.config();

    let items: Vec<ListItem> = session
        .roster()
        .participants()
        .iter()
        .map(|p| {
            let mut spans = vec![Span::raw(p.name().to_string())];
            if let Some(team) = p.pin().team() {
                spans.push(Span::styled(
                    format!("  {} {}", PIN_GLYPH, config.label(team)),
                    Style::default().fg(team_color(team)),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!("Players ({})", session.roster().len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = app.list_state();
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_generate_button(frame: &mut Frame, area: Rect, app: &TeamApp) {
    let session = app.session();
    let style = if session.can_generate() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(format!("[g] {}", session.generate_label()))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_teams(frame: &mut Frame, area: Rect, app: &TeamApp) {
    let Some(assignment) = app.session().assignment() else {
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (team, col) in <Team as strum::IntoEnumIterator>::iter().zip(cols.iter()) {
        draw_team(frame, *col, app, team, assignment.team(team));
    }
}

fn draw_team(frame: &mut Frame, area: Rect, app: &TeamApp, team: Team, members: &[Participant]) {
    let items: Vec<ListItem> = members
        .iter()
        .map(|p| {
            let marker = if p.pin().team() == Some(team) {
                format!("{} ", PIN_GLYPH)
            } else {
                "   ".to_string()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(team_color(team))),
                Span::raw(p.name().to_string()),
            ]))
        })
        .collect();

    let title = format!("{} ({})", app.session().config().label(team), members.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title).alignment(Alignment::Center))
            .border_style(Style::default().fg(team_color(team))),
    );
    frame.render_widget(list, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &TeamApp) {
    let (message, tone) = app.status();
    let color = match tone {
        StatusTone::Info => Color::Yellow,
        StatusTone::Warning => Color::Red,
    };
    let status = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn team_color(team: Team) -> Color {
    match team {
        Team::One => Color::Blue,
        Team::Two => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TeamsConfig;
    use crate::teams::Pin;
    use crate::tui::AppCommand;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &TeamApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add(app: &mut TeamApp, name: &str) {
        for c in name.chars() {
            app.execute(AppCommand::InputChar(c));
        }
        app.execute(AppCommand::SubmitInput);
    }

    #[test]
    fn test_renders_roster_and_disabled_button() {
        let mut app = TeamApp::new(TeamsConfig::default().with_seed(Some(5)));
        add(&mut app, "Ana");
        let text = screen_text(&app);
        assert!(text.contains("Players (1)"));
        assert!(text.contains("Ana"));
        assert!(text.contains("Generate Teams"));
        assert!(!text.contains("Team 1 ("));
    }

    #[test]
    fn test_renders_team_panels_after_generate() {
        let mut app = TeamApp::new(TeamsConfig::default().with_seed(Some(5)));
        add(&mut app, "Ana");
        add(&mut app, "Beto");
        app.execute(AppCommand::CancelInput);
        app.execute(AppCommand::Generate);
        let text = screen_text(&app);
        assert!(text.contains("Team 1 (1)"));
        assert!(text.contains("Team 2 (1)"));
        assert!(text.contains("Shuffle Teams"));
    }

    #[test]
    fn test_panels_shown_and_pins_marked_when_team_one_empty() {
        let mut app = TeamApp::new(TeamsConfig::default().with_seed(Some(5)));
        add(&mut app, "Ana");
        add(&mut app, "Beto");
        app.execute(AppCommand::CancelInput);
        // Beto is highlighted after the last add.
        app.execute(AppCommand::PinSelected(Pin::TeamTwo));
        app.execute(AppCommand::SelectPrevious);
        app.execute(AppCommand::PinSelected(Pin::TeamTwo));
        app.execute(AppCommand::Generate);

        let text = screen_text(&app);
        assert!(text.contains("Team 1 (0)"));
        assert!(text.contains("Team 2 (2)"));
        // Two in the roster list, two in the team 2 panel.
        assert_eq!(text.matches(PIN_GLYPH).count(), 4);
    }

    #[test]
    fn test_unpinned_members_have_no_marker() {
        let mut app = TeamApp::new(TeamsConfig::default().with_seed(Some(5)));
        add(&mut app, "Ana");
        add(&mut app, "Beto");
        app.execute(AppCommand::CancelInput);
        app.execute(AppCommand::Generate);
        assert_eq!(screen_text(&app).matches(PIN_GLYPH).count(), 0);
    }
}
