//! Terminal rendering of the shell.
//!
//! Everything the shell stores is in logical units; drawing converts each
//! rectangle to the cells whose centers it covers and clips the result to
//! the frame, so partially off-screen windows never write outside the
//! buffer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::content::{ContentContext, ContentKind};
use crate::drivers::pointer::{area_to_cells, logical_to_cells};
use crate::layout::float_rect_visible;
use crate::layout::floating::{
    HEADER_BUTTONS, HeaderAction, header_button_rect, resize_grip_for, title_bar_for,
};
use crate::notifications::NotificationCenter;
use crate::overlay::{dock_slot_rect, panel_button_rect};
use crate::shell::Shell;
use crate::theme::Palette;
use crate::window::{FloatRect, WindowId};

/// Launchers in the dock, top to bottom.
pub const DOCK_ITEMS: [ContentKind; 4] = ContentKind::ALL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelButton {
    Theme,
    Launch(ContentKind),
}

impl PanelButton {
    fn label(self) -> &'static str {
        match self {
            PanelButton::Theme => "≡",
            PanelButton::Launch(kind) => &kind.label()[..1],
        }
    }
}

/// Panel buttons, left to right.
pub const PANEL_BUTTONS: [PanelButton; 3] = [
    PanelButton::Theme,
    PanelButton::Launch(ContentKind::Terminal),
    PanelButton::Launch(ContentKind::Browser),
];

fn cells_in(area: Rect, rect: FloatRect) -> Rect {
    float_rect_visible(logical_to_cells(rect), area)
}

fn first_row(rect: Rect) -> Rect {
    Rect {
        height: rect.height.min(1),
        ..rect
    }
}

/// Host-owned state shown in the overlays.
#[derive(Debug, Clone, Copy)]
pub struct Status<'a> {
    pub notifications: &'a NotificationCenter,
    /// Wall-clock label for the panel, e.g. `14:05:09`.
    pub clock: &'a str,
}

pub fn draw(frame: &mut Frame<'_>, shell: &mut Shell, palette: &Palette, status: &Status<'_>) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.desktop_bg())),
        area,
    );
    let focused = shell.focused();
    let stack: Vec<WindowId> = shell.workspaces().active_container().windows().to_vec();
    for id in stack {
        draw_window(frame, area, shell, id, focused == Some(id), palette);
    }
    draw_panel(frame, area, shell, palette, status.clock);
    draw_dock(frame, area, shell, palette);
    draw_tray(frame, area, shell, palette, status.notifications);
}

fn draw_window(
    frame: &mut Frame<'_>,
    area: Rect,
    shell: &mut Shell,
    id: WindowId,
    focused: bool,
    palette: &Palette,
) {
    let Ok(window) = shell.window_mut(id) else {
        return;
    };
    if window.is_minimized() {
        return;
    }
    let bounds = window.bounds();
    let cells = logical_to_cells(bounds);
    let visible = float_rect_visible(cells, area);
    if visible.width == 0 || visible.height == 0 {
        return;
    }
    frame.render_widget(Clear, visible);

    let header_style = Style::default()
        .bg(palette.header_bg(focused))
        .fg(palette.header_fg());
    let bar = logical_to_cells(title_bar_for(bounds));
    let header = float_rect_visible(bar, area);
    frame.render_widget(
        Paragraph::new(format!(" {}", window.title())).style(header_style),
        header,
    );
    for action in HEADER_BUTTONS {
        let Some(button) = header_button_rect(bounds, action) else {
            continue;
        };
        let label = match action {
            HeaderAction::Minimize => "_",
            HeaderAction::Maximize => "□",
            HeaderAction::Close | HeaderAction::Drag => "x",
        };
        let rect = first_row(cells_in(area, button));
        frame.render_widget(
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(header_style.add_modifier(Modifier::BOLD)),
            rect,
        );
    }

    let body_cells = FloatRect::new(
        cells.x,
        bar.bottom(),
        cells.width,
        (cells.bottom() - bar.bottom()).max(0) as u16,
    );
    let body = float_rect_visible(body_cells, area);
    let border_style = Style::default().fg(palette.border(focused));
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(border_style);
    let inner = block.inner(body);
    frame.render_widget(block, body);
    let ctx = ContentContext::new(focused);
    window.content_mut().render(frame, inner, &ctx);

    let grip = cells_in(area, resize_grip_for(bounds));
    frame.render_widget(
        Paragraph::new("◢")
            .alignment(Alignment::Right)
            .style(border_style),
        first_row(grip),
    );
}

fn draw_panel(frame: &mut Frame<'_>, area: Rect, shell: &Shell, palette: &Palette, clock: &str) {
    let overlays = shell.overlays();
    let rect = float_rect_visible(area_to_cells(overlays.panel), area);
    let style = Style::default().bg(palette.panel_bg()).fg(palette.panel_fg());
    frame.render_widget(Block::default().style(style), rect);

    for (i, button) in PANEL_BUTTONS.iter().enumerate() {
        let logical = panel_button_rect(&overlays, i);
        frame.render_widget(
            Paragraph::new(button.label())
                .alignment(Alignment::Center)
                .style(style.add_modifier(Modifier::BOLD)),
            first_row(cells_in(area, logical)),
        );
    }

    let workspaces = shell.workspaces();
    let mut spans: Vec<Span> = (0..workspaces.count())
        .map(|i| {
            let label = format!(" {} ", i + 1);
            if i == workspaces.active() {
                Span::styled(label, Style::default().bg(palette.accent()).fg(palette.panel_fg()))
            } else {
                Span::raw(label)
            }
        })
        .collect();
    if let Some(title) = shell.focused().and_then(|id| shell.window(id).ok()).map(|w| w.title()) {
        spans.push(Span::raw(format!(" │ {title} ")));
    }
    if !clock.is_empty() {
        spans.push(Span::styled(
            format!(" │ {clock} "),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    let status_row = Rect {
        y: rect.y + rect.height / 2,
        ..first_row(rect)
    };
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Right)
            .style(style),
        status_row,
    );
}

fn draw_dock(frame: &mut Frame<'_>, area: Rect, shell: &Shell, palette: &Palette) {
    let overlays = shell.overlays();
    let dock = overlays.dock;
    let rect = float_rect_visible(area_to_cells(dock), area);
    let style = Style::default().bg(palette.dock_bg()).fg(palette.panel_fg());
    frame.render_widget(Block::default().style(style), rect);
    for (i, kind) in DOCK_ITEMS.iter().enumerate() {
        let logical = dock_slot_rect(&overlays, i);
        if logical.bottom() > dock.y as i32 + dock.height as i32 {
            break;
        }
        let icon = cells_in(area, logical);
        let label_row = Rect {
            y: icon.y + icon.height / 2,
            ..first_row(icon)
        };
        frame.render_widget(
            Paragraph::new(&kind.label()[..1])
                .alignment(Alignment::Center)
                .style(style.add_modifier(Modifier::BOLD)),
            label_row,
        );
    }
}

fn draw_tray(
    frame: &mut Frame<'_>,
    area: Rect,
    shell: &Shell,
    palette: &Palette,
    notifications: &NotificationCenter,
) {
    if notifications.is_empty() {
        return;
    }
    let rect = float_rect_visible(area_to_cells(shell.overlays().tray), area);
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let style = Style::default().bg(palette.panel_bg()).fg(palette.panel_fg());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Notifications ")
        .border_style(Style::default().fg(palette.accent()))
        .style(style);
    let mut lines = Vec::new();
    for n in notifications.iter() {
        lines.push(Line::styled(n.title.clone(), Style::default().add_modifier(Modifier::BOLD)));
        if !n.body.is_empty() {
            lines.push(Line::raw(n.body.clone()));
        }
    }
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::pointer::display_size;
    use crate::overlay::OverlayMetrics;
    use crate::theme::ThemeName;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Size;
    use ratatui::style::Color;
    use std::time::{Duration, Instant};

    fn render(shell: &mut Shell, notifications: &NotificationCenter) -> Buffer {
        render_at(shell, notifications, "")
    }

    fn render_at(shell: &mut Shell, notifications: &NotificationCenter, clock: &str) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let palette = ThemeName::Dark.palette();
        let status = Status {
            notifications,
            clock,
        };
        terminal
            .draw(|f| draw(f, shell, &palette, &status))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    fn shell() -> Shell {
        Shell::new(
            4,
            OverlayMetrics::default(),
            display_size(Size::new(80, 30)),
        )
    }

    #[test]
    fn focused_header_uses_accent() {
        let mut s = shell();
        let id = s.launch(ContentKind::Terminal, None).unwrap();
        s.set_window_bounds(id, FloatRect::new(200, 160, 320, 200))
            .unwrap();
        let buf = render(&mut s, &NotificationCenter::new());
        // (200, 160) logical is cell (25, 10)
        let cell = buf.cell((26, 10)).unwrap();
        assert_eq!(cell.bg, Color::Rgb(0x00, 0xaa, 0xff));
        assert_eq!(cell.symbol(), "T");
    }

    #[test]
    fn minimized_window_is_not_drawn() {
        let mut s = shell();
        let id = s.launch(ContentKind::Editor, None).unwrap();
        s.minimize(id).unwrap();
        let buf = render(&mut s, &NotificationCenter::new());
        assert_eq!(buf.cell((20, 10)).unwrap().bg, Color::Rgb(0x0b, 0x12, 0x20));
    }

    #[test]
    fn dock_shows_launcher_initials() {
        let mut s = shell();
        let buf = render(&mut s, &NotificationCenter::new());
        let overlays = s.overlays();
        for (slot, kind) in DOCK_ITEMS.iter().enumerate() {
            let icon = logical_to_cells(dock_slot_rect(&overlays, slot));
            let row = (icon.y + icon.height as i32 / 2) as u16;
            let label: String = (icon.x..icon.right())
                .map(|x| buf.cell((x as u16, row)).unwrap().symbol().to_string())
                .collect();
            assert_eq!(label.trim(), &kind.label()[..1], "slot {slot}");
        }
    }

    #[test]
    fn tray_appears_with_notifications() {
        let mut s = shell();
        let mut center = NotificationCenter::new();
        center.push("Workspace", "Switched to 2", Duration::from_secs(1), Instant::now());
        let buf = render(&mut s, &center);
        assert!(row_text(&buf, 4).contains("Workspace"));
    }

    #[test]
    fn panel_shows_clock_after_focused_title() {
        let mut s = shell();
        s.launch(ContentKind::Files, None).unwrap();
        let buf = render_at(&mut s, &NotificationCenter::new(), "14:05:09");
        let panel = float_rect_visible(area_to_cells(s.overlays().panel), buf.area);
        let row = row_text(&buf, panel.y + panel.height / 2);
        let title = row.find("Files").expect("focused title in panel");
        let clock = row.find("14:05:09").expect("clock in panel");
        assert!(clock > title);
        assert!(row.trim_end().ends_with("14:05:09"));
    }
}
