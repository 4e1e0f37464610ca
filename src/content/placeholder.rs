use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use super::{Content, ContentContext, ContentKind};

/// Stand-in content for each launchable kind. Process I/O, file dialogs and
/// page loading live outside the shell, so these only show what a real
/// element would host.
#[derive(Debug, Clone)]
pub struct PlaceholderContent {
    kind: ContentKind,
    mounted: bool,
}

impl PlaceholderContent {
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            mounted: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn lines(&self) -> &'static [&'static str] {
        match self.kind {
            ContentKind::Terminal => &["$ _", "", "Enter command and press Enter"],
            ContentKind::Editor => &["New internal window", "", "[Open] [Save] [Clear]"],
            ContentKind::Browser => &["https://duckduckgo.com", "", "(page view)"],
            ContentKind::Files => &["~/", "", "(file list)"],
        }
    }
}

impl Content for PlaceholderContent {
    fn title(&self) -> &str {
        self.kind.label()
    }

    fn kind(&self) -> Option<ContentKind> {
        Some(self.kind)
    }

    fn mount(&mut self, _ctx: &ContentContext) {
        self.mounted = true;
    }

    fn unmount(&mut self) {
        self.mounted = false;
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect, ctx: &ContentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = if ctx.focused() {
            Style::default()
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let lines: Vec<Line> = self.lines().iter().map(|l| Line::raw(*l)).collect();
        let paragraph = Paragraph::new(lines)
            .style(style)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_and_unmount_toggle_state() {
        let mut c = PlaceholderContent::new(ContentKind::Terminal);
        assert!(!c.is_mounted());
        c.mount(&ContentContext::new(true));
        assert!(c.is_mounted());
        c.unmount();
        assert!(!c.is_mounted());
    }
}
