// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Save status line.
//!
//! Shows the success and error indicators of the editing session, and the
//! last background error if there is one.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const SAVED: &str = " Order saved ";
const NOT_SAVED: &str = " Order not saved, press s to retry ";

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![];

    if let Some(session) = &app.session {
        let indicators = session.indicators();
        if indicators.success {
            spans.push(Span::styled(SAVED, Style::default().fg(theme.background_colour).bg(theme.success_colour).bold()));
        }
        if indicators.error {
            spans.push(Span::styled(NOT_SAVED, Style::default().fg(theme.background_colour).bg(theme.error_colour).bold()));
        }
    }

    if app.loading {
        spans.push(Span::styled(" loading...", Style::default().fg(theme.border_colour)));
    }

    if let Some(message) = &app.status {
        spans.push(Span::styled(format!(" {message}"), Style::default().fg(theme.error_colour)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
