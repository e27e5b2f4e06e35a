use std::sync::Arc;

use chrono::{DateTime, Utc};
use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::Mutex;

use crate::{
    infrastructure::tui::{self, Frame},
    presentation::{
        components::TimelineComponent,
        view::{Body, View},
        widgets::{AlertWidget, TweetWidget},
    },
};

/// Draws a `View` into a frame
#[derive(Debug, Default)]
pub struct Renderer {
    timeline: TimelineComponent,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeline(&self) -> &TimelineComponent {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut TimelineComponent {
        &mut self.timeline
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        view: &View,
    ) -> Result<()> {
        let now = Utc::now();
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut Frame<'_>| self.draw(f, view, now);
        guard.draw(&mut draw)?;
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>, view: &View, now: DateTime<Utc>) {
        let [title_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(frame.area());

        let mut title = vec![Span::styled(view.title, Style::default().bold())];
        if view.back_enabled {
            title.insert(0, Span::styled("< ", Style::default().fg(Color::Cyan)));
        }
        let title_bar = Paragraph::new(Line::from(title).centered())
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title_bar, title_area);

        match &view.body {
            Body::Empty => {}
            Body::Message(message) => {
                let paragraph = Paragraph::new(*message)
                    .style(Style::default().fg(Color::Gray))
                    .alignment(Alignment::Center);
                frame.render_widget(paragraph, body_area);
            }
            Body::Timeline(items) => self.timeline.render(frame, body_area, items, now),
            Body::Detail(item) => {
                frame.render_widget(TweetWidget::new(item, now).detailed(true), body_area);
            }
            Body::InvalidId(id) => {
                let paragraph = Paragraph::new(format!("Invalid tweet id: {id}"))
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center);
                frame.render_widget(paragraph, body_area);
            }
        }

        if let Some(alert) = &view.alert {
            frame.render_widget(AlertWidget::new(alert), frame.area());
        }
    }
}
