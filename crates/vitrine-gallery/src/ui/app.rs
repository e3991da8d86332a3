//! Main iced application for the vitrine gallery viewer
//!
//! Manages the display-mode toggle, the three carousel states, and the
//! subscriptions driving auto-play and transition animation.

use iced::time;
use iced::widget::{button, column, container, scrollable, text, Space};
use iced::{Center, Element, Fill, Length, Subscription, Task, Theme};

use vitrine_core::{DisplayMode, Gallery, SlideSet};
use vitrine_widgets::{
    arrow_carousel, button_styles, drag_carousel, fade_carousel, theme as widget_theme,
    ArrowMessage, ArrowState, DragMessage, DragState, FadeMessage, FadeState, SlideImages,
    TICK_INTERVAL,
};

use super::handlers;
use super::theme;
use crate::config::GalleryConfig;
use crate::images;

/// Messages that can be dispatched in the gallery application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick driving transition animation
    Tick,
    /// Arrow carousel controls
    Arrow(ArrowMessage),
    /// Drag carousel gestures
    Drag(DragMessage),
    /// Fade carousel controls and timers
    Fade(FadeMessage),
    /// Swap between image and swatch rendering
    ToggleDisplayMode,
}

/// The mounted carousels and their shared slide projection.
///
/// Absent when the gallery yields no slides; the shell then renders an
/// empty-state placeholder instead of widgets, so no carousel ever
/// observes an empty list.
pub(crate) struct Stage {
    pub slides: SlideSet,
    pub images: SlideImages,
    pub arrow: ArrowState,
    pub drag: DragState,
    pub fade: FadeState,
}

/// Application state
pub struct GalleryApp {
    gallery: Gallery,
    display_mode: DisplayMode,
    stage: Option<Stage>,
}

impl GalleryApp {
    /// Create the application from loaded config and gallery.
    pub fn new(config: GalleryConfig, gallery: Gallery) -> Self {
        let display_mode = config.display.start_mode;

        let stage = match gallery.slides(display_mode) {
            Ok(slides) => {
                let images = images::load_slide_images(&gallery, &config.gallery_path);
                let len = slides.len();
                Some(Stage {
                    slides,
                    images,
                    arrow: ArrowState::new(len),
                    drag: DragState::new(len),
                    fade: FadeState::new(len, config.display.auto_play_interval()),
                })
            }
            Err(e) => {
                log::warn!("No slides to present: {}", e);
                None
            }
        };

        Self {
            gallery,
            display_mode,
            stage,
        }
    }

    pub(crate) fn stage_mut(&mut self) -> Option<&mut Stage> {
        self.stage.as_mut()
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => handlers::tick::handle(self),
            Message::Arrow(msg) => handlers::arrow::handle(self, msg),
            Message::Drag(msg) => handlers::drag::handle(self, msg),
            Message::Fade(msg) => handlers::fade::handle(self, msg),
            Message::ToggleDisplayMode => {
                self.toggle_display_mode();
                Task::none()
            }
        }
    }

    /// Swap the projected visual variant. Navigation indices survive the
    /// swap; both projections share length and order.
    fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggle();

        if let Some(stage) = &mut self.stage {
            match self.gallery.slides(self.display_mode) {
                Ok(slides) => stage.slides = slides,
                Err(e) => log::warn!("Display mode switch failed: {}", e),
            }
        }

        log::info!("Display mode: {}", self.display_mode.label());
    }

    /// Subscriptions: the auto-play timer, plus a frame tick only while a
    /// transition is running. Subscription identity follows the interval,
    /// so changing it cancels and reschedules the timer.
    pub fn subscription(&self) -> Subscription<Message> {
        let Some(stage) = &self.stage else {
            return Subscription::none();
        };

        let mut subscriptions = vec![time::every(stage.fade.auto_play_interval())
            .map(|_| Message::Fade(FadeMessage::AutoPlay))];

        if stage.arrow.is_animating() || stage.drag.is_animating() || stage.fade.is_animating() {
            subscriptions.push(time::every(TICK_INTERVAL).map(|_| Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let content = match &self.stage {
            Some(stage) => self.view_sections(stage),
            None => self.view_empty(),
        };

        container(scrollable(content))
            .width(Fill)
            .height(Fill)
            .style(|_| container::Style {
                background: Some(theme::background().into()),
                ..Default::default()
            })
            .into()
    }

    fn view_sections<'a>(&'a self, stage: &'a Stage) -> Element<'a, Message> {
        let accent = theme::accent();

        let arrow = section(
            "1. Arrow Navigation Carousel",
            "Previous/next arrows, pagination dots, and smooth sliding transitions",
            arrow_carousel(&stage.arrow, &stage.slides, &stage.images, Message::Arrow),
        );

        let drag = section(
            "2. Drag & Swipe Carousel",
            "Mouse drag and touch swipe interactions with a release threshold",
            drag_carousel(
                &stage.drag,
                &stage.slides,
                &stage.images,
                accent,
                Message::Drag,
            ),
        );

        let fade = section(
            "3. Fade Transition Carousel",
            "Auto-play, fade transitions, and manual navigation",
            fade_carousel(
                &stage.fade,
                &stage.slides,
                &stage.images,
                accent,
                Message::Fade,
            ),
        );

        let body = column![self.view_header(), arrow, drag, fade]
            .spacing(48)
            .max_width(980);

        container(body)
            .width(Fill)
            .align_x(Center)
            .padding([28, 24])
            .into()
    }

    /// Page header: title, subtitle, and the display-mode toggle.
    fn view_header(&self) -> Element<'_, Message> {
        let accent = theme::accent();

        let toggle_label = match self.display_mode {
            DisplayMode::Images => "Show Color Version",
            DisplayMode::Swatches => "Show Images",
        };

        let toggle = button(text(toggle_label).size(15))
            .padding([9, 20])
            .style(move |_, status| button_styles::toggle_style(status, accent))
            .on_press(Message::ToggleDisplayMode);

        column![
            text("Vitrine Gallery")
                .size(34)
                .color(widget_theme::TEXT_PRIMARY),
            text("Three carousel widgets over one slide collection")
                .size(16)
                .color(widget_theme::TEXT_DIMMED),
            Space::new().height(Length::Fixed(6.0)),
            toggle,
            text(format!("Current: {}", self.display_mode.label()))
                .size(13)
                .color(widget_theme::TEXT_DIMMED),
        ]
        .spacing(8)
        .align_x(Center)
        .width(Fill)
        .into()
    }

    fn view_empty(&self) -> Element<'_, Message> {
        container(
            column![
                text("No slides to display")
                    .size(24)
                    .color(widget_theme::TEXT_PRIMARY),
                text("Add entries to gallery.yaml in the gallery directory")
                    .size(14)
                    .color(widget_theme::TEXT_DIMMED),
            ]
            .spacing(10)
            .align_x(Center),
        )
        .width(Fill)
        .height(Length::Fixed(400.0))
        .align_x(Center)
        .align_y(Center)
        .into()
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// One labelled page section wrapping a carousel.
fn section<'a>(title: &'a str, blurb: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    column![
        text(title).size(24).color(widget_theme::TEXT_PRIMARY),
        text(blurb).size(14).color(widget_theme::TEXT_DIMMED),
        Space::new().height(Length::Fixed(4.0)),
        body,
    ]
    .spacing(8)
    .align_x(Center)
    .width(Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn app() -> GalleryApp {
        let config = GalleryConfig {
            gallery_path: PathBuf::from("/nonexistent/vitrine-test"),
            ..GalleryConfig::default()
        };
        GalleryApp::new(config, Gallery::builtin())
    }

    #[test]
    fn test_toggle_preserves_navigation_state() {
        let mut app = app();
        let _ = app.update(Message::Arrow(ArrowMessage::Next));
        let _ = app.update(Message::Drag(DragMessage::GestureStarted(500.0)));
        let _ = app.update(Message::Drag(DragMessage::GestureMoved(200.0)));
        let _ = app.update(Message::Drag(DragMessage::GestureEnded(1000.0)));

        let _ = app.update(Message::ToggleDisplayMode);
        assert_eq!(app.display_mode, DisplayMode::Swatches);

        // Only the projected visuals change; every index survives the swap.
        let stage = app.stage.as_ref().unwrap();
        assert_eq!(stage.arrow.current(), 1);
        assert_eq!(stage.drag.current(), 1, "the 300px drag crossed the threshold");
        assert_eq!(stage.fade.current(), 0);
        assert!(matches!(
            stage.slides.get(0).unwrap().visual,
            vitrine_core::Visual::Swatch { .. }
        ));
        assert_eq!(stage.slides.get(0).unwrap().title, "Luxury Sports Car");
    }

    #[test]
    fn test_concrete_navigation_scenario() {
        // Five slides: previous wraps to 4, two nexts land back on 1.
        let mut app = app();
        let _ = app.update(Message::Arrow(ArrowMessage::Previous));
        assert_eq!(app.stage.as_ref().unwrap().arrow.current(), 4);
        let _ = app.update(Message::Arrow(ArrowMessage::Next));
        let _ = app.update(Message::Arrow(ArrowMessage::Next));
        assert_eq!(app.stage.as_ref().unwrap().arrow.current(), 1);
    }
}
