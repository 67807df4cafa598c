use super::super::messages::Message;
use super::super::state::{App, SHOWCASE_IMAGE_FRACTION};
use super::{bold, heading};
use crate::content::{PROJECTS, Project};
use crate::layout::Section;
use crate::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, text};
use iced::{Color, ContentFit, Element, Length};
use std::path::Path;

const SHOWCASE_MAX_WIDTH: f32 = 1200.0;

impl App {
    pub(super) fn projects_section(&self) -> Element<'_, Message> {
        let Some(project) = PROJECTS.get(self.scenes.active_project.current()) else {
            return self.plain_section(Section::Projects, heading("My Work"), Color::BLACK);
        };
        let mobile = self.modes.showcase.is_mobile();
        let background = theme::color_from_hex(project.background).unwrap_or(Color::BLACK);
        let (title_align, title_size) = if mobile {
            (Horizontal::Center, 28.0)
        } else {
            (Horizontal::Left, 36.0)
        };

        let title = container(
            text(project.title)
                .size(title_size)
                .font(bold())
                .color(theme::TEXT_PRIMARY),
        )
        .width(Length::Fill)
        .align_x(title_align);

        let media_height = self.layout.viewport_height() * SHOWCASE_IMAGE_FRACTION;
        let content = column![
            heading("My Work"),
            title,
            showcase_media(project, mobile, media_height),
            button(text("View Project"))
                .padding([12, 28])
                .style(button::primary)
                .on_press(Message::OpenLink(project.link.to_string())),
        ]
        .spacing(20)
        .padding([32, 24])
        .max_width(SHOWCASE_MAX_WIDTH)
        .align_x(Horizontal::Center);

        let centred = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        self.pinned_scene(Section::Projects, centred, background)
    }
}

/// Project screenshot, or a titled placeholder when the asset is absent.
fn showcase_media(project: &'static Project, mobile: bool, height: f32) -> Element<'static, Message> {
    let path = project.image(mobile);
    if Path::new(path).is_file() {
        return container(
            image(Handle::from_path(path))
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .into();
    }

    container(text(project.title).size(48).font(bold()).color(theme::TEXT_MUTED))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(theme::card(1.0))
        .into()
}
