mod contact;
mod experience;
mod navbar;
mod projects;
mod sections;

use super::messages::Message;
use super::state::{App, BODY_SIZE, HEADING_SIZE, SITE_SCROLL_ID};
use crate::layout::Section;
use crate::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{Column, Space, column, container, scrollable, text};
use iced::{Color, Element, Font, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        if self.intro.is_running() {
            return self.intro_view();
        }

        let site = Column::with_children(
            Section::ALL
                .iter()
                .map(|&section| self.section_view(section)),
        )
        .width(Length::Fill);

        let scroller = scrollable(site)
            .id(SITE_SCROLL_ID.clone())
            .on_scroll(|viewport| {
                Message::Scrolled {
                    offset_y: viewport.absolute_offset().y,
                    viewport_width: viewport.bounds().width,
                }
            })
            .width(Length::Fill)
            .height(Length::Fill);

        container(column![self.navbar(), scroller])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::solid(theme::PAGE_BACKGROUND))
            .into()
    }

    fn section_view(&self, section: Section) -> Element<'_, Message> {
        match section {
            Section::Home => self.hero_section(),
            Section::About => self.about_section(),
            Section::Skills => self.skills_section(),
            Section::Projects => self.projects_section(),
            Section::Experience => self.experience_section(),
            Section::Testimonials => self.testimonials_section(),
            Section::Contact => self.contact_section(),
            Section::Footer => self.footer_section(),
        }
    }

    fn intro_view(&self) -> Element<'_, Message> {
        let content = column![
            text(self.intro.greeting())
                .size(72)
                .font(bold())
                .color(theme::TEXT_PRIMARY),
            text("Press any key to skip")
                .size(14)
                .color(theme::TEXT_MUTED),
        ]
        .spacing(16)
        .align_x(Horizontal::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(theme::solid(Color::BLACK))
            .into()
    }

    /// A fixed-height section with centred content.
    fn plain_section<'a>(
        &self,
        section: Section,
        content: impl Into<Element<'a, Message>>,
        background: Color,
    ) -> Element<'a, Message> {
        container(content)
            .width(Length::Fill)
            .height(Length::Fixed(self.layout.geometry(section).height))
            .padding([48, 24])
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .clip(true)
            .style(theme::solid(background))
            .into()
    }

    /// A scroll scene whose viewport-sized content stays pinned while the
    /// scene scrolls past.
    fn pinned_scene<'a>(
        &self,
        section: Section,
        content: impl Into<Element<'a, Message>>,
        background: Color,
    ) -> Element<'a, Message> {
        let geometry = self.layout.geometry(section);
        let vh = self.layout.viewport_height();
        let pin = geometry.pinned_offset(self.viewport.scroll_y, vh);
        let pinned = container(content)
            .width(Length::Fill)
            .height(Length::Fixed(vh))
            .clip(true);

        container(column![Space::with_height(Length::Fixed(pin)), pinned])
            .width(Length::Fill)
            .height(Length::Fixed(geometry.height))
            .clip(true)
            .style(theme::solid(background))
            .into()
    }
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}

fn heading<'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(HEADING_SIZE)
        .font(bold())
        .color(theme::TEXT_PRIMARY)
        .into()
}

fn body<'a>(content: impl text::IntoFragment<'a>) -> iced::widget::Text<'a> {
    text(content).size(BODY_SIZE).color(theme::TEXT_SOFT)
}
