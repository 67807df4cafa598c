use super::super::messages::Message;
use super::super::state::App;
use super::{body, bold, heading};
use crate::content::{
    ABOUT_PARAGRAPHS, HERO_BLURB, OWNER_NAME, SKILL_GROUPS, SOCIAL_LINKS, SkillGroup, TAGLINE,
    TESTIMONIALS, Testimonial,
};
use crate::layout::Section;
use crate::theme;
use iced::alignment::Horizontal;
use iced::widget::{Column, Row, button, column, container, row, text};
use iced::{Color, Element, Length};

impl App {
    pub(super) fn hero_section(&self) -> Element<'_, Message> {
        let actions = row![
            button(text("View My Work"))
                .padding([12, 24])
                .style(button::primary)
                .on_press(Message::NavigateTo(Section::Projects)),
            button(text("Contact Me"))
                .padding([12, 24])
                .style(button::secondary)
                .on_press(Message::NavigateTo(Section::Contact)),
        ]
        .spacing(16);

        let name_size = if self.modes.timeline.is_mobile() {
            44.0
        } else {
            72.0
        };
        let content = column![
            text(format!("Hi, I'm {OWNER_NAME}"))
                .size(name_size)
                .font(bold())
                .color(theme::TEXT_PRIMARY),
            text(TAGLINE).size(26).color(theme::ACCENT),
            body(HERO_BLURB).align_x(Horizontal::Center),
            actions,
        ]
        .spacing(20)
        .max_width(760)
        .align_x(Horizontal::Center);

        self.plain_section(Section::Home, content, theme::PAGE_BACKGROUND)
    }

    pub(super) fn about_section(&self) -> Element<'_, Message> {
        let paragraphs = Column::with_children(
            ABOUT_PARAGRAPHS
                .iter()
                .map(|paragraph| body(*paragraph).into()),
        )
        .spacing(14);

        let content = column![heading("About Me"), paragraphs]
            .spacing(28)
            .max_width(760)
            .align_x(Horizontal::Center);

        self.plain_section(Section::About, content, theme::SECTION_BACKGROUND)
    }

    pub(super) fn skills_section(&self) -> Element<'_, Message> {
        let cards = SKILL_GROUPS.iter().map(skill_card);
        let grid: Element<'_, Message> = if self.modes.timeline.is_mobile() {
            Column::with_children(cards).spacing(16).into()
        } else {
            Row::with_children(cards).spacing(16).into()
        };

        let content = column![heading("Skills"), grid]
            .spacing(32)
            .max_width(1100)
            .align_x(Horizontal::Center);

        self.plain_section(Section::Skills, content, theme::PAGE_BACKGROUND)
    }

    pub(super) fn testimonials_section(&self) -> Element<'_, Message> {
        let cards = TESTIMONIALS.iter().map(testimonial_card);
        let grid: Element<'_, Message> = if self.modes.timeline.is_mobile() {
            Column::with_children(cards).spacing(16).into()
        } else {
            Row::with_children(cards).spacing(16).into()
        };

        let content = column![heading("Testimonials"), grid]
            .spacing(32)
            .max_width(1100)
            .align_x(Horizontal::Center);

        self.plain_section(Section::Testimonials, content, theme::SECTION_BACKGROUND)
    }

    pub(super) fn footer_section(&self) -> Element<'_, Message> {
        let links = Row::with_children(SOCIAL_LINKS.iter().map(|link| {
            button(text(link.label))
                .style(button::text)
                .on_press(Message::OpenLink(link.url.to_string()))
                .into()
        }))
        .spacing(12);

        let content = column![
            text(OWNER_NAME)
                .size(22)
                .font(bold())
                .color(theme::TEXT_PRIMARY),
            links,
            text(format!("© {OWNER_NAME}. All rights reserved."))
                .size(13)
                .color(theme::TEXT_MUTED),
        ]
        .spacing(10)
        .align_x(Horizontal::Center);

        self.plain_section(Section::Footer, content, Color::BLACK)
    }
}

fn skill_card(group: &'static SkillGroup) -> Element<'static, Message> {
    let skills = Column::with_children(
        group
            .skills
            .iter()
            .map(|skill| text(*skill).size(15).color(theme::TEXT_SOFT).into()),
    )
    .spacing(6);

    container(
        column![
            text(group.title)
                .size(20)
                .font(bold())
                .color(theme::TEXT_PRIMARY),
            skills
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::card(1.0))
    .into()
}

fn testimonial_card(testimonial: &'static Testimonial) -> Element<'static, Message> {
    container(
        column![
            text(format!("“{}”", testimonial.quote))
                .size(16)
                .color(theme::TEXT_SOFT),
            text(testimonial.author)
                .size(15)
                .font(bold())
                .color(theme::TEXT_PRIMARY),
            text(testimonial.role).size(13).color(theme::TEXT_MUTED),
        ]
        .spacing(10),
    )
    .padding(24)
    .width(Length::Fill)
    .style(theme::card(1.0))
    .into()
}
