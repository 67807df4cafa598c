use super::super::messages::Message;
use super::super::state::{App, NAVBAR_HEIGHT};
use super::bold;
use crate::content::OWNER_NAME;
use crate::layout::Section;
use crate::theme;
use iced::alignment::Vertical;
use iced::widget::{Column, Row, button, column, container, horizontal_space, row, text};
use iced::{Color, Element, Length};

impl App {
    pub(super) fn navbar(&self) -> Element<'_, Message> {
        let brand = button(
            text(OWNER_NAME)
                .size(22)
                .font(bold())
                .color(theme::TEXT_PRIMARY),
        )
        .style(button::text)
        .on_press(Message::NavigateTo(Section::Home));

        let mobile = self.modes.timeline.is_mobile();
        let bar: Element<'_, Message> = if mobile {
            let toggle_label = if self.nav.menu_open { "Close" } else { "Menu" };
            row![
                brand,
                horizontal_space(),
                button(text(toggle_label))
                    .style(button::secondary)
                    .on_press(Message::ToggleMenu),
            ]
            .align_y(Vertical::Center)
            .into()
        } else {
            let links = Row::with_children(
                Section::NAVIGABLE
                    .iter()
                    .map(|&section| self.nav_link(section)),
            )
            .spacing(4);
            row![brand, horizontal_space(), links]
                .align_y(Vertical::Center)
                .into()
        };

        let bar = container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(NAVBAR_HEIGHT))
            .padding([0, 24])
            .align_y(Vertical::Center);

        let mut content = column![bar];
        if mobile && self.nav.menu_open {
            let menu = Column::with_children(
                Section::NAVIGABLE
                    .iter()
                    .map(|&section| self.nav_link(section)),
            )
            .spacing(2)
            .padding([8, 24]);
            content = content.push(menu);
        }

        container(content)
            .width(Length::Fill)
            .style(theme::solid(Color::BLACK))
            .into()
    }

    fn nav_link(&self, section: Section) -> Element<'_, Message> {
        let color = if section == self.nav.current {
            theme::ACCENT
        } else {
            theme::TEXT_SOFT
        };
        button(text(section.label()).size(15).color(color))
            .style(button::text)
            .on_press(Message::NavigateTo(section))
            .into()
    }
}
