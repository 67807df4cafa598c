use super::super::messages::Message;
use super::super::state::App;
use super::{body, bold, heading};
use crate::contact::{Field, Service, SubmissionStatus};
use crate::layout::Section;
use crate::theme;
use iced::alignment::Horizontal;
use iced::widget::{Column, button, column, container, pick_list, row, text, text_input};
use iced::{Color, Element, Length};

const FORM_MAX_WIDTH: f32 = 560.0;

impl App {
    pub(super) fn contact_section(&self) -> Element<'_, Message> {
        let form = &self.contact.form;
        let sending = self.contact.status.is_sending();

        let mut fields = Column::new().spacing(18).width(Length::Fill);
        fields = fields.push(self.text_field(Field::Name, "Name", "Your name"));
        fields = fields.push(self.text_field(Field::Email, "Email", "you@example.com"));

        let service = pick_list(Service::ALL, form.service, Message::ContactServiceSelected)
        .placeholder("Select a service")
        .width(Length::Fill);
        fields = fields.push(self.labelled(Field::Service, "Service", service));

        if form.budget_required() {
            fields = fields.push(self.text_field(Field::Budget, "Budget (USD)", "e.g. 1500"));
        }
        fields = fields.push(self.text_field(
            Field::Idea,
            "Your idea",
            "Tell me about your project",
        ));

        if let Some(message) = self.contact.status.message() {
            fields = fields.push(text(message).size(15).color(status_color(&self.contact.status)));
        }

        let submit_label = if sending { "Sending..." } else { "Send Message" };
        fields = fields.push(
            button(text(submit_label))
                .padding([12, 28])
                .style(button::primary)
                .on_press_maybe((!sending).then_some(Message::SubmitContact)),
        );

        let content = column![
            heading("Let's Connect!"),
            body("Have a project in mind? Send me a message and I'll get back to you."),
            fields,
        ]
        .spacing(24)
        .max_width(FORM_MAX_WIDTH)
        .align_x(Horizontal::Center);

        self.plain_section(Section::Contact, content, theme::PAGE_BACKGROUND)
    }

    fn text_field<'a>(
        &'a self,
        field: Field,
        label: &'a str,
        placeholder: &'a str,
    ) -> Element<'a, Message> {
        let input = text_input(placeholder, self.contact.form.value(field))
            .on_input(move |value| Message::ContactFieldChanged(field, value))
            .padding(10)
            .width(Length::Fill);
        self.labelled(field, label, input)
    }

    /// Label with a required marker, the control, and its error line.
    fn labelled<'a>(
        &self,
        field: Field,
        label: &'a str,
        control: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        let mut group = column![
            row![
                text(label).size(15).font(bold()).color(theme::TEXT_PRIMARY),
                text(" *").size(15).color(theme::ERROR),
            ],
            control.into(),
        ]
        .spacing(6);
        if let Some(error) = self.contact.errors.get(field) {
            group = group.push(text(error).size(13).color(theme::ERROR));
        }
        container(group).width(Length::Fill).into()
    }
}

fn status_color(status: &SubmissionStatus) -> Color {
    match status {
        SubmissionStatus::Idle | SubmissionStatus::Sending => theme::PENDING,
        SubmissionStatus::Succeeded { .. } => theme::SUCCESS,
        SubmissionStatus::Failed { .. } => theme::ERROR,
    }
}
